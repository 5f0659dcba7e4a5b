use anyhow::Result;
use dakota_content::app::star_glyphs;
use dakota_content::app::render_sections;
use dakota_content::{
    render_page, retry_failed_sections, section_view, ContentQueries, QueryClient, Rating,
    SectionView, ServiceIcon, WordPressClient,
};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_star_glyphs_for_each_rating() {
    for value in 1..=5 {
        let rating = Rating::new(value).expect("rating in range");
        assert_eq!(star_glyphs(rating).chars().count(), value as usize);
    }
}

#[test]
fn test_out_of_range_ratings_are_rejected() {
    assert!(Rating::new(0).is_err());
    assert!(Rating::new(6).is_err());
    assert_eq!(Rating::clamped(6).value(), 5);
}

#[test]
fn test_icon_mapping_is_closed() {
    let names = ["Globe", "Search", "TrendingUp", "Smartphone", "Users", "Zap"];
    for name in names {
        assert_eq!(ServiceIcon::from_name(name).name(), name);
    }
    assert_eq!(ServiceIcon::from_name("Rocket"), ServiceIcon::Globe);
}

#[tokio::test]
async fn test_page_renders_every_section() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/pages");
        then.status(200).json_body(json!([{
            "id": 1,
            "acf": {
                "hero_headline": "Get More <span>Local</span> Customers",
                "services": [{"title": "Booking Sites", "icon": "Rocket", "features": ["Calendars"]}]
            }
        }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/portfolio");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/testimonials");
        then.status(200).json_body(json!([
            {"id": 3, "acf": {"content": "Five stars", "author": "Lee", "rating": 6}}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/wp-json/acf/v3/options");
        then.status(200).json_body(json!({"site_title": "Dakota Digital Design"}));
    });

    let client = WordPressClient::with_client(reqwest::Client::new(), &server.base_url(), 1);
    let queries = ContentQueries::new(Arc::new(client), Arc::new(QueryClient::default()));
    let page = render_page(&queries).await;

    assert!(page.contains("== Get More Local Customers =="));
    assert!(page.contains("🌐 Booking Sites"));
    assert!(page.contains("Valley City Restaurant"));
    assert!(page.contains("★★★★★\n\"Five stars\""));
    assert!(page.contains("dakotadesigndigital@gmail.com"));
    assert!(page.contains("-- Dakota Digital Design --"));
    assert!(!queries.any_loading());

    let hero = queries.hero();
    let state = hero.state();
    assert!(matches!(section_view(&hero, &state), SectionView::Content(_)));

    Ok(())
}

#[tokio::test]
async fn test_failed_section_renders_error_branch() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/pages");
        then.status(503);
    });
    server.mock(|when, then| {
        when.method(GET).path("/wp-json/acf/v3/options");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/portfolio");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/testimonials");
        then.status(200).json_body(json!([]));
    });

    let client = WordPressClient::with_client(reqwest::Client::new(), &server.base_url(), 1);
    let queries = ContentQueries::new(Arc::new(client), Arc::new(QueryClient::default()));
    let page = render_page(&queries).await;

    assert!(page.contains("== Hero ==\nCould not load this section"));
    assert!(page.contains("-- Dakota Digital Design --"));
    assert_eq!(queries.any_errors().map(|e| e.len()), Some(4));

    Ok(())
}

#[tokio::test]
async fn test_error_view_retry_recovers_against_backend() -> Result<()> {
    let server = MockServer::start();

    let mut failing = server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/pages");
        then.status(503);
    });

    let client = WordPressClient::with_client(reqwest::Client::new(), &server.base_url(), 1);
    let queries = ContentQueries::new(Arc::new(client), Arc::new(QueryClient::default()));
    let hero = queries.hero();
    let failed = hero.load().await;

    let SectionView::Error { retry, .. } = section_view(&hero, &failed) else {
        panic!("expected the error view");
    };
    failing.delete();
    let recovered = server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/pages");
        then.status(200)
            .json_body(json!([{"id": 1, "acf": {"hero_headline": "Back Online"}}]));
    });

    let state = retry.run().await;
    recovered.assert_hits(1);
    match section_view(&hero, &state) {
        SectionView::Content(content) => assert_eq!(content.headline, "Back Online"),
        other => panic!("expected content after retry, got {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_retry_failed_sections_rerenders_page() -> Result<()> {
    let server = MockServer::start();

    let mut failing = server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/pages");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/wp-json/acf/v3/options");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/portfolio");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/testimonials");
        then.status(200).json_body(json!([]));
    });

    let client = WordPressClient::with_client(reqwest::Client::new(), &server.base_url(), 1);
    let queries = ContentQueries::new(Arc::new(client), Arc::new(QueryClient::default()));
    assert!(render_page(&queries).await.contains("[Try Again: heroData]"));

    failing.delete();
    server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/pages");
        then.status(200).json_body(json!([]));
    });

    assert_eq!(retry_failed_sections(&queries).await, 4);
    let page = render_sections(&queries);
    assert!(!page.contains("Could not load this section"));
    assert!(page.contains("== Get More Local Customers with a Professional Website =="));
    assert!(queries.any_errors().is_none());

    Ok(())
}
