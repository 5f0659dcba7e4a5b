use crate::app::sections::{section_view, star_glyphs, SectionView, ServiceIcon};
use crate::core::hooks::{ContentQueries, Query, SectionQuery};
use crate::domain::model::{
    ContactContent, CtaBlock, HeroContent, PortfolioCatalog, ServiceCatalog, SiteSettings,
};
use regex::Regex;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

/// Rich-text fields may carry HTML; the terminal gets the text only.
pub fn strip_tags(text: &str) -> String {
    tag_pattern().replace_all(text, "").trim().to_string()
}

/// 每一行都以換行結尾
fn block(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders one section's content.
pub trait SectionRenderer<T> {
    fn render(&self, content: &T) -> String;
}

/// Plain-text renderer used by the `page` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Applies the loading / error / content branch to the query's current state.
    pub fn render_state<T>(&self, heading: &str, query: &Query<T>) -> String
    where
        T: SectionQuery,
        Self: SectionRenderer<T>,
    {
        let state = query.state();
        match section_view(query, &state) {
            SectionView::Loading => format!("== {} ==\nLoading...\n", heading),
            SectionView::Error { message, retry } => format!(
                "== {} ==\nCould not load this section: {}\n[Try Again: {}]\n",
                heading,
                message,
                retry.key()
            ),
            SectionView::Content(content) => SectionRenderer::<T>::render(self, content),
            SectionView::Empty => String::new(),
        }
    }

    fn cta(&self, lines: &mut Vec<String>, cta: &CtaBlock) {
        lines.push(String::new());
        lines.push(cta.title.clone());
        lines.push(cta.description.clone());
        lines.push(format!(
            "[{}]  [{}: {}]",
            cta.primary_text, cta.secondary_text, cta.phone
        ));
    }
}

impl SectionRenderer<HeroContent> for TextRenderer {
    fn render(&self, hero: &HeroContent) -> String {
        let mut lines = vec![
            format!("== {} ==", strip_tags(&hero.headline)),
            hero.subheadline.clone(),
            strip_tags(&hero.description),
            format!("[{}]  [{}]", hero.cta_primary_text, hero.cta_secondary_text),
            hero.trust_indicators.join(" · "),
            format!(
                "{} ({:.1}/5, {}+ businesses served)",
                hero.social_proof_text, hero.client_rating, hero.businesses_served
            ),
            String::new(),
            hero.card.title.clone(),
            hero.card.description.clone(),
        ];
        lines.extend(hero.card.features.iter().map(|f| format!("  ✓ {}", f)));
        block(lines)
    }
}

impl SectionRenderer<ServiceCatalog> for TextRenderer {
    fn render(&self, catalog: &ServiceCatalog) -> String {
        let mut lines = vec![
            format!("== {} ==", catalog.section_title),
            catalog.section_description.clone(),
            String::new(),
        ];
        for service in &catalog.services {
            let icon = ServiceIcon::from_name(&service.icon);
            lines.push(format!("{} {}", icon.glyph(), service.title));
            if !service.description.is_empty() {
                lines.push(format!("   {}", service.description));
            }
            lines.extend(service.features.iter().map(|f| format!("   • {}", f)));
        }
        self.cta(&mut lines, &catalog.cta);
        block(lines)
    }
}

impl SectionRenderer<PortfolioCatalog> for TextRenderer {
    fn render(&self, catalog: &PortfolioCatalog) -> String {
        let mut lines = vec![
            format!("== {} ==", catalog.section_title),
            catalog.section_description.clone(),
            String::new(),
        ];
        for project in &catalog.projects {
            lines.push(format!("{} ({})", project.title, project.category));
            if !project.description.is_empty() {
                lines.push(format!("   {}", project.description));
            }
            if !project.results.is_empty() {
                lines.push(format!("   📊 {}", project.results));
            }
            if let Some(url) = &project.live_url {
                lines.push(format!("   {}", url));
            }
        }
        if !catalog.testimonials.is_empty() {
            lines.push(String::new());
        }
        for testimonial in &catalog.testimonials {
            lines.push(star_glyphs(testimonial.rating));
            lines.push(format!("\"{}\"", strip_tags(&testimonial.content)));
            lines.push(format!("  - {}", testimonial.author));
        }
        self.cta(&mut lines, &catalog.cta);
        block(lines)
    }
}

impl SectionRenderer<ContactContent> for TextRenderer {
    fn render(&self, contact: &ContactContent) -> String {
        let info = &contact.contact_info;
        let mut lines = vec![
            format!("== {} ==", contact.section_title),
            contact.section_description.clone(),
            String::new(),
            format!("Phone:    {} ({})", info.phone, info.phone_description),
            format!("Email:    {} ({})", info.email, info.email_description),
            format!("Location: {} ({})", info.location, info.location_description),
        ];
        lines.extend(contact.trust_indicators.iter().map(|t| format!("  ✓ {}", t)));
        lines.push(String::new());
        lines.push(contact.form_title.clone());
        lines.push(contact.form_description.clone());
        block(lines)
    }
}

impl SectionRenderer<SiteSettings> for TextRenderer {
    fn render(&self, site: &SiteSettings) -> String {
        block(vec![
            format!("-- {} --", site.site_title),
            site.site_description.clone(),
            format!("{} | {}", site.contact_phone, site.contact_email),
        ])
    }
}

/// Loads every section and renders the whole page, footer last.
pub async fn render_page(queries: &ContentQueries) -> String {
    queries.prefetch_all().await;
    render_sections(queries)
}

/// Renders whatever the cache currently holds without fetching.
pub fn render_sections(queries: &ContentQueries) -> String {
    let renderer = TextRenderer;

    [
        renderer.render_state("Hero", &queries.hero()),
        renderer.render_state("Services", &queries.services()),
        renderer.render_state("Portfolio", &queries.portfolio()),
        renderer.render_state("Contact", &queries.contact()),
        renderer.render_state("Footer", &queries.site_settings()),
    ]
    .into_iter()
    .filter(|section| !section.is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query_cache::QueryClient;
    use crate::core::test_support::FakeSource;
    use crate::domain::model::{Rating, Testimonial};
    use std::sync::Arc;

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("Get More <span class=\"text-primary\">Local</span> Customers"),
            "Get More Local Customers"
        );
        assert_eq!(strip_tags("<p>plain</p>\n"), "plain");
    }

    #[test]
    fn test_hero_renders_fallback_copy() {
        let text = TextRenderer.render(&HeroContent::default());
        assert!(text.contains("Get More Local Customers with a Professional Website"));
        assert!(text.contains("Valley City Based"));
        assert!(text.contains("4.9/5"));
    }

    #[test]
    fn test_services_use_icon_glyphs() {
        let text = TextRenderer.render(&ServiceCatalog::default());
        assert!(text.contains("🌐 Professional Website Design"));
        assert!(text.contains("⚡ Fast Turnaround"));
        assert!(text.contains("(701) 840-9830"));
    }

    #[test]
    fn test_testimonial_stars() {
        let mut catalog = PortfolioCatalog::default();
        catalog.testimonials = vec![Testimonial {
            id: 1,
            content: "<p>Great work</p>".to_string(),
            author: "Pat".to_string(),
            rating: Rating::new(3).unwrap(),
        }];

        let text = TextRenderer.render(&catalog);
        assert!(text.contains("★★★\n"));
        assert!(!text.contains("★★★★"));
        assert!(text.contains("\"Great work\""));
    }

    #[tokio::test]
    async fn test_render_state_branches() {
        let source = Arc::new(FakeSource::new());
        let queries = ContentQueries::new(source.clone(), Arc::new(QueryClient::default()));
        let contact = queries.contact();

        assert_eq!(
            TextRenderer.render_state("Contact", &contact),
            "== Contact ==\nLoading...\n"
        );

        source.set_failing(true);
        contact.load().await;
        let failed = TextRenderer.render_state("Contact", &contact);
        assert!(failed.contains("Could not load this section"));
        assert!(failed.contains("[Try Again: contactData]"));

        source.set_failing(false);
        contact.refetch().await;
        assert!(TextRenderer
            .render_state("Contact", &contact)
            .starts_with("== Let's Grow Your North Dakota Business =="));
    }
}
