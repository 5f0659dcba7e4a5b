//! Literal defaults substituted for every absent or empty backend field.

use crate::domain::model::{ImageRef, Project, Rating, ServiceItem, Testimonial};

pub const BUSINESS_NAME: &str = "Dakota Digital Design";
pub const PHONE: &str = "(701) 840-9830";
pub const EMAIL: &str = "dakotadesigndigital@gmail.com";

// Hero
pub const HERO_HEADLINE: &str = "Get More Local Customers with a Professional Website";
pub const HERO_SUBHEADLINE: &str = "Serving North Dakota Businesses";
pub const HERO_DESCRIPTION: &str =
    "Dakota Digital Design builds websites that convert visitors into customers for North Dakota businesses.";
pub const HERO_IMAGE_URL: &str = "/src/assets/hero-image.jpg";
pub const HERO_IMAGE_ALT: &str = "Hero background";
pub const HERO_IMAGE_TITLE: &str = "Hero image";
pub const HERO_CTA_PRIMARY: &str = "Get Your Free Website";
pub const HERO_CTA_SECONDARY: &str = "See Our Work";
pub const HERO_TRUST_INDICATORS: [&str; 3] = ["Valley City Based", "Local Expertise", "Fast Results"];
pub const HERO_SOCIAL_PROOF: &str = "Trusted by 50+ North Dakota businesses";
pub const HERO_CLIENT_RATING: f64 = 4.9;
pub const HERO_BUSINESSES_SERVED: u32 = 50;
pub const HERO_CARD_TITLE: &str = "Ready to Launch?";
pub const HERO_CARD_DESCRIPTION: &str =
    "Get your professional website designed and launched in just 7 days.";
pub const HERO_CARD_FEATURES: [&str; 3] =
    ["Mobile-Optimized Design", "SEO Ready", "Lead Generation Focus"];

// Services
pub const SERVICES_TITLE: &str = "Website Solutions for North Dakota Businesses";
pub const SERVICES_DESCRIPTION: &str =
    "We specialize in creating websites that help local businesses attract more customers.";
pub const SERVICES_CTA_TITLE: &str = "Ready to Get More Customers?";
pub const SERVICES_CTA_DESCRIPTION: &str =
    "Let's discuss how a professional website can grow your North Dakota business.";
pub const SERVICES_CTA_PRIMARY: &str = "Get Your Free Website";
pub const SERVICES_CTA_SECONDARY: &str = "Call Now";
pub const SERVICE_TITLE: &str = "Website Service";
pub const SERVICE_ICON: &str = "Globe";

// Portfolio
pub const PORTFOLIO_TITLE: &str = "Real Results for Real Businesses";
pub const PORTFOLIO_DESCRIPTION: &str =
    "See how we've helped North Dakota businesses grow their customer base.";
pub const PORTFOLIO_CTA_TITLE: &str = "Ready to Join Our Success Stories?";
pub const PORTFOLIO_CTA_DESCRIPTION: &str =
    "Let's create a website that brings your North Dakota business the customers and growth you deserve.";
pub const PORTFOLIO_CTA_PRIMARY: &str = "Get Your Free Website Today";
pub const PORTFOLIO_CTA_SECONDARY: &str = "Call Now";
pub const PROJECT_TITLE: &str = "Untitled Project";
pub const PROJECT_CATEGORY: &str = "Website";
pub const PROJECT_IMAGE_URL: &str = "/src/assets/portfolio-mockup.jpg";
pub const TESTIMONIAL_AUTHOR: &str = "Anonymous";

// Contact
pub const CONTACT_TITLE: &str = "Let's Grow Your North Dakota Business";
pub const CONTACT_DESCRIPTION: &str = "Ready to get more customers with a professional website?";
pub const CONTACT_LOCATION: &str = "Valley City, North Dakota";
pub const CONTACT_PHONE_DESCRIPTION: &str = "Free consultation available";
pub const CONTACT_EMAIL_DESCRIPTION: &str = "We respond within 2 hours";
pub const CONTACT_LOCATION_DESCRIPTION: &str = "Serving all of ND remotely";
pub const CONTACT_TRUST_INDICATORS: [&str; 6] = [
    "Local North Dakota expertise",
    "7-day website launch guarantee",
    "50+ satisfied ND businesses",
    "Free consultation & website",
    "Domain & hosting included",
    "Security & updates handled",
];
pub const CONTACT_FORM_TITLE: &str = "Get Your Free Website";
pub const CONTACT_FORM_DESCRIPTION: &str =
    "Tell us about your project and we'll build your website for free.";

// Site settings
pub const SITE_TITLE: &str = BUSINESS_NAME;
pub const SITE_DESCRIPTION: &str = "Professional websites for North Dakota businesses. We help local companies attract more customers and grow online.";
pub const SITE_LOGO_URL: &str = "/src/assets/logo.png";

// Form submission
pub const SUBMISSION_SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you within 2 hours.";
pub const SUBMISSION_ERROR_MESSAGE: &str =
    "An error occurred while submitting the form. Please try again.";

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn services() -> Vec<ServiceItem> {
    let rows: [(&str, &str, &str, [&str; 3]); 6] = [
        (
            "Professional Website Design",
            "Custom websites that represent your North Dakota business professionally and convert visitors into customers.",
            "Globe",
            ["Mobile-Responsive", "Fast Loading", "Professional Design"],
        ),
        (
            "Local SEO Optimization",
            "Get found by customers searching for your services in Valley City, Fargo, and across North Dakota.",
            "Search",
            ["Google My Business", "Local Keywords", "Map Rankings"],
        ),
        (
            "Lead Generation Focus",
            "Every website we build is designed to turn visitors into paying customers for your local business.",
            "TrendingUp",
            ["Contact Forms", "Call Tracking", "Conversion Optimization"],
        ),
        (
            "Mobile-First Design",
            "Your customers are on their phones. We make sure your website looks perfect on every device.",
            "Smartphone",
            ["Touch-Friendly", "Fast Mobile", "App-Like Experience"],
        ),
        (
            "Small Business Focused",
            "We understand North Dakota businesses. Our solutions are built for local companies that want to grow.",
            "Users",
            ["Local Understanding", "Affordable Pricing", "Ongoing Support"],
        ),
        (
            "Fast Turnaround",
            "Get your professional website launched quickly so you can start attracting customers right away.",
            "Zap",
            ["7-Day Launch", "Quick Updates", "Rapid Response"],
        ),
    ];

    rows.iter()
        .enumerate()
        .map(|(index, (title, description, icon, features))| ServiceItem {
            id: index as u64 + 1,
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            features: strings(features),
        })
        .collect()
}

pub fn project_image(title: &str) -> ImageRef {
    ImageRef {
        id: 0,
        url: PROJECT_IMAGE_URL.to_string(),
        alt: title.to_string(),
        title: title.to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    let rows = [
        (
            "Valley City Restaurant",
            "Restaurant Website",
            "Modern website with online ordering system that increased takeout orders by 40%",
            "+40% Online Orders",
        ),
        (
            "ND Auto Repair Shop",
            "Service Business",
            "Lead-generating website that brings in 15+ new customers per month",
            "15+ New Customers/Month",
        ),
        (
            "Local Law Firm",
            "Professional Services",
            "Professional website that establishes trust and generates quality leads",
            "3x More Inquiries",
        ),
    ];

    rows.iter()
        .enumerate()
        .map(|(index, (title, category, description, results))| Project {
            id: index as u64 + 1,
            title: title.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            image: project_image(title),
            results: results.to_string(),
            live_url: None,
        })
        .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    let rows = [
        (
            "Our new website has brought in so many new customers. The design is beautiful and it actually works!",
            "Sarah M., Valley City Restaurant",
        ),
        (
            "Dakota Digital Design understood our local market and created exactly what we needed.",
            "Mike T., Auto Repair Shop",
        ),
        (
            "Professional, fast, and the results speak for themselves. Highly recommend!",
            "Jennifer L., Law Firm",
        ),
    ];

    rows.iter()
        .enumerate()
        .map(|(index, (content, author))| Testimonial {
            id: index as u64 + 1,
            content: content.to_string(),
            author: author.to_string(),
            rating: Rating::default(),
        })
        .collect()
}
