//! Built-in default content.
//!
//! [`default_document`] is a pure constant constructor: no I/O, no clock, no
//! randomness. It seeds a fresh store, backfills sections missing from
//! persisted data, and is what [`crate::content_store::ContentStore::reset`]
//! restores.

use crate::content_model::{
    AdPosition, Award, BannerSlide, ButtonLink, CategoryEntry, CategorySelection, Contact,
    ContactInfo, ContactMethod, ContactPage, ContentDocument, CustomerService, FaqBlock,
    FeaturedFilter, FeaturedProductsPolicy, Hero, MediaReviews, MethodColor, OfficeLocation,
    PageHero, ProductAd, ProductAds, ProductShowcase, ProductSummary, ProductsByCategory,
    RightSidebar, ShowcaseCta, ShowcaseSlide, SocialChannel, SpecialPromotion, VideoBlock,
};

const PHONE: &str = "(555) 123-4567";
const FAX: &str = "(555) 123-4568";
const EMAIL: &str = "info@hvacsupply.com";

fn s(value: &str) -> String {
    value.to_string()
}

fn button(label: &str, link: &str) -> ButtonLink {
    ButtonLink {
        label: s(label),
        link: s(link),
    }
}

fn product(id: &str, name: &str, price: f64, category: &str) -> ProductSummary {
    ProductSummary {
        id: s(id),
        name: s(name),
        image: format!("/images/products/{id}.jpg"),
        price,
        category: s(category),
    }
}

pub fn default_document() -> ContentDocument {
    ContentDocument {
        hero: default_hero(),
        banner_slider: default_banner_slider(),
        product_ads: default_product_ads(),
        product_showcase: default_product_showcase(),
        media_reviews: default_media_reviews(),
        category_selection: default_category_selection(),
        contact: default_contact(),
        right_sidebar: default_right_sidebar(),
        contact_page: default_contact_page(),
    }
}

pub fn default_hero() -> Hero {
    Hero {
        title: s("Professional HVAC Equipment & Supplies"),
        subtitle: s("Heating, cooling and air quality for every project"),
        description: s(
            "Contractors and homeowners trust us for quality equipment, fast delivery and \
             expert technical support from the first quote to the final install.",
        ),
        selected_categories: vec![s("cooling"), s("heating"), s("air-quality")],
        featured_products: Vec::new(),
    }
}

pub fn default_banner_slider() -> Vec<BannerSlide> {
    vec![
        BannerSlide {
            id: 1,
            title: s("Summer Cooling Sale"),
            subtitle: s("Up to 25% off central air systems"),
            description: s("Beat the heat with high-efficiency condensers and air handlers."),
            image: s("/images/banners/summer-cooling.jpg"),
            link: s("/products?category=cooling"),
            button_text: s("Shop Cooling"),
            bg_color: s("from-blue-600 to-blue-800"),
        },
        BannerSlide {
            id: 2,
            title: s("Heating Season Ready"),
            subtitle: s("Furnaces and heat pumps in stock"),
            description: s("Gas, electric and dual-fuel systems ready to ship this week."),
            image: s("/images/banners/heating-season.jpg"),
            link: s("/products?category=heating"),
            button_text: s("Shop Heating"),
            bg_color: s("from-orange-500 to-red-600"),
        },
        BannerSlide {
            id: 3,
            title: s("Breathe Cleaner Air"),
            subtitle: s("Filtration, purifiers and humidity control"),
            description: s("Whole-home indoor air quality solutions for healthier living."),
            image: s("/images/banners/air-quality.jpg"),
            link: s("/products?category=air-quality"),
            button_text: s("Explore Air Quality"),
            bg_color: s("from-green-500 to-teal-600"),
        },
    ]
}

pub fn default_product_ads() -> ProductAds {
    ProductAds {
        ads: vec![
            ProductAd {
                id: 1,
                title: s("Smart Thermostats"),
                subtitle: s("Save up to 23% on energy"),
                description: s("Wi-Fi thermostats with scheduling, geofencing and usage reports."),
                cta_text: s("Shop Now"),
                link: s("/products?category=smart-controls"),
                image: s("/images/ads/smart-thermostat.jpg"),
                color: s("from-indigo-500 to-purple-600"),
                position: AdPosition::Left,
            },
            ProductAd {
                id: 2,
                title: s("Ductless Mini-Splits"),
                subtitle: s("Zoned comfort without ductwork"),
                description: s("Single and multi-zone systems rated up to 30 SEER2."),
                cta_text: s("View Systems"),
                link: s("/products?category=cooling"),
                image: s("/images/ads/mini-split.jpg"),
                color: s("from-cyan-500 to-blue-600"),
                position: AdPosition::Right,
            },
        ],
        special_promotions: vec![
            SpecialPromotion {
                id: 1,
                title: s("Free Shipping"),
                description: s("On orders over $500 to the contiguous US."),
                image: s("/images/promos/free-shipping.jpg"),
                link: s("/shipping"),
            },
            SpecialPromotion {
                id: 2,
                title: s("Contractor Pricing"),
                description: s("Sign in to unlock trade pricing on every product."),
                image: s("/images/promos/contractor.jpg"),
                link: s("/login"),
            },
        ],
    }
}

pub fn default_product_showcase() -> ProductShowcase {
    ProductShowcase {
        slides: vec![
            ShowcaseSlide {
                id: 1,
                title: s("High-Efficiency Heat Pumps"),
                subtitle: s("All-season comfort"),
                description: s("Heat and cool with a single system and cut utility bills."),
                link: s("/products?category=heating"),
                button_text: s("Discover More"),
                badge: Some(s("Best Seller")),
                accent_color: s("blue"),
                bg_gradient: s("from-blue-50 to-white"),
                image: s("/images/showcase/heat-pump.jpg"),
            },
            ShowcaseSlide {
                id: 2,
                title: s("Ventilation Solutions"),
                subtitle: s("Fresh air, lower humidity"),
                description: s("ERVs, HRVs and exhaust fans sized for any building."),
                link: s("/products?category=ventilation"),
                button_text: s("Browse Ventilation"),
                badge: None,
                accent_color: s("green"),
                bg_gradient: s("from-green-50 to-white"),
                image: s("/images/showcase/ventilation.jpg"),
            },
        ],
        featured_products: FeaturedProductsPolicy {
            count: 8,
            filter: FeaturedFilter::Featured,
        },
        cta: ShowcaseCta {
            title: s("Need help choosing the right system?"),
            description: s("Our technicians size equipment for your load and budget."),
            primary_button: button("Get a Quote", "/contact"),
            secondary_button: button("Browse Catalog", "/products"),
        },
    }
}

pub fn default_media_reviews() -> MediaReviews {
    MediaReviews {
        video: VideoBlock {
            url: s("https://www.youtube.com/embed/hvac-overview"),
            title: s("Inside Our Warehouse"),
            description: s("See how we stock, test and ship thousands of HVAC parts every day."),
        },
        award: Award {
            title: s("Distributor of the Year"),
            description: s("Recognized for service excellence by regional contractors."),
            image: s("/images/awards/distributor-of-the-year.png"),
        },
        social_channels: vec![
            SocialChannel {
                name: s("facebook"),
                title: s("Facebook"),
                description: s("Deals, news and install tips."),
                icon: s("facebook"),
                color: s("bg-blue-600"),
                hover_color: s("hover:bg-blue-700"),
                link: s("https://facebook.com/hvacsupply"),
                button_text: s("Follow"),
            },
            SocialChannel {
                name: s("youtube"),
                title: s("YouTube"),
                description: s("Product walkthroughs and maintenance guides."),
                icon: s("youtube"),
                color: s("bg-red-600"),
                hover_color: s("hover:bg-red-700"),
                link: s("https://youtube.com/@hvacsupply"),
                button_text: s("Subscribe"),
            },
            SocialChannel {
                name: s("instagram"),
                title: s("Instagram"),
                description: s("Job-site photos from our customers."),
                icon: s("instagram"),
                color: s("bg-pink-500"),
                hover_color: s("hover:bg-pink-600"),
                link: s("https://instagram.com/hvacsupply"),
                button_text: s("Follow"),
            },
        ],
        customer_service: CustomerService {
            phone: s(PHONE),
            fax: s(FAX),
            email: s(EMAIL),
            hours: s("Mon-Fri 7:00 AM - 6:00 PM"),
        },
    }
}

pub fn default_category_selection() -> CategorySelection {
    let cooling = vec![
        product("ac-3ton-16seer", "3 Ton 16 SEER Condenser", 2899.0, "cooling"),
        product("mini-split-12k", "12,000 BTU Ductless Mini-Split", 1249.0, "cooling"),
    ];
    let heating = vec![
        product("furnace-80k-96", "80,000 BTU 96% AFUE Furnace", 2199.0, "heating"),
        product("heat-pump-3ton", "3 Ton Heat Pump", 3499.0, "heating"),
    ];
    let ventilation = vec![product("erv-150", "150 CFM Energy Recovery Ventilator", 1099.0, "ventilation")];
    let air_quality = vec![product("media-filter-16x25", "16x25 MERV 13 Media Filter", 59.0, "air-quality")];
    let smart_controls = vec![product("wifi-thermostat", "Wi-Fi Smart Thermostat", 179.0, "smart-controls")];
    let parts = vec![product("capacitor-45-5", "45/5 MFD Dual Run Capacitor", 24.0, "parts")];

    let all = [&cooling, &heating, &ventilation, &air_quality, &smart_controls, &parts]
        .into_iter()
        .flatten()
        .cloned()
        .collect();

    CategorySelection {
        title: s("Shop by Category"),
        description: s("Find the right equipment and parts for every HVAC job."),
        categories: vec![
            category("cooling", "Cooling", "snowflake", "blue"),
            category("heating", "Heating", "flame", "red"),
            category("ventilation", "Ventilation", "wind", "green"),
            category("air-quality", "Air Quality", "leaf", "teal"),
            category("smart-controls", "Smart Controls", "cpu", "purple"),
            category("parts", "Parts", "wrench", "gray"),
        ],
        products_by_category: ProductsByCategory {
            all,
            cooling,
            heating,
            ventilation,
            air_quality,
            smart_controls,
            parts,
        },
    }
}

fn category(id: &str, name: &str, icon: &str, color: &str) -> CategoryEntry {
    CategoryEntry {
        id: s(id),
        name: s(name),
        icon: s(icon),
        color: s(color),
    }
}

pub fn default_contact() -> Contact {
    Contact {
        title: s("Get in Touch"),
        subtitle: s("Questions about an order or a system? We're here to help."),
        contact_info: ContactInfo {
            phone: s(PHONE),
            email: s(EMAIL),
            address: vec![s("1234 Industrial Parkway"), s("Suite 100"), s("Springfield, IL 62701")],
        },
    }
}

pub fn default_right_sidebar() -> RightSidebar {
    RightSidebar {
        phone: s(PHONE),
        fax: s(FAX),
        email: s(EMAIL),
        hours: vec![
            s("Mon-Fri: 7:00 AM - 6:00 PM"),
            s("Sat: 8:00 AM - 2:00 PM"),
            s("Sun: Closed"),
        ],
    }
}

pub fn default_contact_page() -> ContactPage {
    ContactPage {
        hero: PageHero {
            title: s("Contact Us"),
            description: s("Reach our sales and technical teams by phone, email or in person."),
        },
        contact_methods: vec![
            ContactMethod {
                title: s("Call Us"),
                info: s(PHONE),
                sub_info: s("Mon-Fri 7:00 AM - 6:00 PM"),
                color: MethodColor::Blue,
            },
            ContactMethod {
                title: s("Email Us"),
                info: s(EMAIL),
                sub_info: s("We reply within one business day"),
                color: MethodColor::Green,
            },
            ContactMethod {
                title: s("Fax"),
                info: s(FAX),
                sub_info: s("Purchase orders and credit applications"),
                color: MethodColor::Purple,
            },
        ],
        office_location: OfficeLocation {
            company_name: s("HVAC Supply Co."),
            address_line1: s("1234 Industrial Parkway"),
            address_line2: s("Suite 100"),
            city: s("Springfield, IL 62701"),
        },
        additional_info: vec![
            s("Will-call pickup available during business hours."),
            s("Technical support for registered contractors."),
            s("Same-day shipping on orders placed before 2 PM."),
        ],
        faq: FaqBlock {
            title: s("Frequently Asked Questions"),
            description: s("Answers about ordering, shipping, returns and warranties."),
            primary_button: button("View FAQ", "/faq"),
            secondary_button: button("Shipping Policy", "/shipping"),
        },
    }
}
