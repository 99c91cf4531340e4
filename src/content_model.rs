//! Typed content document for the storefront CMS.
//!
//! The document is one aggregate of nine independently replaceable
//! [`Section`]s. Every type serializes with camelCase field names so the
//! persisted JSON blob keeps the storefront's wire format
//! (`bannerSlider`, `selectedCategories`, `buttonText`, ...).
//!
//! The model carries no validation. Rules such as the Hero category cap are
//! enforced by the edit forms (see [`crate::hero_form`]), not here.
//!
//! Section types decode leniently: a field missing from stored JSON takes
//! its empty value (`""`, `[]`, `0`, first enum variant marked `#[default]`)
//! so content saved by an older schema keeps loading. Only a value of the
//! wrong type fails to decode.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::app_response::AppResponse;

/// Names of the independently replaceable sections of a [`ContentDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Hero,
    BannerSlider,
    ProductAds,
    ProductShowcase,
    MediaReviews,
    CategorySelection,
    Contact,
    RightSidebar,
    ContactPage,
}

impl Section {
    /// Every section, in document order.
    pub const ALL: [Section; 9] = [
        Section::Hero,
        Section::BannerSlider,
        Section::ProductAds,
        Section::ProductShowcase,
        Section::MediaReviews,
        Section::CategorySelection,
        Section::Contact,
        Section::RightSidebar,
        Section::ContactPage,
    ];

    /// JSON key of the section inside the persisted document.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::BannerSlider => "bannerSlider",
            Section::ProductAds => "productAds",
            Section::ProductShowcase => "productShowcase",
            Section::MediaReviews => "mediaReviews",
            Section::CategorySelection => "categorySelection",
            Section::Contact => "contact",
            Section::RightSidebar => "rightSidebar",
            Section::ContactPage => "contactPage",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|section| section.key() == key)
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Lightweight product card used by the Hero display cache and the
/// category grid lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub category: String,
}

/// A button label with its target link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonLink {
    pub label: String,
    pub link: String,
}

// --- Hero ---------------------------------------------------------------

/// Homepage headline block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Ordered category identifiers, at most three and distinct. The cap is
    /// applied by [`crate::hero_form`]; the store accepts whatever it is given.
    pub selected_categories: Vec<String>,
    /// Display cache derived from the selected categories. Not editable.
    pub featured_products: Vec<ProductSummary>,
}

// --- Banner slider ------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BannerSlide {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub button_text: String,
    /// Background color token, e.g. `from-blue-600 to-blue-800`.
    pub bg_color: String,
}

// --- Product ads --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdPosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductAd {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_text: String,
    pub link: String,
    pub image: String,
    /// Gradient token.
    pub color: String,
    pub position: AdPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpecialPromotion {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

/// Featured ad carousel plus the promo tiles under it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductAds {
    pub ads: Vec<ProductAd>,
    pub special_promotions: Vec<SpecialPromotion>,
}

// --- Product showcase ---------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowcaseSlide {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub link: String,
    pub button_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub accent_color: String,
    pub bg_gradient: String,
    pub image: String,
}

/// How the showcase picks the products it features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeaturedFilter {
    Recent,
    #[default]
    Featured,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturedProductsPolicy {
    pub count: u64,
    pub filter: FeaturedFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowcaseCta {
    pub title: String,
    pub description: String,
    pub primary_button: ButtonLink,
    pub secondary_button: ButtonLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductShowcase {
    pub slides: Vec<ShowcaseSlide>,
    pub featured_products: FeaturedProductsPolicy,
    pub cta: ShowcaseCta,
}

// --- Media & reviews ----------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoBlock {
    pub url: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Award {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialChannel {
    pub name: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub hover_color: String,
    pub link: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerService {
    pub phone: String,
    pub fax: String,
    pub email: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaReviews {
    pub video: VideoBlock,
    pub award: Award,
    pub social_channels: Vec<SocialChannel>,
    pub customer_service: CustomerService,
}

// --- Category selection -------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Product lookup keyed by the fixed category key set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsByCategory {
    pub all: Vec<ProductSummary>,
    pub cooling: Vec<ProductSummary>,
    pub heating: Vec<ProductSummary>,
    pub ventilation: Vec<ProductSummary>,
    #[serde(rename = "air-quality")]
    pub air_quality: Vec<ProductSummary>,
    #[serde(rename = "smart-controls")]
    pub smart_controls: Vec<ProductSummary>,
    pub parts: Vec<ProductSummary>,
}

impl ProductsByCategory {
    /// The fixed lookup keys, in display order.
    pub const KEYS: [&'static str; 7] = [
        "all",
        "cooling",
        "heating",
        "ventilation",
        "air-quality",
        "smart-controls",
        "parts",
    ];

    pub fn get(&self, key: &str) -> Option<&[ProductSummary]> {
        let products = match key {
            "all" => &self.all,
            "cooling" => &self.cooling,
            "heating" => &self.heating,
            "ventilation" => &self.ventilation,
            "air-quality" => &self.air_quality,
            "smart-controls" => &self.smart_controls,
            "parts" => &self.parts,
            _ => return None,
        };
        Some(products.as_slice())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategorySelection {
    pub title: String,
    pub description: String,
    pub categories: Vec<CategoryEntry>,
    pub products_by_category: ProductsByCategory,
}

// --- Contact block & sidebar --------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    /// One entry per address line.
    pub address: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RightSidebar {
    pub phone: String,
    pub fax: String,
    pub email: String,
    pub hours: Vec<String>,
}

// --- Contact page -------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodColor {
    #[default]
    Blue,
    Green,
    Purple,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactMethod {
    pub title: String,
    pub info: String,
    pub sub_info: String,
    pub color: MethodColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageHero {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OfficeLocation {
    pub company_name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqBlock {
    pub title: String,
    pub description: String,
    pub primary_button: ButtonLink,
    pub secondary_button: ButtonLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactPage {
    pub hero: PageHero,
    pub contact_methods: Vec<ContactMethod>,
    pub office_location: OfficeLocation,
    pub additional_info: Vec<String>,
    pub faq: FaqBlock,
}

// --- Document -----------------------------------------------------------

/// The full editable content of the public site.
///
/// Every section is always present. Sections are replaced wholesale; there
/// are no partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub hero: Hero,
    pub banner_slider: Vec<BannerSlide>,
    pub product_ads: ProductAds,
    pub product_showcase: ProductShowcase,
    pub media_reviews: MediaReviews,
    pub category_selection: CategorySelection,
    pub contact: Contact,
    pub right_sidebar: RightSidebar,
    pub contact_page: ContactPage,
}

impl ContentDocument {
    /// Serializes one section to its JSON value.
    pub fn section_value(&self, section: Section) -> Result<JsonValue, AppResponse> {
        let value = match section {
            Section::Hero => serde_json::to_value(&self.hero)?,
            Section::BannerSlider => serde_json::to_value(&self.banner_slider)?,
            Section::ProductAds => serde_json::to_value(&self.product_ads)?,
            Section::ProductShowcase => serde_json::to_value(&self.product_showcase)?,
            Section::MediaReviews => serde_json::to_value(&self.media_reviews)?,
            Section::CategorySelection => serde_json::to_value(&self.category_selection)?,
            Section::Contact => serde_json::to_value(&self.contact)?,
            Section::RightSidebar => serde_json::to_value(&self.right_sidebar)?,
            Section::ContactPage => serde_json::to_value(&self.contact_page)?,
        };
        Ok(value)
    }

    /// Decodes `value` as the given section and replaces it.
    ///
    /// On a decode error the document is left untouched.
    pub fn replace_section_value(
        &mut self,
        section: Section,
        value: JsonValue,
    ) -> Result<(), AppResponse> {
        match section {
            Section::Hero => self.hero = serde_json::from_value(value)?,
            Section::BannerSlider => self.banner_slider = serde_json::from_value(value)?,
            Section::ProductAds => self.product_ads = serde_json::from_value(value)?,
            Section::ProductShowcase => self.product_showcase = serde_json::from_value(value)?,
            Section::MediaReviews => self.media_reviews = serde_json::from_value(value)?,
            Section::CategorySelection => {
                self.category_selection = serde_json::from_value(value)?
            }
            Section::Contact => self.contact = serde_json::from_value(value)?,
            Section::RightSidebar => self.right_sidebar = serde_json::from_value(value)?,
            Section::ContactPage => self.contact_page = serde_json::from_value(value)?,
        }
        Ok(())
    }

    /// Names of the sections whose values differ between two documents.
    pub fn changed_sections(&self, other: &ContentDocument) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| match section {
                Section::Hero => self.hero != other.hero,
                Section::BannerSlider => self.banner_slider != other.banner_slider,
                Section::ProductAds => self.product_ads != other.product_ads,
                Section::ProductShowcase => self.product_showcase != other.product_showcase,
                Section::MediaReviews => self.media_reviews != other.media_reviews,
                Section::CategorySelection => self.category_selection != other.category_selection,
                Section::Contact => self.contact != other.contact,
                Section::RightSidebar => self.right_sidebar != other.right_sidebar,
                Section::ContactPage => self.contact_page != other.contact_page,
            })
            .collect()
    }
}
