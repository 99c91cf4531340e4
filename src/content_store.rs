//! The CMS content store.
//!
//! [`ContentStore`] owns the current [`ContentDocument`] and a
//! [`ContentStorage`] backend. It is constructed once by the application and
//! passed to whatever needs it; nothing here is global.
//!
//! Lifecycle:
//!
//! 1. [`ContentStore::new`] builds the default document. Nothing is read or
//!    written yet. Updates made now stay in memory and are dropped by
//!    `load`.
//! 2. [`ContentStore::load`] overlays whatever was persisted using the
//!    or-default merge and marks the store initialized.
//! 3. Every setter replaces one section and persists the whole document.
//!
//! Storage failures never reach the caller. They are logged and reported to
//! observers through [`ContentObserver::on_load_failed`] and
//! [`ContentObserver::on_persist_failed`]; the in-memory document stays
//! authoritative for the session.

use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::Value as JsonValue;

use crate::app_response::AppResponse;
use crate::content_defaults::default_document;
use crate::content_merge::{merge_with_defaults, SectionSource};
use crate::content_model::{
    BannerSlide, CategorySelection, Contact, ContactPage, ContentDocument, Hero, MediaReviews,
    ProductAds, ProductShowcase, RightSidebar, Section,
};
use crate::lmdb_storage::LmdbStorage;
use crate::storage::{ContentStorage, InMemoryStorage};
use crate::store_config::StoreConfig;

/// Receives change and failure notifications from a [`ContentStore`].
///
/// All methods have no-op defaults.
pub trait ContentObserver: Send + Sync {
    /// Called after the in-memory document changed. `section` is `None` when
    /// the whole document was replaced (load or reset).
    fn on_document_changed(&self, _document: &ContentDocument, _section: Option<Section>) {}

    /// Called when a save did not reach storage.
    fn on_persist_failed(&self, _error: &AppResponse) {}

    /// Called when persisted content could not be read or parsed.
    fn on_load_failed(&self, _error: &AppResponse) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What the last [`ContentStore::load`] found.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// `load` has not run yet.
    NotLoaded,
    /// Nothing was stored under the key.
    Empty,
    /// Persisted content was merged; per-section sources are listed.
    Restored(Vec<(Section, SectionSource)>),
    /// Storage read or JSON parse failed; defaults are in use.
    Failed(AppResponse),
}

pub struct ContentStore {
    document: ContentDocument,
    storage: Box<dyn ContentStorage>,
    storage_key: String,
    initialized: bool,
    load_status: LoadStatus,
    last_persist_error: Option<AppResponse>,
    observers: Vec<(SubscriptionId, Arc<dyn ContentObserver>)>,
    next_subscription: u64,
}

impl ContentStore {
    /// Store on the built-in defaults, not yet loaded.
    ///
    /// Setters work but do not persist until [`ContentStore::load`] runs, and
    /// `load` replaces the whole document, discarding those edits.
    pub fn new(storage: impl ContentStorage + 'static, storage_key: impl Into<String>) -> Self {
        Self {
            document: default_document(),
            storage: Box::new(storage),
            storage_key: storage_key.into(),
            initialized: false,
            load_status: LoadStatus::NotLoaded,
            last_persist_error: None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// [`ContentStore::new`] followed by [`ContentStore::load`].
    pub fn open(storage: impl ContentStorage + 'static, storage_key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, storage_key);
        store.load();
        store
    }

    /// Opens a store on LMDB as described by `config`.
    ///
    /// If the LMDB environment cannot be opened the store still comes up,
    /// on an unavailable backend: content works for the session and every
    /// save is reported as failed.
    pub fn open_with_config(config: &StoreConfig) -> Self {
        match LmdbStorage::init_with_map_size(&config.db_path, config.map_size) {
            Ok(storage) => {
                info!("Content store backed by {}", storage.path().display());
                Self::open(storage, config.storage_key.clone())
            }
            Err(e) => {
                warn!("Could not open LMDB at '{}': {e}; content will not persist", config.db_path);
                let storage = InMemoryStorage::new();
                storage.set_unavailable(true);
                Self::open(storage, config.storage_key.clone())
            }
        }
    }

    /// Reads persisted content and merges it over the defaults.
    ///
    /// Never fails: an absent, unreadable or unparseable blob leaves the
    /// defaults in place. A section whose stored value has the wrong type
    /// keeps its default and is reported through
    /// [`ContentObserver::on_load_failed`]. Marks the store initialized
    /// either way.
    ///
    /// The whole in-memory document is replaced, so setters called before
    /// `load` are discarded.
    pub fn load(&mut self) {
        let defaults = default_document();
        let status = match self.read_persisted() {
            Ok(None) => {
                info!("No persisted content under '{}'; using defaults", self.storage_key);
                self.document = defaults;
                LoadStatus::Empty
            }
            Ok(Some(persisted)) => {
                let report = merge_with_defaults(&persisted, &defaults);
                for (section, error) in report.rejected() {
                    warn!("Section '{section}' kept its default: {error}");
                    self.notify_load_failed(error);
                }
                self.document = report.document;
                info!("Loaded persisted content from '{}'", self.storage_key);
                LoadStatus::Restored(report.sources)
            }
            Err(e) => {
                warn!("Failed to load persisted content: {e}; using defaults");
                self.document = defaults;
                self.notify_load_failed(&e);
                LoadStatus::Failed(e)
            }
        };
        self.load_status = status;
        self.initialized = true;
        self.notify_changed(None);
    }

    fn read_persisted(&self) -> Result<Option<JsonValue>, AppResponse> {
        match self.storage.read(&self.storage_key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    /// Current value of one section as JSON.
    pub fn section_json(&self, section: Section) -> Result<JsonValue, AppResponse> {
        self.document.section_value(section)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Error from the most recent save, cleared by the next successful one.
    pub fn last_persist_error(&self) -> Option<&AppResponse> {
        self.last_persist_error.as_ref()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn subscribe(&mut self, observer: Arc<dyn ContentObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(candidate, _)| *candidate != id);
        self.observers.len() != before
    }

    pub fn set_hero(&mut self, hero: Hero) {
        self.document.hero = hero;
        self.section_updated(Section::Hero);
    }

    pub fn set_banner_slider(&mut self, slides: Vec<BannerSlide>) {
        self.document.banner_slider = slides;
        self.section_updated(Section::BannerSlider);
    }

    pub fn set_product_ads(&mut self, product_ads: ProductAds) {
        self.document.product_ads = product_ads;
        self.section_updated(Section::ProductAds);
    }

    pub fn set_product_showcase(&mut self, showcase: ProductShowcase) {
        self.document.product_showcase = showcase;
        self.section_updated(Section::ProductShowcase);
    }

    pub fn set_media_reviews(&mut self, media_reviews: MediaReviews) {
        self.document.media_reviews = media_reviews;
        self.section_updated(Section::MediaReviews);
    }

    pub fn set_category_selection(&mut self, selection: CategorySelection) {
        self.document.category_selection = selection;
        self.section_updated(Section::CategorySelection);
    }

    pub fn set_contact(&mut self, contact: Contact) {
        self.document.contact = contact;
        self.section_updated(Section::Contact);
    }

    pub fn set_right_sidebar(&mut self, sidebar: RightSidebar) {
        self.document.right_sidebar = sidebar;
        self.section_updated(Section::RightSidebar);
    }

    pub fn set_contact_page(&mut self, contact_page: ContactPage) {
        self.document.contact_page = contact_page;
        self.section_updated(Section::ContactPage);
    }

    /// Replaces `section` with a full value decoded from JSON.
    ///
    /// Returns `SerializationError` and leaves the document unchanged when
    /// `json` is not a valid value for that section. Storage failures are
    /// not returned, as with the typed setters.
    pub fn update_section_json(&mut self, section: Section, json: &str) -> Result<(), AppResponse> {
        let value: JsonValue = serde_json::from_str(json)?;
        self.document.replace_section_value(section, value)?;
        self.section_updated(section);
        Ok(())
    }

    /// Discards the current document, restores the defaults and overwrites
    /// the persisted copy.
    pub fn reset(&mut self) {
        info!("Resetting content to defaults");
        self.document = default_document();
        self.initialized = true;
        self.notify_changed(None);
        self.persist();
    }

    fn section_updated(&mut self, section: Section) {
        debug!("Section '{}' replaced", section);
        self.notify_changed(Some(section));
        if self.initialized {
            self.persist();
        } else {
            debug!("Store not loaded yet; '{}' kept in memory only", section);
        }
    }

    /// Serializes the whole document and writes it under the storage key.
    fn persist(&mut self) {
        let result = serde_json::to_string(&self.document)
            .map_err(AppResponse::from)
            .and_then(|json| self.storage.write(&self.storage_key, &json));

        match result {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                warn!("Failed to persist content under '{}': {e}", self.storage_key);
                for (_, observer) in &self.observers {
                    observer.on_persist_failed(&e);
                }
                self.last_persist_error = Some(e);
            }
        }
    }

    fn notify_changed(&self, section: Option<Section>) {
        for (_, observer) in &self.observers {
            observer.on_document_changed(&self.document, section);
        }
    }

    fn notify_load_failed(&self, error: &AppResponse) {
        for (_, observer) in &self.observers {
            observer.on_load_failed(error);
        }
    }
}
