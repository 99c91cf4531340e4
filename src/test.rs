//! # Store-level test suite
//!
//! Exercises [`ContentStore`] end to end against the in-memory and LMDB
//! backends, plus the FFI surface.
//!
//! ## Test Categories
//!
//! 1. **Defaults and round-trips**: deterministic defaults, JSON round-trip
//! 2. **Load and merge**: or-default backfill, empty banner fallback, Hero
//!    overlay, corrupt and unavailable storage
//! 3. **Updates**: section isolation, one write per update, reset
//! 4. **Observers**: change and failure notifications
//! 5. **LMDB**: persistence across reopen
//! 6. **FFI**: every `extern "C"` function, including null and bad input
//!
//! ```bash
//! cargo test
//! cargo test test_ffi_     # FFI tests only
//! ```

#[cfg(test)]
pub mod tests {
    use std::ffi::{CStr, CString};
    use std::os::raw::c_char;
    use std::sync::{Arc, Mutex};

    use serde_json::json;
    use tempfile::TempDir;

    use crate::app_response::AppResponse;
    use crate::content_defaults::{default_banner_slider, default_document};
    use crate::content_merge::SectionSource;
    use crate::content_model::{
        BannerSlide, ContactMethod, ContentDocument, FaqBlock, MethodColor, RightSidebar, Section,
    };
    use crate::content_store::{ContentObserver, ContentStore, LoadStatus};
    use crate::lmdb_storage::LmdbStorage;
    use crate::storage::{ContentStorage, InMemoryStorage};
    use crate::store_config::{StoreConfig, DEFAULT_STORAGE_KEY};
    use crate::{
        close_content_store, create_content_store, free_response, get_content_document,
        get_content_section, reset_content, update_content_section,
    };

    const KEY: &str = DEFAULT_STORAGE_KEY;

    fn custom_sidebar() -> RightSidebar {
        RightSidebar {
            phone: "(555) 999-0000".to_string(),
            fax: "(555) 999-0001".to_string(),
            email: "sales@example.com".to_string(),
            hours: vec!["Mon-Sat: 6:00 AM - 8:00 PM".to_string()],
        }
    }

    fn custom_banner() -> Vec<BannerSlide> {
        vec![BannerSlide {
            id: 42,
            title: "Clearance".to_string(),
            subtitle: "Last year's models".to_string(),
            description: "While supplies last.".to_string(),
            image: "/images/banners/clearance.jpg".to_string(),
            link: "/products?sale=clearance".to_string(),
            button_text: "Shop Clearance".to_string(),
            bg_color: "from-gray-700 to-gray-900".to_string(),
        }]
    }

    fn stored_document(storage: &InMemoryStorage) -> ContentDocument {
        let raw = storage.read(KEY).unwrap().expect("document should be persisted");
        serde_json::from_str(&raw).unwrap()
    }

    #[derive(Default)]
    struct RecordingObserver {
        changes: Mutex<Vec<Option<Section>>>,
        persist_failures: Mutex<Vec<AppResponse>>,
        load_failures: Mutex<Vec<AppResponse>>,
    }

    impl ContentObserver for RecordingObserver {
        fn on_document_changed(&self, _document: &ContentDocument, section: Option<Section>) {
            self.changes.lock().unwrap().push(section);
        }

        fn on_persist_failed(&self, error: &AppResponse) {
            self.persist_failures.lock().unwrap().push(error.clone());
        }

        fn on_load_failed(&self, error: &AppResponse) {
            self.load_failures.lock().unwrap().push(error.clone());
        }
    }

    // ===============================
    // DEFAULTS AND ROUND-TRIPS
    // ===============================

    #[test]
    fn test_document_json_round_trip() {
        let mut document = default_document();
        document.right_sidebar = custom_sidebar();
        document.banner_slider = custom_banner();
        document.product_showcase.slides[0].badge = None;

        let json = serde_json::to_string(&document).unwrap();
        let restored: ContentDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, document);
    }

    #[test]
    fn test_persisted_format_uses_storefront_keys() {
        let value = serde_json::to_value(default_document()).unwrap();
        let root = value.as_object().unwrap();
        for section in Section::ALL {
            assert!(root.contains_key(section.key()), "missing {}", section.key());
        }
        assert!(value["hero"]["selectedCategories"].is_array());
        assert!(value["categorySelection"]["productsByCategory"]["smart-controls"].is_array());
    }

    // ===============================
    // LOAD AND MERGE
    // ===============================

    #[test]
    fn test_fresh_store_uses_defaults() {
        let storage = InMemoryStorage::new();
        let store = ContentStore::open(storage.clone(), KEY);

        assert!(store.is_initialized());
        assert_eq!(store.load_status(), &LoadStatus::Empty);
        assert_eq!(store.document(), &default_document());
        // Loading alone writes nothing.
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_missing_section_is_backfilled() {
        let persisted = json!({
            "rightSidebar": serde_json::to_value(custom_sidebar()).unwrap(),
        });
        let storage = InMemoryStorage::with_entry(KEY, &persisted.to_string());
        let store = ContentStore::open(storage, KEY);

        let defaults = default_document();
        assert_eq!(store.document().right_sidebar, custom_sidebar());
        assert_eq!(store.document().contact_page, defaults.contact_page);
        assert_eq!(store.document().media_reviews, defaults.media_reviews);

        match store.load_status() {
            LoadStatus::Restored(sources) => {
                assert!(sources.contains(&(Section::RightSidebar, SectionSource::Persisted)));
                assert!(sources.contains(&(Section::ContactPage, SectionSource::Default)));
            }
            other => panic!("unexpected load status {other:?}"),
        }
    }

    #[test]
    fn test_empty_banner_slider_falls_back_to_defaults() {
        let storage = InMemoryStorage::with_entry(KEY, r#"{"bannerSlider": []}"#);
        let store = ContentStore::open(storage, KEY);

        assert!(!store.document().banner_slider.is_empty());
        assert_eq!(store.document().banner_slider, default_banner_slider());
    }

    #[test]
    fn test_non_empty_banner_slider_is_kept() {
        let persisted = json!({ "bannerSlider": serde_json::to_value(custom_banner()).unwrap() });
        let storage = InMemoryStorage::with_entry(KEY, &persisted.to_string());
        let store = ContentStore::open(storage, KEY);

        assert_eq!(store.document().banner_slider, custom_banner());
    }

    #[test]
    fn test_hero_without_categories_keeps_default_categories() {
        let persisted = json!({
            "hero": {
                "title": "Comfort Year Round",
                "subtitle": "Since 1985",
                "description": "Family owned.",
                "featuredProducts": []
            }
        });
        let storage = InMemoryStorage::with_entry(KEY, &persisted.to_string());
        let store = ContentStore::open(storage, KEY);

        let hero = &store.document().hero;
        assert_eq!(hero.title, "Comfort Year Round");
        assert_eq!(hero.selected_categories, default_document().hero.selected_categories);
    }

    #[test]
    fn test_hero_with_categories_uses_persisted_categories() {
        let persisted = json!({ "hero": { "selectedCategories": ["parts"] } });
        let storage = InMemoryStorage::with_entry(KEY, &persisted.to_string());
        let store = ContentStore::open(storage, KEY);

        assert_eq!(store.document().hero.selected_categories, vec!["parts"]);
        assert_eq!(store.document().hero.title, default_document().hero.title);
    }

    #[test]
    fn test_corrupt_storage_is_tolerated() {
        let storage = InMemoryStorage::with_entry(KEY, "{not valid json");
        let observer = Arc::new(RecordingObserver::default());
        let mut store = ContentStore::new(storage, KEY);
        store.subscribe(observer.clone());
        store.load();

        assert_eq!(store.document(), &default_document());
        assert!(matches!(
            store.load_status(),
            LoadStatus::Failed(AppResponse::SerializationError(_))
        ));
        assert_eq!(observer.load_failures.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_unavailable_storage_on_load_uses_defaults() {
        let storage = InMemoryStorage::with_entry(KEY, r#"{"bannerSlider": []}"#);
        storage.set_unavailable(true);
        let store = ContentStore::open(storage, KEY);

        assert_eq!(store.document(), &default_document());
        assert!(matches!(store.load_status(), LoadStatus::Failed(AppResponse::DatabaseError(_))));
    }

    #[test]
    fn test_updates_before_load_are_not_persisted() {
        let storage = InMemoryStorage::new();
        let mut store = ContentStore::new(storage.clone(), KEY);
        assert!(!store.is_initialized());
        assert_eq!(store.load_status(), &LoadStatus::NotLoaded);

        store.set_right_sidebar(custom_sidebar());
        assert_eq!(store.document().right_sidebar, custom_sidebar());
        assert_eq!(storage.write_count(), 0);

        // Loading replaces the whole document, so the early edit is gone.
        store.load();
        assert_eq!(store.document().right_sidebar, default_document().right_sidebar);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_section_missing_a_field_keeps_saved_content() {
        let mut page = serde_json::to_value(default_document().contact_page).unwrap();
        page["hero"]["title"] = json!("Call Dana's Crew");
        page.as_object_mut().unwrap().remove("faq");
        let persisted = json!({ "contactPage": page });
        let storage = InMemoryStorage::with_entry(KEY, &persisted.to_string());
        let observer = Arc::new(RecordingObserver::default());
        let mut store = ContentStore::new(storage, KEY);
        store.subscribe(observer.clone());
        store.load();

        let loaded = &store.document().contact_page;
        assert_eq!(loaded.hero.title, "Call Dana's Crew");
        assert_eq!(loaded.contact_methods, default_document().contact_page.contact_methods);
        assert_eq!(loaded.faq, FaqBlock::default());
        match store.load_status() {
            LoadStatus::Restored(sources) => {
                assert!(sources.contains(&(Section::ContactPage, SectionSource::Persisted)));
            }
            other => panic!("unexpected load status {other:?}"),
        }
        assert!(observer.load_failures.lock().unwrap().is_empty());
    }

    #[test]
    fn test_section_with_wrong_type_is_rejected_and_reported() {
        let persisted = json!({
            "rightSidebar": serde_json::to_value(custom_sidebar()).unwrap(),
            "contact": { "title": 42 },
        });
        let storage = InMemoryStorage::with_entry(KEY, &persisted.to_string());
        let observer = Arc::new(RecordingObserver::default());
        let mut store = ContentStore::new(storage, KEY);
        store.subscribe(observer.clone());
        store.load();

        assert_eq!(store.document().contact, default_document().contact);
        assert_eq!(store.document().right_sidebar, custom_sidebar());
        let failures = observer.load_failures.lock().unwrap().clone();
        assert_eq!(failures.len(), 1);
        assert!(matches!(failures[0], AppResponse::SerializationError(_)));
    }

    #[test]
    fn test_timestamp_banner_id_survives_load() {
        let mut slides = custom_banner();
        slides[0].id = 1_718_000_000_000;
        slides[0].title = "Summer Sale".to_string();

        let json = serde_json::to_string(&slides).unwrap();
        let restored: Vec<BannerSlide> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, slides);

        let persisted = json!({ "bannerSlider": [{ "id": 1718000000000u64, "title": "Summer Sale" }] });
        let storage = InMemoryStorage::with_entry(KEY, &persisted.to_string());
        let store = ContentStore::open(storage, KEY);

        let banner = &store.document().banner_slider;
        assert_eq!(banner.len(), 1);
        assert_eq!(banner[0].id, 1_718_000_000_000);
        assert_eq!(banner[0].title, "Summer Sale");
        match store.load_status() {
            LoadStatus::Restored(sources) => {
                assert!(sources.contains(&(Section::BannerSlider, SectionSource::Persisted)));
            }
            other => panic!("unexpected load status {other:?}"),
        }
    }

    // ===============================
    // UPDATES
    // ===============================

    #[test]
    fn test_update_changes_only_its_section() {
        let storage = InMemoryStorage::new();
        let mut store = ContentStore::open(storage, KEY);
        let before = store.document().clone();

        let mut page = before.contact_page.clone();
        page.contact_methods.push(ContactMethod {
            title: "Text Us".to_string(),
            info: "(555) 123-9999".to_string(),
            sub_info: "Replies within the hour".to_string(),
            color: MethodColor::Green,
        });
        store.set_contact_page(page.clone());

        assert_eq!(store.document().contact_page, page);
        assert_eq!(store.document().changed_sections(&before), vec![Section::ContactPage]);
    }

    #[test]
    fn test_every_setter_persists_exactly_once() {
        let storage = InMemoryStorage::new();
        let mut store = ContentStore::open(storage.clone(), KEY);
        let doc = default_document();

        store.set_hero(doc.hero.clone());
        store.set_banner_slider(custom_banner());
        store.set_product_ads(doc.product_ads.clone());
        store.set_product_showcase(doc.product_showcase.clone());
        store.set_media_reviews(doc.media_reviews.clone());
        store.set_category_selection(doc.category_selection.clone());
        store.set_contact(doc.contact.clone());
        store.set_right_sidebar(custom_sidebar());
        store.set_contact_page(doc.contact_page.clone());

        assert_eq!(storage.write_count(), Section::ALL.len());
        let persisted = stored_document(&storage);
        assert_eq!(&persisted, store.document());
        assert_eq!(persisted.banner_slider, custom_banner());
    }

    #[test]
    fn test_store_accepts_unvalidated_hero_categories() {
        let mut store = ContentStore::open(InMemoryStorage::new(), KEY);
        let mut hero = store.document().hero.clone();
        hero.selected_categories = ["cooling", "heating", "cooling", "parts", "ventilation"]
            .iter()
            .map(|id| id.to_string())
            .collect();

        store.set_hero(hero.clone());

        assert_eq!(store.document().hero.selected_categories.len(), 5);
        assert_eq!(store.document().hero, hero);
    }

    #[test]
    fn test_update_section_json_rejects_bad_shapes() {
        let storage = InMemoryStorage::new();
        let mut store = ContentStore::open(storage.clone(), KEY);
        let before = store.document().clone();

        let result = store.update_section_json(Section::RightSidebar, r#"{"phone": 5}"#);
        assert!(matches!(result, Err(AppResponse::SerializationError(_))));
        assert!(store.update_section_json(Section::Contact, "{not valid json").is_err());

        assert_eq!(store.document(), &before);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_update_section_json_replaces_section() {
        let storage = InMemoryStorage::new();
        let mut store = ContentStore::open(storage.clone(), KEY);
        let json = serde_json::to_string(&custom_sidebar()).unwrap();

        store.update_section_json(Section::RightSidebar, &json).unwrap();

        assert_eq!(store.document().right_sidebar, custom_sidebar());
        assert_eq!(stored_document(&storage).right_sidebar, custom_sidebar());
    }

    #[test]
    fn test_reset_restores_and_persists_defaults() {
        let storage = InMemoryStorage::new();
        let mut store = ContentStore::open(storage.clone(), KEY);
        store.set_right_sidebar(custom_sidebar());
        store.set_banner_slider(custom_banner());

        store.reset();

        assert_eq!(store.document(), &default_document());
        assert_eq!(stored_document(&storage), default_document());
        assert_eq!(storage.write_count(), 3);
    }

    #[test]
    fn test_updates_survive_reload() {
        let storage = InMemoryStorage::new();
        {
            let mut store = ContentStore::open(storage.clone(), KEY);
            store.set_right_sidebar(custom_sidebar());
        }
        let reloaded = ContentStore::open(storage, KEY);
        assert_eq!(reloaded.document().right_sidebar, custom_sidebar());
    }

    #[test]
    fn test_separate_instances_are_independent() {
        let mut first = ContentStore::open(InMemoryStorage::new(), KEY);
        let second = ContentStore::open(InMemoryStorage::new(), KEY);

        first.set_right_sidebar(custom_sidebar());
        assert_ne!(first.document(), second.document());
        assert_eq!(second.document(), &default_document());
    }

    #[test]
    fn test_save_failure_keeps_in_memory_update() {
        let storage = InMemoryStorage::new();
        let observer = Arc::new(RecordingObserver::default());
        let mut store = ContentStore::open(storage.clone(), KEY);
        store.subscribe(observer.clone());

        storage.set_unavailable(true);
        store.set_right_sidebar(custom_sidebar());

        assert_eq!(store.document().right_sidebar, custom_sidebar());
        assert!(store.last_persist_error().is_some());
        assert_eq!(observer.persist_failures.lock().unwrap().len(), 1);

        storage.set_unavailable(false);
        store.set_contact(default_document().contact);
        assert!(store.last_persist_error().is_none());
        assert_eq!(stored_document(&storage).right_sidebar, custom_sidebar());
    }

    // ===============================
    // OBSERVERS
    // ===============================

    #[test]
    fn test_observers_see_changes_until_unsubscribed() {
        let observer = Arc::new(RecordingObserver::default());
        let mut store = ContentStore::new(InMemoryStorage::new(), KEY);
        let id = store.subscribe(observer.clone());

        store.load();
        store.set_right_sidebar(custom_sidebar());
        store.reset();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_contact(default_document().contact);

        let changes = observer.changes.lock().unwrap().clone();
        assert_eq!(changes, vec![None, Some(Section::RightSidebar), None]);
    }

    // ===============================
    // LMDB
    // ===============================

    #[test]
    fn test_lmdb_store_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("storefront");
        let config = StoreConfig::with_db_path(base.to_str().unwrap());

        {
            let mut store = ContentStore::open_with_config(&config);
            store.set_banner_slider(custom_banner());
        }

        let store = ContentStore::open_with_config(&config);
        assert_eq!(store.document().banner_slider, custom_banner());
        assert_eq!(store.document().hero, default_document().hero);
    }

    #[test]
    fn test_lmdb_storage_with_custom_key() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("custom_key");
        let storage = LmdbStorage::init(base.to_str().unwrap()).unwrap();
        storage.write("other_key", r#"{"bannerSlider": []}"#).unwrap();

        let mut store = ContentStore::open(storage, "cms_v2");
        assert_eq!(store.load_status(), &LoadStatus::Empty);
        store.set_right_sidebar(custom_sidebar());
        assert!(store.last_persist_error().is_none());
    }

    // ===============================
    // FFI
    // ===============================

    fn take_response(ptr: *const c_char) -> AppResponse {
        assert!(!ptr.is_null());
        let json = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        free_response(ptr);
        serde_json::from_str(&json).unwrap()
    }

    fn ffi_store(dir: &TempDir, name: &str) -> *mut crate::content_store::ContentStore {
        let config = json!({ "dbPath": dir.path().join(name).to_str().unwrap() }).to_string();
        let config = CString::new(config).unwrap();
        let store = create_content_store(config.as_ptr());
        assert!(!store.is_null());
        store
    }

    #[test]
    fn test_ffi_create_content_store_null_and_invalid() {
        assert!(create_content_store(std::ptr::null()).is_null());

        let invalid_utf8 = [0xffu8, 0xfe, 0x00];
        assert!(create_content_store(invalid_utf8.as_ptr() as *const c_char).is_null());

        let bad_config = CString::new(r#"{"storageKey": ""}"#).unwrap();
        assert!(create_content_store(bad_config.as_ptr()).is_null());
    }

    #[test]
    fn test_ffi_get_content_document() {
        let dir = TempDir::new().unwrap();
        let store = ffi_store(&dir, "ffi_document");

        match take_response(get_content_document(store)) {
            AppResponse::Ok(json) => {
                let document: ContentDocument = serde_json::from_str(&json).unwrap();
                assert_eq!(document, default_document());
            }
            other => panic!("unexpected response {other:?}"),
        }

        assert!(take_response(close_content_store(store)).is_ok());
    }

    #[test]
    fn test_ffi_update_and_get_section() {
        let dir = TempDir::new().unwrap();
        let store = ffi_store(&dir, "ffi_update");
        let section = CString::new("rightSidebar").unwrap();
        let json = CString::new(serde_json::to_string(&custom_sidebar()).unwrap()).unwrap();

        let updated = take_response(update_content_section(store, section.as_ptr(), json.as_ptr()));
        assert!(updated.is_ok());

        match take_response(get_content_section(store, section.as_ptr())) {
            AppResponse::Ok(json) => {
                let sidebar: RightSidebar = serde_json::from_str(&json).unwrap();
                assert_eq!(sidebar, custom_sidebar());
            }
            other => panic!("unexpected response {other:?}"),
        }

        assert!(take_response(reset_content(store)).is_ok());
        match take_response(get_content_section(store, section.as_ptr())) {
            AppResponse::Ok(json) => {
                let sidebar: RightSidebar = serde_json::from_str(&json).unwrap();
                assert_eq!(sidebar, default_document().right_sidebar);
            }
            other => panic!("unexpected response {other:?}"),
        }

        assert!(take_response(close_content_store(store)).is_ok());
    }

    #[test]
    fn test_ffi_update_rejects_unknown_section_and_bad_json() {
        let dir = TempDir::new().unwrap();
        let store = ffi_store(&dir, "ffi_errors");

        let unknown = CString::new("footer").unwrap();
        let json = CString::new("{}").unwrap();
        assert!(matches!(
            take_response(update_content_section(store, unknown.as_ptr(), json.as_ptr())),
            AppResponse::NotFound(_)
        ));

        let contact = CString::new("contact").unwrap();
        let bad = CString::new("{not valid json").unwrap();
        assert!(matches!(
            take_response(update_content_section(store, contact.as_ptr(), bad.as_ptr())),
            AppResponse::SerializationError(_)
        ));

        assert!(matches!(
            take_response(update_content_section(store, contact.as_ptr(), std::ptr::null())),
            AppResponse::BadRequest(_)
        ));

        assert!(take_response(close_content_store(store)).is_ok());
    }

    #[test]
    fn test_ffi_null_store_pointers() {
        let section = CString::new("hero").unwrap();
        let json = CString::new("{}").unwrap();
        let null = std::ptr::null_mut();

        assert!(matches!(take_response(get_content_document(null)), AppResponse::BadRequest(_)));
        assert!(matches!(
            take_response(get_content_section(null, section.as_ptr())),
            AppResponse::BadRequest(_)
        ));
        assert!(matches!(
            take_response(update_content_section(null, section.as_ptr(), json.as_ptr())),
            AppResponse::BadRequest(_)
        ));
        assert!(matches!(take_response(reset_content(null)), AppResponse::BadRequest(_)));
        assert!(matches!(take_response(close_content_store(null)), AppResponse::BadRequest(_)));

        // Freeing null is a no-op.
        free_response(std::ptr::null());
    }
}
