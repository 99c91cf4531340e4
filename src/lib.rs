//! # HVAC CMS Core
//!
//! Local content store behind the HVAC storefront's editable pages. It holds
//! one typed [`ContentDocument`](content_model::ContentDocument) with nine
//! sections (hero, banners, product ads, showcase, media, category grid,
//! contact block, sidebar, contact page), merges persisted content over the
//! built-in defaults on load, and persists the whole document as one JSON
//! blob after every section update.
//!
//! ## Features
//!
//! - **Typed content model**: every section is a serde struct; the JSON keeps
//!   the storefront's camelCase format
//! - **Or-default merge**: sections missing from storage fall back to the
//!   defaults, so older blobs keep loading as the schema grows
//! - **Pluggable storage**: LMDB on disk, or in memory for tests
//! - **Never fatal**: load and save failures are logged and reported to
//!   observers, the in-memory document stays authoritative
//!
//! ## Quick Start
//!
//! ```no_run
//! use hvac_cms_core::content_store::ContentStore;
//! use hvac_cms_core::store_config::StoreConfig;
//!
//! let mut store = ContentStore::open_with_config(&StoreConfig::with_db_path("storefront"));
//! let mut sidebar = store.document().right_sidebar.clone();
//! sidebar.phone = "(555) 000-1111".to_string();
//! store.set_right_sidebar(sidebar);
//! ```
//!
//! ## FFI Functions
//!
//! For UI shells that link the library natively:
//!
//! - [`create_content_store`] - Open a store from a name or JSON config
//! - [`get_content_document`] - Current document as JSON
//! - [`get_content_section`] - One section as JSON
//! - [`update_content_section`] - Replace one section
//! - [`reset_content`] - Restore and persist the defaults
//! - [`close_content_store`] - Release the store
//! - [`free_response`] - Free a string returned by any of the above

pub mod app_response;
pub mod auth_state;
pub mod content_defaults;
pub mod content_merge;
pub mod content_model;
pub mod content_store;
pub mod hero_form;
pub mod lmdb_storage;
pub mod storage;
pub mod store_config;
mod test;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use log::{info, warn};

use crate::app_response::AppResponse;
use crate::content_model::Section;
use crate::content_store::ContentStore;
use crate::store_config::StoreConfig;

/// Opens a content store.
///
/// `config` is either a bare database name (the LMDB environment is created
/// at `<name>.lmdb`) or a JSON [`StoreConfig`] such as
/// `{"dbPath":"storefront","storageKey":"cms_content"}`.
///
/// # Returns
///
/// A pointer to the store, or null if `config` is null, not UTF-8 or not a
/// valid configuration. A store whose LMDB environment cannot be opened is
/// still returned; it keeps content in memory and logs every failed save.
/// Release it with [`close_content_store`].
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use hvac_cms_core::create_content_store;
///
/// let name = CString::new("storefront").unwrap();
/// let store = create_content_store(name.as_ptr());
/// assert!(!store.is_null());
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_content_store(config: *const c_char) -> *mut ContentStore {
    if config.is_null() {
        warn!("Null config pointer passed to create_content_store");
        return std::ptr::null_mut();
    }

    let config_str = match unsafe { CStr::from_ptr(config).to_str() } {
        Ok(s) => s,
        Err(e) => {
            warn!("Invalid UTF-8 in config parameter: {e}");
            return std::ptr::null_mut();
        }
    };

    let config = match StoreConfig::parse(config_str) {
        Ok(config) => config,
        Err(e) => {
            warn!("Rejected store configuration: {e}");
            return std::ptr::null_mut();
        }
    };

    info!("Opening content store at {}.lmdb", config.db_path);
    let store = ContentStore::open_with_config(&config);
    Box::into_raw(Box::new(store))
}

/// Returns the whole current document.
///
/// Response: `{"Ok": "<document json>"}` or an error variant.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_content_document(store: *mut ContentStore) -> *const c_char {
    let store = match unsafe { store.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer passed to get_content_document".to_string());
            return response_to_c_string(&error);
        }
    };

    match serde_json::to_string(store.document()) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Returns one section, addressed by its JSON key (`hero`, `bannerSlider`,
/// `contactPage`, ...).
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_content_section(store: *mut ContentStore, section: *const c_char) -> *const c_char {
    let store = match unsafe { store.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer passed to get_content_section".to_string());
            return response_to_c_string(&error);
        }
    };

    let section = match section_from_ptr(section) {
        Ok(section) => section,
        Err(error_ptr) => return error_ptr,
    };

    match store.section_json(section) {
        Ok(value) => response_to_c_string(&AppResponse::Ok(value.to_string())),
        Err(e) => response_to_c_string(&e),
    }
}

/// Replaces one section with the full value in `json_ptr`.
///
/// The value must be complete; partial updates are not supported. On
/// success the response carries the stored section. Storage failures do not
/// turn the response into an error: the update holds for the session.
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use hvac_cms_core::{create_content_store, update_content_section};
///
/// let store = create_content_store(CString::new("storefront").unwrap().as_ptr());
/// let section = CString::new("rightSidebar").unwrap();
/// let json = CString::new(r#"{"phone":"1","fax":"2","email":"a@b.c","hours":["Mon-Fri"]}"#).unwrap();
/// let result = update_content_section(store, section.as_ptr(), json.as_ptr());
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn update_content_section(
    store: *mut ContentStore,
    section: *const c_char,
    json_ptr: *const c_char,
) -> *const c_char {
    let store = match unsafe { store.as_mut() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer passed to update_content_section".to_string());
            return response_to_c_string(&error);
        }
    };

    let section = match section_from_ptr(section) {
        Ok(section) => section,
        Err(error_ptr) => return error_ptr,
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    if let Err(e) = store.update_section_json(section, &json_str) {
        return response_to_c_string(&e);
    }

    match store.section_json(section) {
        Ok(value) => response_to_c_string(&AppResponse::Ok(value.to_string())),
        Err(e) => response_to_c_string(&e),
    }
}

/// Restores the built-in defaults and overwrites the persisted copy.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn reset_content(store: *mut ContentStore) -> *const c_char {
    let store = match unsafe { store.as_mut() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null store pointer passed to reset_content".to_string());
            return response_to_c_string(&error);
        }
    };

    store.reset();
    response_to_c_string(&AppResponse::success("Content reset to defaults"))
}

/// Releases a store created by [`create_content_store`].
///
/// The LMDB environment is synced and closed. The pointer must not be used
/// afterwards.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn close_content_store(store: *mut ContentStore) -> *const c_char {
    if store.is_null() {
        let error = AppResponse::BadRequest("Null store pointer passed to close_content_store".to_string());
        return response_to_c_string(&error);
    }

    drop(unsafe { Box::from_raw(store) });
    response_to_c_string(&AppResponse::success("Content store closed successfully"))
}

/// Frees a response string returned by this library. Null is ignored.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn free_response(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(ptr as *mut c_char) });
}

/// Serializes an [`AppResponse`] to JSON and hands it out as a C string.
///
/// Returns null if serialization or C string creation fails.
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Converts a C string pointer to a Rust String.
///
/// On a null pointer or invalid UTF-8 the error side carries a ready-made
/// `BadRequest` response naming `field_name`.
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}

fn section_from_ptr(ptr: *const c_char) -> Result<Section, *const c_char> {
    let key = c_ptr_to_string(ptr, "section")?;
    Section::from_key(&key).ok_or_else(|| {
        let error = AppResponse::NotFound(format!("No content section named '{key}'"));
        response_to_c_string(&error)
    })
}
