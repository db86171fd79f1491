//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Code of the school whose meals and schedules are synced (in the NEIS school registry).
/// Feel free to override it when initing this library.
pub static SCHOOL_CODE: Lazy<Arc<Mutex<i32>>> = Lazy::new(|| Arc::new(Mutex::new(7010578)));

/// Display name of the school of [`SCHOOL_CODE`].
/// Feel free to override it when initing this library.
pub static SCHOOL_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("한빛맹학교".to_string())));

/// How many years before the current one are refreshed by a full sync
pub const SYNC_PAST_YEARS: i32 = 2;

/// Returns the configured school code
pub fn school_code() -> i32 {
    match SCHOOL_CODE.lock() {
        Ok(code) => *code,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Returns the configured school name
pub fn school_name() -> String {
    match SCHOOL_NAME.lock() {
        Ok(name) => name.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Select the school to sync and display
pub fn set_school(code: i32, name: &str) {
    log::info!("Selecting school {} ({})", name, code);
    match SCHOOL_CODE.lock() {
        Ok(mut c) => *c = code,
        Err(poisoned) => *poisoned.into_inner() = code,
    }
    match SCHOOL_NAME.lock() {
        Ok(mut n) => *n = name.to_string(),
        Err(poisoned) => *poisoned.into_inner() = name.to_string(),
    }
}
