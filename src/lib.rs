// Export modules for use in tests
pub mod event_source;
pub mod main_app;
pub mod navbar;
pub mod pagination;
pub mod panic_handler;
pub mod records;
pub mod settings;
pub mod theme;
pub mod toast;
pub mod widget;

pub mod test_utils;

pub use main_app::{App, AppAction, run_app_with_event_source};
