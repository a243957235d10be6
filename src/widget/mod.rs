pub mod navbar;
pub mod pagination_bar;
pub mod records_table;
pub mod toasts;

pub use pagination_bar::PaginationBar;
