//! Pagination core: page-window shaping and the controls contract.

pub mod controller;
pub mod state;
pub mod window;

pub use controller::{
    ButtonView, Callbacks, Control, ControlsView, NavigationView, PageSlot, PaginationControls,
    PaginationHandler, SelectorView,
};
pub use state::{InvalidItemsPerPage, ItemsPerPage, PaginationState};
pub use window::{PageMarker, PageWindow, compute};
