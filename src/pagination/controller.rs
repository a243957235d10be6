use log::debug;

use super::state::{ItemsPerPage, PaginationState};
use super::window::{self, PageMarker};

pub const PREVIOUS_LABEL: &str = "Go to previous page";
pub const NEXT_LABEL: &str = "Go to next page";
pub const ITEMS_PER_PAGE_LABEL: &str = "Items per page:";

pub fn page_label(page: usize) -> String {
    format!("Go to page {page}")
}

/// Receiver for the intents raised by [`PaginationControls`].
///
/// The implementor owns the authoritative pagination state; the controls only
/// ever report what the user asked for.
pub trait PaginationHandler {
    fn on_page_change(&mut self, page: usize);

    fn on_items_per_page_change(&mut self, items_per_page: ItemsPerPage);
}

/// Closure-backed [`PaginationHandler`].
pub struct Callbacks<P, I>
where
    P: FnMut(usize),
    I: FnMut(ItemsPerPage),
{
    on_page_change: P,
    on_items_per_page_change: I,
}

impl<P, I> Callbacks<P, I>
where
    P: FnMut(usize),
    I: FnMut(ItemsPerPage),
{
    pub fn new(on_page_change: P, on_items_per_page_change: I) -> Self {
        Self {
            on_page_change,
            on_items_per_page_change,
        }
    }
}

impl<P, I> PaginationHandler for Callbacks<P, I>
where
    P: FnMut(usize),
    I: FnMut(ItemsPerPage),
{
    fn on_page_change(&mut self, page: usize) {
        (self.on_page_change)(page)
    }

    fn on_items_per_page_change(&mut self, items_per_page: ItemsPerPage) {
        (self.on_items_per_page_change)(items_per_page)
    }
}

/// An interactive control of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    ItemsPerPage,
    Previous,
    Page(usize),
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSlot {
    Page {
        page: usize,
        label: String,
        /// Marks the active page for assistive tech.
        current: bool,
        disabled: bool,
    },
    Gap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    pub label: &'static str,
    pub value: ItemsPerPage,
    pub options: [ItemsPerPage; 3],
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView {
    pub previous: ButtonView,
    pub pages: Vec<PageSlot>,
    pub next: ButtonView,
}

/// Everything the pagination bar renders for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsView {
    pub selector: SelectorView,
    /// `None` when there is at most one page.
    pub navigation: Option<NavigationView>,
}

impl ControlsView {
    /// Enabled controls in render order.
    pub fn controls(&self) -> Vec<Control> {
        let mut controls = Vec::new();
        if !self.selector.disabled {
            controls.push(Control::ItemsPerPage);
        }
        if let Some(nav) = &self.navigation {
            if !nav.previous.disabled {
                controls.push(Control::Previous);
            }
            for slot in &nav.pages {
                if let PageSlot::Page {
                    page,
                    disabled: false,
                    ..
                } = slot
                {
                    controls.push(Control::Page(*page));
                }
            }
            if !nav.next.disabled {
                controls.push(Control::Next);
            }
        }
        controls
    }

    /// The slot flagged as the active page, if it is rendered.
    pub fn current_page(&self) -> Option<usize> {
        self.navigation.as_ref()?.pages.iter().find_map(|slot| match slot {
            PageSlot::Page {
                page,
                current: true,
                ..
            } => Some(*page),
            _ => None,
        })
    }

    pub fn find_label(&self, label: &str) -> Option<Control> {
        let nav = self.navigation.as_ref()?;
        if nav.previous.label == label {
            return Some(Control::Previous);
        }
        if nav.next.label == label {
            return Some(Control::Next);
        }
        nav.pages.iter().find_map(|slot| match slot {
            PageSlot::Page { page, label: l, .. } if l == label => Some(Control::Page(*page)),
            _ => None,
        })
    }
}

/// Stateless pagination controls over a caller-supplied snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    state: PaginationState,
    disabled: bool,
}

impl PaginationControls {
    pub fn new(state: PaginationState) -> Self {
        Self {
            state,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Previous/next and the page row are hidden for a single page.
    pub fn shows_navigation(&self) -> bool {
        self.state.total_pages > 1
    }

    pub fn request_previous(&self, handler: &mut dyn PaginationHandler) -> bool {
        if self.disabled || self.state.is_first_page() {
            return false;
        }
        let target = self.state.current_page - 1;
        debug!("Pagination: previous -> page {target}");
        handler.on_page_change(target);
        true
    }

    pub fn request_next(&self, handler: &mut dyn PaginationHandler) -> bool {
        if self.disabled || self.state.is_last_page() {
            return false;
        }
        let target = self.state.current_page + 1;
        debug!("Pagination: next -> page {target}");
        handler.on_page_change(target);
        true
    }

    /// Forwards `page` as is; callers only pass pages from the rendered row.
    pub fn request_page(&self, page: usize, handler: &mut dyn PaginationHandler) -> bool {
        if self.disabled {
            return false;
        }
        debug!("Pagination: jump -> page {page}");
        handler.on_page_change(page);
        true
    }

    pub fn request_items_per_page(
        &self,
        items_per_page: ItemsPerPage,
        handler: &mut dyn PaginationHandler,
    ) -> bool {
        if self.disabled {
            return false;
        }
        debug!("Pagination: items per page -> {items_per_page}");
        handler.on_items_per_page_change(items_per_page);
        true
    }

    /// Activate a button control. The selector has no single action and is
    /// driven through [`Self::request_items_per_page`].
    pub fn activate(&self, control: Control, handler: &mut dyn PaginationHandler) -> bool {
        match control {
            Control::Previous => self.request_previous(handler),
            Control::Next => self.request_next(handler),
            Control::Page(page) => self.request_page(page, handler),
            Control::ItemsPerPage => false,
        }
    }

    pub fn view(&self) -> ControlsView {
        let selector = SelectorView {
            label: ITEMS_PER_PAGE_LABEL,
            value: self.state.items_per_page,
            options: ItemsPerPage::ALL,
            disabled: self.disabled,
        };

        if !self.shows_navigation() {
            return ControlsView {
                selector,
                navigation: None,
            };
        }

        let current = self.state.current_page;
        let pages = window::compute(current, self.state.total_pages)
            .into_iter()
            .map(|marker| match marker {
                PageMarker::Number(page) => PageSlot::Page {
                    page,
                    label: page_label(page),
                    current: page == current,
                    disabled: self.disabled,
                },
                PageMarker::Gap => PageSlot::Gap,
            })
            .collect();

        ControlsView {
            selector,
            navigation: Some(NavigationView {
                previous: ButtonView {
                    label: PREVIOUS_LABEL.to_string(),
                    disabled: self.disabled || self.state.is_first_page(),
                },
                pages,
                next: ButtonView {
                    label: NEXT_LABEL.to_string(),
                    disabled: self.disabled || self.state.is_last_page(),
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        pages: Vec<usize>,
        sizes: Vec<ItemsPerPage>,
    }

    impl PaginationHandler for Recorder {
        fn on_page_change(&mut self, page: usize) {
            self.pages.push(page);
        }

        fn on_items_per_page_change(&mut self, items_per_page: ItemsPerPage) {
            self.sizes.push(items_per_page);
        }
    }

    fn controls(current_page: usize, total_pages: usize) -> PaginationControls {
        PaginationControls::new(PaginationState::new(
            current_page,
            total_pages,
            ItemsPerPage::Twenty,
            total_pages * 20,
        ))
    }

    #[test]
    fn previous_steps_back() {
        let mut recorder = Recorder::default();
        assert!(controls(3, 5).request_previous(&mut recorder));
        assert_eq!(recorder.pages, vec![2]);
    }

    #[test]
    fn previous_is_noop_on_first_page() {
        let mut recorder = Recorder::default();
        assert!(!controls(1, 5).request_previous(&mut recorder));
        assert!(recorder.pages.is_empty());
    }

    #[test]
    fn next_steps_forward() {
        let mut recorder = Recorder::default();
        assert!(controls(3, 5).request_next(&mut recorder));
        assert_eq!(recorder.pages, vec![4]);
    }

    #[test]
    fn next_is_noop_on_last_page() {
        let mut recorder = Recorder::default();
        assert!(!controls(5, 5).request_next(&mut recorder));
        assert!(!controls(1, 0).request_next(&mut recorder));
        assert!(recorder.pages.is_empty());
    }

    #[test]
    fn page_request_is_forwarded_unclamped() {
        let mut recorder = Recorder::default();
        controls(1, 5).request_page(4, &mut recorder);
        controls(1, 5).request_page(99, &mut recorder);
        assert_eq!(recorder.pages, vec![4, 99]);
    }

    #[test]
    fn items_per_page_fires_once_with_value() {
        let mut recorder = Recorder::default();
        let selection: ItemsPerPage = "50".parse().unwrap();
        assert!(controls(1, 5).request_items_per_page(selection, &mut recorder));
        assert_eq!(recorder.sizes, vec![ItemsPerPage::Fifty]);
        assert_eq!(recorder.sizes[0].value(), 50);
    }

    #[test]
    fn disabled_controls_never_fire() {
        let mut recorder = Recorder::default();
        let disabled = controls(3, 5).disabled(true);
        assert!(!disabled.request_previous(&mut recorder));
        assert!(!disabled.request_next(&mut recorder));
        assert!(!disabled.request_page(2, &mut recorder));
        assert!(!disabled.request_items_per_page(ItemsPerPage::Ten, &mut recorder));
        for control in [Control::Previous, Control::Next, Control::Page(1)] {
            assert!(!disabled.activate(control, &mut recorder));
        }
        assert!(recorder.pages.is_empty());
        assert!(recorder.sizes.is_empty());
    }

    #[test]
    fn closures_work_as_handler() {
        let mut pages = Vec::new();
        let mut sizes = Vec::new();
        {
            let mut callbacks = Callbacks::new(|p| pages.push(p), |s| sizes.push(s));
            let controls = controls(2, 3);
            controls.activate(Control::Next, &mut callbacks);
            controls.request_items_per_page(ItemsPerPage::Ten, &mut callbacks);
        }
        assert_eq!(pages, vec![3]);
        assert_eq!(sizes, vec![ItemsPerPage::Ten]);
    }

    #[test]
    fn single_or_no_page_hides_navigation() {
        for total in [0, 1] {
            let view = controls(1, total).view();
            assert!(view.navigation.is_none());
            assert_eq!(view.selector.label, ITEMS_PER_PAGE_LABEL);
            assert!(!view.selector.disabled);
            assert_eq!(view.controls(), vec![Control::ItemsPerPage]);
        }
    }

    #[test]
    fn view_marks_current_page_and_labels() {
        let view = controls(3, 5).view();
        let nav = view.navigation.as_ref().unwrap();
        assert_eq!(nav.previous.label, "Go to previous page");
        assert_eq!(nav.next.label, "Go to next page");
        assert_eq!(view.current_page(), Some(3));
        assert_eq!(view.find_label("Go to page 5"), Some(Control::Page(5)));
        assert!(!nav.pages.contains(&PageSlot::Gap));
        let current: Vec<_> = nav
            .pages
            .iter()
            .filter(|slot| matches!(slot, PageSlot::Page { current: true, .. }))
            .collect();
        assert_eq!(current.len(), 1);
    }

    #[test]
    fn boundary_buttons_render_disabled() {
        let first = controls(1, 2).view();
        let nav = first.navigation.as_ref().unwrap();
        assert!(nav.previous.disabled);
        assert!(!nav.next.disabled);

        let last = controls(5, 5).view();
        let nav = last.navigation.as_ref().unwrap();
        assert!(!nav.previous.disabled);
        assert!(nav.next.disabled);
    }

    #[test]
    fn disabled_view_greys_everything() {
        let view = controls(3, 5).disabled(true).view();
        assert!(view.selector.disabled);
        let nav = view.navigation.as_ref().unwrap();
        assert!(nav.previous.disabled);
        assert!(nav.next.disabled);
        assert!(nav.pages.iter().all(|slot| match slot {
            PageSlot::Page { disabled, .. } => *disabled,
            PageSlot::Gap => true,
        }));
        assert!(view.controls().is_empty());
    }

    #[test]
    fn focus_order_skips_gaps_and_disabled_buttons() {
        let view = controls(1, 20).view();
        assert_eq!(
            view.controls(),
            vec![
                Control::ItemsPerPage,
                Control::Page(1),
                Control::Page(2),
                Control::Page(3),
                Control::Page(18),
                Control::Page(19),
                Control::Page(20),
                Control::Next,
            ]
        );
    }

    #[test]
    fn out_of_range_page_disables_matching_button() {
        let mut recorder = Recorder::default();

        let below = controls(0, 5);
        assert!(below.view().navigation.unwrap().previous.disabled);
        assert!(!below.request_previous(&mut recorder));

        let above = controls(9, 5);
        assert!(above.view().navigation.unwrap().next.disabled);
        assert!(!above.request_next(&mut recorder));
        assert!(recorder.pages.is_empty());
    }
}
