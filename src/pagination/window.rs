//! Page-window shaping for the pagination bar.

/// Windows up to this many pages show every page number.
pub const MAX_VISIBLE_PAGES: usize = 7;

/// Number of pages pinned at each end of a collapsed window.
const EDGE_BLOCK: usize = 3;

/// One slot of the rendered page row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A clickable 1-based page number.
    Number(usize),
    /// An ellipsis standing for elided pages. Never clickable.
    Gap,
}

impl PageMarker {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageMarker::Number(page) => Some(*page),
            PageMarker::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, PageMarker::Gap)
    }
}

/// Ordered page markers for one pagination state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageWindow {
    markers: Vec<PageMarker>,
}

impl PageWindow {
    pub fn markers(&self) -> &[PageMarker] {
        &self.markers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageMarker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Page numbers in the window, gaps skipped.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.markers.iter().filter_map(PageMarker::page)
    }

    pub fn gap_count(&self) -> usize {
        self.markers.iter().filter(|m| m.is_gap()).count()
    }

    pub fn contains_page(&self, page: usize) -> bool {
        self.pages().any(|p| p == page)
    }
}

impl<'a> IntoIterator for &'a PageWindow {
    type Item = &'a PageMarker;
    type IntoIter = std::slice::Iter<'a, PageMarker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}

impl IntoIterator for PageWindow {
    type Item = PageMarker;
    type IntoIter = std::vec::IntoIter<PageMarker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.into_iter()
    }
}

/// Compute the page row for `current_page` out of `total_pages`.
///
/// Small totals list every page. Larger totals keep the first and last three
/// pages and collapse the rest into gaps, surfacing `current_page` between two
/// gaps only when it lies strictly inside the collapsed range.
///
/// `current_page` outside `1..=total_pages` never panics: it classifies as an
/// edge position, so it is simply not surfaced.
pub fn compute(current_page: usize, total_pages: usize) -> PageWindow {
    let mut markers = Vec::with_capacity(MAX_VISIBLE_PAGES + 2);

    if total_pages <= MAX_VISIBLE_PAGES {
        markers.extend((1..=total_pages).map(PageMarker::Number));
        return PageWindow { markers };
    }

    markers.extend((1..=EDGE_BLOCK).map(PageMarker::Number));

    let tail_start = total_pages - (EDGE_BLOCK - 1);
    let in_middle = current_page > EDGE_BLOCK && current_page < tail_start;
    if in_middle {
        markers.push(PageMarker::Gap);
        markers.push(PageMarker::Number(current_page));
        markers.push(PageMarker::Gap);
    } else {
        markers.push(PageMarker::Gap);
    }

    // Skip anything the head block already emitted.
    markers.extend(
        (tail_start..=total_pages)
            .filter(|page| *page > EDGE_BLOCK)
            .map(PageMarker::Number),
    );

    PageWindow { markers }
}
