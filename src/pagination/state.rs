use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Page sizes offered by the items-per-page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum ItemsPerPage {
    Ten,
    #[default]
    Twenty,
    Fifty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported items-per-page value `{0}`, expected one of 10, 20, 50")]
pub struct InvalidItemsPerPage(pub String);

impl ItemsPerPage {
    pub const ALL: [ItemsPerPage; 3] = [
        ItemsPerPage::Ten,
        ItemsPerPage::Twenty,
        ItemsPerPage::Fifty,
    ];

    pub fn value(self) -> usize {
        match self {
            ItemsPerPage::Ten => 10,
            ItemsPerPage::Twenty => 20,
            ItemsPerPage::Fifty => 50,
        }
    }

    /// Next larger option, wrapping around to the smallest.
    pub fn next(self) -> Self {
        match self {
            ItemsPerPage::Ten => ItemsPerPage::Twenty,
            ItemsPerPage::Twenty => ItemsPerPage::Fifty,
            ItemsPerPage::Fifty => ItemsPerPage::Ten,
        }
    }

    /// Next smaller option, wrapping around to the largest.
    pub fn previous(self) -> Self {
        match self {
            ItemsPerPage::Ten => ItemsPerPage::Fifty,
            ItemsPerPage::Twenty => ItemsPerPage::Ten,
            ItemsPerPage::Fifty => ItemsPerPage::Twenty,
        }
    }
}

impl fmt::Display for ItemsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<ItemsPerPage> for usize {
    fn from(value: ItemsPerPage) -> Self {
        value.value()
    }
}

impl TryFrom<usize> for ItemsPerPage {
    type Error = InvalidItemsPerPage;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(ItemsPerPage::Ten),
            20 => Ok(ItemsPerPage::Twenty),
            50 => Ok(ItemsPerPage::Fifty),
            other => Err(InvalidItemsPerPage(other.to_string())),
        }
    }
}

impl FromStr for ItemsPerPage {
    type Err = InvalidItemsPerPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<usize>()
            .map_err(|_| InvalidItemsPerPage(trimmed.to_string()))
            .and_then(ItemsPerPage::try_from)
    }
}

/// Caller-owned pagination values, handed to the controls on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: ItemsPerPage,
    /// Informational only, the page window never looks at it.
    pub total_items: usize,
}

impl PaginationState {
    pub fn new(
        current_page: usize,
        total_pages: usize,
        items_per_page: ItemsPerPage,
        total_items: usize,
    ) -> Self {
        Self {
            current_page,
            total_pages,
            items_per_page,
            total_items,
        }
    }

    /// Derive `total_pages` from the item count and page size.
    pub fn for_items(
        current_page: usize,
        items_per_page: ItemsPerPage,
        total_items: usize,
    ) -> Self {
        Self::new(
            current_page,
            total_items.div_ceil(items_per_page.value()),
            items_per_page,
            total_items,
        )
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Copy with `current_page` pulled into `1..=max(total_pages, 1)`.
    pub fn clamped(self) -> Self {
        Self {
            current_page: self.current_page.clamp(1, self.total_pages.max(1)),
            ..self
        }
    }
}
