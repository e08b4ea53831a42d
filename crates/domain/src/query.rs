use serde::{Deserialize, Serialize};

/// Caller-supplied farm filter for list screens.
///
/// A raw value that parses as an integer filters by farm id. Anything
/// else degrades to no filter at all: the schema has no slug column to
/// fall back to, and an invalid filter is deliberately ignored rather
/// than surfaced as an error (the `InvalidFilterIgnored` leniency).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmFilter {
    ById(i32),
    Ignored,
}

impl FarmFilter {
    pub fn parse(raw: Option<&str>) -> Option<FarmFilter> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<i32>() {
            Ok(id) => Some(FarmFilter::ById(id)),
            Err(_) => Some(FarmFilter::Ignored),
        }
    }

    pub fn farm_id(&self) -> Option<i32> {
        match self {
            FarmFilter::ById(id) => Some(*id),
            FarmFilter::Ignored => None,
        }
    }
}

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size,
        }
    }

    /// Zero-based index for offset-style stores.
    pub fn index(&self) -> u64 {
        self.page.saturating_sub(1)
    }

    pub fn offset(&self) -> u64 {
        self.index() * self.page_size
    }
}

/// One page of results plus the totals list screens render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            0
        } else {
            total_items.div_ceil(request.page_size.max(1))
        };
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages,
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }
}
