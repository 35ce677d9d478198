//! Fixed-size pagination over ordered listings.

/// Number of records per page for every listing.
pub const PAGE_SIZE: u32 = 15;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Requests `page` with the standard page size. Page 0 is treated as 1.
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: PAGE_SIZE,
        }
    }

    pub fn first() -> Self {
        Self::new(1)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Rows to skip, for SQL `OFFSET`.
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    /// Rows to return, for SQL `LIMIT`.
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One materialized page plus the totals needed for navigation.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub per_page: u32,
    /// Matching records across all pages.
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: i64) -> Self {
        Self {
            items,
            current_page: request.page(),
            per_page: request.per_page(),
            total: total.max(0),
        }
    }

    /// `ceil(total / per_page)`, never below 1.
    pub fn last_page(&self) -> u32 {
        let per_page = i64::from(self.per_page.max(1));
        let pages = (self.total + per_page - 1) / per_page;

        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// 1-based position of the first item on this page, `None` when empty.
    pub fn first_item(&self) -> Option<i64> {
        if self.items.is_empty() {
            return None;
        }

        Some(i64::from(self.current_page - 1) * i64::from(self.per_page) + 1)
    }

    /// 1-based position of the last item on this page, `None` when empty.
    pub fn last_item(&self) -> Option<i64> {
        self.first_item().map(|from| from + self.items.len() as i64 - 1)
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}
