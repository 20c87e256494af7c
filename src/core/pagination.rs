/// Rows shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page window over a list of `total_items` rows. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl Pagination {
    /// Out-of-range pages are clamped; a zero page size falls back to the
    /// default.
    pub fn new(total_items: usize, page_size: usize, page: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        let total_pages = total_items.div_ceil(page_size).max(1);

        Self {
            current_page: page.clamp(1, total_pages),
            page_size,
            total_items,
            total_pages,
        }
    }

    pub fn go_to(self, page: usize) -> Self {
        Self::new(self.total_items, self.page_size, page)
    }

    pub fn previous(self) -> Self {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn next(self) -> Self {
        self.go_to(self.current_page + 1)
    }

    /// Changing the page size restarts from page 1.
    pub fn with_page_size(self, page_size: usize) -> Self {
        if page_size == 0 {
            return self;
        }
        Self::new(self.total_items, page_size, 1)
    }

    /// 0-based index of the first row on the page.
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// `Showing 11-20 of 57`
    pub fn summary(&self) -> String {
        if self.total_items == 0 {
            return "Showing 0 of 0".to_string();
        }
        let first = self.offset() + 1;
        let last = (self.offset() + self.page_size).min(self.total_items);
        format!(
            "Showing {first}-{last} of {} (page {}/{})",
            self.total_items, self.current_page, self.total_pages
        )
    }

    /// `previous: --page 2, next: --page 4`, or `None` when everything fits
    /// on one page.
    pub fn nav_hint(&self) -> Option<String> {
        if self.total_pages <= 1 {
            return None;
        }
        let mut parts = Vec::new();
        let previous = self.previous();
        if previous.current_page != self.current_page {
            parts.push(format!("previous: --page {}", previous.current_page));
        }
        let next = self.next();
        if next.current_page != self.current_page {
            parts.push(format!("next: --page {}", next.current_page));
        }
        Some(parts.join(", "))
    }
}
