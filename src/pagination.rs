/// Number of recipes requested per page of the random listing
pub const PAGE_SIZE: u32 = 12;

/// Highest allowed start of a page window (at most 9 pages)
pub const MAX_PAGE_FROM: u32 = 96;

/// Half-open window `[from, to)` into the random recipe listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    from: u32,
    to: u32,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            from: 0,
            to: PAGE_SIZE,
        }
    }
}

impl PageWindow {
    /// Window starting at `from`, clamped to `[0, MAX_PAGE_FROM]`
    pub fn starting_at(from: u32) -> Self {
        let from = from.min(MAX_PAGE_FROM);
        Self {
            from,
            to: from + PAGE_SIZE,
        }
    }

    pub fn from(&self) -> u32 {
        self.from
    }

    pub fn to(&self) -> u32 {
        self.to
    }

    /// 1-based page number, for display
    pub fn page_number(&self) -> u32 {
        self.from / PAGE_SIZE + 1
    }

    pub fn has_previous(&self) -> bool {
        self.from > 0
    }

    pub fn has_next(&self) -> bool {
        self.from < MAX_PAGE_FROM
    }

    /// Move one page forward. Returns `false` and leaves the window alone on the last page.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.from += PAGE_SIZE;
        self.to += PAGE_SIZE;
        true
    }

    /// Move one page back. Returns `false` and leaves the window alone on the first page.
    pub fn retreat(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.from -= PAGE_SIZE;
        self.to -= PAGE_SIZE;
        true
    }
}
