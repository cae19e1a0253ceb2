use crate::envelope::{Envelope, PageMeta};

pub const PAGED_MESSAGE: &str = "Success retrieved data";
pub const ALL_MESSAGE: &str = "Success retrieved all data";

/// Requested page. Non-positive `page` or `limit` means "everything".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

/// Skip/limit pair handed to a repository. `limit == 0` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreWindow {
    pub skip: u64,
    pub limit: u64,
}

impl StoreWindow {
    pub const UNBOUNDED: StoreWindow = StoreWindow { skip: 0, limit: 0 };

    pub fn is_unbounded(&self) -> bool {
        self.limit == 0
    }
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    pub fn is_bounded(&self) -> bool {
        self.page > 0 && self.limit > 0
    }

    pub fn window(&self) -> StoreWindow {
        if !self.is_bounded() {
            return StoreWindow::UNBOUNDED;
        }
        // Stores take skip as a signed 64-bit count.
        StoreWindow {
            skip: (self.page - 1).saturating_mul(self.limit) as u64,
            limit: self.limit as u64,
        }
    }
}

/// One page of results plus the collection total.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_items: u64, request: PageRequest) -> Self {
        Self {
            items,
            total_items,
            request,
        }
    }

    /// `ceil(total_items / limit)`; `None` for an unbounded listing.
    pub fn total_pages(&self) -> Option<u64> {
        self.request
            .is_bounded()
            .then(|| self.total_items.div_ceil(self.request.limit as u64))
    }

    pub fn meta(&self) -> Option<PageMeta> {
        self.total_pages().map(|total_pages| PageMeta {
            page: self.request.page,
            limit: self.request.limit,
            total_pages,
            total_items: self.total_items,
        })
    }

    /// Render as the list response body: paginated shape when a window was
    /// requested, "all data" shape otherwise.
    pub fn into_envelope(self) -> Envelope<Vec<T>> {
        match self.meta() {
            Some(meta) => Envelope::paginated(PAGED_MESSAGE, self.items, meta),
            None => Envelope::new(ALL_MESSAGE, self.items),
        }
    }
}
