//! Page - One Fetched Batch of Artworks

use serde::Deserialize;

use crate::domain::artwork::Artwork;

/// An immutable page of records plus the total across all pages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    records: Vec<Artwork>,
    total: u64,
}

impl Page {
    pub fn new(records: Vec<Artwork>, total: u64) -> Self {
        Self { records, total }
    }

    /// Records in page order
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Total record count reported by the source
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop records beyond `page_size`
    pub fn truncated(mut self, page_size: usize) -> Self {
        self.records.truncate(page_size);
        self
    }
}

/// Wire shape of `GET /artworks`
#[derive(Debug, Deserialize)]
pub struct ArtworksResponse {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

/// Pagination block of a list response
#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub total: u64,
}

impl From<ArtworksResponse> for Page {
    fn from(response: ArtworksResponse) -> Self {
        Page::new(response.data, response.pagination.total)
    }
}

/// Number of pages needed for `total` records, never less than one
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 || total == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
