use serde_derive::{Deserialize, Serialize};

use crate::{Error, MappedPage, Page, PageSource, Result};

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Paging parameters for building a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Requested page, relative to `index_from`.
    pub page_index: usize,
    /// Maximum number of items on the page.
    pub page_size: usize,
    /// Numbering origin of `page_index`, usually 0 or 1.
    #[serde(default)]
    pub index_from: usize,
}

impl PageRequest {
    pub fn new(page_index: usize, page_size: usize, index_from: usize) -> Self {
        Self {
            page_index,
            page_size,
            index_from,
        }
    }

    pub fn with_page_index(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_index_from(mut self, index_from: usize) -> Self {
        self.index_from = index_from;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.index_from > self.page_index {
            return Err(Error::InvalidPaging {
                index_from: self.index_from,
                page_index: self.page_index,
            });
        }
        if self.page_size == 0 {
            return Err(Error::ZeroPageSize);
        }
        Ok(())
    }

    /// Number of items to skip before the page starts.
    ///
    /// Saturates at `usize::MAX`, which yields an empty window.
    #[inline]
    pub fn offset(&self) -> usize {
        self.page_index
            .saturating_sub(self.index_from)
            .saturating_mul(self.page_size)
    }

    pub fn paginate<S>(self, source: S) -> Result<Page<S::Item>>
    where
        S: PageSource,
    {
        Page::from_request(source, self)
    }

    pub fn paginate_map<S, F, I>(
        self,
        source: S,
        converter: F,
    ) -> Result<MappedPage<S::Item, I::Item>>
    where
        S: PageSource,
        F: FnOnce(Vec<S::Item>) -> I,
        I: IntoIterator,
    {
        MappedPage::from_request(source, converter, self)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE, 0)
    }
}

/// `(page_index, page_size, index_from)`
impl From<(usize, usize, usize)> for PageRequest {
    fn from((page_index, page_size, index_from): (usize, usize, usize)) -> Self {
        Self::new(page_index, page_size, index_from)
    }
}
