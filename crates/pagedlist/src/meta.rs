use serde::{Serialize, Serializer, ser::SerializeStruct};
use serde_derive::Deserialize;

use crate::{Error, PageRequest};

/// Position of a page and the size of the sequence it was cut from.
///
/// Fixed once the page is built. `has_previous_page` and `has_next_page` are
/// derived, they are serialized for consumers but never read back.
///
/// Deserializing checks the same invariants as building a page: `index_from <=
/// page_index` and `total_pages == ceil(total_count / page_size)`. A zero
/// `page_size` is only accepted for the empty page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawPageMeta")]
pub struct PageMeta {
    index_from: usize,
    page_index: usize,
    page_size: usize,
    total_count: usize,
    total_pages: usize,
}

impl PageMeta {
    /// Computes the metadata of the page `request` selects out of `total_count` items.
    ///
    /// `request.page_size` must be non zero.
    pub(crate) fn compute(request: PageRequest, total_count: usize) -> Self {
        Self {
            index_from: request.index_from,
            page_index: request.page_index,
            page_size: request.page_size,
            total_count,
            total_pages: total_count.div_ceil(request.page_size),
        }
    }

    #[inline]
    pub fn index_from(&self) -> usize {
        self.index_from
    }

    #[inline]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[inline]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    #[inline]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Zero based position of the page.
    #[inline]
    pub fn position(&self) -> usize {
        self.page_index.saturating_sub(self.index_from)
    }

    #[inline]
    pub fn has_previous_page(&self) -> bool {
        self.position() > 0
    }

    #[inline]
    pub fn has_next_page(&self) -> bool {
        self.position().saturating_add(1) < self.total_pages
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page_index, self.page_size, self.index_from)
    }

    /// Number of items a page with this metadata holds.
    pub fn window_len(&self) -> usize {
        self.page_size
            .min(self.total_count.saturating_sub(self.request().offset()))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageMeta {
    index_from: usize,
    page_index: usize,
    page_size: usize,
    total_count: usize,
    total_pages: usize,
}

impl TryFrom<RawPageMeta> for PageMeta {
    type Error = Error;

    fn try_from(raw: RawPageMeta) -> Result<Self, Self::Error> {
        if raw.index_from > raw.page_index {
            return Err(Error::InvalidPaging {
                index_from: raw.index_from,
                page_index: raw.page_index,
            });
        }

        let expected = if raw.page_size == 0 {
            if raw.total_count != 0 {
                return Err(Error::ZeroPageSize);
            }
            0
        } else {
            raw.total_count.div_ceil(raw.page_size)
        };
        if raw.total_pages != expected {
            return Err(Error::WrongTotalPages {
                expected,
                found: raw.total_pages,
            });
        }

        Ok(Self {
            index_from: raw.index_from,
            page_index: raw.page_index,
            page_size: raw.page_size,
            total_count: raw.total_count,
            total_pages: raw.total_pages,
        })
    }
}

impl Serialize for PageMeta {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PageMeta", 7)?;
        state.serialize_field("indexFrom", &self.index_from)?;
        state.serialize_field("pageIndex", &self.page_index)?;
        state.serialize_field("pageSize", &self.page_size)?;
        state.serialize_field("totalCount", &self.total_count)?;
        state.serialize_field("totalPages", &self.total_pages)?;
        state.serialize_field("hasPreviousPage", &self.has_previous_page())?;
        state.serialize_field("hasNextPage", &self.has_next_page())?;
        state.end()
    }
}
