use std::{slice, vec};

use serde_derive::{Deserialize, Serialize};

use crate::{Error, MappedPage, PageMeta, PageRequest, PageSource, Paged, Result};

use super::cut;

/// One page of items cut out of a larger sequence.
///
/// ```
/// use pagedlist::{Page, Paged, Sequence};
///
/// let page = Page::new(Sequence::new(1..=10), 2, 3, 1)?;
///
/// assert_eq!(page.items(), &[4, 5, 6]);
/// assert_eq!(page.total_pages(), 4);
/// assert!(page.has_previous_page());
/// assert!(page.has_next_page());
/// # Ok::<(), pagedlist::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawPage<T>",
    bound(deserialize = "T: serde::Deserialize<'de>")
)]
pub struct Page<T> {
    #[serde(flatten)]
    meta: PageMeta,
    items: Vec<T>,
}

#[derive(Deserialize)]
struct RawPage<T> {
    #[serde(flatten)]
    meta: PageMeta,
    items: Vec<T>,
}

/// Items must fill exactly the window the metadata describes.
impl<T> TryFrom<RawPage<T>> for Page<T> {
    type Error = Error;

    fn try_from(raw: RawPage<T>) -> Result<Self> {
        let expected = raw.meta.window_len();
        if raw.items.len() != expected {
            return Err(Error::WrongItemCount {
                expected,
                found: raw.items.len(),
            });
        }
        Ok(Self {
            meta: raw.meta,
            items: raw.items,
        })
    }
}

impl<T> Page<T> {
    /// Cuts page `page_index` (counted from `index_from`) of `page_size` items out of `source`.
    ///
    /// Fails if `index_from > page_index` or if `page_size` is zero.
    pub fn new<S>(source: S, page_index: usize, page_size: usize, index_from: usize) -> Result<Self>
    where
        S: PageSource<Item = T>,
    {
        Self::from_request(source, PageRequest::new(page_index, page_size, index_from))
    }

    pub fn from_request<S>(source: S, request: PageRequest) -> Result<Self>
    where
        S: PageSource<Item = T>,
    {
        let (meta, items) = cut(source, request)?;
        Ok(Self { meta, items })
    }

    /// A page with no items and all metadata zeroed.
    pub fn empty() -> Self {
        Self {
            meta: PageMeta::default(),
            items: vec![],
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Converts every item, keeping the metadata.
    pub fn map<R, F>(self, f: F) -> MappedPage<T, R>
    where
        F: FnMut(T) -> R,
    {
        MappedPage::from_page(self, |items| items.into_iter().map(f))
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Paged for Page<T> {
    type Item = T;

    #[inline]
    fn meta(&self) -> &PageMeta {
        &self.meta
    }

    #[inline]
    fn items(&self) -> &[T] {
        &self.items
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
