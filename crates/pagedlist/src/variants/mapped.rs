use std::{fmt, marker::PhantomData, slice, vec};

use serde_derive::Serialize;

use crate::{PageMeta, PageRequest, PageSource, Paged, Result};

use super::cut;

/// A page whose items were converted from a window of `S` into `R`.
///
/// The converter is called once with the whole window, so it can batch its
/// work (lookups, joins) instead of mapping item by item. Only serializable:
/// the converter may change the item count, read it back as a [`Page`].
///
/// [`Page`]: crate::Page
#[derive(Serialize)]
pub struct MappedPage<S, R> {
    #[serde(flatten)]
    meta: PageMeta,
    items: Vec<R>,
    #[serde(skip)]
    source: PhantomData<fn(S)>,
}

impl<S, R> MappedPage<S, R> {
    pub fn new<Src, F, I>(
        source: Src,
        converter: F,
        page_index: usize,
        page_size: usize,
        index_from: usize,
    ) -> Result<Self>
    where
        Src: PageSource<Item = S>,
        F: FnOnce(Vec<S>) -> I,
        I: IntoIterator<Item = R>,
    {
        Self::from_request(
            source,
            converter,
            PageRequest::new(page_index, page_size, index_from),
        )
    }

    pub fn from_request<Src, F, I>(source: Src, converter: F, request: PageRequest) -> Result<Self>
    where
        Src: PageSource<Item = S>,
        F: FnOnce(Vec<S>) -> I,
        I: IntoIterator<Item = R>,
    {
        let (meta, window) = cut(source, request)?;
        Ok(Self::with_meta(meta, converter(window)))
    }

    /// Converts the items of an already built page.
    ///
    /// Metadata is copied as is, nothing is recounted or validated.
    pub fn from_page<P, F, I>(page: P, converter: F) -> Self
    where
        P: Paged<Item = S>,
        F: FnOnce(Vec<S>) -> I,
        I: IntoIterator<Item = R>,
    {
        let meta = *page.meta();
        Self::with_meta(meta, converter(page.into_items()))
    }

    fn with_meta<I>(meta: PageMeta, items: I) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        Self {
            meta,
            items: items.into_iter().collect(),
            source: PhantomData,
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, R> {
        self.items.iter()
    }
}

impl<S, R> Paged for MappedPage<S, R> {
    type Item = R;

    #[inline]
    fn meta(&self) -> &PageMeta {
        &self.meta
    }

    #[inline]
    fn items(&self) -> &[R] {
        &self.items
    }

    fn into_items(self) -> Vec<R> {
        self.items
    }
}

impl<S, R> fmt::Debug for MappedPage<S, R>
where
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedPage")
            .field("meta", &self.meta)
            .field("items", &self.items)
            .finish()
    }
}

impl<S, R> Clone for MappedPage<S, R>
where
    R: Clone,
{
    fn clone(&self) -> Self {
        Self {
            meta: self.meta,
            items: self.items.clone(),
            source: PhantomData,
        }
    }
}

impl<S, R> PartialEq for MappedPage<S, R>
where
    R: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.meta == other.meta && self.items == other.items
    }
}

impl<S, R> Eq for MappedPage<S, R> where R: Eq {}

impl<S, R> IntoIterator for MappedPage<S, R> {
    type Item = R;
    type IntoIter = vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, S, R> IntoIterator for &'a MappedPage<S, R> {
    type Item = &'a R;
    type IntoIter = slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
