use crate::{MappedPage, Page, Paged};

/// A page of `T` with no items and zeroed metadata.
pub fn empty<T>() -> Page<T> {
    Page::empty()
}

/// Converts the items of `source` with `converter`, keeping its metadata.
pub fn from_page<R, S, P, F, I>(source: P, converter: F) -> impl Paged<Item = R>
where
    P: Paged<Item = S>,
    F: FnOnce(Vec<S>) -> I,
    I: IntoIterator<Item = R>,
{
    MappedPage::from_page(source, converter)
}
