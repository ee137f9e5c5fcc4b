use crate::PageMeta;

/// Read access shared by every page variant.
pub trait Paged {
    type Item;

    fn meta(&self) -> &PageMeta;

    fn items(&self) -> &[Self::Item];

    fn into_items(self) -> Vec<Self::Item>
    where
        Self: Sized;

    #[inline]
    fn index_from(&self) -> usize {
        self.meta().index_from()
    }

    #[inline]
    fn page_index(&self) -> usize {
        self.meta().page_index()
    }

    #[inline]
    fn page_size(&self) -> usize {
        self.meta().page_size()
    }

    #[inline]
    fn total_count(&self) -> usize {
        self.meta().total_count()
    }

    #[inline]
    fn total_pages(&self) -> usize {
        self.meta().total_pages()
    }

    #[inline]
    fn has_previous_page(&self) -> bool {
        self.meta().has_previous_page()
    }

    #[inline]
    fn has_next_page(&self) -> bool {
        self.meta().has_next_page()
    }

    /// Number of items on this page, not in the whole source.
    #[inline]
    fn len(&self) -> usize {
        self.items().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
