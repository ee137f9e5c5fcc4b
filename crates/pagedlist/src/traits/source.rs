use std::collections::VecDeque;

/// A finite, order stable sequence a page can be cut from.
///
/// Implementors that know their length and support random access count and
/// slice natively, without visiting elements outside of the window. Anything
/// else goes through [`Sequence`], which enumerates.
pub trait PageSource {
    type Item;

    /// Total number of items in the source.
    fn total_count(&self) -> usize;

    /// Collects up to `take` items starting at `skip`, in source order.
    ///
    /// A `skip` past the end yields an empty window.
    fn collect_window(self, skip: usize, take: usize) -> Vec<Self::Item>;

    /// Whether counting and slicing are done natively rather than by enumeration.
    fn is_native(&self) -> bool {
        true
    }
}

impl<T> PageSource for &[T]
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn total_count(&self) -> usize {
        self.len()
    }

    fn collect_window(self, skip: usize, take: usize) -> Vec<T> {
        let from = skip.min(self.len());
        let to = from.saturating_add(take).min(self.len());
        self[from..to].to_vec()
    }
}

impl<T> PageSource for &Vec<T>
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn total_count(&self) -> usize {
        self.len()
    }

    fn collect_window(self, skip: usize, take: usize) -> Vec<T> {
        self.as_slice().collect_window(skip, take)
    }
}

impl<T, const N: usize> PageSource for &[T; N]
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn total_count(&self) -> usize {
        N
    }

    fn collect_window(self, skip: usize, take: usize) -> Vec<T> {
        self.as_slice().collect_window(skip, take)
    }
}

impl<T> PageSource for Vec<T> {
    type Item = T;

    #[inline]
    fn total_count(&self) -> usize {
        self.len()
    }

    fn collect_window(mut self, skip: usize, take: usize) -> Vec<T> {
        let from = skip.min(self.len());
        let to = from.saturating_add(take).min(self.len());
        self.truncate(to);
        self.split_off(from)
    }
}

impl<T> PageSource for Box<[T]> {
    type Item = T;

    #[inline]
    fn total_count(&self) -> usize {
        self.len()
    }

    fn collect_window(self, skip: usize, take: usize) -> Vec<T> {
        self.into_vec().collect_window(skip, take)
    }
}

impl<T> PageSource for VecDeque<T> {
    type Item = T;

    #[inline]
    fn total_count(&self) -> usize {
        self.len()
    }

    fn collect_window(mut self, skip: usize, take: usize) -> Vec<T> {
        let from = skip.min(self.len());
        let to = from.saturating_add(take).min(self.len());
        self.drain(from..to).collect()
    }
}

impl<T> PageSource for &VecDeque<T>
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn total_count(&self) -> usize {
        self.len()
    }

    fn collect_window(self, skip: usize, take: usize) -> Vec<T> {
        self.range(skip.min(self.len())..)
            .take(take)
            .cloned()
            .collect()
    }
}

/// Adapter for sequences without native counting.
///
/// The wrapped value is cloned and enumerated twice, once to count and once to
/// skip and take, so it must yield the same items every time.
#[derive(Debug, Clone)]
pub struct Sequence<I>(I);

impl<I> Sequence<I>
where
    I: IntoIterator + Clone,
{
    pub fn new(iter: I) -> Self {
        Self(iter)
    }

    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<I> From<I> for Sequence<I>
where
    I: IntoIterator + Clone,
{
    fn from(value: I) -> Self {
        Self::new(value)
    }
}

impl<I> PageSource for Sequence<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn total_count(&self) -> usize {
        self.0.clone().into_iter().count()
    }

    fn collect_window(self, skip: usize, take: usize) -> Vec<I::Item> {
        self.0.into_iter().skip(skip).take(take).collect()
    }

    fn is_native(&self) -> bool {
        false
    }
}
