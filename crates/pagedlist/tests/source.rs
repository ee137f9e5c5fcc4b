use std::{cell::Cell, collections::VecDeque};

use pagedlist::{Page, PageSource, Paged, Result, Sequence};

/// Source answering count and window queries without enumerating, like a database table.
struct Table<'a> {
    rows: usize,
    counted: &'a Cell<usize>,
    fetched: &'a Cell<usize>,
}

impl PageSource for Table<'_> {
    type Item = usize;

    fn total_count(&self) -> usize {
        self.counted.set(self.counted.get() + 1);
        self.rows
    }

    fn collect_window(self, skip: usize, take: usize) -> Vec<usize> {
        let window = (skip..self.rows).take(take).collect::<Vec<_>>();
        self.fetched.set(self.fetched.get() + window.len());
        window
    }
}

#[test]
fn test_native_and_enumerated_sources_agree() -> Result<()> {
    let values = (0..37).map(|v| v * 3).collect::<Vec<u32>>();
    let deque = values.iter().copied().collect::<VecDeque<_>>();
    let boxed = values.clone().into_boxed_slice();

    for page_size in [1, 4, 10, 37, 50] {
        for page_index in 0..12 {
            let sequence = Sequence::new(values.iter().copied());
            let expected = Page::new(sequence, page_index, page_size, 0)?;

            assert_eq!(Page::new(&values, page_index, page_size, 0)?, expected);
            assert_eq!(
                Page::new(values.as_slice(), page_index, page_size, 0)?,
                expected
            );
            assert_eq!(Page::new(values.clone(), page_index, page_size, 0)?, expected);
            assert_eq!(Page::new(&deque, page_index, page_size, 0)?, expected);
            assert_eq!(Page::new(deque.clone(), page_index, page_size, 0)?, expected);
            assert_eq!(Page::new(boxed.clone(), page_index, page_size, 0)?, expected);
        }
    }

    Ok(())
}

#[test]
fn test_array_source() -> Result<()> {
    let page = Page::new(&[10, 20, 30, 40, 50], 1, 2, 0)?;

    assert_eq!(page.items(), &[30, 40]);
    assert_eq!(page.total_pages(), 3);

    Ok(())
}

#[test]
fn test_native_source_only_fetches_window() -> Result<()> {
    let counted = Cell::new(0);
    let fetched = Cell::new(0);
    let table = Table {
        rows: 1_000_000,
        counted: &counted,
        fetched: &fetched,
    };
    assert!(table.is_native());

    let page = Page::new(table, 501, 25, 1)?;

    assert_eq!(counted.get(), 1);
    assert_eq!(fetched.get(), 25);
    assert_eq!(page.items().first(), Some(&12_500));
    assert_eq!(page.total_pages(), 40_000);

    Ok(())
}

#[test]
fn test_native_source_past_end_fetches_nothing() -> Result<()> {
    let counted = Cell::new(0);
    let fetched = Cell::new(0);
    let table = Table {
        rows: 10,
        counted: &counted,
        fetched: &fetched,
    };

    let page = Page::new(table, 7, 5, 0)?;

    assert!(page.is_empty());
    assert_eq!(fetched.get(), 0);

    Ok(())
}

#[test]
fn test_sequence_enumerates_twice() -> Result<()> {
    let visited = Cell::new(0);
    let source = Sequence::new((0..8).map(|v| {
        visited.set(visited.get() + 1);
        v
    }));
    assert!(!source.is_native());

    let page = Page::new(source, 1, 3, 0)?;

    assert_eq!(page.items(), &[3, 4, 5]);
    // 8 to count, 6 to reach the end of the window
    assert_eq!(visited.get(), 14);

    Ok(())
}

#[test]
fn test_collect_window_bounds() {
    let values = vec!['a', 'b', 'c', 'd'];

    assert_eq!(values.as_slice().collect_window(1, 2), ['b', 'c']);
    assert_eq!(values.as_slice().collect_window(3, 10), ['d']);
    assert!(values.as_slice().collect_window(4, 1).is_empty());
    assert!(values.as_slice().collect_window(usize::MAX, usize::MAX).is_empty());

    assert_eq!(values.clone().collect_window(2, usize::MAX), ['c', 'd']);
    assert!(values.clone().collect_window(9, 1).is_empty());

    let deque = values.iter().copied().collect::<VecDeque<_>>();
    assert_eq!((&deque).collect_window(1, 1), ['b']);
    assert_eq!(deque.collect_window(0, 3), ['a', 'b', 'c']);

    assert_eq!(Sequence::from("abcd".chars()).collect_window(2, 1), ['c']);
}

#[test]
fn test_sequence_gives_back_its_source() -> Result<()> {
    let source = Sequence::new(vec![7, 8, 9]);
    let page = Page::new(source.clone(), 1, 2, 0)?;

    assert_eq!(page.items(), &[9]);
    assert_eq!(source.into_inner(), [7, 8, 9]);

    Ok(())
}
