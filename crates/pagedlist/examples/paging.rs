use pagedlist::{MappedPage, Page, PageRequest, Paged, Sequence, empty, from_page};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let names = vec!["ada", "brian", "claude", "dennis", "edsger", "frances", "grace"];

    // Pages counted from 1, three names per page
    let page = Page::new(&names, 2, 3, 1)?;
    assert_eq!(page.items(), &["dennis", "edsger", "frances"]);
    assert_eq!(page.total_count(), 7);
    assert_eq!(page.total_pages(), 3);
    assert!(page.has_previous_page());
    assert!(page.has_next_page());

    // Past the end is not an error, the page is just empty
    let past = Page::new(&names, 9, 3, 1)?;
    assert!(past.is_empty());
    assert!(!past.has_next_page());

    // The converter sees the whole window at once
    let lengths: MappedPage<&str, usize> = MappedPage::new(
        Sequence::new(names.iter().copied()),
        |window| window.into_iter().map(str::len),
        0,
        3,
        0,
    )?;
    assert_eq!(lengths.items(), &[3, 5, 6]);

    let request = PageRequest::default().with_page_size(4);
    let upper = from_page(request.paginate(&names)?, |window| {
        window.into_iter().map(str::to_uppercase)
    });
    assert_eq!(upper.items(), &["ADA", "BRIAN", "CLAUDE", "DENNIS"]);
    assert_eq!(upper.total_pages(), 2);

    let nothing = empty::<&str>();
    assert_eq!(nothing.total_pages(), 0);
    assert!(!nothing.has_previous_page() && !nothing.has_next_page());

    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
