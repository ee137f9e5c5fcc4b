use log::{debug, trace};

use crate::{PageMeta, PageRequest, PageSource, Result};

mod mapped;
mod page;

pub use mapped::*;
pub use page::*;

/// Validates `request`, counts `source` and collects the window it selects.
fn cut<S>(source: S, request: PageRequest) -> Result<(PageMeta, Vec<S::Item>)>
where
    S: PageSource,
{
    request.validate()?;

    if source.is_native() {
        trace!("Counting and slicing natively");
    } else {
        trace!("Counting and slicing by enumeration");
    }

    let total_count = source.total_count();
    let meta = PageMeta::compute(request, total_count);
    let skip = request.offset();

    debug!(
        "Page {} of {} (from {}): skip {skip}, take {} out of {total_count}",
        meta.page_index(),
        meta.total_pages(),
        meta.index_from(),
        meta.page_size(),
    );

    let items = if skip >= total_count {
        vec![]
    } else {
        source.collect_window(skip, request.page_size)
    };

    Ok((meta, items))
}
