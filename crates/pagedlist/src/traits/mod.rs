mod paged;
mod source;

pub use paged::*;
pub use source::*;
