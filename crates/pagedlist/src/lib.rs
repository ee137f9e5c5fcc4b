#![doc = include_str!("../README.md")]
#![doc = "\n## Example\n"]
#![doc = "\n```rust"]
#![doc = include_str!("../examples/paging.rs")]
#![doc = "```"]

mod error;
mod factory;
mod meta;
mod request;
mod traits;
mod variants;

pub use error::*;
pub use factory::*;
pub use meta::*;
pub use request::*;
pub use traits::*;
pub use variants::{MappedPage, Page};
