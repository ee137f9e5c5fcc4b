use std::{fmt, result};

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for page construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `index_from` was greater than `page_index`.
    InvalidPaging { index_from: usize, page_index: usize },
    ZeroPageSize,
    /// `total_pages` did not match `ceil(total_count / page_size)`.
    WrongTotalPages { expected: usize, found: usize },
    /// A page held a different number of items than its metadata allows.
    WrongItemCount { expected: usize, found: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidPaging {
                index_from,
                page_index,
            } => write!(
                f,
                "indexFrom: {index_from} > pageIndex: {page_index}, must indexFrom <= pageIndex"
            ),
            Error::ZeroPageSize => write!(f, "pageSize must be greater than zero"),
            Error::WrongTotalPages { expected, found } => {
                write!(f, "Wrong totalPages: {found}, expected: {expected}")
            }
            Error::WrongItemCount { expected, found } => {
                write!(f, "Wrong item count: {found}, expected: {expected}")
            }
        }
    }
}

impl std::error::Error for Error {}
