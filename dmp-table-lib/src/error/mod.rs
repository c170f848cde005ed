//! Error types

mod column;
mod document;
mod page;
mod row;

pub use column::*;
pub use document::*;
pub use page::*;
pub use row::*;
