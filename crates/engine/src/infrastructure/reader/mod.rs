//! S-expression document reader used for level files.

mod document;
mod error;
mod lexer;
mod mapping;
mod value;

pub use document::ReaderDocument;
pub use error::ReaderError;
pub use lexer::Position;
pub use mapping::{FromValue, ReaderIterator, ReaderMapping, ReaderNode};
pub use value::Value;
