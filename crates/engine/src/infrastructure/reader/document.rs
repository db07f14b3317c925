//! Whole-document parsing.

use std::io::Read;

use super::error::ReaderError;
use super::mapping::ReaderNode;
use super::value::{parse_all, Value};

/// A parsed document: exactly one top-level list whose head is a symbol,
/// e.g. `(supertux-level (version 2) ...)`.
#[derive(Debug, Clone)]
pub struct ReaderDocument {
    context: String,
    root: Vec<Value>,
}

impl ReaderDocument {
    /// Read and parse a document from a byte stream.
    pub fn from_stream<R: Read>(mut stream: R, context: &str) -> Result<Self, ReaderError> {
        let mut source = String::new();
        stream
            .read_to_string(&mut source)
            .map_err(|e| ReaderError::io(context, e))?;
        Self::from_source(&source, context)
    }

    pub fn from_source(source: &str, context: &str) -> Result<Self, ReaderError> {
        let mut values = parse_all(source, context)?.into_iter();

        let root = match values.next() {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(ReaderError::structure(
                    context,
                    format!("expected a list at top level, found {}", other.type_name()),
                ))
            }
            None => return Err(ReaderError::structure(context, "document is empty")),
        };

        if values.next().is_some() {
            return Err(ReaderError::structure(
                context,
                "unexpected data after the root list",
            ));
        }

        if root.first().and_then(Value::as_symbol).is_none() {
            return Err(ReaderError::structure(
                context,
                "root list must start with a name",
            ));
        }

        Ok(Self {
            context: context.to_string(),
            root,
        })
    }

    /// Usually the path the document was read from.
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn get_root(&self) -> ReaderNode<'_> {
        // Head symbol is checked at construction.
        let (name, args) = match self.root.split_first() {
            Some((Value::Symbol(name), args)) => (name.as_str(), args),
            _ => ("", self.root.as_slice()),
        };
        ReaderNode::new(name, args, &self.context)
    }
}
