//! Key/value views over parsed documents.
//!
//! A mapping is a sequence of entries shaped `(key arg...)`. Lookups return
//! the first entry with a matching key; iteration visits every entry in
//! document order, so repeated keys (such as several `sector` entries) are
//! all seen.

use super::value::Value;

/// Marker used by level documents for translatable strings: `(_ "text")`.
const TRANSLATION_MARKER: &str = "_";

/// Conversion from the arguments of a mapping entry.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;

    /// Convert the arguments following an entry's key. Scalars take exactly
    /// one argument.
    fn from_args(args: &[Value]) -> Option<Self> {
        match args {
            [value] => Self::from_value(value),
            _ => None,
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => match items.as_slice() {
                [Value::Symbol(marker), Value::String(s)] if marker == TRANSLATION_MARKER => {
                    Some(s.clone())
                }
                _ => None,
            },
            _ => None,
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Real(r) => Some(*r),
            Value::Integer(i) => Some(*i as f32),
            _ => None,
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(|v| vec![v])
    }

    fn from_args(args: &[Value]) -> Option<Self> {
        args.iter().map(T::from_value).collect()
    }
}

/// A named entry of a mapping: the key plus everything after it.
#[derive(Debug, Clone, Copy)]
pub struct ReaderNode<'a> {
    name: &'a str,
    args: &'a [Value],
    context: &'a str,
}

impl<'a> ReaderNode<'a> {
    pub(super) fn new(name: &'a str, args: &'a [Value], context: &'a str) -> Self {
        Self {
            name,
            args,
            context,
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    /// View the node's arguments as a nested mapping.
    pub fn mapping(&self) -> ReaderMapping<'a> {
        ReaderMapping::new(self.args, self.context)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReaderMapping<'a> {
    entries: &'a [Value],
    context: &'a str,
}

impl<'a> ReaderMapping<'a> {
    pub(super) fn new(entries: &'a [Value], context: &'a str) -> Self {
        Self { entries, context }
    }

    /// Document context (usually the file path) for diagnostics.
    pub fn context(&self) -> &'a str {
        self.context
    }

    /// Typed lookup of the first entry named `key`.
    ///
    /// Returns `None` when the key is absent or its value has the wrong
    /// shape; callers keep whatever default they already had.
    pub fn get<T: FromValue>(&self, key: &str) -> Option<T> {
        let node = self.node(key)?;
        let value = T::from_args(node.args);
        if value.is_none() {
            let found: Vec<&str> = node.args.iter().map(|arg| arg.type_name()).collect();
            tracing::debug!(
                context = self.context,
                key,
                ?found,
                "Ignoring field with unexpected type"
            );
        }
        value
    }

    /// Nested mapping stored under `key`.
    pub fn get_mapping(&self, key: &str) -> Option<ReaderMapping<'a>> {
        self.node(key).map(|node| node.mapping())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.node(key).is_some()
    }

    fn node(&self, key: &str) -> Option<ReaderNode<'a>> {
        self.iter().find(|node| node.name == key)
    }

    /// Every well-formed entry, in document order.
    pub fn iter(&self) -> ReaderIterator<'a> {
        ReaderIterator {
            entries: self.entries.iter(),
            context: self.context,
        }
    }
}

pub struct ReaderIterator<'a> {
    entries: std::slice::Iter<'a, Value>,
    context: &'a str,
}

impl<'a> Iterator for ReaderIterator<'a> {
    type Item = ReaderNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.entries.by_ref() {
            if let Some((Value::Symbol(key), args)) = entry.as_array().and_then(<[Value]>::split_first) {
                return Some(ReaderNode::new(key, args, self.context));
            }
            tracing::debug!(
                context = self.context,
                found = entry.type_name(),
                "Skipping mapping entry that is not a (key value...) list"
            );
        }
        None
    }
}
