//! Parsed S-expression values.

use super::error::ReaderError;
use super::lexer::{Lexer, Position, Token};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i32),
    Real(f32),
    String(String),
    Symbol(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "list",
        }
    }
}

/// Parse every top-level value in `source`.
pub fn parse_all(source: &str, context: &str) -> Result<Vec<Value>, ReaderError> {
    let mut lexer = Lexer::new(source, context);
    // Open lists, innermost last.
    let mut stack: Vec<(Vec<Value>, Position)> = Vec::new();
    let mut top_level = Vec::new();

    loop {
        let (token, at) = lexer.next_token()?;
        let value = match token {
            Token::Eof => {
                if let Some((_, open_at)) = stack.last() {
                    return Err(ReaderError::syntax(context, *open_at, "unclosed list"));
                }
                return Ok(top_level);
            }
            Token::OpenParen => {
                stack.push((Vec::new(), at));
                continue;
            }
            Token::CloseParen => match stack.pop() {
                Some((items, _)) => Value::Array(items),
                None => return Err(ReaderError::syntax(context, at, "unexpected ')'")),
            },
            Token::String(s) => Value::String(s),
            Token::Integer(i) => Value::Integer(i),
            Token::Real(r) => Value::Real(r),
            Token::Boolean(b) => Value::Boolean(b),
            Token::Symbol(s) => Value::Symbol(s),
        };

        match stack.last_mut() {
            Some((items, _)) => items.push(value),
            None => top_level.push(value),
        }
    }
}
