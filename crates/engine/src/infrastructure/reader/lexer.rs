//! Tokenizer for S-expression level documents.

use super::error::ReaderError;

/// Position of a token in the source, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    OpenParen,
    CloseParen,
    String(String),
    Integer(i32),
    Real(f32),
    Boolean(bool),
    Symbol(String),
    Eof,
}

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    context: &'a str,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, context: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            context,
            line: 1,
            column: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn error(&self, at: Position, message: impl ToString) -> ReaderError {
        ReaderError::syntax(self.context, at, message)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == ';' {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else if c.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    /// Returns the next token together with the position it starts at.
    pub fn next_token(&mut self) -> Result<(Token, Position), ReaderError> {
        self.skip_whitespace_and_comments();
        let start = self.position();

        let Some(&c) = self.chars.peek() else {
            return Ok((Token::Eof, start));
        };

        let token = match c {
            '(' => {
                self.bump();
                Token::OpenParen
            }
            ')' => {
                self.bump();
                Token::CloseParen
            }
            '"' => self.read_string(start)?,
            '#' => self.read_boolean(start)?,
            _ => self.read_atom(start)?,
        };

        Ok((token, start))
    }

    fn read_string(&mut self, start: Position) -> Result<Token, ReaderError> {
        self.bump();
        let mut text = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error(start, "unterminated string")),
                Some('"') => break,
                Some('\\') => match self.bump() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    // unknown escapes keep the escaped character
                    Some(other) => text.push(other),
                    None => return Err(self.error(start, "unterminated string")),
                },
                Some(c) => text.push(c),
            }
        }
        Ok(Token::String(text))
    }

    fn read_boolean(&mut self, start: Position) -> Result<Token, ReaderError> {
        self.bump();
        match self.bump() {
            Some('t') => Ok(Token::Boolean(true)),
            Some('f') => Ok(Token::Boolean(false)),
            _ => Err(self.error(start, "expected #t or #f")),
        }
    }

    fn read_atom(&mut self, start: Position) -> Result<Token, ReaderError> {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() || c == '(' || c == ')' || c == '"' || c == ';' {
                break;
            }
            text.push(c);
            self.bump();
        }

        if looks_numeric(&text) {
            if let Ok(i) = text.parse::<i32>() {
                return Ok(Token::Integer(i));
            }
            if let Ok(r) = text.parse::<f32>() {
                return Ok(Token::Real(r));
            }
            return Err(self.error(start, format!("invalid number '{}'", text)));
        }

        Ok(Token::Symbol(text))
    }
}

fn looks_numeric(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    digits.starts_with(|c: char| c.is_ascii_digit())
        || (digits.starts_with('.') && digits[1..].starts_with(|c: char| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source, "test");
        let mut out = Vec::new();
        loop {
            let (token, _) = lexer.next_token().unwrap();
            if token == Token::Eof {
                break;
            }
            out.push(token);
        }
        out
    }

    #[test]
    fn tokenizes_basic_forms() {
        assert_eq!(
            tokens("(version 2) (gravity -10.5) (on #t)"),
            vec![
                Token::OpenParen,
                Token::Symbol("version".into()),
                Token::Integer(2),
                Token::CloseParen,
                Token::OpenParen,
                Token::Symbol("gravity".into()),
                Token::Real(-10.5),
                Token::CloseParen,
                Token::OpenParen,
                Token::Symbol("on".into()),
                Token::Boolean(true),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn hyphenated_symbols_are_not_numbers() {
        assert_eq!(
            tokens("target-time - -x"),
            vec![
                Token::Symbol("target-time".into()),
                Token::Symbol("-".into()),
                Token::Symbol("-x".into()),
            ]
        );
    }

    #[test]
    fn strings_support_escapes() {
        assert_eq!(
            tokens(r#""say \"hi\"\n""#),
            vec![Token::String("say \"hi\"\n".into())]
        );
    }

    #[test]
    fn unknown_escapes_keep_the_character() {
        assert_eq!(
            tokens(r#""\(smile\) \q""#),
            vec![Token::String("(smile) q".into())]
        );
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            tokens("; a comment\n(name) ; trailing"),
            vec![
                Token::OpenParen,
                Token::Symbol("name".into()),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn unterminated_string_reports_start_position() {
        let mut lexer = Lexer::new("\n  \"open", "broken.stl");
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.to_string(), "broken.stl:2:3: unterminated string");
    }

    #[test]
    fn malformed_number_is_an_error() {
        let mut lexer = Lexer::new("12abc", "test");
        assert!(lexer.next_token().is_err());
    }
}
