//! Sandboxed structural-literal reader.
//!
//! Reads the module-table text as data: object, array, string, number,
//! boolean and null literals only. Slots that are not literals (the
//! `function(...){...}` factory bodies) are captured verbatim as opaque
//! text by balanced-delimiter scanning. Nothing is ever evaluated.

use thiserror::Error;

/// A decoded structural value. Object entries keep source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Object(Vec<(String, Value)>),
    Array(Vec<Value>),
    Str(String),
    Num(f64),
    Bool(bool),
    Null,
    /// A non-literal slot, captured verbatim.
    Opaque(String),
}

impl Value {
    /// Numeric value as an unsigned integer, when it is one.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Num(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= u64::MAX as f64 => {
                Some(*n as u64)
            }
            _ => None,
        }
    }
}

/// Parse failure, with the byte offset where reading stopped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason} at offset {offset}")]
pub struct LiteralError {
    pub offset: usize,
    pub reason: String,
}

/// Read `text` as one structural value covering the whole input.
pub fn parse(text: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser { text, pos: 0 };
    parser.skip_ws();
    let value = parser.value()?;
    parser.skip_ws();
    if parser.pos != text.len() {
        return Err(parser.fail("trailing characters after value"));
    }
    Ok(value)
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn fail(&self, reason: &str) -> LiteralError {
        LiteralError {
            offset: self.pos,
            reason: reason.to_string(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.pos += 1;
        }
    }

    fn value(&mut self) -> Result<Value, LiteralError> {
        match self.peek() {
            Some('{') => self.object(),
            Some('[') => self.array(),
            Some('"') | Some('\'') => self.string().map(Value::Str),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '.' => self.number(),
            Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                let start = self.pos;
                let word = self.ident();
                match word {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" => Ok(Value::Null),
                    // Not a literal keyword (e.g. `function`): rewind and
                    // capture the whole slot verbatim.
                    _ => {
                        self.pos = start;
                        self.opaque()
                    }
                }
            }
            Some(_) => self.opaque(),
            None => Err(self.fail("unexpected end of input")),
        }
    }

    fn ident(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_' || c == '$') {
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    fn object(&mut self) -> Result<Value, LiteralError> {
        self.bump(); // '{'
        let mut entries = Vec::new();

        self.skip_ws();
        if self.peek() == Some('}') {
            self.bump();
            return Ok(Value::Object(entries));
        }

        loop {
            self.skip_ws();
            let key = self.key()?;
            self.skip_ws();
            if self.bump() != Some(':') {
                return Err(self.fail("expected ':' after object key"));
            }
            self.skip_ws();
            let value = self.value()?;
            entries.push((key, value));

            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some('}') => return Ok(Value::Object(entries)),
                _ => return Err(self.fail("expected ',' or '}' in object")),
            }
        }
    }

    /// Object keys: quoted string, bare identifier, or bare number.
    fn key(&mut self) -> Result<String, LiteralError> {
        match self.peek() {
            Some('"') | Some('\'') => self.string(),
            Some(c) if c.is_ascii_digit() => {
                let start = self.pos;
                while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    self.pos += 1;
                }
                Ok(self.text[start..self.pos].to_string())
            }
            Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                Ok(self.ident().to_string())
            }
            _ => Err(self.fail("expected object key")),
        }
    }

    fn array(&mut self) -> Result<Value, LiteralError> {
        self.bump(); // '['
        let mut items = Vec::new();

        self.skip_ws();
        if self.peek() == Some(']') {
            self.bump();
            return Ok(Value::Array(items));
        }

        loop {
            self.skip_ws();
            items.push(self.value()?);
            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some(']') => return Ok(Value::Array(items)),
                _ => return Err(self.fail("expected ',' or ']' in array")),
            }
        }
    }

    fn string(&mut self) -> Result<String, LiteralError> {
        let delim = self.bump().unwrap();
        let mut out = String::new();

        loop {
            match self.bump() {
                Some(c) if c == delim => return Ok(out),
                Some('\\') => match self.bump() {
                    Some(q @ ('"' | '\'' | '\\' | '/')) => out.push(q),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some('b') => out.push('\u{0008}'),
                    Some('f') => out.push('\u{000C}'),
                    Some('0') => out.push('\0'),
                    Some('u') => out.push(self.unicode_escape()?),
                    _ => return Err(self.fail("unsupported string escape")),
                },
                Some(c) => out.push(c),
                None => return Err(self.fail("unterminated string")),
            }
        }
    }

    fn unicode_escape(&mut self) -> Result<char, LiteralError> {
        let start = self.pos;
        let hex = self.text.get(start..start + 4).filter(|h| h.is_ascii());
        let code = hex
            .and_then(|h| u32::from_str_radix(h, 16).ok())
            .and_then(char::from_u32)
            .ok_or_else(|| self.fail("invalid unicode escape"))?;
        self.pos = start + 4;
        Ok(code)
    }

    fn number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some('+' | '-')) {
                self.pos += 1;
            }
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.pos += 1;
            }
        }

        self.text[start..self.pos]
            .parse::<f64>()
            .map(Value::Num)
            .map_err(|_| LiteralError {
                offset: start,
                reason: "invalid number".to_string(),
            })
    }

    /// Capture a non-literal slot verbatim: scan with bracket depth and
    /// string awareness until a top-level ',' or container close.
    fn opaque(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        let mut depth = 0usize;

        while let Some(c) = self.peek() {
            match c {
                '(' | '[' | '{' => {
                    depth += 1;
                    self.pos += 1;
                }
                ')' | ']' | '}' => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    self.pos += 1;
                }
                ',' if depth == 0 => break,
                '"' | '\'' => {
                    self.skip_embedded_string(c)?;
                }
                _ => {
                    self.pos += c.len_utf8();
                }
            }
        }

        if depth != 0 {
            return Err(self.fail("unbalanced brackets in opaque slot"));
        }
        let text = self.text[start..self.pos].trim_end().to_string();
        if text.is_empty() {
            return Err(self.fail("expected a value"));
        }
        Ok(Value::Opaque(text))
    }

    /// Skip over a string inside an opaque slot without decoding it.
    fn skip_embedded_string(&mut self, delim: char) -> Result<(), LiteralError> {
        self.bump();
        loop {
            match self.bump() {
                Some(c) if c == delim => return Ok(()),
                Some('\\') => {
                    self.bump();
                }
                Some(_) => {}
                None => return Err(self.fail("unterminated string in opaque slot")),
            }
        }
    }
}
