//! Minimal ISO 10303-21 (STEP physical file) reader.
//!
//! Reads the `FILE_SCHEMA` header and every simple entity instance of the
//! `DATA` section. Instances keep file order, which is the order
//! [`StepFile::entities_of_type`] reports them in.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum StepValue {
    String(String),
    Real(f64),
    Integer(i64),
    Boolean(bool),
    Enum(String),
    Reference(u64),
    List(Vec<StepValue>),
    Null,
    Derived,
}

impl StepValue {
    #[must_use]
    pub fn as_reference(&self) -> Option<u64> {
        match self {
            StepValue::Reference(id) => Some(*id),
            _ => None,
        }
    }

    /// Numeric value; integers widen so `IFCLENGTHMEASURE(3)` reads as 3.0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            StepValue::Real(f) => Some(*f),
            StepValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StepValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            StepValue::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// References held by a list value, or the single reference itself.
    #[must_use]
    pub fn references(&self) -> Vec<u64> {
        match self {
            StepValue::Reference(id) => vec![*id],
            StepValue::List(items) => items.iter().filter_map(StepValue::as_reference).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepEntity {
    pub id: u64,
    pub entity_type: String,
    pub values: Vec<StepValue>,
}

#[derive(Debug, Default)]
pub struct StepFile {
    pub schema: String,
    entities: Vec<StepEntity>,
    index: HashMap<u64, usize>,
}

impl StepFile {
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        if !content.trim_start().starts_with("ISO-10303-21") {
            return Err(ParseError::InvalidStep {
                message: "missing ISO-10303-21 header".to_string(),
            });
        }

        let mut statements = Statements::new(content);
        let mut schema = None;
        let mut in_data = false;
        for statement in statements.by_ref() {
            let statement = statement.trim();
            if statement == "DATA" {
                in_data = true;
                break;
            }
            if statement.starts_with("FILE_SCHEMA") {
                schema = read_schema(statement);
            }
        }
        if !in_data {
            return Err(ParseError::InvalidStep {
                message: "no DATA section".to_string(),
            });
        }

        let mut file = StepFile {
            schema: schema.unwrap_or_default(),
            ..StepFile::default()
        };

        for statement in statements {
            let statement = statement.trim();
            if statement == "ENDSEC" {
                break;
            }
            if statement.is_empty() {
                continue;
            }
            if let Some(entity) = parse_instance(statement)? {
                file.insert(entity);
            }
        }

        if file.is_empty() {
            warn!("STEP data section holds no entity instances");
        }
        debug!(
            schema = %file.schema,
            entities = file.entities.len(),
            "STEP data section read"
        );
        Ok(file)
    }

    fn insert(&mut self, entity: StepEntity) {
        if let Some(&slot) = self.index.get(&entity.id) {
            self.entities[slot] = entity;
        } else {
            self.index.insert(entity.id, self.entities.len());
            self.entities.push(entity);
        }
    }

    #[must_use]
    pub fn get_entity(&self, id: u64) -> Option<&StepEntity> {
        self.index.get(&id).map(|&slot| &self.entities[slot])
    }

    /// Instances whose type is one of `types`, in file order.
    pub fn entities_of_type<'a>(
        &'a self,
        types: &'a [&'a str],
    ) -> impl Iterator<Item = &'a StepEntity> + 'a {
        self.entities
            .iter()
            .filter(move |e| types.contains(&e.entity_type.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// First schema name of a `FILE_SCHEMA(('IFC4'))` statement.
fn read_schema(statement: &str) -> Option<String> {
    let start = statement.find('\'')? + 1;
    let len = statement[start..].find('\'')?;
    Some(statement[start..start + len].to_string())
}

/// Splits STEP text into `;`-terminated statements, ignoring semicolons
/// inside strings and dropping `/* */` comments. Statements may span lines.
struct Statements<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Statements<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

impl Iterator for Statements<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.pos >= self.src.len() {
            return None;
        }
        let mut out = String::new();
        let mut in_string = false;
        let mut chars = self.src[self.pos..].char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '\'' => {
                    in_string = !in_string;
                    out.push(ch);
                }
                '/' if !in_string && matches!(chars.peek(), Some((_, '*'))) => {
                    chars.next();
                    let mut prev = ' ';
                    for (_, c) in chars.by_ref() {
                        if prev == '*' && c == '/' {
                            break;
                        }
                        prev = c;
                    }
                }
                ';' if !in_string => {
                    self.pos += offset + 1;
                    return Some(out);
                }
                '\r' | '\n' if !in_string => {}
                _ => out.push(ch),
            }
        }

        self.pos = self.src.len();
        Some(out)
    }
}

/// Parses `#12=IFCDOOR(...)`. Complex instances (`#12=(A() B())`) are
/// skipped: none of the entity types the extraction reads use them.
fn parse_instance(statement: &str) -> Result<Option<StepEntity>, ParseError> {
    let invalid = |message: String| ParseError::InvalidStep { message };

    let Some(rest) = statement.strip_prefix('#') else {
        return Err(invalid(format!("unexpected statement '{}'", preview(statement))));
    };
    let eq = rest
        .find('=')
        .ok_or_else(|| invalid(format!("missing '=' in '{}'", preview(statement))))?;
    let id: u64 = rest[..eq]
        .trim()
        .parse()
        .map_err(|_| invalid(format!("bad instance id in '{}'", preview(statement))))?;

    let body = rest[eq + 1..].trim();
    if body.starts_with('(') {
        debug!(id, "skipping complex entity instance");
        return Ok(None);
    }

    let open = body
        .find('(')
        .ok_or_else(|| invalid(format!("#{id} has no attribute list")))?;
    let entity_type = body[..open].trim().to_ascii_uppercase();

    let mut reader = ValueReader::new(&body[open..]);
    let values = match reader.value() {
        Some(StepValue::List(values)) => values,
        _ => return Err(invalid(format!("#{id} has a malformed attribute list"))),
    };

    Ok(Some(StepEntity {
        id,
        entity_type,
        values,
    }))
}

fn preview(s: &str) -> String {
    s.chars().take(40).collect()
}

struct ValueReader<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> ValueReader<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let src = self.src;
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &src[start..self.pos]
    }

    fn value(&mut self) -> Option<StepValue> {
        self.skip_ws();
        match self.peek()? {
            '$' => {
                self.bump();
                Some(StepValue::Null)
            }
            '*' => {
                self.bump();
                Some(StepValue::Derived)
            }
            '#' => {
                self.bump();
                self.take_while(|c| c.is_ascii_digit())
                    .parse()
                    .ok()
                    .map(StepValue::Reference)
            }
            '\'' => self.string(),
            '"' => {
                self.bump();
                let raw = self.take_while(|c| c != '"');
                self.bump();
                Some(StepValue::String(raw.to_string()))
            }
            '.' => {
                self.bump();
                let name = self.take_while(|c| c != '.');
                self.bump();
                Some(match name {
                    "T" => StepValue::Boolean(true),
                    "F" => StepValue::Boolean(false),
                    other => StepValue::Enum(other.to_string()),
                })
            }
            '(' => self.list(),
            c if c.is_ascii_digit() || c == '-' || c == '+' => self.number(),
            c if c.is_ascii_alphabetic() => {
                // Typed value such as IFCLENGTHMEASURE(0.9): keep the inner value.
                self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
                self.skip_ws();
                match self.list()? {
                    StepValue::List(mut inner) if inner.len() == 1 => inner.pop(),
                    other => Some(other),
                }
            }
            _ => None,
        }
    }

    fn list(&mut self) -> Option<StepValue> {
        if self.bump()? != '(' {
            return None;
        }
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            match self.peek()? {
                ')' => {
                    self.bump();
                    return Some(StepValue::List(items));
                }
                ',' => {
                    self.bump();
                }
                _ => items.push(self.value()?),
            }
        }
    }

    fn number(&mut self) -> Option<StepValue> {
        let text =
            self.take_while(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'E' | 'e'));
        if text.contains(['.', 'E', 'e']) {
            text.parse().ok().map(StepValue::Real)
        } else {
            text.parse().ok().map(StepValue::Integer)
        }
    }

    fn string(&mut self) -> Option<StepValue> {
        self.bump();
        let mut raw = String::new();
        loop {
            let ch = self.bump()?;
            if ch == '\'' {
                if self.peek() == Some('\'') {
                    self.bump();
                    raw.push('\'');
                    continue;
                }
                return Some(StepValue::String(decode_control_directives(&raw)));
            }
            raw.push(ch);
        }
    }
}

/// Resolves the STEP string encodings:
/// `\X2\hhhh...\X0\` (UCS-2), `\X4\hhhhhhhh...\X0\` (UCS-4),
/// `\X\hh` (ISO 8859-1), `\S\c` (upper half of ISO 8859-1) and `\\`.
fn decode_control_directives(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(at) = rest.find('\\') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];

        if let Some(tail) = rest.strip_prefix("\\\\") {
            out.push('\\');
            rest = tail;
        } else if let Some((tail, width)) = rest
            .strip_prefix("\\X2\\")
            .map(|t| (t, 4))
            .or_else(|| rest.strip_prefix("\\X4\\").map(|t| (t, 8)))
        {
            let end = tail.find("\\X0\\").unwrap_or(tail.len());
            push_hex_chars(&mut out, &tail[..end], width);
            rest = tail.get(end + 4..).unwrap_or("");
        } else if let Some(tail) = rest.strip_prefix("\\X\\") {
            let hex = tail.get(..2).unwrap_or("");
            if let Ok(code) = u8::from_str_radix(hex, 16) {
                out.push(char::from(code));
            }
            rest = tail.get(2..).unwrap_or("");
        } else if let Some(tail) = rest.strip_prefix("\\S\\") {
            let mut chars = tail.chars();
            if let Some(c) = chars.next() {
                if let Some(shifted) = u32::from(c).checked_add(128).and_then(char::from_u32) {
                    out.push(shifted);
                }
            }
            rest = chars.as_str();
        } else {
            out.push('\\');
            rest = &rest[1..];
        }
    }

    out.push_str(rest);
    out
}

fn push_hex_chars(out: &mut String, hex: &str, width: usize) {
    for chunk in hex.as_bytes().chunks(width) {
        let decoded = std::str::from_utf8(chunk)
            .ok()
            .and_then(|s| u32::from_str_radix(s, 16).ok())
            .and_then(char::from_u32);
        if let Some(c) = decoded {
            out.push(c);
        }
    }
}
