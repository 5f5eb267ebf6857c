//! Text wrappers
//!
//! ## Design
//!
//! `TextOf` holds an owned string from infallible sources (string slices,
//! owned strings, numbers). Bytes are NOT text: `Utf8Text` converts a byte
//! origin on access with strict UTF-8 validation, and invalid input is a
//! [`Error::Decode`], never a lossy replacement.
//!
//! `DateText` renders a UTC timestamp through a strftime format string. The
//! format is validated on access so a bad format surfaces as an error
//! instead of a panic inside the formatter.

use chrono::format::{strftime::StrftimeItems, Item};
use chrono::{DateTime, Utc};
use primo_core::{Bytes, Error, Result, Text};

/// Text held eagerly from an infallible source
#[derive(Debug, Clone)]
pub struct TextOf {
    content: String,
}

impl TextOf {
    /// Create from anything that converts into a string
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            content: source.into(),
        }
    }

    /// Render a number as text (shortest round-trip form)
    pub fn from_number(number: f64) -> Self {
        Self {
            content: format!("{number}"),
        }
    }
}

impl Text for TextOf {
    fn as_string(&self) -> Result<String> {
        Ok(self.content.clone())
    }
}

/// Text decoded from a byte origin with strict UTF-8 validation
pub struct Utf8Text<B> {
    origin: B,
}

impl<B: Bytes> Utf8Text<B> {
    /// Decode the origin bytes as UTF-8 text
    pub fn new(origin: B) -> Self {
        Self { origin }
    }
}

impl<B: Bytes> Text for Utf8Text<B> {
    fn as_string(&self) -> Result<String> {
        String::from_utf8(self.origin.as_bytes()?)
            .map_err(|e| Error::Decode(format!("invalid UTF-8: {e}")))
    }
}

/// Text joined from parts with a delimiter
pub struct Joined {
    delimiter: String,
    parts: Vec<Box<dyn Text>>,
}

impl Joined {
    /// Join the parts with the delimiter
    pub fn new(delimiter: impl Into<String>, parts: Vec<Box<dyn Text>>) -> Self {
        Self {
            delimiter: delimiter.into(),
            parts,
        }
    }
}

impl Text for Joined {
    fn as_string(&self) -> Result<String> {
        let rendered = self
            .parts
            .iter()
            .map(|part| part.as_string())
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join(&self.delimiter))
    }
}

/// UTC timestamp rendered through a strftime format
pub struct DateText {
    stamp: DateTime<Utc>,
    format: String,
}

impl DateText {
    /// Render the timestamp with the given format string
    pub fn new(stamp: DateTime<Utc>, format: impl Into<String>) -> Self {
        Self {
            stamp,
            format: format.into(),
        }
    }
}

impl Text for DateText {
    fn as_string(&self) -> Result<String> {
        let items: Vec<Item<'_>> = StrftimeItems::new(&self.format).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(Error::Decode(format!(
                "invalid date format {:?}",
                self.format
            )));
        }
        Ok(self.stamp.format_with_items(items.into_iter()).to_string())
    }
}

/// Fail-guard rejecting empty text
pub struct NonEmptyText<T> {
    origin: T,
}

impl<T: Text> NonEmptyText<T> {
    /// Guard the origin against emptiness
    pub fn new(origin: T) -> Self {
        Self { origin }
    }
}

impl<T: Text> Text for NonEmptyText<T> {
    fn as_string(&self) -> Result<String> {
        let content = self.origin.as_string()?;
        if content.is_empty() {
            return Err(Error::Empty("origin produced no characters".to_string()));
        }
        Ok(content)
    }
}
