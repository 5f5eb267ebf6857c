//! Byte wrappers
//!
//! ## Design
//!
//! `BytesOf` is the eager entry point for sources that cannot fail (string
//! slices, owned strings, byte vectors). Fallible sources stay lazy:
//! `TextAsBytes` pulls UTF-8 bytes out of any [`Text`] on access, and the
//! base64 wrappers encode/decode on access so errors surface through the
//! accessor, not the constructor.
//!
//! Base64 uses the standard alphabet with padding.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use primo_core::{Bytes, Error, Result, Scalar, Text};

/// Bytes held eagerly from an infallible source
#[derive(Debug, Clone)]
pub struct BytesOf {
    bytes: Vec<u8>,
}

impl BytesOf {
    /// Create from anything that converts into a byte vector
    pub fn new(source: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: source.into(),
        }
    }
}

impl Bytes for BytesOf {
    fn as_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// UTF-8 bytes of a text origin, produced on access
pub struct TextAsBytes<T> {
    origin: T,
}

impl<T: Text> TextAsBytes<T> {
    /// View a text origin as its UTF-8 bytes
    pub fn new(origin: T) -> Self {
        Self { origin }
    }
}

impl<T: Text> Bytes for TextAsBytes<T> {
    fn as_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.origin.as_string()?.into_bytes())
    }
}

/// Base64 rendering of a byte origin
pub struct Base64Encoded<B> {
    origin: B,
}

impl<B: Bytes> Base64Encoded<B> {
    /// Encode the origin bytes as base64 text
    pub fn new(origin: B) -> Self {
        Self { origin }
    }
}

impl<B: Bytes> Text for Base64Encoded<B> {
    fn as_string(&self) -> Result<String> {
        Ok(BASE64.encode(self.origin.as_bytes()?))
    }
}

/// Bytes decoded from a base64 text origin
///
/// Invalid base64 input is [`Error::Decode`].
pub struct Base64Decoded<T> {
    origin: T,
}

impl<T: Text> Base64Decoded<T> {
    /// Decode the origin text from base64
    pub fn new(origin: T) -> Self {
        Self { origin }
    }
}

impl<T: Text> Bytes for Base64Decoded<T> {
    fn as_bytes(&self) -> Result<Vec<u8>> {
        let encoded = self.origin.as_string()?;
        BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| Error::Decode(format!("invalid base64: {e}")))
    }
}

/// Bool scalar comparing two byte origins for equality
pub struct BytesEqual<A, B> {
    left: A,
    right: B,
}

impl<A: Bytes, B: Bytes> BytesEqual<A, B> {
    /// Compare two byte origins
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Bytes, B: Bytes> Scalar for BytesEqual<A, B> {
    type Output = bool;

    fn value(&self) -> Result<bool> {
        Ok(self.left.as_bytes()? == self.right.as_bytes()?)
    }
}

/// Fail-guard rejecting zero-length byte output
pub struct NonEmptyBytes<B> {
    origin: B,
}

impl<B: Bytes> NonEmptyBytes<B> {
    /// Guard the origin against emptiness
    pub fn new(origin: B) -> Self {
        Self { origin }
    }
}

impl<B: Bytes> Bytes for NonEmptyBytes<B> {
    fn as_bytes(&self) -> Result<Vec<u8>> {
        let bytes = self.origin.as_bytes()?;
        if bytes.is_empty() {
            return Err(Error::Empty("origin produced no bytes".to_string()));
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextOf;

    #[test]
    fn test_bytes_of_str() {
        assert_eq!(BytesOf::new("abc").as_bytes().unwrap(), b"abc");
    }

    #[test]
    fn test_bytes_of_vec() {
        assert_eq!(
            BytesOf::new(vec![0_u8, 255, 7]).as_bytes().unwrap(),
            vec![0, 255, 7]
        );
    }

    #[test]
    fn test_text_as_bytes() {
        let bytes = TextAsBytes::new(TextOf::new("héllo"));
        assert_eq!(bytes.as_bytes().unwrap(), "héllo".as_bytes());
    }

    #[test]
    fn test_base64_encode_known_vector() {
        let encoded = Base64Encoded::new(BytesOf::new("Hello!"));
        assert_eq!(encoded.as_string().unwrap(), "SGVsbG8h");
    }

    #[test]
    fn test_base64_decode_known_vector() {
        let decoded = Base64Decoded::new(TextOf::new("SGVsbG8h"));
        assert_eq!(decoded.as_bytes().unwrap(), b"Hello!");
    }

    #[test]
    fn test_base64_decode_rejects_garbage() {
        let decoded = Base64Decoded::new(TextOf::new("not//valid!!"));
        assert!(matches!(decoded.as_bytes(), Err(Error::Decode(_))));
    }

    #[test]
    fn test_base64_empty_input() {
        assert_eq!(
            Base64Encoded::new(BytesOf::new("")).as_string().unwrap(),
            ""
        );
        assert_eq!(
            Base64Decoded::new(TextOf::new("")).as_bytes().unwrap(),
            Vec::<u8>::new()
        );
    }

    #[test]
    fn test_bytes_equal_same() {
        let eq = BytesEqual::new(BytesOf::new("same"), BytesOf::new("same"));
        assert!(eq.value().unwrap());
    }

    #[test]
    fn test_bytes_equal_different() {
        let eq = BytesEqual::new(BytesOf::new("one"), BytesOf::new("two"));
        assert!(!eq.value().unwrap());
    }

    #[test]
    fn test_non_empty_bytes_passes() {
        let guard = NonEmptyBytes::new(BytesOf::new("x"));
        assert_eq!(guard.as_bytes().unwrap(), b"x");
    }

    #[test]
    fn test_non_empty_bytes_fails_empty() {
        let guard = NonEmptyBytes::new(BytesOf::new(""));
        assert!(matches!(guard.as_bytes(), Err(Error::Empty(_))));
    }
}
