//! Byte and text wrappers for Primo
//!
//! This crate covers the conversion side of the library:
//! - BytesOf / TextAsBytes: byte sources
//! - Base64Encoded / Base64Decoded: standard-alphabet base64
//! - BytesEqual: byte comparison as a bool scalar
//! - TextOf / Utf8Text / Joined / DateText: text sources
//! - NonEmptyBytes / NonEmptyText: emptiness fail-guards

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bytes;
pub mod text;

pub use bytes::{Base64Decoded, Base64Encoded, BytesEqual, BytesOf, NonEmptyBytes, TextAsBytes};
pub use text::{DateText, Joined, NonEmptyText, TextOf, Utf8Text};
