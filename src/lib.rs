//! # wide-path
//!
//! Deterministic conversion of native wide-character paths to UTF-8.
//!
//! File-change notification APIs on Windows report paths as sequences of
//! 16-bit code units that the file system does not require to be well-formed
//! UTF-16. This crate turns those buffers into owned UTF-8 strings with a
//! documented, uniform answer for every ill-formed input.
//!
//! ## Features
//!
//! - **Exact transcoding**: surrogate pairs become their 4-byte UTF-8 form
//! - **Explicit malformed-input policy**: fail on unpaired surrogates (default) or replace them with U+FFFD
//! - **Two input shapes**: length-delimited slices and NUL-terminated buffers, by slice or raw pointer
//! - **Pure and reentrant**: no shared state, safe to call from any thread
//!
//! ## Examples
//!
//! ### Converting a length-delimited path
//!
//! ```rust
//! use wide_path::wide_to_utf8;
//!
//! let units: Vec<u16> = "C:\\watched\\😀.txt".encode_utf16().collect();
//! assert_eq!(wide_to_utf8(&units).unwrap(), "C:\\watched\\😀.txt");
//! ```
//!
//! ### Handling unpaired surrogates
//!
//! ```rust
//! use wide_path::{wide_to_utf8, wide_to_utf8_with, ConvertError, MalformedPolicy};
//!
//! let units = [0x61, 0xD800, 0x62];
//!
//! // Strict by default: the offending unit and its position are reported
//! assert_eq!(
//!     wide_to_utf8(&units),
//!     Err(ConvertError::Encoding { index: 1, unit: 0xD800 })
//! );
//!
//! // Replacement on request
//! assert_eq!(
//!     wide_to_utf8_with(&units, MalformedPolicy::Replace).unwrap(),
//!     "a\u{FFFD}b"
//! );
//! ```
//!
//! ### NUL-terminated buffers
//!
//! ```rust
//! use wide_path::{wide_nul_to_utf8, wide_ptr_to_utf8, ConvertError};
//!
//! let buf: Vec<u16> = "C:\\temp\\f.txt\0<garbage>".encode_utf16().collect();
//! assert_eq!(wide_nul_to_utf8(&buf).unwrap(), "C:\\temp\\f.txt");
//!
//! let from_ptr = unsafe { wide_ptr_to_utf8(buf.as_ptr()) }.unwrap();
//! assert_eq!(from_ptr, "C:\\temp\\f.txt");
//!
//! assert_eq!(unsafe { wide_ptr_to_utf8(std::ptr::null()) }, Err(ConvertError::NullInput));
//! ```

mod convert;
mod error;
mod policy;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
#[cfg(windows)]
pub use convert::os_str_to_utf8;
pub use convert::{
    validate_wide, wide_nul_len, wide_nul_to_utf8, wide_nul_to_utf8_with, wide_ptr_to_utf8,
    wide_ptr_to_utf8_with, wide_to_utf8, wide_to_utf8_lossy, wide_to_utf8_with,
};
pub use error::{ConvertError, Result};
pub use policy::MalformedPolicy;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
