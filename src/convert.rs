//! Wide string to UTF-8 conversion
//!
//! Paths reported by native change-notification APIs arrive as 16-bit code
//! units. These functions turn them into owned UTF-8 strings without touching
//! any shared state: every call decodes with its own stack-local decoder, so
//! they can be called from any number of threads at once.

use crate::error::{ConvertError, Result};
use crate::policy::MalformedPolicy;
use std::char::REPLACEMENT_CHARACTER;
use widestring::U16CStr;

/// Convert a length-delimited wide string to UTF-8 using the strict policy
///
/// Every unit in the slice is converted, including embedded zero units, which
/// become `\0` in the output. Surrogate pairs are combined into a single
/// character; an unpaired surrogate fails the call.
///
/// # Examples
/// ```
/// use wide_path::{wide_to_utf8, ConvertError};
///
/// let units: Vec<u16> = "src\\main.rs".encode_utf16().collect();
/// assert_eq!(wide_to_utf8(&units).unwrap(), "src\\main.rs");
///
/// // U+1F600 as a surrogate pair
/// assert_eq!(wide_to_utf8(&[0xD83D, 0xDE00]).unwrap().as_bytes(), &[0xF0, 0x9F, 0x98, 0x80]);
///
/// assert_eq!(
///     wide_to_utf8(&[0x61, 0xD800]),
///     Err(ConvertError::Encoding { index: 1, unit: 0xD800 })
/// );
/// ```
pub fn wide_to_utf8(units: &[u16]) -> Result<String> {
    wide_to_utf8_with(units, MalformedPolicy::Strict)
}

/// Convert a length-delimited wide string to UTF-8 under an explicit policy
///
/// With [`MalformedPolicy::Replace`] each unpaired surrogate becomes one
/// U+FFFD and the call cannot fail.
pub fn wide_to_utf8_with(units: &[u16], policy: MalformedPolicy) -> Result<String> {
    // ASCII is the common case for paths, so one byte per unit is a good first guess
    let mut out = String::with_capacity(units.len());
    decode(units, policy, |ch| out.push(ch))?;
    Ok(out)
}

/// Convert a length-delimited wide string to UTF-8, replacing unpaired surrogates
///
/// # Examples
/// ```
/// use wide_path::wide_to_utf8_lossy;
///
/// assert_eq!(wide_to_utf8_lossy(&[0x61, 0xDC00, 0x62]), "a\u{FFFD}b");
/// ```
pub fn wide_to_utf8_lossy(units: &[u16]) -> String {
    // the replace policy has no error path
    wide_to_utf8_with(units, MalformedPolicy::Replace).unwrap_or_default()
}

/// Check that a wide string is well-formed UTF-16 without producing output
///
/// Returns the same error [`wide_to_utf8`] would return for this input.
pub fn validate_wide(units: &[u16]) -> Result<()> {
    decode(units, MalformedPolicy::Strict, |_| {})
}

/// Decode `units`, handing every character to `push`
///
/// Unpaired surrogates either stop decoding with an error or are pushed as
/// U+FFFD, depending on `policy`.
fn decode(units: &[u16], policy: MalformedPolicy, mut push: impl FnMut(char)) -> Result<()> {
    let mut index = 0;

    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => {
                push(ch);
                index += ch.len_utf16();
            }
            Err(err) => {
                let unit = err.unpaired_surrogate();
                #[cfg(feature = "tracing")]
                tracing::debug!(index, unit, %policy, "unpaired surrogate in wide string");
                match policy {
                    MalformedPolicy::Strict => return Err(ConvertError::Encoding { index, unit }),
                    MalformedPolicy::Replace => push(REPLACEMENT_CHARACTER),
                }
                index += 1;
            }
        }
    }

    Ok(())
}

/// Length of a NUL-terminated wide string held in a slice
///
/// This is the position of the first zero unit, or the slice length when the
/// slice holds no terminator.
pub fn wide_nul_len(buf: &[u16]) -> usize {
    buf.iter().position(|&unit| unit == 0).unwrap_or(buf.len())
}

/// Convert a NUL-terminated wide string held in a slice, using the strict policy
///
/// Conversion stops at the first zero unit; anything after it is ignored.
/// The slice bounds are never exceeded, so an unterminated buffer is converted
/// in full.
///
/// # Examples
/// ```
/// use wide_path::wide_nul_to_utf8;
///
/// let mut buf: Vec<u16> = "C:\\temp\\f.txt".encode_utf16().collect();
/// buf.push(0);
/// buf.extend([0xD800, 0x41]);
///
/// assert_eq!(wide_nul_to_utf8(&buf).unwrap(), "C:\\temp\\f.txt");
/// ```
pub fn wide_nul_to_utf8(buf: &[u16]) -> Result<String> {
    wide_nul_to_utf8_with(buf, MalformedPolicy::Strict)
}

/// Convert a NUL-terminated wide string held in a slice under an explicit policy
pub fn wide_nul_to_utf8_with(buf: &[u16], policy: MalformedPolicy) -> Result<String> {
    wide_to_utf8_with(&buf[..wide_nul_len(buf)], policy)
}

/// Convert a NUL-terminated wide string behind a raw pointer, using the strict policy
///
/// A null pointer is reported as [`ConvertError::NullInput`] and never read.
///
/// # Safety
///
/// * `ptr` must be null, or point to a properly aligned sequence of `u16`
///   values terminated by a zero unit, all readable for the duration of the call
/// * The buffer must not be mutated while the call runs
///
/// The returned string owns its storage; `ptr` may be freed as soon as this returns.
///
/// # Examples
/// ```
/// use wide_path::{wide_ptr_to_utf8, ConvertError};
///
/// let buf: Vec<u16> = "watched\\dir\0".encode_utf16().collect();
/// let path = unsafe { wide_ptr_to_utf8(buf.as_ptr()) }.unwrap();
/// assert_eq!(path, "watched\\dir");
///
/// assert_eq!(unsafe { wide_ptr_to_utf8(std::ptr::null()) }, Err(ConvertError::NullInput));
/// ```
pub unsafe fn wide_ptr_to_utf8(ptr: *const u16) -> Result<String> {
    // SAFETY: forwarded from the caller.
    unsafe { wide_ptr_to_utf8_with(ptr, MalformedPolicy::Strict) }
}

/// Convert a NUL-terminated wide string behind a raw pointer under an explicit policy
///
/// # Safety
///
/// Same requirements as [`wide_ptr_to_utf8`].
pub unsafe fn wide_ptr_to_utf8_with(ptr: *const u16, policy: MalformedPolicy) -> Result<String> {
    if ptr.is_null() {
        return Err(ConvertError::NullInput);
    }

    // SAFETY: `ptr` is non-null, and the caller guarantees it points to a
    // readable, zero-terminated buffer that outlives this call.
    let wide = unsafe { U16CStr::from_ptr_str(ptr) };
    let units = wide.as_slice();
    wide_to_utf8_with(units, policy)
}

/// Convert an `OsStr` to UTF-8 through its wide encoding, using the strict policy
#[cfg(windows)]
pub fn os_str_to_utf8(s: &std::ffi::OsStr) -> Result<String> {
    use std::os::windows::ffi::OsStrExt;

    let units: Vec<u16> = s.encode_wide().collect();
    wide_to_utf8(&units)
}
