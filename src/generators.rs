//! Property test generators for wide path conversion
//!
//! Native buffers reported by the OS can contain anything, so besides
//! realistic paths these generators produce ill-formed UTF-16 and raw unit soup.

use proptest::prelude::*;

/// Generators for wide string testing scenarios
pub struct WideGenerators;

impl WideGenerators {
    /// Generate path components mixing ASCII, BMP and supplementary characters
    pub fn path_component() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => "[a-zA-Z0-9_.-]{1,16}",
            1 => "[а-яё]{1,8}",
            1 => "[\u{3040}-\u{30FF}\u{4E00}-\u{4FFF}]{1,8}",
            1 => "[\u{1F600}-\u{1F64F}\u{10000}-\u{1000F}]{1,4}",
        ]
    }

    /// Generate Windows-style paths built from [`Self::path_component`]
    pub fn windows_path() -> impl Strategy<Value = String> {
        (
            prop::sample::select(vec!["C:", "D:", "\\\\?\\C:", ""]),
            prop::collection::vec(Self::path_component(), 1..=6),
        )
            .prop_map(|(prefix, parts)| {
                if prefix.is_empty() {
                    parts.join("\\")
                } else {
                    format!("{}\\{}", prefix, parts.join("\\"))
                }
            })
    }

    /// Generate any well-formed string, paths included
    pub fn well_formed_path() -> impl Strategy<Value = String> {
        prop_oneof![
            2 => Self::windows_path(),
            1 => any::<String>(),
        ]
    }

    /// Generate ASCII-only unit sequences (zero units included)
    pub fn ascii_units() -> impl Strategy<Value = Vec<u16>> {
        prop::collection::vec(0u16..=0x7F, 0..64)
    }

    /// Generate a single surrogate unit, high or low
    pub fn surrogate() -> impl Strategy<Value = u16> {
        0xD800u16..=0xDFFF
    }

    /// Generate a well-formed path with one extra surrogate inserted somewhere
    ///
    /// A single surrogate added to well-formed UTF-16 can never complete a
    /// pair for every unit, so the result is always ill-formed.
    pub fn path_with_lone_surrogate() -> impl Strategy<Value = Vec<u16>> {
        (Self::well_formed_path(), Self::surrogate(), any::<prop::sample::Index>()).prop_map(
            |(path, surrogate, position)| {
                let mut units: Vec<u16> = path.encode_utf16().collect();
                let at = position.index(units.len() + 1);
                units.insert(at, surrogate);
                units
            },
        )
    }

    /// Generate arbitrary unit sequences, biased towards surrogates
    pub fn any_units() -> impl Strategy<Value = Vec<u16>> {
        prop::collection::vec(
            prop_oneof![
                3 => any::<u16>(),
                2 => Self::surrogate(),
                1 => Just(0u16),
            ],
            0..64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn well_formed_paths_are_well_formed(path in WideGenerators::well_formed_path()) {
            let units: Vec<u16> = path.encode_utf16().collect();
            prop_assert!(String::from_utf16(&units).is_ok());
        }

        #[test]
        fn lone_surrogate_paths_are_ill_formed(units in WideGenerators::path_with_lone_surrogate()) {
            prop_assert!(String::from_utf16(&units).is_err());
        }

        #[test]
        fn ascii_units_stay_ascii(units in WideGenerators::ascii_units()) {
            prop_assert!(units.iter().all(|&unit| unit <= 0x7F));
        }
    }
}
