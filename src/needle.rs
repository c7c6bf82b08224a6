//! Search targets and character sets.
//!
//! Code units are compared by numeric code (`u32`), so a `char` and its code
//! point are interchangeable wherever a target is accepted.

use crate::error::WalkerError;

/// A single-character search target.
pub trait Needle {
    /// The code this needle matches.
    ///
    /// Empty text yields `Ok(None)`, which matches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`WalkerError::InvalidArgument`] for text longer than one
    /// character.
    fn code_unit(&self) -> Result<Option<u32>, WalkerError>;
}

impl Needle for char {
    fn code_unit(&self) -> Result<Option<u32>, WalkerError> {
        Ok(Some(u32::from(*self)))
    }
}

impl Needle for u32 {
    fn code_unit(&self) -> Result<Option<u32>, WalkerError> {
        Ok(Some(*self))
    }
}

impl Needle for str {
    fn code_unit(&self) -> Result<Option<u32>, WalkerError> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(None),
            (Some(ch), None) => Ok(Some(u32::from(ch))),
            (Some(_), Some(_)) => Err(WalkerError::invalid_argument(self)),
        }
    }
}

impl Needle for String {
    fn code_unit(&self) -> Result<Option<u32>, WalkerError> {
        self.as_str().code_unit()
    }
}

impl<T: Needle + ?Sized> Needle for &T {
    fn code_unit(&self) -> Result<Option<u32>, WalkerError> {
        (**self).code_unit()
    }
}

/// A set of code units, used by `consume`.
///
/// Text counts as the set of its characters.
pub trait CharSet {
    /// Whether `code` is a member of the set.
    fn contains_code(&self, code: u32) -> bool;
}

impl CharSet for char {
    fn contains_code(&self, code: u32) -> bool {
        u32::from(*self) == code
    }
}

impl CharSet for u32 {
    fn contains_code(&self, code: u32) -> bool {
        *self == code
    }
}

impl CharSet for str {
    fn contains_code(&self, code: u32) -> bool {
        self.chars().any(|ch| u32::from(ch) == code)
    }
}

impl CharSet for String {
    fn contains_code(&self, code: u32) -> bool {
        self.as_str().contains_code(code)
    }
}

impl CharSet for [char] {
    fn contains_code(&self, code: u32) -> bool {
        self.iter().any(|ch| u32::from(*ch) == code)
    }
}

impl CharSet for [u32] {
    fn contains_code(&self, code: u32) -> bool {
        self.contains(&code)
    }
}

impl<const N: usize> CharSet for [char; N] {
    fn contains_code(&self, code: u32) -> bool {
        self.as_slice().contains_code(code)
    }
}

impl<const N: usize> CharSet for [u32; N] {
    fn contains_code(&self, code: u32) -> bool {
        self.as_slice().contains_code(code)
    }
}

impl CharSet for Vec<char> {
    fn contains_code(&self, code: u32) -> bool {
        self.as_slice().contains_code(code)
    }
}

impl CharSet for Vec<u32> {
    fn contains_code(&self, code: u32) -> bool {
        self.as_slice().contains_code(code)
    }
}

impl<T: CharSet + ?Sized> CharSet for &T {
    fn contains_code(&self, code: u32) -> bool {
        (**self).contains_code(code)
    }
}

/// Resolve a list of needles into codes, dropping empty ones.
pub(crate) fn resolve_codes<N: Needle>(needles: &[N]) -> Result<Vec<u32>, WalkerError> {
    needles
        .iter()
        .filter_map(|needle| needle.code_unit().transpose())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_text_is_a_needle() {
        assert_eq!("a".code_unit(), Ok(Some(97)));
        assert_eq!('a'.code_unit(), Ok(Some(97)));
        assert_eq!(97u32.code_unit(), Ok(Some(97)));
    }

    #[test]
    fn test_multi_char_text_is_rejected() {
        assert_eq!(
            "ab".code_unit(),
            Err(WalkerError::InvalidArgument { got: "ab".into() })
        );
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        assert_eq!("".code_unit(), Ok(None));
    }

    #[test]
    fn test_non_ascii_char_is_one_unit() {
        assert_eq!("é".code_unit(), Ok(Some(0xE9)));
    }

    #[test]
    fn test_resolve_codes_skips_empty_and_fails_on_long() {
        assert_eq!(resolve_codes(&["a", "", "b"]), Ok(vec![97, 98]));
        assert!(resolve_codes(&["a", "bc"]).is_err());
    }

    #[test]
    fn test_char_sets() {
        assert!(' '.contains_code(32));
        assert!(" \t".contains_code(9));
        assert!([' ', '\n'].contains_code(10));
        assert!(vec![32u32, 9].contains_code(9));
        assert!(!['a'].contains_code(98));
        assert!((&"xyz").contains_code(u32::from('y')));
    }
}
