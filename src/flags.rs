//! Flag handling: the accepted flag shapes and their canonical form.

use crate::error::Error;
use core::fmt;
use core::str::FromStr;
use memchr::memchr;

/// Bit for case-insensitive matching, combinable with bitwise OR.
pub const IGNORECASE: u32 = 1;

/// Bit for extended syntax (whitespace and comments in the pattern).
pub const EXTENDED: u32 = 2;

/// Bit for multiline mode, where `.` also matches a line terminator.
pub const MULTILINE: u32 = 4;

/// The canonical option set of a compiled [`Regexp`](crate::Regexp).
///
/// Every accepted flag shape normalizes to this triple before the engine
/// ever sees it. The default is all-off.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    /// If set, matching ignores case.
    /// Equivalent to the 'i' flag letter.
    pub icase: bool,

    /// If set, the pattern uses extended syntax.
    /// Equivalent to the 'x' flag letter.
    pub extended: bool,

    /// If set, `.` matches line terminators too.
    /// Equivalent to the 'm' flag letter.
    pub multiline: bool,
}

impl Flags {
    /// Construct a Flags from a bitmask of [`IGNORECASE`], [`EXTENDED`] and
    /// [`MULTILINE`]. Bits combine independently; unrecognized bits are
    /// ignored, not an error.
    #[inline]
    pub fn from_bits(bits: u32) -> Self {
        Flags {
            icase: bits & IGNORECASE != 0,
            extended: bits & EXTENDED != 0,
            multiline: bits & MULTILINE != 0,
        }
    }

    /// Construct a Flags from a letter string: 'i' means to ignore case,
    /// 'x' means extended syntax, 'm' means multiline. The scan is
    /// order-independent, duplicates are harmless, and other letters are
    /// silently skipped.
    #[inline]
    pub fn from_letters(letters: &str) -> Self {
        let bytes = letters.as_bytes();
        Flags {
            icase: memchr(b'i', bytes).is_some(),
            extended: memchr(b'x', bytes).is_some(),
            multiline: memchr(b'm', bytes).is_some(),
        }
    }

    /// The bitmask form of this option set.
    #[inline]
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.icase {
            bits |= IGNORECASE;
        }
        if self.extended {
            bits |= EXTENDED;
        }
        if self.multiline {
            bits |= MULTILINE;
        }
        bits
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.icase {
            f.write_str("i")?;
        }
        if self.extended {
            f.write_str("x")?;
        }
        if self.multiline {
            f.write_str("m")?;
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = Error;

    /// Parse a textual flag spec: either a decimal bitmask or a string of
    /// `i`/`x`/`m` letters. Unlike [`Flags::from_letters`], which mirrors
    /// the lenient engine-facing scan, this is strict: any other text is
    /// rejected with [`Error::InvalidFlag`]. Used at CLI and config
    /// boundaries.
    fn from_str(s: &str) -> Result<Self, Error> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let bits = s
                .parse::<u32>()
                .map_err(|_| Error::InvalidFlag(s.to_string()))?;
            return Ok(Flags::from_bits(bits));
        }
        if s.bytes().all(|b| matches!(b, b'i' | b'x' | b'm')) {
            return Ok(Flags::from_letters(s));
        }
        Err(Error::InvalidFlag(s.to_string()))
    }
}

/// One flag argument, in any of the shapes a [`Regexp`](crate::Regexp)
/// constructor accepts.
///
/// The shapes normalize as follows:
///
/// - `None`: all options off.
/// - `Bool(true)`: ignore case only; `Bool(false)` turns nothing on.
/// - `Bits(n)`: a bitmask of [`IGNORECASE`], [`EXTENDED`], [`MULTILINE`].
/// - `Letters(s)`: a string scanned for the `i`/`x`/`m` letters.
///
/// `From` conversions exist for `bool`, integers, strings and [`Flags`], so
/// call sites can pass any of them directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlagSpec {
    /// No flags given.
    #[default]
    None,
    /// Boolean shorthand: `true` turns on case folding.
    Bool(bool),
    /// A bitmask of the flag constants.
    Bits(u32),
    /// A letter string such as `"im"`.
    Letters(String),
}

impl FlagSpec {
    /// Reduce this flag argument to the canonical option set.
    /// Deterministic and total; has no side effects.
    pub fn normalize(&self) -> Flags {
        match self {
            FlagSpec::None => Flags::default(),
            FlagSpec::Bool(b) => Flags {
                icase: *b,
                ..Flags::default()
            },
            FlagSpec::Bits(bits) => Flags::from_bits(*bits),
            FlagSpec::Letters(letters) => Flags::from_letters(letters),
        }
    }
}

impl From<bool> for FlagSpec {
    #[inline]
    fn from(b: bool) -> Self {
        FlagSpec::Bool(b)
    }
}

impl From<u32> for FlagSpec {
    #[inline]
    fn from(bits: u32) -> Self {
        FlagSpec::Bits(bits)
    }
}

impl From<i32> for FlagSpec {
    #[inline]
    fn from(bits: i32) -> Self {
        FlagSpec::Bits(bits as u32)
    }
}

impl From<&str> for FlagSpec {
    #[inline]
    fn from(letters: &str) -> Self {
        FlagSpec::Letters(letters.to_string())
    }
}

impl From<String> for FlagSpec {
    #[inline]
    fn from(letters: String) -> Self {
        FlagSpec::Letters(letters)
    }
}

impl From<Flags> for FlagSpec {
    #[inline]
    fn from(flags: Flags) -> Self {
        FlagSpec::Bits(flags.bits())
    }
}
