//! The seam between the facade and a pattern-matching backend.

use crate::flags::Flags;
use core::fmt;
use core::ops::Range;

/// An error reported by a backend, at compile or at search time.
/// The text contains the engine's rendered message.
#[derive(Debug, Clone)]
pub struct EngineError {
    pub text: String,
}

impl EngineError {
    pub fn new<S: ToString>(text: S) -> Self {
        EngineError {
            text: text.to_string(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The byte extents of one successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// The range of the whole match. Note this may be empty, if the pattern
    /// matched an empty string.
    pub range: Range<usize>,

    /// The list of captures. This has length equal to the number of
    /// capturing groups in the pattern. For each capture, if the value is
    /// None, that group did not participate in the match (for example, it
    /// sat in a not-taken branch of an alternation). If the value is Some,
    /// the group matched with the enclosed range.
    pub captures: Vec<Option<Range<usize>>>,
}

impl Region {
    /// Access a group by index. Index 0 is the whole match, index 1 is the
    /// first capture group.
    #[inline]
    pub fn group(&self, index: usize) -> Option<Range<usize>> {
        if index == 0 {
            Some(self.range.clone())
        } else {
            self.captures.get(index - 1).cloned().flatten()
        }
    }

    /// The number of groups, counting the whole match at index 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.captures.len() + 1
    }

    /// Always false: a region carries the whole-match span at minimum.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A compiled pattern, ready to search. Produced by [`Engine::compile`] and
/// owned exclusively by one [`Regexp`](crate::Regexp).
pub trait CompiledPattern: Send + Sync {
    /// Search `subject` over the half-open byte range
    /// `[start, subject.len())` for the first match whose start lies at or
    /// after `start`. Returns `Ok(None)` when nothing matches; the region's
    /// offsets must be copied out of any engine-internal scratch state
    /// before returning.
    fn find_from(&self, subject: &str, start: usize) -> Result<Option<Region>, EngineError>;
}

/// A pattern-matching backend.
///
/// The default is the Oniguruma backend; test doubles and alternative
/// engines plug in through [`Regexp::with_engine`](crate::Regexp::with_engine).
pub trait Engine {
    /// Compile `pattern` under the canonical option set `flags`.
    fn compile(
        &self,
        pattern: &str,
        flags: Flags,
    ) -> Result<Box<dyn CompiledPattern>, EngineError>;

    /// The version string of the linked engine library.
    fn version(&self) -> String;
}
