pub use crate::engine::{CompiledPattern, Engine, EngineError, Region};
pub use crate::error::Error;
pub use crate::exec::Matches;
pub use crate::flags::{FlagSpec, Flags, EXTENDED, IGNORECASE, MULTILINE};

use crate::exec;
#[cfg(feature = "backend-oniguruma")]
use crate::oniguruma::OnigEngine;

use std::fmt;
use std::ops::Range;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, Weak};

struct RegexpInner {
    source: String,
    flags: Flags,
    compiled: Box<dyn CompiledPattern>,
    /// Legacy convenience register: the most recent successful match on
    /// this instance. The return value of the search calls is the primary
    /// channel; this cell only mirrors it, under a lock so concurrent
    /// searches stay well-defined.
    last_match: Mutex<Option<MatchData>>,
}

impl RegexpInner {
    fn last_match_cell(&self) -> MutexGuard<'_, Option<MatchData>> {
        // A panic while holding the lock leaves nothing half-updated; keep
        // serving the register rather than poisoning every later search.
        self.last_match
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// A compiled pattern plus its canonical option set.
///
/// A `Regexp` is immutable once constructed: the pattern text, the flags
/// and the compiled form never change, so one instance can serve searches
/// from many places. Cloning is cheap and shares the compiled pattern.
///
/// ```rust
/// use rbregex::Regexp;
/// let re = Regexp::new("a(b)c").unwrap();
/// let m = re.find("xxabcxx").unwrap().unwrap();
/// assert_eq!(m.as_str(), "abc");
/// ```
#[derive(Clone)]
pub struct Regexp {
    inner: Arc<RegexpInner>,
}

impl Regexp {
    /// Compile `pattern` with no flags.
    #[cfg(feature = "backend-oniguruma")]
    #[inline]
    pub fn new(pattern: &str) -> Result<Regexp, Error> {
        Self::with_flags(pattern, FlagSpec::None)
    }

    /// Compile `pattern` with `flags`, which may be given as a bool, a
    /// bitmask, a letter string, or a [`FlagSpec`].
    ///
    /// ```rust
    /// use rbregex::{Regexp, IGNORECASE};
    /// let a = Regexp::with_flags("abc", true).unwrap();
    /// let b = Regexp::with_flags("abc", IGNORECASE).unwrap();
    /// let c = Regexp::with_flags("abc", "i").unwrap();
    /// assert!(a == b && b == c);
    /// ```
    #[cfg(feature = "backend-oniguruma")]
    #[inline]
    pub fn with_flags<F>(pattern: &str, flags: F) -> Result<Regexp, Error>
    where
        F: Into<FlagSpec>,
    {
        Self::with_engine(&OnigEngine, pattern, flags)
    }

    /// Compile `pattern` against an explicit backend instead of the
    /// default engine.
    pub fn with_engine<F>(engine: &dyn Engine, pattern: &str, flags: F) -> Result<Regexp, Error>
    where
        F: Into<FlagSpec>,
    {
        let flags = flags.into().normalize();
        let compiled = engine
            .compile(pattern, flags)
            .map_err(|err| Error::InvalidPattern {
                pattern: pattern.to_string(),
                reason: err.text,
            })?;
        Ok(Regexp {
            inner: Arc::new(RegexpInner {
                source: pattern.to_string(),
                flags,
                compiled,
                last_match: Mutex::new(None),
            }),
        })
    }

    /// The pattern text, verbatim as given at construction.
    #[inline]
    pub fn source(&self) -> &str {
        &self.inner.source
    }

    /// The canonical option set this pattern was compiled with.
    #[inline]
    pub fn flags(&self) -> Flags {
        self.inner.flags
    }

    /// Whether this pattern matches case-insensitively.
    #[inline]
    pub fn is_casefold(&self) -> bool {
        self.inner.flags.icase
    }

    /// Search `subject` from its start. Returns `Ok(None)` when nothing
    /// matches; engine failures surface as [`Error::Engine`].
    #[inline]
    pub fn find(&self, subject: &str) -> Result<Option<MatchData>, Error> {
        self.find_from(subject, 0)
    }

    /// Search `subject` for the first match whose start lies at or after
    /// byte offset `start`.
    ///
    /// A `start` of `subject.len()` or beyond is a no-match, reported
    /// without consulting the engine. On success the match is also stored
    /// in the [`last_match`](Regexp::last_match) register.
    pub fn find_from(&self, subject: &str, start: usize) -> Result<Option<MatchData>, Error> {
        let shared: Arc<str> = Arc::from(subject);
        self.find_shared(&shared, start)
    }

    /// Search against an already-shared subject copy. All public search
    /// entry points funnel through here.
    pub(crate) fn find_shared(
        &self,
        subject: &Arc<str>,
        start: usize,
    ) -> Result<Option<MatchData>, Error> {
        let region = match exec::search(self.inner.compiled.as_ref(), subject, start)? {
            Some(region) => region,
            None => return Ok(None),
        };
        let m = MatchData {
            region,
            subject: Arc::clone(subject),
            owner: Arc::downgrade(&self.inner),
            cache: OnceLock::new(),
        };
        *self.inner.last_match_cell() = Some(m.clone());
        Ok(Some(m))
    }

    /// Whether `subject` contains a match.
    #[inline]
    pub fn is_match(&self, subject: &str) -> Result<bool, Error> {
        Ok(self.find(subject)?.is_some())
    }

    /// Iterate over the non-overlapping matches in `subject`.
    #[inline]
    pub fn find_iter<'r, 't>(&'r self, subject: &'t str) -> Matches<'r, 't> {
        self.find_iter_from(subject, 0)
    }

    /// Iterate over the non-overlapping matches in `subject` whose starts
    /// lie at or after byte offset `start`.
    #[inline]
    pub fn find_iter_from<'r, 't>(&'r self, subject: &'t str, start: usize) -> Matches<'r, 't> {
        Matches::new(self, subject, start)
    }

    /// The most recent successful match on this instance, if any.
    pub fn last_match(&self) -> Option<MatchData> {
        self.inner.last_match_cell().clone()
    }

    /// Split `subject` around each match. The remainder after the last
    /// match is always appended, so splitting `"a,b,"` on `","` yields
    /// `["a", "b", ""]`.
    pub fn split(&self, subject: &str) -> Result<Vec<String>, Error> {
        let mut parts = Vec::new();
        let mut tail = 0;
        for m in self.find_iter(subject) {
            let range = m?.range();
            parts.push(subject[tail..range.start].to_string());
            tail = range.end;
        }
        parts.push(subject[tail..].to_string());
        Ok(parts)
    }

    /// Replace the first match in `subject` with `replacement`, taken
    /// literally. Returns the subject unchanged when nothing matches.
    pub fn replace(&self, subject: &str, replacement: &str) -> Result<String, Error> {
        let m = match self.find(subject)? {
            Some(m) => m,
            None => return Ok(subject.to_string()),
        };
        let range = m.range();
        let mut out = String::with_capacity(subject.len() + replacement.len());
        out.push_str(&subject[..range.start]);
        out.push_str(replacement);
        out.push_str(&subject[range.end..]);
        Ok(out)
    }
}

impl PartialEq for Regexp {
    /// Source+option equality: true iff the canonical option sets are
    /// identical and the pattern texts are byte-for-byte equal. Patterns
    /// with different source but identical matching behavior compare
    /// unequal.
    fn eq(&self, other: &Regexp) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        self.inner.flags == other.inner.flags && self.inner.source == other.inner.source
    }
}

impl Eq for Regexp {}

impl fmt::Display for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}/{}", self.inner.source, self.inner.flags)
    }
}

impl fmt::Debug for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Regexp")
            .field("source", &self.inner.source)
            .field("flags", &self.inner.flags)
            .finish_non_exhaustive()
    }
}

/// Version string of the linked engine library.
#[cfg(feature = "backend-oniguruma")]
pub fn version() -> String {
    OnigEngine.version()
}

/// One successful match: the region extents plus a private copy of the
/// subject text.
///
/// Group substrings are extracted lazily on first use and cached for the
/// life of the value; since neither the region nor the subject copy ever
/// changes, the cache is always identical to re-slicing. Offset accessors
/// ([`begin`](MatchData::begin), [`end`](MatchData::end),
/// [`offset`](MatchData::offset), [`range`](MatchData::range)) read the
/// region directly and never trigger extraction.
#[derive(Debug)]
pub struct MatchData {
    region: Region,
    subject: Arc<str>,
    owner: Weak<RegexpInner>,
    cache: OnceLock<Vec<Option<String>>>,
}

impl MatchData {
    fn check(&self, index: usize) -> Result<(), Error> {
        if index >= self.region.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.region.len(),
            });
        }
        Ok(())
    }

    fn materialized(&self) -> &[Option<String>] {
        self.cache.get_or_init(|| {
            (0..self.region.len())
                .map(|i| self.region.group(i).map(|r| self.subject[r].to_string()))
                .collect()
        })
    }

    /// The number of groups, counting the whole match at index 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.region.len()
    }

    /// Always false: index 0 is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.region.is_empty()
    }

    /// The substring of group `index`; index 0 is the whole match.
    /// Unset groups are `Ok(None)`; an index outside the region fails with
    /// [`Error::IndexOutOfRange`].
    pub fn group(&self, index: usize) -> Result<Option<&str>, Error> {
        self.check(index)?;
        Ok(self.materialized()[index].as_deref())
    }

    /// The begin offset of group `index`, or `Ok(None)` for a group that
    /// did not participate in the match.
    pub fn begin(&self, index: usize) -> Result<Option<usize>, Error> {
        self.check(index)?;
        Ok(self.region.group(index).map(|r| r.start))
    }

    /// The end offset of group `index`, or `Ok(None)` for a group that did
    /// not participate in the match.
    pub fn end(&self, index: usize) -> Result<Option<usize>, Error> {
        self.check(index)?;
        Ok(self.region.group(index).map(|r| r.end))
    }

    /// The (begin, end) offset pair of group `index`.
    pub fn offset(&self, index: usize) -> Result<Option<(usize, usize)>, Error> {
        self.check(index)?;
        Ok(self.region.group(index).map(|r| (r.start, r.end)))
    }

    /// All materialized group substrings, the whole match included at
    /// index 0.
    #[inline]
    pub fn groups(&self) -> &[Option<String>] {
        self.materialized()
    }

    /// The materialized capture-group substrings, excluding the whole
    /// match.
    #[inline]
    pub fn captures(&self) -> &[Option<String>] {
        &self.materialized()[1..]
    }

    /// The part of the subject before the match.
    #[inline]
    pub fn pre_match(&self) -> &str {
        &self.subject[..self.region.range.start]
    }

    /// The part of the subject after the match.
    #[inline]
    pub fn post_match(&self) -> &str {
        &self.subject[self.region.range.end..]
    }

    /// The whole-match substring.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.materialized()[0].as_deref().unwrap_or("")
    }

    /// The range of the whole match in the subject.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.region.range.clone()
    }

    /// The raw region this result wraps.
    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The stored subject copy. This is independent of the buffer the
    /// search ran over; whatever the caller does with that buffer
    /// afterwards cannot affect this result.
    #[inline]
    pub fn string(&self) -> &str {
        &self.subject
    }

    /// The matcher that produced this result, unless it has been dropped.
    /// The back-reference is weak: a result never extends the life of its
    /// matcher.
    pub fn regexp(&self) -> Option<Regexp> {
        self.owner.upgrade().map(|inner| Regexp { inner })
    }

    /// Rebind this result to `other`'s match: the region is deep-copied,
    /// the subject and owning matcher are shared, and any cached
    /// substrings of our own are discarded.
    pub fn copy_from(&mut self, other: &MatchData) {
        self.region = other.region.clone();
        self.subject = Arc::clone(&other.subject);
        self.owner = other.owner.clone();
        self.cache = OnceLock::new();
    }
}

impl Clone for MatchData {
    /// Same sharing as [`copy_from`](MatchData::copy_from): the region is
    /// deep-copied, the subject and owner are shared, and the clone starts
    /// with an empty cache.
    fn clone(&self) -> MatchData {
        MatchData {
            region: self.region.clone(),
            subject: Arc::clone(&self.subject),
            owner: self.owner.clone(),
            cache: OnceLock::new(),
        }
    }
}

impl PartialEq for MatchData {
    /// Value equality over the materialized group arrays.
    fn eq(&self, other: &MatchData) -> bool {
        self.materialized() == other.materialized()
    }
}

impl fmt::Display for MatchData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
