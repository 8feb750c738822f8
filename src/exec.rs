//! Search execution: offset validation, engine invocation, outcome mapping.

use crate::api::{MatchData, Regexp};
use crate::engine::{CompiledPattern, Region};
use crate::error::Error;
use std::sync::Arc;

/// Run one bounded search over `[start, subject.len())`.
///
/// Out-of-range starts are a no-match, not an error, and the engine is not
/// consulted for them. A start of `subject.len()` is out of range even for
/// patterns that can match empty; in particular the empty subject never
/// matches. Negative offsets cannot be expressed. Exactly one engine pass
/// runs per call; nothing is retried.
pub(crate) fn search(
    compiled: &dyn CompiledPattern,
    subject: &str,
    start: usize,
) -> Result<Option<Region>, Error> {
    if start >= subject.len() {
        return Ok(None);
    }
    compiled
        .find_from(subject, start)
        .map_err(|err| Error::Engine(err.text))
}

/// An iterator over the non-overlapping matches of a pattern in a subject.
///
/// Yields `Result` items: an engine failure is reported once and ends the
/// iteration. All yielded [`MatchData`] share one copy of the subject.
#[derive(Debug)]
pub struct Matches<'r, 't> {
    re: &'r Regexp,
    subject: &'t str,
    shared: Arc<str>,
    pos: usize,
    done: bool,
}

impl<'r, 't> Matches<'r, 't> {
    pub(crate) fn new(re: &'r Regexp, subject: &'t str, start: usize) -> Self {
        Matches {
            re,
            subject,
            shared: Arc::from(subject),
            pos: start,
            done: false,
        }
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = Result<MatchData, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.re.find_shared(&self.shared, self.pos) {
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Ok(Some(m)) => {
                let range = m.range();
                self.pos = if range.is_empty() {
                    // Step over one character so the scan makes progress.
                    self.subject[range.end..]
                        .chars()
                        .next()
                        .map_or(self.subject.len(), |c| range.end + c.len_utf8())
                } else {
                    range.end
                };
                Some(Ok(m))
            }
        }
    }
}
