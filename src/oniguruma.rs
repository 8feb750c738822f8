//! Backend over the Oniguruma library, in its Ruby syntax dialect.

use crate::engine::{CompiledPattern, Engine, EngineError, Region};
use crate::flags::Flags;
use onig::{MatchParam, RegexOptions, SearchOptions, Syntax};

/// The default backend. Patterns compile with Ruby syntax over UTF-8
/// subjects, and searches run bounded to the requested byte range.
#[derive(Debug, Default, Copy, Clone)]
pub struct OnigEngine;

fn options_for(flags: Flags) -> RegexOptions {
    let mut options = RegexOptions::REGEX_OPTION_NONE;
    if flags.icase {
        options |= RegexOptions::REGEX_OPTION_IGNORECASE;
    }
    if flags.extended {
        options |= RegexOptions::REGEX_OPTION_EXTEND;
    }
    if flags.multiline {
        options |= RegexOptions::REGEX_OPTION_MULTILINE;
    }
    options
}

struct OnigPattern {
    re: onig::Regex,
}

// The compiled regex is immutable once built, and oniguruma supports
// concurrent searches over one regex; onig::Regex is !Send/!Sync only
// because of the raw pointer it wraps.
unsafe impl Send for OnigPattern {}
unsafe impl Sync for OnigPattern {}

impl CompiledPattern for OnigPattern {
    fn find_from(&self, subject: &str, start: usize) -> Result<Option<Region>, EngineError> {
        let mut region = onig::Region::new();
        let hit = self
            .re
            .search_with_param(
                subject,
                start,
                subject.len(),
                SearchOptions::SEARCH_OPTION_NONE,
                Some(&mut region),
                MatchParam::default(),
            )
            .map_err(EngineError::new)?;
        if hit.is_none() {
            return Ok(None);
        }
        let range = match region.pos(0) {
            Some((begin, end)) => begin..end,
            None => return Err(EngineError::new("engine reported a match with no region")),
        };
        let captures = (1..region.len())
            .map(|i| region.pos(i).map(|(begin, end)| begin..end))
            .collect();
        Ok(Some(Region { range, captures }))
    }
}

impl Engine for OnigEngine {
    fn compile(
        &self,
        pattern: &str,
        flags: Flags,
    ) -> Result<Box<dyn CompiledPattern>, EngineError> {
        let re = onig::Regex::with_options(pattern, options_for(flags), Syntax::ruby())
            .map_err(EngineError::new)?;
        Ok(Box::new(OnigPattern { re }))
    }

    fn version(&self) -> String {
        onig::version()
    }
}
