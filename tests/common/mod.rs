#![allow(clippy::uninlined_format_args)]

use rbregex::{CompiledPattern, Engine, EngineError, Flags, MatchData, Region, Regexp};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Compile a pattern with no flags, panicking on failure.
#[track_caller]
pub fn compile(pattern: &str) -> Regexp {
    match Regexp::new(pattern) {
        Ok(re) => re,
        Err(err) => panic!("Pattern should have compiled: {}: {}", pattern, err),
    }
}

/// Compile a pattern with flag letters, panicking on failure.
#[track_caller]
pub fn compilef(pattern: &str, flags: &str) -> Regexp {
    match Regexp::with_flags(pattern, flags) {
        Ok(re) => re,
        Err(err) => panic!("Pattern should have compiled: {}: {}", pattern, err),
    }
}

/// Match `pattern` against `subject` from offset 0 and unwrap the match.
#[track_caller]
pub fn match1(pattern: &str, subject: &str) -> MatchData {
    match compile(pattern).find(subject) {
        Ok(Some(m)) => m,
        Ok(None) => panic!("Pattern should have matched: {} on {}", pattern, subject),
        Err(err) => panic!("Search should have succeeded: {}", err),
    }
}

/// Match with flag letters, unwrapping the match.
#[track_caller]
pub fn match1f(pattern: &str, flags: &str, subject: &str) -> MatchData {
    match compilef(pattern, flags).find(subject) {
        Ok(Some(m)) => m,
        Ok(None) => panic!("Pattern should have matched: {} on {}", pattern, subject),
        Err(err) => panic!("Search should have succeeded: {}", err),
    }
}

/// An engine whose patterns never match but count every compile and
/// search, so tests can observe whether the engine was consulted at all.
#[derive(Default)]
pub struct SpyEngine {
    pub compiles: Arc<AtomicUsize>,
    pub searches: Arc<AtomicUsize>,
}

impl SpyEngine {
    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    pub fn compile_count(&self) -> usize {
        self.compiles.load(Ordering::SeqCst)
    }
}

struct SpyPattern {
    searches: Arc<AtomicUsize>,
}

impl CompiledPattern for SpyPattern {
    fn find_from(&self, _subject: &str, _start: usize) -> Result<Option<Region>, EngineError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

impl Engine for SpyEngine {
    fn compile(
        &self,
        _pattern: &str,
        _flags: Flags,
    ) -> Result<Box<dyn CompiledPattern>, EngineError> {
        self.compiles.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(SpyPattern {
            searches: Arc::clone(&self.searches),
        }))
    }

    fn version(&self) -> String {
        "spy 0.0".to_string()
    }
}

/// An engine that compiles anything but fails every search.
pub struct FailingEngine {
    pub message: &'static str,
}

struct FailingPattern {
    message: &'static str,
}

impl CompiledPattern for FailingPattern {
    fn find_from(&self, _subject: &str, _start: usize) -> Result<Option<Region>, EngineError> {
        Err(EngineError::new(self.message))
    }
}

impl Engine for FailingEngine {
    fn compile(
        &self,
        _pattern: &str,
        _flags: Flags,
    ) -> Result<Box<dyn CompiledPattern>, EngineError> {
        Ok(Box::new(FailingPattern {
            message: self.message,
        }))
    }

    fn version(&self) -> String {
        "failing 0.0".to_string()
    }
}

/// An engine that rejects every pattern with a fixed diagnostic.
pub struct RejectingEngine {
    pub message: &'static str,
}

impl Engine for RejectingEngine {
    fn compile(
        &self,
        _pattern: &str,
        _flags: Flags,
    ) -> Result<Box<dyn CompiledPattern>, EngineError> {
        Err(EngineError::new(self.message))
    }

    fn version(&self) -> String {
        "rejecting 0.0".to_string()
    }
}
