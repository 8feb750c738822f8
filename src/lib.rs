/*!

# rbregex - Ruby-flavored regular expressions for Rust

This crate is a thin facade over the Oniguruma regular expression library:
it compiles a pattern plus Ruby-style option flags into a reusable
[`Regexp`], runs searches over subject text from arbitrary byte offsets,
and exposes each successful match as a lazily materialized [`MatchData`]
view (whole match, capture groups, offsets, surrounding substrings).

# Example: test if a string contains a match

```rust
use rbregex::Regexp;
let re = Regexp::new(r"\d{4}").unwrap();
let matched = re.find("2020-20-05").unwrap().is_some();
assert!(matched);
```

# Example: capture groups and surroundings

```rust
use rbregex::Regexp;
let re = Regexp::new("a(b)c").unwrap();
let m = re.find("xxabcxx").unwrap().unwrap();
assert_eq!(m.as_str(), "abc");
assert_eq!(m.group(1).unwrap(), Some("b"));
assert_eq!(m.pre_match(), "xx");
assert_eq!(m.post_match(), "xx");
```

# Flags

The flag argument of [`Regexp::with_flags`] accepts any of the shapes the
Ruby-side API accepts: a bool (`true` folds case), a bitmask of
[`IGNORECASE`] | [`EXTENDED`] | [`MULTILINE`], or a letter string such as
`"im"`. All of them normalize to the same canonical [`Flags`] set before
compilation, so equivalent spellings produce equal matchers:

```rust
use rbregex::Regexp;
let a = Regexp::with_flags("a", true).unwrap();
let b = Regexp::with_flags("a", "i").unwrap();
assert_eq!(a, b);
```

Note that, following Ruby dialect, `^` and `$` always anchor at line
boundaries, and the multiline flag makes `.` match line terminators too.

# Offsets

Searches are byte-offset bounded: [`Regexp::find_from`] looks for the
first match starting at or after the given offset, and an offset at or
past the end of the subject is a no-match rather than an error.

# Backends

The engine sits behind the [`Engine`]/[`CompiledPattern`] seam. The
default backend (cargo feature `backend-oniguruma`, enabled by default)
wraps the `onig` crate; [`Regexp::with_engine`] accepts any other
implementation, which is also how the tests spy on engine invocations.

*/

#![warn(clippy::all)]

pub use crate::api::*;

mod api;
mod engine;
mod error;
mod exec;
mod flags;

#[cfg(feature = "backend-oniguruma")]
mod oniguruma;

#[cfg(feature = "backend-oniguruma")]
pub use crate::oniguruma::OnigEngine;
