//! Query pattern compilation
//!
//! Turns the raw query string into a matchable predicate: a case-insensitive
//! literal, an anchored glob translated to a regular expression, or a
//! caller-supplied regular expression. Compilation happens once per
//! invocation; matching is pure and stateless.

use regex::{Regex, RegexBuilder};

use super::config::ConfigError;

/// How the raw query string was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Literal,
    Glob,
    Regex,
}

#[derive(Debug, Clone)]
enum Matcher {
    /// Case-insensitive equality against the lowercased pattern.
    Literal(String),
    /// Compiled case-insensitive pattern (translated glob or user regex).
    Pattern(Regex),
}

/// A compiled query: the raw string plus exactly one active matcher form.
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    kind: PatternKind,
    matcher: Matcher,
}

impl Query {
    /// Compile a query string into a matcher.
    ///
    /// With `auto_ext` set, a bare name containing none of `.`, `*`, `?`
    /// gets a `.*` extension appended, so `git` also matches `git.exe` and
    /// `git.sh`. Patterns containing `*` or `?` become anchored
    /// case-insensitive glob matchers; anything else is a case-insensitive
    /// literal match on the base name.
    pub fn compile(raw: &str, auto_ext: bool) -> Result<Self, ConfigError> {
        let mut pattern = raw.to_string();
        if auto_ext && !pattern.contains(['.', '*', '?']) {
            pattern.push_str(".*");
        }

        if pattern.contains(['*', '?']) {
            let regex = build_case_insensitive(&glob_to_regex(&pattern), raw)?;
            Ok(Self {
                raw: raw.to_string(),
                kind: PatternKind::Glob,
                matcher: Matcher::Pattern(regex),
            })
        } else {
            Ok(Self {
                raw: raw.to_string(),
                kind: PatternKind::Literal,
                matcher: Matcher::Literal(pattern.to_lowercase()),
            })
        }
    }

    /// Use a caller-supplied regular expression as the matcher.
    ///
    /// The expression is case-insensitive and unanchored: anchoring a user
    /// regex would silently change its meaning, unlike the glob translation
    /// which anchors by definition.
    pub fn regex(raw: &str) -> Result<Self, ConfigError> {
        let regex = build_case_insensitive(raw, raw)?;
        Ok(Self {
            raw: raw.to_string(),
            kind: PatternKind::Regex,
            matcher: Matcher::Pattern(regex),
        })
    }

    /// Match a file's base name (not its full path).
    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::Literal(want) => name.to_lowercase() == *want,
            Matcher::Pattern(regex) => regex.is_match(name),
        }
    }

    /// The query string as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }
}

/// Translate a glob pattern into an anchored regular expression source.
///
/// `*` maps to any sequence, `?` to exactly one character; every other
/// character matches itself literally (regex metacharacters are escaped,
/// so `[`, `+`, and friends have no special meaning here).
pub fn glob_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 8);
    regex.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            _ => regex.push_str(&regex::escape(&ch.to_string())),
        }
    }
    regex.push('$');
    regex
}

fn build_case_insensitive(source: &str, shown: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|source| ConfigError::InvalidPattern {
            pattern: shown.to_string(),
            source,
        })
}
