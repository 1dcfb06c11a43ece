//! Path matcher — declares which request paths the guard runs for.
//!
//! Patterns use `/`-separated segments. A segment is either a literal or a
//! named parameter `:name`, optionally followed by a modifier on the final
//! segment: `?` (zero or one), `*` (zero or more), `+` (one or more).

pub const DEFAULT_PATTERNS: [&str; 3] = ["/dashboard/:path*", "/login", "/register"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatcherError {
    #[error("empty path pattern")]
    Empty,
    #[error("path pattern {0:?} must start with '/'")]
    NotAbsolute(String),
    #[error("path pattern {0:?} has a parameter without a name")]
    UnnamedParam(String),
    #[error("path pattern {0:?} uses a repeat modifier before the final segment")]
    ModifierNotLast(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    One,
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(Repeat),
}

/// A single compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern such as `/dashboard/:path*`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty, relative, has an unnamed
    /// parameter or puts a repeat modifier anywhere but the last segment.
    pub fn parse(pattern: &str) -> Result<Self, MatcherError> {
        if pattern.is_empty() {
            return Err(MatcherError::Empty);
        }
        if !pattern.starts_with('/') {
            return Err(MatcherError::NotAbsolute(pattern.to_owned()));
        }

        let raw: Vec<&str> = split_segments(pattern).collect();
        let mut segments = Vec::with_capacity(raw.len());
        for (i, seg) in raw.iter().enumerate() {
            let Some(param) = seg.strip_prefix(':') else {
                segments.push(Segment::Literal((*seg).to_owned()));
                continue;
            };

            let (name, repeat) = match param.as_bytes().last() {
                Some(b'?') => (&param[..param.len() - 1], Repeat::ZeroOrOne),
                Some(b'*') => (&param[..param.len() - 1], Repeat::ZeroOrMore),
                Some(b'+') => (&param[..param.len() - 1], Repeat::OneOrMore),
                _ => (param, Repeat::One),
            };
            if name.is_empty() {
                return Err(MatcherError::UnnamedParam(pattern.to_owned()));
            }
            if repeat != Repeat::One && i + 1 != raw.len() {
                return Err(MatcherError::ModifierNotLast(pattern.to_owned()));
            }
            segments.push(Segment::Param(repeat));
        }

        Ok(Self { source: pattern.to_owned(), segments })
    }

    /// The pattern text this was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Case-sensitive match; a trailing slash on `path` is ignored.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        if !path.starts_with('/') {
            return false;
        }
        let parts: Vec<&str> = split_segments(path).collect();

        let mut idx = 0;
        for seg in &self.segments {
            match seg {
                Segment::Literal(lit) => {
                    if parts.get(idx) != Some(&lit.as_str()) {
                        return false;
                    }
                    idx += 1;
                }
                Segment::Param(repeat) => {
                    let remaining = parts.len() - idx;
                    match repeat {
                        Repeat::One => {
                            if remaining == 0 {
                                return false;
                            }
                            idx += 1;
                        }
                        Repeat::ZeroOrOne => {
                            if remaining > 1 {
                                return false;
                            }
                            idx = parts.len();
                        }
                        Repeat::ZeroOrMore => idx = parts.len(),
                        Repeat::OneOrMore => {
                            if remaining == 0 {
                                return false;
                            }
                            idx = parts.len();
                        }
                    }
                }
            }
        }
        idx == parts.len()
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

// =============================================================================
// MATCHER
// =============================================================================

/// Ordered set of patterns; a path is in scope if any pattern matches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    patterns: Vec<PathPattern>,
}

impl Matcher {
    /// Compile every pattern, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns the first [`MatcherError`] encountered.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, MatcherError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| PathPattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }

    #[must_use]
    pub fn patterns(&self) -> &[PathPattern] {
        &self.patterns
    }
}

impl Default for Matcher {
    fn default() -> Self {
        let patterns = DEFAULT_PATTERNS
            .iter()
            .map(|p| PathPattern::parse(p))
            .collect::<Result<Vec<_>, _>>()
            .unwrap_or_default();
        Self { patterns }
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
