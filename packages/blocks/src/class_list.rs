//! Whitespace-normalized class-name handling.

use std::fmt;

/// Ordered list of class tokens parsed from a `class` string.
///
/// Parsing collapses all whitespace and rendering joins tokens with single
/// spaces, so a round trip never carries leading, trailing, or doubled
/// whitespace no matter how mangled the input was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn parse(class: &str) -> Self {
        Self {
            tokens: class.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Append a token unless it is already present.
    pub fn push(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !self.tokens.iter().any(|t| *t == token) {
            self.tokens.push(token);
        }
    }

    /// Drop every token for which `stale` returns true.
    pub fn remove_where(&mut self, stale: impl Fn(&str) -> bool) {
        self.tokens.retain(|t| !stale(t));
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
