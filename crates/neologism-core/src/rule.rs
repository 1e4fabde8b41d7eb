//! Grammar productions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single production `lhs => rhs...` of a context-free grammar.
///
/// Rules are immutable once built. An empty `rhs` is an epsilon production.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rule {
    lhs: String,
    rhs: Vec<String>,
}

impl Rule {
    /// Create a rule from its left-hand symbol and right-hand symbols.
    ///
    /// The right-hand side is copied, so the caller keeps ownership of
    /// whatever collection it came from.
    pub fn new<L, R, S>(lhs: L, rhs: R) -> Self
    where
        L: Into<String>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lhs: lhs.into(),
            rhs: rhs.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an epsilon production for `lhs`.
    pub fn empty(lhs: impl Into<String>) -> Self {
        Self {
            lhs: lhs.into(),
            rhs: Vec::new(),
        }
    }

    pub fn lhs(&self) -> &str {
        &self.lhs
    }

    pub fn rhs(&self) -> &[String] {
        &self.rhs
    }

    pub(crate) fn into_parts(self) -> (String, Vec<String>) {
        (self.lhs, self.rhs)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rhs: Vec<String> = self.rhs.iter().map(|s| format!("'{s}'")).collect();
        write!(f, "Rule('{}' => {})", self.lhs, rhs.join(" "))
    }
}
