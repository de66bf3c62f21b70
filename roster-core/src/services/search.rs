//! Search filter - narrows the card grid by full name

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::UserRecord;

/// How the raw search text is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// The query is a regular expression (metacharacters are live)
    #[default]
    Pattern,
    /// The query is matched as a plain substring
    Literal,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Pattern => write!(f, "pattern"),
            SearchMode::Literal => write!(f, "literal"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pattern" | "regex" => Ok(SearchMode::Pattern),
            "literal" | "plain" => Ok(SearchMode::Literal),
            other => Err(Error::config(format!(
                "Unknown search mode '{}'. Available: pattern, literal",
                other
            ))),
        }
    }
}

/// Compile the matcher for `query`
///
/// The query is lowercased before compiling and names are lowercased before
/// matching, so escapes are lowercased too (`\D` matches as `\d`).
/// Look-around and backreferences are not supported and yield
/// [`Error::InvalidQuery`].
pub fn compile_query(query: &str, mode: SearchMode) -> Result<Regex> {
    let lowered = query.to_lowercase();
    let pattern = match mode {
        SearchMode::Pattern => lowered,
        SearchMode::Literal => regex::escape(&lowered),
    };
    Regex::new(&pattern).map_err(|e| Error::InvalidQuery(e.to_string()))
}

/// Records whose full name matches `query`, in their original order
///
/// An empty query matches every record.
pub fn filter<'a>(
    query: &str,
    records: &'a [UserRecord],
    mode: SearchMode,
) -> Result<Vec<&'a UserRecord>> {
    if query.is_empty() {
        return Ok(records.iter().collect());
    }
    let matcher = compile_query(query, mode)?;
    Ok(records
        .iter()
        .filter(|r| matcher.is_match(&r.full_name.to_lowercase()))
        .collect())
}
