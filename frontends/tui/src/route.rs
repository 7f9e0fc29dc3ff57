//! Page addresses, written the way the hash router of the web viewer did.

use std::fmt;
use std::str::FromStr;

const FIELD_PREFIX: &str = "/datafields/";
const RULE_PREFIX: &str = "/rules/";

/// Which page the explorer shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/` - search and dashboard
    #[default]
    Overview,
    /// `/datafields/<id>`
    Field(String),
    /// `/rules/<id>`
    Rule(String),
    /// Anything else; keeps the requested path for display
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let path = path.strip_prefix('#').unwrap_or(path);

        if path.is_empty() || path == "/" {
            return Route::Overview;
        }
        if let Some(id) = single_segment(path, FIELD_PREFIX) {
            return Route::Field(id.to_string());
        }
        if let Some(id) = single_segment(path, RULE_PREFIX) {
            return Route::Rule(id.to_string());
        }
        Route::NotFound(path.to_string())
    }
}

fn single_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    path.strip_prefix(prefix)
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::parse(s))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Overview => f.write_str("/"),
            Route::Field(id) => write!(f, "{FIELD_PREFIX}{id}"),
            Route::Rule(id) => write!(f, "{RULE_PREFIX}{id}"),
            Route::NotFound(path) => f.write_str(path),
        }
    }
}
