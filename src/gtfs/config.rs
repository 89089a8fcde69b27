use serde::Deserialize;

/// Parsing policy for a feed load.
///
/// Lenient mode (the default) drops unknown columns, truncates over-long rows
/// and leaves unresolvable optional references unset. Strict mode turns each
/// of those into an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strict: bool,
}

impl Config {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
