//! `--key=value` option parsing for the tree command.

use std::collections::BTreeMap;

/// Options and positional values split out of a raw argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMap {
    pub options: BTreeMap<String, String>,
    pub values: Vec<String>,
}

impl ArgMap {
    /// Parse a full argv; the first two slots (interpreter and program) are skipped.
    pub fn parse<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_args(argv.into_iter().skip(2))
    }

    /// Parse arguments as-is.
    ///
    /// `--key=value` becomes an option, later keys overwrite earlier ones.
    /// Anything without a non-empty value is kept as a positional value,
    /// with a dangling `=` dropped.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = match arg.split_once('=') {
                Some((key, value)) => (key, value),
                None => (arg, ""),
            };
            if value.is_empty() {
                parsed.values.push(key.to_string());
            } else {
                parsed
                    .options
                    .insert(key.replacen("--", "", 1), value.to_string());
            }
        }
        parsed
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_argv_when_parsing_then_skips_leading_slots() {
        let parsed = ArgMap::parse(["", "", "--mode=something", "foo"]);
        assert_eq!(parsed.option("mode"), Some("something"));
        assert_eq!(parsed.values, vec!["foo".to_string()]);
    }

    #[test]
    fn given_value_with_equals_when_parsing_then_keeps_remainder() {
        let parsed = ArgMap::from_args(["--data=a=b"]);
        assert_eq!(parsed.option("data"), Some("a=b"));
    }

    #[test]
    fn given_empty_value_when_parsing_then_treated_as_positional_key() {
        let parsed = ArgMap::from_args(["--mode=", "42"]);
        assert!(parsed.options.is_empty());
        assert_eq!(parsed.values, vec!["--mode".to_string(), "42".to_string()]);
    }
}
