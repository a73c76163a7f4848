//! Flag declarations.
//!
//! A [`FlagSpec`] is validated once, when it is built. Parsing never
//! re-checks the declaration invariants; it only calls [`FlagSpec::validate`]
//! on each candidate value.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{Error, Result};

/// Value type of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagType {
    Boolean,
    Number,
    String,
}

impl FlagType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for FlagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlagType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "boolean" | "bool" => Ok(Self::Boolean),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            other => Err(Error::InvalidValue(format!("Unrecognized type: {other}"))),
        }
    }
}

/// Optional settings for a [`FlagSpec`].
///
/// All fields default to "not set".
#[derive(Debug, Clone, Default)]
pub struct FlagOptions {
    pub default_values: Vec<String>,
    pub required: bool,
    pub allowed_values: Vec<String>,
    /// Pattern a string value must fully match. An empty pattern means none.
    pub string_pattern: Option<String>,
    pub description: String,
    /// Reject optional flags that carry no default value.
    pub defaults_required_for_optional: bool,
}

#[derive(Debug, Clone)]
struct StringPattern {
    source: String,
    anchored: Regex,
}

impl StringPattern {
    fn compile(source: &str) -> Result<Self> {
        let anchored = Regex::new(&format!("^(?:{source})$"))
            .map_err(|e| Error::InvalidUsage(e.to_string()))?;
        Ok(Self {
            source: source.to_string(),
            anchored,
        })
    }

    fn is_full_match(&self, value: &str) -> bool {
        self.anchored.is_match(value)
    }
}

/// One declared flag.
#[derive(Debug, Clone)]
pub struct FlagSpec {
    short_name: String,
    long_name: String,
    flag_type: FlagType,
    required: bool,
    default_values: Vec<String>,
    allowed_values: Vec<String>,
    string_pattern: Option<StringPattern>,
    description: String,
}

impl FlagSpec {
    /// Build a flag declaration, checking every cross-field constraint.
    ///
    /// Names are stored without dash prefixes; surrounding spaces are trimmed.
    /// Any violation is reported as [`Error::InvalidUsage`].
    pub fn new(
        short_name: &str,
        long_name: &str,
        flag_type: FlagType,
        options: FlagOptions,
    ) -> Result<Self> {
        let short_name = short_name.trim_matches(' ');
        let long_name = long_name.trim_matches(' ');
        if short_name.is_empty() && long_name.is_empty() {
            return Err(Error::InvalidUsage(
                "At least one of short or long flag name is required.".to_string(),
            ));
        }

        let string_pattern = match options.string_pattern.as_deref() {
            None | Some("") => None,
            Some(source) => Some(StringPattern::compile(source)?),
        };

        let spec = Self {
            short_name: short_name.to_string(),
            long_name: long_name.to_string(),
            flag_type,
            required: options.required,
            default_values: options.default_values,
            allowed_values: options.allowed_values,
            string_pattern,
            description: options.description,
        };

        if spec.required && !spec.default_values.is_empty() {
            return Err(Error::InvalidUsage(format!(
                "{}: A required flag can not have default values.",
                spec.name()
            )));
        }
        if options.defaults_required_for_optional
            && !spec.required
            && spec.default_values.is_empty()
        {
            return Err(Error::InvalidUsage(format!(
                "{}: An optional flag should have default value(s) provided.",
                spec.name()
            )));
        }
        if !spec.allowed_values.is_empty() && spec.flag_type == FlagType::Boolean {
            return Err(Error::InvalidUsage(format!(
                "{}: Allowed values can not be provided for type {}",
                spec.name(),
                spec.flag_type
            )));
        }
        if spec.string_pattern.is_some() && spec.flag_type != FlagType::String {
            return Err(Error::InvalidUsage(format!(
                "{}: String regex can not be provided for type {}",
                spec.name(),
                spec.flag_type
            )));
        }

        Ok(spec)
    }

    /// Display name: `-s`, `--long`, or `-s/--long`.
    pub fn name(&self) -> String {
        match (self.short_name.is_empty(), self.long_name.is_empty()) {
            (false, false) => format!("-{}/--{}", self.short_name, self.long_name),
            (false, true) => format!("-{}", self.short_name),
            (true, false) => format!("--{}", self.long_name),
            (true, true) => String::new(),
        }
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Every non-empty name this flag answers to, short first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [self.short_name.as_str(), self.long_name.as_str()]
            .into_iter()
            .filter(|n| !n.is_empty())
    }

    pub fn flag_type(&self) -> FlagType {
        self.flag_type
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn default_values(&self) -> &[String] {
        &self.default_values
    }

    pub fn allowed_values(&self) -> &[String] {
        &self.allowed_values
    }

    pub fn string_pattern(&self) -> Option<&str> {
        self.string_pattern.as_ref().map(|p| p.source.as_str())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check one candidate value against the type, pattern and whitelist rules.
    pub fn validate(&self, value: &str) -> Result<()> {
        match self.flag_type {
            FlagType::Boolean => {
                if value != "true" && value != "false" {
                    return Err(Error::InvalidValue(format!(
                        "Invalid value: {value}, boolean can only take true or false."
                    )));
                }
            }
            FlagType::Number => {
                if parse_number(value).is_none() {
                    return Err(Error::InvalidValue(format!(
                        "Invalid value: {value} can not be parsed as number"
                    )));
                }
            }
            FlagType::String => {
                if let Some(pattern) = &self.string_pattern {
                    if !pattern.is_full_match(value) {
                        return Err(Error::InvalidValue(format!(
                            "Invalid value: {value}, string should be matched by regex {:?}",
                            pattern.source
                        )));
                    }
                }
            }
        }
        if !self.allowed_values.is_empty() && !self.allowed_values.iter().any(|a| a == value) {
            return Err(Error::InvalidValue(format!(
                "Invalid value: {value}, allowed values: [{}]",
                self.allowed_values.join(" ")
            )));
        }
        Ok(())
    }
}

/// Decimal float, rejecting finite literals too large for an `f64`.
fn parse_number(value: &str) -> Option<f64> {
    let n = value.parse::<f64>().ok()?;
    if n.is_infinite() && !is_infinity_literal(value) {
        return None;
    }
    Some(n)
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
