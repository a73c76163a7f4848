//! Extraction of a single flag's occurrences from a token sequence.

use crate::error::{Error, Result};
use crate::flag::{FlagSpec, FlagType};

/// Tokens that identify one flag: `-s`, `--long`, and their `=` forms.
struct Heads {
    bare: Vec<String>,
    with_value: Vec<String>,
}

impl Heads {
    fn of(spec: &FlagSpec) -> Self {
        let mut bare = Vec::new();
        let mut with_value = Vec::new();
        if !spec.short_name().is_empty() {
            bare.push(format!("-{}", spec.short_name()));
            with_value.push(format!("-{}=", spec.short_name()));
        }
        if !spec.long_name().is_empty() {
            bare.push(format!("--{}", spec.long_name()));
            with_value.push(format!("--{}=", spec.long_name()));
        }
        Self { bare, with_value }
    }

    fn is_bare(&self, token: &str) -> bool {
        self.bare.iter().any(|h| h == token)
    }

    fn is_with_value(&self, token: &str) -> bool {
        self.with_value.iter().any(|h| token.starts_with(h.as_str()))
    }
}

/// Pull every occurrence of `spec` out of `tokens`.
///
/// Returns the collected values (or the defaults when nothing matched) and the
/// tokens that did not belong to this flag, in their original order. The first
/// invalid value aborts the scan.
pub fn match_flag(spec: &FlagSpec, tokens: &[String]) -> Result<(Vec<String>, Vec<String>)> {
    let heads = Heads::of(spec);
    let mut values: Vec<String> = Vec::new();
    let mut remainder: Vec<String> = Vec::with_capacity(tokens.len());

    let mut i = 0usize;
    while i < tokens.len() {
        let token = tokens[i].as_str();

        if heads.is_bare(token) {
            let next = tokens.get(i + 1);
            if spec.flag_type() == FlagType::Boolean {
                match next {
                    Some(v) if spec.validate(v).is_ok() => {
                        tracing::trace!(flag = %spec.name(), value = %v, "explicit boolean value");
                        values.push(v.clone());
                        i += 2;
                    }
                    _ => {
                        values.push("true".to_string());
                        i += 1;
                    }
                }
                continue;
            }

            let Some(value) = next.filter(|v| !v.starts_with('-')) else {
                return Err(Error::InvalidValue(format!(
                    "No value provided for flag {token}"
                )));
            };
            spec.validate(value)?;
            tracing::trace!(flag = %spec.name(), value = %value, "consumed value");
            values.push(value.clone());
            i += 2;
            continue;
        }

        if heads.is_with_value(token) {
            if let Some((_, value)) = token.split_once('=') {
                spec.validate(value)?;
                tracing::trace!(flag = %spec.name(), value = %value, "consumed = value");
                values.push(value.to_string());
                i += 1;
                continue;
            }
        }

        remainder.push(tokens[i].clone());
        i += 1;
    }

    if values.is_empty() {
        if spec.required() {
            return Err(Error::InvalidUsage(format!(
                "Required flag missing: {}",
                spec.name()
            )));
        }
        values = spec.default_values().to_vec();
    }

    Ok((values, remainder))
}
