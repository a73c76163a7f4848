//! Parsing of a whole argument vector against an ordered list of flags.

use crate::error::{Error, Result};
use crate::flag::FlagSpec;
use crate::matcher::match_flag;
use crate::result::ParseResult;

/// Parse `tokens` against `specs`.
///
/// Flags are matched one at a time in declaration order, each pass working on
/// what the previous passes left behind. The order matters when one flag's
/// lookahead could claim a token another flag would also accept, so passes
/// must not be reordered.
///
/// Unless `allow_unrecognized` is set, a leftover token that starts with `-`
/// and is not made only of dashes fails the parse.
pub fn parse(
    specs: &[FlagSpec],
    tokens: &[String],
    allow_unrecognized: bool,
) -> Result<ParseResult> {
    let (mut result, remaining) = specs.iter().enumerate().try_fold(
        (ParseResult::default(), tokens.to_vec()),
        |(mut result, remaining), (id, spec)| {
            let (values, remaining) = match_flag(spec, &remaining)?;
            if !values.is_empty() {
                tracing::debug!(flag = %spec.name(), id, count = values.len(), "flag resolved");
            }
            result.insert(id, spec.names(), values);
            Ok::<_, Error>((result, remaining))
        },
    )?;

    if !allow_unrecognized {
        if let Some(arg) = remaining.iter().find(|a| looks_like_flag(a)) {
            return Err(Error::InvalidUsage(format!("Unrecognized flag: {arg}")));
        }
    }

    tracing::debug!(leftover = remaining.len(), "parse complete");
    result.set_non_flag_args(remaining);
    Ok(result)
}

fn looks_like_flag(arg: &str) -> bool {
    arg.starts_with('-') && !arg.trim_matches('-').is_empty()
}
