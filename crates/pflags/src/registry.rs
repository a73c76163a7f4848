//! Flag registry: declarations, parsing and the encoded result.
//!
//! The free functions read values straight from bytes or a token, so a later
//! process can query a result without redeclaring any flags.

use crate::codec;
use crate::engine;
use crate::error::{Error, Result};
use crate::flag::{FlagOptions, FlagSpec, FlagType};
use crate::result::{self, ParseResult};
use crate::usage;

/// Settings fixed when a [`Registry`] is created.
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    /// Usage template, see [`usage::render`].
    pub usage: String,
    /// Keep unknown `-x` tokens as non-flag arguments instead of failing.
    pub allow_unrecognized_flags: bool,
}

/// An ordered set of flag declarations plus the outcome of the latest parse.
#[derive(Debug, Default)]
pub struct Registry {
    options: RegistryOptions,
    flags: Vec<FlagSpec>,
    result: Option<ParseResult>,
    parsed_bytes: Option<Vec<u8>>,
}

impl Registry {
    pub fn new(options: RegistryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Declare a flag. Declaration order is parse order.
    pub fn add(
        &mut self,
        short_name: &str,
        long_name: &str,
        flag_type: FlagType,
        options: FlagOptions,
    ) -> Result<()> {
        let spec = FlagSpec::new(short_name, long_name, flag_type, options)?;
        tracing::trace!(flag = %spec.name(), flag_type = %spec.flag_type(), "flag declared");
        self.flags.push(spec);
        Ok(())
    }

    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    /// Parse `args`, replacing the previous result.
    ///
    /// The previous result is dropped up front, so a failed parse leaves
    /// nothing behind.
    pub fn parse(&mut self, args: &[String]) -> Result<()> {
        self.result = None;
        self.parsed_bytes = None;

        let result = engine::parse(&self.flags, args, self.options.allow_unrecognized_flags)?;
        let bytes = result.to_bytes()?;
        self.result = Some(result);
        self.parsed_bytes = Some(bytes);
        Ok(())
    }

    pub fn result(&self) -> Option<&ParseResult> {
        self.result.as_ref()
    }

    /// Values of a flag by short or long name.
    pub fn get(&self, name: &str) -> Result<&[String]> {
        self.result
            .as_ref()
            .ok_or_else(|| Error::InvalidUsage("Parsed result is nil.".to_string()))?
            .get(name)
    }

    pub fn non_flag_args(&self) -> &[String] {
        result::non_flag_args(self.result.as_ref())
    }

    /// Serialized form of the latest successful parse.
    pub fn parsed_bytes(&self) -> Option<&[u8]> {
        self.parsed_bytes.as_deref()
    }

    /// Text token of the latest successful parse.
    pub fn token(&self) -> Option<String> {
        self.parsed_bytes().map(codec::encode)
    }

    pub fn usage_help(&self) -> String {
        usage::render(&self.options.usage, &self.flags)
    }
}

pub fn get_from_bytes(name: &str, bytes: &[u8]) -> Result<Vec<String>> {
    Ok(ParseResult::from_bytes(bytes)?.get(name)?.to_vec())
}

pub fn non_flag_args_from_bytes(bytes: &[u8]) -> Result<Vec<String>> {
    Ok(ParseResult::from_bytes(bytes)?.non_flag_args().to_vec())
}

/// Look up a flag directly in an encoded token, without any declarations.
pub fn get_from_token(name: &str, token: &str) -> Result<Vec<String>> {
    get_from_bytes(name, &codec::decode(token)?)
}

pub fn non_flag_args_from_token(token: &str) -> Result<Vec<String>> {
    non_flag_args_from_bytes(&codec::decode(token)?)
}
