//! The outcome of a parse and its JSON byte form.
//!
//! Fields serialize as `flagValuesForID` (declaration index to values, keys as
//! decimal strings), `flagsNameToID` and `nonFlagArgs`. Missing or `null`
//! fields read back as empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Outcome of one successful parse.
///
/// Self-contained: reading values back needs neither the flag declarations nor
/// the registry that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    #[serde(rename = "flagValuesForID", default, deserialize_with = "null_as_empty")]
    values_by_id: BTreeMap<usize, Vec<String>>,
    #[serde(rename = "flagsNameToID", default, deserialize_with = "null_as_empty")]
    name_to_id: BTreeMap<String, usize>,
    #[serde(rename = "nonFlagArgs", default, deserialize_with = "null_as_empty")]
    non_flag_args: Vec<String>,
}

impl ParseResult {
    /// Record the values of the flag declared at position `id`.
    ///
    /// Empty value lists are not recorded, so a flag is either present under
    /// all of its names or absent.
    pub(crate) fn insert<'a>(
        &mut self,
        id: usize,
        names: impl IntoIterator<Item = &'a str>,
        values: Vec<String>,
    ) {
        if values.is_empty() {
            return;
        }
        for name in names {
            self.name_to_id.insert(name.to_string(), id);
        }
        self.values_by_id.insert(id, values);
    }

    pub(crate) fn set_non_flag_args(&mut self, args: Vec<String>) {
        self.non_flag_args = args;
    }

    /// Values for a flag, looked up by its short or long name (without dashes).
    pub fn get(&self, name: &str) -> Result<&[String]> {
        let Some(&id) = self.name_to_id.get(name) else {
            return Err(Error::NotFound(format!(
                "Flag {name} not found in parsed result."
            )));
        };
        self.values_by_id
            .get(&id)
            .map(|v| v.as_slice())
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "ID {id} for flag {name} can not be found in parsed result."
                ))
            })
    }

    pub fn non_flag_args(&self) -> &[String] {
        &self.non_flag_args
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.values_by_id.is_empty() && self.non_flag_args.is_empty()
    }

    /// Serialize to the JSON byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::InvalidUsage(e.to_string()))
    }

    /// Deserialize from the JSON byte form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::Error("Parsed data can not be empty".to_string()));
        }
        serde_json::from_slice(bytes).map_err(|e| Error::InvalidUsage(e.to_string()))
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Leftover arguments of an optional result; empty when there is none.
pub fn non_flag_args(result: Option<&ParseResult>) -> &[String] {
    result.map(ParseResult::non_flag_args).unwrap_or(&[])
}
