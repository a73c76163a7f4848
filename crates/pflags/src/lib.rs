//! Typed flag declarations for shell scripts, with portable parse results.
//!
//! A script declares its flags on a [`Registry`], parses its argv once, and
//! hands the resulting token to later invocations. Those read values back with
//! [`get_from_token`] / [`non_flag_args_from_token`] without re-declaring
//! anything.
//!
//! ```
//! use pflags::{FlagOptions, FlagType, Registry, RegistryOptions};
//!
//! let mut reg = Registry::new(RegistryOptions::default());
//! reg.add("v", "verbose", FlagType::Boolean, FlagOptions::default())?;
//! reg.parse(&["-v".to_string(), "file.txt".to_string()])?;
//!
//! let token = reg.token().unwrap_or_default();
//! assert_eq!(pflags::get_from_token("verbose", &token)?, ["true"]);
//! assert_eq!(pflags::non_flag_args_from_token(&token)?, ["file.txt"]);
//! # Ok::<(), pflags::Error>(())
//! ```

pub mod codec;
pub mod engine;
mod error;
pub mod flag;
pub mod matcher;
mod registry;
pub mod result;
pub mod usage;

pub use error::{Error, ErrorKind, Result};
pub use flag::{FlagOptions, FlagSpec, FlagType};
pub use registry::{
    Registry, RegistryOptions, get_from_bytes, get_from_token, non_flag_args_from_bytes,
    non_flag_args_from_token,
};
pub use result::ParseResult;
