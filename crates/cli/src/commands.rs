use pflags::{Error, ErrorKind, FlagOptions, FlagType, Registry, RegistryOptions, Result};

use crate::help;
use crate::sections::{flag_groups, has_help_flag, split_sections};

/// What a subcommand wants printed on stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Regular output, written without a trailing newline.
    Print(String),
    /// Help text; the process exits with the help-requested status.
    Help(String),
}

fn text(description: &str) -> FlagOptions {
    FlagOptions {
        description: description.to_string(),
        ..FlagOptions::default()
    }
}

fn defaulted(value: &str, description: &str) -> FlagOptions {
    FlagOptions {
        default_values: vec![value.to_string()],
        ..text(description)
    }
}

fn add_help_flag(reg: &mut Registry, description: &str) -> Result<()> {
    reg.add("h", "help", FlagType::Boolean, defaulted("", description))
}

/// Options of `pflags parse` itself (section 1).
fn internal_registry() -> Result<Registry> {
    let mut reg = Registry::new(RegistryOptions {
        usage: help::PARSE.to_string(),
        ..RegistryOptions::default()
    });
    reg.add("u", "usage", FlagType::String, defaulted("", help::USAGE_FLAG))?;
    reg.add(
        "",
        "unrecognized-flags",
        FlagType::String,
        FlagOptions {
            allowed_values: vec!["allow".to_string(), "error".to_string()],
            ..defaulted(
                "error",
                "Unrecognized flags: accepted values 'allow' or 'error'\n  Default is error.",
            )
        },
    )?;
    reg.add(
        "",
        "default-values-for-optional",
        FlagType::Boolean,
        defaulted("false", "Require default value(s) for optional flags."),
    )?;
    add_help_flag(&mut reg, "Output usage help")?;
    Ok(reg)
}

/// Fields of one flag definition (section 2).
fn definition_registry(usage: String) -> Result<Registry> {
    let mut reg = Registry::new(RegistryOptions {
        usage,
        ..RegistryOptions::default()
    });
    reg.add("s", "short", FlagType::String, defaulted("", "Short name for flag."))?;
    reg.add("l", "long", FlagType::String, defaulted("", "Long name for flag."))?;
    reg.add(
        "t",
        "type",
        FlagType::String,
        FlagOptions {
            required: true,
            allowed_values: ["string", "number", "bool"].map(String::from).to_vec(),
            ..text("Type of flag.\n  Allowed values: string, number, bool")
        },
    )?;
    reg.add(
        "d",
        "description",
        FlagType::String,
        defaulted("", "Description of the flag."),
    )?;
    reg.add(
        "r",
        "required",
        FlagType::Boolean,
        defaulted("false", "If a flag is required"),
    )?;
    reg.add(
        "",
        "default",
        FlagType::String,
        text("Default values\n  (Can be specified multiple times)."),
    )?;
    reg.add(
        "a",
        "allowed",
        FlagType::String,
        text("Allowed values\n  (Can be specified multiple times)."),
    )?;
    reg.add(
        "",
        "regex",
        FlagType::String,
        defaulted("", "Regex for string validation\n  (Only applicable to --type=string)."),
    )?;
    Ok(reg)
}

/// First value of a flag that always resolves (it is required or defaulted).
fn single(reg: &Registry, name: &str) -> Result<String> {
    Ok(reg.get(name)?.first().cloned().unwrap_or_default())
}

/// All values of a repeatable flag; none given is an empty list.
fn repeated(reg: &Registry, name: &str) -> Result<Vec<String>> {
    match reg.get(name) {
        Ok(values) => Ok(values.to_vec()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Parse the definition tokens of one flag and declare it on `target`.
fn declare_flag(
    target: &mut Registry,
    definition: &mut Registry,
    group: &[String],
    defaults_required_for_optional: bool,
) -> Result<()> {
    definition.parse(group)?;
    let flag_type: FlagType = single(definition, "type")?.parse()?;
    let options = FlagOptions {
        default_values: repeated(definition, "default")?,
        required: single(definition, "required")? == "true",
        allowed_values: repeated(definition, "allowed")?,
        string_pattern: Some(single(definition, "regex")?),
        description: single(definition, "description")?,
        defaults_required_for_optional,
    };
    target.add(
        &single(definition, "short")?,
        &single(definition, "long")?,
        flag_type,
        options,
    )
}

pub fn parse(args: &[String]) -> Result<Outcome> {
    let sections = split_sections(args);
    let mut internal = internal_registry()?;
    let mut definition = definition_registry(internal.usage_help())?;

    if has_help_flag(sections.internal) {
        return Ok(Outcome::Help(definition.usage_help()));
    }
    if sections.flags.is_empty() {
        return Err(Error::InvalidUsage("No flags provided".to_string()));
    }

    internal.parse(sections.internal)?;
    let allow_unrecognized = single(&internal, "unrecognized-flags")? == "allow";
    let defaults_required = single(&internal, "default-values-for-optional")? == "true";

    let mut external = Registry::new(RegistryOptions {
        usage: single(&internal, "usage")?,
        allow_unrecognized_flags: allow_unrecognized,
    });
    for group in flag_groups(sections.flags) {
        declare_flag(&mut external, &mut definition, group, defaults_required)?;
    }
    tracing::debug!(
        flags = external.flags().len(),
        allow_unrecognized,
        "flag definitions loaded"
    );

    if has_help_flag(sections.external) {
        return Ok(Outcome::Help(external.usage_help()));
    }
    external.parse(sections.external)?;
    Ok(Outcome::Print(external.token().unwrap_or_default()))
}

/// The single encoded result among `reg`'s non-flag args.
fn token_arg(reg: &Registry) -> Result<&str> {
    match reg.non_flag_args() {
        [] => Err(Error::InvalidUsage(
            "Parsed args data is not provided.".to_string(),
        )),
        [token] => Ok(token.as_str()),
        _ => Err(Error::InvalidUsage(
            "Only 1 non-flag arg should be given.".to_string(),
        )),
    }
}

pub fn get(args: &[String]) -> Result<Outcome> {
    let mut reg = Registry::new(RegistryOptions {
        usage: help::GET.to_string(),
        ..RegistryOptions::default()
    });
    reg.add(
        "n",
        "name",
        FlagType::String,
        FlagOptions {
            required: true,
            ..text("Name of flag, either the short or the long name.")
        },
    )?;
    add_help_flag(&mut reg, "Output usage details.")?;

    if has_help_flag(args) {
        return Ok(Outcome::Help(reg.usage_help()));
    }
    reg.parse(args)?;
    let name = single(&reg, "name")?;
    let values = pflags::get_from_token(&name, token_arg(&reg)?)?;
    Ok(Outcome::Print(values.join("\n")))
}

pub fn unparsed(args: &[String]) -> Result<Outcome> {
    if args.is_empty() {
        return Err(Error::InvalidUsage("No argument provided.".to_string()));
    }
    let mut reg = Registry::new(RegistryOptions {
        usage: help::UNPARSED.to_string(),
        ..RegistryOptions::default()
    });
    add_help_flag(&mut reg, "Output usage details.")?;

    if has_help_flag(args) {
        return Ok(Outcome::Help(reg.usage_help()));
    }
    reg.parse(args)?;
    let values = pflags::non_flag_args_from_token(token_arg(&reg)?)?;
    Ok(Outcome::Print(values.join("\n")))
}
