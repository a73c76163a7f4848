//! Splitting of `pflags parse` arguments into their sections.

/// Separates the internal options, the flag definitions and the args to parse.
pub const SECTION_DELIMITER: &str = "----";

/// Separates one flag definition from the next inside the definitions section.
pub const FLAG_DELIMITER: &str = "--";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    pub internal: &'a [String],
    pub flags: &'a [String],
    pub external: &'a [String],
}

/// Cut `args` at the first two section delimiters.
///
/// Anything after the second delimiter belongs to the script being parsed,
/// further `----` tokens included.
pub fn split_sections(args: &[String]) -> Sections<'_> {
    let mut parts = args.splitn(3, |a| a == SECTION_DELIMITER);
    Sections {
        internal: parts.next().unwrap_or_default(),
        flags: parts.next().unwrap_or_default(),
        external: parts.next().unwrap_or_default(),
    }
}

/// Split the definitions section into one token group per flag.
pub fn flag_groups(flags: &[String]) -> impl Iterator<Item = &[String]> {
    flags.split(|a| a == FLAG_DELIMITER)
}

pub fn has_help_flag(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}
