//! Usage templates for the subcommands. `{FLAGS}` is replaced by the flag table.

pub const PARSE: &str = r#"pflags parse:
  Parses args against the given flag definitions and prints the encoded result.
  The result is consumed by 'pflags get' and 'pflags unparsed'.

  The arguments have 3 sections separated by ---- (four hyphens):

  pflags parse <section 1> ---- <section 2 (flag 1)> -- <flag 2> -- ... ---- <args to parse>

  Example:
    pflags parse --usage "Testing foo" \
      ---- --short "a" --long "abc" --type string --required --allowed foo --allowed bar \
        -- --short "f" --long "fgh" --type number --default 123 \
      ---- "$@"

  Section 1 flags:
    Options of the parse command itself.
      {FLAGS}

  Section 2 flags:
    Flag definitions separated by -- (two hyphens).
      {FLAGS}
"#;

pub const USAGE_FLAG: &str = "Usage help of the script being parsed.\n  \
    Use \\{\\{\\FLAGS\\}\\} where the flag table should go.";

pub const GET: &str = r#"pflags get:
  Prints the value(s) of one flag from a parse result, one per line.
  pflags get <flags> "$parsed"

  Example:
    pflags get --name abc "$parsed"

  Collect multiple values into an array with:
    readarray -t x <<< "$(pflags get --name abc "$parsed")"

  Flags:
    {FLAGS}
"#;

pub const UNPARSED: &str = r#"pflags unparsed:
  Prints the non-flag args of a parse result, one per line.
  pflags unparsed "$parsed"

  Collect them into an array with:
    readarray -t x <<< "$(pflags unparsed "$parsed")"

  Flags:
    {FLAGS}
"#;
