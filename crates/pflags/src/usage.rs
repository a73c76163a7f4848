//! Usage-help rendering.
//!
//! A usage template is free text with a `{FLAGS}` placeholder. Rendering
//! replaces the first placeholder with an aligned table of the declared flags,
//! indented to the placeholder's column. Escapes:
//! - `\{\FLAGS\}` renders as a literal `{FLAGS}`
//! - `\{\{\FLAGS\}\}` renders as `\{\FLAGS\}` (so a second render prints `{FLAGS}`)
//! - the two characters `\n` render as a newline

use crate::flag::FlagSpec;

pub const FLAGS_PLACEHOLDER: &str = "{FLAGS}";
const ESCAPED_PLACEHOLDER: &str = "\\{\\FLAGS\\}";
const DOUBLE_ESCAPED_PLACEHOLDER: &str = "\\{\\{\\FLAGS\\}\\}";
const SHIELDED_PLACEHOLDER: &str = "\\{\\--FLAGS--\\}";

/// Render `template` with the flag table for `specs`.
///
/// Templates without a placeholder are returned untouched.
pub fn render(template: &str, specs: &[FlagSpec]) -> String {
    if !template.contains(FLAGS_PLACEHOLDER) {
        return template.to_string();
    }

    let table = indent(&flag_table(specs), placeholder_column(template));
    template
        .replacen(FLAGS_PLACEHOLDER, &table, 1)
        .replace(DOUBLE_ESCAPED_PLACEHOLDER, SHIELDED_PLACEHOLDER)
        .replace(ESCAPED_PLACEHOLDER, FLAGS_PLACEHOLDER)
        .replace(SHIELDED_PLACEHOLDER, ESCAPED_PLACEHOLDER)
        .replace("\\n", "\n")
}

fn flag_table(specs: &[FlagSpec]) -> String {
    let short_width = column_width(specs, |f| f.short_name().len() + 1);
    let long_width = column_width(specs, |f| f.long_name().len() + 2);
    let type_width = column_width(specs, |f| f.flag_type().as_str().len());

    let mut out = String::new();
    for spec in specs {
        let short = dashed("-", spec.short_name());
        let long = dashed("--", spec.long_name());
        let sep = if !short.is_empty() && !long.is_empty() {
            ","
        } else {
            " "
        };
        let presence = if spec.required() {
            "required"
        } else {
            "optional"
        };
        let row = format!(
            "{short:>short_width$}{sep}  {long:>long_width$}  {ty:>type_width$}  {presence}    ",
            ty = spec.flag_type().as_str(),
        );
        let description = indent(spec.description(), row.len());
        out.push_str(&row);
        out.push_str(&description);
        out.push('\n');
    }
    out
}

fn column_width(specs: &[FlagSpec], width: impl Fn(&FlagSpec) -> usize) -> usize {
    specs.iter().map(width).max().unwrap_or(0)
}

fn dashed(prefix: &str, name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!("{prefix}{name}")
    }
}

/// Byte column of the placeholder; the last line holding one wins.
fn placeholder_column(template: &str) -> usize {
    let mut column = 0;
    for line in template.split('\n') {
        for piece in line.split("\\n") {
            if let Some(idx) = piece.find(FLAGS_PLACEHOLDER) {
                column = idx;
                break;
            }
        }
    }
    column
}

/// Indent every non-blank line by `size` spaces, then trim the outer spaces.
///
/// The first line lands wherever the caller splices the text in, so only the
/// continuation lines keep their indentation.
fn indent(content: &str, size: usize) -> String {
    if size == 0 {
        return content.to_string();
    }
    let pad = " ".repeat(size);
    content
        .split('\n')
        .filter(|l| !l.trim_matches(' ').is_empty())
        .map(|l| format!("{pad}{l}"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches(' ')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::{FlagOptions, FlagType};

    fn specs() -> Vec<FlagSpec> {
        vec![
            FlagSpec::new(
                "s",
                "short",
                FlagType::String,
                FlagOptions {
                    required: true,
                    description: "Short name.".to_string(),
                    ..FlagOptions::default()
                },
            )
            .unwrap(),
            FlagSpec::new("t", "", FlagType::Number, FlagOptions::default()).unwrap(),
        ]
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        assert_eq!(render("plain\\ntext", &specs()), "plain\\ntext");
    }

    #[test]
    fn table_is_aligned_at_placeholder_column() {
        let out = render("Usage:\n  {FLAGS}", &specs());
        assert_eq!(
            out,
            "Usage:\n  -s,  --short  string  required    Short name.\n  -t            number  optional"
        );
    }

    #[test]
    fn multiline_description_continues_under_itself() {
        let spec = FlagSpec::new(
            "v",
            "",
            FlagType::Boolean,
            FlagOptions {
                description: "first\nsecond".to_string(),
                ..FlagOptions::default()
            },
        )
        .unwrap();
        let out = render("{FLAGS}", &[spec]);
        let row = "-v       boolean  optional    ";
        assert_eq!(out, format!("{row}first\n{}second\n", " ".repeat(row.len())));
    }

    #[test]
    fn escapes_survive_one_render_level_each() {
        let out = render("A {FLAGS}\\nB \\{\\FLAGS\\} C \\{\\{\\FLAGS\\}\\}", &[]);
        assert_eq!(out, "A \nB {FLAGS} C \\{\\FLAGS\\}");

        // A second render turns the remaining escape into a literal placeholder
        // only if a real placeholder is present.
        let again = render(&format!("{{FLAGS}} {out}"), &[]);
        assert!(again.ends_with("C {FLAGS}"));
    }

    #[test]
    fn placeholder_after_literal_newline_uses_its_own_column() {
        let out = render("Header\\n    {FLAGS}", &specs()[1..]);
        assert_eq!(out, "Header\n    -t       number  optional");
    }
}
