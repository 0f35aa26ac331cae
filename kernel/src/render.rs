//! Textual presentation of an edit script.

use std::fmt::Write;

use serde::Deserialize;

use crate::diff::Operation;

/// Output styles supported by [`render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Classic `diff` normal format (`2,3c2`, `< old`, `---`, `> new`).
    #[default]
    Normal,
    /// The operations as a JSON array.
    Json,
}

/// Renders `ops` in the requested format.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render(
    format: OutputFormat,
    ops: &[Operation],
    tokens_a: &[String],
    tokens_b: &[String],
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Normal => Ok(normal(ops, tokens_a, tokens_b)),
        OutputFormat::Json => json(ops),
    }
}

/// Serializes the operations as pretty-printed JSON.
///
/// # Errors
///
/// Propagates serialization errors from `serde_json`.
pub fn json(ops: &[Operation]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(ops)
}

/// Formats the operations in `diff` normal format with 1-based line numbers.
#[must_use]
pub fn normal(ops: &[Operation], tokens_a: &[String], tokens_b: &[String]) -> String {
    let mut output = String::new();

    for op in ops {
        let header = if op.is_deletion() {
            format!("{}d{}", range(op.start_a, op.delete_a), op.start_b)
        } else if op.is_insertion() {
            format!("{}a{}", op.start_a, range(op.start_b, op.insert_b))
        } else {
            format!(
                "{}c{}",
                range(op.start_a, op.delete_a),
                range(op.start_b, op.insert_b)
            )
        };
        let _ = writeln!(output, "{header}");

        for line in tokens_a.iter().skip(op.start_a).take(op.delete_a) {
            let _ = writeln!(output, "< {line}");
        }
        if op.delete_a > 0 && op.insert_b > 0 {
            output.push_str("---\n");
        }
        for line in tokens_b.iter().skip(op.start_b).take(op.insert_b) {
            let _ = writeln!(output, "> {line}");
        }
    }

    output
}

/// Replaces control characters in `token` with their escaped form (`\n`,
/// `\t`, `\u{1b}`), leaving everything else untouched.
///
/// Single-character tokens may be line breaks themselves; escaping keeps
/// each `<` / `>` record of [`normal`] on one output line.
#[must_use]
pub fn escape_control(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len());
    for c in token.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

fn range(start: usize, count: usize) -> String {
    if count == 1 {
        format!("{}", start + 1)
    } else {
        format!("{},{}", start + 1, start + count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &[&str]) -> Vec<String> {
        s.iter().map(|l| (*l).to_owned()).collect()
    }

    #[test]
    fn test_normal_change_delete_add() {
        let a = lines(&["keep", "old1", "old2", "keep", "gone"]);
        let b = lines(&["keep", "new", "keep", "extra"]);
        let ops = [
            Operation {
                start_a: 1,
                start_b: 1,
                delete_a: 2,
                insert_b: 1,
            },
            Operation {
                start_a: 4,
                start_b: 3,
                delete_a: 1,
                insert_b: 1,
            },
        ];
        assert_eq!(
            normal(&ops, &a, &b),
            "2,3c2\n< old1\n< old2\n---\n> new\n5c4\n< gone\n---\n> extra\n"
        );
    }

    #[test]
    fn test_normal_pure_add_and_delete() {
        let a = lines(&["x", "y"]);
        let b = lines(&["x", "y", "z"]);
        let add = [Operation {
            start_a: 2,
            start_b: 2,
            delete_a: 0,
            insert_b: 1,
        }];
        assert_eq!(normal(&add, &a, &b), "2a3\n> z\n");

        let del = [Operation {
            start_a: 0,
            start_b: 0,
            delete_a: 1,
            insert_b: 0,
        }];
        assert_eq!(normal(&del, &a, &b[1..]), "1d0\n< x\n");
    }

    #[test]
    fn test_escape_control_characters() {
        assert_eq!(escape_control("\n"), "\\n");
        assert_eq!(escape_control("a\tb"), "a\\tb");
        assert_eq!(escape_control("\u{1b}"), "\\u{1b}");
        assert_eq!(escape_control("plain é"), "plain é");
    }

    #[test]
    fn test_normal_escaped_newline_stays_on_one_line() {
        let a = lines(&["a", "\n", "b"]);
        let b = lines(&["a", "b"]);
        let escaped: Vec<String> = a.iter().map(|t| escape_control(t)).collect();
        let del = [Operation {
            start_a: 1,
            start_b: 1,
            delete_a: 1,
            insert_b: 0,
        }];
        assert_eq!(normal(&del, &escaped, &b), "2d1\n< \\n\n");
    }

    #[test]
    fn test_json_output() {
        let ops = [Operation {
            start_a: 0,
            start_b: 0,
            delete_a: 0,
            insert_b: 3,
        }];
        let text = render(OutputFormat::Json, &ops, &[], &[]).unwrap();
        let parsed: Vec<Operation> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, ops);
    }
}
