use anyhow::Result;

use crate::ExportMapping;

/// Columns a block sequence sits right of its parent key.
const SEQUENCE_INDENT: usize = 4;

/// Serialize `mapping` as YAML with block sequences indented under their key.
pub(crate) fn to_yaml(mapping: &ExportMapping) -> Result<String> {
    Ok(indent_sequences(&serde_yml::to_string(mapping)?))
}

/// `serde_yml` writes sequence items flush with the key that owns them.
/// Shift every line right by [`SEQUENCE_INDENT`] per enclosing sequence.
fn indent_sequences(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len() * 2);
    // original columns of the dashes of open sequences
    let mut open: Vec<usize> = Vec::new();
    // lines of a block scalar are right of this column
    let mut scalar: Option<usize> = None;

    for line in yaml.lines() {
        let trimmed = line.trim_start_matches(' ');
        let col = line.len() - trimmed.len();

        let in_scalar = match scalar {
            Some(parent) => trimmed.is_empty() || col > parent,
            None => false,
        };
        if in_scalar || trimmed.is_empty() {
            push_line(&mut out, open.len(), line);
            continue;
        }
        scalar = None;

        let is_item = trimmed == "-" || trimmed.starts_with("- ");
        while let Some(&dash) = open.last() {
            if col < dash || (col == dash && !is_item) {
                open.pop();
            } else {
                break;
            }
        }
        if is_item && open.last() != Some(&col) {
            open.push(col);
        }
        push_line(&mut out, open.len(), line);

        if opens_block_scalar(trimmed) {
            let rest = trimmed.trim_start_matches("- ");
            scalar = Some(if rest.contains(": ") {
                col + (trimmed.len() - rest.len())
            } else {
                col
            });
        }
    }

    out
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    if !line.is_empty() {
        out.extend(std::iter::repeat(' ').take(depth * SEQUENCE_INDENT));
        out.push_str(line);
    }
    out.push('\n');
}

/// `|`, `>-`, `|2+` and friends at the end of a line
fn opens_block_scalar(trimmed: &str) -> bool {
    let last = trimmed.rsplit(' ').next().unwrap_or(trimmed);
    let mut chars = last.chars();
    matches!(chars.next(), Some('|' | '>'))
        && chars.all(|c| c == '-' || c == '+' || c.is_ascii_digit())
}
