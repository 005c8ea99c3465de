//! Schema language definitions of the temporal scalars, for schema-first hosts.

use crate::kind::Kind;

/// A `scalar` definition with the kind's description as a block string.
pub fn scalar_definition(kind: Kind) -> String {
    format!(
        "\"\"\"\n{}\n\"\"\"\nscalar {}",
        escape_block_string(kind.description()),
        kind.name()
    )
}

/// All scalar definitions, separated by blank lines.
pub fn scalar_definitions() -> String {
    Kind::ALL
        .iter()
        .map(|kind| scalar_definition(*kind))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn escape_block_string(text: &str) -> String {
    text.replace("\"\"\"", "\\\"\"\"")
}
