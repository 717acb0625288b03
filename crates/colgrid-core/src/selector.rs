//! Field selection: which field names become columns.
//!
//! A caller-supplied allow-list wins outright. Without one, the selector
//! scans the record collection and keeps every key the schema index knows,
//! in order of first occurrence.

use std::collections::HashSet;

use crate::record::RecordRow;
use crate::schema::SchemaIndex;

/// How the selected field names were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// The caller supplied an allow-list.
    Explicit,
    /// Field names were derived by scanning the records.
    Inferred,
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionMode::Explicit => write!(f, "explicit"),
            SelectionMode::Inferred => write!(f, "inferred"),
        }
    }
}

/// Ordered field names plus the mode that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    /// Field names, in column order.
    pub fields: Vec<String>,

    /// How the names were selected.
    pub mode: SelectionMode,
}

impl FieldSelection {
    /// Returns `true` if no field was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of selected fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Selects the field names to expose as columns.
///
/// With a non-empty `explicit` list the result is exactly that list, in the
/// caller's order and unfiltered: the caller is trusted to name describable
/// fields, and column building reports any that are not. Otherwise every
/// row is scanned and each key present in `index` is kept once, at the
/// position of its first occurrence. Keys the index does not know are
/// dropped silently.
#[must_use]
pub fn select_fields(
    records: &[RecordRow],
    index: &SchemaIndex,
    explicit: Option<&[String]>,
) -> FieldSelection {
    if let Some(explicit) = explicit.filter(|list| !list.is_empty()) {
        return FieldSelection {
            fields: explicit.to_vec(),
            mode: SelectionMode::Explicit,
        };
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut fields: Vec<String> = Vec::new();
    for row in records {
        for name in row.field_names() {
            if index.contains(name) && seen.insert(name) {
                fields.push(name.to_string());
            }
        }
    }

    FieldSelection {
        fields,
        mode: SelectionMode::Inferred,
    }
}

/// Parses a delimited field list (e.g. `"Name, Phone,,Name"`).
///
/// Entries are trimmed, empty entries dropped and duplicates kept only at
/// their first position.
#[must_use]
pub fn parse_field_list(value: &str, delimiter: char) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    value
        .split(delimiter)
        .map(str::trim)
        .filter(|name| !name.is_empty() && seen.insert(*name))
        .map(str::to_string)
        .collect()
}
