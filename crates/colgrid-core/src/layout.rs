//! Column width layout hint.

use serde::{Deserialize, Serialize};

use crate::selector::SelectionMode;

/// Width layout hint passed to the renderer alongside the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Renderer sizes columns to their content.
    Auto,
    /// Columns keep their initial width.
    Fixed,
}

impl LayoutMode {
    /// Returns the renderer token (`"auto"` or `"fixed"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Auto => "auto",
            LayoutMode::Fixed => "fixed",
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Curated (explicit) field lists are sized to content; inferred field sets
/// get fixed widths so the layout stays stable as the data varies.
#[must_use]
pub fn decide_layout_mode(mode: SelectionMode) -> LayoutMode {
    match mode {
        SelectionMode::Explicit => LayoutMode::Auto,
        SelectionMode::Inferred => LayoutMode::Fixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide_layout_mode() {
        assert_eq!(decide_layout_mode(SelectionMode::Explicit), LayoutMode::Auto);
        assert_eq!(decide_layout_mode(SelectionMode::Inferred), LayoutMode::Fixed);
    }

    #[test]
    fn test_layout_mode_tokens() {
        assert_eq!(LayoutMode::Auto.to_string(), "auto");
        assert_eq!(
            serde_json::to_value(LayoutMode::Fixed).unwrap(),
            serde_json::json!("fixed")
        );
    }
}
