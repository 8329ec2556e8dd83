use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Layout configuration.
///
/// Defaults follow the classic d3 Sankey generator: 24px columns, 8px padding, a unit canvas and
/// sinks pushed to the last column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Width of every node (the column width), in pixels.
    pub column_width: f64,
    /// Minimum vertical gap between two nodes of the same column.
    pub padding: f64,
    /// Canvas width; the last column's right edge lands on it. A column wider than the canvas
    /// stacks every column at `x = 0`.
    pub width: f64,
    /// Canvas height every column is scaled to fit.
    pub height: f64,
    /// Move every node without outgoing links to the last column.
    pub sinks_right: bool,
    /// Move every pure source next to the leftmost of its targets.
    pub sources_right: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: 24.0,
            padding: 8.0,
            width: 1.0,
            height: 1.0,
            sinks_right: true,
            sources_right: false,
        }
    }
}

impl LayoutConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("columnWidth", self.column_width),
            ("padding", self.padding),
            ("width", self.width),
            ("height", self.height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be a finite, non-negative number (got {value})"),
                });
            }
        }
        Ok(())
    }
}
