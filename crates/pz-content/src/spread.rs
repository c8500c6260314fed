use serde::{Deserialize, Serialize};

use crate::kind::OracleType;

/// A spread: which oracle to consult, how many items to draw, and what
/// each position means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadDefinition {
    /// Raw oracle name (`tarot`, `iching`, `rueda`). Kept as written so
    /// unknown values can be reported instead of rejected at parse time.
    #[serde(rename = "oraculo")]
    pub oracle: String,
    /// Number of items to draw.
    #[serde(rename = "cartas")]
    pub count: usize,
    /// Ordered position labels, one per drawn item.
    #[serde(rename = "posiciones", default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<String>>,
    /// Display name.
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short description shown in the catalogue.
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SpreadDefinition {
    /// Create a spread with no position labels.
    pub fn new(oracle: impl Into<String>, count: usize) -> Self {
        Self {
            oracle: oracle.into(),
            count,
            positions: None,
            name: None,
            description: None,
        }
    }

    /// Set the position labels.
    pub fn with_positions<I, S>(mut self, positions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positions = Some(positions.into_iter().map(Into::into).collect());
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The parsed oracle type, or `None` if `oracle` is not recognized.
    pub fn oracle_type(&self) -> Option<OracleType> {
        OracleType::parse(&self.oracle)
    }

    /// Label for position `index`, if one was authored.
    pub fn position_label(&self, index: usize) -> Option<&str> {
        self.positions
            .as_ref()
            .and_then(|p| p.get(index))
            .map(String::as_str)
    }
}
