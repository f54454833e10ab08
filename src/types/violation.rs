use serde::{Deserialize, Serialize};

/// A single rule infraction reported by the lint engine.
///
/// Positions are zero-based and taken as supplied. The renderer performs no
/// validation, so records with empty rule names or negative positions pass
/// through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    #[serde(default)]
    pub rule_name: String,
    #[serde(default)]
    pub message: String,
    pub file_name: String,
    pub line: i64,
    pub character: i64,
}
