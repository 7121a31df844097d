use serde::{Deserialize, Serialize};

/// Which side of "now" a show falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Past,
    #[serde(alias = "upcoming")]
    Future,
}
