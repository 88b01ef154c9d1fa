use serde::{Deserialize, Serialize};

/// Playing position. The serde names are the wire labels used in the CSV
/// output, kept identical to the upstream dataset consumers' expectations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "вратарь")]
    Goalkeeper,
    #[serde(rename = "защитник")]
    Defender,
    #[serde(rename = "полузащитник")]
    Midfielder,
    #[serde(rename = "нападающий")]
    Forward,
}

impl Position {
    /// All positions, in the order categorical weights are declared.
    pub const ALL: [Position; 4] =
        [Position::Goalkeeper, Position::Defender, Position::Midfielder, Position::Forward];

    /// The CSV wire label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Position::Goalkeeper => "вратарь",
            Position::Defender => "защитник",
            Position::Midfielder => "полузащитник",
            Position::Forward => "нападающий",
        }
    }

    /// Stable ASCII key for logs and config.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Position::Goalkeeper => "goalkeeper",
            Position::Defender => "defender",
            Position::Midfielder => "midfielder",
            Position::Forward => "forward",
        }
    }
}

/// One synthetic roster row. Immutable once drawn; a dataset is an ordered
/// sequence of these, written once and then dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub country: String,
    pub full_name: String,
    pub club: String,
    pub position: Position,
    pub matches: u32,
    pub goals: i32,
}

impl PlayerRecord {
    /// Column names in output order.
    pub const FIELDS: [&'static str; 6] =
        ["country", "full_name", "club", "position", "matches", "goals"];
}
