use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ScoringModelError;

/// Identifies which of the two compared mappings a piece of data belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// The automatically generated mapping under evaluation.
    Proposed,
    /// The human-authored reference mapping.
    Solution,
}

impl FileType {
    /// Both file types, in declaration order.
    pub const ALL: [FileType; 2] = [FileType::Proposed, FileType::Solution];

    /// The stable lowercase name of this file type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Proposed => "proposed",
            FileType::Solution => "solution",
        }
    }
}

impl Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileType {
    type Err = ScoringModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proposed" => Ok(FileType::Proposed),
            "solution" => Ok(FileType::Solution),
            other => Err(ScoringModelError::UnknownFileType(other.to_string())),
        }
    }
}
