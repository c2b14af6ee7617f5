use std::{fmt::Display, str::FromStr};

use scoring_model::Translations;
use serde::{Deserialize, Serialize};

use crate::{Dimension, DimensionError, RawFieldSelection};

/// The dimensions a harness can select by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKind {
    /// See [`RawFieldSelection`].
    RawFieldSelection,
}

impl DimensionKind {
    /// Every selectable dimension.
    pub const ALL: [DimensionKind; 1] = [DimensionKind::RawFieldSelection];

    /// The stable identifier of the selected dimension.
    pub fn name(&self) -> &'static str {
        match self {
            DimensionKind::RawFieldSelection => RawFieldSelection::NAME,
        }
    }

    /// Constructs the selected dimension, unevaluated, over `translations`.
    pub fn build<'a>(&self, translations: &'a Translations) -> Box<dyn Dimension + 'a> {
        match self {
            DimensionKind::RawFieldSelection => Box::new(RawFieldSelection::new(translations)),
        }
    }
}

impl Display for DimensionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DimensionKind {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DimensionKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DimensionError::UnknownDimension {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use scoring_model::{FileType, MatchedTranslations, Translation};

    use super::*;

    #[test]
    fn it_parses_every_kind_by_name() {
        for kind in DimensionKind::ALL {
            assert_eq!(kind.name().parse::<DimensionKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn it_rejects_unknown_names() {
        assert_eq!(
            "standard_field_naming".parse::<DimensionKind>(),
            Err(DimensionError::UnknownDimension {
                name: "standard_field_naming".into()
            })
        );
    }

    #[test]
    fn it_agrees_with_serde_on_names() {
        for kind in DimensionKind::ALL {
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::Value::String(kind.name().into())
            );
        }
    }

    #[test_log::test]
    fn it_builds_an_unevaluated_dimension() {
        let mut matched = MatchedTranslations::default();
        matched.push(FileType::Solution, Translation::new("sf1", "r1"));
        matched.push(FileType::Proposed, Translation::new("sf2", "r2"));
        let translations = Translations::from_iter([("dev1", matched)]);

        let mut dimension = DimensionKind::RawFieldSelection.build(&translations);
        assert_eq!(dimension.name(), "raw_field_selection");
        assert_eq!(dimension.reporting(), None);

        let dimension = dimension.evaluate();
        assert_eq!(dimension.correct_reporting(), Some(0));
        assert_eq!(dimension.correct_ceiling_reporting(), Some(1));
        assert_eq!(dimension.incorrect_reporting(), Some(1));
    }
}
