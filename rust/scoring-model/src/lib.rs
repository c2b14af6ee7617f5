#![deny(missing_docs)]

//! Translation records compared by mapping-quality dimensions.
//!
//! A mapping describes, for every entity (typically a building device), which
//! raw fields of the source data were mapped onto which standard fields. Two
//! such mappings are compared when scoring: the human-authored *solution* and
//! the automatically *proposed* one. This crate models both sides:
//!
//! - [`FileType`] tags which of the two mappings a piece of data belongs to.
//! - [`Translation`] is one raw-to-standard field mapping record.
//! - [`MatchedTranslations`] holds, for a single entity, the translations of
//!   both mappings side by side.
//! - [`Translations`] maps entity keys to their [`MatchedTranslations`].
//!
//! Absence of data for one side is always an empty list, never a missing
//! entry: [`MatchedTranslations`] has a slot for each [`FileType`].
//!
//! ```
//! use scoring_model::{FileType, MatchedTranslations, Translation, Translations};
//!
//! let mut matched = MatchedTranslations::default();
//! matched.push(FileType::Solution, Translation::new("zone_air_temperature_sensor", "points.temp_1.present_value"));
//! matched.push(FileType::Proposed, Translation::new("zone_air_temperature_sensor", "points.temp_1.present_value"));
//!
//! let translations = Translations::from_iter([("device-1", matched)]);
//!
//! assert_eq!(translations.len(), 1);
//! assert_eq!(translations.pairs(FileType::Solution).count(), 1);
//! ```

mod error;
pub use error::*;

mod file_type;
pub use file_type::*;

mod translation;
pub use translation::*;

mod translations;
pub use translations::*;
