#![deny(missing_docs)]

//! Independently scored aspects of mapping quality.
//!
//! A [`Dimension`] compares the proposed mapping of a set of entities against
//! the solution mapping for the same entities and reports a [`Reporting`]:
//! how many proposed selections were correct, how many were extraneous, and
//! the most that could have been correct.
//!
//! Dimensions borrow the [`Translations`] they measure and never modify
//! them, so independent dimensions may be evaluated side by side.
//!
//! Evaluation is a single step from unevaluated to evaluated:
//!
//! ```
//! use scoring_dimensions::{Dimension, RawFieldSelection};
//! use scoring_model::{FileType, MatchedTranslations, Translation, Translations};
//!
//! let mut matched = MatchedTranslations::default();
//! matched.push(FileType::Solution, Translation::new("sf1", "r1"));
//! matched.push(FileType::Proposed, Translation::new("sf1", "r1"));
//! matched.push(FileType::Proposed, Translation::new("sf2", "r2"));
//! let translations = Translations::from_iter([("dev1", matched)]);
//!
//! let mut dimension = RawFieldSelection::new(&translations);
//! assert_eq!(dimension.reporting(), None);
//!
//! let reporting = dimension.evaluate().reporting().cloned().unwrap();
//! assert_eq!(reporting.correct_reporting, 1);
//! assert_eq!(reporting.correct_ceiling_reporting, 1);
//! assert_eq!(reporting.incorrect_reporting, 1);
//! ```
//!
//! A harness that picks dimensions by name goes through [`DimensionKind`]:
//!
//! ```
//! use scoring_dimensions::DimensionKind;
//! use scoring_model::Translations;
//!
//! let translations = Translations::new();
//! let kind: DimensionKind = "raw_field_selection".parse().unwrap();
//! let mut dimension = kind.build(&translations);
//!
//! assert_eq!(dimension.evaluate().correct_ceiling_reporting(), Some(0));
//! ```

pub use scoring_model::Translations;

mod error;
pub use error::*;

mod dimension;
pub use dimension::*;

mod raw_field_selection;
pub use raw_field_selection::*;

mod kind;
pub use kind::*;
