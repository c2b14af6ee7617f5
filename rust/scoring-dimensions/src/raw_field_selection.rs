use std::collections::HashSet;

use scoring_model::{FieldTranslation, FileType, Translations};
use tracing::{debug, warn};

use crate::{Dimension, Reporting};

/// Measures whether the correct raw fields (e.g.
/// `points.chilled_water_flowrate_sensor.present_value`) were mapped, rather
/// than ignored, in the proposed mapping.
///
/// Which standard field a raw field was mapped onto does not matter here.
/// Entities are not scored one by one: the raw fields of every entity are
/// pooled per [`FileType`] and compared as sets, so neither order nor
/// repetition affects the outcome.
///
/// The ceiling counts distinct `(standard_field_name, translation)` pairs of
/// the solution, while the other two counts are over raw field names. When a
/// solution maps one raw field under several standard fields, the ceiling
/// exceeds what [`Reporting::correct_reporting`] can reach.
#[derive(Clone, Debug)]
pub struct RawFieldSelection<'a> {
    translations: &'a Translations,
    reporting: Option<Reporting>,
}

impl<'a> RawFieldSelection<'a> {
    /// The stable identifier of this dimension.
    pub const NAME: &'static str = "raw_field_selection";

    /// Creates an unevaluated dimension over `translations`.
    pub fn new(translations: &'a Translations) -> Self {
        Self {
            translations,
            reporting: None,
        }
    }

    fn measure(&self) -> Reporting {
        let solution_fields = raw_field_names(self.translations.pairs(FileType::Solution));
        let proposed_fields = raw_field_names(self.translations.pairs(FileType::Proposed));

        let correct_fields = proposed_fields.intersection(&solution_fields).count();
        let incorrect_fields = proposed_fields.difference(&solution_fields).count();

        let solution_pairs = self
            .translations
            .pairs(FileType::Solution)
            .collect::<HashSet<_>>()
            .len();

        if solution_pairs > solution_fields.len() {
            warn!(
                dimension = Self::NAME,
                solution_pairs,
                solution_fields = solution_fields.len(),
                "Solution maps some raw fields more than once; ceiling is unreachable"
            );
        }

        Reporting {
            correct_reporting: correct_fields,
            correct_ceiling_reporting: solution_pairs,
            incorrect_reporting: incorrect_fields,
        }
    }
}

fn raw_field_names<'t, I>(pairs: I) -> HashSet<&'t str>
where
    I: Iterator<Item = &'t FieldTranslation>,
{
    pairs
        .map(|(_, translation)| translation.raw_field_name())
        .collect()
}

impl Dimension for RawFieldSelection<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn translations(&self) -> &Translations {
        self.translations
    }

    fn evaluate(&mut self) -> &dyn Dimension {
        let reporting = self.measure();

        debug!(
            dimension = Self::NAME,
            entities = self.translations.len(),
            correct = reporting.correct_reporting,
            ceiling = reporting.correct_ceiling_reporting,
            incorrect = reporting.incorrect_reporting,
            "Evaluated dimension"
        );

        self.reporting = Some(reporting);
        self
    }

    fn reporting(&self) -> Option<&Reporting> {
        self.reporting.as_ref()
    }
}
