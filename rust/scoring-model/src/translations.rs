use std::ops::Index;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{FieldTranslation, FileType, Translation};

/// The translations of both mappings for a single entity.
///
/// Each [`FileType`] always has a (possibly empty) list, so a side without
/// data is represented as an empty list rather than a missing entry. When
/// deserializing, an omitted side is read as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedTranslations {
    /// Translations of the proposed mapping, in their original order.
    #[serde(default)]
    pub proposed: Vec<FieldTranslation>,
    /// Translations of the solution mapping, in their original order.
    #[serde(default)]
    pub solution: Vec<FieldTranslation>,
}

impl MatchedTranslations {
    /// Creates a record from the proposed and solution lists.
    pub fn new(proposed: Vec<FieldTranslation>, solution: Vec<FieldTranslation>) -> Self {
        Self { proposed, solution }
    }

    /// The translations recorded for `file_type`.
    pub fn get(&self, file_type: FileType) -> &[FieldTranslation] {
        match file_type {
            FileType::Proposed => &self.proposed,
            FileType::Solution => &self.solution,
        }
    }

    /// Appends `translation` to the list for `file_type`, keyed by its
    /// standard field name.
    pub fn push(&mut self, file_type: FileType, translation: Translation) {
        let pair = (translation.standard_field_name.clone(), translation);
        match file_type {
            FileType::Proposed => self.proposed.push(pair),
            FileType::Solution => self.solution.push(pair),
        }
    }
}

impl Index<FileType> for MatchedTranslations {
    type Output = [FieldTranslation];

    fn index(&self, file_type: FileType) -> &Self::Output {
        self.get(file_type)
    }
}

/// Translations of both mappings for every entity, keyed by entity.
///
/// Entities keep their insertion order. Nothing in this crate mutates a
/// [`Translations`] after it has been built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(IndexMap<String, MatchedTranslations>);

impl Translations {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the translations for `entity`, returning any previous record.
    pub fn insert<K>(&mut self, entity: K, matched: MatchedTranslations) -> Option<MatchedTranslations>
    where
        K: Into<String>,
    {
        self.0.insert(entity.into(), matched)
    }

    /// The translations recorded for `entity`.
    pub fn get(&self, entity: &str) -> Option<&MatchedTranslations> {
        self.0.get(entity)
    }

    /// The number of entities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no entity has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entities and their translations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MatchedTranslations)> {
        self.0.iter().map(|(entity, matched)| (entity.as_str(), matched))
    }

    /// The per-entity lists for `file_type`, skipping entities whose list has
    /// zero elements.
    pub fn condensed(&self, file_type: FileType) -> impl Iterator<Item = &[FieldTranslation]> {
        self.0
            .values()
            .map(move |matched| matched.get(file_type))
            .filter(|list| !list.is_empty())
    }

    /// Every `(standard_field_name, translation)` pair for `file_type`, across
    /// all entities.
    pub fn pairs(&self, file_type: FileType) -> impl Iterator<Item = &FieldTranslation> {
        self.condensed(file_type).flatten()
    }
}

impl<K> FromIterator<(K, MatchedTranslations)> for Translations
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, MatchedTranslations)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(entity, matched)| (entity.into(), matched))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pair(standard: &str, raw: &str) -> FieldTranslation {
        (standard.to_string(), Translation::new(standard, raw))
    }

    #[test]
    fn it_indexes_both_sides() {
        let matched = MatchedTranslations::new(vec![pair("sf1", "r1")], vec![]);

        assert_eq!(matched[FileType::Proposed], [pair("sf1", "r1")]);
        assert!(matched[FileType::Solution].is_empty());
    }

    #[test]
    fn it_keys_pushed_translations_by_standard_field() {
        let mut matched = MatchedTranslations::default();
        matched.push(FileType::Solution, Translation::new("sf1", "r1"));

        assert_eq!(matched.solution, vec![pair("sf1", "r1")]);
        assert!(matched.proposed.is_empty());
    }

    #[test]
    fn it_skips_empty_lists_when_condensing() {
        let translations = Translations::from_iter([
            ("dev1", MatchedTranslations::new(vec![pair("sf1", "r1")], vec![])),
            ("dev2", MatchedTranslations::new(vec![], vec![pair("sf2", "r2")])),
            ("dev3", MatchedTranslations::new(vec![pair("sf3", "r3")], vec![pair("sf3", "r3")])),
        ]);

        let proposed = translations.condensed(FileType::Proposed).collect::<Vec<_>>();
        let solution = translations.condensed(FileType::Solution).collect::<Vec<_>>();

        assert_eq!(proposed.len(), 2);
        assert_eq!(solution.len(), 2);
        assert_eq!(
            translations
                .pairs(FileType::Solution)
                .map(|(_, translation)| translation.raw_field_name())
                .collect::<Vec<_>>(),
            vec!["r2", "r3"]
        );
    }

    #[test]
    fn it_keeps_entity_insertion_order() {
        let mut translations = Translations::new();
        translations.insert("zeta", MatchedTranslations::default());
        translations.insert("alpha", MatchedTranslations::default());

        assert_eq!(
            translations.iter().map(|(entity, _)| entity).collect::<Vec<_>>(),
            vec!["zeta", "alpha"]
        );
        assert!(translations.get("alpha").is_some());
        assert!(translations.get("missing").is_none());
    }
}
