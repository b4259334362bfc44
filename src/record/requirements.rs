//! Required-parts table.
//!
//! The table maps each part type to the minimum number of units a complete
//! vehicle carries. It is the single source of truth for part completeness.

use indexmap::IndexMap;
use serde::Serialize;

use super::part::PartType;

/// Minimum part counts, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequiredParts {
    counts: IndexMap<PartType, u32>,
}

impl RequiredParts {
    /// Build a table from `(type, count)` entries.
    ///
    /// Repeated types accumulate; zero counts are kept but never produce a
    /// deficit.
    pub fn new(entries: impl IntoIterator<Item = (PartType, u32)>) -> Self {
        let mut counts = IndexMap::new();
        for (part_type, count) in entries {
            *counts.entry(part_type).or_insert(0) += count;
        }
        Self { counts }
    }

    /// The table every car is checked against: one engine, one electrical
    /// system, one fuel filter, one oil filter and four tires.
    pub fn standard() -> Self {
        Self::new([
            (PartType::Engine, 1),
            (PartType::Electrical, 1),
            (PartType::FuelFilter, 1),
            (PartType::OilFilter, 1),
            (PartType::Tire, 4),
        ])
    }

    /// Required count for a type, if the table has a rule for it.
    pub fn get(&self, part_type: PartType) -> Option<u32> {
        self.counts.get(&part_type).copied()
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PartType, u32)> + '_ {
        self.counts.iter().map(|(t, c)| (*t, *c))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Working copy used by the deficit computation.
    pub(crate) fn to_counts(&self) -> IndexMap<PartType, u32> {
        self.counts.clone()
    }
}

impl Default for RequiredParts {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_counts() {
        let table = RequiredParts::standard();

        assert_eq!(table.len(), 5);
        assert_eq!(table.get(PartType::Engine), Some(1));
        assert_eq!(table.get(PartType::Electrical), Some(1));
        assert_eq!(table.get(PartType::FuelFilter), Some(1));
        assert_eq!(table.get(PartType::OilFilter), Some(1));
        assert_eq!(table.get(PartType::Tire), Some(4));
        assert_eq!(table.get(PartType::SparkPlug), None);
    }

    #[test]
    fn iteration_keeps_declaration_order() {
        let types: Vec<_> = RequiredParts::standard().iter().map(|(t, _)| t).collect();
        assert_eq!(
            types,
            vec![
                PartType::Engine,
                PartType::Electrical,
                PartType::FuelFilter,
                PartType::OilFilter,
                PartType::Tire,
            ]
        );
    }

    #[test]
    fn repeated_entries_accumulate() {
        let table = RequiredParts::new([(PartType::Tire, 2), (PartType::Tire, 3)]);
        assert_eq!(table.get(PartType::Tire), Some(5));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(RequiredParts::default(), RequiredParts::standard());
    }

    #[test]
    fn serializes_as_map() {
        let json = serde_json::to_string(&RequiredParts::new([(PartType::Tire, 4)])).unwrap();
        assert_eq!(json, r#"{"TIRE":4}"#);
    }
}
