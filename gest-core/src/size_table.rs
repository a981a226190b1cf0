use crate::error::ConfigError;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded baby-size comparison table (`week,label`).
pub static CSV_OBJECT: &str = include_str!("../../fixtures/baby_sizes.csv");

/// A size comparison that applies from `week_threshold` onwards.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct BabySizeEntry {
    #[serde(rename = "week")]
    pub week_threshold: u32,
    pub label: String,
}

impl BabySizeEntry {
    pub fn new(week_threshold: u32, label: impl Into<String>) -> Self {
        Self {
            week_threshold,
            label: label.into(),
        }
    }
}

/// Baby-size entries ordered by strictly increasing week threshold.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize)]
pub struct BabySizeTable(Vec<BabySizeEntry>);

impl BabySizeTable {
    /// Build a table, rejecting thresholds that are not strictly increasing.
    pub fn new(entries: Vec<BabySizeEntry>) -> Result<Self, ConfigError> {
        for pair in entries.windows(2) {
            let (previous, current) = (pair[0].week_threshold, pair[1].week_threshold);
            if current <= previous {
                return Err(ConfigError::UnorderedSizeTable { previous, current });
            }
        }
        Ok(Self(entries))
    }

    /// Parse a CSV string of baby sizes.
    ///
    /// Expected CSV columns: week, label (with a header row)
    pub fn from_csv(csv_object: &str) -> Result<Self, ConfigError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        let entries = rdr
            .deserialize::<BabySizeEntry>()
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// The table bundled with the dashboard.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_csv(CSV_OBJECT)
    }

    pub fn entries(&self) -> &[BabySizeEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table() {
        let table = BabySizeTable::embedded().unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.entries()[0], BabySizeEntry::new(14, "Lemon"));
        assert_eq!(table.entries()[4], BabySizeEntry::new(36, "Melon"));
    }

    #[test]
    fn test_from_csv_trims_fields() {
        let csv = "week,label\n 10 , Lime \n20,Banana\n";
        let table = BabySizeTable::from_csv(csv).unwrap();
        assert_eq!(
            table.entries(),
            &[BabySizeEntry::new(10, "Lime"), BabySizeEntry::new(20, "Banana")]
        );
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        let err = BabySizeTable::new(vec![
            BabySizeEntry::new(18, "Bell Pepper"),
            BabySizeEntry::new(14, "Lemon"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnorderedSizeTable {
                previous: 18,
                current: 14
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_thresholds() {
        let csv = "week,label\n14,Lemon\n14,Lime\n";
        assert!(matches!(
            BabySizeTable::from_csv(csv),
            Err(ConfigError::UnorderedSizeTable { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_csv() {
        let csv = "week,label\nfourteen,Lemon\n";
        assert!(matches!(
            BabySizeTable::from_csv(csv),
            Err(ConfigError::SizeTableParse(_))
        ));
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = BabySizeTable::from_csv("week,label\n").unwrap();
        assert!(table.is_empty());
    }
}
