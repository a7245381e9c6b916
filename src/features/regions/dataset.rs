//! Source tables for the four levels.
//!
//! Each table is a JSON object mapping `code -> name`. Key order in the file
//! is the iteration order everywhere downstream, so the object is read into
//! an ordered list of pairs instead of a map.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::features::regions::codec;
use crate::features::regions::error::DatasetError;
use crate::features::regions::models::RegionLevel;

/// Ordered `(code, name)` pairs for one level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionTable(Vec<(String, String)>);

impl RegionTable {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }
}

impl<C: Into<String>, N: Into<String>> FromIterator<(C, N)> for RegionTable {
    fn from_iter<I: IntoIterator<Item = (C, N)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(c, n)| (c.into(), n.into()))
                .collect(),
        )
    }
}

struct RegionTableVisitor;

impl<'de> Visitor<'de> for RegionTableVisitor {
    type Value = RegionTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object mapping region codes to names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((code, name)) = access.next_entry::<String, String>()? {
            entries.push((code, name));
        }
        Ok(RegionTable(entries))
    }
}

impl<'de> Deserialize<'de> for RegionTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RegionTableVisitor)
    }
}

/// The four validated source tables
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    provinces: RegionTable,
    districts: RegionTable,
    subdistricts: RegionTable,
    villages: RegionTable,
}

impl Dataset {
    /// Read and validate `province.json` .. `village.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        Self::from_tables(
            read_table(dir, RegionLevel::Province)?,
            read_table(dir, RegionLevel::District)?,
            read_table(dir, RegionLevel::Subdistrict)?,
            read_table(dir, RegionLevel::Village)?,
        )
    }

    /// Validate already-parsed tables.
    pub fn from_tables(
        provinces: RegionTable,
        districts: RegionTable,
        subdistricts: RegionTable,
        villages: RegionTable,
    ) -> Result<Self, DatasetError> {
        let dataset = Self {
            provinces,
            districts,
            subdistricts,
            villages,
        };
        for level in RegionLevel::ALL {
            validate_table(level, dataset.table(level))?;
        }
        Ok(dataset)
    }

    pub fn table(&self, level: RegionLevel) -> &RegionTable {
        match level {
            RegionLevel::Province => &self.provinces,
            RegionLevel::District => &self.districts,
            RegionLevel::Subdistrict => &self.subdistricts,
            RegionLevel::Village => &self.villages,
        }
    }

    /// Hand each table over to its store
    pub fn into_tables(self) -> [(RegionLevel, RegionTable); 4] {
        [
            (RegionLevel::Province, self.provinces),
            (RegionLevel::District, self.districts),
            (RegionLevel::Subdistrict, self.subdistricts),
            (RegionLevel::Village, self.villages),
        ]
    }
}

/// `RegionLevel::Province` -> `province.json`
pub fn table_file_name(level: RegionLevel) -> String {
    format!("{}.json", level.as_str())
}

fn read_table(dir: &Path, level: RegionLevel) -> Result<RegionTable, DatasetError> {
    let path = dir.join(table_file_name(level));
    let json = fs::read_to_string(&path).map_err(|source| DatasetError::Io {
        path: path.clone(),
        source,
    })?;
    parse_table(level, &json)
}

fn parse_table(level: RegionLevel, json: &str) -> Result<RegionTable, DatasetError> {
    serde_json::from_str(json).map_err(|source| DatasetError::Parse { level, source })
}

fn validate_table(level: RegionLevel, table: &RegionTable) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(table.len());
    for (code, _) in table.iter() {
        if !codec::is_valid_code(code) {
            return Err(DatasetError::InvalidCode {
                level,
                code: code.to_string(),
            });
        }

        let depth = codec::depth(code).unwrap_or_default();
        if depth != level.depth() {
            return Err(DatasetError::LevelMismatch {
                level,
                code: code.to_string(),
                depth,
                expected: level.depth(),
            });
        }

        if !seen.insert(code) {
            return Err(DatasetError::DuplicateCode {
                level,
                code: code.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_preserves_source_order() {
        let table: RegionTable =
            serde_json::from_str(r#"{"12": "Sumatera Utara", "11": "Aceh", "31": "DKI Jakarta"}"#)
                .unwrap();
        let codes: Vec<&str> = table.iter().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!["12", "11", "31"]);
    }

    #[test]
    fn test_table_rejects_non_object() {
        let err = parse_table(RegionLevel::Province, r#"["11", "Aceh"]"#).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[test]
    fn test_sample_dataset_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample");
        let dataset = Dataset::load(&dir).unwrap();
        for level in RegionLevel::ALL {
            assert!(!dataset.table(level).is_empty(), "{level} table is empty");
        }
        let first = dataset.table(RegionLevel::Province).iter().next();
        assert_eq!(first, Some(("11", "Aceh")));
    }

    #[test]
    fn test_rejects_wrong_depth() {
        let err = Dataset::from_tables(
            RegionTable::from_iter([("11", "Aceh")]),
            RegionTable::from_iter([("11", "Aceh")]),
            RegionTable::default(),
            RegionTable::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::LevelMismatch {
                level: RegionLevel::District,
                depth: 1,
                expected: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate_code() {
        let err = Dataset::from_tables(
            RegionTable::from_iter([("11", "Aceh"), ("11", "Aceh Lagi")]),
            RegionTable::default(),
            RegionTable::default(),
            RegionTable::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateCode { .. }));
    }

    #[test]
    fn test_rejects_malformed_code() {
        let err = Dataset::from_tables(
            RegionTable::from_iter([("1a", "Nowhere")]),
            RegionTable::default(),
            RegionTable::default(),
            RegionTable::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::InvalidCode { .. }));
    }

    #[test]
    fn test_loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("province.json"), r#"{"11": "Aceh"}"#).unwrap();
        fs::write(dir.path().join("district.json"), r#"{"11.01": "Aceh Selatan"}"#).unwrap();
        fs::write(dir.path().join("subdistrict.json"), "{}").unwrap();
        fs::write(dir.path().join("village.json"), "{}").unwrap();

        let dataset = Dataset::load(dir.path()).unwrap();
        assert_eq!(dataset.table(RegionLevel::District).len(), 1);
        assert!(dataset.table(RegionLevel::Village).is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(dir.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
