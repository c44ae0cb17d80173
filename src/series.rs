//! Named numeric series loaded from JSON records

use std::path::Path;

use serde_json::{Map, Value};

/// Key holding the category label of a record
pub const CATEGORY_KEY: &str = "name";

/// Categories plus one or more numeric series sharing them
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTable {
    pub categories: Vec<String>,
    series: Vec<(String, Vec<f64>)>,
}

impl SeriesTable {
    /// Sample dataset: seven pages with `uv`, `pv` and `amt` counts
    pub fn sample() -> Self {
        let rows: [(&str, f64, f64, f64); 7] = [
            ("Page A", 4000.0, 2400.0, 2400.0),
            ("Page B", 3000.0, 1398.0, 2210.0),
            ("Page C", 2000.0, 9800.0, 2290.0),
            ("Page D", 2780.0, 3908.0, 2000.0),
            ("Page E", 1890.0, 4800.0, 2181.0),
            ("Page F", 2390.0, 3800.0, 2500.0),
            ("Page G", 3490.0, 4300.0, 2100.0),
        ];

        Self {
            categories: rows.iter().map(|r| r.0.to_string()).collect(),
            series: vec![
                ("amt".to_string(), rows.iter().map(|r| r.3).collect()),
                ("pv".to_string(), rows.iter().map(|r| r.2).collect()),
                ("uv".to_string(), rows.iter().map(|r| r.1).collect()),
            ],
        }
    }

    /// Read a table from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Error opening {}: {}", path.display(), e))?;
        Self::from_json_str(&text)
    }

    /// Parse a JSON array of records such as
    /// `[{"name": "Page A", "uv": 4000, "pv": 2400}, ...]`.
    ///
    /// The numeric fields of the first record define the series; every
    /// record must carry all of them. Non-numeric extra fields are ignored.
    pub fn from_json_str(text: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(text).map_err(|e| format!("Invalid JSON: {}", e))?;

        let records = value
            .as_array()
            .ok_or_else(|| "Expected a JSON array of records".to_string())?;

        let first = match records.first() {
            Some(first) => as_record(first, 0)?,
            None => return Err("No records found".to_string()),
        };

        let mut ids: Vec<String> = first
            .iter()
            .filter(|(key, value)| key.as_str() != CATEGORY_KEY && value.is_number())
            .map(|(key, _)| key.clone())
            .collect();

        if ids.is_empty() {
            return Err("Record 0 has no numeric fields".to_string());
        }
        ids.sort();

        let mut categories = Vec::with_capacity(records.len());
        let mut series: Vec<(String, Vec<f64>)> = ids
            .into_iter()
            .map(|id| (id, Vec::with_capacity(records.len())))
            .collect();

        for (idx, record) in records.iter().enumerate() {
            let record = as_record(record, idx)?;

            let name = record
                .get(CATEGORY_KEY)
                .and_then(Value::as_str)
                .ok_or_else(|| format!("Record {} has no string \"{}\"", idx, CATEGORY_KEY))?;
            categories.push(name.to_string());

            for (id, values) in series.iter_mut() {
                let value = record
                    .get(id.as_str())
                    .and_then(Value::as_f64)
                    .ok_or_else(|| format!("Record {} has no numeric field \"{}\"", idx, id))?;
                values.push(value);
            }
        }

        log::debug!(
            "loaded {} records, series: {:?}",
            categories.len(),
            series.iter().map(|(id, _)| id).collect::<Vec<_>>()
        );

        Ok(Self { categories, series })
    }

    /// Series ids, sorted
    pub fn series_ids(&self) -> Vec<&str> {
        self.series.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn series(&self, id: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|(sid, _)| sid == id)
            .map(|(_, values)| values.as_slice())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn as_record(value: &Value, idx: usize) -> Result<&Map<String, Value>, String> {
    value
        .as_object()
        .ok_or_else(|| format!("Record {} is not an object", idx))
}
