//! Common test utilities

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Records of the built-in sample dataset, as JSON
pub const SAMPLE_JSON: &str = r#"[
  {"name": "Page A", "uv": 4000, "pv": 2400, "amt": 2400},
  {"name": "Page B", "uv": 3000, "pv": 1398, "amt": 2210},
  {"name": "Page C", "uv": 2000, "pv": 9800, "amt": 2290},
  {"name": "Page D", "uv": 2780, "pv": 3908, "amt": 2000},
  {"name": "Page E", "uv": 1890, "pv": 4800, "amt": 2181},
  {"name": "Page F", "uv": 2390, "pv": 3800, "amt": 2500},
  {"name": "Page G", "uv": 3490, "pv": 4300, "amt": 2100}
]"#;

/// Build a JSON records array with one series per (id, values) pair.
/// Categories are named `P0`, `P1`, ...
pub fn records_json(series: &[(&str, &[f64])]) -> String {
    let len = series.first().map(|(_, v)| v.len()).unwrap_or(0);
    let records: Vec<serde_json::Value> = (0..len)
        .map(|i| {
            let mut record = serde_json::Map::new();
            record.insert("name".to_string(), format!("P{}", i).into());
            for (id, values) in series {
                record.insert(id.to_string(), values[i].into());
            }
            serde_json::Value::Object(record)
        })
        .collect();
    serde_json::to_string_pretty(&records).unwrap()
}

/// Write `contents` to `<dir>/<name>` and return the path
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
