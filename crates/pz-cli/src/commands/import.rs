use std::fs;
use std::path::Path;

use serde_json::Value;

pub fn run(dir: &Path, kind: &str, file: &Path) -> Result<(), String> {
    let kind = super::parse_kind(kind)?;
    let cache = super::open(dir)?;

    let text = fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| format!("{} is not valid JSON: {e}", file.display()))?;

    let count = cache.save(kind, value).map_err(|e| e.to_string())?;

    println!("  Imported {count} {kind} entries from {}", file.display());
    Ok(())
}
