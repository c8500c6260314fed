pub mod check;
pub mod import;
pub mod init;
pub mod list;
pub mod read;
pub mod spreads;

use std::path::Path;

use pz_content::{ContentCache, ContentKind, FsStore};

/// Open the content directory behind a read-through cache.
fn open(dir: &Path) -> Result<ContentCache<FsStore>, String> {
    if !dir.is_dir() {
        return Err(format!(
            "content directory '{}' not found (create one with `pz init`)",
            dir.display()
        ));
    }
    Ok(ContentCache::new(FsStore::new(dir)))
}

fn parse_kind(kind: &str) -> Result<ContentKind, String> {
    kind.parse::<ContentKind>()
        .map_err(|e| format!("{e}. Use: tarot, iching, rueda, spreads"))
}

/// Shorten `text` to at most `max` characters for table cells.
fn truncate(text: &str, max: usize) -> String {
    if text.is_empty() {
        "—".to_string()
    } else if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
