use std::fs;
use std::path::Path;

use pz_content::ContentKind;

const TAROT: &str = include_str!("../../templates/tarot.json");
const ICHING: &str = include_str!("../../templates/iching.json");
const RUEDA: &str = include_str!("../../templates/rueda.json");
const SPREADS: &str = include_str!("../../templates/spreads.json");

fn template(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Tarot => TAROT,
        ContentKind::IChing => ICHING,
        ContentKind::Rueda => RUEDA,
        ContentKind::Spreads => SPREADS,
    }
}

pub fn run(dir: &Path) -> Result<(), String> {
    if dir.exists() {
        return Err(format!("directory '{}' already exists", dir.display()));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;

    for &kind in ContentKind::all() {
        let file = format!("{kind}.json");
        fs::write(dir.join(&file), template(kind))
            .map_err(|e| format!("cannot write {file}: {e}"))?;
    }

    println!("Created content directory {}/", dir.display());
    println!("  tarot.json    — major arcana");
    println!("  iching.json   — starter hexagrams");
    println!("  rueda.json    — power animals");
    println!("  spreads.json  — spread definitions");
    println!();
    println!("Get started:");
    println!("  pz -C {} check", dir.display());
    println!("  pz -C {} spreads", dir.display());
    println!(
        "  pz -C {} read --spread tarot_3_ppf --email you@example.com",
        dir.display()
    );

    Ok(())
}
