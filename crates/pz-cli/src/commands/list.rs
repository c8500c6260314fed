use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use pz_content::Content;

pub fn run(dir: &Path, kind: &str) -> Result<(), String> {
    let kind = super::parse_kind(kind)?;
    let cache = super::open(dir)?;

    let content = match cache.get(kind).map_err(|e| e.to_string())? {
        Some(content) if !content.is_empty() => content,
        _ => {
            println!("  No {kind} entries found.");
            return Ok(());
        }
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    match content.as_ref() {
        Content::Tarot(cards) => {
            table.set_header(vec!["#", "Name", "Upright"]);
            for (i, card) in cards.iter().enumerate() {
                table.add_row(vec![
                    i.to_string(),
                    card.name.clone(),
                    super::truncate(&card.upright, 60),
                ]);
            }
        }
        Content::IChing(hexagrams) => {
            table.set_header(vec!["#", "Hex", "Name", "Keywords"]);
            for (i, h) in hexagrams.iter().enumerate() {
                table.add_row(vec![
                    i.to_string(),
                    h.number.to_string(),
                    h.name.clone(),
                    super::truncate(&h.keywords.join(", "), 50),
                ]);
            }
        }
        Content::Rueda(animals) => {
            table.set_header(vec!["#", "Animal", "Archetype", "Direction"]);
            for (i, a) in animals.iter().enumerate() {
                table.add_row(vec![
                    i.to_string(),
                    a.name.clone(),
                    super::truncate(&a.archetype, 40),
                    super::truncate(&a.direction, 20),
                ]);
            }
        }
        Content::Spreads { spreads, .. } => {
            table.set_header(vec!["#", "Id", "Oracle", "Count"]);
            for (i, (id, s)) in spreads.iter().enumerate() {
                table.add_row(vec![
                    i.to_string(),
                    id.clone(),
                    s.oracle.clone(),
                    s.count.to_string(),
                ]);
            }
        }
    }

    println!("{table}");
    println!();
    println!("  {} {kind} entries", content.len());

    Ok(())
}
