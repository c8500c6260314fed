use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use pz_content::ContentKind;

pub fn run(dir: &Path) -> Result<(), String> {
    let cache = super::open(dir)?;
    let content = cache.get(ContentKind::Spreads).map_err(|e| e.to_string())?;
    let skipped = content
        .as_deref()
        .and_then(|c| c.rejected_spreads())
        .map_or(0, |r| r.len());
    let Some(spreads) = content.as_deref().and_then(|c| c.spreads()).filter(|s| !s.is_empty())
    else {
        println!("  No spreads defined.");
        print_skipped(skipped);
        return Ok(());
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Oracle", "Count", "Positions"]);

    for (id, spread) in spreads {
        let positions = spread
            .positions
            .as_ref()
            .map(|p| p.join(" / "))
            .unwrap_or_default();
        table.add_row(vec![
            id.clone(),
            spread.oracle.clone(),
            spread.count.to_string(),
            super::truncate(&positions, 60),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} spreads", spreads.len());
    print_skipped(skipped);

    Ok(())
}

fn print_skipped(skipped: usize) {
    if skipped > 0 {
        println!("  {skipped} malformed spreads skipped (run `pz check` for details)");
    }
}
