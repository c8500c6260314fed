use std::path::Path;

use pz_reading::{Reading, ReadingEngine, render};

/// Options of `pz read`.
pub struct ReadArgs<'a> {
    pub spread: &'a str,
    pub email: &'a str,
    pub order: Option<&'a str>,
    pub format: &'a str,
    pub base_url: Option<&'a str>,
    pub output: Option<&'a Path>,
}

pub fn run(dir: &Path, args: &ReadArgs<'_>) -> Result<(), String> {
    // Reject bad formats before drawing anything.
    if !matches!(args.format, "json" | "markdown" | "md" | "html" | "telegram") {
        return Err(format!(
            "unsupported format: \"{}\". Use: json, markdown, html, telegram",
            args.format
        ));
    }

    let cache = super::open(dir)?;
    let engine = ReadingEngine::new(&cache);

    let order_id = args
        .order
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    tracing::info!(order = %order_id, spread = args.spread, "reading requested");

    let reading = engine
        .generate(&order_id, args.email, args.spread)
        .map_err(|e| e.to_string())?;

    let content = render_reading(&reading, &order_id, args)?;

    if let Some(path) = args.output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Reading for order {order_id} written to {}", path.display());
    } else {
        print!("{content}");
        if !content.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}

fn render_reading(
    reading: &Reading,
    order_id: &str,
    args: &ReadArgs<'_>,
) -> Result<String, String> {
    match args.format {
        "json" => {
            let value = serde_json::json!({
                "order_id": order_id,
                "reading": reading,
            });
            serde_json::to_string_pretty(&value)
                .map_err(|e| format!("JSON serialization error: {e}"))
        }
        "markdown" | "md" => Ok(render::to_markdown(reading)),
        "html" => Ok(render::to_html(reading, Some(args.email))),
        "telegram" => Ok(render::to_telegram(reading, order_id, args.base_url)),
        other => Err(format!(
            "unsupported format: \"{other}\". Use: json, markdown, html, telegram"
        )),
    }
}
