//! Text renderings of a [`Reading`]: Markdown, a standalone HTML document,
//! and Telegram MarkdownV2.
//!
//! HTML output escapes every value taken from content or the caller.
//! Telegram output escapes dynamic text with [`escape_markdown_v2`] and
//! leaves its own bold markers intact.

use chrono::{DateTime, Datelike, Utc};

use crate::reading::{IChingReading, Reading, RuedaReading, TarotReading};

const SITE_TITLE: &str = "🔮 Pleyazul Oráculos";
const DISCLAIMER: &str = "Este servicio es de carácter espiritual y recreativo. \
No sustituye el asesoramiento médico, legal o profesional.";
const TRADITIONS: &str =
    "Honramos las tradiciones Dakota, Lakota y Nakota en el uso respetuoso de la Rueda Medicinal.";
const REVERSED_MARK: &str = "(Invertida)";

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Characters Telegram MarkdownV2 requires to be escaped in plain text.
pub const MARKDOWN_V2_SPECIAL: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.',
    '!',
];

/// Long-form Spanish date, e.g. "21 de marzo de 2024".
pub fn spanish_date(timestamp: DateTime<Utc>) -> String {
    let month = MONTHS[timestamp.month0() as usize];
    format!("{} de {month} de {}", timestamp.day(), timestamp.year())
}

/// Heading of each oracle's section.
fn section_title(reading: &Reading) -> &'static str {
    match reading {
        Reading::Tarot(_) => "Lectura de Tarot",
        Reading::IChing(_) => "Consulta del I Ching",
        Reading::Rueda(_) => "Medicina de la Rueda Sagrada",
    }
}

fn spread_caption(reading: &Reading) -> String {
    let spread = reading.spread();
    match (&spread.name, &spread.positions) {
        (Some(name), _) => name.clone(),
        (None, Some(positions)) if !positions.is_empty() => positions.join(" - "),
        _ => "Lectura Personal".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Markdown
// ---------------------------------------------------------------------------

/// Render a reading as Markdown.
pub fn to_markdown(reading: &Reading) -> String {
    let mut out = format!("# {}\n\n", section_title(reading));
    out.push_str(&format!("*{}*\n\n", spanish_date(reading.timestamp())));
    out.push_str(&format!("**Tirada**: {}\n\n", spread_caption(reading)));

    match reading {
        Reading::Tarot(r) => {
            for card in &r.cards {
                out.push_str(&format!("## {}\n\n", card.position));
                let mark = if card.reversed {
                    format!(" {REVERSED_MARK}")
                } else {
                    String::new()
                };
                out.push_str(&format!("**{}**{mark}\n\n", card.item.name));
                out.push_str(&format!("**Significado**: {}\n", card.interpretation));
                if !card.item.advice.is_empty() {
                    out.push_str(&format!("**Consejo**: {}\n", card.item.advice));
                }
                out.push('\n');
            }
        }
        Reading::IChing(r) => {
            let h = &r.hexagram;
            out.push_str(&format!("## Hexagrama {}: {}\n\n", h.number, h.name));
            if !h.keywords.is_empty() {
                out.push_str(&format!("**Palabras Clave**: {}\n", h.keywords.join(", ")));
            }
            out.push_str(&format!("**Juicio**: {}\n", h.judgment));
            out.push_str(&format!("**Imagen**: {}\n", h.image_text));
            out.push_str(&format!("**Consejo**: {}\n\n", h.advice));
        }
        Reading::Rueda(r) => {
            for animal in &r.animals {
                let a = &animal.item;
                out.push_str(&format!("## {}\n\n", animal.position));
                out.push_str(&format!("**{}** - {}\n\n", a.name, a.archetype));
                out.push_str(&format!("**Luz**: {}\n", a.light));
                out.push_str(&format!("**Sombra**: {}\n", a.shadow));
                out.push_str(&format!("**Medicina**: {}\n", a.medicine));
                out.push_str(&format!("**Afirmación**: {}\n\n", a.affirmation));
            }
        }
    }

    out.push_str(&format!("> {}\n", reading.message()));
    out
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn html_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "      <p><strong>{label}:</strong> {}</p>\n",
        escape_html(value)
    ));
}

fn html_tarot(out: &mut String, reading: &TarotReading) {
    for card in &reading.cards {
        out.push_str("    <div class=\"card-interpretation\">\n");
        out.push_str(&format!("      <h3>{}</h3>\n", escape_html(&card.position)));
        let mark = if card.reversed {
            format!(" {REVERSED_MARK}")
        } else {
            String::new()
        };
        out.push_str(&format!("      <h4>{}{mark}</h4>\n", escape_html(&card.item.name)));
        html_field(out, "Significado", &card.interpretation);
        if !card.item.advice.is_empty() {
            html_field(out, "Consejo", &card.item.advice);
        }
        out.push_str("    </div>\n");
    }
}

fn html_iching(out: &mut String, reading: &IChingReading) {
    let h = &reading.hexagram;
    out.push_str(&format!(
        "    <h3>Hexagrama {}: {}</h3>\n",
        h.number,
        escape_html(&h.name)
    ));
    out.push_str("    <div class=\"hexagram-section\">\n");
    html_field(out, "Palabras Clave", &h.keywords.join(", "));
    html_field(out, "Juicio", &h.judgment);
    html_field(out, "Imagen", &h.image_text);
    html_field(out, "Consejo", &h.advice);
    out.push_str("    </div>\n");
}

fn html_rueda(out: &mut String, reading: &RuedaReading) {
    for animal in &reading.animals {
        let a = &animal.item;
        out.push_str("    <div class=\"animal-interpretation\">\n");
        out.push_str(&format!("      <h3>{}</h3>\n", escape_html(&animal.position)));
        out.push_str(&format!(
            "      <h4>{} - {}</h4>\n",
            escape_html(&a.name),
            escape_html(&a.archetype)
        ));
        html_field(out, "Luz", &a.light);
        html_field(out, "Sombra", &a.shadow);
        html_field(out, "Medicina", &a.medicine);
        html_field(out, "Afirmación", &a.affirmation);
        out.push_str("    </div>\n");
    }
}

const HTML_STYLE: &str = "\
    body {
      font-family: Georgia, serif; line-height: 1.6; color: #333;
      max-width: 800px; margin: 0 auto; padding: 20px;
    }
    .header {
      text-align: center; border-bottom: 2px solid #8B4513;
      padding-bottom: 20px; margin-bottom: 30px;
    }
    .header h1 { color: #8B4513; font-size: 2.5em; margin: 0; }
    .date { color: #666; font-style: italic; }
    .card-interpretation, .animal-interpretation {
      margin: 20px 0; padding: 15px; border-left: 4px solid #8B4513; background: #f9f9f9;
    }
    .card-interpretation h3, .animal-interpretation h3 { color: #8B4513; margin-top: 0; }
    .spiritual-note {
      margin-top: 30px; padding: 15px; background: #e8f5e8; border-radius: 5px;
      font-style: italic; text-align: center;
    }
    .disclaimer {
      margin-top: 40px; padding: 20px; background: #f0f0f0; border-radius: 5px;
      font-size: 0.9em; text-align: center;
    }
";

/// Render a reading as a standalone HTML document.
///
/// `recipient` is shown in the header when given.
pub fn to_html(reading: &Reading, recipient: Option<&str>) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!(
        "  <title>Lectura Pleyazul - {}</title>\n",
        escape_html(reading.spread_id())
    ));
    out.push_str(&format!("  <style>\n{HTML_STYLE}  </style>\n</head>\n<body>\n"));

    out.push_str("  <div class=\"header\">\n");
    out.push_str(&format!("    <h1>{SITE_TITLE}</h1>\n"));
    out.push_str(&format!(
        "    <p class=\"date\">Lectura realizada el {}</p>\n",
        spanish_date(reading.timestamp())
    ));
    if let Some(recipient) = recipient {
        out.push_str(&format!("    <p>Para: {}</p>\n", escape_html(recipient)));
    }
    out.push_str("  </div>\n");

    out.push_str("  <div class=\"reading-content\">\n");
    out.push_str(&format!("    <h2>{}</h2>\n", section_title(reading)));
    if !matches!(reading, Reading::IChing(_)) {
        out.push_str(&format!(
            "    <p class=\"spread-name\">Tirada: {}</p>\n",
            escape_html(&spread_caption(reading))
        ));
    }
    match reading {
        Reading::Tarot(r) => html_tarot(&mut out, r),
        Reading::IChing(r) => html_iching(&mut out, r),
        Reading::Rueda(r) => html_rueda(&mut out, r),
    }
    out.push_str("  </div>\n");

    out.push_str("  <div class=\"spiritual-note\">\n");
    out.push_str(&format!(
        "    <p><strong>Mensaje Espiritual:</strong> {}</p>\n",
        escape_html(reading.message())
    ));
    out.push_str("  </div>\n");
    out.push_str("  <div class=\"disclaimer\">\n");
    out.push_str(&format!("    <p><strong>Disclaimer:</strong> {DISCLAIMER}</p>\n"));
    out.push_str(&format!("    <p>{TRADITIONS}</p>\n"));
    out.push_str("  </div>\n</body>\n</html>\n");
    out
}

// ---------------------------------------------------------------------------
// Telegram
// ---------------------------------------------------------------------------

/// Escape text for Telegram MarkdownV2.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_V2_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Render a reading as a Telegram MarkdownV2 message.
///
/// When `base_url` is given the message ends with a link to
/// `{base_url}/lectura/{order_id}`.
pub fn to_telegram(reading: &Reading, order_id: &str, base_url: Option<&str>) -> String {
    let mut out = String::from("🔮 *Tu lectura Pleyazul está lista*\n\n");
    out.push_str(&format!("*{}*\n\n", section_title(reading)));

    match reading {
        Reading::Tarot(r) => {
            for card in &r.cards {
                out.push_str(&format!("*{}*\n", escape_markdown_v2(&card.position)));
                out.push_str(&escape_markdown_v2(&card.item.name));
                if card.reversed {
                    out.push_str(" \\(Invertida\\)");
                }
                out.push('\n');
                out.push_str(&format!("{}\n\n", escape_markdown_v2(&card.interpretation)));
            }
        }
        Reading::IChing(r) => {
            let h = &r.hexagram;
            out.push_str(&format!(
                "*Hexagrama {}: {}*\n\n",
                h.number,
                escape_markdown_v2(&h.name)
            ));
            out.push_str(&format!("{}\n\n", escape_markdown_v2(&h.advice)));
        }
        Reading::Rueda(r) => {
            for animal in &r.animals {
                let a = &animal.item;
                out.push_str(&format!("*{}*\n", escape_markdown_v2(&animal.position)));
                out.push_str(&format!(
                    "{} \\- {}\n",
                    escape_markdown_v2(&a.name),
                    escape_markdown_v2(&a.archetype)
                ));
                out.push_str(&format!("{}\n\n", escape_markdown_v2(&a.medicine)));
            }
        }
    }

    out.push_str(&format!("✨ *{}*", escape_markdown_v2(reading.message())));
    if let Some(base) = base_url {
        let url = format!("{}/lectura/{order_id}", base.trim_end_matches('/'));
        out.push_str(&format!(
            "\n\nVer lectura completa: {}",
            escape_markdown_v2(&url)
        ));
    }
    out
}
