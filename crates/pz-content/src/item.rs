use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Upright and reversed meaning of a card within one life domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainText {
    /// Meaning when the card is upright.
    #[serde(default)]
    pub upright: String,
    /// Meaning when the card is reversed.
    #[serde(default)]
    pub reversed: String,
}

/// A tarot card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotCard {
    /// Card name, e.g. "El Loco".
    pub name: String,
    /// General upright meaning.
    pub upright: String,
    /// General reversed meaning.
    #[serde(rename = "reversed")]
    pub reversed_text: String,
    /// Meaning in matters of love.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub love: Option<DomainText>,
    /// Meaning in matters of work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<DomainText>,
    /// Meaning in matters of health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<DomainText>,
    /// Advice attached to the card.
    #[serde(default)]
    pub advice: String,
    /// Image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl TarotCard {
    /// The text to show for a card in the given orientation.
    pub fn meaning(&self, reversed: bool) -> &str {
        if reversed {
            &self.reversed_text
        } else {
            &self.upright
        }
    }
}

/// An I Ching hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    /// King Wen number, 1 through 64.
    #[serde(rename = "hex")]
    pub number: u8,
    /// Hexagram name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Keywords.
    #[serde(rename = "palabras_clave", default)]
    pub keywords: Vec<String>,
    /// The judgment text.
    #[serde(rename = "juicio", default)]
    pub judgment: String,
    /// The image text.
    #[serde(rename = "imagen", default)]
    pub image_text: String,
    /// Advice for the consultant.
    #[serde(rename = "consejo", default)]
    pub advice: String,
    /// Line texts keyed by line number (1 = bottom line).
    #[serde(rename = "lineas", default)]
    pub lines: BTreeMap<u8, String>,
}

/// A medicine-wheel power animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerAnimal {
    /// Animal name.
    #[serde(rename = "animal")]
    pub name: String,
    /// Archetype, e.g. "El Proveedor".
    #[serde(rename = "arquetipo", default)]
    pub archetype: String,
    /// Light aspect.
    #[serde(rename = "luz", default)]
    pub light: String,
    /// Shadow aspect.
    #[serde(rename = "sombra", default)]
    pub shadow: String,
    /// The medicine the animal teaches.
    #[serde(rename = "medicina", default)]
    pub medicine: String,
    /// Affirmation for the consultant.
    #[serde(rename = "afirmacion", default)]
    pub affirmation: String,
    /// Element, e.g. "Tierra".
    #[serde(rename = "elemento", default)]
    pub element: String,
    /// Wheel direction, e.g. "Norte".
    #[serde(rename = "direccion", default)]
    pub direction: String,
    /// Image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tarot_card_reads_content_file_shape() {
        let card: TarotCard = serde_json::from_value(json!({
            "name": "El Loco",
            "upright": "Nuevos comienzos",
            "reversed": "Imprudencia",
            "love": { "upright": "Nueva relación", "reversed": "Relación inestable" },
            "advice": "Confía en tu intuición",
            "image": "/img/tarot/el-loco.jpg"
        }))
        .unwrap();
        assert_eq!(card.name, "El Loco");
        assert_eq!(card.meaning(false), "Nuevos comienzos");
        assert_eq!(card.meaning(true), "Imprudencia");
        assert_eq!(card.love.as_ref().unwrap().reversed, "Relación inestable");
        assert!(card.work.is_none());
    }

    #[test]
    fn tarot_card_writes_reversed_text_under_reversed_key() {
        let card = TarotCard {
            name: "La Torre".into(),
            upright: "Ruptura".into(),
            reversed_text: "Resistencia al cambio".into(),
            love: None,
            work: None,
            health: None,
            advice: String::new(),
            image: None,
        };
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["reversed"], "Resistencia al cambio");
        assert!(value.get("love").is_none());
    }

    #[test]
    fn hexagram_lines_keyed_by_number() {
        let hex: Hexagram = serde_json::from_value(json!({
            "hex": 1,
            "nombre": "El Creador",
            "palabras_clave": ["creatividad", "fuerza"],
            "juicio": "Sublime éxito",
            "imagen": "El movimiento del cielo es vigoroso",
            "consejo": "Actúa con determinación",
            "lineas": { "1": "Dragón oculto", "6": "Dragón altivo" }
        }))
        .unwrap();
        assert_eq!(hex.number, 1);
        assert_eq!(hex.keywords.len(), 2);
        assert_eq!(hex.lines.get(&1).map(String::as_str), Some("Dragón oculto"));
        assert_eq!(hex.lines.get(&6).map(String::as_str), Some("Dragón altivo"));
    }

    #[test]
    fn power_animal_uses_spanish_keys() {
        let animal: PowerAnimal = serde_json::from_value(json!({
            "animal": "Búfalo",
            "arquetipo": "El Proveedor",
            "luz": "Abundancia",
            "sombra": "Avaricia",
            "medicina": "Equilibrio",
            "afirmacion": "Agradezco",
            "elemento": "Tierra",
            "direccion": "Norte"
        }))
        .unwrap();
        assert_eq!(animal.name, "Búfalo");
        assert_eq!(animal.direction, "Norte");
        assert!(animal.image.is_none());
    }
}
