use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A named content collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Tarot deck, an ordered list of cards.
    Tarot,
    /// I Ching, an ordered list of hexagrams.
    #[serde(rename = "iching")]
    IChing,
    /// Medicine wheel, an ordered list of power animals.
    Rueda,
    /// Spread definitions keyed by spread id.
    Spreads,
}

impl ContentKind {
    /// All content kinds, in storage order.
    pub fn all() -> &'static [Self] {
        &[Self::Tarot, Self::IChing, Self::Rueda, Self::Spreads]
    }

    /// File stem used by stores (`tarot`, `iching`, `rueda`, `spreads`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tarot => "tarot",
            Self::IChing => "iching",
            Self::Rueda => "rueda",
            Self::Spreads => "spreads",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tarot" => Ok(Self::Tarot),
            "iching" | "i-ching" | "i_ching" => Ok(Self::IChing),
            "rueda" => Ok(Self::Rueda),
            "spreads" | "tiradas" => Ok(Self::Spreads),
            _ => Err(ContentError::UnknownKind(s.to_string())),
        }
    }
}

/// The oracle a spread consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleType {
    /// Tarot cards, drawn with orientation.
    Tarot,
    /// A single I Ching hexagram.
    #[serde(rename = "iching")]
    IChing,
    /// Medicine-wheel power animals.
    Rueda,
}

impl OracleType {
    /// Parse the raw `oraculo` value of a spread. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tarot" => Some(Self::Tarot),
            "iching" => Some(Self::IChing),
            "rueda" => Some(Self::Rueda),
            _ => None,
        }
    }

    /// The collection this oracle draws from.
    pub fn content_kind(self) -> ContentKind {
        match self {
            Self::Tarot => ContentKind::Tarot,
            Self::IChing => ContentKind::IChing,
            Self::Rueda => ContentKind::Rueda,
        }
    }

    /// Human-readable oracle name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tarot => "Tarot",
            Self::IChing => "I Ching",
            Self::Rueda => "Rueda Medicinal",
        }
    }
}

impl fmt::Display for OracleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content_kind().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_accepts_aliases() {
        assert_eq!("tarot".parse::<ContentKind>().unwrap(), ContentKind::Tarot);
        assert_eq!("I-Ching".parse::<ContentKind>().unwrap(), ContentKind::IChing);
        assert_eq!("tiradas".parse::<ContentKind>().unwrap(), ContentKind::Spreads);
        assert!("runes".parse::<ContentKind>().is_err());
    }

    #[test]
    fn kind_display_matches_file_stem() {
        for kind in ContentKind::all() {
            assert_eq!(kind.to_string(), kind.as_str());
            assert_eq!(kind.as_str().parse::<ContentKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn oracle_parse_is_exact() {
        assert_eq!(OracleType::parse("tarot"), Some(OracleType::Tarot));
        assert_eq!(OracleType::parse("iching"), Some(OracleType::IChing));
        assert_eq!(OracleType::parse("rueda"), Some(OracleType::Rueda));
        assert_eq!(OracleType::parse("Tarot"), None);
        assert_eq!(OracleType::parse("runas"), None);
    }

    #[test]
    fn oracle_maps_to_its_collection() {
        assert_eq!(OracleType::Tarot.content_kind(), ContentKind::Tarot);
        assert_eq!(OracleType::IChing.content_kind(), ContentKind::IChing);
        assert_eq!(OracleType::Rueda.content_kind(), ContentKind::Rueda);
    }

    #[test]
    fn oracle_serde_uses_wire_names() {
        let json = serde_json::to_string(&OracleType::IChing).unwrap();
        assert_eq!(json, "\"iching\"");
        let back: OracleType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OracleType::IChing);
    }
}
