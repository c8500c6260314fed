//! Reading result types.

use chrono::{DateTime, Utc};
use pz_content::{Hexagram, OracleType, PowerAnimal, SpreadDefinition, TarotCard};
use serde::{Deserialize, Serialize};

/// A generated reading, tagged by oracle in the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Reading {
    /// A tarot spread.
    #[serde(rename = "tarot")]
    Tarot(TarotReading),
    /// A single I Ching hexagram.
    #[serde(rename = "iching")]
    IChing(IChingReading),
    /// A medicine-wheel spread.
    #[serde(rename = "rueda")]
    Rueda(RuedaReading),
}

/// One card in a tarot reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// Index of the card in the deck.
    pub index: usize,
    /// The card as authored.
    pub item: TarotCard,
    /// Whether the card came out reversed.
    pub reversed: bool,
    /// Position label.
    pub position: String,
    /// Meaning for this orientation.
    pub interpretation: String,
}

/// A tarot reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarotReading {
    /// Id of the spread used.
    pub spread_id: String,
    /// The spread used.
    pub spread: SpreadDefinition,
    /// Cards in position order.
    pub cards: Vec<DrawnCard>,
    /// Closing message.
    pub message: String,
    /// When the reading was generated.
    pub timestamp: DateTime<Utc>,
}

/// An I Ching reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IChingReading {
    /// Id of the spread used.
    pub spread_id: String,
    /// The spread used.
    pub spread: SpreadDefinition,
    /// Index of the hexagram in the collection.
    pub index: usize,
    /// The hexagram drawn.
    pub hexagram: Hexagram,
    /// Closing message.
    pub message: String,
    /// When the reading was generated.
    pub timestamp: DateTime<Utc>,
}

/// One animal in a medicine-wheel reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnAnimal {
    /// Index of the animal in the collection.
    pub index: usize,
    /// The animal as authored.
    pub item: PowerAnimal,
    /// Position label.
    pub position: String,
}

/// A medicine-wheel reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuedaReading {
    /// Id of the spread used.
    pub spread_id: String,
    /// The spread used.
    pub spread: SpreadDefinition,
    /// Animals in position order.
    pub animals: Vec<DrawnAnimal>,
    /// Closing message.
    pub message: String,
    /// When the reading was generated.
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    /// The oracle consulted.
    pub fn oracle(&self) -> OracleType {
        match self {
            Self::Tarot(_) => OracleType::Tarot,
            Self::IChing(_) => OracleType::IChing,
            Self::Rueda(_) => OracleType::Rueda,
        }
    }

    /// Id of the spread used.
    pub fn spread_id(&self) -> &str {
        match self {
            Self::Tarot(r) => &r.spread_id,
            Self::IChing(r) => &r.spread_id,
            Self::Rueda(r) => &r.spread_id,
        }
    }

    /// The spread used.
    pub fn spread(&self) -> &SpreadDefinition {
        match self {
            Self::Tarot(r) => &r.spread,
            Self::IChing(r) => &r.spread,
            Self::Rueda(r) => &r.spread,
        }
    }

    /// Closing message.
    pub fn message(&self) -> &str {
        match self {
            Self::Tarot(r) => &r.message,
            Self::IChing(r) => &r.message,
            Self::Rueda(r) => &r.message,
        }
    }

    /// When the reading was generated.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Tarot(r) => r.timestamp,
            Self::IChing(r) => r.timestamp,
            Self::Rueda(r) => r.timestamp,
        }
    }

    /// Collection indices of everything drawn, in position order.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Self::Tarot(r) => r.cards.iter().map(|c| c.index).collect(),
            Self::IChing(r) => vec![r.index],
            Self::Rueda(r) => r.animals.iter().map(|a| a.index).collect(),
        }
    }

    /// Orientation flags for tarot readings; empty for other oracles.
    pub fn orientations(&self) -> Vec<bool> {
        match self {
            Self::Tarot(r) => r.cards.iter().map(|c| c.reversed).collect(),
            _ => Vec::new(),
        }
    }
}
