use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{ContentError, ContentResult};
use crate::item::{Hexagram, PowerAnimal, TarotCard};
use crate::kind::ContentKind;
use crate::spread::SpreadDefinition;

/// Spread definitions keyed by spread id.
pub type Spreads = BTreeMap<String, SpreadDefinition>;

/// Spread ids whose definitions failed to parse, with the reason.
pub type RejectedSpreads = BTreeMap<String, String>;

/// One parsed content collection.
///
/// Item collections keep the order of the source document: index `i`
/// always names the same item for a given content version.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Tarot deck.
    Tarot(Vec<TarotCard>),
    /// I Ching hexagrams.
    IChing(Vec<Hexagram>),
    /// Medicine-wheel animals.
    Rueda(Vec<PowerAnimal>),
    /// Spread catalogue.
    ///
    /// Entries are parsed one by one, so a malformed definition only
    /// takes itself out of service.
    Spreads {
        /// Definitions that parsed.
        spreads: Spreads,
        /// Definitions that did not.
        rejected: RejectedSpreads,
    },
}

impl Content {
    /// Parse a raw JSON document as the given kind of content.
    pub fn parse(kind: ContentKind, value: Value) -> ContentResult<Self> {
        let shape = |source| ContentError::Shape { kind, source };
        Ok(match kind {
            ContentKind::Tarot => Self::Tarot(serde_json::from_value(value).map_err(shape)?),
            ContentKind::IChing => Self::IChing(serde_json::from_value(value).map_err(shape)?),
            ContentKind::Rueda => Self::Rueda(serde_json::from_value(value).map_err(shape)?),
            ContentKind::Spreads => {
                let entries: BTreeMap<String, Value> =
                    serde_json::from_value(value).map_err(shape)?;
                parse_spreads(entries)
            }
        })
    }

    /// The kind of this collection.
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Tarot(_) => ContentKind::Tarot,
            Self::IChing(_) => ContentKind::IChing,
            Self::Rueda(_) => ContentKind::Rueda,
            Self::Spreads { .. } => ContentKind::Spreads,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Tarot(items) => items.len(),
            Self::IChing(items) => items.len(),
            Self::Rueda(items) => items.len(),
            Self::Spreads { spreads, .. } => spreads.len(),
        }
    }

    /// Whether the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The tarot deck, if this is one.
    pub fn tarot(&self) -> Option<&[TarotCard]> {
        match self {
            Self::Tarot(items) => Some(items),
            _ => None,
        }
    }

    /// The hexagrams, if this is the I Ching.
    pub fn iching(&self) -> Option<&[Hexagram]> {
        match self {
            Self::IChing(items) => Some(items),
            _ => None,
        }
    }

    /// The power animals, if this is the medicine wheel.
    pub fn rueda(&self) -> Option<&[PowerAnimal]> {
        match self {
            Self::Rueda(items) => Some(items),
            _ => None,
        }
    }

    /// The usable spread definitions, if this is the catalogue.
    pub fn spreads(&self) -> Option<&Spreads> {
        match self {
            Self::Spreads { spreads, .. } => Some(spreads),
            _ => None,
        }
    }

    /// Spread entries that failed to parse, if this is the catalogue.
    pub fn rejected_spreads(&self) -> Option<&RejectedSpreads> {
        match self {
            Self::Spreads { rejected, .. } => Some(rejected),
            _ => None,
        }
    }

    /// Display names of the entries, in collection order.
    pub fn names(&self) -> Vec<String> {
        match self {
            Self::Tarot(items) => items.iter().map(|c| c.name.clone()).collect(),
            Self::IChing(items) => items
                .iter()
                .map(|h| format!("{} {}", h.number, h.name))
                .collect(),
            Self::Rueda(items) => items.iter().map(|a| a.name.clone()).collect(),
            Self::Spreads { spreads, .. } => spreads.keys().cloned().collect(),
        }
    }
}

fn parse_spreads(entries: BTreeMap<String, Value>) -> Content {
    let mut spreads = Spreads::new();
    let mut rejected = RejectedSpreads::new();
    for (id, entry) in entries {
        match serde_json::from_value::<SpreadDefinition>(entry) {
            Ok(spread) => {
                spreads.insert(id, spread);
            }
            Err(e) => {
                tracing::warn!(spread = %id, error = %e, "skipping malformed spread");
                rejected.insert(id, e.to_string());
            }
        }
    }
    Content::Spreads { spreads, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_keeps_document_order() {
        let content = Content::parse(
            ContentKind::Rueda,
            json!([
                { "animal": "Oso" },
                { "animal": "Águila" },
                { "animal": "Lobo" }
            ]),
        )
        .unwrap();
        assert_eq!(content.kind(), ContentKind::Rueda);
        assert_eq!(content.names(), vec!["Oso", "Águila", "Lobo"]);
        assert!(content.tarot().is_none());
        assert_eq!(content.rueda().unwrap()[2].name, "Lobo");
    }

    #[test]
    fn parse_spreads_as_map() {
        let content = Content::parse(
            ContentKind::Spreads,
            json!({
                "tarot_1": { "oraculo": "tarot", "cartas": 1 },
                "iching_1": { "oraculo": "iching", "cartas": 1 }
            }),
        )
        .unwrap();
        let spreads = content.spreads().unwrap();
        assert_eq!(spreads.len(), 2);
        assert_eq!(spreads["tarot_1"].count, 1);
        assert!(content.rejected_spreads().unwrap().is_empty());
    }

    #[test]
    fn malformed_spread_is_set_aside() {
        let content = Content::parse(
            ContentKind::Spreads,
            json!({
                "tarot_1": { "oraculo": "tarot", "cartas": 1 },
                "broken": { "oraculo": "tarot", "cartas": -1 },
                "no_oracle": { "cartas": 3 }
            }),
        )
        .unwrap();
        assert_eq!(content.names(), vec!["tarot_1"]);
        assert_eq!(content.len(), 1);
        let rejected = content.rejected_spreads().unwrap();
        assert_eq!(rejected.keys().collect::<Vec<_>>(), ["broken", "no_oracle"]);
        assert!(rejected["broken"].contains("-1"));
    }

    #[test]
    fn spread_catalogue_must_be_an_object() {
        let err = Content::parse(ContentKind::Spreads, json!([1, 2])).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Shape {
                kind: ContentKind::Spreads,
                ..
            }
        ));
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        let err = Content::parse(ContentKind::Tarot, json!({ "name": "not a list" })).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Shape {
                kind: ContentKind::Tarot,
                ..
            }
        ));
    }

    #[test]
    fn empty_collection_reports_empty() {
        let content = Content::parse(ContentKind::IChing, json!([])).unwrap();
        assert!(content.is_empty());
        assert_eq!(content.iching().map(<[_]>::len), Some(0));
    }
}
