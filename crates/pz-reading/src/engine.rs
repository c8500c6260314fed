//! Reading generation entry point.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use pz_content::{Content, ContentError, ContentSource, OracleType};
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{ReadingError, ReadingResult};
use crate::oracle::{iching, rueda, tarot};
use crate::reading::Reading;
use crate::seed::Seed;

/// Generates readings from the content exposed by a [`ContentSource`].
///
/// The engine holds no mutable state. Concurrent calls are safe as long as
/// the source is, and calls with equal inputs against unchanged content
/// produce equal readings (apart from the timestamp, see
/// [`ReadingEngine::generate_at`]).
#[derive(Debug, Clone)]
pub struct ReadingEngine<C> {
    content: C,
    config: EngineConfig,
}

impl<C: ContentSource> ReadingEngine<C> {
    /// Create an engine with the default configuration.
    pub fn new(content: C) -> Self {
        Self::with_config(content, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(content: C, config: EngineConfig) -> Self {
        Self { content, config }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The content source.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Generate the reading for an order, stamped with the current time.
    pub fn generate(&self, order_id: &str, email: &str, spread_id: &str) -> ReadingResult<Reading> {
        self.generate_at(order_id, email, spread_id, Utc::now())
    }

    /// Generate the reading for an order with an explicit timestamp.
    pub fn generate_at(
        &self,
        order_id: &str,
        email: &str,
        spread_id: &str,
        timestamp: DateTime<Utc>,
    ) -> ReadingResult<Reading> {
        let spread = self
            .content
            .spread(spread_id)
            .map_err(|e| match e {
                ContentError::InvalidSpread { .. } => ReadingError::Precondition(e.to_string()),
                other => ReadingError::Content(other),
            })?
            .ok_or_else(|| ReadingError::SpreadNotFound(spread_id.to_string()))?;
        let oracle = spread
            .oracle_type()
            .ok_or_else(|| ReadingError::UnknownOracle(spread.oracle.clone()))?;
        if spread.count < 1 {
            return Err(ReadingError::Precondition(format!(
                "spread \"{spread_id}\" draws no items"
            )));
        }

        let collection = self.collection(oracle)?;
        let seed = Seed::for_order(order_id, email);
        debug!(spread = spread_id, %oracle, count = spread.count, "generating reading");

        let reading = match oracle {
            OracleType::Tarot => {
                let deck = collection.tarot().unwrap_or_default();
                let drawn =
                    tarot::draw(spread_id, &spread, &seed, deck, &self.config, timestamp)?;
                Reading::Tarot(drawn)
            }
            OracleType::IChing => {
                let hexagrams = collection.iching().unwrap_or_default();
                Reading::IChing(iching::draw(spread_id, &spread, &seed, hexagrams, timestamp)?)
            }
            OracleType::Rueda => {
                let animals = collection.rueda().unwrap_or_default();
                let drawn =
                    rueda::draw(spread_id, &spread, &seed, animals, &self.config, timestamp)?;
                Reading::Rueda(drawn)
            }
        };

        debug!(spread = spread_id, indices = ?reading.indices(), "reading generated");
        Ok(reading)
    }

    fn collection(&self, oracle: OracleType) -> ReadingResult<Arc<Content>> {
        match self.content.collection(oracle.content_kind())? {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(ReadingError::ContentUnavailable(oracle)),
        }
    }
}
