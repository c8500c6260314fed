use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::{debug, warn};

use crate::content::Content;
use crate::error::{ContentError, ContentResult};
use crate::kind::ContentKind;
use crate::spread::SpreadDefinition;
use crate::store::ContentStore;

/// Read access to parsed content, as seen by the reading engine.
pub trait ContentSource {
    /// The parsed collection for `kind`, or `None` if the store has none.
    fn collection(&self, kind: ContentKind) -> ContentResult<Option<Arc<Content>>>;

    /// Look up a spread by id.
    ///
    /// An id whose definition failed to parse is an
    /// [`ContentError::InvalidSpread`] error, not a missing spread.
    fn spread(&self, id: &str) -> ContentResult<Option<SpreadDefinition>> {
        let Some(content) = self.collection(ContentKind::Spreads)? else {
            return Ok(None);
        };
        if let Some(reason) = content.rejected_spreads().and_then(|r| r.get(id)) {
            return Err(ContentError::InvalidSpread {
                id: id.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(content.spreads().and_then(|s| s.get(id).cloned()))
    }
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn collection(&self, kind: ContentKind) -> ContentResult<Option<Arc<Content>>> {
        (**self).collection(kind)
    }
}

impl<T: ContentSource + ?Sized> ContentSource for Arc<T> {
    fn collection(&self, kind: ContentKind) -> ContentResult<Option<Arc<Content>>> {
        (**self).collection(kind)
    }
}

#[derive(Debug, Default)]
struct Slots {
    entries: HashMap<ContentKind, Arc<Content>>,
    // Bumped on every invalidation so a load that raced with one is not cached.
    generations: HashMap<ContentKind, u64>,
}

impl Slots {
    fn generation(&self, kind: ContentKind) -> u64 {
        self.generations.get(&kind).copied().unwrap_or(0)
    }

    fn invalidate(&mut self, kind: ContentKind) {
        self.entries.remove(&kind);
        *self.generations.entry(kind).or_insert(0) += 1;
    }
}

/// Read-through cache of parsed collections over a [`ContentStore`].
///
/// Each collection is parsed at most once until it is invalidated. Cached
/// values are shared as `Arc<Content>`, so a reader holding one keeps a
/// consistent snapshot even if the entry is invalidated underneath it.
#[derive(Debug)]
pub struct ContentCache<S> {
    store: S,
    slots: RwLock<Slots>,
}

impl<S: ContentStore> ContentCache<S> {
    /// Wrap a store in an empty cache.
    pub fn new(store: S) -> Self {
        Self {
            store,
            slots: RwLock::new(Slots::default()),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a collection, loading and parsing it on a miss.
    pub fn get(&self, kind: ContentKind) -> ContentResult<Option<Arc<Content>>> {
        let generation = {
            let slots = self.slots.read().map_err(|_| ContentError::Poisoned)?;
            if let Some(hit) = slots.entries.get(&kind) {
                return Ok(Some(Arc::clone(hit)));
            }
            slots.generation(kind)
        };

        let Some(raw) = self.store.load(kind)? else {
            debug!(%kind, "no content in store");
            return Ok(None);
        };
        let content = match Content::parse(kind, raw) {
            Ok(content) => Arc::new(content),
            Err(e) => {
                warn!(%kind, error = %e, "stored content failed to parse");
                return Err(e);
            }
        };
        debug!(%kind, entries = content.len(), "loaded content");

        let mut slots = self.slots.write().map_err(|_| ContentError::Poisoned)?;
        if slots.generation(kind) != generation {
            debug!(%kind, "content invalidated during load; not caching");
            return Ok(Some(content));
        }
        let cached = slots.entries.entry(kind).or_insert(content);
        Ok(Some(Arc::clone(cached)))
    }

    /// Drop the cached entry for `kind`. The next read reloads from the store.
    pub fn invalidate(&self, kind: ContentKind) -> ContentResult<()> {
        let mut slots = self.slots.write().map_err(|_| ContentError::Poisoned)?;
        slots.invalidate(kind);
        debug!(%kind, "invalidated cached content");
        Ok(())
    }

    /// Drop every cached entry.
    pub fn clear(&self) -> ContentResult<()> {
        let mut slots = self.slots.write().map_err(|_| ContentError::Poisoned)?;
        for kind in ContentKind::all() {
            slots.invalidate(*kind);
        }
        Ok(())
    }

    /// Whether `kind` is currently cached.
    pub fn is_cached(&self, kind: ContentKind) -> bool {
        self.slots
            .read()
            .map(|slots| slots.entries.contains_key(&kind))
            .unwrap_or(false)
    }

    /// Replace a collection: check that it parses, persist it, then
    /// invalidate the cached copy. Returns the number of entries written.
    pub fn save(&self, kind: ContentKind, value: Value) -> ContentResult<usize> {
        let parsed = Content::parse(kind, value.clone())?;
        self.store.save(kind, &value)?;
        self.invalidate(kind)?;
        Ok(parsed.len())
    }
}

impl<S: ContentStore> ContentSource for ContentCache<S> {
    fn collection(&self, kind: ContentKind) -> ContentResult<Option<Arc<Content>>> {
        self.get(kind)
    }
}
