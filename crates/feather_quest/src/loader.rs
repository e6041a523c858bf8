//! Loading bird data documents into an immutable, id-keyed catalog.
//!
//! A [`BirdLoader`] owns the current [`BirdCatalog`] behind an [`Arc`]. Each
//! successful load parses the whole document first and only then swaps in the
//! new catalog, so readers holding the previous `Arc` keep a consistent view and
//! a failed load leaves the existing catalog untouched.
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::birds::BirdDefinition;
use crate::error::{Error, Result};

/// Every object key the bird data document may use, in canonical spelling.
const KNOWN_KEYS: &[&str] = &[
    "birds",
    "id",
    "commonName",
    "scientificName",
    "tier",
    "fieldMarks",
    "variants",
    "calls",
    "plumageType",
    "gender",
    "spritePath",
    "difficultyRating",
    "type",
    "callType",
    "audioPath",
    "spectrogramPath",
    "path",
];

/// Rewrites object keys to their canonical spelling, ignoring ASCII case.
fn canonicalize_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, mut child) in std::mem::take(map) {
                canonicalize_keys(&mut child);
                let key = match KNOWN_KEYS.iter().find(|k| k.eq_ignore_ascii_case(&key)) {
                    Some(known) => (*known).to_owned(),
                    None => {
                        warn!("Ignoring unrecognized key '{}' in bird data.", key);
                        key
                    }
                };
                map.insert(key, child);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(canonicalize_keys),
        _ => {}
    }
}

#[derive(Deserialize)]
struct BirdDocument {
    #[serde(default, alias = "Birds")]
    birds: Option<Vec<BirdDefinition>>,
}

/// Read-only view of loaded birds, ordered by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BirdCatalog {
    birds: BTreeMap<String, BirdDefinition>,
}

impl BirdCatalog {
    /// Builds a catalog from records; later duplicates replace earlier ones.
    pub fn from_birds(birds: impl IntoIterator<Item = BirdDefinition>) -> Self {
        let mut map = BTreeMap::new();
        for bird in birds {
            if let Some(previous) = map.insert(bird.id.clone(), bird) {
                warn!(
                    "Duplicate bird id '{}'; keeping the later definition.",
                    previous.id
                );
            }
        }
        Self { birds: map }
    }

    pub fn get(&self, id: &str) -> Option<&BirdDefinition> {
        self.birds.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.birds.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.birds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.birds.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.birds.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BirdDefinition> {
        self.birds.values()
    }
}

/// Parses bird data documents and serves lookups against the last good load.
#[derive(Debug, Clone, Default)]
pub struct BirdLoader {
    catalog: Arc<BirdCatalog>,
}

impl BirdLoader {
    /// Creates a loader with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `json` and replaces the catalog with its contents.
    ///
    /// Object keys match regardless of ASCII case (`commonName`, `CommonName`,
    /// `COMMONNAME`); unrecognized keys are logged and skipped.
    ///
    /// Fails with [`Error::InvalidArgument`] for blank input, [`Error::Parse`]
    /// for malformed JSON and [`Error::MissingData`] when the top-level `birds`
    /// collection is absent. On failure the previous catalog is kept.
    pub fn load_from_json(&mut self, json: &str) -> Result<Arc<BirdCatalog>> {
        if json.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "bird data document is empty".into(),
            ));
        }

        let mut value: Value = serde_json::from_str(json)?;
        canonicalize_keys(&mut value);
        let document: BirdDocument = serde_json::from_value(value)?;
        let birds = document.birds.ok_or_else(|| {
            Error::MissingData("bird data document has no 'birds' collection".into())
        })?;

        let catalog = Arc::new(BirdCatalog::from_birds(birds));
        info!("Loaded {} bird definitions.", catalog.len());
        self.catalog = Arc::clone(&catalog);
        Ok(catalog)
    }

    /// Reads a UTF-8 document from disk and loads it with [`Self::load_from_json`].
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<Arc<BirdCatalog>> {
        let json = std::fs::read_to_string(path.as_ref())?;
        self.load_from_json(&json)
    }

    /// Looks up a bird by id.
    pub fn get(&self, id: &str) -> Result<&BirdDefinition> {
        self.catalog
            .get(id)
            .ok_or_else(|| Error::NotFound { id: id.to_owned() })
    }

    /// Current catalog snapshot.
    pub fn catalog(&self) -> Arc<BirdCatalog> {
        Arc::clone(&self.catalog)
    }
}
