//! Ordered parser registry.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use super::{builtin, Parser};
use crate::error::RegistryError;

/// Parsers in priority order, terminated by a catch-all.
///
/// The registry is built once, never changes afterwards, and is shared between
/// sort engines as an `Arc<ParserRegistry>`:
///
/// ```ignore
/// let registry = Arc::new(ParserRegistry::builtin()?);
/// let sorter = SortEngine::new(Arc::clone(&registry));
/// ```
#[derive(Debug)]
pub struct ParserRegistry {
    /// Specific parsers, tried in order.
    specific: Vec<Arc<Parser>>,
    /// Terminal parser matching everything.
    catch_all: Arc<Parser>,
}

impl ParserRegistry {
    /// Create a registry from specific parsers (highest priority first) and a
    /// terminal catch-all.
    pub fn new(specific: Vec<Parser>, catch_all: Parser) -> Result<Self, RegistryError> {
        if !catch_all.is_catch_all() {
            return Err(RegistryError::NotCatchAll(catch_all.id().to_string()));
        }

        {
            let mut seen = HashSet::new();
            for parser in specific.iter().chain(std::iter::once(&catch_all)) {
                if !seen.insert(parser.id()) {
                    return Err(RegistryError::DuplicateId(parser.id().to_string()));
                }
            }
        }

        if let Some(shadowing) = specific.iter().find(|p| p.is_catch_all()) {
            return Err(RegistryError::ShadowingCatchAll(shadowing.id().to_string()));
        }

        debug!(
            "ParserRegistry: {} parsers, catch-all '{}'",
            specific.len() + 1,
            catch_all.id()
        );

        Ok(Self {
            specific: specific.into_iter().map(Arc::new).collect(),
            catch_all: Arc::new(catch_all),
        })
    }

    /// Create the registry of built-in parsers: `digit`, `currency`,
    /// `usLongDate`, `shortDate`, `time`, `blackFontCurrency`, then `text`.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(builtin::specific()?, builtin::text())
    }

    /// The first parser whose format matches `raw`.
    ///
    /// Never fails: the catch-all matches everything.
    pub fn resolve(&self, raw: &str) -> &Arc<Parser> {
        self.specific
            .iter()
            .find(|p| p.classify(raw))
            .unwrap_or(&self.catch_all)
    }

    /// Look up a parser by id.
    pub fn get(&self, id: &str) -> Option<&Arc<Parser>> {
        self.iter().find(|p| p.id() == id)
    }

    /// The terminal parser.
    pub fn catch_all(&self) -> &Arc<Parser> {
        &self.catch_all
    }

    /// All parsers in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Parser>> {
        self.specific.iter().chain(std::iter::once(&self.catch_all))
    }

    /// Number of parsers including the catch-all.
    pub fn len(&self) -> usize {
        self.specific.len() + 1
    }

    /// Always false; a registry holds at least its catch-all.
    pub fn is_empty(&self) -> bool {
        false
    }
}
