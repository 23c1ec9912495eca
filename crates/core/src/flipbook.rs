//! Persisted flipbook link with a configured fallback.

use crate::error::PassError;
use crate::store::{FLIPBOOK_LINK_KEY, PersistentStore, StorageBackend};
use crate::types::FlipbookLink;

/// Owns the current flipbook link.
#[derive(Debug)]
pub struct FlipbookLinkController<B> {
    default_link: FlipbookLink,
    current: FlipbookLink,
    store: PersistentStore<B>,
}

impl<B: StorageBackend> FlipbookLinkController<B> {
    /// Load the stored link from `backend`, falling back to `default_link`.
    ///
    /// A stored empty string counts as "no link" and loads as the default.
    pub fn load(default_link: FlipbookLink, backend: B) -> Self {
        let store = PersistentStore::new(backend);
        let stored: Option<String> = store.load(FLIPBOOK_LINK_KEY, None);
        let current = stored
            .and_then(|raw| FlipbookLink::parse(&raw).ok())
            .unwrap_or_else(|| default_link.clone());

        Self {
            default_link,
            current,
            store,
        }
    }

    /// Replace the current link.
    ///
    /// # Errors
    ///
    /// Returns [`PassError::EmptyLink`] if `url` is empty after trimming; the
    /// current link is left unchanged.
    pub fn set_link(&mut self, url: &str) -> Result<(), PassError> {
        let link = FlipbookLink::parse(url).inspect_err(|_| {
            tracing::warn!("Rejected empty flipbook link");
        })?;
        self.current = link;
        self.persist();
        tracing::info!(link = %self.current, "Flipbook link saved");
        Ok(())
    }

    /// Reset the link to the configured default.
    pub fn clear_link(&mut self) {
        self.current = self.default_link.clone();
        self.persist();
        tracing::info!("Flipbook link cleared");
    }

    /// The current link, or the default if none has been set.
    #[must_use]
    pub fn link(&self) -> &str {
        self.current.as_str()
    }

    /// Whether the current link is the configured default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.current == self.default_link
    }

    fn persist(&self) {
        self.store.save(FLIPBOOK_LINK_KEY, &self.current);
    }
}
