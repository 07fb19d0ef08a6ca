//! Light/dark theme flag persisted under a single storage key

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::constants::storage::THEME_KEY;
use crate::error::StorageError;
use crate::store::{KeyValueStore, TypedStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Label of the switch, which names the theme it switches to
    pub fn switch_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Theme",
            Theme::Dark => "Light Theme",
        }
    }
}

pub struct ThemePreference {
    store: Arc<dyn KeyValueStore>,
    dark: AtomicBool,
}

impl ThemePreference {
    /// Starts light until reconciled
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            dark: AtomicBool::new(false),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::SeqCst)
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.is_dark())
    }

    /// Load the stored flag. Only the literal `"true"` means dark; anything
    /// else, an absent key, or an unreadable store means light.
    pub async fn reconcile(&self) {
        let dark = match self.store.get_bool(THEME_KEY).await {
            Ok(flag) => flag.unwrap_or(false),
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference, using light theme");
                false
            }
        };
        self.dark.store(dark, Ordering::SeqCst);
        info!(theme = Theme::from_dark(dark).label(), "Reconciled theme preference");
    }

    /// Persist the negated flag, then adopt it. On a failed write the flag
    /// keeps its previous value.
    pub async fn toggle(&self) -> Result<Theme, StorageError> {
        let next = !self.is_dark();
        self.store.set_bool(THEME_KEY, next).await?;
        self.dark.store(next, Ordering::SeqCst);
        info!(theme = Theme::from_dark(next).label(), "Theme toggled");
        Ok(Theme::from_dark(next))
    }
}
