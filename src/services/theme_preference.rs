//! Theme preference: persists the light/dark choice and applies it to the page.

use tracing::{debug, warn};

use crate::storage::{KeyValueStore, SafeStorage};
use crate::types::theme::ThemePreference;
use crate::ui::dom::Page;

/// Body class present while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Trait defining the theme preference interface.
pub trait ThemePreferenceTrait {
    fn load(&self) -> Option<ThemePreference>;
    fn save(&mut self, preference: ThemePreference) -> bool;
    fn toggle(&mut self, current: ThemePreference) -> ThemePreference;
}

/// Theme preference store borrowing the shared durable storage.
pub struct ThemePreferenceStore<'a, S: KeyValueStore> {
    storage: &'a mut SafeStorage<S>,
    key: &'a str,
}

impl<'a, S: KeyValueStore> ThemePreferenceStore<'a, S> {
    pub fn new(storage: &'a mut SafeStorage<S>, key: &'a str) -> Self {
        Self { storage, key }
    }
}

impl<'a, S: KeyValueStore> ThemePreferenceTrait for ThemePreferenceStore<'a, S> {
    /// Returns the stored preference; absent or unrecognized values yield `None`.
    fn load(&self) -> Option<ThemePreference> {
        let raw = self.storage.read(self.key)?;
        match raw.parse() {
            Ok(pref) => Some(pref),
            Err(e) => {
                warn!(error = %e, "ignoring stored theme preference");
                None
            }
        }
    }

    fn save(&mut self, preference: ThemePreference) -> bool {
        self.storage.write(self.key, preference.as_str())
    }

    /// Flips `current`, persists the result and returns it.
    fn toggle(&mut self, current: ThemePreference) -> ThemePreference {
        let next = current.toggled();
        self.save(next);
        debug!(theme = %next, "theme toggled");
        next
    }
}

/// Stored preference wins; otherwise follow the system color scheme.
pub fn resolve(stored: Option<ThemePreference>, system_prefers_dark: bool) -> ThemePreference {
    match stored {
        Some(pref) => pref,
        None if system_prefers_dark => ThemePreference::Dark,
        None => ThemePreference::Light,
    }
}

/// Screen reader announcement after a switch.
pub fn announcement(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Light => "Açık tema aktif edildi",
        ThemePreference::Dark => "Koyu tema aktif edildi",
    }
}

pub fn apply(page: &mut Page, preference: ThemePreference) {
    page.body
        .toggle_class(DARK_CLASS, preference == ThemePreference::Dark);
}

/// Theme currently shown by the page.
pub fn current(page: &Page) -> ThemePreference {
    if page.body.has_class(DARK_CLASS) {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    }
}
