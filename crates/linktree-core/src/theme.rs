//! Light/dark theme preference.
//!
//! The preference lives in a key/value store (localStorage in the browser) and
//! is reflected on the document root as a marker attribute. With nothing
//! stored, the OS color-scheme preference decides.

use crate::constants::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_os_preference(prefers_light: bool) -> Self {
        if prefers_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Interpret a raw stored value. Empty means nothing stored; any value
    /// other than `light` is applied as dark.
    pub fn from_stored(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("[theme] {}; applying dark", e);
                Some(Theme::Dark)
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CoreError::UnknownTheme(other.to_string())),
        }
    }
}

/// Effective theme: a stored value wins, then the OS preference, then dark.
pub fn resolve_theme(stored: Option<&str>, os_prefers_light: bool) -> Theme {
    stored
        .and_then(Theme::from_stored)
        .unwrap_or_else(|| Theme::from_os_preference(os_prefers_light))
}

/// Persistent string storage for the preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// The element carrying the theme marker attribute.
pub trait ThemeRoot {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str);
    fn remove_attribute(&mut self, name: &str);
}

pub struct ThemeSwitcher<S, R> {
    store: S,
    root: R,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemeSwitcher<S, R> {
    pub fn new(store: S, root: R) -> Self {
        Self { store, root }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn stored(&self) -> Option<Theme> {
        self.store
            .load(THEME_STORAGE_KEY)
            .as_deref()
            .and_then(Theme::from_stored)
    }

    /// Any non-empty stored value counts, recognised or not.
    pub fn has_stored_preference(&self) -> bool {
        self.store
            .load(THEME_STORAGE_KEY)
            .is_some_and(|raw| !raw.is_empty())
    }

    /// Theme currently shown, read back from the root attribute.
    pub fn current(&self) -> Theme {
        match self.root.attribute(THEME_ATTRIBUTE).as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    fn apply(&mut self, theme: Theme) {
        match theme {
            Theme::Light => self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str()),
            Theme::Dark => self.root.remove_attribute(THEME_ATTRIBUTE),
        }
    }

    /// Show `theme` and persist it.
    pub fn set(&mut self, theme: Theme) {
        self.apply(theme);
        self.store.save(THEME_STORAGE_KEY, theme.as_str());
    }

    /// Page-load initialization. The stored value is written back as found,
    /// unrecognised strings included; with nothing stored the resolved theme
    /// is persisted.
    pub fn init(&mut self, os_prefers_light: bool) -> Theme {
        let stored = self
            .store
            .load(THEME_STORAGE_KEY)
            .filter(|raw| !raw.is_empty());
        let theme = resolve_theme(stored.as_deref(), os_prefers_light);
        self.apply(theme);
        let persisted = stored.as_deref().unwrap_or(theme.as_str()).to_string();
        self.store.save(THEME_STORAGE_KEY, &persisted);
        log::info!("[theme] init theme={}", theme);
        theme
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        log::info!("[theme] toggled to {}", next);
        next
    }

    /// OS color-scheme change. Ignored once any preference is stored; when it
    /// does apply, the new theme is stored too and later changes are ignored.
    pub fn on_os_preference_change(&mut self, prefers_light: bool) -> Option<Theme> {
        if self.has_stored_preference() {
            return None;
        }
        let theme = Theme::from_os_preference(prefers_light);
        self.set(theme);
        log::info!("[theme] following OS preference: {}", theme);
        Some(theme)
    }
}
