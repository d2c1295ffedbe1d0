//! Theme preference store and resolution.
//!
//! DESIGN
//! ======
//! `ThemeResolver` owns the single persisted preference field. It is
//! constructed once in `App`, handed to components through context, and talks
//! to the outside world only through the `PreferenceStore` and
//! `DisplaySurface` seams, so tests drive it with in-memory doubles.
//!
//! Persisted values arrive from an untrusted store and are never an error:
//! anything unrecognized collapses to `ThemePreference::System`. Only a
//! caller handing `set_preference_str` a bad value gets `InvalidThemeError`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Marker present on the display root while the resolved theme is light.
pub const LIGHT_MARKER: &str = "light";
/// Marker present on the display root while the resolved theme is dark.
pub const DARK_MARKER: &str = "dark";
/// Marker present on the display root while the preference is `system`.
pub const SYSTEM_MARKER: &str = "system";

/// User-chosen display mode setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Every preference, in cycle order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Next preference in the fixed `light → dark → system → light` order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Decode a persisted value, falling back to `System` when the value is
    /// absent or unrecognized.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: InvalidThemeError| {
                log::warn!("{e}; falling back to system theme");
                Self::default()
            }),
        }
    }

    /// Human-readable label for toggles and tooltips.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Claro",
            Self::Dark => "Oscuro",
            Self::System => "Sistema",
        }
    }

    /// Icon glyph shown on the theme toggle.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
            Self::System => "◐",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = InvalidThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(InvalidThemeError { value: other.to_owned() }),
        }
    }
}

/// Raised when a theme preference outside `{light, dark, system}` is supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme preference {value:?}: expected light, dark or system")]
pub struct InvalidThemeError {
    pub value: String,
}

/// Concrete two-value display mode applied to the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Display-root marker for this mode.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Light => LIGHT_MARKER,
            Self::Dark => DARK_MARKER,
        }
    }
}

/// Resolve a preference to the display mode actually applied.
///
/// `System` maps to `Light`; no OS or browser color-scheme signal is read.
#[must_use]
pub fn resolve(preference: ThemePreference) -> ResolvedTheme {
    match preference {
        ThemePreference::Dark => ResolvedTheme::Dark,
        ThemePreference::Light | ThemePreference::System => ResolvedTheme::Light,
    }
}

/// Durable string key-value store (browser `localStorage` in production).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Global display root whose markers select the active theme styles.
pub trait DisplaySurface {
    fn add_marker(&mut self, name: &str);
    fn remove_marker(&mut self, name: &str);
}

/// Owner of the persisted theme preference.
#[derive(Clone, Debug)]
pub struct ThemeResolver<S, D> {
    preference: ThemePreference,
    key: String,
    store: S,
    surface: D,
}

impl<S: PreferenceStore, D: DisplaySurface> ThemeResolver<S, D> {
    /// Resolver holding the default preference; the store is not read.
    ///
    /// Server render and the first client render both start here, so the
    /// hydrated markup matches. Call [`ThemeResolver::reload`] once running
    /// in the browser.
    pub fn new(store: S, surface: D, key: impl Into<String>) -> Self {
        Self { preference: ThemePreference::default(), key: key.into(), store, surface }
    }

    /// Load the preference persisted under `key`.
    ///
    /// Nothing is applied to the surface until [`ThemeResolver::apply`] or a
    /// preference change runs.
    pub fn load(store: S, surface: D, key: impl Into<String>) -> Self {
        let mut resolver = Self::new(store, surface, key);
        resolver.reload();
        resolver
    }

    /// Re-read the persisted preference, replacing the in-memory value.
    pub fn reload(&mut self) -> ThemePreference {
        self.preference = ThemePreference::from_stored(self.store.get(&self.key).as_deref());
        log::debug!("theme preference loaded: {}", self.preference);
        self.preference
    }

    /// Current in-memory preference.
    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Display mode for the current preference.
    #[must_use]
    pub fn resolved(&self) -> ResolvedTheme {
        resolve(self.preference)
    }

    /// Store a new preference, persist it and re-apply the display markers.
    ///
    /// Setting the current value again still persists and re-applies.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
        self.store.set(&self.key, preference.as_str());
        self.apply();
        log::debug!("theme preference set to {preference}");
    }

    /// Parse and store an untyped preference value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidThemeError` when `raw` is not `light`, `dark` or
    /// `system`; the current preference is left untouched.
    pub fn set_preference_str(&mut self, raw: &str) -> Result<ThemePreference, InvalidThemeError> {
        let preference = raw.parse()?;
        self.set_preference(preference);
        Ok(preference)
    }

    /// Advance `light → dark → system → light` and return the new value.
    pub fn cycle_preference(&mut self) -> ThemePreference {
        let next = self.preference.next();
        self.set_preference(next);
        next
    }

    /// Put the surface markers in the state implied by the current preference.
    pub fn apply(&mut self) {
        let resolved = self.resolved();
        for mode in [ResolvedTheme::Light, ResolvedTheme::Dark] {
            if mode == resolved {
                self.surface.add_marker(mode.marker());
            } else {
                self.surface.remove_marker(mode.marker());
            }
        }
        if self.preference == ThemePreference::System {
            self.surface.add_marker(SYSTEM_MARKER);
        } else {
            self.surface.remove_marker(SYSTEM_MARKER);
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Tear the resolver down, handing back its collaborators.
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.surface)
    }
}
