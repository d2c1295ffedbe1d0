use std::cell::Cell;
use std::collections::{BTreeSet, HashMap};

use super::*;

const KEY: &str = "test-theme";

#[derive(Debug, Default)]
struct MemoryStore {
    values: HashMap<String, String>,
    reads: Cell<usize>,
    writes: usize,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Debug, Default)]
struct MemorySurface {
    markers: BTreeSet<String>,
}

impl MemorySurface {
    fn has(&self, name: &str) -> bool {
        self.markers.contains(name)
    }

    fn mode_marker_count(&self) -> usize {
        [LIGHT_MARKER, DARK_MARKER].iter().filter(|m| self.has(m)).count()
    }
}

impl DisplaySurface for MemorySurface {
    fn add_marker(&mut self, name: &str) {
        self.markers.insert(name.to_owned());
    }

    fn remove_marker(&mut self, name: &str) {
        self.markers.remove(name);
    }
}

fn resolver_with(store: MemoryStore) -> ThemeResolver<MemoryStore, MemorySurface> {
    ThemeResolver::load(store, MemorySurface::default(), KEY)
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn preference_default_is_system() {
    assert_eq!(ThemePreference::default(), ThemePreference::System);
}

#[test]
fn preference_parses_exact_lowercase_names() {
    for preference in ThemePreference::ALL {
        assert_eq!(preference.as_str().parse::<ThemePreference>(), Ok(preference));
    }
}

#[test]
fn preference_parse_rejects_unknown_values() {
    let err = "blue".parse::<ThemePreference>().unwrap_err();
    assert_eq!(err.value, "blue");
    assert!("Dark".parse::<ThemePreference>().is_err());
    assert!("".parse::<ThemePreference>().is_err());
}

#[test]
fn from_stored_falls_back_to_system() {
    assert_eq!(ThemePreference::from_stored(None), ThemePreference::System);
    assert_eq!(ThemePreference::from_stored(Some("blue")), ThemePreference::System);
    assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
}

#[test]
fn preference_serializes_as_lowercase_string() {
    assert_eq!(serde_json::to_string(&ThemePreference::Dark).unwrap(), "\"dark\"");
    let parsed: ThemePreference = serde_json::from_str("\"system\"").unwrap();
    assert_eq!(parsed, ThemePreference::System);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_maps_each_preference() {
    assert_eq!(resolve(ThemePreference::Light), ResolvedTheme::Light);
    assert_eq!(resolve(ThemePreference::Dark), ResolvedTheme::Dark);
    assert_eq!(resolve(ThemePreference::System), ResolvedTheme::Light);
}

#[test]
fn resolve_is_pure_and_never_touches_store() {
    let resolver = resolver_with(MemoryStore::with(KEY, "dark"));
    let reads_after_load = resolver.store().reads.get();
    for preference in ThemePreference::ALL {
        assert_eq!(resolve(preference), resolve(preference));
    }
    let _ = resolver.resolved();
    assert_eq!(resolver.store().reads.get(), reads_after_load);
    assert_eq!(resolver.store().writes, 0);
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_defaults_to_system_when_missing() {
    let resolver = resolver_with(MemoryStore::default());
    assert_eq!(resolver.preference(), ThemePreference::System);
}

#[test]
fn load_defaults_to_system_on_corrupt_value() {
    let resolver = resolver_with(MemoryStore::with(KEY, "blue"));
    assert_eq!(resolver.preference(), ThemePreference::System);
}

#[test]
fn new_resolver_ignores_stored_value() {
    let resolver = ThemeResolver::new(MemoryStore::with(KEY, "dark"), MemorySurface::default(), KEY);
    assert_eq!(resolver.preference(), ThemePreference::System);
    assert_eq!(resolver.store().reads.get(), 0);
    assert!(resolver.surface().markers.is_empty());
}

#[test]
fn reload_picks_up_stored_value() {
    let mut resolver = ThemeResolver::new(MemoryStore::with(KEY, "dark"), MemorySurface::default(), KEY);
    assert_eq!(resolver.reload(), ThemePreference::Dark);
    assert_eq!(resolver.preference(), ThemePreference::Dark);
    assert_eq!(resolver.store().writes, 0);
}

#[test]
fn reload_then_apply_marks_stored_preference() {
    let mut resolver = ThemeResolver::new(MemoryStore::with(KEY, "dark"), MemorySurface::default(), KEY);
    resolver.apply();
    assert!(resolver.surface().has(LIGHT_MARKER));
    resolver.reload();
    resolver.apply();
    assert!(resolver.surface().has(DARK_MARKER));
    assert_eq!(resolver.surface().mode_marker_count(), 1);
}

#[test]
fn load_does_not_touch_surface() {
    let resolver = resolver_with(MemoryStore::with(KEY, "dark"));
    assert!(resolver.surface().markers.is_empty());
}

#[test]
fn set_then_reload_recovers_each_preference() {
    for preference in ThemePreference::ALL {
        let mut resolver = resolver_with(MemoryStore::default());
        resolver.set_preference(preference);
        let (store, _) = resolver.into_parts();
        let reloaded = resolver_with(store);
        assert_eq!(reloaded.preference(), preference);
    }
}

// =============================================================
// Mutation
// =============================================================

#[test]
fn set_preference_persists_raw_string_under_key() {
    let mut resolver = resolver_with(MemoryStore::default());
    resolver.set_preference(ThemePreference::Dark);
    assert_eq!(resolver.store().values.get(KEY).map(String::as_str), Some("dark"));
}

#[test]
fn set_preference_str_rejects_invalid_and_keeps_state() {
    let mut resolver = resolver_with(MemoryStore::with(KEY, "light"));
    let err = resolver.set_preference_str("blue").unwrap_err();
    assert_eq!(err.value, "blue");
    assert_eq!(resolver.preference(), ThemePreference::Light);
    assert_eq!(resolver.store().writes, 0);
    assert!(resolver.surface().markers.is_empty());
}

#[test]
fn set_preference_str_accepts_valid_value() {
    let mut resolver = resolver_with(MemoryStore::default());
    assert_eq!(resolver.set_preference_str("dark"), Ok(ThemePreference::Dark));
    assert_eq!(resolver.preference(), ThemePreference::Dark);
}

#[test]
fn cycle_visits_dark_system_light_from_light() {
    let mut resolver = resolver_with(MemoryStore::with(KEY, "light"));
    let visited: Vec<_> = (0..3).map(|_| resolver.cycle_preference()).collect();
    assert_eq!(
        visited,
        vec![ThemePreference::Dark, ThemePreference::System, ThemePreference::Light]
    );
    assert_eq!(resolver.store().writes, 3);
}

// =============================================================
// Markers
// =============================================================

#[test]
fn dark_preference_sets_only_dark_marker() {
    let mut resolver = resolver_with(MemoryStore::default());
    resolver.set_preference(ThemePreference::Dark);
    let surface = resolver.surface();
    assert!(surface.has(DARK_MARKER));
    assert!(!surface.has(LIGHT_MARKER));
    assert!(!surface.has(SYSTEM_MARKER));
}

#[test]
fn system_preference_sets_light_and_system_markers() {
    let mut resolver = resolver_with(MemoryStore::default());
    resolver.set_preference(ThemePreference::System);
    let surface = resolver.surface();
    assert!(surface.has(LIGHT_MARKER));
    assert!(surface.has(SYSTEM_MARKER));
    assert!(!surface.has(DARK_MARKER));
}

#[test]
fn applying_same_preference_twice_is_idempotent() {
    for preference in ThemePreference::ALL {
        let mut resolver = resolver_with(MemoryStore::default());
        resolver.set_preference(preference);
        resolver.set_preference(preference);
        let surface = resolver.surface();
        assert_eq!(surface.mode_marker_count(), 1);
        assert_eq!(surface.has(SYSTEM_MARKER), preference == ThemePreference::System);
    }
}

#[test]
fn leaving_system_clears_system_marker() {
    let mut resolver = resolver_with(MemoryStore::default());
    resolver.set_preference(ThemePreference::System);
    resolver.set_preference(ThemePreference::Dark);
    assert!(!resolver.surface().has(SYSTEM_MARKER));
    assert_eq!(resolver.surface().mode_marker_count(), 1);
}

#[test]
fn apply_uses_loaded_preference() {
    let mut resolver = resolver_with(MemoryStore::with(KEY, "dark"));
    resolver.apply();
    assert!(resolver.surface().has(DARK_MARKER));
    assert_eq!(resolver.store().writes, 0);
}
