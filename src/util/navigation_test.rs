use std::collections::HashSet;

use super::*;

fn names(role: Role) -> Vec<&'static str> {
    build_navigation(role).iter().map(|e| e.name).collect()
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_from_session_parses_known_roles() {
    assert_eq!(Role::from_session(Some("user")), Role::User);
    assert_eq!(Role::from_session(Some("admin")), Role::Admin);
    assert_eq!(Role::from_session(Some(" SuperAdmin ")), Role::Superadmin);
}

#[test]
fn role_from_session_defaults_to_user() {
    assert_eq!(Role::from_session(None), Role::User);
    assert_eq!(Role::from_session(Some("landlord")), Role::User);
    assert_eq!(Role::from_session(Some("")), Role::User);
}

#[test]
fn role_staff_flag() {
    assert!(!Role::User.is_staff());
    assert!(Role::Admin.is_staff());
    assert!(Role::Superadmin.is_staff());
}

// =============================================================
// build_navigation
// =============================================================

#[test]
fn user_navigation_excludes_staff_only_entries() {
    let nav = build_navigation(Role::User);
    assert!(nav.iter().all(|e| e.allows(Role::User)));
    assert!(nav.iter().all(|e| e.allowed_roles != STAFF));
    assert!(nav.iter().all(|e| e.section != NavSection::Administration));
    assert!(!names(Role::User).contains(&"Inquilinos"));
}

#[test]
fn admin_navigation_contains_inquilinos_and_single_dashboard() {
    let names = names(Role::Admin);
    assert!(names.contains(&"Inquilinos"));
    assert_eq!(names.iter().filter(|n| **n == "Dashboard").count(), 1);
    assert!(!names.contains(&"Administradores"));
}

#[test]
fn superadmin_navigation_is_superset_of_lower_roles() {
    let superadmin: HashSet<_> = names(Role::Superadmin).into_iter().collect();
    for role in [Role::User, Role::Admin] {
        assert!(names(role).iter().all(|n| superadmin.contains(n)), "{role} not covered");
    }
    assert!(superadmin.contains("Administradores"));
}

#[test]
fn navigation_preserves_section_order() {
    for role in Role::ALL {
        let sections: Vec<_> = build_navigation(role).iter().map(|e| e.section).collect();
        let mut sorted = sections.clone();
        sorted.sort();
        assert_eq!(sections, sorted, "{role} sections out of order");
        assert_eq!(sections.first(), Some(&NavSection::Base));
    }
}

#[test]
fn navigation_has_no_duplicates_and_fits_catalog() {
    for role in Role::ALL {
        let nav = build_navigation(role);
        let paths: HashSet<_> = nav.iter().map(|e| e.path).collect();
        assert_eq!(paths.len(), nav.len());
        assert!(nav.len() <= NAV_CATALOG.len());
    }
}

#[test]
fn user_navigation_is_base_then_tenant() {
    assert_eq!(
        names(Role::User),
        vec!["Dashboard", "Propiedades", "Contacto", "Mis Reservas", "Pagos", "Pagos Cripto", "Mi Perfil"]
    );
}

#[test]
fn catalog_paths_are_unique() {
    let paths: HashSet<_> = NAV_CATALOG.iter().map(|e| e.path).collect();
    assert_eq!(paths.len(), NAV_CATALOG.len());
}

// =============================================================
// Active path matching
// =============================================================

#[test]
fn root_path_matches_only_itself() {
    assert!(is_active_path("/", "/"));
    assert!(!is_active_path("/", "/properties"));
}

#[test]
fn nested_paths_match_on_segment_boundary() {
    assert!(is_active_path("/payments", "/payments"));
    assert!(is_active_path("/payments", "/payments/42"));
    assert!(!is_active_path("/payments", "/paymentsx"));
    assert!(!is_active_path("/payments", "/"));
}

#[test]
fn active_entry_prefers_most_specific_path() {
    let nav = build_navigation(Role::User);
    let active = active_entry(&nav, "/payments/crypto").map(|e| e.name);
    assert_eq!(active, Some("Pagos Cripto"));
    let active = active_entry(&nav, "/payments/123").map(|e| e.name);
    assert_eq!(active, Some("Pagos"));
    assert!(active_entry(&nav, "/nowhere").is_none());
}

#[test]
fn entry_for_path_finds_every_catalog_entry() {
    for entry in NAV_CATALOG {
        assert_eq!(entry_for_path(entry.path), Some(entry));
    }
}

#[test]
fn entry_for_path_ignores_trailing_slash_and_unknown_paths() {
    assert_eq!(entry_for_path("/bookings/").map(|e| e.name), Some("Mis Reservas"));
    assert_eq!(entry_for_path("/").map(|e| e.name), Some("Dashboard"));
    assert!(entry_for_path("/admin").is_none());
    assert!(entry_for_path("/bookings/42").is_none());
}
