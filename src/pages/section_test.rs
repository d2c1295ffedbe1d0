use super::*;
use crate::util::navigation::NAV_CATALOG;

/// Paths `App` routes to `SectionPage`.
const SECTION_PATHS: &[&str] = &[
    "/bookings",
    "/payments",
    "/payments/crypto",
    "/profile",
    "/admin/tenants",
    "/admin/properties",
    "/admin/reports",
    "/admin/admins",
];

/// Paths with a dedicated page of their own.
const DEDICATED_PATHS: &[&str] = &["/", "/properties", "/contact"];

#[test]
fn every_catalog_entry_has_a_page() {
    for entry in NAV_CATALOG {
        assert!(
            SECTION_PATHS.contains(&entry.path) || DEDICATED_PATHS.contains(&entry.path),
            "{} has no route",
            entry.path
        );
    }
}

#[test]
fn tenant_sections_are_available_to_users() {
    for path in ["/bookings", "/payments", "/payments/crypto", "/profile"] {
        assert!(matches!(section_view(path, Role::User), SectionView::Available(_)), "{path}");
    }
}

#[test]
fn admin_sections_are_forbidden_to_users() {
    assert!(matches!(section_view("/admin/tenants", Role::User), SectionView::Forbidden(e) if e.name == "Inquilinos"));
    assert!(matches!(section_view("/admin/tenants", Role::Admin), SectionView::Available(_)));
}

#[test]
fn superadmin_only_section_is_forbidden_to_admins() {
    assert!(matches!(section_view("/admin/admins", Role::Admin), SectionView::Forbidden(_)));
    assert!(matches!(section_view("/admin/admins", Role::Superadmin), SectionView::Available(_)));
}

#[test]
fn unknown_admin_path_is_unknown() {
    assert_eq!(section_view("/admin/nothing", Role::Superadmin), SectionView::Unknown);
}
