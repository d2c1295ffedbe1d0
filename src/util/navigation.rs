//! Role-based primary navigation.
//!
//! DESIGN
//! ======
//! Who-sees-what lives in one declarative table, `NAV_CATALOG`. Each entry
//! carries its section and the roles allowed to see it; `build_navigation`
//! is a single filter pass over the table, so catalog order (base, tenant,
//! administration) is the output order and no entry can appear twice.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::fmt;

/// Access-level classification of a signed-in user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    User,
    Admin,
    Superadmin,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::User, Self::Admin, Self::Superadmin];

    /// Normalize a role string supplied by the session.
    ///
    /// Absent or unrecognized values become `Role::User`.
    #[must_use]
    pub fn from_session(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::User;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" => Self::User,
            "admin" => Self::Admin,
            "superadmin" => Self::Superadmin,
            other => {
                log::warn!("unrecognized session role {other:?}; treating as user");
                Self::User
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }

    /// Dashboard heading for this role.
    #[must_use]
    pub fn dashboard_title(self) -> &'static str {
        match self {
            Self::User => "Panel del inquilino",
            Self::Admin => "Panel de administración",
            Self::Superadmin => "Panel de superadministración",
        }
    }

    #[must_use]
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::Superadmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block of the menu an entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NavSection {
    Base,
    Tenant,
    Administration,
}

/// Menu icon reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    Building,
    Mail,
    Calendar,
    Card,
    Coin,
    Person,
    People,
    Chart,
    Shield,
}

impl NavIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Building => "▦",
            Self::Mail => "✉",
            Self::Calendar => "▤",
            Self::Card => "▭",
            Self::Coin => "◎",
            Self::Person => "☺",
            Self::People => "☷",
            Self::Chart => "▟",
            Self::Shield => "⛨",
        }
    }
}

/// A single link in the primary menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    pub section: NavSection,
    pub allowed_roles: &'static [Role],
}

impl NavigationEntry {
    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

const EVERYONE: &[Role] = &[Role::User, Role::Admin, Role::Superadmin];
const STAFF: &[Role] = &[Role::Admin, Role::Superadmin];
const SUPERADMIN_ONLY: &[Role] = &[Role::Superadmin];

/// Every menu entry, in display order.
pub const NAV_CATALOG: &[NavigationEntry] = &[
    NavigationEntry { name: "Dashboard", path: "/", icon: NavIcon::Home, section: NavSection::Base, allowed_roles: EVERYONE },
    NavigationEntry { name: "Propiedades", path: "/properties", icon: NavIcon::Building, section: NavSection::Base, allowed_roles: EVERYONE },
    NavigationEntry { name: "Contacto", path: "/contact", icon: NavIcon::Mail, section: NavSection::Base, allowed_roles: EVERYONE },
    NavigationEntry { name: "Mis Reservas", path: "/bookings", icon: NavIcon::Calendar, section: NavSection::Tenant, allowed_roles: EVERYONE },
    NavigationEntry { name: "Pagos", path: "/payments", icon: NavIcon::Card, section: NavSection::Tenant, allowed_roles: EVERYONE },
    NavigationEntry { name: "Pagos Cripto", path: "/payments/crypto", icon: NavIcon::Coin, section: NavSection::Tenant, allowed_roles: EVERYONE },
    NavigationEntry { name: "Mi Perfil", path: "/profile", icon: NavIcon::Person, section: NavSection::Tenant, allowed_roles: EVERYONE },
    NavigationEntry { name: "Inquilinos", path: "/admin/tenants", icon: NavIcon::People, section: NavSection::Administration, allowed_roles: STAFF },
    NavigationEntry { name: "Gestión de Propiedades", path: "/admin/properties", icon: NavIcon::Building, section: NavSection::Administration, allowed_roles: STAFF },
    NavigationEntry { name: "Reportes", path: "/admin/reports", icon: NavIcon::Chart, section: NavSection::Administration, allowed_roles: STAFF },
    NavigationEntry { name: "Administradores", path: "/admin/admins", icon: NavIcon::Shield, section: NavSection::Administration, allowed_roles: SUPERADMIN_ONLY },
];

/// Menu entries visible to `role`, in catalog order.
#[must_use]
pub fn build_navigation(role: Role) -> Vec<&'static NavigationEntry> {
    NAV_CATALOG.iter().filter(|entry| entry.allows(role)).collect()
}

/// Whether `entry_path` should be highlighted for the current `location`.
///
/// The root path matches only itself; other paths match themselves and any
/// nested segment (`/payments` is active on `/payments/42`, not on
/// `/paymentsx`).
#[must_use]
pub fn is_active_path(entry_path: &str, location: &str) -> bool {
    if entry_path == "/" {
        return location == "/";
    }
    match location.strip_prefix(entry_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// The most specific entry in `entries` active for `location`.
#[must_use]
pub fn active_entry<'a>(
    entries: &[&'a NavigationEntry],
    location: &str,
) -> Option<&'a NavigationEntry> {
    entries
        .iter()
        .copied()
        .filter(|entry| is_active_path(entry.path, location))
        .max_by_key(|entry| entry.path.len())
}

/// Catalog entry whose path is exactly `path`.
#[must_use]
pub fn entry_for_path(path: &str) -> Option<&'static NavigationEntry> {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    NAV_CATALOG.iter().find(|entry| entry.path == path)
}
