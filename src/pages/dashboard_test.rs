use super::*;

#[test]
fn dashboard_cards_skip_dashboard_entry() {
    for role in Role::ALL {
        let cards = dashboard_cards(role);
        assert!(cards.iter().all(|e| e.name != "Dashboard"));
        assert_eq!(cards.len() + 1, build_navigation(role).len());
    }
}

#[test]
fn admin_dashboard_offers_tenant_management() {
    assert!(dashboard_cards(Role::Admin).iter().any(|e| e.name == "Inquilinos"));
    assert!(!dashboard_cards(Role::User).iter().any(|e| e.name == "Inquilinos"));
}

#[test]
fn greeting_uses_name_when_present() {
    assert_eq!(greeting("Ana"), "Hola, Ana");
    assert_eq!(greeting(""), "Bienvenido");
}
