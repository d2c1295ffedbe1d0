//! Role-aware landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It greets the user and repeats
//! the role's navigation as quick-access cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::app_shell::AppShell;
use crate::state::auth::AuthState;
use crate::util::navigation::{NavigationEntry, Role, build_navigation};

/// Navigation entries worth a card on the dashboard (everything but itself).
pub(crate) fn dashboard_cards(role: Role) -> Vec<&'static NavigationEntry> {
    build_navigation(role).into_iter().filter(|entry| entry.path != "/").collect()
}

pub(crate) fn greeting(name: &str) -> String {
    if name.is_empty() {
        "Bienvenido".to_owned()
    } else {
        format!("Hola, {name}")
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let role = Memo::new(move |_| auth.with(AuthState::role));

    view! {
        <AppShell>
            <section class="dashboard-page">
                <h1 class="dashboard-page__title">{move || role.get().dashboard_title()}</h1>
                <p class="dashboard-page__greeting">{move || greeting(&auth.get().display_name())}</p>
                <div class="dashboard-page__cards">
                    {move || {
                        dashboard_cards(role.get())
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <A href=entry.path>
                                        <div class="dashboard-card">
                                            <span class="dashboard-card__icon" aria-hidden="true">{entry.icon.glyph()}</span>
                                            <span class="dashboard-card__label">{entry.name}</span>
                                        </div>
                                    </A>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </AppShell>
    }
}
