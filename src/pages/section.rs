//! Placeholder for menu sections whose screens are served by other releases.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every catalog path without a dedicated page routes here, so navigation
//! links never fall through to the 404 page. Access follows the same role
//! table as the sidebar.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::app_shell::AppShell;
use crate::state::auth::AuthState;
use crate::util::navigation::{NavigationEntry, Role, entry_for_path};

/// What the section page shows for a path and role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SectionView {
    Available(&'static NavigationEntry),
    Forbidden(&'static NavigationEntry),
    Unknown,
}

pub(crate) fn section_view(path: &str, role: Role) -> SectionView {
    match entry_for_path(path) {
        Some(entry) if entry.allows(role) => SectionView::Available(entry),
        Some(entry) => SectionView::Forbidden(entry),
        None => SectionView::Unknown,
    }
}

#[component]
pub fn SectionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let view_state = Memo::new(move |_| section_view(&location.pathname.get(), auth.with(AuthState::role)));

    view! {
        <AppShell>
            <section class="section-page">
                {move || match view_state.get() {
                    SectionView::Available(entry) => view! {
                        <h1>
                            <span class="section-page__icon" aria-hidden="true">{entry.icon.glyph()}</span>
                            {entry.name}
                        </h1>
                        <p class="section-page__message">"Esta sección estará disponible pronto."</p>
                    }
                    .into_any(),
                    SectionView::Forbidden(entry) => view! {
                        <h1>{entry.name}</h1>
                        <p class="section-page__message">"No tienes acceso a esta sección."</p>
                    }
                    .into_any(),
                    SectionView::Unknown => view! {
                        <p class="section-page__message">"Sección no encontrada."</p>
                    }
                    .into_any(),
                }}
                <A href="/">"Volver al inicio"</A>
            </section>
        </AppShell>
    }
}
