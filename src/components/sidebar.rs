//! Primary navigation sidebar.
//!
//! DESIGN
//! ======
//! The visible entries are a memo over the session role, so the list is
//! rebuilt only when the role changes, not on every auth update.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::navigation::{NavSection, active_entry, build_navigation};

fn section_heading(section: NavSection) -> Option<&'static str> {
    match section {
        NavSection::Base => None,
        NavSection::Tenant => Some("Inquilino"),
        NavSection::Administration => Some("Administración"),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let role = Memo::new(move |_| auth.with(AuthState::role));
    let entries = Memo::new(move |_| build_navigation(role.get()));
    let active_path = Memo::new(move |_| {
        let pathname = location.pathname.get();
        entries.with(|e| active_entry(e, &pathname).map(|entry| entry.path))
    });

    view! {
        <nav class="sidebar" class:sidebar--collapsed=move || !ui.get().sidebar_open>
            <ul class="sidebar__list">
                {move || {
                    let mut last_section = None;
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| {
                            let heading = if last_section == Some(entry.section) {
                                None
                            } else {
                                last_section = Some(entry.section);
                                section_heading(entry.section)
                            };
                            let path = entry.path;
                            let is_active = move || active_path.get() == Some(path);
                            view! {
                                {heading.map(|h| view! { <li class="sidebar__heading">{h}</li> })}
                                <li class="sidebar__item" class:sidebar__item--active=is_active>
                                    <A href=path>
                                        <span class="sidebar__icon" aria-hidden="true">{entry.icon.glyph()}</span>
                                        <span class="sidebar__label">{entry.name}</span>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
