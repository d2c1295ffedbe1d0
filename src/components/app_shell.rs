//! Authenticated layout: header, sidebar and the routed page body.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page renders inside `AppShell`, which owns the redirect to
//! `/login` so pages never repeat the auth check.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::{SessionGate, install_unauth_redirect};

#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gate = Memo::new(move |_| auth.with(SessionGate::of));
    install_unauth_redirect(gate, use_navigate());

    view! {
        <Show
            when=move || gate.get().is_signed_in()
            fallback=move || {
                view! {
                    <div class="app-shell app-shell--pending">
                        <p>{move || gate.get().waiting_message()}</p>
                    </div>
                }
            }
        >
            <div class="app-shell">
                <Header/>
                <div class="app-shell__body">
                    <Sidebar/>
                    <main class="app-shell__main">{children()}</main>
                </div>
            </div>
        </Show>
    }
}
