//! Top bar with sidebar toggle, theme toggle, identity and logout.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<ClientConfig>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::logout(&config).await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &config;
    };

    view! {
        <header class="header toolbar">
            <button
                class="btn header__menu"
                title="Mostrar u ocultar menú"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                "☰"
            </button>
            <span class="header__brand">"Rental"</span>
            <span class="toolbar__spacer"></span>
            <ThemeToggle/>
            <Show when=move || auth.get().user.is_some()>
                <span class="header__self">
                    {move || auth.get().display_name()}
                    " ("
                    <span class="header__role">{move || auth.get().role().as_str()}</span>
                    ")"
                </span>
                <button class="btn header__logout" on:click=on_logout.clone() title="Cerrar sesión">
                    "Salir"
                </button>
            </Show>
        </header>
    }
}
