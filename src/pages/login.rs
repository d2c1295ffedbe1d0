//! Login page with email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;

const MISSING_FIELDS: &str = "Ingresa tu correo y contraseña.";
const INVALID_EMAIL: &str = "Ingresa un correo válido.";

/// Trim and check login form input before hitting the API.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(INVALID_EMAIL);
    };
    if local.is_empty() || domain.is_empty() {
        return Err(INVALID_EMAIL);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Iniciando sesión...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::types::LoginRequest { email: email_value, password: password_value };
                match crate::net::api::login(&config, &request).await {
                    Ok(user) => {
                        log::info!("signed in as {} ({})", user.name, user.role());
                        auth.update(|a| {
                            a.user = Some(user);
                            a.loading = false;
                        });
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Err(e) => {
                        info.set(format!("No se pudo iniciar sesión: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, auth, email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Rental"</h1>
                <p class="login-card__subtitle">"Inicia sesión para gestionar tus reservas"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="tu@correo.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Entrar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
