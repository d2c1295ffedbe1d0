//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="status-page">
            <h1 class="status-page__code">"404"</h1>
            <p class="status-page__message">
                "No encontramos "
                <code>{move || location.pathname.get()}</code>
            </p>
            <A href="/">"Volver al inicio"</A>
        </div>
    }
}
