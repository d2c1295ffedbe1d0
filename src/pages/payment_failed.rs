//! Landing page for a rejected or cancelled payment.

#[cfg(test)]
#[path = "payment_failed_test.rs"]
mod payment_failed_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

/// Human-readable explanation for the `reason` query parameter.
pub(crate) fn failure_message(reason: Option<&str>) -> &'static str {
    match reason {
        Some("cancelled") => "Cancelaste el pago antes de completarlo.",
        Some("declined") => "Tu banco rechazó el pago.",
        Some("expired") => "La sesión de pago expiró.",
        _ => "No pudimos procesar tu pago.",
    }
}

#[component]
pub fn PaymentFailedPage() -> impl IntoView {
    let query = use_query_map();
    let message = move || query.with(|q| failure_message(q.get("reason").as_deref()));

    view! {
        <div class="status-page status-page--error">
            <h1>"Pago no completado"</h1>
            <p class="status-page__message">{message}</p>
            <div class="status-page__actions">
                <A href="/payments">"Intentar de nuevo"</A>
                <A href="/contact">"Contactar soporte"</A>
            </div>
        </div>
    }
}
