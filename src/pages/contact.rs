//! Contact form. The in-progress message survives reloads as a local draft.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::ContactMessage;
use crate::util::drafts::DraftSlot;

const CONTACT_DRAFT: DraftSlot<ContactMessage> = DraftSlot::new("rental-ui-contact-draft");

/// Trim the draft and check that every field is present.
pub(crate) fn validate_contact(draft: &ContactMessage) -> Result<ContactMessage, &'static str> {
    let cleaned = ContactMessage {
        name: draft.name.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        message: draft.message.trim().to_owned(),
    };
    if cleaned.name.is_empty() || cleaned.email.is_empty() || cleaned.message.is_empty() {
        return Err("Completa nombre, correo y mensaje.");
    }
    if !cleaned.email.contains('@') {
        return Err("Ingresa un correo válido.");
    }
    Ok(cleaned)
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let draft = RwSignal::new(CONTACT_DRAFT.load().unwrap_or_default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let edit = move |apply: fn(&mut ContactMessage, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            draft.update(|d| apply(d, value));
            CONTACT_DRAFT.save(&draft.get_untracked());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let cleaned = match validate_contact(&draft.get()) {
            Ok(cleaned) => cleaned,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::send_contact_message(&config, &cleaned).await {
                    Ok(()) => {
                        CONTACT_DRAFT.clear();
                        draft.set(ContactMessage::default());
                        info.set("Mensaje enviado. Te responderemos pronto.".to_owned());
                    }
                    Err(e) => info.set(format!("No se pudo enviar: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, cleaned);
    };

    view! {
        <div class="contact-page">
            <h1>"Contacto"</h1>
            <form class="contact-form" on:submit=on_submit>
                <input
                    class="contact-input"
                    type="text"
                    placeholder="Nombre"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=edit(|d, v| d.name = v)
                />
                <input
                    class="contact-input"
                    type="email"
                    placeholder="tu@correo.com"
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=edit(|d, v| d.email = v)
                />
                <textarea
                    class="contact-input contact-input--message"
                    placeholder="¿En qué podemos ayudarte?"
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=edit(|d, v| d.message = v)
                ></textarea>
                <button class="btn contact-submit" type="submit" disabled=move || busy.get()>
                    "Enviar"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="contact-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
