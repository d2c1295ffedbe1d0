//! Property listing page.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::components::property_card::PropertyCard;
use crate::config::ClientConfig;
use crate::net::types::Property;

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let items = RwSignal::new(Vec::<Property>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let list = crate::net::api::fetch_properties(&config).await;
        log::debug!("loaded {} properties", list.len());
        items.set(list);
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <AppShell>
            <section class="properties-page">
                <h1>"Propiedades"</h1>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando propiedades..."</p> }>
                    <Show when=move || !items.with(Vec::is_empty) fallback=|| view! { <p>"No hay propiedades disponibles."</p> }>
                        <div class="properties-page__grid">
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|property| view! { <PropertyCard property=property/> })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>
        </AppShell>
    }
}
