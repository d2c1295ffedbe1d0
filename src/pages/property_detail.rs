//! Property detail page with photo gallery and reviews.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a `PhotoCarousel` signal; thumbnails open the modal at their
//! index and the modal navigates within the same signal.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::app_shell::AppShell;
use crate::components::photo_modal::PhotoModal;
use crate::components::review_modal::ReviewModal;
use crate::config::ClientConfig;
use crate::net::types::Property;
use crate::state::carousel::PhotoCarousel;
use crate::state::ui::UiState;
use crate::util::reviews::rating_summary;

#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let params = use_params_map();
    let config = expect_context::<ClientConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let property = RwSignal::new(None::<Property>);
    let loading = RwSignal::new(true);
    let carousel = RwSignal::new(PhotoCarousel::default());

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let fetched = crate::net::api::fetch_property(&config, &id).await;
                if fetched.is_none() {
                    log::warn!("property {id} could not be loaded");
                }
                carousel.update(|c| c.set_photos(fetched.as_ref().map(|p| p.photos.clone()).unwrap_or_default()));
                property.set(fetched);
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, id);
    });

    on_cleanup(move || ui.update(|u| u.review_modal_open = false));

    let close_reviews = Callback::new(move |()| ui.update(|u| u.review_modal_open = false));

    view! {
        <AppShell>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando propiedad..."</p> }>
                {move || match property.get() {
                    None => view! { <p class="property-detail__missing">"Propiedad no encontrada."</p> }.into_any(),
                    Some(p) => {
                        let reviews = p.reviews.clone();
                        let summary = rating_summary(&p.reviews);
                        let title = p.title.clone();
                        view! {
                            <article class="property-detail">
                                <h1>{p.title.clone()}</h1>
                                <p class="property-detail__city">{p.city.clone()}</p>
                                <p class="property-detail__price">{p.price_label()} " / noche"</p>
                                <div class="property-detail__gallery">
                                    {p
                                        .photos
                                        .iter()
                                        .enumerate()
                                        .map(|(i, src)| {
                                            view! {
                                                <img
                                                    class="property-detail__thumb"
                                                    src=src.clone()
                                                    alt=format!("Foto {}", i + 1)
                                                    on:click=move |_| carousel.update(|c| c.open_at(i))
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <p class="property-detail__description">{p.description.clone()}</p>
                                <button
                                    class="btn property-detail__reviews"
                                    on:click=move |_| ui.update(|u| u.review_modal_open = true)
                                >
                                    {summary}
                                </button>
                                <PhotoModal carousel=carousel alt=title/>
                                <Show when=move || ui.get().review_modal_open>
                                    <ReviewModal reviews=reviews.clone() on_close=close_reviews/>
                                </Show>
                            </article>
                        }
                        .into_any()
                    }
                }}
            </Show>
        </AppShell>
    }
}
