//! Fullscreen photo browser for a property's gallery.

#[cfg(test)]
#[path = "photo_modal_test.rs"]
mod photo_modal_test;

use leptos::prelude::*;

use crate::state::carousel::PhotoCarousel;

/// Keyboard commands understood by the photo modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PhotoKey {
    Next,
    Prev,
    Close,
}

pub(crate) fn photo_key(key: &str) -> Option<PhotoKey> {
    match key {
        "ArrowRight" => Some(PhotoKey::Next),
        "ArrowLeft" => Some(PhotoKey::Prev),
        "Escape" => Some(PhotoKey::Close),
        _ => None,
    }
}

/// Modal showing the carousel's current photo; renders nothing while closed.
#[component]
pub fn PhotoModal(carousel: RwSignal<PhotoCarousel>, #[prop(into)] alt: String) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let Some(cmd) = photo_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        carousel.update(|c| match cmd {
            PhotoKey::Next => c.next(),
            PhotoKey::Prev => c.prev(),
            PhotoKey::Close => c.close(),
        });
    };

    view! {
        <Show when=move || carousel.with(PhotoCarousel::is_open)>
            <div class="photo-modal__backdrop" on:click=move |_| carousel.update(PhotoCarousel::close)>
                <div
                    class="photo-modal"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <button class="photo-modal__close" title="Cerrar" on:click=move |_| carousel.update(PhotoCarousel::close)>
                        "✕"
                    </button>
                    <button class="photo-modal__nav photo-modal__nav--prev" title="Anterior" on:click=move |_| carousel.update(PhotoCarousel::prev)>
                        "‹"
                    </button>
                    <img
                        class="photo-modal__image"
                        src=move || carousel.with(|c| c.current().map(str::to_owned)).unwrap_or_default()
                        alt=alt.clone()
                    />
                    <button class="photo-modal__nav photo-modal__nav--next" title="Siguiente" on:click=move |_| carousel.update(PhotoCarousel::next)>
                        "›"
                    </button>
                    <div class="photo-modal__position">{move || carousel.with(PhotoCarousel::position_label)}</div>
                </div>
            </div>
        </Show>
    }
}
