//! Modal listing guest reviews with their average rating.

use leptos::prelude::*;

use crate::net::types::Review;
use crate::util::reviews::{rating_summary, star_string};

#[component]
pub fn ReviewModal(reviews: Vec<Review>, on_close: Callback<()>) -> impl IntoView {
    let summary = rating_summary(&reviews);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="review-modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="review-modal" tabindex="0" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <div class="review-modal__header">
                    <h2>"Reseñas"</h2>
                    <span class="review-modal__summary">{summary}</span>
                    <button class="review-modal__close" title="Cerrar" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <ul class="review-modal__list">
                    {reviews
                        .into_iter()
                        .map(|review| {
                            view! {
                                <li class="review-modal__item">
                                    <div class="review-modal__author">{review.author}</div>
                                    <div class="review-modal__stars">{star_string(review.rating)}</div>
                                    <p class="review-modal__comment">{review.comment}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
