//! Listing card linking to a property's detail page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Property;
use crate::util::reviews::rating_summary;

#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let href = format!("/properties/{}", property.id);
    let cover = property.photos.first().cloned();
    let rating = rating_summary(&property.reviews);
    let price = property.price_label();
    let Property { title, city, .. } = property;
    let cover_alt = title.clone();

    view! {
        <A href=href>
            <article class="property-card">
                {cover.map(|src| view! { <img class="property-card__cover" src=src alt=cover_alt/> })}
                <h3 class="property-card__title">{title}</h3>
                <p class="property-card__city">{city}</p>
                <p class="property-card__price">{price} " / noche"</p>
                <p class="property-card__rating">{rating}</p>
            </article>
        </A>
    }
}
