//! Card for a property listing in grids on the home, listing and dashboard pages.

use leptos::prelude::*;

use crate::data::types::Property;
use crate::routes::property_href;
use crate::util::format::{monthly_price, plural};

#[component]
pub fn PropertyCard(property: Property, #[prop(optional)] compact: bool) -> impl IntoView {
    let href = property_href(property.id);
    let beds = plural(u32::from(property.bedrooms), "bed", "beds");
    let baths = plural(u32::from(property.bathrooms), "bath", "baths");
    let tags = property
        .tags
        .iter()
        .map(|tag| view! { <span class="chip">{tag.clone()}</span> })
        .collect::<Vec<_>>();

    view! {
        <a class="property-card" class:property-card--compact=compact href=href>
            <img class="property-card__image" src=property.image alt=property.title.clone() loading="lazy"/>
            <div class="property-card__body">
                <div class="property-card__header">
                    <h3 class="property-card__title">{property.title.clone()}</h3>
                    <span class="property-card__price">{monthly_price(property.price)}</span>
                </div>
                <p class="property-card__location">{property.location}</p>
                <p class="property-card__meta">{format!("{beds} · {baths}")}</p>
                {(!compact).then(|| view! { <div class="property-card__tags">{tags}</div> })}
            </div>
        </a>
    }
}
