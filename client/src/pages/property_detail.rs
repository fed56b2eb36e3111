//! Single listing page.

#[cfg(test)]
#[path = "property_detail_test.rs"]
mod property_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::property_card::PropertyCard;
use crate::components::toast_host::notify;
use crate::data::types::Property;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::format::{monthly_price, plural};

const SIMILAR_LISTINGS: usize = 2;

/// Route parameter to listing id.
pub fn parse_property_id(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse().ok()
}

/// Other listings sharing a tag with `property`, falling back to any others.
pub fn similar_listings(property: &Property, catalog: &[Property], limit: usize) -> Vec<Property> {
    let others = catalog.iter().filter(|p| p.id != property.id);
    let mut out: Vec<Property> =
        others.clone().filter(|p| p.tags.iter().any(|t| property.tags.contains(t))).take(limit).cloned().collect();
    for p in others {
        if out.len() >= limit {
            break;
        }
        if !out.iter().any(|o| o.id == p.id) {
            out.push(p.clone());
        }
    }
    out
}

#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let params = use_params_map();
    let property = Memo::new(move |_| {
        params.with(|p| parse_property_id(p.get("id").as_deref())).and_then(crate::data::property)
    });

    view! {
        {move || match property.get() {
            Some(property) => view! { <PropertyDetail property=property/> }.into_any(),
            None => view! {
                <section class="page page--narrow not-found">
                    <h1>"Listing not found"</h1>
                    <p>"This home may have been taken already."</p>
                    <a class="btn btn--primary" href=AppRoute::Properties.path()>"Browse listings"</a>
                </section>
            }
            .into_any(),
        }}
    }
}

#[component]
fn PropertyDetail(property: Property) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let similar = similar_listings(&property, &crate::data::properties(), SIMILAR_LISTINGS)
        .into_iter()
        .map(|p| view! { <PropertyCard property=p compact=true/> })
        .collect::<Vec<_>>();
    let amenities = property.amenities.iter().map(|a| view! { <li>{a.clone()}</li> }).collect::<Vec<_>>();
    let tags = property.tags.iter().map(|t| view! { <span class="chip">{t.clone()}</span> }).collect::<Vec<_>>();
    let title = property.title.clone();

    let on_request = move |_| {
        if auth.with_untracked(AuthState::is_signed_in) {
            notify(toasts, ToastKind::Success, format!("Viewing requested for {title}. The host will reach out soon."));
        } else {
            notify(toasts, ToastKind::Info, "Log in to request a viewing");
            navigate(AppRoute::Login.path(), NavigateOptions::default());
        }
    };

    view! {
        <section class="page property-detail">
            <a class="property-detail__back" href=AppRoute::Properties.path()>"← All listings"</a>
            <img class="property-detail__image" src=property.image alt=property.title.clone()/>
            <div class="property-detail__layout">
                <div class="property-detail__main">
                    <h1>{property.title.clone()}</h1>
                    <p class="property-detail__location">{property.location}</p>
                    <div class="property-detail__tags">{tags}</div>
                    <p class="property-detail__description">{property.description}</p>
                    <h2>"Amenities"</h2>
                    <ul class="property-detail__amenities">{amenities}</ul>
                </div>
                <aside class="card property-detail__summary">
                    <p class="property-detail__price">{monthly_price(property.price)}</p>
                    <p>
                        {format!(
                            "{} · {}",
                            plural(u32::from(property.bedrooms), "bedroom", "bedrooms"),
                            plural(u32::from(property.bathrooms), "bathroom", "bathrooms"),
                        )}
                    </p>
                    <button class="btn btn--primary btn--block" on:click=on_request>"Request a viewing"</button>
                </aside>
            </div>
            <h2>"Similar homes"</h2>
            <div class="property-list">{similar}</div>
        </section>
    }
}
