//! Property listing with a filter sidebar.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use leptos::prelude::*;

use crate::components::property_card::PropertyCard;
use crate::state::properties::{PropertyFilter, SortOrder, all_amenities, all_tags};
use crate::util::format::plural;

const BEDROOM_CHOICES: [u8; 4] = [1, 2, 3, 4];

/// Max-price input: blank or non-numeric means no limit.
pub fn parse_price_limit(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(|c| !matches!(c, ',' | '$' | ' ')).collect();
    digits.parse().ok()
}

/// Bedroom select value: `"any"` (or anything unparsable) means no minimum.
pub fn parse_min_bedrooms(raw: &str) -> Option<u8> {
    raw.parse().ok().filter(|n| *n > 0)
}

/// Results header, e.g. `"3 homes found"`.
pub fn results_label(count: usize) -> String {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    format!("{} found", plural(count, "home", "homes"))
}

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let catalog = crate::data::properties();
    let amenities = all_amenities(&catalog);
    let tags = all_tags(&catalog);
    let filter = RwSignal::new(PropertyFilter::default());
    let results = Memo::new(move |_| filter.with(|f| f.apply(&catalog)));

    let amenity_boxes = amenities
        .into_iter()
        .map(|amenity| {
            let checked_name = amenity.clone();
            let toggled_name = amenity.clone();
            view! {
                <label class="field field--checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.with(|f| f.amenities.contains(&checked_name))
                        on:change=move |_| filter.update(|f| f.toggle_amenity(&toggled_name))
                    />
                    <span>{amenity}</span>
                </label>
            }
        })
        .collect::<Vec<_>>();
    let tag_options = tags
        .into_iter()
        .map(|tag| view! { <option value=tag.clone()>{tag.clone()}</option> })
        .collect::<Vec<_>>();

    view! {
        <section class="page properties">
            <header class="page__header">
                <h1>"Find a place"</h1>
                <p class="page__lead">"Rooms and apartments from hosts looking for great roommates."</p>
            </header>
            <div class="properties__layout">
                <aside class="card properties__filters">
                    <label class="field">
                        <span class="field__label">"Search"</span>
                        <input
                            class="field__input"
                            type="search"
                            placeholder="Neighborhood, title or tag"
                            prop:value=move || filter.with(|f| f.query.clone())
                            on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Max price / month"</span>
                        <input
                            class="field__input"
                            type="number"
                            min="0"
                            step="50"
                            placeholder="Any"
                            prop:value=move || filter.with(|f| f.max_price.map(|p| p.to_string()).unwrap_or_default())
                            on:input=move |ev| filter.update(|f| f.max_price = parse_price_limit(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Bedrooms"</span>
                        <select
                            class="field__input"
                            prop:value=move || {
                                filter.with(|f| f.min_bedrooms.map_or_else(|| "any".to_owned(), |n| n.to_string()))
                            }
                            on:change=move |ev| filter.update(|f| f.min_bedrooms = parse_min_bedrooms(&event_target_value(&ev)))
                        >
                            <option value="any">"Any"</option>
                            {BEDROOM_CHOICES
                                .into_iter()
                                .map(|n| view! { <option value=n.to_string()>{format!("{n}+")}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"Tag"</span>
                        <select
                            class="field__input"
                            prop:value=move || filter.with(|f| f.tag.clone().unwrap_or_default())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| f.tag = (!value.is_empty()).then_some(value));
                            }
                        >
                            <option value="">"Any"</option>
                            {tag_options}
                        </select>
                    </label>
                    <fieldset class="properties__amenities">
                        <legend>"Amenities"</legend>
                        {amenity_boxes}
                    </fieldset>
                    <button
                        class="btn btn--ghost btn--block"
                        disabled=move || filter.with(PropertyFilter::is_default)
                        on:click=move |_| filter.set(PropertyFilter::default())
                    >
                        "Reset filters"
                    </button>
                </aside>

                <div class="properties__results">
                    <div class="properties__toolbar">
                        <span class="properties__count">{move || results_label(results.with(Vec::len))}</span>
                        <select
                            class="field__input properties__sort"
                            aria-label="Sort"
                            prop:value=move || filter.with(|f| f.sort.as_str())
                            on:change=move |ev| filter.update(|f| f.sort = SortOrder::parse(&event_target_value(&ev)))
                        >
                            {SortOrder::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <Show
                        when=move || results.with(|r| !r.is_empty())
                        fallback=move || {
                            view! {
                                <div class="empty">
                                    <p>"No homes match those filters."</p>
                                    <button class="btn btn--ghost" on:click=move |_| filter.set(PropertyFilter::default())>
                                        "Clear filters"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="property-grid">
                            {move || {
                                results
                                    .get()
                                    .into_iter()
                                    .map(|property| view! { <PropertyCard property=property/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}
