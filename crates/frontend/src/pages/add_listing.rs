use bookadzone_shared::geo;
use bookadzone_shared::models::ListingKind;
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::picker_map::PickerMap;
use crate::store;
use crate::Route;

/// The add-listing form: title, type, rating, and a map-click coordinate
/// picker. Submission appends to the persisted sequence, confirms with a
/// blocking alert, and navigates back to the map.
#[component]
pub fn AddListingForm() -> Element {
    let nav = use_navigator();

    let mut listings = use_signal(|| match store::load_listings() {
        Ok(listings) => listings,
        Err(err) => {
            tracing::warn!("discarding unreadable listing store: {err}");
            Vec::new()
        }
    });

    let mut title = use_signal(String::new);
    let mut kind = use_signal(|| None::<ListingKind>);
    let mut rating = use_signal(String::new);
    let position = use_signal(|| geo::DEFAULT_CENTER);

    let kind_value = (*kind.read()).map(|k| k.to_string()).unwrap_or_default();
    let [lng, lat] = *position.read();

    rsx! {
        div { class: "add-listing-container",
            h1 { "Add New Billboard Listing" }

            form {
                class: "listing-form",
                onsubmit: move |evt: Event<FormData>| {
                    evt.prevent_default();
                    // The select is `required`; an unset kind means the
                    // browser let nothing through, so just bail.
                    let Some(kind_now) = *kind.read() else {
                        return;
                    };
                    let result = store::append_listing(
                        &mut listings.write(),
                        title.read().trim(),
                        kind_now,
                        &rating.read(),
                        *position.read(),
                    );
                    let window = web_sys::window();
                    match result {
                        Ok(_) => {
                            if let Some(window) = window {
                                let _ = window.alert_with_message("Listing added successfully!");
                            }
                            nav.push(Route::Home {});
                        }
                        Err(err) => {
                            tracing::warn!("failed to persist listing: {err}");
                            if let Some(window) = window {
                                let _ = window
                                    .alert_with_message(&format!("Failed to save listing: {err}"));
                            }
                        }
                    }
                },

                div { class: "form-group",
                    label { r#for: "title", "Title:" }
                    input {
                        r#type: "text",
                        id: "title",
                        name: "title",
                        required: true,
                        value: "{title}",
                        oninput: move |evt: Event<FormData>| title.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { r#for: "type", "Type:" }
                    select {
                        id: "type",
                        name: "type",
                        required: true,
                        value: "{kind_value}",
                        onchange: move |evt: Event<FormData>| kind.set(ListingKind::parse(&evt.value())),
                        option { value: "", "Select Type" }
                        for k in ListingKind::ALL {
                            option { value: "{k}", selected: *kind.read() == Some(k), "{k}" }
                        }
                    }
                }

                div { class: "form-group",
                    label { r#for: "rating", "Rating (0-10):" }
                    input {
                        r#type: "number",
                        id: "rating",
                        name: "rating",
                        min: "0",
                        max: "10",
                        step: "0.1",
                        required: true,
                        value: "{rating}",
                        oninput: move |evt: Event<FormData>| rating.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { "Location Coordinates:" }
                    div { class: "coordinates-display",
                        {format!("Longitude: {lng:.6}, Latitude: {lat:.6}")}
                    }
                    p { class: "instruction", "Click on the map below to set the location" }
                }

                div { class: "map-picker",
                    PickerMap { position }
                }

                div { class: "form-actions",
                    button {
                        r#type: "button",
                        class: "cancel-btn",
                        onclick: move |_| {
                            nav.push(Route::Home {});
                        },
                        "Cancel"
                    }
                    button { r#type: "submit", class: "submit-btn", "Add Listing" }
                }
            }
        }
    }
}
