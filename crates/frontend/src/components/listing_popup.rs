use bookadzone_shared::models::Listing;
use dioxus::prelude::*;

use crate::components::BANNER;

/// DOM id of the open popup card, used by the map surface to test whether a
/// click landed inside it.
pub const POPUP_ID: &str = "listing-popup";

/// Detail card for the focused listing, anchored below its coordinate.
#[component]
pub fn ListingPopup(
    listing: Listing,
    x_pct: f64,
    y_pct: f64,
    inv_scale: f64,
    on_close: EventHandler<()>,
) -> Element {
    let style = format!(
        "left:{x_pct}%;top:{y_pct}%;transform:translate(-50%, 14px) scale({inv_scale});transform-origin:top center;"
    );

    rsx! {
        div {
            id: POPUP_ID,
            class: "popup-card",
            style: "{style}",
            onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

            button {
                class: "popup-close",
                onclick: move |_| on_close.call(()),
                "×"
            }
            img { class: "popup-img", src: BANNER, alt: "billboard" }
            h3 { "{listing.title}" }
            p {
                "{listing.kind} "
                span { class: "stars", "★★★★★" }
                span { class: "rating", " {listing.rating}" }
            }
            button { class: "book-btn", "Book Now" }
        }
    }
}
