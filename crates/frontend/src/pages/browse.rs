use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::listing_map::ListingMap;
use crate::interaction::ListingUi;
use crate::store;
use crate::Route;

use bookadzone_shared::geo;

/// The default map view: header plus the listing map surface. Owns every
/// piece of interaction state so rendering only ever receives it.
#[component]
pub fn Browse() -> Element {
    // Read the persisted sequence once per visit. A corrupt slot is logged
    // and yields an empty map rather than a broken load.
    let listings = use_signal(|| match store::load_listings() {
        Ok(listings) => listings,
        Err(err) => {
            tracing::warn!("discarding unreadable listing store: {err}");
            Vec::new()
        }
    });

    let ui = use_signal(Vec::<ListingUi>::new);
    let hovered = use_signal(|| None::<u32>);
    let focused = use_signal(|| None::<u32>);
    let zoom = use_signal(|| geo::BROWSE_ZOOM);

    let count = listings.read().len();

    rsx! {
        div { class: "app",
            header { class: "header",
                h1 { "BookAdZone" }
                span { class: "listing-count", "{count} listings" }
                Link { class: "add-link", to: Route::AddListing {}, "+ Add Listing" }
            }

            ListingMap {
                listings,
                ui,
                hovered,
                focused,
                zoom,
            }
        }
    }
}
