mod components;
mod coords;
mod interaction;
mod pages;
mod store;
mod viewport;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
pub(crate) enum Route {
    #[route("/")]
    Home {},
    #[route("/add-listing")]
    AddListing {},
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::browse::Browse {}
    }
}

#[component]
fn AddListing() -> Element {
    rsx! {
        pages::add_listing::AddListingForm {}
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
