use bookadzone_shared::fade::{Phase, FADE_MS};
use bookadzone_shared::models::Listing;
use bookadzone_shared::{geo, visibility};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::listing_popup::{ListingPopup, POPUP_ID};
use crate::components::{wheel_zoom, zoom_about_center, BASEMAP};
use crate::interaction::{self, ListingUi};
use crate::{coords, viewport};

const MAP_CONTAINER_ID: &str = "listing-map-container";

/// CSS class suffix for a marker's current fade phase.
fn fade_class(phase: Phase) -> &'static str {
    match phase {
        Phase::FadingIn => " fade-in",
        Phase::FadingOut => " fade-out",
        Phase::Hidden | Phase::Visible => "",
    }
}

/// Everything one mounted marker needs at render time.
#[derive(Debug, Clone, Copy)]
struct MarkerView {
    id: u32,
    x_pct: f64,
    y_pct: f64,
    active: bool,
    fade: &'static str,
    pointer_mounted: bool,
    pointer_active: bool,
}

fn popup_rect() -> Option<web_sys::DomRect> {
    coords::container_rect(POPUP_ID)
}

/// The map browse surface: pan/zoom over the basemap, zoom-tiered listing
/// markers with fade transitions, hover previews, and the detail popup for
/// the focused listing.
#[component]
pub fn ListingMap(
    listings: Signal<Vec<Listing>>,
    ui: Signal<Vec<ListingUi>>,
    hovered: Signal<Option<u32>>,
    focused: Signal<Option<u32>>,
    zoom: Signal<f64>,
) -> Element {
    let mut zoom = zoom;
    let mut ui = ui;
    let mut hovered = hovered;
    let mut focused = focused;

    // Pan state is local; it resets with the component like the rest of the
    // viewport (transient, not persisted).
    let mut pan_x = use_signal(|| 0.0_f64);
    let mut pan_y = use_signal(|| 0.0_f64);

    // Drag state (mouse)
    let mut is_dragging = use_signal(|| false);
    let mut did_drag = use_signal(|| false);
    let mut drag_start_x = use_signal(|| 0.0_f64);
    let mut drag_start_y = use_signal(|| 0.0_f64);
    let mut drag_start_pan_x = use_signal(|| 0.0_f64);
    let mut drag_start_pan_y = use_signal(|| 0.0_f64);

    // Center the default viewpoint once the container has a size.
    let mut centered = use_signal(|| false);
    use_effect(move || {
        if *centered.read() {
            return;
        }
        let Some(rect) = coords::container_rect(MAP_CONTAINER_ID) else {
            return;
        };
        let scale = geo::zoom_to_scale(*zoom.peek());
        let (cx, cy) = geo::lng_lat_to_px(geo::DEFAULT_CENTER[0], geo::DEFAULT_CENTER[1]);
        let (px, py) = viewport::center_pan(cx, cy, scale, rect.width(), rect.height());
        pan_x.set(px);
        pan_y.set(py);
        centered.set(true);
    });

    // Marker visibility: re-derive the policy for every listing whenever the
    // zoom changes, fading markers in/out. A marker mid-fade-out stays
    // mounted until its timer settles it.
    use_effect(move || {
        let zoom_now = *zoom.read();
        let count = listings.read().len();
        let mut ui_for_timer = ui;
        let mut states = ui.write();
        if states.len() != count {
            states.resize(count, ListingUi::default());
        }
        for i in 0..count {
            let visible = visibility::policy_visible(i + 1, zoom_now);
            if let Some(generation) = states[i].marker.set_target(visible) {
                spawn(async move {
                    TimeoutFuture::new(FADE_MS).await;
                    if let Some(state) = ui_for_timer.write().get_mut(i) {
                        state.marker.finish(generation);
                    }
                });
            }
        }
    });

    // Pointer previews: fade toward active (hovered or focused) with the
    // same lock duration. Stale timers are no-ops inside Fade::finish.
    use_effect(move || {
        let hovered_now = *hovered.read();
        let focused_now = *focused.read();
        let ids: Vec<u32> = listings.read().iter().map(|l| l.id).collect();
        let mut ui_for_timer = ui;
        let mut states = ui.write();
        for (i, id) in ids.into_iter().enumerate() {
            let Some(state) = states.get_mut(i) else {
                break;
            };
            let active = interaction::is_active(id, hovered_now, focused_now);
            if let Some(generation) = state.pointer.set_target(active) {
                spawn(async move {
                    TimeoutFuture::new(FADE_MS).await;
                    if let Some(state) = ui_for_timer.write().get_mut(i) {
                        state.pointer.finish(generation);
                    }
                });
            }
        }
    });

    let cur_zoom = *zoom.read();
    let cur_scale = geo::zoom_to_scale(cur_zoom);
    let cur_pan_x = *pan_x.read();
    let cur_pan_y = *pan_y.read();
    let dragging = *is_dragging.read();
    let hovered_now = *hovered.read();
    let focused_now = *focused.read();
    let inv_scale = 1.0 / cur_scale;

    // Snapshot render data before rsx so no Ref guards cross into it.
    let (markers, popup) = {
        let listings_now = listings.read();
        let ui_now = ui.read();
        let markers: Vec<MarkerView> = listings_now
            .iter()
            .enumerate()
            .filter_map(|(i, listing)| {
                let state = ui_now.get(i).copied().unwrap_or_default();
                if !state.marker.is_mounted() {
                    return None;
                }
                let (px, py) = geo::lng_lat_to_px(listing.coords[0], listing.coords[1]);
                Some(MarkerView {
                    id: listing.id,
                    x_pct: px / geo::MAP_WIDTH_PX * 100.0,
                    y_pct: py / geo::MAP_HEIGHT_PX * 100.0,
                    active: interaction::is_active(listing.id, hovered_now, focused_now),
                    fade: fade_class(state.marker.phase()),
                    pointer_mounted: state.pointer.is_mounted(),
                    pointer_active: state.pointer.is_shown(),
                })
            })
            .collect();
        let popup = focused_now
            .and_then(|id| listings_now.iter().find(|l| l.id == id).cloned())
            .map(|listing| {
                let (px, py) = geo::lng_lat_to_px(listing.coords[0], listing.coords[1]);
                (
                    listing,
                    px / geo::MAP_WIDTH_PX * 100.0,
                    py / geo::MAP_HEIGHT_PX * 100.0,
                )
            });
        (markers, popup)
    };

    // Viewport readout (center + zoom)
    let (center_lng, center_lat) = match coords::container_rect(MAP_CONTAINER_ID) {
        Some(rect) => {
            viewport::visible_center(cur_pan_x, cur_pan_y, cur_scale, rect.width(), rect.height())
        }
        None => (geo::DEFAULT_CENTER[0], geo::DEFAULT_CENTER[1]),
    };

    let transform_style = format!(
        "transform: translate({cur_pan_x}px, {cur_pan_y}px) scale({cur_scale}); transform-origin: 0 0;"
    );
    let container_class = if dragging {
        "map-container dragging"
    } else {
        "map-container"
    };

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "{container_class}",

            onwheel: move |evt: Event<WheelData>| {
                wheel_zoom(evt, MAP_CONTAINER_ID, &mut zoom, &mut pan_x, &mut pan_y);
            },

            onmousedown: move |evt: Event<MouseData>| {
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let client = evt.client_coordinates();
                is_dragging.set(true);
                did_drag.set(false);
                drag_start_x.set(client.x);
                drag_start_y.set(client.y);
                drag_start_pan_x.set(*pan_x.read());
                drag_start_pan_y.set(*pan_y.read());
            },

            onmousemove: move |evt: Event<MouseData>| {
                if !*is_dragging.read() {
                    return;
                }
                let client = evt.client_coordinates();
                let dx = client.x - *drag_start_x.read();
                let dy = client.y - *drag_start_y.read();

                if !*did_drag.read() && interaction::exceeds_drag_threshold(dx, dy) {
                    did_drag.set(true);
                }
                if *did_drag.read() {
                    let new_px = *drag_start_pan_x.read() + dx;
                    let new_py = *drag_start_pan_y.read() + dy;
                    let scale = geo::zoom_to_scale(*zoom.read());
                    let (px, py) = match coords::container_rect(MAP_CONTAINER_ID) {
                        Some(rect) => viewport::clamp_pan(new_px, new_py, scale, rect.width(), rect.height()),
                        None => (new_px, new_py),
                    };
                    pan_x.set(px);
                    pan_y.set(py);
                }
            },

            // A mouse-up that never exceeded the drag threshold is a click;
            // a click outside the open popup dismisses it. Drags never do,
            // so panning while a popup is open leaves it alone.
            onmouseup: move |evt: Event<MouseData>| {
                let was_dragging = *is_dragging.read();
                let was_drag = *did_drag.read();
                is_dragging.set(false);

                if !was_dragging {
                    return;
                }
                let popup_open = focused.read().is_some();
                let client = evt.client_coordinates();
                let inside = popup_rect()
                    .map(|r| {
                        interaction::point_in_rect(
                            client.x, client.y,
                            r.left(), r.top(), r.right(), r.bottom(),
                        )
                    })
                    .unwrap_or(false);
                if interaction::dismisses_popup(popup_open, was_drag, inside) {
                    focused.set(None);
                    hovered.set(None);
                }
            },

            onmouseleave: move |_| {
                is_dragging.set(false);
            },

            ondoubleclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                zoom.set(geo::BROWSE_ZOOM);
                centered.set(false);
            },

            // Basemap + markers + popup share one transform so they pan and
            // zoom together; markers and popup counter-scale to keep their
            // on-screen size.
            div {
                class: "map-inner",
                style: "{transform_style}",

                img { src: BASEMAP, draggable: "false" }

                for m in markers {
                    div {
                        class: "marker-container{m.fade}",
                        style: "left:{m.x_pct}%;top:{m.y_pct}%;transform:translate(-50%, -50%) scale({inv_scale});",

                        onmouseenter: move |_| {
                            hovered.set(Some(m.id));
                        },
                        onmouseleave: move |_| {
                            let next = interaction::hover_after_leave(
                                m.id, *hovered.read(), *focused.read(),
                            );
                            hovered.set(next);
                        },
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            focused.set(Some(m.id));
                            hovered.set(Some(m.id));
                        },

                        if m.active {
                            div { class: "marker-ripple" }
                        }
                        div {
                            class: if m.active { "marker-dot expanded" } else { "marker-dot" },
                        }
                        if m.pointer_mounted {
                            div {
                                class: if m.pointer_active { "marker-pointer active" } else { "marker-pointer inactive" },
                                img { src: crate::components::BANNER, alt: "Billboard" }
                            }
                        }
                    }
                }

                if let Some((listing, x_pct, y_pct)) = popup {
                    ListingPopup {
                        listing,
                        x_pct,
                        y_pct,
                        inv_scale,
                        on_close: move |_| {
                            focused.set(None);
                            hovered.set(None);
                        },
                    }
                }
            }

            // Navigation control (outside the transform so it stays fixed)
            div { class: "zoom-control",
                button {
                    onclick: move |_| {
                        zoom_about_center(
                            viewport::ZOOM_STEP_LEVELS, MAP_CONTAINER_ID,
                            &mut zoom, &mut pan_x, &mut pan_y,
                        );
                    },
                    "+"
                }
                button {
                    onclick: move |_| {
                        zoom_about_center(
                            -viewport::ZOOM_STEP_LEVELS, MAP_CONTAINER_ID,
                            &mut zoom, &mut pan_x, &mut pan_y,
                        );
                    },
                    "−"
                }
            }

            div { class: "coord-readout",
                span { class: "coord-tag",
                    {format!("{center_lng:.4}, {center_lat:.4} · z{cur_zoom:.1}")}
                }
            }
        }
    }
}
