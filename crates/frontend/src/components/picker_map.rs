use bookadzone_shared::geo;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use crate::components::{wheel_zoom, zoom_about_center, BASEMAP};
use crate::{coords, interaction, viewport};

const PICKER_CONTAINER_ID: &str = "picker-map-container";

/// Coordinate picker for the add-listing form: the same pan/zoom surface as
/// the browse map, where a plain click (not a drag) drops the picker dot and
/// records the lng/lat pair.
#[component]
pub fn PickerMap(position: Signal<[f64; 2]>) -> Element {
    let mut position = position;

    let mut zoom = use_signal(|| geo::PICKER_ZOOM);
    let mut pan_x = use_signal(|| 0.0_f64);
    let mut pan_y = use_signal(|| 0.0_f64);

    let mut is_dragging = use_signal(|| false);
    let mut did_drag = use_signal(|| false);
    let mut drag_start_x = use_signal(|| 0.0_f64);
    let mut drag_start_y = use_signal(|| 0.0_f64);
    let mut drag_start_pan_x = use_signal(|| 0.0_f64);
    let mut drag_start_pan_y = use_signal(|| 0.0_f64);

    let mut centered = use_signal(|| false);
    use_effect(move || {
        if *centered.read() {
            return;
        }
        let Some(rect) = coords::container_rect(PICKER_CONTAINER_ID) else {
            return;
        };
        let scale = geo::zoom_to_scale(*zoom.peek());
        let (cx, cy) = geo::lng_lat_to_px(geo::DEFAULT_CENTER[0], geo::DEFAULT_CENTER[1]);
        let (px, py) = viewport::center_pan(cx, cy, scale, rect.width(), rect.height());
        pan_x.set(px);
        pan_y.set(py);
        centered.set(true);
    });

    let cur_scale = geo::zoom_to_scale(*zoom.read());
    let cur_pan_x = *pan_x.read();
    let cur_pan_y = *pan_y.read();
    let inv_scale = 1.0 / cur_scale;

    let [lng, lat] = *position.read();
    let (px, py) = geo::lng_lat_to_px(lng, lat);
    let x_pct = px / geo::MAP_WIDTH_PX * 100.0;
    let y_pct = py / geo::MAP_HEIGHT_PX * 100.0;

    let transform_style = format!(
        "transform: translate({cur_pan_x}px, {cur_pan_y}px) scale({cur_scale}); transform-origin: 0 0;"
    );
    let container_class = if *is_dragging.read() {
        "map-container picker dragging"
    } else {
        "map-container picker"
    };

    rsx! {
        div {
            id: PICKER_CONTAINER_ID,
            class: "{container_class}",

            onwheel: move |evt: Event<WheelData>| {
                wheel_zoom(evt, PICKER_CONTAINER_ID, &mut zoom, &mut pan_x, &mut pan_y);
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
                    let (px, py) = match coords::container_rect(PICKER_CONTAINER_ID) {
                        Some(rect) => viewport::clamp_pan(new_px, new_py, scale, rect.width(), rect.height()),
                        None => (new_px, new_py),
                    };
                    pan_x.set(px);
                    pan_y.set(py);
                }
            },

            onmouseup: move |evt: Event<MouseData>| {
                let was_dragging = *is_dragging.read();
                let was_drag = *did_drag.read();
                is_dragging.set(false);

                if !was_dragging || was_drag {
                    return;
                }
                let client = evt.client_coordinates();
                if let Some((lng, lat)) = coords::click_to_lng_lat(
                    client.x, client.y, PICKER_CONTAINER_ID,
                    geo::zoom_to_scale(*zoom.read()), *pan_x.read(), *pan_y.read(),
                ) {
                    position.set([lng, lat]);
                }
            },

            onmouseleave: move |_| {
                is_dragging.set(false);
            },

            div {
                class: "map-inner",
                style: "{transform_style}",

                img { src: BASEMAP, draggable: "false" }

                div {
                    class: "marker-dot-picker",
                    style: "left:{x_pct}%;top:{y_pct}%;transform:translate(-50%, -50%) scale({inv_scale});",
                }
            }

            div { class: "zoom-control",
                button {
                    onclick: move |_| {
                        zoom_about_center(
                            viewport::ZOOM_STEP_LEVELS, PICKER_CONTAINER_ID,
                            &mut zoom, &mut pan_x, &mut pan_y,
                        );
                    },
                    "+"
                }
                button {
                    onclick: move |_| {
                        zoom_about_center(
                            -viewport::ZOOM_STEP_LEVELS, PICKER_CONTAINER_ID,
                            &mut zoom, &mut pan_x, &mut pan_y,
                        );
                    },
                    "−"
                }
            }
        }
    }
}
