pub mod listing_map;
pub mod listing_popup;
pub mod picker_map;

use bookadzone_shared::geo;
use dioxus::prelude::*;

use crate::{coords, viewport};

/// Bundled Chennai basemap. Stands in for the hosted map-style resource of
/// the original deployment; panned/zoomed with a CSS transform.
pub const BASEMAP: Asset = asset!("/assets/basemap.svg");

/// Billboard artwork for pointer previews and popup cards. Listing records
/// carry an image reference, but the bundled mock is the only artwork
/// shipped, so rendering always resolves to it.
pub const BANNER: Asset = asset!("/assets/banner-mock.svg");

/// Cursor-anchored wheel zoom, shared by the browse map and the picker.
pub fn wheel_zoom(
    evt: Event<WheelData>,
    container_id: &str,
    zoom: &mut Signal<f64>,
    pan_x: &mut Signal<f64>,
    pan_y: &mut Signal<f64>,
) {
    evt.prevent_default();

    let delta_y = viewport::wheel_delta_y(evt.data().delta());
    let levels = if delta_y < 0.0 {
        viewport::ZOOM_STEP_LEVELS
    } else {
        -viewport::ZOOM_STEP_LEVELS
    };
    let old_zoom = *zoom.read();
    let new_zoom = geo::clamp_zoom(old_zoom + levels);
    if (new_zoom - old_zoom).abs() < 1e-9 {
        return;
    }

    let Some(rect) = coords::container_rect(container_id) else {
        return;
    };
    let client = evt.data().client_coordinates();
    let cx = client.x - rect.left();
    let cy = client.y - rect.top();

    let new_scale = geo::zoom_to_scale(new_zoom);
    let (new_px, new_py) = viewport::zoom_pan_at_cursor(
        cx,
        cy,
        geo::zoom_to_scale(old_zoom),
        new_scale,
        *pan_x.read(),
        *pan_y.read(),
    );
    let (px, py) = viewport::clamp_pan(new_px, new_py, new_scale, rect.width(), rect.height());

    zoom.set(new_zoom);
    pan_x.set(px);
    pan_y.set(py);
}

/// Step the zoom by `levels` (navigation-control buttons), keeping the
/// container center anchored.
pub fn zoom_about_center(
    levels: f64,
    container_id: &str,
    zoom: &mut Signal<f64>,
    pan_x: &mut Signal<f64>,
    pan_y: &mut Signal<f64>,
) {
    let old_zoom = *zoom.read();
    let new_zoom = geo::clamp_zoom(old_zoom + levels);
    if (new_zoom - old_zoom).abs() < 1e-9 {
        return;
    }
    let Some(rect) = coords::container_rect(container_id) else {
        zoom.set(new_zoom);
        return;
    };

    let new_scale = geo::zoom_to_scale(new_zoom);
    let (new_px, new_py) = viewport::zoom_pan_at_cursor(
        rect.width() / 2.0,
        rect.height() / 2.0,
        geo::zoom_to_scale(old_zoom),
        new_scale,
        *pan_x.read(),
        *pan_y.read(),
    );
    let (px, py) = viewport::clamp_pan(new_px, new_py, new_scale, rect.width(), rect.height());

    zoom.set(new_zoom);
    pan_x.set(px);
    pan_y.set(py);
}
