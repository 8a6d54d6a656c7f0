use bookadzone_shared::geo;

/// Get the bounding client rect of a container element by id. `None` when
/// the element isn't mounted — callers no-op rather than erroring.
pub fn container_rect(container_id: &str) -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    Some(element.get_bounding_client_rect())
}

/// Pure function: convert container-relative coordinates to native basemap
/// pixels, undoing the zoom/pan CSS transform. Usable in unit tests.
///
/// Only `container_w` is needed because the basemap renders with
/// `width:100%; height:auto`, so both axes share the same scale factor.
pub fn client_to_map_px(
    container_x: f64,
    container_y: f64,
    container_w: f64,
    scale: f64,
    pan_x: f64,
    pan_y: f64,
) -> Option<(f64, f64)> {
    if container_w <= 0.0 || scale <= 0.0 {
        return None;
    }

    // Undo CSS transform: translate(pan_x, pan_y) scale(scale)
    let rendered_x = (container_x - pan_x) / scale;
    let rendered_y = (container_y - pan_y) / scale;

    let k = geo::MAP_WIDTH_PX / container_w;
    let img_x = (rendered_x * k).clamp(0.0, geo::MAP_WIDTH_PX);
    let img_y = (rendered_y * k).clamp(0.0, geo::MAP_HEIGHT_PX);

    Some((img_x, img_y))
}

/// Client (viewport) coordinates to basemap pixels via the live container
/// rect.
pub fn click_to_map_px(
    client_x: f64,
    client_y: f64,
    container_id: &str,
    scale: f64,
    pan_x: f64,
    pan_y: f64,
) -> Option<(f64, f64)> {
    let rect = container_rect(container_id)?;
    let container_x = client_x - rect.left();
    let container_y = client_y - rect.top();
    client_to_map_px(container_x, container_y, rect.width(), scale, pan_x, pan_y)
}

/// Client coordinates straight to a lng/lat pair (picker clicks).
pub fn click_to_lng_lat(
    client_x: f64,
    client_y: f64,
    container_id: &str,
    scale: f64,
    pan_x: f64,
    pan_y: f64,
) -> Option<(f64, f64)> {
    let (px_x, px_y) = click_to_map_px(client_x, client_y, container_id, scale, pan_x, pan_y)?;
    Some(geo::px_to_lng_lat(px_x, px_y))
}
