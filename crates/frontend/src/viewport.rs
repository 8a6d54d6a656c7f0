use bookadzone_shared::geo;
use dioxus::html::geometry::WheelDelta;

/// Zoom levels added/removed per wheel notch or navigation-control click.
pub const ZOOM_STEP_LEVELS: f64 = 0.25;

/// Compute new pan offsets so that `cursor` stays over the same content
/// point when the CSS scale changes from `old_scale` to `new_scale`.
pub fn zoom_pan_at_cursor(
    cursor_x: f64,
    cursor_y: f64,
    old_scale: f64,
    new_scale: f64,
    old_pan_x: f64,
    old_pan_y: f64,
) -> (f64, f64) {
    let content_x = (cursor_x - old_pan_x) / old_scale;
    let content_y = (cursor_y - old_pan_y) / old_scale;
    (
        cursor_x - content_x * new_scale,
        cursor_y - content_y * new_scale,
    )
}

/// Clamp pan values so the basemap can't be dragged off-screen.
///
/// The basemap renders at `width: 100%` of the container, so its rendered
/// height is `container_w * (MAP_HEIGHT_PX / MAP_WIDTH_PX)`, which may exceed
/// the container height.
pub fn clamp_pan(
    pan_x: f64,
    pan_y: f64,
    scale: f64,
    container_w: f64,
    container_h: f64,
) -> (f64, f64) {
    let content_w = container_w * scale;
    let content_h = container_w * (geo::MAP_HEIGHT_PX / geo::MAP_WIDTH_PX) * scale;
    let min_pan_x = -(content_w - container_w).max(0.0);
    let min_pan_y = -(content_h - container_h).max(0.0);
    (pan_x.clamp(min_pan_x, 0.0), pan_y.clamp(min_pan_y, 0.0))
}

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
pub fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Pan offsets that place the given basemap pixel at the container center.
pub fn center_pan(
    center_px_x: f64,
    center_px_y: f64,
    scale: f64,
    container_w: f64,
    container_h: f64,
) -> (f64, f64) {
    // Rendered px per basemap px at this container width
    let k = container_w / geo::MAP_WIDTH_PX;
    let pan_x = container_w / 2.0 - center_px_x * k * scale;
    let pan_y = container_h / 2.0 - center_px_y * k * scale;
    clamp_pan(pan_x, pan_y, scale, container_w, container_h)
}

/// The lng/lat currently under the container center, for the viewport
/// readout.
pub fn visible_center(
    pan_x: f64,
    pan_y: f64,
    scale: f64,
    container_w: f64,
    container_h: f64,
) -> (f64, f64) {
    let k = geo::MAP_WIDTH_PX / container_w;
    let img_x = (container_w / 2.0 - pan_x) / scale * k;
    let img_y = (container_h / 2.0 - pan_y) / scale * k;
    geo::px_to_lng_lat(img_x, img_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_pan_at_cursor_keeps_point_fixed() {
        // Content point under the cursor before and after must coincide
        let (cursor_x, cursor_y) = (300.0, 200.0);
        let (old_scale, new_scale) = (1.0, 2.0);
        let (old_pan_x, old_pan_y) = (-50.0, -20.0);
        let (new_pan_x, new_pan_y) =
            zoom_pan_at_cursor(cursor_x, cursor_y, old_scale, new_scale, old_pan_x, old_pan_y);
        let before = ((cursor_x - old_pan_x) / old_scale, (cursor_y - old_pan_y) / old_scale);
        let after = ((cursor_x - new_pan_x) / new_scale, (cursor_y - new_pan_y) / new_scale);
        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_pan_prevents_positive_pan() {
        let (px, py) = clamp_pan(50.0, 50.0, 1.0, 800.0, 600.0);
        assert!((px - 0.0).abs() < 0.01);
        assert!((py - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_clamp_pan_limits_negative_pan() {
        // At scale 2 an 800px container has 800px of horizontal slack
        let (px, _) = clamp_pan(-2000.0, 0.0, 2.0, 800.0, 600.0);
        assert!((px - (-800.0)).abs() < 0.01);
    }

    #[test]
    fn test_clamp_pan_no_slack_at_base_scale() {
        // Container matches the content width: no horizontal panning
        let (px, _) = clamp_pan(-10.0, 0.0, 1.0, 800.0, 600.0);
        assert!((px - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_center_pan_roundtrips_through_visible_center() {
        let (cw, ch) = (960.0, 720.0);
        let scale = geo::zoom_to_scale(geo::BROWSE_ZOOM);
        let (cx, cy) = geo::lng_lat_to_px(geo::DEFAULT_CENTER[0], geo::DEFAULT_CENTER[1]);
        let (pan_x, pan_y) = center_pan(cx, cy, scale, cw, ch);
        let (lng, lat) = visible_center(pan_x, pan_y, scale, cw, ch);
        assert!((lng - geo::DEFAULT_CENTER[0]).abs() < 1e-6);
        assert!((lat - geo::DEFAULT_CENTER[1]).abs() < 1e-6);
    }

    #[test]
    fn test_visible_center_at_origin_pan() {
        // Pan 0 / scale 1: container center sits at the proportional image point
        let (lng, lat) = visible_center(0.0, 0.0, 1.0, 1024.0, 1050.0);
        let (exp_lng, exp_lat) = geo::px_to_lng_lat(512.0, 525.0);
        assert!((lng - exp_lng).abs() < 1e-9);
        assert!((lat - exp_lat).abs() < 1e-9);
    }
}
