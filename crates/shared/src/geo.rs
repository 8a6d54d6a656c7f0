/// Basemap geometry.
///
/// The basemap is a fixed image of the Chennai area. Listing coordinates are
/// longitude/latitude pairs mapped linearly onto the image; at city scale the
/// error against a true projection is well under a pixel.
// Geographic extent of the basemap image
pub const MAP_WEST: f64 = 80.05;
pub const MAP_EAST: f64 = 80.35;
pub const MAP_SOUTH: f64 = 12.82;
pub const MAP_NORTH: f64 = 13.12;

// Native basemap image dimensions in pixels
pub const MAP_WIDTH_PX: f64 = 1024.0;
pub const MAP_HEIGHT_PX: f64 = 1050.0;

// Zoom is expressed in web-map zoom levels. At BASE_ZOOM the basemap renders
// at its container width (CSS scale 1.0); each level doubles the scale.
pub const BASE_ZOOM: f64 = 11.0;
pub const ZOOM_MIN: f64 = 9.0;
pub const ZOOM_MAX: f64 = 16.0;

/// Default map center (lng, lat) for both views.
pub const DEFAULT_CENTER: [f64; 2] = [80.209, 12.917];
/// Initial zoom of the browse view.
pub const BROWSE_ZOOM: f64 = 13.0;
/// Initial zoom of the add-listing coordinate picker.
pub const PICKER_ZOOM: f64 = 11.0;

/// Convert a lng/lat pair to native basemap pixel coordinates, clamped to the
/// image bounds.
pub fn lng_lat_to_px(lng: f64, lat: f64) -> (f64, f64) {
    let x = (lng - MAP_WEST) / (MAP_EAST - MAP_WEST) * MAP_WIDTH_PX;
    let y = (MAP_NORTH - lat) / (MAP_NORTH - MAP_SOUTH) * MAP_HEIGHT_PX;
    (x.clamp(0.0, MAP_WIDTH_PX), y.clamp(0.0, MAP_HEIGHT_PX))
}

/// Convert native basemap pixel coordinates back to lng/lat.
pub fn px_to_lng_lat(px_x: f64, px_y: f64) -> (f64, f64) {
    let lng = MAP_WEST + px_x / MAP_WIDTH_PX * (MAP_EAST - MAP_WEST);
    let lat = MAP_NORTH - px_y / MAP_HEIGHT_PX * (MAP_NORTH - MAP_SOUTH);
    (lng, lat)
}

/// CSS scale factor for a zoom level.
pub fn zoom_to_scale(zoom: f64) -> f64 {
    (zoom - BASE_ZOOM).exp2()
}

/// Clamp a zoom level to the supported range.
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lng_lat_to_px_corners() {
        let (x, y) = lng_lat_to_px(MAP_WEST, MAP_NORTH);
        assert!((x - 0.0).abs() < 1e-9);
        assert!((y - 0.0).abs() < 1e-9);
        let (x, y) = lng_lat_to_px(MAP_EAST, MAP_SOUTH);
        assert!((x - MAP_WIDTH_PX).abs() < 1e-9);
        assert!((y - MAP_HEIGHT_PX).abs() < 1e-9);
    }

    #[test]
    fn test_px_roundtrip() {
        let (x, y) = lng_lat_to_px(80.209, 12.917);
        let (lng, lat) = px_to_lng_lat(x, y);
        assert!((lng - 80.209).abs() < 1e-9);
        assert!((lat - 12.917).abs() < 1e-9);
    }

    #[test]
    fn test_lng_lat_to_px_clamps_outside_extent() {
        let (x, y) = lng_lat_to_px(79.0, 14.0);
        assert!((x - 0.0).abs() < 1e-9);
        assert!((y - 0.0).abs() < 1e-9);
        let (x, y) = lng_lat_to_px(81.0, 12.0);
        assert!((x - MAP_WIDTH_PX).abs() < 1e-9);
        assert!((y - MAP_HEIGHT_PX).abs() < 1e-9);
    }

    #[test]
    fn test_default_center_inside_extent() {
        let [lng, lat] = DEFAULT_CENTER;
        let (x, y) = lng_lat_to_px(lng, lat);
        assert!(x > 0.0 && x < MAP_WIDTH_PX);
        assert!(y > 0.0 && y < MAP_HEIGHT_PX);
    }

    #[test]
    fn test_zoom_to_scale() {
        assert!((zoom_to_scale(BASE_ZOOM) - 1.0).abs() < 1e-9);
        assert!((zoom_to_scale(BASE_ZOOM + 1.0) - 2.0).abs() < 1e-9);
        assert!((zoom_to_scale(BASE_ZOOM - 1.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_zoom() {
        assert!((clamp_zoom(5.0) - ZOOM_MIN).abs() < 1e-9);
        assert!((clamp_zoom(20.0) - ZOOM_MAX).abs() < 1e-9);
        assert!((clamp_zoom(13.0) - 13.0).abs() < 1e-9);
    }
}
