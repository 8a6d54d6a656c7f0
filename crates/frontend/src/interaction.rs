use bookadzone_shared::fade::Fade;

/// Movement below this many pixels is treated as a click, not a drag.
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Transient UI state of one listing, kept in a single ordered Vec parallel
/// to the listing sequence. `marker` gates whether the map glyph is mounted;
/// `pointer` gates the hover preview image. Ripple and dot expansion derive
/// directly from [`is_active`] with no debounce.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListingUi {
    pub marker: Fade,
    pub pointer: Fade,
}

/// A listing renders its active visuals when hovered or focused.
pub fn is_active(id: u32, hovered: Option<u32>, focused: Option<u32>) -> bool {
    hovered == Some(id) || focused == Some(id)
}

/// Hover state after the pointer leaves `id`'s marker. Focus pins the
/// hover-equivalent visuals, so leaving the focused listing changes nothing.
pub fn hover_after_leave(id: u32, hovered: Option<u32>, focused: Option<u32>) -> Option<u32> {
    if hovered == Some(id) && focused != Some(id) {
        None
    } else {
        hovered
    }
}

/// Whether a gesture counts as a drag once the pointer has moved
/// `(dx, dy)` from the mouse-down point.
pub fn exceeds_drag_threshold(dx: f64, dy: f64) -> bool {
    dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD
}

/// Whether a mouse-up on the map surface dismisses the open popup. A drag
/// never dismisses, no matter where it ends; a plain click dismisses only
/// when it lands outside the popup bounds.
pub fn dismisses_popup(popup_open: bool, was_drag: bool, inside_popup: bool) -> bool {
    popup_open && !was_drag && !inside_popup
}

/// Client-coordinate point-in-rect test against a popup's bounding rect.
pub fn point_in_rect(x: f64, y: f64, left: f64, top: f64, right: f64, bottom: f64) -> bool {
    x >= left && x <= right && y >= top && y <= bottom
}
