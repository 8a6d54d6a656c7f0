/// Zoom-dependent marker visibility tiers.
///
/// A coarse level-of-detail policy over load-order rank: zoomed far out only
/// the first few listings get markers, zooming in reveals the rest. Rank is
/// the listing's 1-based position in the loaded sequence. This is a
/// placeholder tiering, not a ranking algorithm; it carries no meaning if the
/// sequence is reordered.
/// Below this zoom only `LOW_ZOOM_RANKS` markers render.
pub const LOW_ZOOM_CUTOFF: f64 = 10.0;
/// Below this zoom (and at/above `LOW_ZOOM_CUTOFF`) `MID_ZOOM_RANKS` render.
pub const MID_ZOOM_CUTOFF: f64 = 12.0;

pub const LOW_ZOOM_RANKS: usize = 3;
pub const MID_ZOOM_RANKS: usize = 6;

/// Whether the marker at 1-based `rank` is permitted to render at `zoom`.
pub fn policy_visible(rank: usize, zoom: f64) -> bool {
    if zoom < LOW_ZOOM_CUTOFF {
        rank <= LOW_ZOOM_RANKS
    } else if zoom < MID_ZOOM_CUTOFF {
        rank <= MID_ZOOM_RANKS
    } else {
        true
    }
}

/// Number of policy-visible markers out of `total` listings at `zoom`.
pub fn visible_count(total: usize, zoom: f64) -> usize {
    (1..=total).filter(|&rank| policy_visible(rank, zoom)).count()
}
