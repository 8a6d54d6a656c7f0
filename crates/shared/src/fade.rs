/// Fade transitions for markers and pointer previews.
///
/// Each fading element owns a `Fade`. Driving code calls `set_target` when
/// the desired visibility changes; a returned generation token means a timer
/// for `FADE_MS` must be armed, and `finish` is called when it fires. A later
/// `set_target` simply supersedes the pending transition — the old timer
/// still fires but its stale generation makes `finish` a no-op, so in-flight
/// timers never have to be cancelled.
/// Fade duration in milliseconds.
pub const FADE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    FadingIn,
    Visible,
    FadingOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fade {
    phase: Phase,
    generation: u64,
}

impl Fade {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mounted means the element must stay in the DOM — through `FadingOut`
    /// so the exit transition can play. It unmounts only once `Hidden`.
    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Shown means the element renders at (or is transitioning to) full
    /// opacity.
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, Phase::FadingIn | Phase::Visible)
    }

    /// Drive toward the given visibility. Returns the generation of a newly
    /// started transition when a completion timer must be armed, `None` when
    /// the fade is already at or heading toward the target.
    pub fn set_target(&mut self, visible: bool) -> Option<u64> {
        let next = match (self.phase, visible) {
            (Phase::Hidden | Phase::FadingOut, true) => Phase::FadingIn,
            (Phase::Visible | Phase::FadingIn, false) => Phase::FadingOut,
            _ => return None,
        };
        self.phase = next;
        self.generation += 1;
        Some(self.generation)
    }

    /// Complete the transition armed as `generation`. Stale generations
    /// (superseded by a later `set_target`) are ignored.
    pub fn finish(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.phase = match self.phase {
            Phase::FadingIn => Phase::Visible,
            Phase::FadingOut => Phase::Hidden,
            settled => settled,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_then_settle() {
        let mut fade = Fade::default();
        assert!(!fade.is_mounted());
        let gen = fade.set_target(true).unwrap();
        assert_eq!(fade.phase(), Phase::FadingIn);
        assert!(fade.is_mounted());
        assert!(fade.is_shown());
        fade.finish(gen);
        assert_eq!(fade.phase(), Phase::Visible);
    }

    #[test]
    fn test_fade_out_keeps_mounted_until_finish() {
        let mut fade = Fade::default();
        let gen = fade.set_target(true).unwrap();
        fade.finish(gen);
        let gen = fade.set_target(false).unwrap();
        assert_eq!(fade.phase(), Phase::FadingOut);
        assert!(fade.is_mounted());
        assert!(!fade.is_shown());
        fade.finish(gen);
        assert!(!fade.is_mounted());
    }

    #[test]
    fn test_redundant_target_is_noop() {
        let mut fade = Fade::default();
        assert_eq!(fade.set_target(false), None);
        let gen = fade.set_target(true).unwrap();
        // Already heading toward visible
        assert_eq!(fade.set_target(true), None);
        fade.finish(gen);
        assert_eq!(fade.set_target(true), None);
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut fade = Fade::default();
        let gen_in = fade.set_target(true).unwrap();
        // Reversed before the fade-in timer fires
        let gen_out = fade.set_target(false).unwrap();
        assert_ne!(gen_in, gen_out);
        fade.finish(gen_in);
        assert_eq!(fade.phase(), Phase::FadingOut, "stale timer must not settle");
        fade.finish(gen_out);
        assert_eq!(fade.phase(), Phase::Hidden);
    }

    #[test]
    fn test_reverse_mid_fade_rearms() {
        let mut fade = Fade::default();
        let _ = fade.set_target(true).unwrap();
        let gen_out = fade.set_target(false).unwrap();
        let gen_in = fade.set_target(true).unwrap();
        fade.finish(gen_out);
        assert_eq!(fade.phase(), Phase::FadingIn);
        fade.finish(gen_in);
        assert_eq!(fade.phase(), Phase::Visible);
    }
}
