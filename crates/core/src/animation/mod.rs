use kurbo::{Point, Vec2};

use crate::object::{Color, ObjectId};

/// Interpolation curve applied across an animation's run time. The actual
/// easing mathematics live in the rendering engine; the script only declares
/// which curve it wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    /// Ease in and out (the engine's default smoothing).
    #[default]
    Smooth,
    Linear,
}

/// A single animation verb aimed at one staged object.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fade the target in, optionally drifting it by `shift` while it appears.
    FadeIn { shift: Vec2 },
    /// Fade the target out. The engine removes it from the canvas once the
    /// fade completes.
    FadeOut,
    /// Draw the target on progressively (strokes first, then fill).
    Create,
    /// Uniformly scale the target about its own anchor.
    ScaleBy(f64),
    /// Move the target's anchor to an absolute position.
    MoveTo(Point),
    /// Interpolate the target's fill toward a color and opacity.
    FillTo { color: Color, opacity: f64 },
}

/// One animation command inside a `play` batch.
///
/// Every member of a batch runs concurrently under the batch's shared run
/// time; a member may declare its own shorter `run_time` (the original
/// title fade-out runs at half the rewind duration, for example) but can
/// never extend the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub target: ObjectId,
    pub effect: Effect,
    /// Optional per-command run time, in seconds. `None` means the batch's
    /// shared duration.
    pub run_time: Option<f64>,
    pub curve: Curve,
}

impl Animation {
    fn new(target: ObjectId, effect: Effect) -> Self {
        Self {
            target,
            effect,
            run_time: None,
            curve: Curve::default(),
        }
    }

    pub fn fade_in(target: ObjectId) -> Self {
        Self::new(target, Effect::FadeIn { shift: Vec2::ZERO })
    }

    /// Fade in while drifting by `shift` (e.g. a title easing upward).
    pub fn fade_in_shifted(target: ObjectId, shift: Vec2) -> Self {
        Self::new(target, Effect::FadeIn { shift })
    }

    pub fn fade_out(target: ObjectId) -> Self {
        Self::new(target, Effect::FadeOut)
    }

    pub fn create(target: ObjectId) -> Self {
        Self::new(target, Effect::Create)
    }

    pub fn scale_by(target: ObjectId, factor: f64) -> Self {
        Self::new(target, Effect::ScaleBy(factor))
    }

    pub fn move_to(target: ObjectId, position: Point) -> Self {
        Self::new(target, Effect::MoveTo(position))
    }

    pub fn fill_to(target: ObjectId, color: Color, opacity: f64) -> Self {
        Self::new(target, Effect::FillTo { color, opacity })
    }

    /// Overrides the run time for this command only.
    pub fn over(mut self, run_time: f64) -> Self {
        self.run_time = Some(run_time);
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_default_to_shared_run_time_and_smooth_curve() {
        let anim = Animation::fade_in(ObjectId(3));
        assert_eq!(anim.run_time, None);
        assert_eq!(anim.curve, Curve::Smooth);

        let anim = Animation::fade_out(ObjectId(3)).over(5.0).with_curve(Curve::Linear);
        assert_eq!(anim.run_time, Some(5.0));
        assert_eq!(anim.curve, Curve::Linear);
    }
}
