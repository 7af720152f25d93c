use std::collections::BTreeMap;

use crate::animation::{Animation, Effect};
use crate::object::{Color, ObjectId, Primitive};
use crate::{ProtonLifeError, Result};

/// Canvas/timeline handle through which beats build objects and issue timed
/// animation commands.
///
/// This is the seam to the external rendering engine: [`TimelineStage`]
/// implements it for offline dry runs, test doubles implement it to record
/// the script, and a real engine adapter plugs in behind the same surface.
/// Beats never touch anything outside the stage they are handed.
pub trait Stage {
    /// Sets the canvas background color. Each beat sets this on entry rather
    /// than assuming what the previous beat left behind.
    fn set_background(&mut self, color: Color);

    /// Registers a primitive with the canvas and returns its handle. The
    /// object starts at the opacity it was constructed with; entrance
    /// animations (fades, creates) are issued separately.
    fn add(&mut self, primitive: Primitive) -> ObjectId;

    /// Removes an object outright, without an exit animation. Removing an id
    /// that is no longer on the stage is a no-op.
    fn remove(&mut self, id: ObjectId);

    /// Plays a batch of animation commands concurrently over `run_time`
    /// seconds, blocking (from the script's point of view) until the batch
    /// completes. Individual members may declare a shorter run time but
    /// never a longer one.
    fn play(&mut self, batch: &[Animation], run_time: f64) -> Result<()>;

    /// Holds the current frame for `seconds`.
    fn wait(&mut self, seconds: f64) -> Result<()>;

    /// Number of objects currently on the stage.
    fn object_count(&self) -> usize;

    /// Seconds of timeline consumed so far by plays and waits.
    fn elapsed(&self) -> f64;
}

#[derive(Debug)]
struct Staged {
    primitive: Primitive,
    opacity: f64,
    scale: f64,
}

/// Default [`Stage`] implementation.
///
/// Keeps the object registry, background color and a playhead clock, applies
/// each command's end state, and logs the script instead of rasterising it.
/// Rendering proper stays on the engine side of the seam; this is enough to
/// validate a script and measure its total duration offline.
#[derive(Debug, Default)]
pub struct TimelineStage {
    background: Option<Color>,
    objects: BTreeMap<ObjectId, Staged>,
    next_id: u64,
    clock: f64,
}

impl TimelineStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Background color most recently set by a beat, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Current end state of an object, if it is still on the stage.
    pub fn primitive(&self, id: ObjectId) -> Option<&Primitive> {
        self.objects.get(&id).map(|staged| &staged.primitive)
    }

    /// Current opacity of an object, if it is still on the stage.
    pub fn opacity(&self, id: ObjectId) -> Option<f64> {
        self.objects.get(&id).map(|staged| staged.opacity)
    }

    /// Accumulated scale factor of an object, if it is still on the stage.
    pub fn scale(&self, id: ObjectId) -> Option<f64> {
        self.objects.get(&id).map(|staged| staged.scale)
    }

    fn apply(&mut self, animation: &Animation) -> Result<()> {
        let staged = self
            .objects
            .get_mut(&animation.target)
            .ok_or(ProtonLifeError::UnknownObject(animation.target))?;

        match &animation.effect {
            // A fade-in (and a create) ends at the opacity the object was
            // constructed with; the drift of a shifted fade-in ends at the
            // declared position, so there is no positional end state to apply.
            Effect::FadeIn { .. } | Effect::Create => {
                staged.opacity = staged.primitive.initial_opacity();
            }
            Effect::FadeOut => {
                self.objects.remove(&animation.target);
            }
            Effect::ScaleBy(factor) => {
                staged.scale *= factor;
            }
            Effect::MoveTo(position) => {
                staged.primitive.move_to(*position);
            }
            Effect::FillTo { color, opacity } => {
                staged.primitive.set_fill(*color, *opacity);
                staged.opacity = *opacity;
            }
        }
        Ok(())
    }
}

impl Stage for TimelineStage {
    fn set_background(&mut self, color: Color) {
        tracing::debug!(?color, "set background");
        self.background = Some(color);
    }

    fn add(&mut self, primitive: Primitive) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        tracing::debug!(%id, kind = primitive.kind(), "add object");

        let opacity = primitive.initial_opacity();
        self.objects.insert(
            id,
            Staged {
                primitive,
                opacity,
                scale: 1.0,
            },
        );
        id
    }

    fn remove(&mut self, id: ObjectId) {
        tracing::debug!(%id, "remove object");
        self.objects.remove(&id);
    }

    fn play(&mut self, batch: &[Animation], run_time: f64) -> Result<()> {
        if !(run_time > 0.0) {
            return Err(ProtonLifeError::InvalidDuration {
                seconds: run_time,
                reason: "play run time must be positive",
            });
        }
        for animation in batch {
            if let Some(member_time) = animation.run_time {
                if !(member_time > 0.0) {
                    return Err(ProtonLifeError::InvalidDuration {
                        seconds: member_time,
                        reason: "member run time must be positive",
                    });
                }
                if member_time > run_time {
                    return Err(ProtonLifeError::InvalidDuration {
                        seconds: member_time,
                        reason: "member run time exceeds the batch run time",
                    });
                }
            }
        }

        tracing::debug!(commands = batch.len(), run_time, "play");
        for animation in batch {
            self.apply(animation)?;
        }
        self.clock += run_time;
        Ok(())
    }

    fn wait(&mut self, seconds: f64) -> Result<()> {
        if !(seconds >= 0.0) {
            return Err(ProtonLifeError::InvalidDuration {
                seconds,
                reason: "wait must not be negative",
            });
        }
        tracing::debug!(seconds, "wait");
        self.clock += seconds;
        Ok(())
    }

    fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn elapsed(&self) -> f64 {
        self.clock
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::animation::Animation;
    use crate::object::{Circle, Color, Dot, TextLabel};

    fn dot() -> Primitive {
        Primitive::Dot(Dot {
            position: Point::ORIGIN,
            radius: 0.05,
            color: Color::WHITE,
            opacity: 0.5,
        })
    }

    #[test]
    fn plays_and_waits_advance_the_clock() {
        let mut stage = TimelineStage::new();
        let id = stage.add(dot());

        stage.play(&[Animation::fade_in(id)], 2.5).unwrap();
        stage.wait(1.0).unwrap();

        assert_eq!(stage.elapsed(), 3.5);
        assert_eq!(stage.object_count(), 1);
    }

    #[test]
    fn fade_out_removes_the_target() {
        let mut stage = TimelineStage::new();
        let id = stage.add(dot());

        stage.play(&[Animation::fade_out(id)], 0.7).unwrap();

        assert_eq!(stage.object_count(), 0);
        assert!(stage.primitive(id).is_none());
    }

    #[test]
    fn unknown_target_is_fatal() {
        let mut stage = TimelineStage::new();
        let err = stage
            .play(&[Animation::fade_in(ObjectId(99))], 1.0)
            .unwrap_err();
        assert!(matches!(err, ProtonLifeError::UnknownObject(ObjectId(99))));
    }

    #[test]
    fn durations_must_be_positive() {
        let mut stage = TimelineStage::new();
        let id = stage.add(dot());

        assert!(stage.play(&[Animation::fade_in(id)], 0.0).is_err());
        assert!(stage.play(&[Animation::fade_in(id)], -1.0).is_err());
        assert!(stage.wait(-0.1).is_err());
        // Waiting zero seconds is a harmless no-op.
        assert!(stage.wait(0.0).is_ok());
    }

    #[test]
    fn member_run_time_cannot_exceed_the_batch() {
        let mut stage = TimelineStage::new();
        let id = stage.add(dot());

        let err = stage
            .play(&[Animation::fade_out(id).over(3.0)], 2.0)
            .unwrap_err();
        assert!(matches!(err, ProtonLifeError::InvalidDuration { .. }));
        // The failed play must not have consumed timeline or the object.
        assert_eq!(stage.object_count(), 1);
    }

    #[test]
    fn concurrent_batch_applies_every_end_state() {
        let mut stage = TimelineStage::new();
        let glow = stage.add(Primitive::Circle(Circle {
            center: Point::ORIGIN,
            radius: 0.4,
            color: Color::YELLOW,
            fill_opacity: 0.0,
            stroke_width: 0.0,
        }));
        let marker = stage.add(Primitive::Text(TextLabel::new(
            "Now",
            22.0,
            Point::new(6.2, -3.6),
        )));

        stage
            .play(
                &[
                    Animation::scale_by(glow, 30.0),
                    Animation::fill_to(glow, Color::YELLOW, 0.85),
                    Animation::move_to(marker, Point::new(-6.2, -3.45)),
                ],
                10.0,
            )
            .unwrap();

        assert_eq!(stage.elapsed(), 10.0);
        assert_eq!(stage.scale(glow), Some(30.0));
        assert_eq!(stage.opacity(glow), Some(0.85));
        match stage.primitive(glow) {
            Some(Primitive::Circle(circle)) => assert_eq!(circle.fill_opacity, 0.85),
            other => panic!("unexpected glow state: {other:?}"),
        }
        match stage.primitive(marker) {
            Some(Primitive::Text(text)) => assert_eq!(text.position, Point::new(-6.2, -3.45)),
            other => panic!("unexpected marker state: {other:?}"),
        }
    }
}
