use crate::beats::{phase1 as segments, Beat, BeatId};
use crate::config::StageConfig;
use crate::stage::Stage;
use crate::Result;

/// A top-level chapter of the narrative: an ordered list of beats played
/// against one shared stage.
///
/// Composition is plain ordered invocation. Each beat is self-contained, so
/// no state is transferred between them; continuity is visual and editorial,
/// not implemented via shared stage objects.
#[derive(Debug)]
pub struct Phase {
    pub number: u32,
    pub title: String,
    beats: Vec<Beat>,
}

impl Phase {
    pub fn new(number: u32, title: impl Into<String>, beats: Vec<Beat>) -> Self {
        Self {
            number,
            title: title.into(),
            beats,
        }
    }

    /// Beats in their declared playback order.
    pub fn beats(&self) -> &[Beat] {
        &self.beats
    }

    /// Looks a beat up by its short name (`intro-rewind`) or its position
    /// (`beat1`).
    pub fn find_beat(&self, name: &str) -> Option<&Beat> {
        self.beats
            .iter()
            .find(|beat| beat.id.name == name || format!("beat{}", beat.id.number) == name)
    }

    /// Plays every beat once, in order, against the shared stage. The first
    /// failing beat aborts the whole phase; there is no partial-failure
    /// handling.
    pub fn run(&self, stage: &mut dyn Stage, config: &StageConfig) -> Result<()> {
        for beat in &self.beats {
            tracing::info!(beat = %beat.id, "playing beat");
            beat.run(stage, config)?;

            // Each beat owns its teardown; leftovers signal a beat that
            // violated the no-cross-beat-dependency rule.
            if stage.object_count() != 0 {
                tracing::warn!(
                    beat = %beat.id,
                    residue = stage.object_count(),
                    "beat left objects on the stage"
                );
            }
        }
        Ok(())
    }

    /// Total timeline duration of the phase in seconds, measured by a dry
    /// run on a fresh stage.
    pub fn duration(&self, config: &StageConfig) -> Result<f64> {
        let mut stage = crate::stage::TimelineStage::new();
        self.run(&mut stage, config)?;
        Ok(stage.elapsed())
    }
}

/// Phase 1 – Birth in a Quark–Gluon Plasma, with its eight beats in
/// playback order.
pub fn phase1() -> Phase {
    Phase::new(
        1,
        "Birth in a Quark–Gluon Plasma",
        vec![
            Beat::new(BeatId::new(1, 1, "intro-rewind"), segments::intro_rewind),
            Beat::new(BeatId::new(1, 2, "phase-title"), segments::phase_title),
            Beat::new(BeatId::new(1, 3, "qgp-wide-shot"), segments::qgp_wide_shot),
            Beat::new(BeatId::new(1, 4, "quark-types"), segments::quark_types),
            Beat::new(
                BeatId::new(1, 5, "cartoon-hadrons"),
                segments::cartoon_hadrons,
            ),
            Beat::new(BeatId::new(1, 6, "hadronization"), segments::hadronization),
            Beat::new(BeatId::new(1, 7, "our-proton"), segments::our_proton),
            Beat::new(BeatId::new(1, 8, "wrap"), segments::wrap),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase1_declares_eight_beats_in_order() {
        let phase = phase1();
        assert_eq!(phase.number, 1);
        assert_eq!(phase.beats().len(), 8);
        for (index, beat) in phase.beats().iter().enumerate() {
            assert_eq!(beat.id.phase, 1);
            assert_eq!(beat.id.number as usize, index + 1);
        }
    }

    #[test]
    fn beats_are_found_by_name_or_position() {
        let phase = phase1();
        assert_eq!(phase.find_beat("intro-rewind").map(|b| b.id.number), Some(1));
        assert_eq!(phase.find_beat("beat6").map(|b| b.id.number), Some(6));
        assert!(phase.find_beat("beat9").is_none());
        assert!(phase.find_beat("nope").is_none());
    }

    #[test]
    fn combined_phase_has_a_positive_duration() {
        let phase = phase1();
        let duration = phase.duration(&StageConfig::default()).unwrap();
        // Eight beats, each at least a few seconds of fades and pauses.
        assert!(duration > 30.0);
    }
}
