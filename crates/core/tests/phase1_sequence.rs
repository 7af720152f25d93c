//! End-to-end check of the combined Phase 1 sequence: a recording stage
//! double observes every call a beat makes and the test verifies the beats
//! run exactly once each, in their declared order, each one starting from
//! the configured background and tearing its objects down.

use std::collections::BTreeSet;

use proton_life_core::{
    phase1, Animation, Color, Effect, ObjectId, Primitive, Result, Stage, StageConfig,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    SetBackground(Color),
    Add(String),
    Play(usize, f64),
    Wait(f64),
    Remove,
}

/// Test double: records every stage call and mimics the registry bookkeeping
/// the real engine performs (fade-outs remove their target).
#[derive(Debug, Default)]
struct RecordingStage {
    calls: Vec<Call>,
    objects: BTreeSet<ObjectId>,
    next_id: u64,
}

impl Stage for RecordingStage {
    fn set_background(&mut self, color: Color) {
        self.calls.push(Call::SetBackground(color));
    }

    fn add(&mut self, primitive: Primitive) -> ObjectId {
        let label = match &primitive {
            Primitive::Text(text) => text.content.clone(),
            other => other.kind().to_string(),
        };
        self.calls.push(Call::Add(label));

        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id);
        id
    }

    fn remove(&mut self, id: ObjectId) {
        self.calls.push(Call::Remove);
        self.objects.remove(&id);
    }

    fn play(&mut self, batch: &[Animation], run_time: f64) -> Result<()> {
        self.calls.push(Call::Play(batch.len(), run_time));
        for animation in batch {
            if animation.effect == Effect::FadeOut {
                self.objects.remove(&animation.target);
            }
        }
        Ok(())
    }

    fn wait(&mut self, seconds: f64) -> Result<()> {
        self.calls.push(Call::Wait(seconds));
        Ok(())
    }

    fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn elapsed(&self) -> f64 {
        self.calls
            .iter()
            .map(|call| match call {
                Call::Play(_, run_time) => *run_time,
                Call::Wait(seconds) => *seconds,
                _ => 0.0,
            })
            .sum()
    }
}

/// First on-screen text of each beat, in declared playback order.
const OPENING_TEXTS: [&str; 8] = [
    "The Life of a Proton",
    "Phase 1 – Birth in a Quark–Gluon Plasma",
    "Quark–Gluon Plasma (placeholder wide shot)",
    "Quark Types (placeholder)",
    "Cartoon Hadrons (placeholder)",
    "Hadronization (placeholder)",
    "Our proton (placeholder)",
    "End of Phase 1 (placeholder)",
];

#[test]
fn combined_phase_plays_every_beat_once_in_order() {
    let config = StageConfig::default();
    let mut stage = RecordingStage::default();

    phase1().run(&mut stage, &config).unwrap();

    // One group per beat, each opened by a background set with the
    // configured color.
    let backgrounds: Vec<&Call> = stage
        .calls
        .iter()
        .filter(|call| matches!(call, Call::SetBackground(_)))
        .collect();
    assert_eq!(backgrounds.len(), 8);
    for call in backgrounds {
        assert_eq!(*call, Call::SetBackground(config.background));
    }

    // Split the call log into per-beat groups at each background set.
    let mut groups: Vec<Vec<&Call>> = Vec::new();
    for call in &stage.calls {
        if matches!(call, Call::SetBackground(_)) {
            groups.push(Vec::new());
        }
        groups
            .last_mut()
            .expect("calls before the first set_background")
            .push(call);
    }
    assert_eq!(groups.len(), 8);

    for (group, expected_text) in groups.iter().zip(OPENING_TEXTS) {
        let first_add = group.iter().find_map(|call| match call {
            Call::Add(label) => Some(label.as_str()),
            _ => None,
        });
        assert_eq!(first_add, Some(expected_text));

        // Construct → play× → teardown: every group builds objects, plays
        // commands and pauses.
        assert!(group.iter().any(|call| matches!(call, Call::Play(_, _))));
        assert!(group.iter().any(|call| matches!(call, Call::Wait(_))));
    }

    // No beat leaked objects into the next one.
    assert_eq!(stage.object_count(), 0);
    assert!(stage.elapsed() > 0.0);
}

#[test]
fn every_play_and_wait_declares_a_sane_duration() {
    let config = StageConfig::default();
    let mut stage = RecordingStage::default();

    phase1().run(&mut stage, &config).unwrap();

    for call in &stage.calls {
        match call {
            Call::Play(commands, run_time) => {
                assert!(*commands > 0);
                assert!(*run_time > 0.0);
            }
            Call::Wait(seconds) => assert!(*seconds >= 0.0),
            _ => {}
        }
    }
}
