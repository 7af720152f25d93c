//! Phase 1 – Birth in a Quark–Gluon Plasma.
//!
//! One segment per beat. Beat 1 (cosmic intro & rewind) is the first real
//! animation; the remaining beats are minimal placeholders (text + fades)
//! that will gradually be replaced with their final visuals, following the
//! physics-first, low-text, beat-by-beat design. Narration carries the
//! story; on-screen text stays minimal.

use kurbo::{Point, Vec2};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::animation::Animation;
use crate::config::StageConfig;
use crate::object::{Circle, Color, Dot, Line, ObjectId, TextLabel, Triangle};
use crate::stage::Stage;
use crate::Result;

/// Number of stars in the intro starfield.
pub const STAR_COUNT: usize = 260;

/// Star colors roughly corresponding to stellar types.
const STAR_PALETTE: [Color; 6] = [
    Color::BLUE_C,
    Color::BLUE_E,
    Color::WHITE,
    Color::YELLOW_E,
    Color::GOLD,
    Color::RED_E,
];

/// Single star in the intro starfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: Point,
    pub radius: f64,
    pub color: Color,
    pub opacity: f64,
}

impl From<Star> for Dot {
    fn from(star: Star) -> Self {
        Dot {
            position: star.position,
            radius: star.radius,
            color: star.color,
            opacity: star.opacity,
        }
    }
}

/// Samples a starfield layout. The layout is a pure function of the seed:
/// the same seed always yields the identical point set.
pub fn starfield(seed: u64, count: usize, x_range: (f64, f64), y_range: (f64, f64)) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(x_range.0..x_range.1);
            let y = rng.gen_range(y_range.0..y_range.1);
            let color = STAR_PALETTE[rng.gen_range(0..STAR_PALETTE.len())];
            let radius = rng.gen_range(0.02..0.06);
            let opacity = rng.gen_range(0.4..1.0);
            Star {
                position: Point::new(x, y),
                radius,
                color,
                opacity,
            }
        })
        .collect()
}

fn below(point: Point, buff: f64) -> Point {
    Point::new(point.x, point.y - buff)
}

fn above(point: Point, buff: f64) -> Point {
    Point::new(point.x, point.y + buff)
}

/// Beat 1: Cosmic intro & rewind.
///
/// Present-day universe as a rich starfield, title at the top, a universe
/// timeline at the bottom with a marker at "Now". The rewind contracts the
/// stars toward the center while the marker runs back toward "Big Bang" and
/// a bright central glow grows to represent the hot early universe. Final
/// frame: stars gone, central glow plus "Big Bang (extrapolated
/// singularity)" and "t ≈ 0" labels.
pub fn intro_rewind(stage: &mut dyn Stage, config: &StageConfig) -> Result<()> {
    let pacing = &config.pacing;
    let layout = &config.layout;
    stage.set_background(config.background);

    // Title at the top, with a subtle subtitle underneath.
    let title_at = layout.top_edge(0.7);
    let title = stage.add(TextLabel::new("The Life of a Proton", 52.0, title_at).into());
    let subtitle = stage.add(
        TextLabel::new(
            "From the Big Bang to cosmic time",
            28.0,
            below(title_at, 0.8),
        )
        .into(),
    );

    // Starfield representing the present-day universe. The vertical range
    // stops short of the timeline region near the bottom.
    let star_y_range = (-3.0, layout.y_range.1);
    let stars: Vec<ObjectId> = starfield(config.starfield_seed, STAR_COUNT, layout.x_range, star_y_range)
        .into_iter()
        .map(|star| stage.add(Dot::from(star).into()))
        .collect();

    // Universe timeline at the bottom, safely inside a 16:9 frame.
    let timeline_y = -3.6;
    let timeline_left = Point::new(layout.x_range.0 + 0.8, timeline_y);
    let timeline_right = Point::new(layout.x_range.1 - 0.8, timeline_y);
    let timeline = stage.add(Line::new(timeline_left, timeline_right, Color::WHITE).into());

    let bigbang_label =
        stage.add(TextLabel::new("Big Bang", 22.0, below(timeline_left, 0.15)).into());
    let now_label = stage.add(TextLabel::new("Now", 22.0, below(timeline_right, 0.15)).into());

    // Timeline marker, initially at "Now".
    let marker = stage.add(
        Triangle {
            position: above(timeline_right, 0.08),
            scale: 0.18,
            color: Color::YELLOW,
            fill_opacity: 1.0,
        }
        .into(),
    );

    let axis_label = stage.add(
        TextLabel::new(
            "Time since Big Bang",
            24.0,
            above(Point::new(0.0, timeline_y), 0.25),
        )
        .into(),
    );

    // Central glow that will grow during the rewind; invisible until then.
    let glow = stage.add(
        Circle {
            center: Point::ORIGIN,
            radius: 0.4,
            color: Color::YELLOW,
            fill_opacity: 0.0,
            stroke_width: 0.0,
        }
        .into(),
    );

    // Intro: fade in title + stars.
    let mut intro: Vec<Animation> = stars.iter().map(|&star| Animation::fade_in(star)).collect();
    intro.push(Animation::fade_in_shifted(title, Vec2::new(0.0, 0.2)).over(2.0));
    intro.push(Animation::fade_in(subtitle).over(2.0));
    stage.play(&intro, 2.5)?;
    stage.wait(pacing.pause_med)?;

    // Fade the subtitle early to reduce clutter before the rewind.
    stage.play(&[Animation::fade_out(subtitle)], pacing.anim_fast)?;
    stage.wait(pacing.pause_short)?;

    // Introduce the timeline at the bottom.
    stage.play(
        &[Animation::create(timeline), Animation::fade_in(axis_label)],
        pacing.anim_med,
    )?;
    stage.play(
        &[
            Animation::fade_in(bigbang_label),
            Animation::fade_in(now_label),
            Animation::fade_in(marker),
        ],
        pacing.anim_med,
    )?;
    stage.wait(pacing.pause_med)?;

    // Rewind: stars contract toward the center, the marker runs back toward
    // "Big Bang", the glow expands and brightens to dominate the frame, and
    // the title fades gently during the first half.
    let rewind_run_time = 10.0;
    let marker_target = above(timeline_left, 0.15);

    let mut rewind: Vec<Animation> = stars
        .iter()
        .map(|&star| Animation::scale_by(star, 0.12))
        .collect();
    rewind.push(Animation::move_to(marker, marker_target));
    rewind.push(Animation::scale_by(glow, 30.0));
    rewind.push(Animation::fill_to(glow, Color::YELLOW, 0.85));
    rewind.push(Animation::fade_out(title).over(rewind_run_time * 0.5));
    stage.play(&rewind, rewind_run_time)?;

    // Remove individual stars once they are effectively merged into the glow.
    for star in stars {
        stage.remove(star);
    }
    stage.wait(pacing.pause_short)?;

    // Final labels at t ≈ 0.
    let singularity_label = stage.add(
        TextLabel::new(
            "Big Bang (extrapolated singularity)",
            28.0,
            above(Point::ORIGIN, 0.4),
        )
        .into(),
    );
    let t0_label = stage.add(TextLabel::new("t ≈ 0", 22.0, below(timeline_left, 0.15)).into());

    stage.play(
        &[
            Animation::fade_in(singularity_label),
            Animation::fade_in(t0_label),
        ],
        pacing.anim_med,
    )?;
    stage.wait(pacing.pause_long)?;

    // Clear the stage so the next beat starts from an empty canvas.
    stage.play(
        &[
            Animation::fade_out(glow),
            Animation::fade_out(timeline),
            Animation::fade_out(axis_label),
            Animation::fade_out(bigbang_label),
            Animation::fade_out(now_label),
            Animation::fade_out(marker),
            Animation::fade_out(singularity_label),
            Animation::fade_out(t0_label),
        ],
        pacing.anim_med,
    )?;
    stage.wait(pacing.pause_short)?;

    Ok(())
}

/// Beat 2: Phase title & early-universe context (placeholder).
pub fn phase_title(stage: &mut dyn Stage, config: &StageConfig) -> Result<()> {
    let pacing = &config.pacing;
    stage.set_background(config.background);

    let title_at = config.layout.top_edge(0.8);
    let title = stage.add(
        TextLabel::new("Phase 1 – Birth in a Quark–Gluon Plasma", 40.0, title_at).into(),
    );
    let subtitle = stage.add(
        TextLabel::new(
            "Early universe: quark–gluon plasma era",
            28.0,
            below(title_at, 1.0),
        )
        .into(),
    );

    stage.play(
        &[Animation::fade_in_shifted(title, Vec2::new(0.0, 0.2))],
        pacing.anim_med,
    )?;
    stage.play(
        &[Animation::fade_in_shifted(subtitle, Vec2::new(0.0, 0.1))],
        pacing.anim_fast,
    )?;
    stage.wait(pacing.pause_long)?;

    stage.play(
        &[Animation::fade_out(title), Animation::fade_out(subtitle)],
        pacing.anim_fast,
    )?;
    stage.wait(pacing.pause_short)?;

    Ok(())
}

/// Beat 3: Quark–gluon plasma wide shot (placeholder).
///
/// Final intent: a dense soup of up/down quark dots with fluid-like motion
/// and gluon "flashes" between them. For now, a single label.
pub fn qgp_wide_shot(stage: &mut dyn Stage, config: &StageConfig) -> Result<()> {
    let pacing = &config.pacing;
    stage.set_background(config.background);

    let label = stage.add(
        TextLabel::new(
            "Quark–Gluon Plasma (placeholder wide shot)",
            36.0,
            config.layout.top_edge(0.8),
        )
        .into(),
    );

    stage.play(&[Animation::fade_in(label)], pacing.anim_med)?;
    stage.wait(pacing.pause_long)?;

    stage.play(&[Animation::fade_out(label)], pacing.anim_fast)?;
    stage.wait(pacing.pause_short)?;

    Ok(())
}

/// Beat 4: Up/down quarks as a conceptual pull-out (placeholder).
pub fn quark_types(stage: &mut dyn Stage, config: &StageConfig) -> Result<()> {
    let pacing = &config.pacing;
    stage.set_background(config.background);

    let title_at = config.layout.top_edge(0.8);
    let title = stage.add(TextLabel::new("Quark Types (placeholder)", 38.0, title_at).into());
    let up_text = stage.add(
        TextLabel::new("up quark (u): +2/3 e", 30.0, below(title_at, 1.1)).into(),
    );
    let down_text = stage.add(
        TextLabel::new("down quark (d): -1/3 e", 30.0, below(title_at, 1.7)).into(),
    );

    stage.play(&[Animation::fade_in(title)], pacing.anim_med)?;
    stage.play(&[Animation::fade_in(up_text)], pacing.anim_med)?;
    stage.play(&[Animation::fade_in(down_text)], pacing.anim_med)?;
    stage.wait(pacing.pause_long)?;

    stage.play(
        &[
            Animation::fade_out(title),
            Animation::fade_out(up_text),
            Animation::fade_out(down_text),
        ],
        pacing.anim_fast,
    )?;
    stage.wait(pacing.pause_short)?;

    Ok(())
}

/// Beat 5: Cartoon protons and neutrons built from up/down quarks
/// (placeholder). The final visual is triangular arrangements of colored
/// dots (uud, udd); this is a simplified cartoon of a bound state.
pub fn cartoon_hadrons(stage: &mut dyn Stage, config: &StageConfig) -> Result<()> {
    let pacing = &config.pacing;
    stage.set_background(config.background);

    let title_at = config.layout.top_edge(0.8);
    let title = stage.add(TextLabel::new("Cartoon Hadrons (placeholder)", 36.0, title_at).into());
    let proton_text =
        stage.add(TextLabel::new("Proton (p⁺): uud", 30.0, below(title_at, 1.1)).into());
    let neutron_text =
        stage.add(TextLabel::new("Neutron (n): udd", 30.0, below(title_at, 1.7)).into());

    stage.play(&[Animation::fade_in(title)], pacing.anim_med)?;
    stage.play(&[Animation::fade_in(proton_text)], pacing.anim_med)?;
    stage.play(&[Animation::fade_in(neutron_text)], pacing.anim_med)?;
    stage.wait(pacing.pause_long)?;

    stage.play(
        &[
            Animation::fade_out(title),
            Animation::fade_out(proton_text),
            Animation::fade_out(neutron_text),
        ],
        pacing.anim_fast,
    )?;
    stage.wait(pacing.pause_short)?;

    Ok(())
}

/// Beat 6: Cooling & confinement (hadronization, placeholder).
pub fn hadronization(stage: &mut dyn Stage, config: &StageConfig) -> Result<()> {
    let pacing = &config.pacing;
    stage.set_background(config.background);

    let label = stage.add(
        TextLabel::new(
            "Hadronization (placeholder)",
            36.0,
            config.layout.center(),
        )
        .into(),
    );

    stage.play(&[Animation::fade_in(label)], pacing.anim_med)?;
    stage.wait(pacing.pause_long)?;

    stage.play(&[Animation::fade_out(label)], pacing.anim_fast)?;
    stage.wait(pacing.pause_short)?;

    Ok(())
}

/// Beat 7: Tag one proton as "our proton" to follow (placeholder).
pub fn our_proton(stage: &mut dyn Stage, config: &StageConfig) -> Result<()> {
    let pacing = &config.pacing;
    stage.set_background(config.background);

    let label = stage.add(
        TextLabel::new("Our proton (placeholder)", 40.0, config.layout.center()).into(),
    );

    stage.play(&[Animation::fade_in(label)], pacing.anim_med)?;
    stage.wait(pacing.pause_long)?;

    stage.play(&[Animation::fade_out(label)], pacing.anim_fast)?;
    stage.wait(pacing.pause_short)?;

    Ok(())
}

/// Beat 8: Wrap up Phase 1 and hint at primordial nucleosynthesis
/// (placeholder).
pub fn wrap(stage: &mut dyn Stage, config: &StageConfig) -> Result<()> {
    let pacing = &config.pacing;
    stage.set_background(config.background);

    let title_at = config.layout.top_edge(0.8);
    let title = stage.add(TextLabel::new("End of Phase 1 (placeholder)", 40.0, title_at).into());
    let subtitle = stage.add(TextLabel::new("Bridge to Phase 2", 28.0, below(title_at, 1.0)).into());

    stage.play(&[Animation::fade_in(title)], pacing.anim_med)?;
    stage.play(&[Animation::fade_in(subtitle)], pacing.anim_fast)?;
    stage.wait(pacing.pause_long)?;

    stage.play(
        &[Animation::fade_out(title), Animation::fade_out(subtitle)],
        pacing.anim_fast,
    )?;
    stage.wait(pacing.pause_short)?;

    Ok(())
}
