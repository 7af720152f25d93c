use std::fmt;

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Handle to an object living on a stage, issued by [`crate::Stage::add`].
///
/// Ids are only meaningful to the stage that issued them; primitives never
/// outlive the beat that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Solid sRGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);
    pub const GOLD: Color = Color::rgb(0xF0, 0xAC, 0x5F);
    pub const BLUE_C: Color = Color::rgb(0x58, 0xC4, 0xDD);
    pub const BLUE_E: Color = Color::rgb(0x1C, 0x75, 0x8A);
    pub const YELLOW_E: Color = Color::rgb(0xE8, 0xC1, 0x1C);
    pub const RED_E: Color = Color::rgb(0xCF, 0x50, 0x44);
}

/// On-screen text label. `position` is the label's anchor point in logical
/// coordinates; sizing and shaping belong to the rendering engine.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub content: String,
    pub font_size: f64,
    pub position: Point,
}

impl TextLabel {
    pub fn new(content: impl Into<String>, font_size: f64, position: Point) -> Self {
        Self {
            content: content.into(),
            font_size,
            position,
        }
    }
}

/// Small filled disc, used for stars and particles.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub position: Point,
    pub radius: f64,
    pub color: Color,
    pub opacity: f64,
}

/// Straight stroke between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub color: Color,
}

impl Line {
    pub fn new(start: Point, end: Point, color: Color) -> Self {
        Self { start, end, color }
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// Circle with independent stroke and fill settings. A zero stroke width and
/// zero fill opacity gives an invisible object that can be faded in later.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    pub fill_opacity: f64,
    pub stroke_width: f64,
}

/// Equilateral triangle, anchored by its centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub position: Point,
    pub scale: f64,
    pub color: Color,
    pub fill_opacity: f64,
}

/// Visual primitive owned by exactly one beat for the duration of that beat.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text(TextLabel),
    Dot(Dot),
    Line(Line),
    Circle(Circle),
    Triangle(Triangle),
}

impl Primitive {
    /// Short name of the primitive variant, used for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Text(_) => "text",
            Primitive::Dot(_) => "dot",
            Primitive::Line(_) => "line",
            Primitive::Circle(_) => "circle",
            Primitive::Triangle(_) => "triangle",
        }
    }

    /// Opacity the primitive was constructed with.
    pub fn initial_opacity(&self) -> f64 {
        match self {
            Primitive::Dot(dot) => dot.opacity,
            Primitive::Circle(circle) => circle.fill_opacity,
            Primitive::Triangle(triangle) => triangle.fill_opacity,
            Primitive::Text(_) | Primitive::Line(_) => 1.0,
        }
    }

    /// Moves the primitive so that its anchor lands on `target`. Lines keep
    /// their length and direction and are re-anchored by their midpoint.
    pub fn move_to(&mut self, target: Point) {
        match self {
            Primitive::Text(text) => text.position = target,
            Primitive::Dot(dot) => dot.position = target,
            Primitive::Line(line) => {
                let shift = target - line.midpoint();
                line.start += shift;
                line.end += shift;
            }
            Primitive::Circle(circle) => circle.center = target,
            Primitive::Triangle(triangle) => triangle.position = target,
        }
    }

    /// Replaces the primitive's color and fill opacity, where it has them.
    pub fn set_fill(&mut self, color: Color, opacity: f64) {
        match self {
            Primitive::Text(_) => {}
            Primitive::Dot(dot) => {
                dot.color = color;
                dot.opacity = opacity;
            }
            Primitive::Line(line) => line.color = color,
            Primitive::Circle(circle) => {
                circle.color = color;
                circle.fill_opacity = opacity;
            }
            Primitive::Triangle(triangle) => {
                triangle.color = color;
                triangle.fill_opacity = opacity;
            }
        }
    }
}

impl From<TextLabel> for Primitive {
    fn from(value: TextLabel) -> Self {
        Primitive::Text(value)
    }
}

impl From<Dot> for Primitive {
    fn from(value: Dot) -> Self {
        Primitive::Dot(value)
    }
}

impl From<Line> for Primitive {
    fn from(value: Line) -> Self {
        Primitive::Line(value)
    }
}

impl From<Circle> for Primitive {
    fn from(value: Circle) -> Self {
        Primitive::Circle(value)
    }
}

impl From<Triangle> for Primitive {
    fn from(value: Triangle) -> Self {
        Primitive::Triangle(value)
    }
}
