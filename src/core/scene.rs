//! Backend-independent drawing commands.
//!
//! A [`Scene`] is an ordered list of primitives in canvas pixels (origin top
//! left, y down). Backends paint the commands in order; nothing else carries
//! over between scenes.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Resets the whole canvas to the given pixel size.
    Clear { width: u32, height: u32 },
    Line { from: Point, to: Point, stroke: Stroke },
    Rect {
        top_left: Point,
        width: f64,
        height: f64,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    /// Open polyline through `points`.
    Path { points: Vec<Point>, stroke: Stroke },
    /// Closed, filled polygon.
    Polygon { points: Vec<Point>, fill: Rgb },
    /// `at` is the left end of the text baseline.
    Text {
        text: String,
        at: Point,
        size_px: f64,
        color: Rgb,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// A cleared canvas with nothing drawn on it.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: vec![DrawCommand::Clear { width, height }],
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn is_blank(&self) -> bool {
        self.commands
            .iter()
            .all(|command| matches!(command, DrawCommand::Clear { .. }))
    }

    #[cfg(test)]
    pub(crate) fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
