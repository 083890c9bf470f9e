use macroquad::prelude::*;

use jump_ball::core::scene::{DrawCommand, Point, Rgb, Scene};

use crate::constants::{CANVAS_FRAME, STATUS_BAR_PX, WINDOW_PADDING_PX};

/// Where the scene's canvas lands in the window.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CanvasPlacement {
    pub(crate) origin: Vec2,
    pub(crate) scale: f32,
}

impl CanvasPlacement {
    fn to_window(self, point: Point) -> Vec2 {
        self.origin + vec2(point.x as f32, point.y as f32) * self.scale
    }
}

/// Largest uniform scale that fits the canvas below the status bar, centred.
pub(crate) fn place_canvas(screen_w: f32, screen_h: f32, scene: &Scene) -> CanvasPlacement {
    let canvas_w = scene.width.max(1) as f32;
    let canvas_h = scene.height.max(1) as f32;
    let avail_w = (screen_w - 2.0 * WINDOW_PADDING_PX).max(1.0);
    let avail_h = (screen_h - STATUS_BAR_PX - 2.0 * WINDOW_PADDING_PX).max(1.0);
    let scale = (avail_w / canvas_w).min(avail_h / canvas_h);

    let origin = vec2(
        (screen_w - canvas_w * scale) * 0.5,
        STATUS_BAR_PX + WINDOW_PADDING_PX + (avail_h - canvas_h * scale) * 0.5,
    );
    CanvasPlacement { origin, scale }
}

fn color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_scene(scene: &Scene, placement: CanvasPlacement, font: Option<&Font>) {
    let scale = placement.scale;

    for command in &scene.commands {
        match command {
            DrawCommand::Clear { width, height } => {
                let w = *width as f32 * scale;
                let h = *height as f32 * scale;
                draw_rectangle(placement.origin.x, placement.origin.y, w, h, WHITE);
                draw_rectangle_lines(placement.origin.x, placement.origin.y, w, h, 1.0, CANVAS_FRAME);
            }
            DrawCommand::Line { from, to, stroke } => {
                let a = placement.to_window(*from);
                let b = placement.to_window(*to);
                draw_line(a.x, a.y, b.x, b.y, stroke.width as f32 * scale, color(stroke.color));
            }
            DrawCommand::Rect {
                top_left,
                width,
                height,
                fill,
                stroke,
            } => {
                let corner = placement.to_window(*top_left);
                let w = *width as f32 * scale;
                let h = *height as f32 * scale;
                if let Some(fill) = fill {
                    draw_rectangle(corner.x, corner.y, w, h, color(*fill));
                }
                if let Some(stroke) = stroke {
                    draw_rectangle_lines(
                        corner.x,
                        corner.y,
                        w,
                        h,
                        stroke.width as f32 * scale,
                        color(stroke.color),
                    );
                }
            }
            DrawCommand::Path { points, stroke } => {
                let thickness = stroke.width as f32 * scale;
                for pair in points.windows(2) {
                    let a = placement.to_window(pair[0]);
                    let b = placement.to_window(pair[1]);
                    draw_line(a.x, a.y, b.x, b.y, thickness, color(stroke.color));
                }
            }
            DrawCommand::Polygon { points, fill } => {
                if let Some((first, rest)) = points.split_first() {
                    let anchor = placement.to_window(*first);
                    for pair in rest.windows(2) {
                        draw_triangle(
                            anchor,
                            placement.to_window(pair[0]),
                            placement.to_window(pair[1]),
                            color(*fill),
                        );
                    }
                }
            }
            DrawCommand::Text {
                text,
                at,
                size_px,
                color: text_color,
            } => {
                let at = placement.to_window(*at);
                let font_size = (*size_px as f32 * scale).round().max(1.0) as u16;
                draw_ui_text(text, at.x, at.y, font_size, color(*text_color), font);
            }
        }
    }
}
