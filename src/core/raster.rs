use std::path::Path;

use log::{info, warn};
use plotters::coord::Shift;
use plotters::prelude::{
    BitMapBackend, Color, DrawingArea, DrawingBackend, IntoDrawingArea, IntoFont, PathElement,
    Polygon, RGBColor, Rectangle, SVGBackend, Text,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::core::constants::CANVAS_BACKGROUND;
use crate::core::error::RenderError;
use crate::core::scene::{DrawCommand, Point, Rgb, Scene};

const FONT_FAMILY: &str = "sans-serif";

pub fn render_svg(scene: &Scene) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (scene.width, scene.height)).into_drawing_area();
        paint(scene, &root)?;
        root.present().map_err(backend_error)?;
    }
    Ok(svg)
}

/// Packed 8-bit RGB pixels, row major, `width * height * 3` bytes.
pub fn render_rgb(scene: &Scene) -> Result<Vec<u8>, RenderError> {
    let mut pixels = vec![0u8; scene.width as usize * scene.height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (scene.width, scene.height))
            .into_drawing_area();
        paint(scene, &root)?;
        root.present().map_err(backend_error)?;
    }
    Ok(pixels)
}

pub fn render_png(scene: &Scene, path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    {
        let root = BitMapBackend::new(path, (scene.width, scene.height)).into_drawing_area();
        paint(scene, &root)?;
        root.present().map_err(backend_error)?;
    }
    info!("wrote {}", path.display());
    Ok(())
}

fn paint<DB: DrawingBackend>(
    scene: &Scene,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), RenderError> {
    for command in &scene.commands {
        match command {
            DrawCommand::Clear { .. } => {
                root.fill(&rgb(CANVAS_BACKGROUND)).map_err(backend_error)?;
            }
            DrawCommand::Line { from, to, stroke } => {
                let style = rgb(stroke.color).stroke_width(px(stroke.width));
                root.draw(&PathElement::new(vec![pixel(*from), pixel(*to)], style))
                    .map_err(backend_error)?;
            }
            DrawCommand::Rect {
                top_left,
                width,
                height,
                fill,
                stroke,
            } => {
                let corners = [
                    pixel(*top_left),
                    pixel(Point::new(top_left.x + width, top_left.y + height)),
                ];
                if let Some(fill) = fill {
                    root.draw(&Rectangle::new(corners, rgb(*fill).filled()))
                        .map_err(backend_error)?;
                }
                if let Some(stroke) = stroke {
                    let style = rgb(stroke.color).stroke_width(px(stroke.width));
                    root.draw(&Rectangle::new(corners, style))
                        .map_err(backend_error)?;
                }
            }
            DrawCommand::Path { points, stroke } => {
                let style = rgb(stroke.color).stroke_width(px(stroke.width));
                let points: Vec<_> = points.iter().copied().map(pixel).collect();
                root.draw(&PathElement::new(points, style))
                    .map_err(backend_error)?;
            }
            DrawCommand::Polygon { points, fill } => {
                let points: Vec<_> = points.iter().copied().map(pixel).collect();
                root.draw(&Polygon::new(points, rgb(*fill).filled()))
                    .map_err(backend_error)?;
            }
            DrawCommand::Text {
                text,
                at,
                size_px,
                color,
            } => {
                let style = (FONT_FAMILY, *size_px)
                    .into_font()
                    .color(&rgb(*color))
                    .pos(Pos::new(HPos::Left, VPos::Bottom));
                // Headless hosts may lack a usable font; the rest of the
                // scene is still worth having.
                if let Err(err) = root.draw(&Text::new(text.as_str(), pixel(*at), style)) {
                    warn!("skipped label {text:?}: {err}");
                }
            }
        }
    }
    Ok(())
}

fn backend_error<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn pixel(point: Point) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

fn px(width: f64) -> u32 {
    width.round().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::{render_rgb, render_svg};
    use crate::core::calculator::{JumpBallFields, calculate_jump_ball};
    use crate::core::diagram::DiagramConfig;
    use crate::core::scene::Scene;

    fn reference_scene() -> Scene {
        calculate_jump_ball(
            JumpBallFields {
                height: "10",
                distance: "20",
                angle: "45",
                gravity: "9.8",
            },
            &DiagramConfig::default(),
        )
        .scene
    }

    #[test]
    fn svg_contains_canvas_and_labels() {
        let svg = render_svg(&reference_scene()).expect("svg render");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("width=\"500\""));
        assert!(svg.contains("樓高 H = 10 m"));
        assert!(svg.contains("θ ≈ 45.0°"));
    }

    #[test]
    fn svg_render_is_repeatable() {
        let scene = reference_scene();
        assert_eq!(
            render_svg(&scene).expect("first render"),
            render_svg(&scene).expect("second render")
        );
    }

    #[test]
    fn bitmap_render_is_pixel_identical() {
        let scene = reference_scene();
        let first = render_rgb(&scene).expect("first render");
        let second = render_rgb(&scene).expect("second render");
        assert_eq!(first.len(), 500 * 300 * 3);
        assert!(first == second, "repeated renders differ");
    }

    #[test]
    fn blank_scene_is_all_background() {
        let pixels = render_rgb(&Scene::blank(500, 300)).expect("render");
        assert!(pixels.iter().all(|&channel| channel == 255));
    }

    #[test]
    fn ground_line_is_drawn_in_ink() {
        let pixels = render_rgb(&reference_scene()).expect("render");
        let at = |x: usize, y: usize| {
            let i = (y * 500 + x) * 3;
            (pixels[i], pixels[i + 1], pixels[i + 2])
        };
        // Ground runs along y = 260 on a 500x300 canvas with a 40 px margin.
        assert!((255..=265).any(|y| at(250, y) == (0, 0, 0)));
        assert_eq!(at(2, 2), (255, 255, 255));
    }
}
