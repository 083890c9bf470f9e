use std::f64::consts::PI;

use log::{debug, info};

use crate::core::ballistics::sample_trajectory;
use crate::core::constants::{
    ANGLE_FONT_PX, ARROW_COLOR, ARROW_HEAD_PX, ARROW_HEAD_SPREAD_RAD, ARROW_LENGTH_CAP_M,
    BUILDING_FILL, BUILDING_STROKE, CANVAS_HEIGHT_PX, CANVAS_MARGIN_PX, CANVAS_WIDTH_PX, INK,
    LABEL_FONT_PX, MAX_DISPLAY_HEIGHT_M, STROKE_WIDTH_PX, TRAJECTORY_COLOR, TRAJECTORY_SAMPLES,
    WARNING_COLOR,
};
use crate::core::input::format_number;
use crate::core::scene::{DrawCommand, Point, Rgb, Scene, Stroke};
use crate::core::solver::Solution;
use crate::core::window::{ScreenMapping, WorldWindow};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub margin_px: f64,
    pub max_display_height_m: f64,
    pub samples: usize,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH_PX,
            canvas_height: CANVAS_HEIGHT_PX,
            margin_px: CANVAS_MARGIN_PX,
            max_display_height_m: MAX_DISPLAY_HEIGHT_M,
            samples: TRAJECTORY_SAMPLES,
        }
    }
}

pub fn arrow_length_m(distance_m: f64) -> f64 {
    (distance_m * 0.4 + 1.0).min(ARROW_LENGTH_CAP_M)
}

pub fn clip_warning(ceiling_m: f64) -> String {
    format!("※ 最高點超過 {ceiling_m} m，圖形上方已截斷")
}

/// Ground, building, trajectory, labels and launch arrow for a solved launch,
/// fitted to the configured canvas.
pub fn build_trajectory_scene(solution: &Solution, config: &DiagramConfig) -> Scene {
    let params = solution.params;
    let height_m = params.height_m;
    let distance_m = params.distance_m;

    let window = WorldWindow::for_launch(
        distance_m,
        solution.apex_height_m,
        config.max_display_height_m,
    );
    let mapping = ScreenMapping::fit(
        &window,
        f64::from(config.canvas_width),
        f64::from(config.canvas_height),
        config.margin_px,
    );
    debug!("diagram window {window:?}, scale {:.3} px/m", mapping.scale);

    let mut scene = Scene::blank(config.canvas_width, config.canvas_height);
    let stroke = |color: Rgb| Stroke {
        color,
        width: STROKE_WIDTH_PX,
    };

    let ground_left = mapping.to_screen(window.x_min, 0.0);
    let ground_right = mapping.to_screen(window.x_max, 0.0);
    scene.push(DrawCommand::Line {
        from: ground_left,
        to: ground_right,
        stroke: stroke(INK),
    });

    let building_top_right = mapping.to_screen(0.0, height_m);
    scene.push(DrawCommand::Rect {
        top_left: Point::new(ground_left.x, building_top_right.y),
        width: building_top_right.x - ground_left.x,
        height: ground_left.y - building_top_right.y,
        fill: Some(BUILDING_FILL),
        stroke: Some(stroke(BUILDING_STROKE)),
    });

    let points = sample_trajectory(solution.launch_state(), solution.flight_time_s, config.samples)
        .into_iter()
        .map(|(x, y)| mapping.to_screen(x, y))
        .collect();
    scene.push(DrawCommand::Path {
        points,
        stroke: stroke(TRAJECTORY_COLOR),
    });

    scene.push(label(
        format!("樓高 H = {} m", format_number(height_m)),
        Point::new(building_top_right.x + 5.0, building_top_right.y + 15.0),
        LABEL_FONT_PX,
        INK,
    ));
    let landing = mapping.to_screen(distance_m, 0.0);
    scene.push(label(
        format!("水平距離 L = {} m", format_number(distance_m)),
        Point::new(landing.x - 60.0, landing.y + 15.0),
        LABEL_FONT_PX,
        INK,
    ));

    push_launch_arrow(&mut scene, solution, &mapping);

    if solution.apex_height_m > config.max_display_height_m {
        info!(
            "apex {:.2} m exceeds the {} m display ceiling",
            solution.apex_height_m, config.max_display_height_m
        );
        scene.push(label(
            clip_warning(config.max_display_height_m),
            Point::new(config.margin_px, config.margin_px - 10.0),
            LABEL_FONT_PX,
            WARNING_COLOR,
        ));
    }

    scene
}

fn push_launch_arrow(scene: &mut Scene, solution: &Solution, mapping: &ScreenMapping) {
    let height_m = solution.params.height_m;
    let length_m = arrow_length_m(solution.params.distance_m);
    let theta = solution.angle_rad;

    let tail = mapping.to_screen(0.0, height_m);
    let tip = mapping.to_screen(length_m * theta.cos(), height_m + length_m * theta.sin());
    scene.push(DrawCommand::Line {
        from: tail,
        to: tip,
        stroke: Stroke {
            color: ARROW_COLOR,
            width: STROKE_WIDTH_PX,
        },
    });

    // Direction on screen, where y points down.
    let heading = (tip.y - tail.y).atan2(tip.x - tail.x);
    let barb = |offset: f64| {
        Point::new(
            tip.x - ARROW_HEAD_PX * (heading + offset).cos(),
            tip.y - ARROW_HEAD_PX * (heading + offset).sin(),
        )
    };
    scene.push(DrawCommand::Polygon {
        points: vec![tip, barb(-ARROW_HEAD_SPREAD_RAD), barb(ARROW_HEAD_SPREAD_RAD)],
        fill: ARROW_COLOR,
    });

    let degrees = theta * 180.0 / PI;
    scene.push(label(
        format!("θ ≈ {degrees:.1}°"),
        Point::new(tip.x + 5.0, tip.y - 5.0),
        ANGLE_FONT_PX,
        INK,
    ));
}

fn label(text: String, at: Point, size_px: f64, color: Rgb) -> DrawCommand {
    DrawCommand::Text {
        text,
        at,
        size_px,
        color,
    }
}
