use log::debug;

use crate::core::diagram::{DiagramConfig, build_trajectory_scene};
use crate::core::error::SolveError;
use crate::core::scene::Scene;
use crate::core::solver::{LaunchParams, Solution, format_launch_speed, solve_launch_speed};

/// Raw text of the four jump-ball fields.
#[derive(Clone, Copy, Debug)]
pub struct JumpBallFields<'a> {
    pub height: &'a str,
    pub distance: &'a str,
    pub angle: &'a str,
    pub gravity: &'a str,
}

/// Everything one calculation writes back: the result line, the error line
/// and the canvas contents. Exactly one of `result` and `error` is non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct JumpBallView {
    pub result: String,
    pub error: String,
    pub scene: Scene,
}

pub fn solve_fields(fields: JumpBallFields<'_>) -> Result<Solution, SolveError> {
    let params = LaunchParams::from_fields(
        fields.height,
        fields.distance,
        fields.angle,
        fields.gravity,
    )?;
    solve_launch_speed(params)
}

/// One press of the calculate button. Failures replace the result with the
/// error message and leave a blank canvas.
pub fn calculate_jump_ball(fields: JumpBallFields<'_>, config: &DiagramConfig) -> JumpBallView {
    match solve_fields(fields) {
        Ok(solution) => JumpBallView {
            result: format_launch_speed(solution.speed_mps),
            error: String::new(),
            scene: build_trajectory_scene(&solution, config),
        },
        Err(err) => {
            debug!("jump ball calculation failed: {err:?}");
            JumpBallView {
                result: String::new(),
                error: err.to_string(),
                scene: Scene::blank(config.canvas_width, config.canvas_height),
            }
        }
    }
}
