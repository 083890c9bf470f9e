use clap::Parser;
use env_logger::Env;
use log::warn;
use macroquad::prelude::*;

use jump_ball::core::calculator::{JumpBallFields, JumpBallView, calculate_jump_ball};
use jump_ball::core::diagram::DiagramConfig;

use crate::constants::{
    ERROR_COLOR, HINT_FONT_SIZE, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES,
    RESULT_COLOR, STATUS_BAR_PX, STATUS_FONT_SIZE, UI_FONT_PATH, WINDOW_BG, WINDOW_PADDING_PX,
};
use crate::render::{draw_scene, draw_ui_text, place_canvas};

/// Shows the solved jump-ball trajectory in a window.
#[derive(Parser)]
#[command(name = "trajectory_viewer")]
#[command(version)]
struct ViewerArgs {
    /// Building height H (m)
    #[arg(long, default_value = "10", allow_hyphen_values = true)]
    height: String,

    /// Horizontal distance L to the landing point (m)
    #[arg(long, default_value = "20", allow_hyphen_values = true)]
    distance: String,

    /// Launch angle above the horizontal (degrees)
    #[arg(long, default_value = "45", allow_hyphen_values = true)]
    angle: String,

    /// Gravity g (m/s^2)
    #[arg(long, default_value = "9.8", allow_hyphen_values = true)]
    gravity: String,
}

impl ViewerArgs {
    fn fields(&self) -> JumpBallFields<'_> {
        JumpBallFields {
            height: &self.height,
            distance: &self.distance,
            angle: &self.angle,
            gravity: &self.gravity,
        }
    }
}

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Jump Ball Trajectory".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn draw_status(view: &JumpBallView, font: Option<&Font>) {
    let (text, color) = if view.error.is_empty() {
        (view.result.as_str(), RESULT_COLOR)
    } else {
        (view.error.as_str(), ERROR_COLOR)
    };
    draw_ui_text(
        text,
        WINDOW_PADDING_PX,
        WINDOW_PADDING_PX + f32::from(STATUS_FONT_SIZE),
        STATUS_FONT_SIZE,
        color,
        font,
    );
    draw_ui_text(
        "Esc to quit",
        WINDOW_PADDING_PX,
        STATUS_BAR_PX - 4.0,
        HINT_FONT_SIZE,
        DARKGRAY,
        font,
    );
}

pub(crate) async fn run() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = ViewerArgs::parse();
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("could not load '{UI_FONT_PATH}': {err}; falling back to the default font");
            None
        }
    };

    let view = calculate_jump_ball(args.fields(), &DiagramConfig::default());
    if view.scene.is_blank() {
        warn!("nothing to draw: {}", view.error);
    }

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        clear_background(WINDOW_BG);
        let placement = place_canvas(screen_width(), screen_height(), &view.scene);
        draw_scene(&view.scene, placement, ui_font.as_ref());
        draw_status(&view, ui_font.as_ref());

        next_frame().await;
    }
}
