use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1040;
pub const INITIAL_WINDOW_HEIGHT: i32 = 700;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/NotoSansTC-Regular.ttf";

pub const STATUS_BAR_PX: f32 = 64.0;
pub const WINDOW_PADDING_PX: f32 = 20.0;
pub const STATUS_FONT_SIZE: u16 = 24;
pub const HINT_FONT_SIZE: u16 = 16;

pub const WINDOW_BG: Color = Color::new(0.92, 0.93, 0.95, 1.0);
pub const CANVAS_FRAME: Color = Color::new(0.55, 0.57, 0.61, 1.0);
pub const RESULT_COLOR: Color = Color::new(0.12, 0.12, 0.14, 1.0);
pub const ERROR_COLOR: Color = Color::new(0.80, 0.10, 0.10, 1.0);
