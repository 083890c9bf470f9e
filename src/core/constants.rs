use crate::core::scene::Rgb;

pub const CANVAS_WIDTH_PX: u32 = 500;
pub const CANVAS_HEIGHT_PX: u32 = 300;
pub const CANVAS_MARGIN_PX: f64 = 40.0;

pub const MAX_DISPLAY_HEIGHT_M: f64 = 40.0; // apex above this is clipped
pub const TRAJECTORY_SAMPLES: usize = 150;

// |cos(theta)| below this means the horizontal velocity is effectively zero.
pub const COS_EPSILON: f64 = 1e-6;

pub const BUILDING_WIDTH_CAP_M: f64 = 3.0;
pub const ARROW_LENGTH_CAP_M: f64 = 3.0;
pub const ARROW_HEAD_PX: f64 = 10.0;
pub const ARROW_HEAD_SPREAD_RAD: f64 = std::f64::consts::FRAC_PI_6;

pub const STROKE_WIDTH_PX: f64 = 2.0;
pub const LABEL_FONT_PX: f64 = 12.0;
pub const ANGLE_FONT_PX: f64 = 14.0;

pub const INK: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const BUILDING_FILL: Rgb = Rgb::new(0xdd, 0xdd, 0xdd);
pub const BUILDING_STROKE: Rgb = Rgb::new(0x55, 0x55, 0x55);
pub const TRAJECTORY_COLOR: Rgb = Rgb::new(0xff, 0x00, 0x00);
pub const ARROW_COLOR: Rgb = Rgb::new(0x00, 0x77, 0x00);
pub const WARNING_COLOR: Rgb = Rgb::new(0xff, 0x00, 0x00);
pub const CANVAS_BACKGROUND: Rgb = Rgb::new(0xff, 0xff, 0xff);
