use crate::core::constants::BUILDING_WIDTH_CAP_M;
use crate::core::scene::Point;

const RANGE_PADDING_RATIO: f64 = 1.1;

/// Width drawn for the launch building. Purely visual.
pub fn building_width_m(distance_m: f64) -> f64 {
    (distance_m * 0.3 + 1.0).min(BUILDING_WIDTH_CAP_M)
}

/// World rectangle shown on the canvas, in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl WorldWindow {
    /// From the left edge of the building to a little past the landing point,
    /// and from the ground to the apex or `ceiling_m`, whichever is lower.
    pub fn for_launch(distance_m: f64, apex_height_m: f64, ceiling_m: f64) -> Self {
        Self {
            x_min: -building_width_m(distance_m),
            x_max: distance_m * RANGE_PADDING_RATIO,
            y_min: 0.0,
            y_max: apex_height_m.min(ceiling_m),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// World → canvas mapping with one scale for both axes, so angles keep their
/// shape on screen. Screen y grows downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMapping {
    pub scale: f64,
    pub x_min: f64,
    pub y_min: f64,
    pub margin: f64,
    pub canvas_height: f64,
}

impl ScreenMapping {
    pub fn fit(window: &WorldWindow, canvas_width: f64, canvas_height: f64, margin: f64) -> Self {
        let scale = ((canvas_width - 2.0 * margin) / window.width())
            .min((canvas_height - 2.0 * margin) / window.height());
        Self {
            scale,
            x_min: window.x_min,
            y_min: window.y_min,
            margin,
            canvas_height,
        }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.margin + (x - self.x_min) * self.scale,
            self.canvas_height - self.margin - (y - self.y_min) * self.scale,
        )
    }
}
