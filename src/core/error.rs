use std::fmt;

use thiserror::Error;

/// Input fields of the jump-ball calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Height,
    Distance,
    Angle,
    Gravity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Height => "height",
            Field::Distance => "distance",
            Field::Angle => "angle",
            Field::Gravity => "gravity",
        };
        f.write_str(name)
    }
}

/// Failure of the kinetic energy calculator.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("請輸入有效的 M 和 V！")]
    InvalidNumber,
}

/// Terminal failures of the required-speed solver. The display text is the
/// message shown to the user in place of a result.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("請輸入所有欄位！")]
    MissingField(Field),
    #[error("高度 H、距離 L、重力 g 必須為正數。")]
    NonPositive,
    #[error("角度太接近 90°，水平方向速度幾乎為 0，無法計算。")]
    NearVertical,
    #[error("以目前的高度、距離與角度，物理上無法達到這個落點。請調整參數。")]
    Unreachable,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing backend failed: {0}")]
    Backend(String),
    #[error("could not write image: {0}")]
    Io(#[from] std::io::Error),
}
