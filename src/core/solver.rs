use log::debug;

use crate::core::ballistics::{LaunchState, apex_height, time_to_distance};
use crate::core::constants::COS_EPSILON;
use crate::core::error::{Field, SolveError};
use crate::core::input::parse_finite;

/// Launch height, horizontal distance to the landing point, launch angle and
/// gravity, as entered by the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParams {
    pub height_m: f64,
    pub distance_m: f64,
    pub angle_deg: f64,
    pub gravity_mps2: f64,
}

impl LaunchParams {
    pub fn from_fields(
        height: &str,
        distance: &str,
        angle: &str,
        gravity: &str,
    ) -> Result<Self, SolveError> {
        let read = |raw: &str, field: Field| {
            parse_finite(raw).ok_or_else(|| {
                debug!("{field} field {raw:?} is not a finite number");
                SolveError::MissingField(field)
            })
        };
        let params = Self {
            height_m: read(height, Field::Height)?,
            distance_m: read(distance, Field::Distance)?,
            angle_deg: read(angle, Field::Angle)?,
            gravity_mps2: read(gravity, Field::Gravity)?,
        };
        params.validate()?;
        Ok(params)
    }

    /// All values finite; height, distance and gravity strictly positive. The
    /// angle is unconstrained.
    pub fn validate(&self) -> Result<(), SolveError> {
        let fields = [
            (self.height_m, Field::Height),
            (self.distance_m, Field::Distance),
            (self.angle_deg, Field::Angle),
            (self.gravity_mps2, Field::Gravity),
        ];
        if let Some((_, field)) = fields.iter().find(|(value, _)| !value.is_finite()) {
            return Err(SolveError::MissingField(*field));
        }
        if self.height_m <= 0.0 || self.distance_m <= 0.0 || self.gravity_mps2 <= 0.0 {
            return Err(SolveError::NonPositive);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    pub params: LaunchParams,
    pub angle_rad: f64,
    pub speed_mps: f64,
    pub vx_mps: f64,
    pub vy_mps: f64,
    pub apex_height_m: f64,
    pub flight_time_s: f64,
}

impl Solution {
    pub fn launch_state(&self) -> LaunchState {
        LaunchState {
            angle_rad: self.angle_rad,
            speed_mps: self.speed_mps,
            height_m: self.params.height_m,
            gravity_mps2: self.params.gravity_mps2,
        }
    }
}

/// Initial speed that carries a projectile launched from `(0, H)` at the given
/// angle to `(L, 0)`:
///
/// `v0 = L · sqrt(g / (2·cos²θ·(H + L·tanθ)))`
pub fn solve_launch_speed(params: LaunchParams) -> Result<Solution, SolveError> {
    params.validate()?;

    let theta = params.angle_deg.to_radians();
    let cos_theta = theta.cos();
    let tan_theta = theta.tan();

    if cos_theta.abs() < COS_EPSILON {
        debug!("cos(theta) = {cos_theta:e} for {} deg", params.angle_deg);
        return Err(SolveError::NearVertical);
    }

    // H + L·tanθ is how far the target sits below the launch line; the
    // parabola only bends down to it when that drop is positive.
    let denom = 2.0 * cos_theta * cos_theta * (params.height_m + params.distance_m * tan_theta);
    if denom <= 0.0 {
        debug!("denominator {denom} is not positive");
        return Err(SolveError::Unreachable);
    }
    // A backwards launch only meets x = L at negative time.
    if cos_theta < 0.0 {
        debug!("launch points away from the target (cos(theta) = {cos_theta})");
        return Err(SolveError::Unreachable);
    }

    let speed_mps = params.distance_m * (params.gravity_mps2 / denom).sqrt();
    if !speed_mps.is_finite() {
        return Err(SolveError::Unreachable);
    }

    let launch = LaunchState {
        angle_rad: theta,
        speed_mps,
        height_m: params.height_m,
        gravity_mps2: params.gravity_mps2,
    };
    let solution = Solution {
        params,
        angle_rad: theta,
        speed_mps,
        vx_mps: speed_mps * cos_theta,
        vy_mps: speed_mps * theta.sin(),
        apex_height_m: apex_height(launch),
        flight_time_s: time_to_distance(launch, params.distance_m),
    };
    debug!("solved {solution:?}");
    Ok(solution)
}

pub fn format_launch_speed(speed_mps: f64) -> String {
    format!("所需初速度 v₀ ≈ {speed_mps:.2} m/s")
}

#[cfg(test)]
mod tests {
    use super::{LaunchParams, format_launch_speed, solve_launch_speed};
    use crate::core::ballistics::trajectory_at_time;
    use crate::core::error::{Field, SolveError};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn params(height_m: f64, distance_m: f64, angle_deg: f64, gravity_mps2: f64) -> LaunchParams {
        LaunchParams {
            height_m,
            distance_m,
            angle_deg,
            gravity_mps2,
        }
    }

    #[test]
    fn solves_reference_launch() {
        let solution =
            solve_launch_speed(params(10.0, 20.0, 45.0, 9.8)).expect("launch should be solvable");

        // 20 * sqrt(9.8 / 30)
        assert_close(solution.speed_mps, 11.4310, 0.0001);
        assert_eq!(format_launch_speed(solution.speed_mps), "所需初速度 v₀ ≈ 11.43 m/s");
    }

    #[test]
    fn downward_launch_apex_counts_vertical_speed() {
        let solution = solve_launch_speed(params(39.9, 100.0, -20.0, 9.8)).expect("solvable");

        assert_close(solution.vx_mps, solution.speed_mps * (-20.0f64).to_radians().cos(), 1e-9);
        assert!(solution.vy_mps < 0.0);
        assert_close(
            solution.apex_height_m,
            39.9 + solution.vy_mps * solution.vy_mps / (2.0 * 9.8),
            1e-9,
        );
        assert!(solution.apex_height_m > 40.0);
    }

    #[test]
    fn solved_speed_lands_on_target() {
        for (h, l, angle, g) in [
            (10.0, 20.0, 45.0, 9.8),
            (2.0, 50.0, 15.0, 9.8),
            (30.0, 5.0, -40.0, 1.62),
            (1.0, 1.0, 0.0, 24.8),
            (5.0, 12.0, 80.0, 3.7),
            (8.0, 10.0, 405.0, 9.8),
        ] {
            let solution = solve_launch_speed(params(h, l, angle, g)).expect("solvable");
            assert!(solution.speed_mps.is_finite() && solution.speed_mps >= 0.0);
            assert!(solution.flight_time_s > 0.0);

            let (x, y) = trajectory_at_time(solution.launch_state(), solution.flight_time_s);
            assert_close(x, l, 1e-9 * l.max(1.0));
            assert_close(y, 0.0, 1e-7 * h.max(l));
        }
    }

    #[test]
    fn rejects_vertical_launch() {
        for angle in [90.0, -90.0, 270.0, 90.00001] {
            assert_eq!(
                solve_launch_speed(params(10.0, 20.0, angle, 9.8)),
                Err(SolveError::NearVertical),
                "angle {angle}"
            );
        }
    }

    #[test]
    fn rejects_target_above_launch_line() {
        assert_eq!(
            solve_launch_speed(params(1.0, 20.0, -45.0, 9.8)),
            Err(SolveError::Unreachable)
        );
        assert_eq!(
            solve_launch_speed(params(0.5, 100.0, -89.0, 9.8)),
            Err(SolveError::Unreachable)
        );
    }

    #[test]
    fn near_zero_drop_never_yields_infinite_speed() {
        // tan(-45°) pulls H + L·tanθ to (almost exactly) zero.
        let result = solve_launch_speed(params(20.0, 20.0, -45.0, 9.8));
        if let Ok(solution) = result {
            assert!(solution.speed_mps.is_finite());
        }
    }

    #[test]
    fn rejects_backwards_launch() {
        assert_eq!(
            solve_launch_speed(params(100.0, 10.0, 135.0, 9.8)),
            Err(SolveError::Unreachable)
        );
    }

    #[test]
    fn rejects_non_positive_inputs() {
        for p in [
            params(0.0, 20.0, 45.0, 9.8),
            params(10.0, -1.0, 45.0, 9.8),
            params(10.0, 20.0, 45.0, 0.0),
        ] {
            assert_eq!(solve_launch_speed(p), Err(SolveError::NonPositive));
        }
    }

    #[test]
    fn parses_fields_before_checking_domain() {
        assert_eq!(
            LaunchParams::from_fields("abc", "-5", "45", "9.8"),
            Err(SolveError::MissingField(Field::Height))
        );
        assert_eq!(
            LaunchParams::from_fields("10", "20", "", "9.8"),
            Err(SolveError::MissingField(Field::Angle))
        );
        assert_eq!(
            LaunchParams::from_fields("10", "Infinity", "45", "9.8"),
            Err(SolveError::MissingField(Field::Distance))
        );
        assert_eq!(
            LaunchParams::from_fields("10", "-5", "45", "9.8"),
            Err(SolveError::NonPositive)
        );
        assert_eq!(
            LaunchParams::from_fields(" 10 m", "20", "-30", "9.8"),
            Ok(params(10.0, 20.0, -30.0, 9.8))
        );
    }

    #[test]
    fn error_messages_match_form_text() {
        assert_eq!(SolveError::MissingField(Field::Gravity).to_string(), "請輸入所有欄位！");
        assert_eq!(SolveError::NonPositive.to_string(), "高度 H、距離 L、重力 g 必須為正數。");
    }
}
