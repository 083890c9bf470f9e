/// Drag-free launch from `(0, height_m)` at `angle_rad` above the horizontal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchState {
    pub angle_rad: f64,
    pub speed_mps: f64,
    pub height_m: f64,
    pub gravity_mps2: f64,
}

pub fn velocity_components(launch: LaunchState) -> (f64, f64) {
    let vx = launch.speed_mps * launch.angle_rad.cos();
    let vy = launch.speed_mps * launch.angle_rad.sin();
    (vx, vy)
}

pub fn trajectory_at_time(launch: LaunchState, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(launch);
    let x = vx * time_s;
    let y = launch.height_m + (vy * time_s) - (0.5 * launch.gravity_mps2 * time_s * time_s);
    (x, y)
}

/// `H + vy²/(2g)`, the height used to size the diagram and trigger the clip
/// warning. The sign of `vy` is ignored.
pub fn apex_height(launch: LaunchState) -> f64 {
    let (_, vy) = velocity_components(launch);
    launch.height_m + (vy * vy) / (2.0 * launch.gravity_mps2)
}

/// Time until the horizontal position reaches `distance_m`.
pub fn time_to_distance(launch: LaunchState, distance_m: f64) -> f64 {
    let (vx, _) = velocity_components(launch);
    distance_m / vx
}

/// `samples` uniform steps over `[0, time_of_flight_s]`, endpoints included.
pub fn sample_trajectory(
    launch: LaunchState,
    time_of_flight_s: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let sample_count = samples.max(2);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 / sample_count as f64) * time_of_flight_s;
            trajectory_at_time(launch, t)
        })
        .collect()
}
