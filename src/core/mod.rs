pub mod ballistics;
pub mod calculator;
pub mod constants;
pub mod diagram;
pub mod error;
pub mod input;
pub mod kinetic;
pub mod raster;
pub mod scene;
pub mod solver;
pub mod window;
