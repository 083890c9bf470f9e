use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use thiserror::Error;

use jump_ball::core::calculator::{JumpBallFields, solve_fields};
use jump_ball::core::diagram::{DiagramConfig, build_trajectory_scene};
use jump_ball::core::error::{FieldError, RenderError, SolveError};
use jump_ball::core::kinetic::{calculate_kinetic_energy, format_kinetic_energy};
use jump_ball::core::raster::{render_png, render_svg};
use jump_ball::core::solver::format_launch_speed;

#[derive(Parser)]
#[command(name = "jump_ball")]
#[command(version)]
#[command(about = "Kinetic energy and jump-ball launch speed calculators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Kinetic energy KE = M * V^2 / 2
    Kinetic {
        /// Mass M (kg)
        #[arg(short = 'm', long, allow_hyphen_values = true)]
        mass: String,

        /// Velocity V (m/s)
        #[arg(short = 'v', long, allow_hyphen_values = true)]
        velocity: String,
    },

    /// Initial speed for a ball thrown off a building to land at distance L.
    /// Fields left out are asked for on stdin.
    Jump {
        /// Building height H (m)
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,

        /// Horizontal distance L to the landing point (m)
        #[arg(long, allow_hyphen_values = true)]
        distance: Option<String>,

        /// Launch angle above the horizontal (degrees)
        #[arg(long, allow_hyphen_values = true)]
        angle: Option<String>,

        /// Gravity g (m/s^2)
        #[arg(long, allow_hyphen_values = true)]
        gravity: Option<String>,

        /// Write the trajectory diagram as SVG
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Write the trajectory diagram as PNG (timestamped name when no path is given)
        #[arg(long, num_args = 0..=1)]
        png: Option<Option<PathBuf>>,

        /// Print the diagram's drawing commands as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Field(#[from] FieldError),
    #[error("{0}")]
    Solve(#[from] SolveError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("could not serialize diagram: {0}")]
    Json(#[from] serde_json::Error),
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("input ended unexpectedly (EOF)")]
    InputEnded,
}

fn read_field(prompt: &str) -> Result<String, CliError> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(CliError::InputEnded);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn field_or_prompt(value: Option<String>, prompt: &str) -> Result<String, CliError> {
    match value {
        Some(value) => Ok(value),
        None => read_field(prompt),
    }
}

fn timestamped_png_path() -> PathBuf {
    PathBuf::from(format!(
        "trajectory_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn run_kinetic(mass: &str, velocity: &str) -> Result<(), CliError> {
    let energy = calculate_kinetic_energy(mass, velocity)?;
    println!("{}", format_kinetic_energy(energy));
    Ok(())
}

fn run_jump(
    fields: JumpBallFields<'_>,
    svg: Option<PathBuf>,
    png: Option<Option<PathBuf>>,
    json: bool,
) -> Result<(), CliError> {
    let solution = solve_fields(fields)?;

    println!("{}", format_launch_speed(solution.speed_mps));
    println!(
        "Launch velocity: vx = {:.4} m/s, vy = {:.4} m/s",
        solution.vx_mps, solution.vy_mps
    );
    println!("Time of flight: {:.4} s", solution.flight_time_s);
    println!("Apex height: {:.4} m", solution.apex_height_m);

    let scene = build_trajectory_scene(&solution, &DiagramConfig::default());
    if json {
        println!("{}", serde_json::to_string_pretty(&scene)?);
    }
    if let Some(path) = svg {
        fs::write(&path, render_svg(&scene)?)?;
        info!("wrote {}", path.display());
        println!("Diagram saved to {}", path.display());
    }
    if let Some(path) = png {
        let path = path.unwrap_or_else(timestamped_png_path);
        render_png(&scene, &path)?;
        println!("Diagram saved to {}", path.display());
    }
    Ok(())
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Kinetic { mass, velocity } => run_kinetic(&mass, &velocity),
        Commands::Jump {
            height,
            distance,
            angle,
            gravity,
            svg,
            png,
            json,
        } => {
            let height = field_or_prompt(height, "Height H (m): ")?;
            let distance = field_or_prompt(distance, "Distance L (m): ")?;
            let angle = field_or_prompt(angle, "Angle θ (degrees): ")?;
            let gravity = field_or_prompt(gravity, "Gravity g (m/s^2): ")?;
            let fields = JumpBallFields {
                height: &height,
                distance: &distance,
                angle: &angle,
                gravity: &gravity,
            };
            run_jump(fields, svg, png, json)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
