use anyhow::Result;
use clap::Parser;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::f32::consts::PI;
use std::fmt;
use std::path::PathBuf;

use crate::params::SimParams;
use crate::sweep::{Scheme, SweepScheme};

/// Number of sample points spanning the horn face.
pub const N_HORN: usize = 60;
/// Number of sample points spanning the slit aperture.
pub const N_SLIT: usize = 100;
/// Phase lag of the edge wave relative to direct slit transmission, in radians.
/// Calibrated against the measured setup, not derived from first principles.
pub const EDGE_PHASE_LAG: f32 = 0.85 * PI;
/// Edge scattering amplitude relative to a single slit sample. Calibrated.
pub const EDGE_SCATTER_COEFF: f32 = 1.8;
/// Peak value of the normalised intensity sweep.
pub const PEAK_INTENSITY: f32 = 100.0;

/// Runtime configuration for the application.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Settings {
    /// Directory for output files.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    pub params: SimParams,
    pub sweep: SweepScheme,
}

fn default_directory() -> PathBuf {
    PathBuf::from("out")
}

pub fn load_default_config() -> Result<Settings> {
    let sedi_dir = retrieve_project_root();
    let default_config_file = sedi_dir.join("config/default.toml");

    let settings: Config = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error loading configuration: {}", err);
            std::process::exit(1);
        });

    let config: Settings = settings.try_deserialize().unwrap_or_else(|err| {
        eprintln!("Error deserializing configuration: {}", err);
        std::process::exit(1);
    });

    validate_config(&config);

    Ok(config)
}

pub fn load_config() -> Result<Settings> {
    // Try to find the project directory in different ways
    let sedi_dir = retrieve_project_root();

    let default_config_file = sedi_dir.join("config/default.toml");
    let local_config = sedi_dir.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        println!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        println!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings: Config = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("sedi"))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error loading configuration: {}", err);
            std::process::exit(1);
        });

    let mut config: Settings = settings.try_deserialize().unwrap_or_else(|err| {
        eprintln!("Error deserializing configuration: {}", err);
        std::process::exit(1);
    });

    // Parse command-line arguments and override values
    let args = CliArgs::parse();

    if let Some(wavelength) = args.w {
        config.params.wavelength = wavelength;
    }
    if let Some(horn) = args.horn {
        config.params.horn_aperture = horn;
    }
    if let Some(l1) = args.l1 {
        config.params.dist_l1 = l1;
    }
    if let Some(l2) = args.l2 {
        config.params.dist_l2 = l2;
    }
    if let Some(slit) = args.slit {
        config.params.slit_width = slit;
    }
    if let Some(screen) = args.screen {
        config.params.screen_width = screen;
    }
    if args.no_edges {
        config.params.enable_edges = false;
    }
    if let Some(dir) = args.dir {
        config.directory = dir;
    }

    // Handle sweep schemes
    if let Some(uniform) = &args.uniform {
        if uniform.len() == 3 {
            config.sweep = SweepScheme {
                scheme: Scheme::Uniform {
                    start: uniform[0],
                    end: uniform[1],
                    step: uniform[2],
                },
            };
        } else {
            eprintln!("Warning: Uniform sweep requires exactly three values. Using default sweep.");
        }
    } else if let Some(angles) = args.angles {
        config.sweep = SweepScheme {
            scheme: Scheme::Custom { angles },
        };
    }

    validate_config(&config);

    println!("{:#?}", config);

    Ok(config)
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the SEDI_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
/// If none of these methods work, the function will panic.
fn retrieve_project_root() -> std::path::PathBuf {
    let sedi_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        std::path::PathBuf::from(manifest_dir)
    } else if let Ok(path) = env::var("SEDI_ROOT_DIR") {
        // Allow explicit configuration via environment variable
        std::path::PathBuf::from(path)
    } else {
        // Fallback: try to find the nearest directory containing a "config" subdirectory
        // Start from the executable directory and walk upward
        let exe_path = env::current_exe().expect("Failed to get current executable path");
        let mut current_dir = exe_path
            .parent()
            .expect("Failed to get executable directory")
            .to_path_buf();
        let mut found = false;

        while !found && current_dir.parent().is_some() {
            if current_dir.join("config").is_dir() {
                found = true;
            } else {
                current_dir = current_dir.parent().unwrap().to_path_buf();
            }
        }

        if found {
            current_dir
        } else {
            panic!("Could not find project root directory");
        }
    };
    sedi_dir
}

fn validate_config(config: &Settings) {
    assert!(
        config.params.wavelength > 0.0,
        "Wavelength must be greater than 0"
    );
    // Degenerate widths and distances are deliberately left alone; they
    // produce defined but physically meaningless numerics downstream.
}

#[derive(Parser, Debug)]
#[command(version, about = "SEDI - Slit and Edge Diffraction Interference")]
pub struct CliArgs {
    /// Wavelength in units of the geometry (millimetres in the reference setup).
    #[arg(short, long)]
    w: Option<f32>,

    /// Width of the radiating horn face.
    #[arg(long)]
    horn: Option<f32>,

    /// Source to slit-plane distance.
    #[arg(long)]
    l1: Option<f32>,

    /// Slit-plane to detector distance.
    #[arg(long)]
    l2: Option<f32>,

    /// Width of the slit aperture.
    #[arg(long)]
    slit: Option<f32>,

    /// Total width of the obstructing screen. The slit is centred within it.
    #[arg(long)]
    screen: Option<f32>,

    /// Suppress the screen-edge diffraction contribution, as if the edges
    /// were covered with absorber.
    #[arg(long)]
    no_edges: bool,

    /// Use a uniform angle sweep with the specified start, end and step in degrees.
    #[arg(long, num_args = 3, value_delimiter = ' ', group = "sweep")]
    uniform: Option<Vec<f32>>,

    /// Use an explicit list of observation angles in degrees.
    #[arg(long, num_args = 1.., value_delimiter = ' ', group = "sweep")]
    angles: Option<Vec<f32>>,

    /// Directory for output files.
    #[arg(short, long)]
    dir: Option<PathBuf>,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Output Directory: {:?}
  - {}",
            self.directory, self.params,
        )
    }
}
