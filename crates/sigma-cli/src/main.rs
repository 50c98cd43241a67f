//! sigma CLI: decompose, rebuild and inspect 2×2 linear maps.

use clap::{Parser, Subcommand};

mod commands;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "sigma_cli=warn,sigma_math=warn";

#[derive(Parser)]
#[command(name = "sigma")]
#[command(version, about = "Closed-form SVD of 2×2 matrices")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose [[A, B], [C, D]] into U · Σ · Vᵗ.
    Decompose {
        /// Matrix entries, row-major.
        #[arg(num_args = 4, value_names = ["A", "B", "C", "D"], allow_negative_numbers = true)]
        entries: Vec<f64>,

        /// Path to a tolerances file (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Rebuild a matrix from rotation angles and singular values.
    Reconstruct {
        /// Rotation angle of U, in degrees.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        u_angle: f64,

        /// First singular value.
        #[arg(long, default_value_t = 1.0)]
        s0: f64,

        /// Second singular value.
        #[arg(long, default_value_t = 1.0)]
        s1: f64,

        /// Rotation angle of Vᵗ, in degrees.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        vt_angle: f64,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the rotation matrix for an angle in degrees.
    Rotation {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the rotation angle of [[A, B], [C, D]].
    Angle {
        /// Matrix entries, row-major.
        #[arg(num_args = 4, value_names = ["A", "B", "C", "D"], allow_negative_numbers = true)]
        entries: Vec<f64>,
    },

    /// Apply [[A, B], [C, D]] to the point (X, Y).
    Apply {
        /// Matrix entries then point coordinates.
        #[arg(
            num_args = 6,
            value_names = ["A", "B", "C", "D", "X", "Y"],
            allow_negative_numbers = true
        )]
        values: Vec<f64>,
    },

    /// Show the unit square after Vᵗ, Σ·Vᵗ and U·Σ·Vᵗ.
    Stages {
        /// Matrix entries, row-major.
        #[arg(num_args = 4, value_names = ["A", "B", "C", "D"], allow_negative_numbers = true)]
        entries: Vec<f64>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decompose {
            entries,
            config,
            json,
        } => commands::decompose(&entries, config.as_deref(), json),
        Commands::Reconstruct {
            u_angle,
            s0,
            s1,
            vt_angle,
            json,
        } => commands::reconstruct(u_angle, s0, s1, vt_angle, json),
        Commands::Rotation { degrees, json } => commands::rotation(degrees, json),
        Commands::Angle { entries } => commands::angle(&entries),
        Commands::Apply { values } => commands::apply(&values),
        Commands::Stages { entries, json } => commands::stages(&entries, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
