use clap::{Parser, Subcommand};
use chandra_math::wrap_360;
use chandra_phase::{
    SeriesConfig, clamp_fraction, illumination, illumination_series, mean_arguments,
};
use chandra_time::JulianDay;

#[derive(Parser)]
#[command(name = "chandra", about = "Lunar illuminated fraction CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Illuminated fraction and phase angle at one instant
    Illum {
        /// Julian Date
        #[arg(long, allow_negative_numbers = true)]
        jd: f64,
        /// Clamp the fraction into [0, 1]
        #[arg(long)]
        clamp: bool,
    },
    /// Tabulate the illuminated fraction over a Julian Date range
    Series {
        /// First Julian Date
        #[arg(long, allow_negative_numbers = true)]
        start: f64,
        /// Last Julian Date (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        end: f64,
        /// Step in days
        #[arg(long, default_value = "1.0")]
        step: f64,
        /// Clamp fractions into [0, 1]
        #[arg(long)]
        clamp: bool,
        /// Refuse ranges producing more samples than this
        #[arg(long, default_value = "100000")]
        max_samples: usize,
    },
    /// Mean arguments D, M, M' at an instant
    Args {
        /// Julian Date
        #[arg(long, allow_negative_numbers = true)]
        jd: f64,
    },
}

fn require_finite(name: &str, value: f64) -> f64 {
    if !value.is_finite() {
        eprintln!("Invalid {name}: {value} (must be finite)");
        std::process::exit(1);
    }
    value
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Illum { jd, clamp } => {
            let jd = JulianDay::new(require_finite("jd", jd));
            let s = illumination(jd.value());
            let fraction = if clamp {
                clamp_fraction(s.fraction)
            } else {
                s.fraction
            };
            log::debug!("T = {:.12}", jd.centuries_since_j2000());
            println!("{jd}");
            println!(
                "Phase angle: {:.6} deg ({:.6} deg wrapped)",
                s.phase_angle_deg,
                wrap_360(s.phase_angle_deg)
            );
            println!("Illuminated fraction: {fraction:.6} ({:.2}%)", fraction * 100.0);
        }

        Commands::Series {
            start,
            end,
            step,
            clamp,
            max_samples,
        } => {
            let config = SeriesConfig {
                step_days: step,
                clamp,
                max_samples,
            };
            let samples = illumination_series(start, end, &config).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            log::info!("{} samples", samples.len());
            println!("jd\tphase_angle_deg\tfraction");
            for s in &samples {
                println!("{:.6}\t{:.6}\t{:.6}", s.jd, s.phase_angle_deg, s.fraction);
            }
        }

        Commands::Args { jd } => {
            let jd = JulianDay::new(require_finite("jd", jd));
            let t = jd.centuries_since_j2000();
            let args = mean_arguments(t);
            println!("{jd}");
            println!("T  = {t:.12} Julian centuries");
            println!("D  = {:.7} deg", args.d_deg);
            println!("M  = {:.7} deg", args.m_deg);
            println!("M' = {:.7} deg", args.m_prime_deg);
        }
    }
}
