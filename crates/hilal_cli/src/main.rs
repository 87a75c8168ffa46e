use clap::{Parser, Subcommand};
use hilal_base::{
    FixedJitter, GeoLocation, JitterSource, LunarParameters, MAX_BETA_DEG, ReportConfig,
    RngJitter, advanced_report, crescent_report, estimate_sunset, moon_age, nearest_new_moon,
    new_moon_offset_days, synthesize_lunar_parameters,
};
use hilal_time::{CalendarDate, CalendarMonth};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hilal", about = "Approximate new crescent visibility estimator")]
struct Cli {
    /// Log pipeline stages to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Will the new crescent be visible this month from this place?
    Report {
        /// Month to check (YYYY-MM)
        #[arg(long)]
        month: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Place name for display
        #[arg(long, default_value = "Custom Location")]
        name: String,
        /// Country for display
        #[arg(long)]
        country: Option<String>,
        /// Seed the parameter jitter for a reproducible answer
        #[arg(long, conflicts_with = "central")]
        seed: Option<u64>,
        /// Use the jitter-free central estimate
        #[arg(long)]
        central: bool,
        /// Fail instead of reporting "not visible" when the geometry is undefined
        #[arg(long)]
        checked: bool,
    },
    /// Evaluate the visibility criterion for explicit parameters
    Advanced {
        /// Beta in degrees
        #[arg(long, allow_negative_numbers = true)]
        beta: f64,
        /// Maximum beta in degrees
        #[arg(long, allow_negative_numbers = true, default_value_t = MAX_BETA_DEG)]
        max_beta: f64,
        /// Phi in degrees
        #[arg(long, allow_negative_numbers = true)]
        phi: f64,
        /// sin(phi); derived from --phi when omitted
        #[arg(long, allow_negative_numbers = true)]
        sin_phi: Option<f64>,
        /// Reject parameters for which the criterion is undefined
        #[arg(long)]
        checked: bool,
    },
    /// Moon age in days at 00:00 of a date
    MoonAge {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Approximate new moon nearest to a date
    NewMoon {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Synthesize lunar parameters for a date
    Params {
        /// Date (YYYY-MM-DD), normally a new moon
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        lon: f64,
        /// Seed the parameter jitter
        #[arg(long, conflicts_with = "central")]
        seed: Option<u64>,
        /// Use the jitter-free central estimate
        #[arg(long)]
        central: bool,
    },
    /// Rough local sunset time
    Sunset {
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(s: &str) -> CalendarDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date '{s}': {e}");
        std::process::exit(1);
    })
}

fn parse_month(s: &str) -> CalendarMonth {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid month '{s}': {e}");
        std::process::exit(1);
    })
}

fn require_location(name: String, country: Option<String>, lat: f64, lon: f64) -> GeoLocation {
    GeoLocation::new(name, country, lat, lon).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn jitter_for(seed: Option<u64>, central: bool) -> Box<dyn JitterSource> {
    if central {
        Box::new(FixedJitter::center())
    } else {
        Box::new(RngJitter::seeded(seed))
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Report {
            month,
            lat,
            lon,
            name,
            country,
            seed,
            central,
            checked,
        } => {
            let month = parse_month(&month);
            let location = require_location(name, country, lat, lon);
            let config = ReportConfig {
                seed,
                central_estimate: central,
                checked,
            };
            match crescent_report(&month, &location, &config) {
                Ok(report) => println!("{report}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Advanced {
            beta,
            max_beta,
            phi,
            sin_phi,
            checked,
        } => {
            let params = match sin_phi {
                Some(sin_phi) => LunarParameters::from_raw(beta, max_beta, phi, sin_phi),
                None => LunarParameters::new(beta, max_beta, phi),
            };
            match advanced_report(&params, checked) {
                Ok(report) => println!("{report}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::MoonAge { date } => {
            let date = parse_date(&date);
            println!("Moon age on {date}: {:.2} days", moon_age(&date));
        }

        Commands::NewMoon { date } => {
            let date = parse_date(&date);
            let offset = new_moon_offset_days(moon_age(&date));
            let new_moon = nearest_new_moon(&date);
            println!("Nearest new moon to {date}: {new_moon} ({offset:+} days)");
            println!("  {}", new_moon.format_long());
        }

        Commands::Params {
            date,
            lat,
            lon,
            seed,
            central,
        } => {
            let date = parse_date(&date);
            let location = require_location("Custom Location".to_string(), None, lat, lon);
            let mut jitter = jitter_for(seed, central);
            let p = synthesize_lunar_parameters(&date, &location, jitter.as_mut());
            println!("beta:    {:.4} deg", p.beta_deg);
            println!("maxBeta: {:.4} deg", p.max_beta_deg);
            println!("phi:     {:.4} deg", p.phi_deg);
            println!("sinPhi:  {:.6}", p.sin_phi);
        }

        Commands::Sunset { lat, date } => {
            let date = parse_date(&date);
            match estimate_sunset(lat, &date) {
                Ok(time) => println!("Approximate sunset on {date}: {time}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
