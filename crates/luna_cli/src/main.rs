mod date_parse;
mod error;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use luna_core::constants::SUN_SEMI_MAJOR_AXIS_KM;
use luna_rs::{
    CivilTime, DEFAULT_FORMAT, DEFAULT_LINES, Hemisphere, PhaseName, art_at, format_countdown,
    hunt_at, quarters_between, report_at, state_at,
};
use tracing_subscriber::EnvFilter;

use crate::date_parse::parse_date;
use crate::error::CliError;

/// Equatorial radius of the Earth in km.
const EARTH_RADIUS_KM: f64 = 6378.16;
const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Parser)]
#[command(name = "luna", about = "Phase of the Moon", version)]
struct Cli {
    /// Log debug detail to stderr (LUNA_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One-line phase report
    Phase {
        /// Unix time in seconds
        #[arg(long, conflicts_with = "date", allow_negative_numbers = true)]
        time: Option<i64>,
        /// Date/time text (UTC)
        #[arg(long)]
        date: Option<String>,
        /// Format string (%a %J %e %s %p %P %N %n %t %%)
        #[arg(long, short, default_value = DEFAULT_FORMAT)]
        format: String,
    },
    /// ASCII-art moon
    Art {
        /// Height in lines
        #[arg(short, long, default_value_t = DEFAULT_LINES,
              value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        lines: usize,
        /// Date/time words (UTC), joined with spaces
        #[arg(num_args = 0..=3)]
        when: Vec<String>,
    },
    /// Previous and next quarter, with countdowns and lunation number
    Hunt {
        /// Date/time text (UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// List quarters in a range
    Quarters {
        /// Start date/time text (UTC)
        #[arg(long)]
        from: String,
        /// End date/time text (UTC), exclusive
        #[arg(long)]
        to: String,
    },
    /// Full Sun/Moon state
    Info {
        /// Date/time text (UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// Astronomical Julian Date
    Jd {
        /// Date/time text (UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// Calendar date and time of a Julian Date
    Calendar {
        /// Astronomical Julian Date
        #[arg(allow_negative_numbers = true)]
        jd: f64,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LUNA_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli.command, Utc::now()) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Resolve optional date text to a UTC calendar time, defaulting to `now`.
fn resolve(text: Option<&str>, now: DateTime<Utc>) -> Result<CivilTime, CliError> {
    let at = match text {
        Some(t) => parse_date(t, now)?,
        None => now,
    };
    Ok(CivilTime::from_unix(at.timestamp()))
}

fn run(command: &Commands, now: DateTime<Utc>) -> Result<String, CliError> {
    match command {
        Commands::Phase { time, date, format } => {
            let at = match time {
                Some(secs) => CivilTime::from_unix(*secs),
                None => resolve(date.as_deref(), now)?,
            };
            Ok(format!("{}\n", report_at(&at, format)?))
        }

        Commands::Art { lines, when } => {
            let text = when.join(" ");
            let at = resolve((!text.is_empty()).then_some(text.as_str()), now)?;
            Ok(art_at(&at, *lines)?)
        }

        Commands::Hunt { date } => {
            let at = resolve(date.as_deref(), now)?;
            let jd = at.to_jd();
            let h = hunt_at(&at)?;
            let since = ((jd - h.prev.jd) * SECONDS_PER_DAY) as i64;
            let until = ((h.next.jd - jd) * SECONDS_PER_DAY) as i64;
            Ok(format!(
                "Lunation:  {}\n\
                 Previous:  {:<13}  {}  ({} ago)\n\
                 Next:      {:<13}  {}  (in {})\n",
                h.lunation_number(),
                h.prev.quarter.name(),
                CivilTime::from_jd(h.prev.jd),
                format_countdown(since),
                h.next.quarter.name(),
                CivilTime::from_jd(h.next.jd),
                format_countdown(until),
            ))
        }

        Commands::Quarters { from, to } => {
            let start = resolve(Some(from), now)?;
            let end = resolve(Some(to), now)?;
            let mut out = String::new();
            for e in quarters_between(&start, &end)? {
                out.push_str(&format!(
                    "{}  {:<13}  lunation {}\n",
                    e.utc,
                    e.quarter.name(),
                    e.lunation
                ));
            }
            Ok(out)
        }

        Commands::Info { date } => {
            let at = resolve(date.as_deref(), now)?;
            let jd = at.to_jd();
            let s = state_at(&at)?;
            let h = hunt_at(&at)?;
            let name = PhaseName::of(&s.phase);
            Ok(format!(
                "Universal time:     {at}\n\
                 Julian date:        {jd:.5}\n\
                 Phase:              {name} {}\n\
                 Illuminated:        {:.1}%\n\
                 Age of Moon:        {:.2} days\n\
                 Lunation:           {}\n\
                 Moon distance:      {:.0} km ({:.1} Earth radii)\n\
                 Moon subtends:      {:.4} deg\n\
                 Moon parallax:      {:.4} deg\n\
                 Moon longitude:     {:.4} deg\n\
                 Moon latitude:      {:.4} deg\n\
                 Sun distance:       {:.0} km ({:.3} AU)\n\
                 Sun subtends:       {:.4} deg\n",
                name.emoji(Hemisphere::Northern),
                s.phase.illuminated_percent(),
                s.phase.age_days,
                h.lunation_number(),
                s.moon_distance_km,
                s.moon_distance_km / EARTH_RADIUS_KM,
                s.moon_angular_diameter_deg,
                s.moon_parallax_deg,
                s.moon_longitude_deg,
                s.moon_latitude_deg,
                s.sun_distance_km,
                s.sun_distance_km / SUN_SEMI_MAJOR_AXIS_KM,
                s.sun_angular_diameter_deg,
            ))
        }

        Commands::Jd { date } => {
            let at = resolve(date.as_deref(), now)?;
            Ok(format!("{:.5}\n", at.to_jd()))
        }

        Commands::Calendar { jd } => {
            if !jd.is_finite() {
                return Err(CliError::InvalidJd(*jd));
            }
            Ok(format!("{}\n", CivilTime::from_jd(*jd)))
        }
    }
}
