use clap::{Parser, Subcommand};
use selene_ephem::{ASPECT_BODIES, Body, Ephemeris};
use selene_meeus::MeeusEphemeris;
use selene_search::{
    AspectSearchConfig, IngressSearchConfig, PhaseSearchConfig, VoidOfCourseConfig, VoidPeriod,
    compute_void_period, daily_snapshots, find_next_ingress, find_upcoming_aspects, moon_phase,
    next_full_moon, next_new_moon, next_void_period, par_daily_snapshots,
};
use selene_time::{Instant, UtcTime};
use selene_zodiac::sign_from_longitude;

#[derive(Parser)]
#[command(name = "selene", about = "Selene lunar event engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ecliptic position of a body
    Position {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Body name (sun, moon, mercury, ..., pluto)
        #[arg(long, default_value = "moon")]
        body: String,
    },
    /// Zodiac sign a body occupies
    Sign {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Body name (sun, moon, mercury, ..., pluto)
        #[arg(long, default_value = "moon")]
        body: String,
    },
    /// Moon phase, elongation and illumination
    Phase {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Find the next full moon
    NextFullMoon {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Find the next new moon
    NextNewMoon {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Find the next sign ingress of a body
    NextIngress {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Body name (sun, moon, mercury, ..., pluto)
        #[arg(long, default_value = "moon")]
        body: String,
        /// Search horizon in days (the Moon needs 3; slower bodies more)
        #[arg(long, default_value = "3")]
        horizon_days: f64,
    },
    /// List aspects to the Moon forming at the given instant
    Aspects {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Window length in hours
        #[arg(long, default_value = "24")]
        window_hours: f64,
    },
    /// Void-of-course window for the Moon's current sign
    Void {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Find the next void-of-course window
    NextVoid {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Daily almanac rows (sign, phase, void window) over a date range
    Calendar {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Number of days
        #[arg(long, default_value = "30")]
        days: u32,
        /// Worker threads (1 = serial)
        #[arg(long, default_value = "1")]
        jobs: usize,
    },
}

fn parse_instant(s: &str) -> Instant {
    let utc: UtcTime = s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    Instant::from_utc(&utc)
}

fn parse_ymd(s: &str) -> (i32, u32, u32) {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() == 3 {
        let parsed =
            (parts[0].parse::<i32>(), parts[1].parse::<u32>(), parts[2].parse::<u32>());
        if let (Ok(year), Ok(month), Ok(day)) = parsed {
            return (year, month, day);
        }
    }
    eprintln!("Invalid date: {s} (expected YYYY-MM-DD)");
    std::process::exit(1);
}

fn parse_body(s: &str) -> Body {
    match s.to_lowercase().as_str() {
        "sun" => Body::Sun,
        "moon" => Body::Moon,
        "mercury" => Body::Mercury,
        "venus" => Body::Venus,
        "mars" => Body::Mars,
        "jupiter" => Body::Jupiter,
        "saturn" => Body::Saturn,
        "uranus" => Body::Uranus,
        "neptune" => Body::Neptune,
        "pluto" => Body::Pluto,
        _ => {
            eprintln!("Invalid body name: {s}");
            eprintln!(
                "Valid: Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto"
            );
            std::process::exit(1);
        }
    }
}

fn print_void_period(w: &VoidPeriod) {
    println!(
        "Void-of-course: {} -> {} ({} min)",
        w.start.to_utc(),
        w.end.to_utc(),
        w.duration_minutes
    );
    println!("  Moon in {}, enters {}", w.moon_sign.name(), w.next_sign.name());
    match w.last_aspect {
        Some(last) => println!(
            "  Last aspect: {} {} at {}",
            last.aspect.name(),
            last.body.name(),
            last.time.to_utc()
        ),
        None => println!("  Already void at the query instant"),
    }
}

fn main() {
    let cli = Cli::parse();
    let oracle = MeeusEphemeris::new();

    match cli.command {
        Commands::Position { date, body } => {
            let at = parse_instant(&date);
            let body = parse_body(&body);
            match oracle.position(body, at) {
                Ok(pos) => {
                    let info = sign_from_longitude(pos.longitude_deg);
                    println!(
                        "{}: {:.4} deg lon, {:.4} deg lat",
                        body.name(),
                        pos.longitude_deg,
                        pos.latitude_deg
                    );
                    println!(
                        "  Distance: {:.6} AU  Speed: {:.4} deg/day",
                        pos.distance_au, pos.speed_deg_per_day
                    );
                    println!(
                        "  Sign: {} ({:.4} deg in sign)",
                        info.sign.name(),
                        info.degrees_in_sign
                    );
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Sign { date, body } => {
            let at = parse_instant(&date);
            let body = parse_body(&body);
            match oracle.position(body, at) {
                Ok(pos) => {
                    let info = sign_from_longitude(pos.longitude_deg);
                    let dms = info.dms;
                    println!(
                        "{} - {} deg {} min {:.1} sec ({:.4} deg in sign)",
                        info.sign.name(),
                        dms.degrees,
                        dms.minutes,
                        dms.seconds,
                        info.degrees_in_sign
                    );
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Phase { date } => {
            let at = parse_instant(&date);
            match moon_phase(&oracle, at) {
                Ok(phase) => {
                    println!("Phase: {}", phase.bucket.name());
                    println!(
                        "  Elongation: {:.4} deg  Illumination: {:.2}%",
                        phase.angle_deg, phase.illumination_percent
                    );
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::NextFullMoon { date } => {
            let at = parse_instant(&date);
            match next_full_moon(&oracle, at, &PhaseSearchConfig::default()) {
                Ok(Some(ev)) => println!("Next full moon: {}", ev.time.to_utc()),
                Ok(None) => println!("No full moon found in search range"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::NextNewMoon { date } => {
            let at = parse_instant(&date);
            match next_new_moon(&oracle, at, &PhaseSearchConfig::default()) {
                Ok(Some(ev)) => println!("Next new moon: {}", ev.time.to_utc()),
                Ok(None) => println!("No new moon found in search range"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::NextIngress { date, body, horizon_days } => {
            let at = parse_instant(&date);
            let body = parse_body(&body);
            let config = IngressSearchConfig { horizon_days, ..Default::default() };
            match find_next_ingress(&oracle, body, at, &config) {
                Ok(ev) => {
                    println!(
                        "Next ingress: {} enters {} (from {})",
                        body.name(),
                        ev.to_sign.name(),
                        ev.from_sign.name()
                    );
                    println!("  Time: {}", ev.time.to_utc());
                    println!("  Boundary: {:.1} deg", ev.longitude_deg);
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Aspects { date, window_hours } => {
            let at = parse_instant(&date);
            let end = at.add_minutes(window_hours * 60.0);
            match find_upcoming_aspects(
                &oracle,
                Body::Moon,
                &ASPECT_BODIES,
                at,
                end,
                &AspectSearchConfig::default(),
            ) {
                Ok(events) if events.is_empty() => println!("No aspects forming in window"),
                Ok(events) => {
                    for ev in events {
                        println!(
                            "{}  Moon {} {}  orb {:.4} deg",
                            ev.exact_time.to_utc(),
                            ev.aspect.name(),
                            ev.body.name(),
                            ev.orb_deg
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Void { date } => {
            let at = parse_instant(&date);
            match compute_void_period(&oracle, at, &VoidOfCourseConfig::default()) {
                Ok(Some(w)) => print_void_period(&w),
                Ok(None) => println!("No significant void period"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::NextVoid { date } => {
            let at = parse_instant(&date);
            match next_void_period(&oracle, at, &VoidOfCourseConfig::default()) {
                Ok(Some(w)) => print_void_period(&w),
                Ok(None) => println!("No void period found in search lookahead"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Calendar { start, days, jobs } => {
            let (year, month, day) = parse_ymd(&start);
            let config = VoidOfCourseConfig::default();
            let rows = if jobs > 1 {
                par_daily_snapshots(&oracle, year, month, day, days, jobs, &config)
            } else {
                daily_snapshots(&oracle, year, month, day, days, &config)
            };
            match rows {
                Ok(rows) => {
                    for row in rows {
                        let void = match row.void_period {
                            Some(w) => {
                                format!("void {} -> {}", w.start.to_utc(), w.end.to_utc())
                            }
                            None => "-".to_string(),
                        };
                        println!(
                            "{:04}-{:02}-{:02}  {:<11}  {:<15}  {:>5.1}%  {}",
                            row.year,
                            row.month,
                            row.day,
                            row.moon_sign.name(),
                            row.phase.bucket.name(),
                            row.phase.illumination_percent,
                            void
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
