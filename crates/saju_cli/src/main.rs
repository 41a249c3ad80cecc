use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use saju_core::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Beneficial, BirthInput, ElementPercentages,
    EngineConfig, FixedTermCalendar, Fortune, HeavenlyStem, SajuEngine, SajuResult,
    build_hour_pillar, score_fortune,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillars (saju) calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart for a birth moment
    Chart {
        year: i32,
        month: u32,
        day: u32,
        /// Hour of birth (0-23)
        #[arg(long, default_value = "0")]
        hour: u32,
        /// Minute of birth (0-59)
        #[arg(long, default_value = "0")]
        minute: u32,
        /// Treat the date as a lunar date
        #[arg(long)]
        lunar: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Engine config file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Hour pillar from day stem and hour
    HourPillar {
        /// Day stem index (0-9: 甲..癸)
        day_stem: u8,
        /// Hour of day (0-23)
        hour: u32,
    },
    /// Fortune scores from element percentages
    Fortune {
        wood: f64,
        fire: f64,
        earth: f64,
        metal: f64,
        water: f64,
    },
    /// List stems and branches
    Tables,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "saju=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> EngineConfig {
    let Some(path) = path else {
        return EngineConfig::default();
    };
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read config {}: {e}", path.display());
        std::process::exit(1);
    });
    let config = toml::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Invalid config {}: {e}", path.display());
        std::process::exit(1);
    });
    info!(path = %path.display(), ?config, "config loaded");
    config
}

fn require_day_stem(index: u8) -> HeavenlyStem {
    HeavenlyStem::from_index(index).unwrap_or_else(|| {
        eprintln!("Invalid day stem index: {index} (0-9: 甲..癸)");
        std::process::exit(1);
    })
}

fn print_fortune(fortune: &Fortune) {
    for (label, field) in [
        ("Wealth", fortune.wealth),
        ("Career", fortune.career),
        ("Love", fortune.love),
        ("Health", fortune.health),
    ] {
        println!("  {label:<7} {:>3} ({})", field.score, field.grade.letter());
    }
}

fn print_chart(r: &SajuResult) {
    let kind = if r.input.is_lunar { "lunar" } else { "solar" };
    println!(
        "Birth: {}-{:02}-{:02} {:02}:{:02} ({kind}), solar date {}",
        r.input.year, r.input.month, r.input.day, r.input.hour, r.input.minute, r.solar_date
    );
    println!("Zodiac: {}", r.pillars.zodiac_animal());
    println!();
    println!("Pillars:");
    for (label, p) in ["Year", "Month", "Day", "Hour"]
        .iter()
        .zip(r.pillars.pillars())
    {
        println!(
            "  {label:<5} {} ({}) {} {}",
            p.name(),
            p.korean(),
            p.stem().element(),
            p.branch().element()
        );
    }
    println!();
    println!("Elements:");
    for e in ALL_ELEMENTS {
        println!(
            "  {:<5} {} {:>5.1}%  {}",
            e.name(),
            r.elements.count(e),
            r.elements.percentage(e),
            r.elements.status(e).label()
        );
    }
    println!();
    println!("Day master: {}", r.day_master.description);
    match &r.useful.beneficial {
        Beneficial::Elements(list) => {
            let names: Vec<&str> = list.iter().map(|e| e.name()).collect();
            println!("Useful elements: {}", names.join(", "));
        }
        Beneficial::AlreadyBalanced => println!("Useful elements: already balanced"),
    }
    if !r.useful.detrimental.is_empty() {
        let names: Vec<&str> = r.useful.detrimental.iter().map(|e| e.name()).collect();
        println!("Harmful elements: {}", names.join(", "));
    }
    println!();
    println!("Fortune:");
    print_fortune(&r.fortune);
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            year,
            month,
            day,
            hour,
            minute,
            lunar,
            json,
            config,
        } => {
            let config = load_config(config.as_deref());
            let engine = SajuEngine::new(FixedTermCalendar::new(), config).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let date = if lunar {
                BirthInput::lunar(year, month, day)
            } else {
                BirthInput::solar(year, month, day)
            };
            let result = engine.compute(&date.at(hour, minute)).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            if json {
                match serde_json::to_string_pretty(&result) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_chart(&result);
            }
        }

        Commands::HourPillar { day_stem, hour } => {
            let stem = require_day_stem(day_stem);
            match build_hour_pillar(stem, hour) {
                Some(p) => println!(
                    "{} ({}) - {} {}",
                    p.name(),
                    p.korean(),
                    p.branch().time_label(),
                    p.branch().animal()
                ),
                None => {
                    eprintln!("Invalid hour: {hour} (0-23)");
                    std::process::exit(1);
                }
            }
        }

        Commands::Fortune {
            wood,
            fire,
            earth,
            metal,
            water,
        } => {
            let shares = [wood, fire, earth, metal, water];
            if let Some(bad) = shares.iter().find(|p| !(0.0..=100.0).contains(*p)) {
                eprintln!("Invalid percentage: {bad} (0-100)");
                std::process::exit(1);
            }
            let fortune = score_fortune(&ElementPercentages {
                wood,
                fire,
                earth,
                metal,
                water,
            });
            println!("Fortune:");
            print_fortune(&fortune);
        }

        Commands::Tables => {
            println!("Stems:");
            for s in ALL_STEMS {
                println!(
                    "  {:>2} {} {} {:<7} {:<5} {}",
                    s.index(),
                    s.character(),
                    s.korean(),
                    s.name(),
                    s.element().name(),
                    s.polarity().name()
                );
            }
            println!();
            println!("Branches:");
            for b in ALL_BRANCHES {
                println!(
                    "  {:>2} {} {} {:<5} {:<8} {:<5} {:<4} {}",
                    b.index(),
                    b.character(),
                    b.korean(),
                    b.name(),
                    b.animal(),
                    b.element().name(),
                    b.polarity().name(),
                    b.time_label()
                );
            }
        }
    }
}
