//! Swellscore - swell quality scoring for surf breaks
//!
//! Reads forecast and tide files, scores them for a surf spot and prints
//! per-hour scores, the best surf window of a day or a daily outlook.

use std::fmt::Display;
use std::io;
use std::process::ExitCode;

use chrono::{DateTime, Local, TimeZone, Utc};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use swellscore::cli::{
    parse_date_arg, parse_time_arg, Cli, CliError, Command, ForecastSource, InputArgs, Scenario,
};
use swellscore::config::Config;
use swellscore::data::load::{load_forecast, load_open_meteo, load_tides};
use swellscore::data::tides::generate_synthetic_tides;
use swellscore::data::{all_spots, ForecastSample, TidePoint};
use swellscore::outlook::daily_outlook;
use swellscore::quality::{score_sample, ScoreOptions, SwellQualityScore};
use swellscore::window::best_surf_window;

/// Sets up logging to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Forecast samples, tide points and scenario for a scoring command
struct Inputs {
    samples: Vec<ForecastSample>,
    tides: Vec<TidePoint>,
    scenario: Scenario,
}

fn load_inputs(input: &InputArgs, config: &Config) -> Result<Inputs, Box<dyn std::error::Error>> {
    let scenario = input.resolve_scenario(config)?;

    let samples = match input.forecast_source()? {
        ForecastSource::Samples(path) => load_forecast(path)?,
        ForecastSource::OpenMeteo {
            atmospheric,
            marine,
        } => load_open_meteo(atmospheric, marine)?,
    };

    let tides = if let Some(path) = &input.tides {
        load_tides(path)?
    } else if input.synthetic_tides {
        match samples.first() {
            Some(first) => generate_synthetic_tides(
                first.forecast_hour_utc.date_naive(),
                input.tide_offset_hours,
            ),
            None => Vec::new(),
        }
    } else {
        debug!("No tide input, tide phase defaults to mid");
        Vec::new()
    };

    Ok(Inputs {
        samples,
        tides,
        scenario,
    })
}

fn format_hour<Tz>(t: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    t.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string()
}

fn print_score<Tz>(score: &SwellQualityScore, tz: &Tz)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    println!(
        "{}  {:<4}  {:>3}/100  confidence {}",
        format_hour(score.forecast_hour_utc, tz),
        score.label,
        score.score,
        score.confidence
    );
    for reason in &score.reasons {
        println!("    - {}", reason);
    }
}

fn run<Tz>(command: Command, config: &Config, tz: &Tz) -> Result<(), Box<dyn std::error::Error>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match command {
        Command::Score { input, at, json } => {
            let inputs = load_inputs(&input, config)?;
            let Inputs {
                samples,
                tides,
                scenario,
            } = inputs;

            let selected: Vec<&ForecastSample> = match at {
                Some(at) => {
                    let at = parse_time_arg(&at)?;
                    let sample = samples
                        .iter()
                        .find(|s| s.forecast_hour_utc == at)
                        .ok_or(CliError::NoSampleAt(at))?;
                    vec![sample]
                }
                None => samples.iter().collect(),
            };

            let scores: Vec<SwellQualityScore> = selected
                .into_iter()
                .map(|s| {
                    score_sample(
                        s,
                        Some(&scenario.profile),
                        &scenario.location,
                        &tides,
                        ScoreOptions::default(),
                    )
                    .with_spot_id(scenario.spot_id.as_str())
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&scores)?);
            } else {
                for score in &scores {
                    print_score(score, tz);
                }
            }
        }
        Command::Window { input, date } => {
            let date = parse_date_arg(&date)?;
            let inputs = load_inputs(&input, config)?;
            println!(
                "{}",
                best_surf_window(
                    &inputs.samples,
                    Some(&inputs.scenario.profile),
                    &inputs.scenario.location,
                    &inputs.tides,
                    date,
                    tz,
                )
            );
        }
        Command::Outlook { input, days } => {
            let inputs = load_inputs(&input, config)?;
            let outlook = daily_outlook(
                &inputs.samples,
                Some(&inputs.scenario.profile),
                &inputs.scenario.location,
                &inputs.tides,
                &inputs.scenario.spot_id,
                days,
            );
            for day in &outlook {
                println!(
                    "{}  {:<4}  {:>3}/100  ({}, sampled {})",
                    day.date.format("%a %d %b"),
                    day.score.label,
                    day.score.score,
                    day.score.confidence,
                    format_hour(day.representative.forecast_hour_utc, tz)
                );
            }
        }
        Command::Tides { date, offset_hours } => {
            let date = parse_date_arg(&date)?;
            let points = generate_synthetic_tides(date, offset_hours);
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
        Command::Spots => {
            for spot in all_spots() {
                println!(
                    "{:<22} {:<24} {:<28} {:<5} faces {:<2} swell {}",
                    spot.id,
                    spot.name,
                    spot.region,
                    spot.profile.break_type,
                    spot.profile.facing_direction,
                    spot.profile.optimal_swell_direction
                );
            }
        }
    }
    Ok(())
}

fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    if cli.utc || config.display.utc {
        debug!("Printing times in UTC");
        run(cli.command, &config, &Utc)
    } else {
        run(cli.command, &config, &Local)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
