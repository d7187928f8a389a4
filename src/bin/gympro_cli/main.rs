// ABOUTME: GymPro CLI - command-line front end for the training log and metrics engine
// ABOUTME: Logs workouts, records PRs, stores the profile and prints consistency and progress reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro
//!
//! Usage:
//! ```bash
//! # Estimate body fat without storing anything
//! gympro-cli body-fat --sex male --height 180 --neck 40 --waist 85
//!
//! # Log a set of bench press for today
//! gympro-cli log add --zone Pecho --name "Press Banca" --sets 4 --reps 8 --weight 80
//!
//! # Show this month's trained days as a calendar
//! gympro-cli stats
//!
//! # Six-month consistency history with photo markers
//! gympro-cli history
//!
//! # Max-load progression of one exercise
//! gympro-cli series "Press Banca"
//!
//! # Register a failure set and list records
//! gympro-cli pr record --exercise "Press Banca" --weight 100 --reps 5
//! gympro-cli pr list
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use commands::Context;
use gympro::config::AppConfig;
use gympro::constants::env_config;
use gympro::logging::LoggingConfig;
use gympro::services::Services;
use gympro::session::Session;
use gympro::store::{FitnessStore, JsonFileStore};
use gympro_core::models::{DateKey, ExerciseId, Sex, YearMonth, Zone};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "gympro-cli",
    version,
    about = "GymPro training log",
    long_about = "Strength-training log with body-fat, consistency and progressive-overload metrics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to GYMPRO_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate body fat from measurements (nothing is stored)
    BodyFat(MeasurementArgs),

    /// Estimate the one-rep max of a failure set
    OneRm {
        /// Load lifted (kg)
        #[arg(long)]
        weight: f64,

        /// Repetitions reached
        #[arg(long)]
        reps: u32,
    },

    /// Workout log management
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Trained days of one month as a calendar
    Stats {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<YearMonth>,
    },

    /// Monthly consistency history, most recent first
    History {
        /// Number of months (defaults to GYMPRO_HISTORY_MONTHS or 6)
        #[arg(long)]
        months: Option<usize>,
    },

    /// Max-load progression of one exercise (lists logged names when omitted)
    Series {
        /// Exact exercise name
        exercise: Option<String>,
    },

    /// Personal record commands
    Pr {
        #[command(subcommand)]
        action: PrCommand,
    },

    /// Biometric profile commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Monthly progress photo commands
    Photo {
        #[command(subcommand)]
        action: PhotoCommand,
    },

    /// Show the exercise picklist
    Catalog {
        /// Restrict to one zone
        #[arg(long)]
        zone: Option<Zone>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LogCommand {
    /// Append an exercise to a training day
    Add {
        /// Training date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<DateKey>,

        /// Body zone (Pecho, Espalda, Piernas, Brazos, Antebrazos, Abdomen, Cardio)
        #[arg(long)]
        zone: String,

        /// Exercise name
        #[arg(long)]
        name: String,

        /// Number of sets
        #[arg(long, default_value = "")]
        sets: String,

        /// Repetitions per set
        #[arg(long, default_value = "")]
        reps: String,

        /// Load (kg), required outside Cardio
        #[arg(long, default_value = "")]
        weight: String,

        /// Duration in minutes, required for Cardio
        #[arg(long, default_value = "")]
        minutes: String,
    },

    /// Delete one entry from a training day
    Delete {
        /// Training date as YYYY-MM-DD
        #[arg(long)]
        date: DateKey,

        /// Entry id as shown by `log show`
        #[arg(long)]
        id: ExerciseId,
    },

    /// Show the entries of a training day
    Show {
        /// Training date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<DateKey>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PrCommand {
    /// Register a failure set for a logged exercise
    Record {
        /// Exercise name (must already appear in the log)
        #[arg(long)]
        exercise: String,

        /// Load lifted (kg)
        #[arg(long)]
        weight: String,

        /// Repetitions reached
        #[arg(long)]
        reps: String,
    },

    /// List personal records
    List,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Replace the stored profile and compute the body-fat estimate
    Set(MeasurementArgs),

    /// Show the stored profile
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PhotoCommand {
    /// Attach an image file to a month
    Set {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<YearMonth>,

        /// Image file (jpg, png, webp, gif)
        #[arg(long)]
        file: PathBuf,
    },
}

/// Measurement fields shared by `body-fat` and `profile set`
#[derive(Args)]
struct MeasurementArgs {
    /// Sex selecting the formula
    #[arg(long, default_value = "male")]
    sex: Sex,

    /// Height (cm)
    #[arg(long, default_value = "")]
    height: String,

    /// Body weight (kg)
    #[arg(long, default_value = "")]
    weight: String,

    /// Neck circumference (cm)
    #[arg(long, default_value = "")]
    neck: String,

    /// Waist circumference at the navel (cm)
    #[arg(long, default_value = "")]
    waist: String,

    /// Hip circumference (cm), used by the female formula
    #[arg(long, default_value = "")]
    hip: String,

    /// Chest circumference (cm)
    #[arg(long, default_value = "")]
    chest: String,

    /// Arm circumference (cm)
    #[arg(long, default_value = "")]
    arms: String,

    /// Thigh circumference (cm)
    #[arg(long, default_value = "")]
    thigh: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if env::var(env_config::RUST_LOG).is_err() {
        logging.level = "warn".into();
    }
    logging.verbose(cli.verbose).init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    debug!("{}", config.summary());

    let today = Local::now().date_naive();

    match cli.command {
        Command::BodyFat(args) => {
            commands::calc::body_fat(&args.into_form());
            Ok(())
        }
        Command::OneRm { weight, reps } => commands::calc::one_rm(weight, reps),
        Command::Catalog { zone } => {
            commands::catalog::show(zone);
            Ok(())
        }
        command => {
            let context = open_context(&config, today).await?;
            run(&context, command).await
        }
    }
}

async fn open_context(config: &AppConfig, today: NaiveDate) -> Result<Context> {
    let session = Session::load_or_create(config.data_dir()).await?;
    let store: Arc<dyn FitnessStore> = Arc::new(JsonFileStore::new(config.data_dir()));
    Ok(Context {
        services: Services::new(store),
        user: session.user_id(),
        today,
        history_months: config.history_months,
    })
}

async fn run(context: &Context, command: Command) -> Result<()> {
    match command {
        Command::Log { action } => match action {
            LogCommand::Add {
                date,
                zone,
                name,
                sets,
                reps,
                weight,
                minutes,
            } => {
                let form = gympro_core::models::NewExercise {
                    zone,
                    name,
                    sets,
                    reps,
                    weight,
                    minutes,
                };
                commands::log::add(context, date, &form).await
            }
            LogCommand::Delete { date, id } => commands::log::delete(context, date, id).await,
            LogCommand::Show { date } => commands::log::show(context, date).await,
        },
        Command::Stats { month } => commands::metrics::stats(context, month).await,
        Command::History { months } => commands::metrics::history(context, months).await,
        Command::Series { exercise } => commands::metrics::series(context, exercise).await,
        Command::Pr { action } => match action {
            PrCommand::Record {
                exercise,
                weight,
                reps,
            } => commands::records::record(context, exercise, weight, reps).await,
            PrCommand::List => commands::records::list(context).await,
        },
        Command::Profile { action } => match action {
            ProfileCommand::Set(args) => commands::profile::set(context, &args.into_form()).await,
            ProfileCommand::Show => commands::profile::show(context).await,
        },
        Command::Photo { action } => match action {
            PhotoCommand::Set { month, file } => commands::photo::set(context, month, &file).await,
        },
        Command::BodyFat(_) | Command::OneRm { .. } | Command::Catalog { .. } => Ok(()),
    }
}

impl MeasurementArgs {
    fn into_form(self) -> gympro_core::models::ProfileForm {
        gympro_core::models::ProfileForm {
            sex: self.sex,
            height: self.height,
            weight: self.weight,
            neck: self.neck,
            waist: self.waist,
            hip: self.hip,
            chest: self.chest,
            arms: self.arms,
            thigh: self.thigh,
        }
    }
}
