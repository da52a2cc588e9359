use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use tokio::sync::Mutex;
use tokio::time::{self, Duration, MissedTickBehavior};

use repsense_lib::{
    catalog, init_logging, ExerciseKind, JointFrame, JsonFrameEstimator, SessionController,
    SettingsStore, TrackingController, TrackingSettings,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (JSON); supplies the default exercise and tracking options
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the exercise catalog as JSON
    Catalog,
    /// Run recorded landmark frames (one JSON object per line) through an analyzer
    Replay {
        /// Exercise to analyze; defaults to the one in the settings file
        #[arg(short, long, value_enum)]
        exercise: Option<ExerciseKind>,

        /// Feed frames through the live tracker at this rate; late frames are dropped
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=1000))]
        fps: Option<u32>,

        /// Frames file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => SettingsStore::new(path.clone())?.tracking(),
        None => TrackingSettings::default(),
    };

    match cli.command {
        Command::Catalog => {
            let json = serde_json::to_string_pretty(&catalog())?;
            println!("{json}");
        }
        Command::Replay {
            exercise,
            fps,
            input,
        } => {
            let exercise = exercise.unwrap_or(settings.default_exercise);
            let lines = read_lines(&input)?;
            info!("replaying {} frames as {}", lines.len(), exercise.id());
            match fps {
                Some(fps) => replay_paced(lines, exercise, fps, &settings).await?,
                None => replay(lines, exercise)?,
            }
        }
    }

    Ok(())
}

fn read_lines(input: &str) -> Result<Vec<String>> {
    let reader: Box<dyn BufRead> = if input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(input).with_context(|| format!("Failed to open {input}"))?;
        Box::new(BufReader::new(file))
    };

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read frames")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Dispatches every frame in order, printing a snapshot per frame.
fn replay(lines: Vec<String>, exercise: ExerciseKind) -> Result<()> {
    let mut controller = SessionController::new(exercise);
    let mut out = io::stdout().lock();

    for (index, line) in lines.iter().enumerate() {
        let frame: Option<JointFrame> = serde_json::from_str(line)
            .with_context(|| format!("line {}: malformed landmark frame", index + 1))?;
        let Some(frame) = frame else {
            debug!("line {}: no person", index + 1);
            continue;
        };
        controller.dispatch(&frame);
        writeln!(out, "{}", serde_json::to_string(&controller.snapshot())?)?;
    }

    writeln!(out, "{}", serde_json::to_string(&controller.summary())?)?;
    Ok(())
}

/// Offers frames to a [`TrackingController`] on a fixed tick, like a camera would.
async fn replay_paced(
    lines: Vec<String>,
    exercise: ExerciseKind,
    fps: u32,
    settings: &TrackingSettings,
) -> Result<()> {
    let session = Arc::new(Mutex::new(SessionController::new(exercise)));
    let mut snapshots = session.lock().await.subscribe();
    let mut tracking = TrackingController::new(JsonFrameEstimator, session.clone(), settings);

    let printer = tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow_and_update().clone();
            if let Ok(json) = serde_json::to_string(&snapshot) {
                println!("{json}");
            }
        }
    });

    tracking.start()?;

    let mut ticker = time::interval(Duration::from_secs_f64(1.0 / f64::from(fps)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    for line in lines {
        ticker.tick().await;
        tracking.offer(line).await;
    }

    // Let the last frame through before shutting down.
    ticker.tick().await;
    time::sleep(Duration::from_millis(settings.estimate_timeout_ms)).await;
    tracking.stop().await?;
    printer.abort();

    println!("{}", serde_json::to_string(&session.lock().await.summary())?);
    if let Some(metrics) = tracking.metrics() {
        println!("{}", serde_json::to_string(&metrics.get_snapshot().await)?);
    }
    Ok(())
}
