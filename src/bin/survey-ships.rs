use anyhow::{Context, Result};
use env_logger::Env;

use survey_ships::config::Config;
use survey_ships::core::{ParseRun, ShipStatus};
use survey_ships::parse_file;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    let run = match parse_file(&config.input, &config.limits).await {
        Ok(run) => run,
        Err(e) => {
            log::error!("Cannot parse {}: {}", config.input.display(), e);
            return Err(e.into());
        }
    };

    if config.json {
        let json = serde_json::to_string_pretty(&run).context("Failed to serialize parse run")?;
        println!("{json}");
    } else {
        print_summary(&run);
    }

    Ok(())
}

fn print_summary(run: &ParseRun) {
    if run.input_missing() {
        println!("No input: file not found");
        return;
    }

    let (width, height) = run.grid_coordinates();
    log::info!(
        "Parsed {} records, {} valid ships",
        run.records().len(),
        run.count_of_ships()
    );

    println!("Grid: {width} x {height}");
    for (idx, plan) in run.ship_plans().iter().enumerate() {
        match (plan.status, plan.start) {
            (ShipStatus::Ready, Some(start)) => println!(
                "Ship {} (line {}): {} {} {} -> {}",
                idx + 1,
                plan.line,
                start.x,
                start.y,
                start.orientation,
                plan.instructions.as_deref().unwrap_or("-")
            ),
            _ => println!("Ship {} (line {}): Failed", idx + 1, plan.line),
        }
    }

    for diagnostic in run.diagnostics() {
        println!(
            "line {}: {:?}: {}",
            diagnostic.line, diagnostic.severity, diagnostic.message
        );
    }
}
