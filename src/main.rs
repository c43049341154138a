use crate::options::Args;
use anyhow::Context;
use clap::Parser;
use std::path::Path;
use timesheet_engine::api::{AppState, create_router};
use timesheet_engine::calculation::RandomClockIn;
use timesheet_engine::config::ConfigLoader;
use timesheet_engine::engine::{TimesheetEngine, TimesheetRequest};
use timesheet_engine::ingest::validate_file_name;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod options {
    use std::path::PathBuf;

    #[derive(Debug, clap::Parser)]
    #[command(name = "timesheet", about = "Build monthly timesheets from attendance CSV exports")]
    pub enum Args {
        /// Render the timesheet of one employee from an attendance export.
        Render {
            /// The attendance CSV export.
            file: PathBuf,
            /// The employee's first name.
            #[arg(long)]
            first_name: String,
            /// The employee's last name.
            #[arg(long)]
            last_name: String,
            /// Identifier printed on the report.
            #[arg(long, default_value = "")]
            identifier: String,
            /// Directory holding holidays.yaml, locale.yaml and office_hours.yaml.
            #[arg(long, short = 'c', default_value = "config/th")]
            config: PathBuf,
            /// Fill in synthetic clock-in/out times.
            #[arg(long)]
            generate_times: bool,
            /// Seed for the clock-in times, for reproducible output.
            #[arg(long)]
            seed: Option<u64>,
            /// Print the full result as JSON instead of the printable table.
            #[arg(long)]
            json: bool,
        },
        /// Serve the HTTP API.
        Serve {
            /// Directory holding the configuration files.
            #[arg(long, short = 'c', default_value = "config/th")]
            config: PathBuf,
            /// Address to listen on.
            #[arg(long, default_value = "127.0.0.1:3000")]
            addr: String,
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Args::parse() {
        Args::Render {
            file,
            first_name,
            last_name,
            identifier,
            config,
            generate_times,
            seed,
            json,
        } => {
            let engine = load_engine(&config)?;
            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            validate_file_name(&file_name)?;
            let bytes = std::fs::read(&file)
                .with_context(|| format!("Could not read attendance export {}", file.display()))?;

            let request = TimesheetRequest::new(first_name, last_name)
                .with_identifier(identifier)
                .with_generated_times(generate_times);
            let mut clock_in = match seed {
                Some(seed) => RandomClockIn::seeded(seed),
                None => RandomClockIn::from_entropy(),
            };
            let result = engine
                .process_bytes(&bytes, &request, &mut clock_in)
                .with_context(|| format!("Could not build a timesheet from {}", file.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}\n", result.summary);
                println!("{}", result.report);
            }
        }
        Args::Serve { config, addr } => {
            let app = create_router(AppState::new(load_engine(&config)?));
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Could not listen on {}", addr))?;
            tracing::info!("Listening on {}", addr);
            axum::serve(listener, app).await?;
        }
    };
    Ok(())
}

fn load_engine(config_dir: &Path) -> anyhow::Result<TimesheetEngine> {
    let config = ConfigLoader::load(config_dir)
        .with_context(|| format!("Could not load configuration from {}", config_dir.display()))?
        .into_config();
    Ok(TimesheetEngine::new(config)?)
}
