use anyhow::Result;
use nodecost::config::{AppConfig, OutputFormat};
use nodecost::version::{NAME, VERSION};
use nodecost::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(name = NAME, version = VERSION, "starting");

    let app_config = AppConfig::load()?;
    let nodes = report::load_nodes(&app_config.input.nodes_path).await?;
    let report = report::build_report(&nodes, &app_config.report);
    tracing::info!(
        nodes = nodes.len(),
        unpriced = report.unpriced,
        total_per_hour = report.total_per_hour,
        currency = %app_config.report.currency,
        "report built"
    );

    match app_config.report.format {
        OutputFormat::Text => print!("{}", report::render_text(&report, &app_config.report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
