use serde::Deserialize;

const MAX_PRECISION: usize = 12;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// JSON array of serialized nodes.
    pub nodes_path: String,
}

/// Report output; written in lowercase in config (e.g. "json").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Decimal places for prices in text output.
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Leave out nodes whose cost is unknown.
    #[serde(default)]
    pub only_priced: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_currency() -> String {
    "USD".into()
}

fn default_precision() -> usize {
    4
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            precision: default_precision(),
            only_priced: false,
            format: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.input.nodes_path.is_empty(),
            "input.nodes_path must be non-empty"
        );
        anyhow::ensure!(
            !self.report.currency.is_empty(),
            "report.currency must be non-empty"
        );
        anyhow::ensure!(
            self.report.precision <= MAX_PRECISION,
            "report.precision must be <= {}, got {}",
            MAX_PRECISION,
            self.report.precision
        );
        Ok(())
    }
}
