use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `GROWTH_PROJECTOR__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Display name of the business being projected.
    #[serde(default = "default_target_name")]
    pub target_name: String,
    /// Directory where report artifacts are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Path to the measured paid-media benchmark file, if one exists.
    #[serde(default = "default_benchmark_path")]
    pub benchmark_path: String,
    #[serde(default)]
    pub projections: ProjectionDefaults,
}

/// Default projection inputs used when the caller supplies none.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionDefaults {
    #[serde(default = "default_monthly_ad_spend")]
    pub monthly_ad_spend: f64,
    #[serde(default = "default_aov")]
    pub aov: f64,
    /// Cost per click; falls back to the benchmark scalar when absent.
    #[serde(default)]
    pub cpc: Option<f64>,
    /// Starting conversion rate in percent; benchmark scalar when absent.
    #[serde(default)]
    pub conversion_rate: Option<f64>,
    #[serde(default = "default_months")]
    pub months: u32,
}

// Default functions
fn default_target_name() -> String {
    "new-business".to_string()
}
fn default_output_dir() -> String {
    "output/projections".to_string()
}
fn default_benchmark_path() -> String {
    "data/paid_media/paid_media_benchmarks.json".to_string()
}
fn default_monthly_ad_spend() -> f64 {
    5000.0
}
fn default_aov() -> f64 {
    100.0
}
fn default_months() -> u32 {
    6
}

impl Default for ProjectionDefaults {
    fn default() -> Self {
        Self {
            monthly_ad_spend: default_monthly_ad_spend(),
            aov: default_aov(),
            cpc: None,
            conversion_rate: None,
            months: default_months(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_name: default_target_name(),
            output_dir: default_output_dir(),
            benchmark_path: default_benchmark_path(),
            projections: ProjectionDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("GROWTH_PROJECTOR")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
