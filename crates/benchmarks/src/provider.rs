//! Benchmark loader. Reads measured paid-media benchmarks from disk and
//! falls back to the industry default curve set when none exist — a brand
//! new business has no paid-media history, so absence is the normal case.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::curves::BenchmarkCurveSet;

/// Where the active curve set came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkSource {
    /// Loaded from a measured benchmark file.
    Measured,
    /// Built-in industry defaults (no file, or unparsable file).
    IndustryDefaults,
}

/// Curve set plus provenance. The two-branch result of a load attempt;
/// loading never fails.
#[derive(Debug, Clone)]
pub struct LoadedBenchmarks {
    pub curves: BenchmarkCurveSet,
    pub source: BenchmarkSource,
}

/// Aggregated CPC and volume statistics produced by the paid-media
/// benchmark analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryAverages {
    #[serde(default)]
    pub avg_cpc: Option<f64>,
    #[serde(default)]
    pub min_cpc: Option<f64>,
    #[serde(default)]
    pub max_cpc: Option<f64>,
    #[serde(default)]
    pub median_cpc: Option<f64>,
    #[serde(default)]
    pub avg_volume: Option<f64>,
    #[serde(default)]
    pub total_keywords_analyzed: u64,
    #[serde(default)]
    pub total_competitors_analyzed: u64,
}

/// On-disk benchmark file shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkFile {
    #[serde(default)]
    pub industry_averages: IndustryAverages,
}

/// Load benchmarks from `path`, degrading to industry defaults when the
/// file is missing or malformed. A measured `avg_cpc` replaces the curve
/// set's scalar default; the growth curves themselves stay the industry
/// model either way.
pub fn load(path: impl AsRef<Path>) -> LoadedBenchmarks {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => {
            warn!(path = %path.display(), "No benchmark data found, using industry defaults");
            return LoadedBenchmarks {
                curves: BenchmarkCurveSet::industry_default(),
                source: BenchmarkSource::IndustryDefaults,
            };
        }
    };

    let parsed: BenchmarkFile = match serde_json::from_reader(BufReader::new(file)) {
        Ok(p) => p,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Benchmark file unparsable, using industry defaults"
            );
            return LoadedBenchmarks {
                curves: BenchmarkCurveSet::industry_default(),
                source: BenchmarkSource::IndustryDefaults,
            };
        }
    };

    let mut curves = BenchmarkCurveSet::industry_default();
    if let Some(avg_cpc) = parsed.industry_averages.avg_cpc {
        curves = curves.with_avg_cpc(avg_cpc);
    }

    info!(
        path = %path.display(),
        avg_cpc = curves.avg_cpc,
        keywords = parsed.industry_averages.total_keywords_analyzed,
        competitors = parsed.industry_averages.total_competitors_analyzed,
        "Loaded measured paid-media benchmarks"
    );

    LoadedBenchmarks {
        curves,
        source: BenchmarkSource::Measured,
    }
}
