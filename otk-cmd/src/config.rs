use otk_kaiho::station::StationConfig;
use std::path::PathBuf;

/// Days of forecast fetched per prediction run.
pub const DAYS_TO_FETCH: u32 = 7;

/// Runtime configuration for both pipelines.
///
/// Defaults bind the Oita Tsurusaki station and the conventional output
/// directories. Tests substitute fixture endpoints and temporary
/// directories here instead of touching global state.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub station: StationConfig,
    /// Consecutive calendar dates fetched per prediction run
    pub days_to_fetch: u32,
    /// Directory for the observed stores
    pub observed_dir: PathBuf,
    /// Directory for the forecast stores
    pub prediction_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            station: StationConfig::default(),
            days_to_fetch: DAYS_TO_FETCH,
            observed_dir: PathBuf::from("data/observed"),
            prediction_dir: PathBuf::from("data/prediction"),
        }
    }
}
