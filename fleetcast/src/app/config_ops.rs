use super::AppError;
use crate::model::prediction::PredictorConfig;
use config::Config;

/// loads the predictor configuration from a TOML file when one is given,
/// else the built-in defaults
pub fn load_config(config_file: Option<&str>) -> Result<PredictorConfig, AppError> {
    let Some(path) = config_file else {
        return Ok(PredictorConfig::default());
    };
    let file = config::File::new(path, config::FileFormat::Toml);
    let config = Config::builder()
        .add_source(file)
        .build()
        .map_err(|e| AppError::ConfigReadError {
            msg: format!("failed reading '{path}'"),
            source: e,
        })?;
    config
        .try_deserialize::<PredictorConfig>()
        .map_err(|e| AppError::ConfigReadError {
            msg: format!("failed parsing '{path}'"),
            source: e,
        })
}

/// writes the default configuration as TOML for editing
pub fn write_default_config(output: &str) -> Result<(), AppError> {
    let rendered = toml::to_string_pretty(&PredictorConfig::default())?;
    std::fs::write(output, rendered)?;
    log::info!("wrote default configuration to '{output}'");
    Ok(())
}
