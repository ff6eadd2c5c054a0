use std::env;
use std::path::PathBuf;

/// Driver configuration loaded from environment variables.
///
/// A `.env` file in the working directory is read first, if present.
pub struct Config {
    /// Directory holding the `.txt` scripts (RS_IDENT_DATA_DIR, default `./data`).
    pub data_dir: PathBuf,
    /// Directory where models are saved and reloaded (RS_IDENT_MODEL_DIR, default `./models`).
    pub model_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        Self {
            data_dir: env::var("RS_IDENT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            model_dir: env::var("RS_IDENT_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./models")),
        }
    }
}
