//! `.env` loading.
//!
//! A missing file is fine. `DOTENV_DISABLED=1` (or `true`) skips the file
//! entirely so tests see only the variables they set.

use std::io::ErrorKind;

use super::error::ConfigError;

fn disabled() -> bool {
    std::env::var("DOTENV_DISABLED")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Load `.env` from the working directory (or a parent) into the process
/// environment. Variables already set are not overwritten.
pub(super) fn load() -> Result<(), ConfigError> {
    if disabled() {
        tracing::debug!("DOTENV_DISABLED is set; skipping .env");
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env");
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(dotenvy::Error::Io(e)) => Err(ConfigError::DotenvIo { kind: e.kind() }),
        Err(dotenvy::Error::LineParse(_, error_index)) => {
            Err(ConfigError::DotenvParse { error_index })
        }
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}
