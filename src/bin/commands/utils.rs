use lastfm_api::{ClientConfig, LastFmClient, LastFmError};
use serde::Serialize;

/// Configuration from the environment, falling back to the saved config file.
pub fn load_config() -> Result<ClientConfig, Box<dyn std::error::Error>> {
    match ClientConfig::from_env() {
        Ok(config) => Ok(config),
        Err(LastFmError::Config(env_error)) => {
            let path = ClientConfig::default_path()?;
            if !path.exists() {
                return Err(env_error.into());
            }
            log::debug!("{env_error}, using {}", path.display());
            Ok(ClientConfig::load(&path)?)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn create_client() -> Result<LastFmClient, Box<dyn std::error::Error>> {
    let config = load_config()?;
    Ok(LastFmClient::with_native_client(config)?)
}

pub fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}
