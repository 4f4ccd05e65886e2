use super::ConfigCommands;
use lastfm_api::ClientConfig;

pub fn handle_config(command: &ConfigCommands) -> Result<(), Box<dyn std::error::Error>> {
    let path = ClientConfig::default_path()?;

    match command {
        ConfigCommands::Init {
            api_key,
            api_secret,
        } => {
            let mut config = ClientConfig::new(api_key.clone());
            config.api_secret = api_secret.clone();
            config.validate()?;
            config.save(&path)?;
            println!("✅ Configuration saved to {}", path.display());
        }
        ConfigCommands::Show => {
            println!("📁 {}", path.display());
            if path.exists() {
                println!("{:#?}", ClientConfig::load(&path)?);
            } else {
                println!("(no config file)");
            }
        }
    }
    Ok(())
}
