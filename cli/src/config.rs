use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const MAX_AI_MOVE_DELAY_MS: u64 = 5000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    config_path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, CliConfig, YamlConfigSerializer> {
    match config_path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct CliConfig {
    /// Pause before the AI's move is shown, so it does not land in the
    /// same instant as the prompt.
    #[serde(default)]
    pub ai_move_delay_ms: u64,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_move_delay_ms > MAX_AI_MOVE_DELAY_MS {
            return Err(format!(
                "AI move delay ({} ms) cannot exceed {} ms",
                self.ai_move_delay_ms, MAX_AI_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ai_move_delay_ms: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        let file_name = format!("temp_tictactoe_config_{}_{}.yaml", std::process::id(), nanos);
        std::env::temp_dir().join(file_name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(CliConfig::default().validate().is_ok());
    }

    #[test]
    fn test_excessive_delay_fails_validation() {
        let config = CliConfig {
            ai_move_delay_ms: MAX_AI_MOVE_DELAY_MS + 1,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_yaml() {
        let config = CliConfig {
            ai_move_delay_ms: 1500,
        };
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&config).unwrap();
        let deserialized: CliConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_config_file_returns_default() {
        let manager: ConfigManager<_, CliConfig, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");

        assert_eq!(manager.get_config().unwrap(), CliConfig::default());
    }

    #[test]
    fn test_config_survives_save_and_reload() {
        let file_path = get_temp_file_path();
        let config = CliConfig {
            ai_move_delay_ms: 42,
        };

        let manager: ConfigManager<_, CliConfig, _> =
            ConfigManager::from_yaml_file(&file_path);
        manager.set_config(&config).unwrap();

        let reloaded_manager: ConfigManager<_, CliConfig, _> =
            ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reloaded_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_explicit_config_path_overrides_default_location() {
        let file_path = get_temp_file_path();
        let config = CliConfig {
            ai_move_delay_ms: 777,
        };

        let writer: ConfigManager<_, CliConfig, _> =
            ConfigManager::from_yaml_file(&file_path);
        writer.set_config(&config).unwrap();

        let loaded = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_invalid_config_file_is_rejected() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("ai_move_delay_ms: 999999\n")
            .unwrap();

        let manager: ConfigManager<_, CliConfig, _> =
            ConfigManager::from_yaml_file(&file_path);
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(&file_path);
    }
}
