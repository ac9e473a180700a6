use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameMode, Mark};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        mode: GameMode,
        computer_mark: Mark,
    }

    #[test]
    fn test_game_enums_use_variant_names() {
        let serializer = YamlConfigSerializer::new();
        let yaml = serializer
            .serialize(&Sample { mode: GameMode::PlayerVsPlayer, computer_mark: Mark::X })
            .unwrap();
        assert!(yaml.contains("mode: PlayerVsPlayer"));
        assert!(yaml.contains("computer_mark: X"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Sample, String> = serializer.deserialize("mode: [not, a, mode]");
        assert!(result.unwrap_err().starts_with("Failed to deserialize config"));
    }
}
