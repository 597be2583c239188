use serde::Serialize;
use validator::Validate;

/// Sampling parameters sent with every completion request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[validate(range(min = 1))]
    pub max_output_tokens: u32,
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: f32,
}

impl GenerationConfig {
    pub const CHAT: GenerationConfig = GenerationConfig {
        max_output_tokens: 1000,
        temperature: 0.7,
    };

    pub const QUIZ: GenerationConfig = GenerationConfig {
        max_output_tokens: 500,
        temperature: 0.5,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_site_configs_are_valid() {
        assert!(GenerationConfig::CHAT.validate().is_ok());
        assert!(GenerationConfig::QUIZ.validate().is_ok());
    }

    #[test]
    fn test_temperature_out_of_range_is_rejected() {
        let config = GenerationConfig {
            max_output_tokens: 10,
            temperature: 3.5,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serializes_with_upstream_field_names() {
        let json = serde_json::to_value(GenerationConfig::QUIZ).unwrap();
        assert_eq!(json["maxOutputTokens"], 500);
        assert_eq!(json["temperature"], 0.5);
    }
}
