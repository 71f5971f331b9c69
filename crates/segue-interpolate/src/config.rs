//! Interpolation configuration

use segue_core::{SegueError, SegueResult};

/// What a string template does when the two strings hold different numbers
/// of numeric tokens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum TemplateMismatch {
    /// Degenerate to the constant end string
    #[default]
    Constant,
    /// Pair tokens until either string runs out, then keep the rest of the
    /// end string as literal text
    PairPrefix,
}

/// Interpolator construction settings
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct InterpolateConfig {
    /// Nesting depth beyond which sub-values are held constant
    pub max_depth: usize,
    pub template_mismatch: TemplateMismatch,
}

impl Default for InterpolateConfig {
    fn default() -> Self {
        Self {
            max_depth: 256,
            template_mismatch: TemplateMismatch::Constant,
        }
    }
}

impl InterpolateConfig {
    pub fn validate(&self) -> SegueResult<()> {
        if self.max_depth == 0 {
            return Err(SegueError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = InterpolateConfig::default();
        assert_eq!(config.max_depth, 256);
        assert_eq!(config.template_mismatch, TemplateMismatch::Constant);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = InterpolateConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SegueError::InvalidConfig(_))));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json() {
        let config: InterpolateConfig =
            serde_json::from_str(r#"{"template_mismatch": "pair_prefix"}"#).unwrap();
        assert_eq!(config.max_depth, 256);
        assert_eq!(config.template_mismatch, TemplateMismatch::PairPrefix);
    }
}
