/// Convenience result type used across the crate.
pub type ArmResult<T> = Result<T, ArmError>;

/// Which of the two rigid links a length error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Upper,
    Fore,
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Link::Upper => f.write_str("link1"),
            Link::Fore => f.write_str("link2"),
        }
    }
}

/// Errors surfaced to callers. Geometric edge cases (unreachable targets,
/// coincident points) are clamped internally and never show up here.
#[derive(thiserror::Error, Debug)]
pub enum ArmError {
    /// A link length that is zero, negative or not finite.
    #[error("configuration error: {link} length must be a positive finite number, got {value}")]
    InvalidLinkLength { link: Link, value: f64 },

    /// A clamp tolerance outside its valid range.
    #[error("configuration error: {name} is out of range, got {value}")]
    InvalidTolerance { name: &'static str, value: f64 },

    #[error("configuration error: arm origin must be finite")]
    NonFiniteOrigin,

    #[error("target must be finite, got ({x}, {y})")]
    NonFiniteTarget { x: f64, y: f64 },

    /// Invalid rig description that is not tied to a single field.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ArmError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn tolerance(name: &'static str, value: f64) -> Self {
        Self::InvalidTolerance { name, value }
    }

    /// True for errors raised while validating static arm configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidLinkLength { .. }
                | Self::InvalidTolerance { .. }
                | Self::NonFiniteOrigin
                | Self::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        let err = ArmError::InvalidLinkLength {
            link: Link::Upper,
            value: 0.0,
        };
        assert!(err.to_string().starts_with("configuration error:"));
        assert!(err.to_string().contains("link1"));
        assert!(ArmError::config("x").to_string().contains("configuration error:"));
        assert!(ArmError::tolerance("reach_epsilon", -1.0)
            .to_string()
            .contains("reach_epsilon"));
    }

    #[test]
    fn runtime_errors_are_not_configuration_errors() {
        assert!(!ArmError::NonFiniteTarget { x: f64::NAN, y: 0.0 }.is_configuration());
        assert!(ArmError::NonFiniteOrigin.is_configuration());
    }
}
