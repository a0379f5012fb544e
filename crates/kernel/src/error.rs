//! Kernel error types.

use thiserror::Error;

/// Errors raised while loading menu definitions, capability names or label
/// tables.
///
/// Deriving navigation entries never fails; these only surface at the edges
/// where external data is parsed.
#[derive(Debug, Error)]
pub enum NavError {
    /// A capability wire name that is not part of the closed set.
    #[error("unknown capability '{name}'. Valid capabilities: {valid}")]
    UnknownCapability { name: String, valid: String },

    /// A menu definition that parsed but does not describe a usable tree.
    #[error("invalid menu entry '{label_key}': {reason}")]
    InvalidMenu { label_key: String, reason: String },

    /// A definition or label document could not be parsed.
    #[error("failed to parse {format} document: {details}")]
    Parse {
        format: &'static str,
        details: String,
    },

    /// A definition or label file could not be read.
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl NavError {
    /// Create an unknown capability error listing the accepted names.
    pub fn unknown_capability(name: impl Into<String>) -> Self {
        let valid = crate::capability::Capability::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownCapability {
            name: name.into(),
            valid,
        }
    }

    /// Create an invalid menu error.
    pub fn invalid_menu(label_key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMenu {
            label_key: label_key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using NavError.
pub type NavResult<T> = Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_capability_lists_valid_options() {
        let msg = NavError::unknown_capability("read:everything").to_string();
        assert!(msg.contains("read:everything"));
        assert!(msg.contains("read:patients"));
        assert!(msg.contains("report:incident"));
    }

    #[test]
    fn invalid_menu_names_the_entry() {
        let msg = NavError::invalid_menu("labs.label", "route must start with '/'").to_string();
        assert!(msg.contains("labs.label"));
        assert!(msg.contains("must start with"));
    }
}
