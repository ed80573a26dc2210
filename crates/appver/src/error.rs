use appver_platform::AppPathsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not locate settings: {0}")]
    Location(#[from] AppPathsError),

    #[error("Failed to write settings ({kind}): {message}")]
    Io {
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<std::io::Error> for SettingsError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Settings {action} failed: {source}")]
    Settings {
        action: &'static str,
        #[source]
        source: SettingsError,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    pub fn settings(action: &'static str, source: impl Into<SettingsError>) -> Self {
        Self::Settings {
            action,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, SettingsError};
    use appver_platform::AppPathsError;

    #[test]
    fn io_detail_keeps_error_kind_and_message() {
        let error = SettingsError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(matches!(
            error,
            SettingsError::Io {
                kind: std::io::ErrorKind::PermissionDenied,
                ..
            }
        ));
        assert_eq!(
            error.to_string(),
            "Failed to write settings (permission denied): denied"
        );
    }

    #[test]
    fn settings_constructor_includes_action() {
        let error = AppError::settings("save", AppPathsError::ConfigDirUnavailable);
        assert_eq!(
            error.to_string(),
            "Settings save failed: Could not locate settings: Could not determine config directory"
        );
    }
}
