use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid scenario: the title may not be empty")]
    EmptyTitle,

    #[error("Invalid scenario `{}`: a scenario group needs at least one child", .0)]
    EmptyAggregate(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Invalid setting `{}`: {}", .key, .reason)]
    InvalidSetting { key: String, reason: String },

    #[error("Could not render `{}`: {}", .0, .1)]
    Render(String, serde_yaml::Error),

    #[error("No {} found with ID `{}`", .kind, .id)]
    NotFound { kind: String, id: String },

    #[error("Conflict: {}", .0)]
    Conflict(String),

    #[error("Invalid input: {}", .0)]
    InvalidInput(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn invalid_setting(key: &str, reason: &str) -> Self {
        Self::InvalidSetting {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(kind: &str, id: &str) -> Self {
        Self::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }
}
