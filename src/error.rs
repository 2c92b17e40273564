use std::fmt;

/// Errors that can occur during startup, before the game loop runs
///
/// Every variant is fatal: the process reports the diagnostic and exits
/// without entering the loop. Nothing here is retryable.
#[derive(Debug, Clone)]
pub enum StartupError {
    /// SDL or one of its subsystems could not be initialized
    Init(String),

    /// The window or its canvas could not be created
    Display(String),

    /// The asset manifest was missing or malformed
    Manifest { path: String, message: String },

    /// A required image could not be loaded
    AssetLoad { path: String, message: String },
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StartupError::Init(message) => {
                write!(f, "SDL initialization failed: {}", message)
            }
            StartupError::Display(message) => {
                write!(f, "Display creation failed: {}", message)
            }
            StartupError::Manifest { path, message } => {
                write!(f, "Failed to read asset manifest {}: {}", path, message)
            }
            StartupError::AssetLoad { path, message } => {
                write!(f, "Failed to load {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for StartupError {}

impl From<StartupError> for String {
    fn from(error: StartupError) -> Self {
        error.to_string()
    }
}
