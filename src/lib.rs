//! OSI Journey - an interactive walk through a web request and the OSI model
//!
//! The learner types a web address; as the text grows, the journey steps a
//! request goes through and the OSI layers involved light up. Clicking a
//! journey step reveals its detailed sub-steps.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`catalog`] - The fixed journey steps, sub-steps and OSI layers
//! - [`activation`] - Maps the typed text to active steps and layers
//! - [`expansion`] - Which journey step is expanded
//! - [`session`] - Session state driven by UI events
//! - [`models`] - Data structures (JourneyStep, SubStep, OsiLayer, Color)
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### Configuration and UI
//!
//! - [`config`] - Configuration loading, runtime config, themes
//! - [`ui`] - egui components for the address field and the three columns
//!
//! ## Quick Start
//!
//! ```
//! use osi_journey::{SessionEvent, VisualizerSession};
//! use osi_journey::models::{LayerId, StepId};
//!
//! let mut session = VisualizerSession::default();
//! session.handle(SessionEvent::InputChanged("exa".into()));
//!
//! assert!(session.activation().is_step_active(StepId(2)));
//! assert!(session.activation().is_layer_active(LayerId(2)));
//! assert!(!session.activation().is_step_active(StepId(3)));
//! ```
//!
//! ## Architecture
//!
//! Everything runs on the egui UI thread. Each frame the UI reads the
//! session, renders, and feeds any [`SessionEvent`] back into
//! [`VisualizerSession::handle`], which recomputes derived state before the
//! next frame.

#[macro_use]
extern crate tracing;

pub mod activation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod expansion;
pub mod session;

// UI modules
pub mod ui;

// Model modules
pub mod models;

// Re-exports for core functionality
pub use activation::{activate, Activation, ActivationRules, LengthUnit};
pub use config::{Config, RuntimeConfig};
pub use error::{Error, Result};
pub use expansion::Expansion;
pub use session::{SessionEvent, VisualizerSession};

// Convenience re-exports for common types
pub use config::loader::ConfigLoader;
pub use config::theme::ThemeManager;

// Version information
/// The current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize with configuration from the default search paths
///
/// Falls back to built-in defaults when no configuration file is found.
///
/// # Examples
///
/// ```no_run
/// use osi_journey::init;
///
/// match init() {
///     Ok(config) => println!("theme: {}", config.theme().name),
///     Err(e) => eprintln!("Initialization failed: {}", e),
/// }
/// ```
///
/// # Errors
///
/// Returns an error if a configuration file was found but is invalid.
pub fn init() -> Result<RuntimeConfig> {
    info!("Initializing {} v{}", NAME, VERSION);

    let runtime_config = RuntimeConfig::new()?;
    match runtime_config.config_path() {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    Ok(runtime_config)
}

/// Initialize from a specific configuration file
pub fn init_with_config(config_path: &std::path::Path) -> Result<RuntimeConfig> {
    info!(
        "Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    if !config_path.exists() {
        return Err(Error::ConfigLoadFailed {
            path: config_path.to_path_buf(),
            reason: "Configuration file does not exist".to_string(),
        });
    }

    let runtime_config = RuntimeConfig::load_from_file(config_path).map_err(|e| {
        error!(
            "Failed to load configuration from {}: {}",
            config_path.display(),
            e
        );
        e
    })?;

    info!("Configuration loaded from {}", config_path.display());
    Ok(runtime_config)
}

/// Turn a startup error into a message with hints for the user
pub fn describe_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check the path passed with --config\n• Ensure file permissions are correct\n• Remove the file to use the defaults",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Check configuration file syntax\n• Ensure file is valid {}",
                format, reason, format
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}\n\nTry:\n• Check configuration value\n• Remove the field to use its default",
                field, reason
            )
        }
        Error::ConfigNotFound => {
            "Configuration Error: Config file not found\n\nTry:\n• Create a configuration file\n• Run without --config to use the defaults".to_string()
        }
        Error::ThemeNotFound { theme_name } => {
            format!(
                "Theme Error: Unknown theme '{}'\n\nTry:\n• Use one of: {}",
                theme_name,
                ThemeManager::new().theme_names().join(", ")
            )
        }
        Error::Gui(msg) => {
            format!(
                "GUI Error: {}\n\nTry:\n• Check that a display is available\n• Use --explain for headless output",
                msg
            )
        }
        Error::Io(err) => {
            format!(
                "I/O Error: {}\n\nTry:\n• Check file permissions\n• Ensure required directories exist",
                err
            )
        }
        _ => {
            format!(
                "Unexpected Error: {}\n\nPlease report this issue with debug logs enabled",
                error
            )
        }
    }
}

/// Get default configuration
///
/// # Examples
///
/// ```
/// use osi_journey::default_config;
///
/// let config = default_config();
/// assert_eq!(config.ui.font_size, 14);
/// ```
pub fn default_config() -> Config {
    Config::default()
}
