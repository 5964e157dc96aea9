//! OSI Journey - an interactive walk through a web request and the OSI model
//!
//! Opens a window with an address field and three columns: the OSI layers,
//! the journey steps of a request, and the detailed sub-steps of the step
//! the learner clicks. `--explain` prints the same highlights without a window.

mod app;

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use eframe::egui;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use osi_journey::activation::ActivationRules;
use osi_journey::catalog;
use osi_journey::config::RuntimeConfig;
use osi_journey::error::{Error, Result};

use app::OsiJourneyApp;

/// Command line arguments
#[derive(Debug, Default, Parser)]
#[command(name = "osi-journey", version)]
#[command(about = "Interactive walk through a web request and the OSI model")]
#[command(after_help = "CONFIGURATION:
    OSI Journey looks for configuration files in the following order:
    1. Path specified with --config
    2. $OSI_JOURNEY_CONFIG
    3. $XDG_CONFIG_HOME/osi-journey/config.toml (or config.json)
    4. ~/.config/osi-journey/config.toml
    5. ~/.osi-journey/config.toml
    6. ./.osi-journey/config.toml
    7. Built-in defaults

ENVIRONMENT:
    OSI_JOURNEY_CONFIG    Path to configuration file
    OSI_JOURNEY_DEBUG     Enable debug mode (1 or true)
    RUST_LOG              Set logging level (error, warn, info, debug, trace)")]
struct AppArgs {
    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Initial window width
    #[arg(short, long)]
    width: Option<f32>,

    /// Initial window height
    #[arg(short = 'H', long)]
    height: Option<f32>,

    /// Initial theme (light, dark)
    #[arg(short, long)]
    theme: Option<String>,

    /// Print the highlights for ADDRESS and exit without opening a window
    #[arg(long, value_name = "ADDRESS")]
    explain: Option<String>,

    /// Print --explain output as JSON
    #[arg(long, requires = "explain")]
    json: bool,
}

fn main() {
    let args = AppArgs::parse();
    init_logging(&args);

    if let Err(e) = run(args) {
        error!("Application failed: {}", e);
        eprintln!("{}", osi_journey::describe_startup_error(&e));
        process::exit(1);
    }
}

/// Initialize tracing based on the debug flag and environment
fn init_logging(args: &AppArgs) {
    let debug_env = env::var("OSI_JOURNEY_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let log_level = if args.debug || debug_env { "debug" } else { "info" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(args: AppArgs) -> Result<()> {
    info!("Starting OSI Journey v{}", osi_journey::VERSION);
    debug!("Arguments: {:?}", args);

    let runtime_config = load_configuration(&args)?;

    if let Some(address) = &args.explain {
        let explanation = Explanation::new(address, runtime_config.activation_rules());
        let output = if args.json {
            serde_json::to_string_pretty(&explanation)?
        } else {
            explanation.to_text()
        };
        println!("{}", output);
        return Ok(());
    }

    let native_options = create_native_options(&args, &runtime_config);
    let app = OsiJourneyApp::with_config(runtime_config);

    info!("Initializing GUI...");
    eframe::run_native(
        "OSI Journey",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| Error::Gui(e.to_string()))?;

    info!("OSI Journey shutdown complete");
    Ok(())
}

/// Load configuration from file or use defaults
fn load_configuration(args: &AppArgs) -> Result<RuntimeConfig> {
    info!("Loading configuration...");

    let config_path = args
        .config
        .clone()
        .or_else(|| env::var("OSI_JOURNEY_CONFIG").ok().map(PathBuf::from));

    let mut runtime_config = if let Some(path) = &config_path {
        debug!("Loading config from: {}", path.display());
        match osi_journey::init_with_config(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config from {}: {}", path.display(), e);
                info!("Falling back to default configuration");
                RuntimeConfig::default()
            }
        }
    } else {
        osi_journey::init().unwrap_or_else(|e| {
            warn!("Failed to load configuration: {}. Using defaults", e);
            RuntimeConfig::default()
        })
    };

    if let Some(theme_name) = &args.theme {
        debug!("Applying theme override: {}", theme_name);
        if let Err(e) = runtime_config.set_theme(theme_name) {
            warn!("Failed to apply theme '{}': {}", theme_name, e);
        }
    }

    debug!("Configuration loaded successfully");
    Ok(runtime_config)
}

/// Window size from the configuration, overridden by the command line
fn window_size(args: &AppArgs, runtime_config: &RuntimeConfig) -> [f32; 2] {
    let ui = &runtime_config.config().ui;
    [
        args.width.unwrap_or(ui.window_width as f32),
        args.height.unwrap_or(ui.window_height as f32),
    ]
}

/// Create native options for the application window
fn create_native_options(args: &AppArgs, runtime_config: &RuntimeConfig) -> eframe::NativeOptions {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("OSI Journey")
            .with_app_id("osi-journey")
            .with_icon(std::sync::Arc::new(load_or_create_window_icon()))
            .with_inner_size(window_size(args, runtime_config))
            .with_min_inner_size([400.0, 300.0])
            .with_resizable(true),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    debug!("Window setup complete");
    options
}

/// Generated 32x32 icon: seven stacked bands in the layer colors
fn create_window_icon() -> egui::IconData {
    const BANDS: [[u8; 4]; 7] = [
        [168, 85, 247, 255],
        [99, 102, 241, 255],
        [59, 130, 246, 255],
        [34, 197, 94, 255],
        [234, 179, 8, 255],
        [249, 115, 22, 255],
        [239, 68, 68, 255],
    ];
    let background = [243, 244, 246, 255];

    let mut rgba = Vec::with_capacity(32 * 32 * 4);
    for y in 0..32usize {
        for x in 0..32usize {
            let pixel = if (4..28).contains(&x) && (2..30).contains(&y) {
                BANDS[((y - 2) / 4).min(6)]
            } else {
                background
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: 32,
        height: 32,
    }
}

/// Try loading `icon.png` from the working directory; fallback to generated icon
fn load_or_create_window_icon() -> egui::IconData {
    let candidates: [&Path; 2] = [Path::new("icon.png"), Path::new("assets/icon.png")];

    for path in candidates.iter() {
        if path.exists() {
            match image::open(path) {
                Ok(img) => {
                    let rgba = img.to_rgba8();
                    let (width, height) = rgba.dimensions();
                    return egui::IconData {
                        rgba: rgba.into_raw(),
                        width,
                        height,
                    };
                }
                Err(e) => warn!("Failed to load icon {}: {}", path.display(), e),
            }
        }
    }

    create_window_icon()
}

/// Headless rendering of the highlights for one address
#[derive(Debug, Serialize)]
struct Explanation {
    input: String,
    length: usize,
    steps: Vec<ExplainedStep>,
    layers: Vec<ExplainedLayer>,
}

#[derive(Debug, Serialize)]
struct ExplainedStep {
    id: u8,
    category: &'static str,
}

#[derive(Debug, Serialize)]
struct ExplainedLayer {
    id: u8,
    name: &'static str,
}

impl Explanation {
    fn new(input: &str, rules: ActivationRules) -> Self {
        let activation = rules.activate(input);

        let steps = activation
            .steps()
            .iter()
            .filter_map(|id| catalog::journey_step(*id))
            .map(|step| ExplainedStep {
                id: step.id.get(),
                category: step.category,
            })
            .collect();

        // Top-down, the way the layer column shows them
        let layers = catalog::osi_layers()
            .iter()
            .filter(|layer| activation.is_layer_active(layer.id))
            .map(|layer| ExplainedLayer {
                id: layer.id.get(),
                name: layer.name,
            })
            .collect();

        Self {
            input: input.to_string(),
            length: rules.length_unit.measure(input),
            steps,
            layers,
        }
    }

    fn to_text(&self) -> String {
        let mut out = format!("Address: {:?} (length {})\n", self.input, self.length);

        out.push_str("\nJourney steps:\n");
        if self.steps.is_empty() {
            out.push_str("  (none)\n");
        }
        for step in &self.steps {
            out.push_str(&format!("  {}. {}\n", step.id, step.category));
        }

        out.push_str("\nOSI layers:\n");
        if self.layers.is_empty() {
            out.push_str("  (none)\n");
        }
        for layer in &self.layers {
            out.push_str(&format!("  {}. {}\n", layer.id, layer.name));
        }

        out.trim_end().to_string()
    }
}
