// Module declarations
mod app;

use app::cli::Args;
use app::constructor::AppConstructor;
use app::{
    App, Config, MessageType,
    main_loop::AppMainLoop,
    terminal::{init_terminal, restore_terminal},
    ui::Page,
};
use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Parse command line arguments
    let args = Args::parse();

    // Handle --generate-config option
    if let Some(path) = &args.generate_config {
        let config_path = if path.is_dir() || path.to_str() == Some(".") {
            path.join("config.toml")
        } else {
            path.clone()
        };
        Config::generate_default(config_path)?;
        return Ok(());
    }

    // Determine config path for logging later
    let config_path = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|d| d.join("lumideck").join("config.toml"))
            .unwrap_or_default()
    });
    let config_existed = config_path.exists();

    // Load config first for logger initialization
    let (config, config_warnings) = Config::load(args.config.clone())?;

    // Initialize logger first
    if config.logging.enabled {
        app::logging::ensure_log_directory(&config.logging)?;
        app::logging::init_logger(&config.logging)?;
        app::logging::log_startup_info(&config.logging);
        // Log config loading now that logger is initialized
        app::logging::log_config_loading(&config_path, !config_existed);

        // Log any config warnings that were collected during loading
        for warning in &config_warnings {
            log::warn!("{}", warning);
        }
    }

    let initial_page = args
        .page
        .as_deref()
        .map(Page::parse)
        .unwrap_or(Page::Controller);

    // Initialize terminal
    let terminal = init_terminal()?;

    // Save logging state before app takes ownership
    let logging_enabled = config.logging.enabled;

    // Create app now that logger is initialized
    let mut app = App::new_with_config(config, initial_page)?;

    // Surface config warnings as a toast once the UI is up
    if !config_warnings.is_empty() {
        let text = format!(
            "Config: {} unknown option(s), check the log",
            config_warnings.len()
        );
        app.config_warnings = config_warnings;
        app.notify(text, MessageType::Info);
    }

    // Run application
    let result = app.run(terminal).await;

    // Log shutdown before restoring terminal
    if logging_enabled {
        app::logging::log_shutdown_info();
    }

    // Restore terminal
    restore_terminal()?;
    result
}
