use std::{env, path::PathBuf, process};

use dioxus::prelude::*;
use greinir_config::Config;
use greinir_engine::io;

use greinir_dioxus::ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("greinir starting up");

    let config_path = Config::config_path();
    let content_path = match resolve_content_path() {
        Some(path) => path,
        None => {
            eprintln!("Error: No content path provided and no config file found");
            let program_name = env::args()
                .next()
                .unwrap_or_else(|| "greinir-dioxus".to_string());
            eprintln!("Usage: {program_name} <content-folder-path>");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_content_dir(&content_path) {
        eprintln!(
            "Error: Content path '{}' is invalid: {e}",
            content_path.display()
        );
        process::exit(1);
    }

    log::info!("Launching reading shell for {}", content_path.display());
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

/// CLI argument wins over the config file, same as the terminal client.
fn resolve_content_path() -> Option<PathBuf> {
    let args: Vec<String> = env::args().collect();
    if args.len() == 2 {
        return Some(PathBuf::from(&args[1]));
    }
    match Config::load() {
        Ok(Some(config)) => Some(config.content_path),
        Ok(None) => None,
        Err(e) => {
            log::error!("Failed to load config file: {e}");
            None
        }
    }
}

fn app_root() -> Element {
    // main() has already validated the path before launching.
    let content_path = resolve_content_path().expect("content path resolved before launch");
    rsx! {
        App { content_path }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("greinir")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
