use dioxus::prelude::*;
use gridpress_engine::ReferenceStore;
use std::env;
use std::path::PathBuf;
use std::process;

mod demo;
mod ui;

use gridpress_config::Config;
use ui::{App, RefData};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("gridpress starting up");

    let library_path = resolve_library_path();
    log::info!("Article library: {}", library_path.display());

    if !library_path.exists() {
        if let Err(e) = std::fs::create_dir_all(&library_path) {
            eprintln!(
                "Error: Failed to create article library '{}': {e}",
                library_path.display()
            );
            process::exit(1);
        }
        log::info!("Created article library directory");
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

/// Library path from the CLI argument if given, otherwise the config file.
fn resolve_library_path() -> PathBuf {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        2 => {
            log::info!("Using library path from CLI argument");
            PathBuf::from(&args[1])
        }
        1 => match Config::load() {
            Ok(Some(config)) => config.library_path,
            Ok(None) => {
                eprintln!("Error: No library path provided and no config file found");
                let program_name = args
                    .first()
                    .map(String::as_str)
                    .unwrap_or("gridpress-dioxus");
                eprintln!("Usage: {program_name} <article-library-path>");
                eprintln!("Or create a config file at {}", Config::config_path().display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                process::exit(1);
            }
        },
        _ => {
            let program_name = args
                .first()
                .map(String::as_str)
                .unwrap_or("gridpress-dioxus");
            eprintln!("Usage: {program_name} [article-library-path]");
            process::exit(1);
        }
    }
}

/// Reference data from the configured JSON fixture, or the built-in sample
/// set when none is configured or the fixture fails to load.
fn load_refdata() -> RefData {
    let configured = match Config::load() {
        Ok(Some(config)) => config.reference_data_path,
        _ => None,
    };

    if let Some(path) = configured {
        match std::fs::read_to_string(&path) {
            Ok(json) => match ReferenceStore::from_json(&json) {
                Ok(store) => {
                    log::info!("Loaded reference data from {}", path.display());
                    return RefData::new(store);
                }
                Err(e) => {
                    log::warn!("Invalid reference data in {}: {e}", path.display());
                }
            },
            Err(e) => {
                log::warn!("Could not read reference data {}: {e}", path.display());
            }
        }
    }

    log::info!("Using built-in sample reference data");
    RefData::new(demo::demo_reference_store())
}

fn app_root() -> Element {
    // Same resolution logic as main; the launch entrypoint takes a plain fn
    // so state cannot be passed in directly.
    let library_path = resolve_library_path();
    let refdata = load_refdata();

    rsx! {
        App { library_path, refdata }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("gridpress")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
