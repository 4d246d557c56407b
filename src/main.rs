use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod domain;
mod infra;
mod ui;
mod usecase;


use app::App;

fn main() {
    tracing_subscriber::registry()
        .with(
            // Defaults to info. Override via RUST_LOG.
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Product Data Table"),
                )
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "producttable", "product-table")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if (value.fract()).abs() < f64::EPSILON {
        format!("${}", value as i64)
    } else {
        let mut text = format!("{value:.2}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        format!("${text}")
    }
}

fn table_container_style() -> String {
    "overflow: auto; border: 1px solid #ddd; border-radius: 6px;".to_string()
}

fn table_header_cell_style() -> String {
    "border: 1px solid #bbb; padding: 6px 8px; background: #f2f2f2; text-align: left; white-space: nowrap;".to_string()
}

fn sort_button_style(active: bool) -> String {
    let background = if active { "#eef4ff" } else { "#fff" };
    format!("border: 1px solid #bbb; background: {background}; border-radius: 4px; cursor: pointer; padding: 0 6px;")
}
