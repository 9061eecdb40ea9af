//! Toolvana demo entry point.
//!
//! Opens the durable store, builds the landing page, replays a short scripted
//! session (page load, two tool clicks, a search burst) through the event loop,
//! and prints the resulting page.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use toolvana::app::{App, PageEvent};
use toolvana::database::Database;
use toolvana::platform;
use toolvana::services::config::{ConfigEngine, ConfigEngineTrait};
use toolvana::storage::{KeyValueStore, MemoryStorage, SqliteStorage};
use toolvana::types::settings::ToolvanaSettings;
use toolvana::ui::landing_page;
use toolvana::ui::recent_tools_widget::LINK_CLASS;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolvana=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_settings() -> ToolvanaSettings {
    let mut engine = ConfigEngine::new(None);
    match engine.load() {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = engine.get_config_path(), error = %e, "using default config");
            ToolvanaSettings::default()
        }
    }
}

/// SQLite in the data directory, or an in-memory store when that fails.
fn open_storage(settings: &ToolvanaSettings) -> Box<dyn KeyValueStore> {
    let data_dir = platform::get_data_dir();
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        warn!(dir = %data_dir.display(), error = %e, "cannot create data directory");
    }
    let db_path = data_dir.join(&settings.storage.database_file);
    match Database::open(&db_path) {
        Ok(db) => {
            info!(path = %db_path.display(), "opened storage");
            Box::new(SqliteStorage::new(Arc::new(db)))
        }
        Err(e) => {
            warn!(path = %db_path.display(), error = %e, "falling back to in-memory storage");
            Box::new(MemoryStorage::new())
        }
    }
}

fn scripted_session() -> Vec<(PageEvent, Duration)> {
    let mut events = vec![
        (PageEvent::Ready { system_prefers_dark: false }, Duration::ZERO),
        (
            PageEvent::LinkClicked {
                href: "/tools/kelime-sayaci.html".to_string(),
                class: LINK_CLASS.to_string(),
            },
            Duration::from_millis(20),
        ),
        (
            PageEvent::LinkClicked {
                href: "/tools/pdf-donusturucu.html".to_string(),
                class: LINK_CLASS.to_string(),
            },
            Duration::from_millis(20),
        ),
    ];
    let mut typed = String::new();
    for c in "dönüş".chars() {
        typed.push(c);
        events.push((
            PageEvent::SearchInput { value: typed.clone() },
            Duration::from_millis(40),
        ));
    }
    events
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    info!("Toolvana v{}", env!("CARGO_PKG_VERSION"));

    let settings = load_settings();
    let storage = open_storage(&settings);
    let mut app = App::new(storage, settings, landing_page::build());

    let (tx, rx) = mpsc::channel(32);
    tokio::spawn(async move {
        for (event, delay) in scripted_session() {
            tokio::time::sleep(delay).await;
            if tx.send(event).await.is_err() {
                return;
            }
        }
    });

    app.run(rx).await;

    for (i, entry) in app.recent_entries().iter().enumerate() {
        println!("{}. {} -> {}", i + 1, entry.name, entry.url);
    }
    println!("{}", app.page.to_html());
}
