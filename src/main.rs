use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use rasa::app::cli::Args;
use rasa::app::config::AppConfig;
use rasa::app::events::AppEvent;
use rasa::app::{inputs, logging, App};
use rasa::library::DirectoryScanner;
use rasa::player::ClockPlayer;
use rasa::ui::{self, terminal::RatatuiSurface, theme};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    if args.generate_config {
        println!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let config_dir = AppConfig::get_config_dir();
    let _log_guard = logging::init(&config_dir)?;
    info!("rasa {} starting", env!("CARGO_PKG_VERSION"));

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using defaults", e);
            Default::default()
        }
    };

    let music_dir = args
        .music_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.music_directory));
    let tick = Duration::from_millis(config.ui.tick_ms.max(10));

    let mut app = App::new(
        config,
        Box::new(DirectoryScanner::new(music_dir)),
        Box::new(ClockPlayer::default()),
    );
    if let Err(e) = app.reload_library() {
        warn!("no library yet: {:#}", e);
    }

    let theme = theme::load_theme(&AppConfig::get_theme_path());
    let mut surface = RatatuiSurface::new(theme)?;

    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Render Tick Task ⚡
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick);
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });
    drop(tx);

    let result = run(&mut app, &mut surface, &mut rx).await;

    surface.restore()?;
    if let Err(e) = &result {
        error!("exiting with error: {:#}", e);
    }
    info!("bye");
    result
}

async fn run(
    app: &mut App,
    surface: &mut RatatuiSurface,
    rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    ui::tick(app, surface)?;

    while let Some(event) = rx.recv().await {
        match event {
            AppEvent::Input(Event::Key(key)) => {
                if inputs::handle_event(key, app) {
                    ui::tick(app, surface)?;
                }
            }
            AppEvent::Input(Event::Resize(_, _)) => app.view.mark_dirty(),
            AppEvent::Input(_) => {}
            AppEvent::Tick => {
                ui::tick(app, surface)?;
            }
        }

        if !app.is_running {
            break;
        }
    }
    Ok(())
}
