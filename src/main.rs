use anyhow::{anyhow, Context};
use catchat::{
    app::App,
    config::{get_config, initialize_config},
    cookies::{CookieStore, FileCookieStore},
    logging::init_logging,
    sound::{AudioBackend, RodioBackend, SilentBackend},
    ui::run_ui,
};
use log::{info, warn};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    initialize_config().context("Failed to load config")?;
    let config = get_config();
    let _logger = init_logging(&config).context("Failed to start logging")?;
    info!("catchat starting");

    let cookie_path = match &config.cookie_path {
        Some(path) => path.clone(),
        None => FileCookieStore::default_path()?,
    };
    let cookies: Box<dyn CookieStore> = Box::new(FileCookieStore::open(cookie_path));

    let audio: Box<dyn AudioBackend> = if config.sound_enabled {
        match RodioBackend::spawn() {
            Ok(backend) => Box::new(backend),
            Err(e) => {
                warn!("No sound for you: {}", e);
                Box::new(SilentBackend)
            }
        }
    } else {
        Box::new(SilentBackend)
    };

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let app = App::new(&config, events_tx, cookies, audio)?;

    run_ui(app, events_rx)
        .await
        .map_err(|e| anyhow!("UI error: {}", e))?;

    info!("catchat exiting");
    Ok(())
}
