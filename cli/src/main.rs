use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use panel::{
    ApiError, CameraApi, CameraCard, CameraId, CameraListView, Controller, HttpCameraApi, HttpConfig, PanelError,
    SettingsPanel,
};
use tracing::Level;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Panel(#[from] PanelError),
    #[error(transparent)]
    Client(#[from] ApiError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("camera {0} is not connected")]
    NotConnected(CameraId),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "camctl", about = "Camera control panel CLI")]
struct Cli {
    #[arg(long, env = "CAMERA_API_URL", default_value = panel::http::DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "CAMERA_API_TIMEOUT_SECS", default_value_t = panel::http::DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout: u64,

    /// Connection timeout in seconds.
    #[arg(long, env = "CAMERA_API_CONNECT_TIMEOUT_SECS", default_value_t = panel::http::DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout: u64,

    /// Log to stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Check that the backend is up.
    Ping,
    /// List detected cameras.
    List {
        #[arg(long)]
        json: bool,
    },
    Connect { id: CameraId },
    Disconnect { id: CameraId },
    /// Show the adjustable settings of a connected camera.
    Settings {
        id: CameraId,
        /// Print the backend's raw settings map instead.
        #[arg(long)]
        raw: bool,
    },
    /// Change one setting of a connected camera.
    Set { id: CameraId, setting: String, value: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(cli.verbose))
        .init();

    let config = http_config(&cli);
    let controller = Controller::new(HttpCameraApi::new(&config)?);
    run(&controller, &config, cli.command).await
}

/// Zero timeouts keep the client defaults.
fn http_config(cli: &Cli) -> HttpConfig {
    let mut config = HttpConfig::new(&cli.base_url);
    if cli.timeout > 0 {
        config.request_timeout = Duration::from_secs(cli.timeout);
    }
    if cli.connect_timeout > 0 {
        config.connect_timeout = Duration::from_secs(cli.connect_timeout);
    }
    config
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

async fn run_ping(config: &HttpConfig) -> Result<(), CliError> {
    let client = reqwest::Client::builder().timeout(config.request_timeout).build()?;
    let response = client.get(format!("{}{}", config.base_url, wire::paths::HEALTHZ)).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run(controller: &Controller<HttpCameraApi>, config: &HttpConfig, command: Command) -> Result<(), CliError> {
    match command {
        Command::Ping => run_ping(config).await,
        Command::List { json } => {
            let list = controller.discover().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                print!("{}", render_list(&controller.snapshot().list));
            }
            Ok(())
        }
        Command::Connect { id } => {
            controller.connect(id).await?;
            let card = controller.card(id).ok_or(CliError::NotConnected(id))?;
            print!("{}", render_card(&card));
            Ok(())
        }
        Command::Disconnect { id } => {
            controller.disconnect(id).await?;
            println!("Camera {id} disconnected");
            Ok(())
        }
        Command::Settings { id, raw } => {
            if raw {
                let settings = controller.api().settings(id).await?;
                println!("{}", serde_json::to_string_pretty(&settings)?);
                return Ok(());
            }
            controller.restore().await?;
            let card = controller.card(id).ok_or(CliError::NotConnected(id))?;
            print!("{}", render_card(&card));
            Ok(())
        }
        Command::Set { id, setting, value } => {
            controller.restore().await?;
            controller.update_setting_text(id, &setting, &value).await?;
            let card = controller.card(id).ok_or(CliError::NotConnected(id))?;
            print!("{}", render_settings(&card.settings));
            Ok(())
        }
    }
}

// =============================================================================
// RENDERING
// =============================================================================

fn render_list(view: &CameraListView) -> String {
    match view {
        CameraListView::Unloaded => String::new(),
        CameraListView::Empty => format!("{}\n", panel::view::NO_CAMERAS_TEXT),
        CameraListView::Buttons(buttons) => buttons.iter().map(|button| format!("{}\n", button.label)).collect(),
    }
}

fn render_card(card: &CameraCard) -> String {
    format!("{}\n  stream: {}\n{}", card.title, card.stream_url, render_settings(&card.settings))
}

fn render_settings(panel: &SettingsPanel) -> String {
    match panel {
        SettingsPanel::Placeholder => format!("  {}\n", panel::settings::NO_SETTINGS_TEXT),
        SettingsPanel::Controls(controls) => controls
            .iter()
            .map(|control| format!("  {:<12}{:>6}\n", control.label, control.readout))
            .collect(),
    }
}
