//! Pokebot - Chat Bridge
//!
//! This server provides:
//! 1. An interaction endpoint the chat-platform adapter posts command invocations to
//! 2. Translation of each command into requests against the local emulator control server
//! 3. Rendering of screens and game state back into chat replies

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use pokebot_common::screen::PixelFormat;
use std::{net::SocketAddr, sync::Arc};

mod emulator;
mod interactions;
mod router;
#[cfg(test)]
mod testing;

use emulator::HttpEmulatorClient;
use router::CommandRouter;

const DEFAULT_PROJECT_URL: &str = "https://github.com/OFFTKP/pokemon-bot";

// ── CLI Arguments ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug, Clone)]
#[command(name = "pokebot-proxy", about = "Pokebot chat-to-emulator bridge")]
pub struct Args {
    /// Debug mode
    #[arg(long)]
    pub debug: bool,

    /// Port to listen on
    #[arg(long, default_value_t = 3081)]
    pub port: u16,

    /// Emulator control server base URL
    #[arg(long, default_value = "http://localhost:1234")]
    pub emulator_url: String,

    /// Pixel layout of the framebuffer returned by the `screen` action (rgba8, rgb8)
    #[arg(long, default_value = "rgba8")]
    pub pixel_format: PixelFormat,

    /// Link shown in help replies and screen footers
    #[arg(long, default_value = DEFAULT_PROJECT_URL)]
    pub project_url: String,
}

// ── Application State ──────────────────────────────────────────────────────────

pub struct AppStateInner {
    /// Command router, owns the emulator client
    pub router: CommandRouter<HttpEmulatorClient>,
}

pub struct AppState(Arc<AppStateInner>);

impl AppState {
    pub fn new(args: Args) -> anyhow::Result<Self> {
        let emulator = HttpEmulatorClient::new(&args.emulator_url)?;
        let router = CommandRouter::new(emulator, args.pixel_format, args.project_url);
        Ok(Self(Arc::new(AppStateInner { router })))
    }
}

impl std::ops::Deref for AppState {
    type Target = AppStateInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/interactions", post(interactions::handle_interaction))
        .route("/commands", get(interactions::list_commands))
        .with_state(state)
}

// ── Main ───────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!("Pokebot bridge starting...");
    log::info!("Emulator: {}", args.emulator_url);
    log::info!("Pixel format: {:?}", args.pixel_format);

    let port = args.port;
    let state = AppState::new(args)?;
    log::debug!(
        "Resolved emulator base: {}",
        state.router.emulator().base_url()
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    log::info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
