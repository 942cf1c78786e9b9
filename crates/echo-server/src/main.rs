//! Echo server entry point: `echo-server <port>`.

use std::process::ExitCode;

use echo_server::config::Config;
use echo_server::error::ServerError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

async fn run(config: Config) -> Result<(), ServerError> {
    let listener = echo_server::bind(&config).await?;
    tracing::info!(addr = %config.addr(), "starting echo server");

    echo_server::serve(listener, echo_server::create_app()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_args(std::env::args());

    let log_level = match &config {
        Ok(config) => config.log_level.clone(),
        Err(_) => Config::default().log_level,
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match config {
        Ok(config) => run(config).await,
        Err(err) => Err(err.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "echo server stopped");
            ExitCode::FAILURE
        }
    }
}
