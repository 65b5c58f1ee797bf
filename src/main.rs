use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use names_core::{NameService, RecognizerBackend, ServerConfig};

/// Main entry point for the names service
///
/// Resolves configuration once, builds the recognizer and serves the REST API.
///
/// # Environment Variables
/// - `NAMES_REST_ADDR`: bind address (default: "0.0.0.0:$PORT")
/// - `PORT`: port used when `NAMES_REST_ADDR` is unset (default: 5001)
/// - `NAMES_STATIC_DIR`: directory holding the front-end assets (default: "static")
/// - `NAMES_RECOGNIZER`: `heuristic` (default) or `remote`
/// - `NAMES_RECOGNIZER_URL`: NER service URL, required for `remote`
/// - `NAMES_SERIALIZE_RECOGNIZER`: serialise recognizer calls behind a mutex (default: false)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("names=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env()?;
    let recognizer = cfg.build_recognizer(tokio::runtime::Handle::current());

    match cfg.recognizer() {
        RecognizerBackend::Heuristic => tracing::info!("++ Recognizer: heuristic"),
        RecognizerBackend::Remote { url } => tracing::info!("++ Recognizer: remote at {}", url),
    }
    if cfg.serialize_recognizer() {
        tracing::info!("++ Recognizer calls are serialised");
    }
    if !cfg.static_dir().is_dir() {
        tracing::warn!(
            "static directory {} does not exist; asset routes will return 404",
            cfg.static_dir().display()
        );
    }

    let app = api_rest::build_router(NameService::new(recognizer), cfg.static_dir());

    tracing::info!("++ Name extraction server running on http://{}", cfg.rest_addr());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
