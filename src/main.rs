use ai_llm_service::telemetry;
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env; real environment variables win.
    let dotenv = dotenvy::dotenv();

    telemetry::init("info", Level::INFO)?;

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => tracing::debug!("no .env file, using process environment"),
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
    }

    api::start().await?;

    Ok(())
}
