use anyhow::Result;
use promptbuild::{aggregate, ASSETS_DIR, OUTPUT_PATH};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    info!("aggregating prompt CSVs under {}/", ASSETS_DIR);
    let aggregate = aggregate::build(ASSETS_DIR)?;
    aggregate::write(&aggregate, OUTPUT_PATH)?;
    info!("wrote {} prompt types to {}", aggregate.len(), OUTPUT_PATH);
    Ok(())
}
