#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use std::net::SocketAddr;

    use cpm_schedule::{CpmConfig, Schedule, http_api, logging};

    let config = CpmConfig::load(std::env::var_os("CPM_CONFIG").as_deref().map(std::path::Path::new))
        .context("loading configuration")?;
    logging::init_tracing(&config.log_filter);

    let addr: SocketAddr = config
        .http_addr
        .parse()
        .with_context(|| format!("invalid listen address '{}'", config.http_addr))?;

    println!("cpm-schedule HTTP API listening on http://{addr}");
    http_api::serve(addr, Schedule::new()).await?;
    Ok(())
}

