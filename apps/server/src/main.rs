use anyhow::Context;
use foodloop::domain::config::ApiConfig;
use foodloop::kernel::config::load_config;
use foodloop_logger::Logger;
use foodloop_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let mut logger =
        Logger::builder(env!("CARGO_PKG_NAME")).env_filter(&cfg.logging.level);
    if let Some(dir) = &cfg.logging.dir {
        logger = logger.path(dir).json(cfg.logging.json);
    }
    let _log = logger.init()?;

    Server::builder().config(cfg).build().await?.run().await
}
