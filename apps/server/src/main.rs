use anyhow::Context;
use dpi::kernel::config::load_config;
use dpi_logger::Logger;
use dpi_server::Server;

#[dpi_runtime::main(server)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config(Some("site")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build().await?.run().await
}
