use clap::Parser;
use dotenv::dotenv;
use eat_where_la_client::commands;
use eat_where_la_client::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    commands::run(config).await
}
