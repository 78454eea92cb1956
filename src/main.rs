use dotenv::dotenv;
use receipt_processor::api::server;
use receipt_processor::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = ServerConfig::from_env();
    server::run_server(config).await
}
