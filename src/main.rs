use places::config::Config;
use places::db::PlaceStore;
use places::engine::Engine;
use places::error::Error;
use places::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let store = PlaceStore::connect(&config.database_url, config.max_connections).await?;
    let engine = Engine::new(store, config.maps).await?;

    serve(engine, config.listen_addr).await
}
