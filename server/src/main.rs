use tokio::net::TcpListener;
use todo_server::{observability, AppState, ServerConfig, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    observability::init_tracing(config.log_format);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    todo_server::run(listener, AppState::new(TodoStore::new())).await?;
    Ok(())
}
