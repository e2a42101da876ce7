use bookshelf_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    let state = AppState::builder().config(config.clone()).build();
    let app = build_router(state);

    let result = Server::new(config).serve(app).await;
    shutdown_tracing();

    result
}
