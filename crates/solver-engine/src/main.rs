#[tokio::main]
async fn main() -> anyhow::Result<()> {
    solver_engine::start(std::env::args()).await
}
