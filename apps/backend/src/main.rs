#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cardquiz_backend::run().await
}
