mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Token-free settings (API root, data dir) may come from a local .env
    dotenvy::dotenv().ok();

    cli::run().await?;

    Ok(())
}
