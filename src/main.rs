use anyhow::Result;

use termnote::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    termnote::logger::init(&config.logging)?;

    // Run the TUI application
    termnote::ui::run_app(config).await?;

    Ok(())
}
