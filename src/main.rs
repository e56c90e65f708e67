use anyhow::Result;
use story_maker::config::Config;
use story_maker::ui;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load()?;
    ui::run(config).await
}
