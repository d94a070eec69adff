use anyhow::Result;
use value_slider::config::Config;
use value_slider::logger::Logger;
use value_slider::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    // `value-slider --generate-config [path]` writes the defaults and exits
    if let Some(flag) = args.next() {
        if flag == "--generate-config" {
            let path = match args.next() {
                Some(path) => path.into(),
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        eprintln!("❌ Unknown argument: {flag}");
        eprintln!("\nUsage: value-slider [--generate-config [path]]");
        return Ok(());
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    if let Some(path) = logger.log_file() {
        log::info!("Logging to {}", path.display());
    }

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
