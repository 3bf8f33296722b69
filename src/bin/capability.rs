use sound_dispatch::utils::logger;
use sound_dispatch::{config, CapabilityDemo, WriterConsole};

fn main() -> anyhow::Result<()> {
    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_from_config(&config.logging);
    tracing::debug!("Config: {:?}", config);

    // The argument list is not Soundable, so it cannot be listened to here.
    let demo = CapabilityDemo::new(config.lineup());
    let mut console = WriterConsole::stdout();
    demo.run(&mut console)?;

    Ok(())
}
