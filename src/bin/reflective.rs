use sound_dispatch::utils::logger;
use sound_dispatch::{config, ReflectiveDemo, WriterConsole};

fn main() -> anyhow::Result<()> {
    // 原始參數列表，不解析任何旗標；非 UTF-8 參數以替代字元保留
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

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

    let demo = ReflectiveDemo::new(config.lineup(), args);
    let mut console = WriterConsole::stdout();
    demo.run(&mut console)?;

    Ok(())
}
