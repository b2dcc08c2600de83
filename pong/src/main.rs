use flatland_engine::game_loop::Engine;
use flatland_engine::input::input_channel;
use flatland_engine::surface::HeadlessSurface;
use flatland_engine::EngineConfig;
use flatland_pong::build_game;
use flatland_pong::console::Console;
use tokio::io::{AsyncBufReadExt, BufReader};

fn load_config() -> Result<EngineConfig, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| format!("cannot read {}: {}", path, e))?;
            EngineConfig::from_json(&json)
        }
        None => {
            let config = EngineConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid engine configuration: {}", e);
            std::process::exit(1);
        }
    };

    let (input, queue) = input_channel(config.input_capacity);
    let game = match build_game(&config, queue) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Failed to start pong: {}", e);
            std::process::exit(1);
        }
    };

    let engine = Engine::start(game, Box::new(HeadlessSurface::new()), &config);
    println!("Pong running. Commands: up, down, esc, enter, dev, fps, quit");

    let mut console = Console::new(input);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = engine.wait_for_exit() => break,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => {
                    if !console.handle_line(&line) {
                        break;
                    }
                }
                Ok(None) => stdin_open = false,
                Err(e) => {
                    tracing::warn!("stdin unreadable: {}", e);
                    stdin_open = false;
                }
            },
        }
    }

    if let Err(e) = engine.shutdown().await {
        tracing::error!("Engine shut down with an error: {}", e);
        std::process::exit(1);
    }
}
