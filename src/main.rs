// main.rs
use std::process;

use maze_adventure::audio_manager::AudioManager;
use maze_adventure::config::GameConfig;
use maze_adventure::core::{GameSession, LevelSet, levels};
use maze_adventure::driver;
use maze_adventure::error::StartupError;
use maze_adventure::render::raylib_display::RaylibDisplay;

/// Config plus validated levels; nothing here touches the window.
fn load() -> Result<(GameConfig, LevelSet), StartupError> {
    let config = GameConfig::load(&GameConfig::default_path())?;
    let levels = match &config.levels_path {
        Some(path) => LevelSet::parse(levels::read_levels_file(path)?, &config.legend)?,
        None => LevelSet::builtin(&config.legend)?,
    };
    log::info!("{} level(s) ready", levels.level_count());
    Ok((config, levels))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, levels) = match load() {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    let mut session = GameSession::new(levels);
    let first = session.current_level();
    let mut display = RaylibDisplay::open(&config, first.width(), first.height());

    let mut audio = if config.audio { AudioManager::new(config.sfx_volume) } else { None };
    match audio.as_mut() {
        Some(audio) => audio.load_cues_auto(),
        None if config.audio => log::warn!("No audio output device, playing silently"),
        None => {}
    }

    driver::run(&mut session, &mut display, |outcome| {
        if let Some(audio) = audio.as_mut() {
            audio.play_outcome(outcome);
        }
    });
}
