mod app;
mod assets;
mod event;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pixel-treasure-map",
    about = "Random pixel-art treasure maps. Keys: N new map, F fullscreen, S save."
)]
struct Args {
    /// Settings file (TOML); built-in defaults are used when it does not exist
    #[arg(long, default_value = "treasure_map.toml")]
    config: PathBuf,

    /// Directory containing assets/ (font and paper texture)
    #[arg(long)]
    assets: Option<String>,

    /// Seed for the first map; later maps use time-derived seeds
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// Initial window width in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Initial window height in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Reload settings and regenerate when the config file changes
    #[arg(long)]
    watch_config: bool,

    /// Also write a debug-level log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match log_file {
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .init();
        }
        Some(path) => {
            let file = std::fs::File::create(path)?;
            simplelog::CombinedLogger::init(vec![
                simplelog::TermLogger::new(
                    simplelog::LevelFilter::Info,
                    simplelog::Config::default(),
                    simplelog::TerminalMode::Mixed,
                    simplelog::ColorChoice::Auto,
                ),
                simplelog::WriteLogger::new(
                    simplelog::LevelFilter::Debug,
                    simplelog::Config::default(),
                    file,
                ),
            ])?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let mut settings = treasure_gen::load_settings_or_default(&args.config)?;
    if let Some(w) = args.width {
        settings.window.width = w;
    }
    if let Some(h) = args.height {
        settings.window.height = h;
    }
    let assets_root = assets::resolve_assets_root(args.assets);
    log::info!("Assets root: {:?}", assets_root);

    let (mut rl, thread) = raylib::init()
        .size(settings.window.width as i32, settings.window.height as i32)
        .title(&settings.window.title)
        .resizable()
        .build();
    rl.set_target_fps(settings.window.target_fps);

    let options = app::AppOptions {
        assets_root,
        config_path: args.config,
        first_seed: args.seed,
        watch_config: args.watch_config,
    };
    let mut app = app::App::new(&mut rl, &thread, settings, options)?;

    while !rl.window_should_close() {
        app.step(&mut rl, &thread);
        app.render(&mut rl, &thread);
    }
    log::info!(
        "Exiting after {} event(s), {} map(s) generated, {} frame(s) saved (last paint {:.2}ms)",
        app.stats.events_processed,
        app.stats.maps_generated,
        app.stats.frames_saved,
        app.stats.last_paint_ms
    );
    Ok(())
}
