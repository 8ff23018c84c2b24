use bevy::prelude::*;
use clap::Parser;

use bouncy_playground::{GameConfig, PlaygroundMode, PlaygroundPlugin};

#[derive(Parser, Debug)]
#[command(name = "bouncy-playground", version, about = "Physics toy town with explosions, wind and a vortex")]
struct Cli {
    /// Which playground to run
    #[arg(long, short, value_enum, default_value = "town")]
    mode: PlaygroundMode,
    /// Path to the RON config file
    #[arg(long, default_value = "assets/config/game.ron")]
    config: String,
}

fn main() {
    let cli = Cli::parse();

    let (cfg, load_err) = GameConfig::load_or_default(&cli.config);

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }));

    if let Some(e) = load_err {
        warn!("config {} not usable ({e:#}); running with defaults", cli.config);
    }

    app.insert_resource(cfg)
        .insert_resource(cli.mode)
        .add_plugins(PlaygroundPlugin)
        .run();
}
