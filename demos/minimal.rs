use bevy::prelude::*;
use bevy_paper_tear::{PaperTearPlugin, sheet::TearSheet};

fn main() {
    App::new()
        .add_plugins((DefaultPlugins, PaperTearPlugin::default()))
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    bevy::log::info!("Minimal Example");

    commands.spawn(Camera2d);

    // Drag across the sheet (or tap it on a touchscreen) to tear it.
    commands.spawn(TearSheet::new(640.0, 420.0));
}
