//! A wall of independent sheets. Each one tracks its own gesture, so tearing
//! one leaves its neighbours untouched.

use bevy::prelude::*;
use bevy_paper_tear::{PaperTearPlugin, sheet::TearSheet};

const COLUMNS: u32 = 3;
const ROWS: u32 = 2;

fn main() {
    App::new()
        .add_plugins((DefaultPlugins, PaperTearPlugin::default()))
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    for row in 0..ROWS {
        for col in 0..COLUMNS {
            let x = (col as f32 - (COLUMNS - 1) as f32 * 0.5) * 360.0;
            let y = (row as f32 - (ROWS - 1) as f32 * 0.5) * 280.0;
            commands.spawn((
                TearSheet::new(330.0, 250.0).with_seed(row * COLUMNS + col + 1),
                Transform::from_xyz(x, y, 0.0),
            ));
        }
    }
}
