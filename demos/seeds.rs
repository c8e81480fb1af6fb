//! Three sheets that differ only by seed. Tear them with the same gesture
//! and every edge detail (jag offsets, fiber placement, grain) comes out
//! different; respawn the demo and each sheet tears exactly the same way
//! again.

use bevy::prelude::*;
use bevy_paper_tear::{PaperTearPlugin, sheet::TearSheet};

fn main() {
    App::new()
        .add_plugins((DefaultPlugins, PaperTearPlugin::default()))
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    for (i, seed) in [1, 42, 1337].into_iter().enumerate() {
        commands.spawn((
            TearSheet::new(300.0, 400.0)
                .with_seed(seed)
                .with_jaggedness(0.025)
                .with_fibers(120),
            Transform::from_xyz((i as f32 - 1.0) * 330.0, 0.0, 0.0),
        ));
    }
}
