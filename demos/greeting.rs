//! A sketch of the greeting-card flow: a paper sheet covers the card, a
//! drag tears it open, the card content fades in, and a follow-up
//! affordance unlocks a few seconds later.

use bevy::prelude::*;
use bevy_paper_tear::{
    PaperTearPlugin,
    interp::ease_in_out_cubic,
    plugin::{FollowUpUnlocked, ScrollLocked, TearRevealed},
    sheet::TearSheet,
};

/// Page content the tear reveals.
#[derive(Component)]
struct CardContent;

/// One-shot fade started when the cover tears.
#[derive(Component)]
struct FadeIn(Timer);

fn main() {
    App::new()
        .add_plugins((DefaultPlugins, PaperTearPlugin::default()))
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (on_revealed, fade_in_content, on_unlocked, watch_scroll_lock),
        )
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    // The card beneath the cover, invisible until the tear reveals it.
    // Plain sprites stand in for page content.
    commands.spawn((
        CardContent,
        Sprite::from_color(Color::srgba(0.86, 0.32, 0.36, 0.0), Vec2::new(460.0, 150.0)),
        Transform::from_xyz(0.0, 40.0, -1.0),
    ));
    commands.spawn((
        CardContent,
        Sprite::from_color(Color::srgba(0.92, 0.78, 0.45, 0.0), Vec2::new(300.0, 60.0)),
        Transform::from_xyz(0.0, -90.0, -1.0),
    ));

    commands.spawn(TearSheet::new(640.0, 420.0).with_seed(20240214));
}

fn on_revealed(
    mut commands: Commands,
    torn: Query<Entity, Added<TearRevealed>>,
    content: Query<Entity, With<CardContent>>,
) {
    for entity in torn.iter() {
        info!("sheet {entity:?} torn open");
        for card in content.iter() {
            commands
                .entity(card)
                .insert(FadeIn(Timer::from_seconds(1.2, TimerMode::Once)));
        }
    }
}

fn fade_in_content(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Sprite, &mut FadeIn)>,
) {
    for (entity, mut sprite, mut fade) in query.iter_mut() {
        fade.0.tick(time.delta());
        sprite
            .color
            .set_alpha(ease_in_out_cubic(fade.0.fraction()));
        if fade.0.just_finished() {
            commands.entity(entity).remove::<FadeIn>();
        }
    }
}

fn on_unlocked(query: Query<Entity, Added<FollowUpUnlocked>>) {
    for entity in query.iter() {
        info!("follow-up unlocked for {entity:?}");
    }
}

/// A page-level system would pin its scroll position here; the demo just
/// reports the transitions.
fn watch_scroll_lock(locked: Res<ScrollLocked>) {
    if locked.is_changed() && !locked.is_added() {
        info!("scroll {}", if locked.0 { "locked" } else { "unlocked" });
    }
}
