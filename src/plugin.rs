use bevy::{
    asset::RenderAssetUsages,
    mesh::{Indices, PrimitiveTopology},
    prelude::*,
    window::PrimaryWindow,
};

use crate::{
    clip::ClipPair,
    fiber::{Fiber, scatter_fibers, scatter_grain},
    gesture::{CompletedTear, ReleaseOutcome, TearPhase, TearTracker},
    interp::ease_out_cubic,
    jagged::jagged_path,
    mesh::TearMesh,
    sheet::TearSheet,
    types::{Point, Value},
};

/// Child z-layers, bottom to top: grain under the cover pieces, whiskers and
/// the live stroke above them.
const Z_GRAIN: f32 = 0.1;
const Z_PIECES: f32 = 0.2;
const Z_FIBERS: f32 = 0.3;
const Z_STROKE: f32 = 0.4;

/// A touch release at or below this progress counts as a tap, not a failed
/// drag.
const TAP_PROGRESS_MAX: Value = 0.02;

/// How far each half drifts during separation, as a fraction of the sheet
/// diagonal, and how much it tilts (radians).
const SEPARATION_DRIFT: Value = 0.05;
const SEPARATION_TILT: Value = 0.045;
const SEPARATION_SECS: f32 = 0.9;

/// System sets for the paper tear pipeline.
///
/// Use these to order your own systems relative to tear processing:
///
/// ```rust,ignore
/// // Read the fresh clip polygons after geometry derives but before the
/// // child meshes rebuild:
/// app.add_systems(Update, read_clips.after(TearSet::Derive)
///                                   .before(TearSet::Present));
/// ```
///
/// ```text
/// TearSet::Track  →  TearSet::Derive  →  [your systems]  →  TearSet::Present
/// ```
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TearSet {
    /// Routes pointer input into each sheet's [`TearTracker`].
    Track,
    /// Recomputes [`DerivedTear`] for sheets whose geometry key changed.
    Derive,
    /// Rebuilds child meshes and advances the separation animation.
    Present,
}

/// Marker for one of the two cover halves spawned under a [`TearSheet`].
///
/// Query for it together with [`MeshMaterial2d`] to restyle a half.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TearPiece {
    Top,
    Bottom,
}

/// Marker for the live tear-preview stroke child. Visible only while a drag
/// is in flight.
#[derive(Component)]
pub struct TearStroke;

/// Marker for the fiber whisker overlay child.
#[derive(Component)]
pub struct FiberOverlay;

/// Marker for the static paper-grain overlay child.
#[derive(Component)]
pub struct GrainOverlay;

/// Remaining cover opacity of a piece, 1 at commit down to 0 when the
/// separation animation ends. Read it to drive your own fade-synced effects.
#[derive(Component)]
pub struct PieceFade(pub Value);

/// Inserted on the sheet entity the moment its tear commits. Never removed;
/// react with `Added<TearRevealed>`.
#[derive(Component)]
pub struct TearRevealed;

/// One-shot timer between a reveal and the sheet's follow-up unlock.
/// Replaced by [`FollowUpUnlocked`] when it finishes.
#[derive(Component)]
pub struct FollowUpDelay(pub Timer);

/// Marker inserted once [`FollowUpDelay`] has elapsed. The greeting flow
/// keeps its next affordance disabled until this appears.
#[derive(Component)]
pub struct FollowUpUnlocked;

/// Drives the two cover halves apart after a commit: opposite offsets along
/// the tear normal, opposite tilts, and a shared fade.
#[derive(Component)]
pub struct Separation {
    offset: Vec2,
    tilt: Value,
    timer: Timer,
}

impl Separation {
    fn for_tear(sheet: &TearSheet, tear: &CompletedTear) -> Self {
        let first = tear.spine.first().copied().unwrap_or(Point::new(0.0, 0.5));
        let last = tear.spine.last().copied().unwrap_or(Point::new(1.0, 0.5));
        let along = sheet.local_from_normalized(last) - sheet.local_from_normalized(first);
        let normal = if along.length_squared() > 0.0 {
            Vec2::new(-along.y, along.x).normalize()
        } else {
            Vec2::Y
        };
        Self {
            offset: normal * sheet.diagonal() * SEPARATION_DRIFT,
            tilt: SEPARATION_TILT,
            timer: Timer::from_seconds(SEPARATION_SECS, TimerMode::Once),
        }
    }
}

/// Derived tear geometry, memoized on the sheet entity.
///
/// Recomputed only when [`GeometryKey`] changes, so idle sheets and
/// between-sample drag frames cost nothing. `Changed<DerivedTear>` is the
/// signal that child meshes need a rebuild.
#[derive(Component, Clone)]
pub struct DerivedTear {
    key: GeometryKey,
    /// Phase the geometry was derived from.
    pub phase: TearPhase,
    /// Roughened tear path (preview while dragging, final edge once torn).
    pub jagged: Vec<Point>,
    /// The two cover polygons.
    pub clips: ClipPair,
    /// Whiskers along the committed edge; empty until revealed.
    pub fibers: Vec<Fiber>,
}

impl DerivedTear {
    fn compute(sheet: &TearSheet, tracker: &TearTracker) -> Self {
        let key = GeometryKey::of(sheet, tracker);
        let source: &[Point] = match tracker.phase() {
            TearPhase::Revealed => tracker
                .completed()
                .map(|tear| tear.spine.as_slice())
                .unwrap_or(&[]),
            TearPhase::Dragging => tracker.raw_path(),
            TearPhase::Idle => &[],
        };
        let jagged = jagged_path(source, sheet.jaggedness, sheet.detail, sheet.seed);
        let (clips, fibers) = if tracker.is_revealed() {
            (
                ClipPair::split(&jagged),
                scatter_fibers(
                    &jagged,
                    sheet.width,
                    sheet.height,
                    sheet.fiber_count,
                    sheet.seed,
                ),
            )
        } else {
            (ClipPair::untorn(), Vec::new())
        };
        Self {
            key,
            phase: tracker.phase(),
            jagged,
            clips,
            fibers,
        }
    }
}

/// Structural fingerprint of everything the derived geometry depends on.
/// Floats are compared by bit pattern; no hashing, just equality.
#[derive(Clone, PartialEq, Eq)]
struct GeometryKey {
    phase: TearPhase,
    samples: usize,
    last: Option<(u32, u32)>,
    size: (u32, u32),
    jaggedness: u32,
    detail: usize,
    fibers: usize,
    seed: u32,
}

impl GeometryKey {
    fn of(sheet: &TearSheet, tracker: &TearTracker) -> Self {
        Self {
            phase: tracker.phase(),
            samples: tracker.raw_path().len(),
            last: tracker
                .raw_path()
                .last()
                .map(|p| (p.x.to_bits(), p.y.to_bits())),
            size: (sheet.width.to_bits(), sheet.height.to_bits()),
            jaggedness: sheet.jaggedness.to_bits(),
            detail: sheet.detail,
            fibers: sheet.fiber_count,
            seed: sheet.seed,
        }
    }
}

/// The sheet currently being dragged, if any. Pins pointer routing to that
/// sheet so moves and the release keep flowing to it even when the pointer
/// wanders off the sheet mid-drag.
#[derive(Resource, Default)]
pub struct ActiveDrag {
    pub sheet: Option<Entity>,
    /// Whether the drag came from a touch; gates the tap fallback.
    pub touch: bool,
}

/// True exactly while a tear drag is in flight. Page-level systems (camera
/// pan, scroll containers) should freeze their own motion while this is set,
/// mirroring how the greeting page pins its scroll during a tear.
#[derive(Resource, Default)]
pub struct ScrollLocked(pub bool);

/// Runtime configuration for the paper tear pipeline.
///
/// Inserted as a resource by [`PaperTearPlugin`]. Modify it at any time to change behaviour:
///
/// ```rust,ignore
/// app.add_plugins(PaperTearPlugin { tap_to_tear: false, ..default() });
///
/// // Or change it at runtime:
/// fn my_system(mut config: ResMut<TearConfig>) {
///     config.tap_to_tear = true; // re-enable the touch shortcut
/// }
/// ```
#[derive(Resource)]
pub struct TearConfig {
    /// Whether a touch tap (as opposed to a full drag) reveals a sheet.
    ///
    /// Mouse clicks never trigger this; a mouse user can always complete the
    /// real gesture. Default: `true`.
    pub tap_to_tear: bool,
    /// Seconds between a reveal and [`FollowUpUnlocked`] appearing on the
    /// sheet entity. Default: `5.0`.
    pub follow_up_delay: f32,
}

impl Default for TearConfig {
    fn default() -> Self {
        Self {
            tap_to_tear: true,
            follow_up_delay: 5.0,
        }
    }
}

/// Bevy plugin that turns pointer drags over [`TearSheet`]s into torn paper.
///
/// When the `auto_pipeline` feature is enabled, any [`TearSheet`] added to
/// the world is automatically wired up:
///
/// ```text
/// TearSheet added
///   → TearTracker + piece/overlay children spawned   (on_sheet_add)
///   → pointer input routed to the tracker            (TearSet::Track)
///   → DerivedTear recomputed when its key changes    (TearSet::Derive)
///   → child meshes rebuilt, separation animated,     (TearSet::Present)
///     follow-up timer run
/// ```
pub struct PaperTearPlugin {
    /// Initial value for [`TearConfig::tap_to_tear`].
    pub tap_to_tear: bool,
    /// Initial value for [`TearConfig::follow_up_delay`].
    pub follow_up_delay: f32,
}

impl Default for PaperTearPlugin {
    fn default() -> Self {
        Self {
            tap_to_tear: TearConfig::default().tap_to_tear,
            follow_up_delay: TearConfig::default().follow_up_delay,
        }
    }
}

impl Plugin for PaperTearPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(TearConfig {
            tap_to_tear: self.tap_to_tear,
            follow_up_delay: self.follow_up_delay,
        })
        .init_resource::<ActiveDrag>()
        .init_resource::<ScrollLocked>();

        #[cfg(feature = "auto_pipeline")]
        app.configure_sets(
            Update,
            (TearSet::Track, TearSet::Derive, TearSet::Present).chain(),
        )
        .add_systems(
            Update,
            (
                on_sheet_add,
                route_pointer_input.in_set(TearSet::Track),
                refresh_tear_geometry.in_set(TearSet::Derive),
                (upload_tear_meshes, animate_separation, run_follow_up_timers)
                    .in_set(TearSet::Present),
            ),
        );
    }
}

/// Attaches a [`TearTracker`] and the cover/overlay children to every newly
/// added [`TearSheet`].
pub fn on_sheet_add(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    query: Query<(Entity, &TearSheet), (Added<TearSheet>, Without<TearTracker>)>,
) {
    for (entity, sheet) in query.iter() {
        commands
            .entity(entity)
            .insert(TearTracker::new(sheet.width, sheet.height));

        // Alpha below 1.0 keeps the cover materials on the blended pipeline
        // so the separation fade has an effect.
        let paper = Color::srgba(0.97, 0.96, 0.92, 0.999);
        for piece in [TearPiece::Top, TearPiece::Bottom] {
            commands.spawn((
                piece,
                PieceFade(1.0),
                Mesh2d(meshes.add(blank_mesh(PrimitiveTopology::TriangleList))),
                MeshMaterial2d(materials.add(paper)),
                Transform::from_xyz(0.0, 0.0, Z_PIECES),
                Visibility::Hidden,
                ChildOf(entity),
            ));
        }
        commands.spawn((
            TearStroke,
            Mesh2d(meshes.add(blank_mesh(PrimitiveTopology::LineStrip))),
            MeshMaterial2d(materials.add(Color::srgba(0.36, 0.33, 0.30, 0.85))),
            Transform::from_xyz(0.0, 0.0, Z_STROKE),
            Visibility::Hidden,
            ChildOf(entity),
        ));
        commands.spawn((
            FiberOverlay,
            Mesh2d(meshes.add(blank_mesh(PrimitiveTopology::LineList))),
            MeshMaterial2d(materials.add(Color::srgba(0.95, 0.93, 0.88, 0.9))),
            Transform::from_xyz(0.0, 0.0, Z_FIBERS),
            Visibility::Hidden,
            ChildOf(entity),
        ));
        commands.spawn((
            GrainOverlay,
            Mesh2d(meshes.add(grain_mesh(sheet))),
            MeshMaterial2d(materials.add(Color::srgba(0.45, 0.40, 0.33, 0.9))),
            Transform::from_xyz(0.0, 0.0, Z_GRAIN),
            ChildOf(entity),
        ));

        debug!("tear sheet {entity:?} ready ({}x{})", sheet.width, sheet.height);
    }
}

/// Converts pointer input (primary mouse button or first touch) into press,
/// motion, release and tap calls on the owning sheet's [`TearTracker`].
pub fn route_pointer_input(
    mut commands: Commands,
    config: Res<TearConfig>,
    mut active: ResMut<ActiveDrag>,
    mut scroll: ResMut<ScrollLocked>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut sheets: Query<(Entity, &TearSheet, &GlobalTransform, &mut TearTracker)>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    let touch_position = touches
        .first_pressed_position()
        .or_else(|| touches.iter_just_released().next().map(|t| t.position()));
    let viewport = touch_position
        .or_else(|| windows.single().ok().and_then(|window| window.cursor_position()));
    let world =
        viewport.and_then(|pos| camera.viewport_to_world_2d(camera_transform, pos).ok());

    let pressed = mouse.just_pressed(MouseButton::Left) || touches.any_just_pressed();
    let released = mouse.just_released(MouseButton::Left)
        || touches.any_just_released()
        || touches.any_just_canceled();

    if let Some(held) = active.sheet {
        let mut finished = true;
        if let Ok((_, sheet, sheet_transform, mut tracker)) = sheets.get_mut(held) {
            finished = false;
            let pointer = world.map(|w| sheet.pointer_from_local(local_point(sheet_transform, w)));
            if let Some(pointer) = pointer {
                if released {
                    let was_tap = active.touch && tracker.progress() < TAP_PROGRESS_MAX;
                    match tracker.release(pointer) {
                        ReleaseOutcome::Committed => {
                            if let Some(tear) = tracker.completed() {
                                begin_reveal(&mut commands, held, sheet, tear, &config);
                            }
                        }
                        ReleaseOutcome::SnappedBack if was_tap && config.tap_to_tear => {
                            tracker.tap(sheet.seed);
                            if let Some(tear) = tracker.completed() {
                                begin_reveal(&mut commands, held, sheet, tear, &config);
                            }
                        }
                        _ => {}
                    }
                    finished = true;
                } else if tracker.motion(pointer) {
                    if let Some(tear) = tracker.completed() {
                        begin_reveal(&mut commands, held, sheet, tear, &config);
                    }
                    finished = true;
                }
            } else if released {
                // Release arrived without a pointer position (cursor outside
                // the window, or a canceled touch); settle on the recorded
                // state.
                if tracker.settle() == ReleaseOutcome::Committed {
                    if let Some(tear) = tracker.completed() {
                        begin_reveal(&mut commands, held, sheet, tear, &config);
                    }
                }
                finished = true;
            }
        }
        if finished {
            active.sheet = None;
            active.touch = false;
            scroll.0 = false;
        }
        return;
    }

    if pressed {
        let Some(world) = world else {
            return;
        };
        for (entity, sheet, sheet_transform, mut tracker) in &mut sheets {
            if tracker.phase() != TearPhase::Idle {
                continue;
            }
            let local = local_point(sheet_transform, world);
            if !sheet.contains_local(local) {
                continue;
            }
            tracker.press(sheet.pointer_from_local(local));
            active.sheet = Some(entity);
            active.touch = touch_position.is_some();
            scroll.0 = true;
            debug!("drag started on sheet {entity:?}");
            break;
        }
    }
}

/// Recomputes [`DerivedTear`] for sheets whose [`GeometryKey`] changed, and
/// seeds it on sheets that don't have one yet.
pub fn refresh_tear_geometry(
    mut commands: Commands,
    mut query: Query<(Entity, &TearSheet, &TearTracker, Option<&mut DerivedTear>)>,
) {
    for (entity, sheet, tracker, derived) in &mut query {
        match derived {
            Some(mut derived) => {
                if derived.key != GeometryKey::of(sheet, tracker) {
                    *derived = DerivedTear::compute(sheet, tracker);
                }
            }
            None => {
                commands
                    .entity(entity)
                    .insert(DerivedTear::compute(sheet, tracker));
            }
        }
    }
}

/// Rewrites the child meshes of every sheet whose [`DerivedTear`] changed.
pub fn upload_tear_meshes(
    mut meshes: ResMut<Assets<Mesh>>,
    sheets: Query<(&TearSheet, &DerivedTear, &Children), Changed<DerivedTear>>,
    mut overlays: Query<(
        &Mesh2d,
        &mut Visibility,
        Option<&TearPiece>,
        Option<&TearStroke>,
        Option<&FiberOverlay>,
    )>,
) {
    for (sheet, derived, children) in &sheets {
        for child in children.iter() {
            let Ok((mesh2d, mut visibility, piece, stroke, fibers)) = overlays.get_mut(child)
            else {
                continue;
            };
            let Some(mesh) = meshes.get_mut(&mesh2d.0) else {
                continue;
            };

            if let Some(piece) = piece {
                let outline = match piece {
                    TearPiece::Top => &derived.clips.top,
                    TearPiece::Bottom => &derived.clips.bottom,
                };
                write_piece_mesh(mesh, sheet, outline);
                *visibility = if outline.len() >= 3 {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
            } else if stroke.is_some() {
                write_stroke_mesh(mesh, sheet, &derived.jagged);
                *visibility =
                    if derived.phase == TearPhase::Dragging && derived.jagged.len() >= 2 {
                        Visibility::Inherited
                    } else {
                        Visibility::Hidden
                    };
            } else if fibers.is_some() {
                write_fiber_mesh(mesh, sheet, &derived.fibers);
                *visibility = if derived.fibers.is_empty() {
                    Visibility::Hidden
                } else {
                    Visibility::Inherited
                };
            }
        }
    }
}

/// Slides the two cover halves apart and fades them out, then hides the
/// whole sheet so whatever sits beneath it shows through.
pub fn animate_separation(
    time: Res<Time>,
    mut commands: Commands,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut sheets: Query<(Entity, &mut Separation, &mut Visibility, &Children)>,
    mut pieces: Query<(
        &TearPiece,
        &mut Transform,
        &mut PieceFade,
        &MeshMaterial2d<ColorMaterial>,
    )>,
) {
    for (entity, mut separation, mut visibility, children) in &mut sheets {
        separation.timer.tick(time.delta());
        let eased = ease_out_cubic(separation.timer.fraction());
        let fade = 1.0 - eased;

        for child in children.iter() {
            let Ok((piece, mut transform, mut piece_fade, material)) = pieces.get_mut(child)
            else {
                continue;
            };
            let sign = match piece {
                TearPiece::Top => 1.0,
                TearPiece::Bottom => -1.0,
            };
            let drift = separation.offset * sign * eased;
            transform.translation.x = drift.x;
            transform.translation.y = drift.y;
            transform.rotation = Quat::from_rotation_z(separation.tilt * sign * eased);
            piece_fade.0 = fade;
            if let Some(material) = materials.get_mut(&material.0) {
                material.color.set_alpha(fade);
            }
        }

        if separation.timer.just_finished() {
            *visibility = Visibility::Hidden;
            commands.entity(entity).remove::<Separation>();
        }
    }
}

/// Ticks [`FollowUpDelay`] timers and swaps them for [`FollowUpUnlocked`].
pub fn run_follow_up_timers(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut FollowUpDelay)>,
) {
    for (entity, mut delay) in &mut query {
        if delay.0.tick(time.delta()).just_finished() {
            commands
                .entity(entity)
                .remove::<FollowUpDelay>()
                .insert(FollowUpUnlocked);
        }
    }
}

fn begin_reveal(
    commands: &mut Commands,
    entity: Entity,
    sheet: &TearSheet,
    tear: &CompletedTear,
    config: &TearConfig,
) {
    debug!(
        "sheet {entity:?} revealed, spine of {} points",
        tear.spine.len()
    );
    commands.entity(entity).insert((
        TearRevealed,
        Separation::for_tear(sheet, tear),
        FollowUpDelay(Timer::from_seconds(config.follow_up_delay, TimerMode::Once)),
    ));
}

#[inline]
fn local_point(transform: &GlobalTransform, world: Vec2) -> Vec2 {
    transform
        .affine()
        .inverse()
        .transform_point3(world.extend(0.0))
        .truncate()
}

fn blank_mesh(topology: PrimitiveTopology) -> Mesh {
    let mut mesh = Mesh::new(topology, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, Vec::<[f32; 3]>::new());
    mesh
}

/// Triangulates a clip polygon into `mesh`. Outlines too thin to triangulate
/// become an empty mesh, which the caller hides.
fn write_piece_mesh(mesh: &mut Mesh, sheet: &TearSheet, outline: &[Point]) {
    let tear_mesh = TearMesh::from_outline(outline).unwrap_or_else(|_| TearMesh::new_empty());

    let positions: Vec<[f32; 3]> = tear_mesh
        .vertices
        .iter()
        .map(|p| {
            let local = sheet.local_from_normalized(*p);
            [local.x, local.y, 0.0]
        })
        .collect();
    let uvs: Vec<[f32; 2]> = tear_mesh.vertices.iter().map(|p| [p.x, p.y]).collect();

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(tear_mesh.indices()));
}

fn write_stroke_mesh(mesh: &mut Mesh, sheet: &TearSheet, jagged: &[Point]) {
    let positions: Vec<[f32; 3]> = jagged
        .iter()
        .map(|p| {
            let local = sheet.local_from_normalized(*p);
            [local.x, local.y, 0.0]
        })
        .collect();
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
}

fn write_fiber_mesh(mesh: &mut Mesh, sheet: &TearSheet, fibers: &[Fiber]) {
    let mut positions = Vec::with_capacity(fibers.len() * 2);
    let mut colors = Vec::with_capacity(fibers.len() * 2);
    for fiber in fibers {
        for p in [fiber.start, fiber.end] {
            let local = sheet.local_from_pointer(p);
            positions.push([local.x, local.y, 0.0]);
            colors.push([1.0, 1.0, 1.0, fiber.opacity]);
        }
    }
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
}

/// Builds the static grain overlay, one small quad per fleck. Generated once
/// at spawn; the flecks never change for a given sheet.
fn grain_mesh(sheet: &TearSheet) -> Mesh {
    let flecks = scatter_grain(sheet.width, sheet.height, sheet.grain_count, sheet.seed);

    let mut positions = Vec::with_capacity(flecks.len() * 4);
    let mut colors = Vec::with_capacity(flecks.len() * 4);
    let mut indices = Vec::with_capacity(flecks.len() * 6);
    for fleck in &flecks {
        let center = sheet.local_from_pointer(fleck.position);
        let r = fleck.radius;
        let base = positions.len() as u32;
        for (dx, dy) in [(-r, -r), (r, -r), (r, r), (-r, r)] {
            positions.push([center.x + dx, center.y + dy, 0.0]);
            colors.push([1.0, 1.0, 1.0, fleck.opacity]);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
