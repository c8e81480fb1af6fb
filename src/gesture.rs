use bevy::prelude::*;

use crate::extend::extend_to_boundary;
use crate::interp::lerp_point;
use crate::noise::NoiseSource;
use crate::types::{Point, Value, Vector};
use crate::utils::{clamp_unit, nearest_edge_distance};

/// Minimum normalized distance between two recorded path samples.
pub const MIN_SAMPLE_SPACING: Value = 0.012;
/// Fraction of the sheet diagonal a drag must span for full progress.
pub const DRAG_SPAN_RATIO: Value = 0.85;
/// During-drag short-circuit: commit immediately once progress reaches this
/// while the last sample sits within [`EARLY_COMMIT_EDGE`] of a sheet edge.
pub const EARLY_COMMIT_PROGRESS: Value = 0.75;
pub const EARLY_COMMIT_EDGE: Value = 0.03;
/// Release commits outright at this progress.
pub const COMMIT_PROGRESS: Value = 0.85;
/// Relaxed release pair: lower progress bar, slightly wider edge band.
pub const RELAXED_COMMIT_PROGRESS: Value = 0.6;
pub const RELAXED_COMMIT_EDGE: Value = 0.04;

/// Synthesized tap tear: a near-corner diagonal with a light waver.
const TAP_SPINE: [(Value, Value); 2] = [(0.06, 0.12), (0.94, 0.88)];
const TAP_WAVER: Value = 0.02;
const TAP_SAMPLES: usize = 9;

/// Lifecycle of one tear surface.
///
/// ```text
///            press            commit
///   Idle ----------> Dragging -------> Revealed (terminal)
///     ^                  |
///     '------------------'
///       release w/o commit
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TearPhase {
    #[default]
    Idle,
    Dragging,
    Revealed,
}

/// What a pointer release did to the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The drag satisfied a commit rule; the tear is now revealed.
    Committed,
    /// The drag fell short; the path was discarded and the sheet snapped back.
    SnappedBack,
    /// No drag was in flight.
    Ignored,
}

/// Live drag bookkeeping. Exists only between press and release.
#[derive(Debug, Clone)]
struct DragSession {
    /// Where the pointer went down, in render units (may sit anywhere on the
    /// sheet; progress measures raw pointer travel from here).
    start: Point,
    progress: Value,
}

/// The frozen spine of a committed tear: both raw-path ends extended to the
/// sheet boundary, raw samples in between.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedTear {
    pub spine: Vec<Point>,
}

impl CompletedTear {
    /// Builds the spine from a recorded path. Needs at least two samples to
    /// orient the boundary extensions.
    pub fn from_raw(raw: &[Point]) -> Option<Self> {
        if raw.len() < 2 {
            return None;
        }
        let mut spine = Vec::with_capacity(raw.len() + 2);
        spine.push(extend_to_boundary(raw[0], raw[1]));
        spine.extend_from_slice(raw);
        spine.push(extend_to_boundary(raw[raw.len() - 1], raw[raw.len() - 2]));
        Some(Self { spine })
    }
}

/// Per-sheet gesture state machine.
///
/// Pointer positions come in as sheet-local render units (origin at the
/// sheet's top-left corner, y down); the tracker normalizes and clamps them
/// for storage but measures drag progress on the raw render-space distance,
/// so travel outside the sheet still counts toward the span.
#[derive(Component, Debug, Clone)]
pub struct TearTracker {
    width: Value,
    height: Value,
    phase: TearPhase,
    raw_path: Vec<Point>,
    session: Option<DragSession>,
    completed: Option<CompletedTear>,
}

impl TearTracker {
    pub fn new(width: Value, height: Value) -> Self {
        Self {
            width,
            height,
            phase: TearPhase::default(),
            raw_path: Vec::new(),
            session: None,
            completed: None,
        }
    }

    pub fn phase(&self) -> TearPhase {
        self.phase
    }

    /// Normalized, clamped samples recorded so far (frozen once revealed).
    pub fn raw_path(&self) -> &[Point] {
        &self.raw_path
    }

    pub fn completed(&self) -> Option<&CompletedTear> {
        self.completed.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == TearPhase::Revealed
    }

    /// Drag progress in [0, 1]; 1 once revealed.
    pub fn progress(&self) -> Value {
        match self.phase {
            TearPhase::Revealed => 1.0,
            _ => self.session.as_ref().map_or(0.0, |s| s.progress),
        }
    }

    /// Starts a drag. Containment is the caller's hit test; the tracker
    /// accepts any press while idle and ignores the rest.
    pub fn press(&mut self, local: Point) {
        if self.phase != TearPhase::Idle {
            return;
        }
        self.phase = TearPhase::Dragging;
        self.raw_path.clear();
        self.raw_path.push(self.clamped_normalized(local));
        self.session = Some(DragSession {
            start: local,
            progress: 0.0,
        });
    }

    /// Feeds a pointer move. Records the sample if it cleared the spacing
    /// gate, refreshes progress, and applies the during-drag commit rule.
    /// Returns `true` when this sample completed the tear.
    pub fn motion(&mut self, local: Point) -> bool {
        if self.phase != TearPhase::Dragging {
            return false;
        }
        let candidate = self.clamped_normalized(local);
        let required = DRAG_SPAN_RATIO * self.diagonal();

        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let travelled = (local - session.start).norm();
        session.progress = if required > 0.0 {
            (travelled / required).min(1.0)
        } else {
            1.0
        };
        let progress = session.progress;

        let spaced = self
            .raw_path
            .last()
            .is_none_or(|last| (candidate - *last).norm() > MIN_SAMPLE_SPACING);
        if spaced {
            self.raw_path.push(candidate);
        }

        let edge = self
            .raw_path
            .last()
            .map_or(1.0, |p| nearest_edge_distance(*p));
        if early_commit(progress, edge) {
            return self.commit();
        }
        false
    }

    /// Ends a drag: folds in the final position, then either commits the
    /// tear or snaps the sheet back.
    pub fn release(&mut self, local: Point) -> ReleaseOutcome {
        if self.phase != TearPhase::Dragging {
            return ReleaseOutcome::Ignored;
        }
        if self.motion(local) {
            return ReleaseOutcome::Committed;
        }
        self.settle()
    }

    /// Ends a drag with no final position, deciding from the recorded state
    /// alone. For callers that lost the pointer before the release arrived
    /// (cursor outside the window, canceled touch).
    pub fn settle(&mut self) -> ReleaseOutcome {
        if self.phase != TearPhase::Dragging {
            return ReleaseOutcome::Ignored;
        }
        let progress = self.session.as_ref().map_or(0.0, |s| s.progress);
        let edge = self
            .raw_path
            .last()
            .map_or(1.0, |p| nearest_edge_distance(*p));
        if release_commit(progress, edge) && self.commit() {
            return ReleaseOutcome::Committed;
        }
        self.snap_back();
        ReleaseOutcome::SnappedBack
    }

    /// Accessibility fallback: reveals the sheet from a single tap by
    /// synthesizing a diagonal drag. Deterministic per seed, so repeated
    /// taps on equally-seeded sheets tear identically.
    pub fn tap(&mut self, seed: u32) {
        if self.phase != TearPhase::Idle {
            return;
        }
        let start = Point::new(TAP_SPINE[0].0, TAP_SPINE[0].1);
        let end = Point::new(TAP_SPINE[1].0, TAP_SPINE[1].1);
        let along = end - start;
        let perp = Vector::new(-along.y, along.x).normalize();

        let mut noise = NoiseSource::new(seed);
        self.raw_path.clear();
        for i in 0..TAP_SAMPLES {
            let t = i as Value / (TAP_SAMPLES - 1) as Value;
            let mut p = lerp_point(start, end, t);
            if i != 0 && i != TAP_SAMPLES - 1 {
                p += perp * noise.range(-TAP_WAVER, TAP_WAVER);
            }
            self.raw_path.push(clamp_unit(p));
        }
        self.phase = TearPhase::Dragging;
        self.session = Some(DragSession {
            start: Point::new(0.0, 0.0),
            progress: 1.0,
        });
        self.commit();
    }

    fn commit(&mut self) -> bool {
        match CompletedTear::from_raw(&self.raw_path) {
            Some(tear) => {
                self.completed = Some(tear);
                self.phase = TearPhase::Revealed;
                self.session = None;
                true
            }
            None => {
                self.snap_back();
                false
            }
        }
    }

    fn snap_back(&mut self) {
        self.raw_path.clear();
        self.session = None;
        self.phase = TearPhase::Idle;
    }

    fn diagonal(&self) -> Value {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    fn clamped_normalized(&self, local: Point) -> Point {
        let nx = if self.width > 0.0 {
            local.x / self.width
        } else {
            0.5
        };
        let ny = if self.height > 0.0 {
            local.y / self.height
        } else {
            0.5
        };
        clamp_unit(Point::new(nx, ny))
    }
}

/// During-drag commit rule: the full span is covered, or the drag is far
/// enough along and right at an edge.
#[inline]
pub fn early_commit(progress: Value, edge_distance: Value) -> bool {
    progress >= 1.0 || (progress >= EARLY_COMMIT_PROGRESS && edge_distance <= EARLY_COMMIT_EDGE)
}

/// Release commit rule: full progress, or most of the way there while
/// ending near an edge.
#[inline]
pub fn release_commit(progress: Value, edge_distance: Value) -> bool {
    progress >= COMMIT_PROGRESS
        || (progress >= RELAXED_COMMIT_PROGRESS && edge_distance <= RELAXED_COMMIT_EDGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(tracker: &mut TearTracker, from: Point, to: Point, steps: usize) -> bool {
        tracker.press(from);
        for i in 1..=steps {
            let t = i as Value / steps as Value;
            if tracker.motion(lerp_point(from, to, t)) {
                return true;
            }
        }
        false
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut tracker = TearTracker::new(400.0, 300.0);
        let done = drag(
            &mut tracker,
            Point::new(100.0, 100.0),
            Point::new(160.0, 140.0),
            6,
        );
        assert!(!done);
        assert_eq!(
            tracker.release(Point::new(160.0, 140.0)),
            ReleaseOutcome::SnappedBack
        );
        assert_eq!(tracker.phase(), TearPhase::Idle);
        assert!(tracker.raw_path().is_empty());
        assert_eq!(tracker.progress(), 0.0);
    }

    #[test]
    fn long_drag_commits_on_release() {
        let mut tracker = TearTracker::new(400.0, 300.0);
        // Ends shy of the right edge (0.95 normalized) so the during-drag
        // rule stays quiet and release does the committing.
        let done = drag(
            &mut tracker,
            Point::new(8.0, 150.0),
            Point::new(380.0, 150.0),
            12,
        );
        assert!(!done);
        assert_eq!(
            tracker.release(Point::new(380.0, 150.0)),
            ReleaseOutcome::Committed
        );
        assert!(tracker.is_revealed());
        assert_eq!(tracker.progress(), 1.0);

        let spine = &tracker.completed().unwrap().spine;
        assert_eq!(nearest_edge_distance(spine[0]), 0.0);
        assert_eq!(nearest_edge_distance(*spine.last().unwrap()), 0.0);
    }

    #[test]
    fn edge_hugging_drag_commits_before_release() {
        let mut tracker = TearTracker::new(400.0, 300.0);
        let done = drag(
            &mut tracker,
            Point::new(8.0, 150.0),
            Point::new(396.0, 150.0),
            16,
        );
        assert!(done);
        assert!(tracker.is_revealed());
        // Everything after completion is ignored.
        assert!(!tracker.motion(Point::new(200.0, 20.0)));
        assert_eq!(
            tracker.release(Point::new(200.0, 20.0)),
            ReleaseOutcome::Ignored
        );
    }

    #[test]
    fn full_progress_commits_mid_sheet() {
        // ~463 render units of travel clears the full-progress bar (425)
        // while the pointer is still 4% from the nearest edge.
        let mut tracker = TearTracker::new(400.0, 300.0);
        tracker.press(Point::new(12.0, 9.0));
        assert!(tracker.motion(Point::new(384.0, 285.0)));
        assert!(tracker.is_revealed());
        assert_eq!(tracker.progress(), 1.0);

        let spine = &tracker.completed().unwrap().spine;
        assert_eq!(nearest_edge_distance(spine[0]), 0.0);
        assert_eq!(nearest_edge_distance(*spine.last().unwrap()), 0.0);
    }

    #[test]
    fn relaxed_release_commits_near_an_edge() {
        let mut tracker = TearTracker::new(400.0, 300.0);
        // ~0.84 progress, ending within the relaxed edge band but outside
        // the tighter during-drag band.
        let done = drag(
            &mut tracker,
            Point::new(12.0, 9.0),
            Point::new(230.0, 290.0),
            10,
        );
        assert!(!done);
        assert_eq!(
            tracker.release(Point::new(230.0, 290.0)),
            ReleaseOutcome::Committed
        );
        assert!(tracker.is_revealed());
    }

    #[test]
    fn progress_grows_monotonically_under_a_straight_pull() {
        let mut tracker = TearTracker::new(400.0, 300.0);
        tracker.press(Point::new(20.0, 40.0));
        let mut last = tracker.progress();
        for i in 1..=20 {
            tracker.motion(Point::new(20.0 + 17.0 * i as Value, 40.0 + 11.0 * i as Value));
            let progress = tracker.progress();
            assert!((0.0..=1.0).contains(&progress));
            assert!(progress >= last);
            last = progress;
        }
    }

    #[test]
    fn release_commits_at_exactly_the_required_progress() {
        // Diagonal 500, so full progress takes 425 render units of travel
        // and the commit bar sits at 425 * 0.85 = 361.25.
        let mut tracker = TearTracker::new(400.0, 300.0);
        tracker.press(Point::new(0.0, 150.0));
        tracker.motion(Point::new(361.25, 150.0));
        assert_eq!(
            tracker.release(Point::new(361.25, 150.0)),
            ReleaseOutcome::Committed
        );
        assert!(tracker.is_revealed());
    }

    #[test]
    fn half_way_drag_snaps_back_to_idle() {
        let mut tracker = TearTracker::new(400.0, 300.0);
        tracker.press(Point::new(0.0, 150.0));
        tracker.motion(Point::new(212.5, 150.0));
        assert_eq!(
            tracker.release(Point::new(212.5, 150.0)),
            ReleaseOutcome::SnappedBack
        );
        assert_eq!(tracker.phase(), TearPhase::Idle);
        assert!(tracker.raw_path().is_empty());
        assert_eq!(tracker.progress(), 0.0);
    }

    #[test]
    fn settling_a_full_drag_without_a_pointer_commits() {
        let mut tracker = TearTracker::new(400.0, 300.0);
        tracker.press(Point::new(0.0, 150.0));
        tracker.motion(Point::new(361.25, 150.0));
        assert_eq!(tracker.settle(), ReleaseOutcome::Committed);
        assert!(tracker.is_revealed());
    }

    #[test]
    fn settling_a_short_drag_snaps_back() {
        let mut tracker = TearTracker::new(400.0, 300.0);
        tracker.press(Point::new(0.0, 150.0));
        tracker.motion(Point::new(212.5, 150.0));
        assert_eq!(tracker.settle(), ReleaseOutcome::SnappedBack);
        assert_eq!(tracker.phase(), TearPhase::Idle);
        assert!(tracker.raw_path().is_empty());

        let mut idle = TearTracker::new(400.0, 300.0);
        assert_eq!(idle.settle(), ReleaseOutcome::Ignored);
    }

    #[test]
    fn snapped_back_tracker_accepts_a_fresh_press() {
        let mut tracker = TearTracker::new(400.0, 300.0);
        tracker.press(Point::new(50.0, 50.0));
        tracker.release(Point::new(60.0, 60.0));
        assert_eq!(tracker.phase(), TearPhase::Idle);

        tracker.press(Point::new(80.0, 80.0));
        assert_eq!(tracker.phase(), TearPhase::Dragging);
        assert_eq!(tracker.raw_path().len(), 1);
    }

    #[test]
    fn revealed_is_terminal() {
        let mut tracker = TearTracker::new(400.0, 300.0);
        tracker.tap(11);
        assert!(tracker.is_revealed());
        let spine = tracker.completed().unwrap().spine.clone();

        tracker.press(Point::new(10.0, 10.0));
        tracker.motion(Point::new(300.0, 200.0));
        tracker.tap(99);
        assert_eq!(
            tracker.release(Point::new(300.0, 200.0)),
            ReleaseOutcome::Ignored
        );
        assert_eq!(tracker.completed().unwrap().spine, spine);
    }

    #[test]
    fn tap_is_deterministic_per_seed() {
        let mut a = TearTracker::new(400.0, 300.0);
        let mut b = TearTracker::new(400.0, 300.0);
        let mut c = TearTracker::new(400.0, 300.0);
        a.tap(7);
        b.tap(7);
        c.tap(8);

        let bits = |t: &TearTracker| -> Vec<(u32, u32)> {
            t.completed()
                .unwrap()
                .spine
                .iter()
                .map(|p| (p.x.to_bits(), p.y.to_bits()))
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
        assert_ne!(bits(&a), bits(&c));

        let spine = &a.completed().unwrap().spine;
        assert_eq!(nearest_edge_distance(spine[0]), 0.0);
        assert_eq!(nearest_edge_distance(*spine.last().unwrap()), 0.0);
    }

    #[test]
    fn sampling_gate_swallows_micro_moves() {
        let mut tracker = TearTracker::new(400.0, 300.0);
        tracker.press(Point::new(100.0, 100.0));
        // 0.012 normalized of a 400-wide sheet is 4.8 render units.
        for i in 0..10 {
            tracker.motion(Point::new(100.0 + i as Value * 0.3, 100.0));
        }
        assert_eq!(tracker.raw_path().len(), 1);
    }

    #[test]
    fn zero_sized_sheet_stays_finite() {
        let mut tracker = TearTracker::new(0.0, 0.0);
        tracker.press(Point::new(0.0, 0.0));
        tracker.motion(Point::new(5.0, 5.0));
        assert!(tracker.progress().is_finite());
    }

    #[test]
    fn commit_rules_at_exact_thresholds() {
        assert!(release_commit(0.85, 1.0));
        assert!(!release_commit(0.849, 0.5));
        assert!(release_commit(0.6, 0.04));
        assert!(!release_commit(0.6, 0.041));
        assert!(!release_commit(0.599, 0.0));

        assert!(early_commit(0.75, 0.03));
        assert!(!early_commit(0.75, 0.031));
        assert!(!early_commit(0.749, 0.0));
        assert!(early_commit(1.0, 1.0));
        assert!(!early_commit(0.999, 1.0));
    }
}
