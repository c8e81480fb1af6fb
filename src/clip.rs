use crate::types::{Point, Value};

/// The two complementary clip polygons of a torn sheet, in normalized
/// coordinates (fractions of the sheet's width/height).
///
/// Both polygons list the tear vertices exactly (the top piece walks them
/// reversed), so the pieces tile the unit square with no gap or overlap.
/// "Top" is the piece that owns the top-left corner region; for a perfectly
/// vertical tear the label degrades to "left", which is fine: the two pieces
/// only ever need to be distinguishable, not compass-accurate.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPair {
    pub top: Vec<Point>,
    pub bottom: Vec<Point>,
}

/// Corner positions in clockwise perimeter order, starting at top-left.
const CORNERS: [(Value, Value); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

impl ClipPair {
    /// The untorn sheet: the top piece covers everything, the bottom piece
    /// is empty (renderers skip empty polygons).
    pub fn untorn() -> Self {
        Self {
            top: CORNERS.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            bottom: Vec::new(),
        }
    }

    /// Splits the unit square along a jagged path whose endpoints lie on the
    /// boundary (the edge-extension resolver guarantees that for committed
    /// tears).
    ///
    /// ```text
    ///   (0,0)          (1,0)      piece A: path forward + corners walked
    ///     +--·~~·--·~~~--+                 clockwise from the path's end
    ///     |   tear path   |                back to its start
    ///     +---------------+       piece B: path reversed + the other arc
    ///   (0,1)          (1,1)
    /// ```
    ///
    /// Fewer than two path points (nothing to split along) yields
    /// [`ClipPair::untorn`].
    pub fn split(jagged: &[Point]) -> Self {
        if jagged.len() < 2 {
            return Self::untorn();
        }

        let first = jagged[0];
        let last = jagged[jagged.len() - 1];
        let t_first = perimeter_pos(first);
        let t_last = perimeter_pos(last);

        // Forward piece: tear start → tear end, then boundary arc back.
        let mut piece_a: Vec<Point> = jagged.to_vec();
        let corners_a = corners_between(t_last, t_first);
        piece_a.extend(corners_a.iter().copied());

        // Reversed piece: tear end → tear start, then the other arc.
        let mut piece_b: Vec<Point> = jagged.iter().rev().copied().collect();
        let corners_b = corners_between(t_first, t_last);
        piece_b.extend(corners_b.iter().copied());

        let origin = Point::new(CORNERS[0].0, CORNERS[0].1);
        let a_is_top = if corners_a.contains(&origin) {
            true
        } else if corners_b.contains(&origin) {
            false
        } else {
            // Path endpoint sits exactly on the top-left corner; fall back
            // to whichever piece hangs higher (then lefter).
            rank(&piece_a) <= rank(&piece_b)
        };

        if a_is_top {
            Self {
                top: piece_a,
                bottom: piece_b,
            }
        } else {
            Self {
                top: piece_b,
                bottom: piece_a,
            }
        }
    }
}

/// Position of a boundary point along the clockwise perimeter, in `[0, 4)`:
/// top edge `x`, right edge `1 + y`, bottom edge `2 + (1 − x)`, left edge
/// `3 + (1 − y)`. Points slightly off the boundary snap to their nearest
/// edge.
fn perimeter_pos(p: Point) -> Value {
    let d_top = p.y;
    let d_right = 1.0 - p.x;
    let d_bottom = 1.0 - p.y;
    let d_left = p.x;
    let nearest = d_top.min(d_right).min(d_bottom).min(d_left);

    if nearest == d_top {
        p.x
    } else if nearest == d_right {
        1.0 + p.y
    } else if nearest == d_bottom {
        2.0 + (1.0 - p.x)
    } else {
        3.0 + (1.0 - p.y)
    }
}

/// Corners passed when walking the perimeter clockwise from `from` to `to`
/// (both in perimeter units), exclusive on both ends so path endpoints that
/// sit exactly on a corner are not duplicated. Ordered along the walk.
fn corners_between(from: Value, to: Value) -> Vec<Point> {
    let span = (to - from).rem_euclid(4.0);
    let mut passed: Vec<(Value, Point)> = Vec::with_capacity(4);
    for (k, &(x, y)) in CORNERS.iter().enumerate() {
        let offset = (k as Value - from).rem_euclid(4.0);
        if offset > 0.0 && offset < span {
            passed.push((offset, Point::new(x, y)));
        }
    }
    passed.sort_by(|a, b| a.0.total_cmp(&b.0));
    passed.into_iter().map(|(_, p)| p).collect()
}

/// Vertex-average centroid as a (y, x) sort key: "higher, then lefter".
fn rank(poly: &[Point]) -> (Value, Value) {
    if poly.is_empty() {
        return (0.0, 0.0);
    }
    let n = poly.len() as Value;
    let cx = poly.iter().map(|p| p.x).sum::<Value>() / n;
    let cy = poly.iter().map(|p| p.y).sum::<Value>() / n;
    (cy, cx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extend::extend_to_boundary;
    use crate::jagged::jagged_path;
    use crate::noise::NoiseSource;
    use crate::utils::polygon_area;

    fn bits(p: &Point) -> (u32, u32) {
        (p.x.to_bits(), p.y.to_bits())
    }

    fn assert_tiles(pair: &ClipPair) {
        let total = polygon_area(&pair.top) + polygon_area(&pair.bottom);
        assert!(
            (total - 1.0).abs() < 1e-3,
            "pieces cover {total}, expected ~1.0"
        );
    }

    #[test]
    fn horizontal_tear_splits_top_and_bottom() {
        let path = [
            Point::new(0.0, 0.48),
            Point::new(0.3, 0.52),
            Point::new(0.7, 0.44),
            Point::new(1.0, 0.5),
        ];
        let pair = ClipPair::split(&path);
        assert_tiles(&pair);
        assert!(rank(&pair.top).0 < rank(&pair.bottom).0);
        // The top piece owns the two top corners.
        let origin = Point::new(0.0, 0.0);
        let top_right = Point::new(1.0, 0.0);
        assert!(pair.top.contains(&origin) && pair.top.contains(&top_right));
    }

    #[test]
    fn vertical_tear_splits_left_and_right() {
        let path = [
            Point::new(0.5, 0.0),
            Point::new(0.46, 0.5),
            Point::new(0.55, 1.0),
        ];
        let pair = ClipPair::split(&path);
        assert_tiles(&pair);
        // "Top" degrades to "left": it owns the top-left corner.
        assert!(pair.top.contains(&Point::new(0.0, 0.0)));
        assert!(pair.bottom.contains(&Point::new(1.0, 0.0)));
    }

    #[test]
    fn corner_crossing_tear_tiles_both_pieces() {
        // Left edge to top edge: the small piece hugs the top-left corner.
        let path = [
            Point::new(0.0, 0.3),
            Point::new(0.25, 0.25),
            Point::new(0.4, 0.0),
        ];
        let pair = ClipPair::split(&path);
        assert_tiles(&pair);
        assert!(pair.top.contains(&Point::new(0.0, 0.0)));
        assert_eq!(pair.top.len(), path.len() + 1);
        // The big piece walks the other three corners.
        assert_eq!(pair.bottom.len(), path.len() + 3);
        assert!(polygon_area(&pair.top) < polygon_area(&pair.bottom));
    }

    #[test]
    fn tear_through_one_edge_carves_a_notch() {
        let path = [
            Point::new(0.2, 0.0),
            Point::new(0.5, 0.4),
            Point::new(0.8, 0.0),
        ];
        let pair = ClipPair::split(&path);
        assert_tiles(&pair);
        // The notch is the smaller piece and has no corner vertices.
        assert_eq!(pair.bottom.len(), 3);
        assert!(polygon_area(&pair.bottom) < polygon_area(&pair.top));
    }

    #[test]
    fn pieces_share_the_tear_vertices_exactly() {
        let path = [
            Point::new(0.0, 0.5),
            Point::new(0.4, 0.62),
            Point::new(0.8, 0.4),
            Point::new(1.0, 0.55),
        ];
        let pair = ClipPair::split(&path);
        for p in &path {
            assert!(pair.top.iter().any(|q| bits(q) == bits(p)));
            assert!(pair.bottom.iter().any(|q| bits(q) == bits(p)));
        }
    }

    #[test]
    fn degenerate_paths_leave_the_sheet_untorn() {
        assert_eq!(ClipPair::split(&[]), ClipPair::untorn());
        assert_eq!(ClipPair::split(&[Point::new(0.4, 0.4)]), ClipPair::untorn());
        let untorn = ClipPair::untorn();
        assert!((polygon_area(&untorn.top) - 1.0).abs() < 1e-6);
        assert!(untorn.bottom.is_empty());
    }

    #[test]
    fn random_extended_tears_always_tile() {
        let mut noise = NoiseSource::new(1234);
        for round in 0..50 {
            // A wavy interior spine, extended to the boundary like a real
            // committed tear, then roughened.
            let mut spine: Vec<Point> = (0..6)
                .map(|i| {
                    Point::new(
                        0.15 + 0.14 * i as Value,
                        noise.range(0.2, 0.8),
                    )
                })
                .collect();
            let head = extend_to_boundary(spine[0], spine[1]);
            let tail = extend_to_boundary(spine[5], spine[4]);
            spine.insert(0, head);
            spine.push(tail);

            let jagged = jagged_path(&spine, 0.015, 4, round);
            let pair = ClipPair::split(&jagged);
            assert_tiles(&pair);
        }
    }
}
