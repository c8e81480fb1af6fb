use crate::{
    error::{PaperTearError, Result},
    types::{Point, Value},
    utils::polygon_signed_area,
};

/// Intermediate mesh for one torn piece, in normalized sheet coordinates.
///
/// Vertices are the piece's clip polygon verbatim; triangles index into it.
/// The plugin maps vertices to render space on upload, so the same mesh also
/// supplies the piece's UVs (normalized sheet coordinates are the UV space).
#[derive(Clone)]
pub struct TearMesh {
    /// Clip polygon vertices: `[[x, y], ...]` in [0,1]².
    pub vertices: Vec<Point>,

    /// Triangle index triples into `vertices`: `[[v0, v1, v2], ...]`
    pub tris: Vec<[usize; 3]>,
}

impl TearMesh {
    /// Creates an empty mesh with no vertices or triangles.
    pub fn new_empty() -> Self {
        Self {
            vertices: Vec::new(),
            tris: Vec::new(),
        }
    }

    /// Triangulates a simple polygon by ear clipping.
    ///
    /// Either winding is accepted. When no ear survives the containment test
    /// (collinear runs can do that), the remaining ring is fanned from its
    /// first vertex instead of looping forever.
    ///
    /// Returns [`PaperTearError::EmptyOutline`] for outlines with fewer than
    /// three vertices.
    pub fn from_outline(outline: &[Point]) -> Result<Self> {
        if outline.len() < 3 {
            return Err(PaperTearError::EmptyOutline);
        }
        let mut mesh = Self {
            vertices: outline.to_vec(),
            tris: Vec::with_capacity(outline.len() - 2),
        };
        let orientation = if polygon_signed_area(outline) >= 0.0 {
            1.0
        } else {
            -1.0
        };

        let mut ring: Vec<usize> = (0..outline.len()).collect();
        while ring.len() > 3 {
            let mut clipped = false;
            for i in 0..ring.len() {
                let a = ring[(i + ring.len() - 1) % ring.len()];
                let b = ring[i];
                let c = ring[(i + 1) % ring.len()];
                if !is_ear(&mesh.vertices, &ring, a, b, c, orientation) {
                    continue;
                }
                mesh.triangle_from_verts(a, b, c)?;
                ring.remove(i);
                clipped = true;
                break;
            }
            if !clipped {
                // Collinear remainder; fan it.
                for w in 1..ring.len() - 1 {
                    mesh.triangle_from_verts(ring[0], ring[w], ring[w + 1])?;
                }
                return Ok(mesh);
            }
        }
        mesh.triangle_from_verts(ring[0], ring[1], ring[2])?;
        Ok(mesh)
    }

    /// Adds a triangle defined by three vertex indices.
    ///
    /// Returns [`PaperTearError::InvalidIndex`] if any index is out of bounds.
    pub fn triangle_from_verts(&mut self, x: usize, y: usize, z: usize) -> Result<()> {
        if self.vertices.len() <= x.max(y.max(z)) {
            return Err(PaperTearError::InvalidIndex);
        }
        self.tris.push([x, y, z]);
        Ok(())
    }

    /// Flat `u32` index buffer for upload.
    pub fn indices(&self) -> Vec<u32> {
        self.tris
            .iter()
            .flat_map(|t| t.iter().map(|&i| i as u32))
            .collect()
    }

    /// Total triangle area; matches the outline's shoelace area when the
    /// triangulation tiled it correctly.
    pub fn area(&self) -> Value {
        self.tris
            .iter()
            .map(|&[a, b, c]| {
                let ab = self.vertices[b] - self.vertices[a];
                let ac = self.vertices[c] - self.vertices[a];
                ab.perp(&ac).abs() * 0.5
            })
            .sum()
    }
}

/// An ear is a convex corner whose triangle holds no other ring vertex.
/// On-edge points count as held, which errs toward skipping; the fan
/// fallback picks up whatever that leaves behind.
fn is_ear(
    verts: &[Point],
    ring: &[usize],
    a: usize,
    b: usize,
    c: usize,
    orientation: Value,
) -> bool {
    let pa = verts[a];
    let pb = verts[b];
    let pc = verts[c];
    let cross = (pb - pa).perp(&(pc - pb));
    if cross * orientation <= 0.0 {
        return false;
    }
    ring.iter().all(|&v| {
        v == a || v == b || v == c || !triangle_contains(pa, pb, pc, verts[v], orientation)
    })
}

fn triangle_contains(a: Point, b: Point, c: Point, p: Point, orientation: Value) -> bool {
    let s_ab = (b - a).perp(&(p - a)) * orientation;
    let s_bc = (c - b).perp(&(p - b)) * orientation;
    let s_ca = (a - c).perp(&(p - c)) * orientation;
    s_ab >= 0.0 && s_bc >= 0.0 && s_ca >= 0.0
}
