//! Triangle subdivision geometry.
//!
//! Each node with `depth > 0` is drawn and contributes three half-size children: one
//! sharing its apex and two on the lower left/right. Depth-0 nodes are terminal and
//! draw nothing. The tree is walked with an explicit LIFO work list in the same
//! pre-order a recursive implementation would produce.

use crate::foundation::core::{BezPath, Point, Vec2, Viewport};

/// Apex `y` of the root triangle for a mounted background.
pub const DEFAULT_APEX_Y: f64 = 100.0;
/// Edge length of the root triangle.
pub const DEFAULT_SIZE: f64 = 300.0;
/// Subdivision depth of the root triangle.
pub const DEFAULT_DEPTH: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleNode {
    pub apex: Point,
    pub size: f64,
    pub depth: u32,
}

impl TriangleNode {
    pub fn new(apex: Point, size: f64, depth: u32) -> Self {
        Self { apex, size, depth }
    }

    pub fn is_terminal(&self) -> bool {
        self.depth == 0
    }

    /// Apex, right base corner, left base corner.
    pub fn vertices(&self) -> [Point; 3] {
        let Point { x, y } = self.apex;
        let s = self.size;
        [
            self.apex,
            Point::new(x + s / 2.0, y + s),
            Point::new(x - s / 2.0, y + s),
        ]
    }

    pub fn triangle_path(&self) -> BezPath {
        let [a, b, c] = self.vertices();
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close_path();
        path
    }

    /// Children in draw order, or `None` for terminal nodes.
    pub fn children(&self) -> Option<[TriangleNode; 3]> {
        if self.is_terminal() {
            return None;
        }
        let s = self.size;
        let half = s / 2.0;
        let depth = self.depth - 1;
        Some([
            TriangleNode::new(self.apex, half, depth),
            TriangleNode::new(self.apex + Vec2::new(-s / 4.0, s / 2.0), half, depth),
            TriangleNode::new(self.apex + Vec2::new(s / 4.0, s / 2.0), half, depth),
        ])
    }
}

/// Root triangle of a background pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParams {
    pub apex: Point,
    pub size: f64,
    pub depth: u32,
}

impl FractalParams {
    /// Apex centred horizontally at `y = 100`, edge 300, depth 5.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            apex: Point::new(viewport.center_x(), DEFAULT_APEX_Y),
            size: DEFAULT_SIZE,
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn root(&self) -> TriangleNode {
        TriangleNode::new(self.apex, self.size, self.depth)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubdivisionStats {
    /// Nodes that were drawn (`depth > 0`).
    pub drawn: usize,
    /// Terminal visits (`depth == 0`).
    pub terminal: usize,
    /// High-water mark of the work list.
    pub max_pending: usize,
}

/// Number of drawing nodes for a root of the given depth: `(3^depth - 1) / 2`.
///
/// `None` when `3^depth` does not fit in `usize`.
pub fn expected_draws(depth: u32) -> Option<usize> {
    3usize.checked_pow(depth).map(|n| (n - 1) / 2)
}

/// Walk the subdivision tree rooted at `root`, calling `visit` once per drawing node.
pub fn walk(root: TriangleNode, mut visit: impl FnMut(&TriangleNode)) -> SubdivisionStats {
    let res: Result<_, std::convert::Infallible> = try_walk(root, |n| {
        visit(n);
        Ok(())
    });
    match res {
        Ok(stats) => stats,
        Err(never) => match never {},
    }
}

/// Like [`walk`], but stops at the first error returned by `visit`.
pub fn try_walk<E>(
    root: TriangleNode,
    mut visit: impl FnMut(&TriangleNode) -> Result<(), E>,
) -> Result<SubdivisionStats, E> {
    let mut stats = SubdivisionStats::default();
    let mut pending = vec![root];

    while let Some(node) = pending.pop() {
        let Some(children) = node.children() else {
            stats.terminal += 1;
            continue;
        };
        visit(&node)?;
        stats.drawn += 1;
        // Reversed so the first child is popped first.
        pending.extend(children.into_iter().rev());
        stats.max_pending = stats.max_pending.max(pending.len());
    }

    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/fractal/subdivide.rs"]
mod tests;
