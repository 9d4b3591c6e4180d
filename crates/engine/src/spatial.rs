// crates/engine/src/spatial.rs
use geo::{Contains, Point};
use rstar::RTree;
use rstar::primitives::{GeomWithData, Rectangle};

use crate::boundary::Boundary;

type Envelope = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// R-tree over boundary bounding boxes, refined with an exact
/// point-in-polygon test.
pub struct BoundaryIndex<'a> {
    boundaries: &'a [Boundary],
    tree: RTree<Envelope>,
}

impl<'a> BoundaryIndex<'a> {
    pub fn new(boundaries: &'a [Boundary]) -> Self {
        let envelopes: Vec<Envelope> = boundaries
            .iter()
            .enumerate()
            .filter_map(|(idx, b)| {
                let bb = b.bounds()?;
                let rect = Rectangle::from_corners([bb.min_x, bb.min_y], [bb.max_x, bb.max_y]);
                Some(GeomWithData::new(rect, idx))
            })
            .collect();

        Self {
            boundaries,
            tree: RTree::bulk_load(envelopes),
        }
    }

    /// Boundaries whose interior holds `point`. Points on an edge are not
    /// inside, and overlapping polygons each yield a match.
    pub fn containing(&self, point: [f64; 2]) -> impl Iterator<Item = &'a Boundary> {
        let boundaries = self.boundaries;
        let candidate = Point::new(point[0], point[1]);
        self.tree
            .locate_all_at_point(&point)
            .map(move |envelope| &boundaries[envelope.data])
            .filter(move |b| b.geometry.contains(&candidate))
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
