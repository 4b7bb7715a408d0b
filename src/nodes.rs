//! Node storage.

use num::Float;
use rlst::RlstScalar;

/// Node identifiers and coordinates for one mesh or face.
///
/// Coordinates are stored in a flat structure-of-arrays buffer holding all
/// x values, then all y values, then all z values. Nodes are addressed by
/// position in reader order; identifiers are not required to be contiguous.
pub struct Nodes<T: Float + RlstScalar<Real = T>> {
    ids: Vec<usize>,
    coordinates: Vec<T>,
}

impl<T: Float + RlstScalar<Real = T>> Nodes<T> {
    /// Create an empty node set.
    pub fn new() -> Self {
        Self {
            ids: vec![],
            coordinates: vec![],
        }
    }

    /// Store identifiers and coordinates, replacing any previous content.
    ///
    /// Points are laid out into the structure-of-arrays buffer in the order
    /// given, which defines the node positions used by element connectivity.
    pub fn store(&mut self, ids: &[usize], points: &[[T; 3]]) {
        assert_eq!(ids.len(), points.len());
        let num_nodes = points.len();
        self.ids = ids.to_vec();
        self.coordinates = vec![T::from(0.0).unwrap(); 3 * num_nodes];
        for (i, point) in points.iter().enumerate() {
            self.coordinates[i] = point[0];
            self.coordinates[i + num_nodes] = point[1];
            self.coordinates[i + 2 * num_nodes] = point[2];
        }
    }

    /// The number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.ids.len()
    }

    /// The node identifiers in storage order.
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    /// The flat coordinate buffer (all x, then all y, then all z).
    pub fn coordinates(&self) -> &[T] {
        &self.coordinates
    }

    /// The coordinates of the node at a position.
    pub fn coordinate(&self, index: usize) -> [T; 3] {
        let n = self.num_nodes();
        [
            self.coordinates[index],
            self.coordinates[index + n],
            self.coordinates[index + 2 * n],
        ]
    }
}

impl<T: Float + RlstScalar<Real = T>> Default for Nodes<T> {
    fn default() -> Self {
        Self::new()
    }
}
