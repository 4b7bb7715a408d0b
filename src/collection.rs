//! Element collections.

use crate::element::ReferenceElement;
use crate::types::MeshError;
use itertools::izip;
use num::Float;
use rlst::RlstScalar;

/// The elements of one type within a mesh or face.
///
/// Owns the type's reference element together with the identifiers and
/// connectivity of every element assigned to it. Connectivity entries are
/// node positions, not node identifiers.
pub struct ElementCollection<T: Float + RlstScalar<Real = T>> {
    element: ReferenceElement<T>,
    ids: Vec<usize>,
    connectivity: Vec<usize>,
}

impl<T: Float + RlstScalar<Real = T>> ElementCollection<T> {
    /// Create an empty collection around a reference element.
    pub fn new(element: ReferenceElement<T>) -> Self {
        Self {
            element,
            ids: vec![],
            connectivity: vec![],
        }
    }

    /// Append an element's identifier and connectivity.
    ///
    /// The connectivity length must match the reference element's node
    /// count; a mismatch is rejected before either list is touched.
    /// Duplicate identifiers are accepted.
    pub fn add_element_conn(&mut self, elem_id: usize, conn: &[usize]) -> Result<(), MeshError> {
        let num_nodes = self.element.num_nodes();
        if conn.len() != num_nodes {
            return Err(MeshError::MalformedConnectivity {
                elem_id,
                element_type: self.element.element_type(),
                expected: num_nodes,
                found: conn.len(),
            });
        }
        self.ids.push(elem_id);
        self.connectivity.extend_from_slice(conn);
        Ok(())
    }

    /// The reference element shared by all elements in the collection.
    pub fn element(&self) -> &ReferenceElement<T> {
        &self.element
    }

    /// The number of elements.
    pub fn num_elements(&self) -> usize {
        self.ids.len()
    }

    /// The element identifiers in insertion order.
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    /// The connectivity of the element at an index.
    pub fn connectivity(&self, index: usize) -> &[usize] {
        let n = self.element.num_nodes();
        &self.connectivity[index * n..(index + 1) * n]
    }

    /// Iterate over (identifier, connectivity) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.ids
            .iter()
            .copied()
            .zip(self.connectivity.chunks_exact(self.element.num_nodes()))
    }
}

/// The elements of one type within a face.
///
/// Extends [`ElementCollection`] with the derived records used to impose
/// essential boundary conditions on the face.
pub struct SurfaceElementCollection<T: Float + RlstScalar<Real = T>> {
    elements: ElementCollection<T>,
    essential_bcs: Vec<usize>,
}

impl<T: Float + RlstScalar<Real = T>> SurfaceElementCollection<T> {
    /// Create an empty surface collection around a reference element.
    pub fn new(element: ReferenceElement<T>) -> Self {
        Self {
            elements: ElementCollection::new(element),
            essential_bcs: vec![],
        }
    }

    /// Append an element's identifier and connectivity.
    pub fn add_element_conn(&mut self, elem_id: usize, conn: &[usize]) -> Result<(), MeshError> {
        self.elements.add_element_conn(elem_id, conn)
    }

    /// The underlying element collection.
    pub fn elements(&self) -> &ElementCollection<T> {
        &self.elements
    }

    /// Build the essential boundary condition records.
    ///
    /// One record per element in insertion order, the element identifier
    /// followed by its connectivity. Any previously derived records are
    /// replaced, so repeated derivation leaves the same data.
    pub fn define_essential_bcs(&mut self) {
        let num_nodes = self.elements.element().num_nodes();
        self.essential_bcs.clear();
        self.essential_bcs
            .reserve(self.elements.num_elements() * (num_nodes + 1));
        for (elem_id, conn) in izip!(
            self.elements.ids(),
            self.elements.connectivity.chunks_exact(num_nodes)
        ) {
            self.essential_bcs.push(*elem_id);
            self.essential_bcs.extend_from_slice(conn);
        }
    }

    /// Iterate over the derived records, one `[id, conn...]` slice each.
    ///
    /// Empty until [`Self::define_essential_bcs`] has run.
    pub fn essential_bcs(&self) -> impl Iterator<Item = &[usize]> {
        let num_nodes = self.elements.element().num_nodes();
        self.essential_bcs.chunks_exact(num_nodes + 1)
    }
}
