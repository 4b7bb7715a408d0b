//! Mesh faces.

use crate::collection::SurfaceElementCollection;
use crate::element::reference_cell;
use crate::nodes::Nodes;
use crate::registry::ElementRegistry;
use crate::types::{ElementType, MeshError};
use log::debug;
use num::Float;
use rlst::RlstScalar;
use std::collections::HashMap;

/// A surface face of a volume mesh, used to define a boundary condition.
///
/// A face carries its own node numbering and coordinates, independent of
/// the parent mesh, plus one surface element collection per element type
/// present on the face.
pub struct Face<T: Float + RlstScalar<Real = T>> {
    id: usize,
    bc_type: String,
    nodes: Nodes<T>,
    element_sets: HashMap<ElementType, SurfaceElementCollection<T>>,
}

impl<T: Float + RlstScalar<Real = T>> Face<T> {
    /// Create an empty face with a boundary condition label.
    pub fn new(id: usize, bc_type: &str) -> Self {
        Self {
            id,
            bc_type: bc_type.to_string(),
            nodes: Nodes::new(),
            element_sets: HashMap::new(),
        }
    }

    /// The face identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The boundary condition type label.
    pub fn bc_type(&self) -> &str {
        &self.bc_type
    }

    /// The face's node set.
    pub fn nodes(&self) -> &Nodes<T> {
        &self.nodes
    }

    /// Mutable access to the face's node set for ingestion.
    pub fn nodes_mut(&mut self) -> &mut Nodes<T> {
        &mut self.nodes
    }

    /// Append an element, creating its collection on first use.
    ///
    /// The collection for a tag is created through the registry's surface
    /// table the first time the tag is seen; an unregistered tag fails
    /// without modifying the face.
    pub fn add_element(
        &mut self,
        registry: &ElementRegistry<T>,
        element_type: ElementType,
        elem_id: usize,
        conn: &[usize],
    ) -> Result<(), MeshError> {
        let expected = reference_cell::node_count(element_type);
        if conn.len() != expected {
            return Err(MeshError::MalformedConnectivity {
                elem_id,
                element_type,
                expected,
                found: conn.len(),
            });
        }
        if !self.element_sets.contains_key(&element_type) {
            let element = registry.create_surface_element(element_type)?;
            debug!("face {}: new element collection for '{element_type}'", self.id);
            self.element_sets
                .insert(element_type, SurfaceElementCollection::new(element));
        }
        self.element_sets
            .get_mut(&element_type)
            .unwrap()
            .add_element_conn(elem_id, conn)
    }

    /// The collection for an element type, if any elements of it exist.
    pub fn element_set(&self, element_type: ElementType) -> Option<&SurfaceElementCollection<T>> {
        self.element_sets.get(&element_type)
    }

    /// Iterate over the element collections keyed by type.
    pub fn element_sets(
        &self,
    ) -> impl Iterator<Item = (ElementType, &SurfaceElementCollection<T>)> {
        self.element_sets.iter().map(|(t, c)| (*t, c))
    }

    /// The total number of elements across all collections.
    pub fn num_elements(&self) -> usize {
        self.element_sets
            .values()
            .map(|c| c.elements().num_elements())
            .sum()
    }

    /// Derive the essential boundary condition records of every collection.
    pub fn create_bcs_aux_data(&mut self) {
        for collection in self.element_sets.values_mut() {
            collection.define_essential_bcs();
        }
    }
}
