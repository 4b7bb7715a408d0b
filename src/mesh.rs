//! Volume meshes.

use crate::collection::ElementCollection;
use crate::element::reference_cell;
use crate::face::Face;
use crate::nodes::Nodes;
use crate::registry::ElementRegistry;
use crate::types::{ElementType, MeshError, PhysicsType};
use log::debug;
use num::Float;
use rlst::RlstScalar;
use std::collections::HashMap;

/// The nodes and elements of one volume mesh, plus its boundary faces.
///
/// Elements are bucketed into one collection per element type, created
/// lazily on first use through the registry's volume table. The mesh
/// exclusively owns its node set, its collections and its faces.
pub struct Mesh<T: Float + RlstScalar<Real = T>> {
    id: usize,
    name: String,
    physics: PhysicsType,
    nodes: Nodes<T>,
    element_sets: HashMap<ElementType, ElementCollection<T>>,
    faces: Vec<Face<T>>,
}

impl<T: Float + RlstScalar<Real = T>> Mesh<T> {
    /// Create an empty mesh.
    pub fn new(id: usize, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            physics: PhysicsType::Unknown,
            nodes: Nodes::new(),
            element_sets: HashMap::new(),
            faces: vec![],
        }
    }

    /// The mesh identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The mesh name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The physics classification.
    pub fn physics(&self) -> PhysicsType {
        self.physics
    }

    /// Assign the physics classification.
    pub fn set_physics(&mut self, physics: PhysicsType) {
        self.physics = physics;
    }

    /// The mesh's node set.
    pub fn nodes(&self) -> &Nodes<T> {
        &self.nodes
    }

    /// Mutable access to the mesh's node set for ingestion.
    pub fn nodes_mut(&mut self) -> &mut Nodes<T> {
        &mut self.nodes
    }

    /// Append an element, creating its collection on first use.
    ///
    /// The collection for a tag is created through the registry's volume
    /// table the first time the tag is seen and reused afterwards. A
    /// failed add leaves the mesh unchanged.
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
            let element = registry.create_volume_element(element_type)?;
            debug!("mesh {}: new element collection for '{element_type}'", self.id);
            self.element_sets
                .insert(element_type, ElementCollection::new(element));
        }
        self.element_sets
            .get_mut(&element_type)
            .unwrap()
            .add_element_conn(elem_id, conn)
    }

    /// The collection for an element type, if any elements of it exist.
    pub fn element_set(&self, element_type: ElementType) -> Option<&ElementCollection<T>> {
        self.element_sets.get(&element_type)
    }

    /// Iterate over the element collections keyed by type.
    pub fn element_sets(&self) -> impl Iterator<Item = (ElementType, &ElementCollection<T>)> {
        self.element_sets.iter().map(|(t, c)| (*t, c))
    }

    /// The total number of elements across all collections.
    pub fn num_elements(&self) -> usize {
        self.element_sets.values().map(|c| c.num_elements()).sum()
    }

    /// Attach a face to the mesh.
    pub fn add_face(&mut self, face: Face<T>) {
        self.faces.push(face);
    }

    /// The mesh's faces.
    pub fn faces(&self) -> &[Face<T>] {
        &self.faces
    }

    /// Mutable access to the mesh's faces.
    pub fn faces_mut(&mut self) -> &mut [Face<T>] {
        &mut self.faces
    }
}
