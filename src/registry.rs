//! Element construction registry.

use crate::element::ReferenceElement;
use crate::types::{ElementFamily, ElementType, MeshError};
use num::Float;
use rlst::RlstScalar;
use std::collections::HashMap;

type ElementConstructor<T> = fn() -> ReferenceElement<T>;

/// A fixed table of reference element constructors.
///
/// Volume and surface elements are registered separately; a tag registered
/// for one family has no constructor in the other. The registry is built
/// once at startup, passed to the ingestion entry points and never mutated,
/// so it can be shared across concurrent readers.
pub struct ElementRegistry<T: Float + RlstScalar<Real = T>> {
    volume: HashMap<ElementType, ElementConstructor<T>>,
    surface: HashMap<ElementType, ElementConstructor<T>>,
}

impl<T: Float + RlstScalar<Real = T>> ElementRegistry<T> {
    /// Create the registry with the built-in constructor tables.
    pub fn new() -> Self {
        let mut volume: HashMap<ElementType, ElementConstructor<T>> = HashMap::new();
        volume.insert(ElementType::Tet4, ReferenceElement::tet4);

        let mut surface: HashMap<ElementType, ElementConstructor<T>> = HashMap::new();
        surface.insert(ElementType::Tri3, ReferenceElement::tri3);

        Self { volume, surface }
    }

    /// Construct a fresh volume reference element for a tag.
    pub fn create_volume_element(
        &self,
        element_type: ElementType,
    ) -> Result<ReferenceElement<T>, MeshError> {
        match self.volume.get(&element_type) {
            Some(constructor) => Ok(constructor()),
            None => Err(MeshError::UnsupportedElementType {
                family: ElementFamily::Volume,
                element_type,
            }),
        }
    }

    /// Construct a fresh surface reference element for a tag.
    pub fn create_surface_element(
        &self,
        element_type: ElementType,
    ) -> Result<ReferenceElement<T>, MeshError> {
        match self.surface.get(&element_type) {
            Some(constructor) => Ok(constructor()),
            None => Err(MeshError::UnsupportedElementType {
                family: ElementFamily::Surface,
                element_type,
            }),
        }
    }

    /// The tags with a registered constructor in a family.
    pub fn registered_types(&self, family: ElementFamily) -> Vec<ElementType> {
        let table = match family {
            ElementFamily::Volume => &self.volume,
            ElementFamily::Surface => &self.surface,
        };
        table.keys().copied().collect()
    }
}

impl<T: Float + RlstScalar<Real = T>> Default for ElementRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
