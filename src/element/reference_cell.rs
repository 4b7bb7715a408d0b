//! Element shape definitions.

use crate::types::{ElementType, GeometryType, TopologyType};

/// The topological dimension of the element's natural coordinate space.
pub fn dim(element_type: ElementType) -> usize {
    match geometry(element_type) {
        GeometryType::Line => 1,
        GeometryType::Planar => 2,
        GeometryType::Solid => 3,
    }
}

/// The number of nodes of the element.
pub fn node_count(element_type: ElementType) -> usize {
    match element_type {
        ElementType::Hex8 => 8,
        ElementType::Hex20 => 20,
        ElementType::Hex27 => 27,
        ElementType::Line1 => 2,
        ElementType::Line2 => 3,
        ElementType::Quad4 => 4,
        ElementType::Quad8 => 8,
        ElementType::Quad9 => 9,
        ElementType::Tet4 => 4,
        ElementType::Tet10 => 10,
        ElementType::Tri3 => 3,
        ElementType::Tri6 => 6,
        ElementType::Wedge => 6,
    }
}

/// The geometric class of the element.
pub fn geometry(element_type: ElementType) -> GeometryType {
    match topology(element_type) {
        TopologyType::Line => GeometryType::Line,
        TopologyType::Quad | TopologyType::Tri => GeometryType::Planar,
        TopologyType::Hex | TopologyType::Tet | TopologyType::Wedge => GeometryType::Solid,
    }
}

/// The topology family of the element.
pub fn topology(element_type: ElementType) -> TopologyType {
    match element_type {
        ElementType::Hex8 | ElementType::Hex20 | ElementType::Hex27 => TopologyType::Hex,
        ElementType::Line1 | ElementType::Line2 => TopologyType::Line,
        ElementType::Quad4 | ElementType::Quad8 | ElementType::Quad9 => TopologyType::Quad,
        ElementType::Tet4 | ElementType::Tet10 => TopologyType::Tet,
        ElementType::Tri3 | ElementType::Tri6 => TopologyType::Tri,
        ElementType::Wedge => TopologyType::Wedge,
    }
}

/// Is the element a simplex?
pub fn is_simplex(element_type: ElementType) -> bool {
    matches!(
        topology(element_type),
        TopologyType::Line | TopologyType::Tri | TopologyType::Tet
    )
}

/// The number of entities of each dimension (vertices, edges, faces, volumes)
/// bounding the element's shape.
pub fn entity_counts(element_type: ElementType) -> [usize; 4] {
    match topology(element_type) {
        TopologyType::Line => [2, 1, 0, 0],
        TopologyType::Tri => [3, 3, 1, 0],
        TopologyType::Quad => [4, 4, 1, 0],
        TopologyType::Tet => [4, 6, 4, 1],
        TopologyType::Hex => [8, 12, 6, 1],
        TopologyType::Wedge => [6, 9, 5, 1],
    }
}
