//! Type definitions.

use std::fmt;
use thiserror::Error;

/// The geometric class of an element shape.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum GeometryType {
    /// A curve element
    Line,
    /// A surface element
    Planar,
    /// A volume element
    Solid,
}

/// The topology family of an element shape.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TopologyType {
    /// Hexahedron
    Hex,
    /// Line segment
    Line,
    /// Quadrilateral
    Quad,
    /// Tetrahedron
    Tet,
    /// Triangle
    Tri,
    /// Wedge
    Wedge,
}

/// An element shape and node count combination.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum ElementType {
    /// 8-node hexahedron
    Hex8,
    /// 20-node hexahedron
    Hex20,
    /// 27-node hexahedron
    Hex27,
    /// 2-node line
    Line1,
    /// 3-node line
    Line2,
    /// 4-node quadrilateral
    Quad4,
    /// 8-node quadrilateral
    Quad8,
    /// 9-node quadrilateral
    Quad9,
    /// 4-node tetrahedron
    Tet4,
    /// 10-node tetrahedron
    Tet10,
    /// 3-node triangle
    Tri3,
    /// 6-node triangle
    Tri6,
    /// 6-node wedge
    Wedge,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementType::Hex8 => "hex8",
            ElementType::Hex20 => "hex20",
            ElementType::Hex27 => "hex27",
            ElementType::Line1 => "line1",
            ElementType::Line2 => "line2",
            ElementType::Quad4 => "quad4",
            ElementType::Quad8 => "quad8",
            ElementType::Quad9 => "quad9",
            ElementType::Tet4 => "tet4",
            ElementType::Tet10 => "tet10",
            ElementType::Tri3 => "tri3",
            ElementType::Tri6 => "tri6",
            ElementType::Wedge => "wedge",
        })
    }
}

/// The construction family an element is requested from.
///
/// Volume and surface elements have disjoint constructor tables.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ElementFamily {
    /// Elements of a volume mesh
    Volume,
    /// Elements of a surface face
    Surface,
}

impl fmt::Display for ElementFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementFamily::Volume => "volume",
            ElementFamily::Surface => "surface",
        })
    }
}

/// The physics a mesh participates in.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum PhysicsType {
    /// Fluid domain
    Fluid,
    /// Solid domain
    Solid,
    /// Physics not assigned
    #[default]
    Unknown,
}

impl PhysicsType {
    /// Look up a physics type by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fluid" => Some(PhysicsType::Fluid),
            "solid" => Some(PhysicsType::Solid),
            _ => None,
        }
    }
}

impl fmt::Display for PhysicsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhysicsType::Fluid => "fluid",
            PhysicsType::Solid => "solid",
            PhysicsType::Unknown => "unknown",
        })
    }
}

/// Errors raised while staging mesh data.
#[derive(Debug, Error)]
pub enum MeshError {
    /// No constructor is registered for the element type in the requested family
    #[error("no {family} element constructor for element type '{element_type}'")]
    UnsupportedElementType {
        /// The family the construction was requested from
        family: ElementFamily,
        /// The requested element type
        element_type: ElementType,
    },
    /// An external cell could not be classified into an element type
    #[error("cell {cell_id} has no element type mapping (cell code {code}, {num_points} points)")]
    UnknownCellShape {
        /// Identifier of the offending cell
        cell_id: usize,
        /// The cell type code declared by the reader
        code: u8,
        /// Number of points in the cell
        num_points: usize,
    },
    /// A connectivity tuple does not match the element's node count
    #[error("element {elem_id}: connectivity length {found} does not match the {expected} nodes of a '{element_type}' element")]
    MalformedConnectivity {
        /// Identifier of the offending element
        elem_id: usize,
        /// The element type of the target collection
        element_type: ElementType,
        /// The collection's node count
        expected: usize,
        /// The connectivity length that was supplied
        found: usize,
    },
    /// A required named data attribute is absent from the mesh source
    #[error("no '{0}' data found in mesh source")]
    MissingRequiredAttribute(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_element_type_names() {
        assert_eq!(ElementType::Tet4.to_string(), "tet4");
        assert_eq!(ElementType::Tri3.to_string(), "tri3");
        assert_eq!(ElementType::Hex20.to_string(), "hex20");
    }

    #[test]
    fn test_physics_from_name() {
        assert_eq!(PhysicsType::from_name("fluid"), Some(PhysicsType::Fluid));
        assert_eq!(PhysicsType::from_name("solid"), Some(PhysicsType::Solid));
        assert_eq!(PhysicsType::from_name("plasma"), None);
        assert_eq!(PhysicsType::default(), PhysicsType::Unknown);
    }
}
