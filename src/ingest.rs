//! Mesh ingestion from an external reader's point and cell stream.
//!
//! The reader collaborator parses mesh files (VTK XML unstructured grids
//! for volumes, polydata for faces) and hands over a [`SourceMesh`]: points
//! and cells in file order plus the named identifier attributes. This
//! module classifies each cell into an element type and populates the
//! target [`Mesh`] or [`Face`].

use crate::face::Face;
use crate::mesh::Mesh;
use crate::registry::ElementRegistry;
use crate::types::{ElementType, MeshError};
use itertools::izip;
use log::debug;
use num::Float;
use rlst::RlstScalar;
use std::collections::HashMap;

/// Name of the point attribute carrying global node identifiers.
pub const NODE_IDS_NAME: &str = "GlobalNodeID";

/// Name of the cell attribute carrying global element identifiers.
pub const ELEMENT_IDS_NAME: &str = "GlobalElementID";

/// VTK cell type code for a linear triangle.
pub const VTK_TRIANGLE: u8 = 5;

/// VTK cell type code for a linear quadrilateral.
pub const VTK_QUAD: u8 = 9;

/// VTK cell type code for a linear tetrahedron.
pub const VTK_TETRA: u8 = 10;

lazy_static! {
    /// Map used to convert VTK cell type codes to element types.
    static ref VTK_CELL_TO_ELEM: HashMap<u8, ElementType> = HashMap::from([
        (VTK_TETRA, ElementType::Tet4),
        (VTK_TRIANGLE, ElementType::Tri3),
    ]);
}

/// One cell from the external reader.
pub struct SourceCell {
    /// The declared cell type code.
    pub code: u8,
    /// Ordered node positions forming the cell.
    pub connectivity: Vec<usize>,
}

/// A point and cell stream handed over by the external mesh reader.
///
/// Points and cells appear in file order; the identifier attributes are
/// optional because the source file may lack them, in which case ingestion
/// fails with [`MeshError::MissingRequiredAttribute`].
pub struct SourceMesh<T: Float + RlstScalar<Real = T>> {
    /// Point coordinates in reader order.
    pub coordinates: Vec<[T; 3]>,
    /// The "GlobalNodeID" point attribute, parallel to `coordinates`.
    pub node_ids: Option<Vec<usize>>,
    /// Cells in reader order.
    pub cells: Vec<SourceCell>,
    /// The "GlobalElementID" cell attribute, parallel to `cells`.
    pub element_ids: Option<Vec<usize>>,
}

impl<T: Float + RlstScalar<Real = T>> SourceMesh<T> {
    fn node_ids(&self) -> Result<&[usize], MeshError> {
        self.node_ids
            .as_deref()
            .ok_or_else(|| MeshError::MissingRequiredAttribute(NODE_IDS_NAME.to_string()))
    }

    fn element_ids(&self) -> Result<&[usize], MeshError> {
        self.element_ids
            .as_deref()
            .ok_or_else(|| MeshError::MissingRequiredAttribute(ELEMENT_IDS_NAME.to_string()))
    }
}

/// Classify a volume cell by its declared cell type code.
fn volume_cell_element(cell: &SourceCell, cell_id: usize) -> Result<ElementType, MeshError> {
    VTK_CELL_TO_ELEM
        .get(&cell.code)
        .copied()
        .ok_or(MeshError::UnknownCellShape {
            cell_id,
            code: cell.code,
            num_points: cell.connectivity.len(),
        })
}

/// Classify a surface cell by its point count.
fn surface_cell_element(cell: &SourceCell, cell_id: usize) -> Result<ElementType, MeshError> {
    match cell.connectivity.len() {
        3 => Ok(ElementType::Tri3),
        4 => Ok(ElementType::Quad4),
        _ => Err(MeshError::UnknownCellShape {
            cell_id,
            code: cell.code,
            num_points: cell.connectivity.len(),
        }),
    }
}

/// Populate a volume mesh from a reader's point and cell stream.
///
/// Nodes are copied verbatim in reader order, which defines the positions
/// used by cell connectivity. Each cell is classified by its declared cell
/// type code and appended to the matching collection. On failure the
/// offending cell is never partially recorded and collections committed
/// so far remain valid.
pub fn load_volume_mesh<T: Float + RlstScalar<Real = T>>(
    mesh: &mut Mesh<T>,
    registry: &ElementRegistry<T>,
    source: &SourceMesh<T>,
) -> Result<(), MeshError> {
    let node_ids = source.node_ids()?;
    let element_ids = source.element_ids()?;

    mesh.nodes_mut().store(node_ids, &source.coordinates);
    debug!("stored {} node ids", node_ids.len());

    for (cell, elem_id) in izip!(&source.cells, element_ids) {
        let element_type = volume_cell_element(cell, *elem_id)?;
        mesh.add_element(registry, element_type, *elem_id, &cell.connectivity)?;
    }
    debug!("stored {} elements", source.cells.len());
    Ok(())
}

/// Populate a face from a reader's point and cell stream.
///
/// Identical to [`load_volume_mesh`] except that cells are classified by
/// point count and collections are created from the registry's surface
/// table.
pub fn load_surface_mesh<T: Float + RlstScalar<Real = T>>(
    face: &mut Face<T>,
    registry: &ElementRegistry<T>,
    source: &SourceMesh<T>,
) -> Result<(), MeshError> {
    let node_ids = source.node_ids()?;
    let element_ids = source.element_ids()?;

    face.nodes_mut().store(node_ids, &source.coordinates);
    debug!("stored {} node ids", node_ids.len());

    for (cell, elem_id) in izip!(&source.cells, element_ids) {
        let element_type = surface_cell_element(cell, *elem_id)?;
        face.add_element(registry, element_type, *elem_id, &cell.connectivity)?;
    }
    debug!("stored {} elements", source.cells.len());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn two_tet_source() -> SourceMesh<f64> {
        SourceMesh {
            coordinates: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
                [1.0, 1.0, 1.0],
            ],
            node_ids: Some(vec![1, 2, 3, 4, 5]),
            cells: vec![
                SourceCell {
                    code: VTK_TETRA,
                    connectivity: vec![0, 1, 2, 3],
                },
                SourceCell {
                    code: VTK_TETRA,
                    connectivity: vec![1, 2, 3, 4],
                },
            ],
            element_ids: Some(vec![10, 11]),
        }
    }

    #[test]
    fn test_load_volume_mesh() {
        let registry = ElementRegistry::<f64>::new();
        let mut mesh = Mesh::new(1, "lumen");
        load_volume_mesh(&mut mesh, &registry, &two_tet_source()).unwrap();

        assert_eq!(mesh.nodes().num_nodes(), 5);
        assert_eq!(mesh.nodes().ids(), &[1, 2, 3, 4, 5]);
        assert_eq!(mesh.element_sets().count(), 1);
        let set = mesh.element_set(ElementType::Tet4).unwrap();
        assert_eq!(set.ids(), &[10, 11]);
        assert_eq!(set.connectivity(0), &[0, 1, 2, 3]);
        assert_eq!(set.connectivity(1), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_missing_node_ids() {
        let registry = ElementRegistry::<f64>::new();
        let mut mesh = Mesh::new(1, "lumen");
        let mut source = two_tet_source();
        source.node_ids = None;
        let err = load_volume_mesh(&mut mesh, &registry, &source).unwrap_err();
        assert!(
            matches!(err, MeshError::MissingRequiredAttribute(name) if name == NODE_IDS_NAME)
        );
    }

    #[test]
    fn test_missing_element_ids() {
        let registry = ElementRegistry::<f64>::new();
        let mut mesh = Mesh::new(1, "lumen");
        let mut source = two_tet_source();
        source.element_ids = None;
        let err = load_volume_mesh(&mut mesh, &registry, &source).unwrap_err();
        assert!(
            matches!(err, MeshError::MissingRequiredAttribute(name) if name == ELEMENT_IDS_NAME)
        );
    }

    #[test]
    fn test_unknown_cell_code_isolation() {
        let registry = ElementRegistry::<f64>::new();
        let mut mesh = Mesh::new(1, "lumen");
        let mut source = two_tet_source();
        source.cells.push(SourceCell {
            code: 42,
            connectivity: vec![0, 1, 2, 3],
        });
        source.element_ids = Some(vec![10, 11, 12]);

        let err = load_volume_mesh(&mut mesh, &registry, &source).unwrap_err();
        assert!(matches!(
            err,
            MeshError::UnknownCellShape {
                cell_id: 12,
                code: 42,
                num_points: 4,
            }
        ));
        // Cells classified before the failure stay committed and intact.
        let set = mesh.element_set(ElementType::Tet4).unwrap();
        assert_eq!(set.ids(), &[10, 11]);
    }

    #[test]
    fn test_load_surface_mesh() {
        let registry = ElementRegistry::<f64>::new();
        let mut face = Face::new(1, "inlet");
        let source = SourceMesh {
            coordinates: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
            ],
            node_ids: Some(vec![3, 5, 8, 13]),
            cells: vec![
                SourceCell {
                    code: VTK_TRIANGLE,
                    connectivity: vec![0, 1, 2],
                },
                SourceCell {
                    code: VTK_TRIANGLE,
                    connectivity: vec![1, 3, 2],
                },
            ],
            element_ids: Some(vec![5, 9]),
        };
        load_surface_mesh(&mut face, &registry, &source).unwrap();

        assert_eq!(face.nodes().num_nodes(), 4);
        let set = face.element_set(ElementType::Tri3).unwrap();
        assert_eq!(set.elements().ids(), &[5, 9]);
    }

    #[test]
    fn test_surface_quad_is_unsupported() {
        // A 4-point surface cell classifies as quad4, which has no surface
        // constructor registered.
        let registry = ElementRegistry::<f64>::new();
        let mut face = Face::new(1, "outlet");
        let source = SourceMesh {
            coordinates: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            node_ids: Some(vec![1, 2, 3, 4]),
            cells: vec![SourceCell {
                code: VTK_QUAD,
                connectivity: vec![0, 1, 2, 3],
            }],
            element_ids: Some(vec![1]),
        };
        let err = load_surface_mesh(&mut face, &registry, &source).unwrap_err();
        assert!(matches!(
            err,
            MeshError::UnsupportedElementType {
                element_type: ElementType::Quad4,
                ..
            }
        ));
    }

    #[test]
    fn test_surface_unknown_point_count() {
        let registry = ElementRegistry::<f64>::new();
        let mut face = Face::new(1, "outlet");
        let source = SourceMesh {
            coordinates: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            node_ids: Some(vec![1, 2]),
            cells: vec![SourceCell {
                code: 3,
                connectivity: vec![0, 1],
            }],
            element_ids: Some(vec![1]),
        };
        let err = load_surface_mesh(&mut face, &registry, &source).unwrap_err();
        assert!(matches!(err, MeshError::UnknownCellShape { .. }));
    }
}
