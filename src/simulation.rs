//! Simulation-level mesh orchestration.

use crate::mesh::Mesh;
use crate::registry::ElementRegistry;
use num::Float;
use rayon::prelude::*;
use rlst::RlstScalar;

/// The meshes staged for one simulation.
///
/// Owns the element registry together with every mesh, and drives the
/// derivation steps that run after all meshes and faces are ingested.
pub struct Simulation<T: Float + RlstScalar<Real = T>> {
    registry: ElementRegistry<T>,
    meshes: Vec<Mesh<T>>,
}

impl<T: Float + RlstScalar<Real = T>> Simulation<T> {
    /// Create an empty simulation with the built-in element registry.
    pub fn new() -> Self {
        Self {
            registry: ElementRegistry::new(),
            meshes: vec![],
        }
    }

    /// The element registry.
    pub fn registry(&self) -> &ElementRegistry<T> {
        &self.registry
    }

    /// Take ownership of an ingested mesh.
    pub fn add_mesh(&mut self, mesh: Mesh<T>) {
        self.meshes.push(mesh);
    }

    /// The simulation's meshes.
    pub fn meshes(&self) -> &[Mesh<T>] {
        &self.meshes
    }

    /// Mutable access to the simulation's meshes.
    pub fn meshes_mut(&mut self) -> &mut [Mesh<T>] {
        &mut self.meshes
    }

    /// Derive all auxiliary data needed by the solver.
    pub fn create_aux_data(&mut self) {
        self.create_bcs_aux_data();
    }

    /// Derive the essential boundary condition records of every face.
    ///
    /// Each face's data is self-contained and meshes own no shared state,
    /// so the fan-out runs over the meshes in parallel.
    pub fn create_bcs_aux_data(&mut self) {
        self.meshes.par_iter_mut().for_each(|mesh| {
            for face in mesh.faces_mut() {
                face.create_bcs_aux_data();
            }
        });
    }
}

impl<T: Float + RlstScalar<Real = T>> Default for Simulation<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::face::Face;
    use crate::types::ElementType;

    #[test]
    fn test_create_bcs_aux_data() {
        let mut simulation = Simulation::<f64>::new();

        for mesh_id in 0..2 {
            let mut mesh = Mesh::new(mesh_id, "lumen");
            let mut face = Face::new(1, "inlet");
            face.add_element(simulation.registry(), ElementType::Tri3, 5, &[0, 1, 2])
                .unwrap();
            face.add_element(simulation.registry(), ElementType::Tri3, 9, &[1, 2, 3])
                .unwrap();
            mesh.add_face(face);
            simulation.add_mesh(mesh);
        }

        simulation.create_aux_data();

        for mesh in simulation.meshes() {
            let records: Vec<&[usize]> = mesh.faces()[0]
                .element_set(ElementType::Tri3)
                .unwrap()
                .essential_bcs()
                .collect();
            assert_eq!(records, vec![&[5, 0, 1, 2][..], &[9, 1, 2, 3][..]]);
        }
    }

    #[test]
    fn test_empty_simulation() {
        let mut simulation = Simulation::<f64>::new();
        simulation.create_aux_data();
        assert!(simulation.meshes().is_empty());
    }
}
