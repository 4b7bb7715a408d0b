//! Reference element definitions.

pub mod reference_cell;

use crate::quadrature;
use crate::types::{ElementType, GeometryType};
use num::Float;
use rlst::{
    rlst_dynamic_array2, rlst_dynamic_array3, Array, BaseArray, RandomAccessMut, RlstScalar,
    VectorContainer,
};

/// An owned 2-dimensional dense array of reference data.
pub type Array2D<T> = Array<T, BaseArray<T, VectorContainer<T>, 2>, 2>;
/// An owned 3-dimensional dense array of reference data.
pub type Array3D<T> = Array<T, BaseArray<T, VectorContainer<T>, 3>, 3>;

/// Fixed reference data for one element type.
///
/// Holds the quadrature rule on the element's natural domain together with
/// the shape function values and gradients tabulated at each gauss point.
/// All data is determined by the element type alone and never changes after
/// construction.
pub struct ReferenceElement<T: Float + RlstScalar<Real = T>> {
    element_type: ElementType,
    geometry: GeometryType,
    num_nodes: usize,
    num_gauss_points: usize,
    gauss_weights: Vec<T>,
    /// Gauss point coordinates, shape [npoints, dim].
    gauss_points: Array2D<T>,
    /// Shape function values at each gauss point, shape [npoints, nnodes].
    shape_functions: Array2D<T>,
    /// Shape function gradients with respect to the natural coordinates,
    /// shape [npoints, dim, nnodes].
    shape_function_grads: Array3D<T>,
    /// Natural coordinate domain per axis, shape [dim, 2].
    gauss_point_bounds: Array2D<T>,
    /// Per-node bound placeholder, shape [nnodes, 2].
    shape_function_bounds: Array2D<T>,
}

unsafe impl<T: Float + RlstScalar<Real = T>> Send for ReferenceElement<T> {}
unsafe impl<T: Float + RlstScalar<Real = T>> Sync for ReferenceElement<T> {}

impl<T: Float + RlstScalar<Real = T>> ReferenceElement<T> {
    /// Create the 4-node tetrahedron reference element.
    pub fn tet4() -> Self {
        Self::simplex(ElementType::Tet4)
    }

    /// Create the 3-node triangle reference element.
    pub fn tri3() -> Self {
        Self::simplex(ElementType::Tri3)
    }

    /// Tabulate the reference data for a linear simplex with nodes at the
    /// corners of the natural domain.
    ///
    /// Node j (j < dim) takes natural coordinate j as its shape function;
    /// the last node closes the partition of unity. The gradients are
    /// constant across the gauss points.
    fn simplex(element_type: ElementType) -> Self {
        let num_nodes = reference_cell::node_count(element_type);
        let tdim = reference_cell::dim(element_type);
        debug_assert_eq!(num_nodes, tdim + 1);

        let rule =
            quadrature::simplex_rule::<T>(element_type, quadrature::NUM_GAUSS_POINTS).unwrap();
        let nq = rule.npoints;
        let one = T::from(1.0).unwrap();

        let mut gauss_points = rlst_dynamic_array2!(T, [nq, tdim]);
        for q in 0..nq {
            for axis in 0..tdim {
                *gauss_points.get_mut([q, axis]).unwrap() = rule.points[q * tdim + axis];
            }
        }

        let mut shape_functions = rlst_dynamic_array2!(T, [nq, num_nodes]);
        let mut shape_function_grads = rlst_dynamic_array3!(T, [nq, tdim, num_nodes]);
        for q in 0..nq {
            let mut last = one;
            for j in 0..tdim {
                let xi = rule.points[q * tdim + j];
                *shape_functions.get_mut([q, j]).unwrap() = xi;
                last = last - xi;
            }
            *shape_functions.get_mut([q, num_nodes - 1]).unwrap() = last;

            for axis in 0..tdim {
                *shape_function_grads.get_mut([q, axis, axis]).unwrap() = one;
                *shape_function_grads.get_mut([q, axis, num_nodes - 1]).unwrap() = -one;
            }
        }

        let mut gauss_point_bounds = rlst_dynamic_array2!(T, [tdim, 2]);
        for axis in 0..tdim {
            *gauss_point_bounds.get_mut([axis, 1]).unwrap() = one;
        }
        let shape_function_bounds = rlst_dynamic_array2!(T, [num_nodes, 2]);

        Self {
            element_type,
            geometry: reference_cell::geometry(element_type),
            num_nodes,
            num_gauss_points: nq,
            gauss_weights: rule.weights,
            gauss_points,
            shape_functions,
            shape_function_grads,
            gauss_point_bounds,
            shape_function_bounds,
        }
    }

    /// The element type.
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// The geometric class.
    pub fn geometry(&self) -> GeometryType {
        self.geometry
    }

    /// The number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// The number of gauss points.
    pub fn num_gauss_points(&self) -> usize {
        self.num_gauss_points
    }

    /// The gauss weights.
    pub fn gauss_weights(&self) -> &[T] {
        &self.gauss_weights
    }

    /// The gauss points, shape [npoints, dim].
    pub fn gauss_points(&self) -> &Array2D<T> {
        &self.gauss_points
    }

    /// The shape function values at each gauss point, shape [npoints, nnodes].
    pub fn shape_functions(&self) -> &Array2D<T> {
        &self.shape_functions
    }

    /// The shape function gradients, shape [npoints, dim, nnodes].
    pub fn shape_function_grads(&self) -> &Array3D<T> {
        &self.shape_function_grads
    }

    /// The natural coordinate domain per axis, shape [dim, 2].
    pub fn gauss_point_bounds(&self) -> &Array2D<T> {
        &self.gauss_point_bounds
    }

    /// The per-node bound placeholder, shape [nnodes, 2].
    pub fn shape_function_bounds(&self) -> &Array2D<T> {
        &self.shape_function_bounds
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use paste::paste;
    use rlst::{RandomAccessByRef, RawAccess, Shape};

    macro_rules! test_element {
        ($($cell:ident),+) => {
            $(
                paste! {
                    #[test]
                    fn [<test_partition_of_unity_ $cell:lower>]() {
                        let e = ReferenceElement::<f64>::simplex(ElementType::$cell);
                        for q in 0..e.num_gauss_points() {
                            let mut total = 0.0;
                            for j in 0..e.num_nodes() {
                                total += e.shape_functions().get([q, j]).unwrap();
                            }
                            assert_relative_eq!(total, 1.0, max_relative = 1e-12);
                        }
                    }

                    #[test]
                    fn [<test_gradients_ $cell:lower>]() {
                        let e = ReferenceElement::<f64>::simplex(ElementType::$cell);
                        let dim = reference_cell::dim(ElementType::$cell);
                        let last = e.num_nodes() - 1;
                        for q in 0..e.num_gauss_points() {
                            for axis in 0..dim {
                                for j in 0..dim {
                                    let expected = if axis == j { 1.0 } else { 0.0 };
                                    assert_eq!(
                                        *e.shape_function_grads().get([q, axis, j]).unwrap(),
                                        expected
                                    );
                                }
                                assert_eq!(
                                    *e.shape_function_grads().get([q, axis, last]).unwrap(),
                                    -1.0
                                );
                            }
                        }
                    }

                    #[test]
                    fn [<test_deterministic_construction_ $cell:lower>]() {
                        let a = ReferenceElement::<f64>::simplex(ElementType::$cell);
                        let b = ReferenceElement::<f64>::simplex(ElementType::$cell);
                        assert_eq!(a.gauss_weights(), b.gauss_weights());
                        assert_eq!(a.gauss_points().data(), b.gauss_points().data());
                        assert_eq!(a.shape_functions().data(), b.shape_functions().data());
                        assert_eq!(
                            a.shape_function_grads().data(),
                            b.shape_function_grads().data()
                        );
                    }
                }
            )*
        };
    }

    test_element!(Tet4, Tri3);

    #[test]
    fn test_tet4_shapes() {
        let e = ReferenceElement::<f64>::tet4();
        assert_eq!(e.element_type(), ElementType::Tet4);
        assert_eq!(e.geometry(), GeometryType::Solid);
        assert_eq!(e.num_nodes(), 4);
        assert_eq!(e.num_gauss_points(), 4);
        assert_eq!(e.gauss_points().shape(), [4, 3]);
        assert_eq!(e.shape_functions().shape(), [4, 4]);
        assert_eq!(e.shape_function_grads().shape(), [4, 3, 4]);

        // At point q the shape function of node q takes the s parameter.
        let s = (5.0 + 3.0 * 5.0_f64.sqrt()) / 20.0;
        for q in 0..3 {
            assert_relative_eq!(
                *e.shape_functions().get([q, q]).unwrap(),
                s,
                max_relative = 1e-14
            );
        }
    }

    #[test]
    fn test_tri3_shapes() {
        let e = ReferenceElement::<f64>::tri3();
        assert_eq!(e.element_type(), ElementType::Tri3);
        assert_eq!(e.geometry(), GeometryType::Planar);
        assert_eq!(e.num_nodes(), 3);
        assert_eq!(e.num_gauss_points(), 4);
        assert_eq!(e.gauss_points().shape(), [4, 2]);
        assert_eq!(e.shape_functions().shape(), [4, 3]);
        assert_eq!(e.shape_function_grads().shape(), [4, 2, 3]);
    }

    #[test]
    fn test_bounds() {
        let e = ReferenceElement::<f64>::tet4();
        assert_eq!(e.gauss_point_bounds().shape(), [3, 2]);
        for axis in 0..3 {
            assert_eq!(*e.gauss_point_bounds().get([axis, 0]).unwrap(), 0.0);
            assert_eq!(*e.gauss_point_bounds().get([axis, 1]).unwrap(), 1.0);
        }
        assert_eq!(e.shape_function_bounds().shape(), [4, 2]);
    }
}
