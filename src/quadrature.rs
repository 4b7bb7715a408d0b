//! Quadrature rules on reference elements.

use crate::element::reference_cell;
use crate::types::ElementType;
use num::Float;
use rlst::RlstScalar;
use thiserror::Error;

/// Number of points in the symmetric simplex rule shared by all supported
/// element types.
pub const NUM_GAUSS_POINTS: usize = 4;

/// Quadrature rule lookup failure.
#[derive(Debug, Error)]
pub enum QuadratureError {
    /// No rule with the requested number of points exists for the element type
    #[error("no {npoints}-point rule for element type '{element_type}'")]
    RuleNotFound {
        /// The element type a rule was requested for
        element_type: ElementType,
        /// The requested number of points
        npoints: usize,
    },
}

/// Definition of a numerical quadrature rule.
pub struct NumericalQuadratureDefinition<T: Float + RlstScalar<Real = T>> {
    /// The dimension d of a single point.
    pub dim: usize,

    /// The number of points of the quadrature rule.
    pub npoints: usize,

    /// The weights of the quadrature rule.
    pub weights: Vec<T>,

    /// The point coordinates of the quadrature rule.
    ///
    /// A single point has the coordinates p_1, p_2, ..., p_d,
    /// with d being the dimension of the point. The vector stores
    /// all points in consecutive order, so the first point starts
    /// at position zero and the second at position d.
    pub points: Vec<T>,
}

/// Return a simplex rule for a given number of points.
///
/// The rule is the 4-point symmetric rule with weight 1/24 at each point and
/// barycentric parameters s = (5 + 3*sqrt(5))/20 and t = (5 - sqrt(5))/20:
/// point q carries s on axis q and t on the remaining axes, and the trailing
/// points are all-t. Rules are available for planar and solid simplex types
/// only.
pub fn simplex_rule<T: Float + RlstScalar<Real = T>>(
    element_type: ElementType,
    npoints: usize,
) -> Result<NumericalQuadratureDefinition<T>, QuadratureError> {
    let dim = reference_cell::dim(element_type);
    if !reference_cell::is_simplex(element_type) || dim < 2 || npoints != NUM_GAUSS_POINTS {
        return Err(QuadratureError::RuleNotFound {
            element_type,
            npoints,
        });
    }

    let w = T::from(1.0 / 24.0).unwrap();
    let s = T::from((5.0 + 3.0 * 5.0_f64.sqrt()) / 20.0).unwrap();
    let t = T::from((5.0 - 5.0_f64.sqrt()) / 20.0).unwrap();

    let mut points = Vec::with_capacity(npoints * dim);
    for q in 0..npoints {
        for axis in 0..dim {
            points.push(if q == axis { s } else { t });
        }
    }

    Ok(NumericalQuadratureDefinition {
        dim,
        npoints,
        weights: vec![w; npoints],
        points,
    })
}
