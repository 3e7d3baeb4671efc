//! Orientation frame of a two-node bearing

use log::{debug, warn};

use crate::error::{BearingError, BearingResult};
use crate::math::{self, Mat12, Mat3, Mat6x12, Vec3};

/// Fixed transformations of a bearing, built once when it is connected
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationFrame {
    /// Distance between the end nodes
    pub length: f64,
    /// Rows are the unit local x, y and z axes
    pub axes: Mat3,
    /// Global to local transformation (12x12)
    pub tgl: Mat12,
    /// Local to basic transformation (6x12)
    pub tlb: Mat6x12,
}

impl OrientationFrame {
    /// Build the frame from the end node coordinates
    ///
    /// # Arguments
    /// * `tag` - Element tag, for diagnostics
    /// * `i_node` - Start node coordinates [X, Y, Z]
    /// * `j_node` - End node coordinates [X, Y, Z]
    /// * `x` - Configured local x axis; takes precedence over the node geometry
    /// * `y` - Vector in the local x-y plane
    pub fn build(
        tag: i32,
        i_node: &[f64; 3],
        j_node: &[f64; 3],
        x: Option<[f64; 3]>,
        y: [f64; 3],
    ) -> BearingResult<Self> {
        let xp = Vec3::from(*j_node) - Vec3::from(*i_node);
        let length = xp.norm();

        let x = match x {
            Some(x) => {
                if length > f64::EPSILON {
                    warn!(
                        "FlatSlider {tag}: ignoring nodes and using specified local x vector to determine orientation"
                    );
                }
                Vec3::from(x)
            }
            None if length > f64::EPSILON => xp,
            None => {
                return Err(BearingError::InvalidOrientation(format!(
                    "element {tag} has zero length and no local x vector"
                )))
            }
        };

        let axes = math::orientation_axes(&x, &Vec3::from(y)).map_err(|err| match err {
            BearingError::InvalidOrientation(msg) => {
                BearingError::InvalidOrientation(format!("element {tag}: {msg}"))
            }
            other => other,
        })?;

        debug!("FlatSlider {tag}: length {length}, local x {:?}", axes.row(0));

        Ok(Self {
            length,
            axes,
            tgl: math::global_to_local(&axes),
            tlb: math::local_to_basic(length),
        })
    }
}
