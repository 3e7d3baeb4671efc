//! Uniaxial constitutive models for the axial and rotational bearing directions

mod elastic;
mod elastic_no_tension;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BearingResult;

pub use elastic::Elastic;
pub use elastic_no_tension::ElasticNoTension;

/// Stateful scalar stress-strain relation with trial/committed history
///
/// The bearing owns one clone per [`MaterialAxis`] and drives
/// `set_trial_strain` during state determination, `commit` once the global
/// solver accepts a step, and the revert methods when it rejects one.
pub trait UniaxialMaterial: fmt::Debug + Send + Sync {
    /// Type identifier used by the persistence broker
    fn class_tag(&self) -> &'static str;

    /// Set the trial strain and strain rate
    fn set_trial_strain(&mut self, strain: f64, rate: f64) -> BearingResult<()>;

    /// Current trial strain
    fn strain(&self) -> f64;

    /// Stress at the current trial strain
    fn stress(&self) -> f64;

    /// Tangent at the current trial strain
    fn tangent(&self) -> f64;

    /// Tangent of the virgin material
    fn initial_tangent(&self) -> f64;

    fn commit(&mut self) -> BearingResult<()>;

    fn revert_to_last_commit(&mut self) -> BearingResult<()>;

    fn revert_to_start(&mut self) -> BearingResult<()>;

    /// Independent copy, including the current history
    fn clone_box(&self) -> Box<dyn UniaxialMaterial>;

    /// Model parameters for persistence
    fn to_payload(&self) -> BearingResult<serde_json::Value>;

    /// Named scalar response ("stress", "strain", "tangent")
    fn response(&self, name: &str) -> Option<f64> {
        match name {
            "stress" => Some(self.stress()),
            "strain" => Some(self.strain()),
            "tangent" => Some(self.tangent()),
            _ => None,
        }
    }
}

impl Clone for Box<dyn UniaxialMaterial> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Basic-system direction each uniaxial material acts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialAxis {
    /// Normal force along local x
    Axial,
    /// Moment about local x
    Torsion,
    /// Moment about local y
    BendY,
    /// Moment about local z
    BendZ,
}

impl MaterialAxis {
    pub const ALL: [MaterialAxis; 4] = [
        MaterialAxis::Axial,
        MaterialAxis::Torsion,
        MaterialAxis::BendY,
        MaterialAxis::BendZ,
    ];

    /// Position in the element's material array
    pub fn index(self) -> usize {
        match self {
            MaterialAxis::Axial => 0,
            MaterialAxis::Torsion => 1,
            MaterialAxis::BendY => 2,
            MaterialAxis::BendZ => 3,
        }
    }

    /// Basic-system DOF this material contributes to
    pub fn basic_dof(self) -> usize {
        match self {
            MaterialAxis::Axial => 0,
            MaterialAxis::Torsion => 3,
            MaterialAxis::BendY => 4,
            MaterialAxis::BendZ => 5,
        }
    }

    /// Look up an axis by its 1-based material number
    pub fn from_number(number: usize) -> Option<Self> {
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    /// Short label used in printed summaries
    pub fn label(self) -> &'static str {
        match self {
            MaterialAxis::Axial => "ux",
            MaterialAxis::Torsion => "rx",
            MaterialAxis::BendY => "ry",
            MaterialAxis::BendZ => "rz",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_numbering() {
        assert_eq!(MaterialAxis::from_number(1), Some(MaterialAxis::Axial));
        assert_eq!(MaterialAxis::from_number(4), Some(MaterialAxis::BendZ));
        assert_eq!(MaterialAxis::from_number(0), None);
        assert_eq!(MaterialAxis::from_number(5), None);
        for (i, axis) in MaterialAxis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_boxed_clone_is_independent() {
        let mut first: Box<dyn UniaxialMaterial> = Box::new(Elastic::new(100.0));
        let copy = first.clone();
        first.set_trial_strain(0.5, 0.0).unwrap();
        assert_eq!(first.stress(), 50.0);
        assert_eq!(copy.stress(), 0.0);
    }

    #[test]
    fn test_default_response_names() {
        let mut mat = Elastic::new(10.0);
        mat.set_trial_strain(0.2, 0.0).unwrap();
        assert_eq!(mat.response("strain"), Some(0.2));
        assert_eq!(mat.response("stress"), Some(2.0));
        assert_eq!(mat.response("tangent"), Some(10.0));
        assert_eq!(mat.response("energy"), None);
    }
}
