//! Elastic material that carries compression only

use serde::{Deserialize, Serialize};

use super::UniaxialMaterial;
use crate::error::{BearingError, BearingResult};

/// Elastic in compression, zero stress and stiffness in tension
///
/// Typical choice for the axial direction of a bearing that can lift off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElasticNoTension {
    /// Compressive modulus
    pub e: f64,

    #[serde(skip)]
    trial_strain: f64,
    #[serde(skip)]
    committed_strain: f64,
}

impl ElasticNoTension {
    pub fn new(e: f64) -> Self {
        Self {
            e,
            trial_strain: 0.0,
            committed_strain: 0.0,
        }
    }
}

impl UniaxialMaterial for ElasticNoTension {
    fn class_tag(&self) -> &'static str {
        "ElasticNoTension"
    }

    fn set_trial_strain(&mut self, strain: f64, _rate: f64) -> BearingResult<()> {
        if !strain.is_finite() {
            return Err(BearingError::MaterialFailed(format!(
                "non-finite trial strain {strain}"
            )));
        }
        self.trial_strain = strain;
        Ok(())
    }

    fn strain(&self) -> f64 {
        self.trial_strain
    }

    fn stress(&self) -> f64 {
        if self.trial_strain < 0.0 {
            self.e * self.trial_strain
        } else {
            0.0
        }
    }

    fn tangent(&self) -> f64 {
        if self.trial_strain < 0.0 {
            self.e
        } else {
            0.0
        }
    }

    fn initial_tangent(&self) -> f64 {
        self.e
    }

    fn commit(&mut self) -> BearingResult<()> {
        self.committed_strain = self.trial_strain;
        Ok(())
    }

    fn revert_to_last_commit(&mut self) -> BearingResult<()> {
        self.trial_strain = self.committed_strain;
        Ok(())
    }

    fn revert_to_start(&mut self) -> BearingResult<()> {
        self.trial_strain = 0.0;
        self.committed_strain = 0.0;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn UniaxialMaterial> {
        Box::new(self.clone())
    }

    fn to_payload(&self) -> BearingResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
