//! Linear elastic uniaxial material with optional viscous damping

use serde::{Deserialize, Serialize};

use super::UniaxialMaterial;
use crate::error::{BearingError, BearingResult};

/// Linear elastic material, `stress = e * strain + eta * rate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elastic {
    /// Elastic modulus
    pub e: f64,
    /// Damping coefficient
    #[serde(default)]
    pub eta: f64,

    #[serde(skip)]
    trial_strain: f64,
    #[serde(skip)]
    trial_rate: f64,
    #[serde(skip)]
    committed_strain: f64,
    #[serde(skip)]
    committed_rate: f64,
}

impl Elastic {
    /// Create an undamped elastic material
    pub fn new(e: f64) -> Self {
        Self::with_damping(e, 0.0)
    }

    /// Create an elastic material with viscous damping
    pub fn with_damping(e: f64, eta: f64) -> Self {
        Self {
            e,
            eta,
            trial_strain: 0.0,
            trial_rate: 0.0,
            committed_strain: 0.0,
            committed_rate: 0.0,
        }
    }
}

impl UniaxialMaterial for Elastic {
    fn class_tag(&self) -> &'static str {
        "Elastic"
    }

    fn set_trial_strain(&mut self, strain: f64, rate: f64) -> BearingResult<()> {
        if !strain.is_finite() || !rate.is_finite() {
            return Err(BearingError::MaterialFailed(format!(
                "non-finite trial strain {strain} / rate {rate}"
            )));
        }
        self.trial_strain = strain;
        self.trial_rate = rate;
        Ok(())
    }

    fn strain(&self) -> f64 {
        self.trial_strain
    }

    fn stress(&self) -> f64 {
        self.e * self.trial_strain + self.eta * self.trial_rate
    }

    fn tangent(&self) -> f64 {
        self.e
    }

    fn initial_tangent(&self) -> f64 {
        self.e
    }

    fn commit(&mut self) -> BearingResult<()> {
        self.committed_strain = self.trial_strain;
        self.committed_rate = self.trial_rate;
        Ok(())
    }

    fn revert_to_last_commit(&mut self) -> BearingResult<()> {
        self.trial_strain = self.committed_strain;
        self.trial_rate = self.committed_rate;
        Ok(())
    }

    fn revert_to_start(&mut self) -> BearingResult<()> {
        self.trial_strain = 0.0;
        self.trial_rate = 0.0;
        self.committed_strain = 0.0;
        self.committed_rate = 0.0;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn UniaxialMaterial> {
        Box::new(self.clone())
    }

    fn to_payload(&self) -> BearingResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
