//! Coulomb friction with a constant coefficient

use serde::{Deserialize, Serialize};

use super::{contact_force, FrictionModel, FrictionState};
use crate::error::{BearingError, BearingResult};

/// Coulomb friction, `F = mu * N` for positive normal force
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coulomb {
    /// Coefficient of friction
    pub mu: f64,

    #[serde(skip)]
    trial: FrictionState,
    #[serde(skip)]
    committed: FrictionState,
}

impl Coulomb {
    pub fn new(mu: f64) -> BearingResult<Self> {
        if mu.is_nan() || mu < 0.0 {
            return Err(BearingError::InvalidInput(format!(
                "coefficient of friction must be non-negative, got {mu}"
            )));
        }
        Ok(Self {
            mu,
            trial: FrictionState::default(),
            committed: FrictionState::default(),
        })
    }
}

impl FrictionModel for Coulomb {
    fn class_tag(&self) -> &'static str {
        "Coulomb"
    }

    fn set_trial(&mut self, normal_force: f64, sliding_speed: f64) -> BearingResult<()> {
        self.trial = FrictionState {
            normal_force,
            sliding_speed,
        };
        Ok(())
    }

    fn friction_force(&self) -> f64 {
        contact_force(self.mu, self.trial.normal_force)
    }

    fn friction_coeff(&self) -> f64 {
        self.mu
    }

    fn commit(&mut self) -> BearingResult<()> {
        self.committed = self.trial;
        Ok(())
    }

    fn revert_to_last_commit(&mut self) -> BearingResult<()> {
        self.trial = self.committed;
        Ok(())
    }

    fn revert_to_start(&mut self) -> BearingResult<()> {
        self.trial = FrictionState::default();
        self.committed = FrictionState::default();
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn FrictionModel> {
        Box::new(self.clone())
    }

    fn to_payload(&self) -> BearingResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
