//! Velocity dependent friction

use serde::{Deserialize, Serialize};

use super::{contact_force, FrictionModel, FrictionState};
use crate::error::{BearingError, BearingResult};

/// Friction coefficient moving from `mu_slow` at rest towards `mu_fast`
/// at high sliding speed:
///
/// `mu = mu_fast - (mu_fast - mu_slow) * exp(-trans_rate * |v|)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelDependent {
    /// Coefficient at zero sliding speed
    pub mu_slow: f64,
    /// Coefficient at high sliding speed
    pub mu_fast: f64,
    /// Transition rate from slow to fast coefficient
    pub trans_rate: f64,

    #[serde(skip)]
    trial: FrictionState,
    #[serde(skip)]
    committed: FrictionState,
}

impl VelDependent {
    pub fn new(mu_slow: f64, mu_fast: f64, trans_rate: f64) -> BearingResult<Self> {
        if mu_slow.is_nan() || mu_fast.is_nan() || mu_slow < 0.0 || mu_fast < 0.0 {
            return Err(BearingError::InvalidInput(format!(
                "friction coefficients must be non-negative, got {mu_slow} / {mu_fast}"
            )));
        }
        if trans_rate.is_nan() || trans_rate < 0.0 {
            return Err(BearingError::InvalidInput(format!(
                "transition rate must be non-negative, got {trans_rate}"
            )));
        }
        Ok(Self {
            mu_slow,
            mu_fast,
            trans_rate,
            trial: FrictionState::default(),
            committed: FrictionState::default(),
        })
    }
}

impl FrictionModel for VelDependent {
    fn class_tag(&self) -> &'static str {
        "VelDependent"
    }

    fn set_trial(&mut self, normal_force: f64, sliding_speed: f64) -> BearingResult<()> {
        self.trial = FrictionState {
            normal_force,
            sliding_speed,
        };
        Ok(())
    }

    fn friction_force(&self) -> f64 {
        contact_force(self.friction_coeff(), self.trial.normal_force)
    }

    fn friction_coeff(&self) -> f64 {
        let speed = self.trial.sliding_speed.abs();
        self.mu_fast - (self.mu_fast - self.mu_slow) * (-self.trans_rate * speed).exp()
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coefficient_limits() {
        let mut frn = VelDependent::new(0.02, 0.08, 20.0).unwrap();
        frn.set_trial(100.0, 0.0).unwrap();
        assert_relative_eq!(frn.friction_coeff(), 0.02);
        assert_relative_eq!(frn.friction_force(), 2.0);
        frn.set_trial(100.0, 10.0).unwrap();
        assert_relative_eq!(frn.friction_coeff(), 0.08, epsilon = 1e-12);
    }

    #[test]
    fn test_coefficient_at_intermediate_speed() {
        let mut frn = VelDependent::new(0.02, 0.08, 20.0).unwrap();
        frn.set_trial(1.0, 0.05).unwrap();
        let expected = 0.08 - 0.06 * (-1.0_f64).exp();
        assert_relative_eq!(frn.friction_coeff(), expected);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(VelDependent::new(-0.01, 0.05, 1.0).is_err());
        assert!(VelDependent::new(0.01, 0.05, -1.0).is_err());
    }
}
