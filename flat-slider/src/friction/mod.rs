//! Friction laws supplying the yield force of the sliding surface

mod coulomb;
mod vel_dependent;

use std::fmt;

use crate::error::BearingResult;

pub use coulomb::Coulomb;
pub use vel_dependent::VelDependent;

/// Stateful friction law
///
/// Given the compressive normal force and the sliding speed the model
/// provides the friction (yield) force of the sliding surface. The bearing
/// calls `set_trial` on every pass of its shear iteration, so after an
/// update the model holds the state of the last pass.
pub trait FrictionModel: fmt::Debug + Send + Sync {
    /// Type identifier used by the persistence broker
    fn class_tag(&self) -> &'static str;

    /// Set the trial normal force (compression positive) and sliding speed
    fn set_trial(&mut self, normal_force: f64, sliding_speed: f64) -> BearingResult<()>;

    /// Friction force for the current trial state
    fn friction_force(&self) -> f64;

    /// Coefficient of friction for the current trial state
    fn friction_coeff(&self) -> f64;

    fn commit(&mut self) -> BearingResult<()>;

    fn revert_to_last_commit(&mut self) -> BearingResult<()>;

    fn revert_to_start(&mut self) -> BearingResult<()>;

    /// Independent copy, including the current history
    fn clone_box(&self) -> Box<dyn FrictionModel>;

    /// Model parameters for persistence
    fn to_payload(&self) -> BearingResult<serde_json::Value>;
}

impl Clone for Box<dyn FrictionModel> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Trial and committed normal force / sliding speed shared by the built-in laws
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct FrictionState {
    pub normal_force: f64,
    pub sliding_speed: f64,
}

/// Friction force for a coefficient and a normal force; zero without contact
pub(crate) fn contact_force(mu: f64, normal_force: f64) -> f64 {
    if normal_force > 0.0 {
        mu * normal_force
    } else {
        0.0
    }
}
