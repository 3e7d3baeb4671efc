//! Node - a point in 3D space carrying 6 DOF of response

use serde::{Deserialize, Serialize};

/// A 3D node with 6 DOF [DX, DY, DZ, RX, RY, RZ]
///
/// The bearing only reads nodes. Displacements, velocities and
/// accelerations are written by the global solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,

    /// Last committed displacement
    #[serde(skip)]
    pub(crate) disp: [f64; 6],

    #[serde(skip)]
    pub(crate) trial_disp: [f64; 6],

    #[serde(skip)]
    pub(crate) trial_vel: [f64; 6],

    #[serde(skip)]
    pub(crate) trial_accel: [f64; 6],
}

impl Node {
    /// Create a new node at the given coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            disp: [0.0; 6],
            trial_disp: [0.0; 6],
            trial_vel: [0.0; 6],
            trial_accel: [0.0; 6],
        }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Committed displacement
    pub fn disp(&self) -> [f64; 6] {
        self.disp
    }

    pub fn trial_disp(&self) -> [f64; 6] {
        self.trial_disp
    }

    pub fn trial_vel(&self) -> [f64; 6] {
        self.trial_vel
    }

    pub fn trial_accel(&self) -> [f64; 6] {
        self.trial_accel
    }

    /// Set the trial displacement
    pub fn set_trial_disp(&mut self, disp: [f64; 6]) {
        self.trial_disp = disp;
    }

    /// Set the trial velocity
    pub fn set_trial_vel(&mut self, vel: [f64; 6]) {
        self.trial_vel = vel;
    }

    /// Set the trial acceleration
    pub fn set_trial_accel(&mut self, accel: [f64; 6]) {
        self.trial_accel = accel;
    }

    /// Accept the trial displacement as committed
    pub fn commit(&mut self) {
        self.disp = self.trial_disp;
    }

    /// Discard the trial response
    pub fn revert_to_last_commit(&mut self) {
        self.trial_disp = self.disp;
        self.trial_vel = [0.0; 6];
        self.trial_accel = [0.0; 6];
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}
