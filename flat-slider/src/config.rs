//! Element parameters and options

use serde::{Deserialize, Serialize};

use crate::error::{BearingError, BearingResult};

/// Rayleigh damping coefficients applied to the element
///
/// `C = alpha_m * M + beta_k * K_t + beta_k0 * K_init + beta_kc * K_committed`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RayleighDamping {
    pub alpha_m: f64,
    pub beta_k: f64,
    pub beta_k0: f64,
    pub beta_kc: f64,
}

impl RayleighDamping {
    pub fn new(alpha_m: f64, beta_k: f64, beta_k0: f64, beta_kc: f64) -> Self {
        Self {
            alpha_m,
            beta_k,
            beta_k0,
            beta_kc,
        }
    }

    /// True if any coefficient is non-zero
    pub fn is_active(&self) -> bool {
        self.alpha_m != 0.0 || self.beta_k != 0.0 || self.beta_k0 != 0.0 || self.beta_kc != 0.0
    }
}

/// Parameters of a flat slider bearing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Shear displacement at which sliding starts
    pub yield_displacement: f64,
    /// Lumped mass, split equally between both end nodes
    #[serde(default)]
    pub mass: f64,
    /// Maximum number of passes of the shear force iteration
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Convergence tolerance on the change of the shear forces
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Local x axis; derived from the node coordinates when absent
    #[serde(default)]
    pub x: Option<[f64; 3]>,
    /// Vector in the local x-y plane; global Y when absent
    #[serde(default)]
    pub y: Option<[f64; 3]>,
    /// Rayleigh damping of the element
    #[serde(default)]
    pub damping: RayleighDamping,
}

fn default_max_iterations() -> usize {
    20
}

fn default_tolerance() -> f64 {
    1e-8
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            yield_displacement: 0.0,
            mass: 0.0,
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            x: None,
            y: None,
            damping: RayleighDamping::default(),
        }
    }
}

impl SliderConfig {
    /// Create a configuration for the given yield displacement
    pub fn new(yield_displacement: f64) -> Self {
        Self {
            yield_displacement,
            ..Self::default()
        }
    }

    /// Set the lumped mass
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Set maximum iterations
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iterations = max_iter;
        self
    }

    /// Set convergence tolerance
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Set the local x axis explicitly
    pub fn with_x_axis(mut self, x: [f64; 3]) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the vector defining the local x-y plane
    pub fn with_y_axis(mut self, y: [f64; 3]) -> Self {
        self.y = Some(y);
        self
    }

    /// Set Rayleigh damping
    pub fn with_damping(mut self, damping: RayleighDamping) -> Self {
        self.damping = damping;
        self
    }

    /// Vector defining the local x-y plane
    pub fn y_axis(&self) -> [f64; 3] {
        self.y.unwrap_or([0.0, 1.0, 0.0])
    }

    /// Check the scalar parameters
    pub fn validate(&self) -> BearingResult<()> {
        if !self.yield_displacement.is_finite() || self.yield_displacement <= 0.0 {
            return Err(BearingError::InvalidInput(format!(
                "yield displacement must be positive, got {}",
                self.yield_displacement
            )));
        }
        if !self.mass.is_finite() || self.mass < 0.0 {
            return Err(BearingError::InvalidInput(format!(
                "mass must be non-negative, got {}",
                self.mass
            )));
        }
        if self.max_iterations == 0 {
            return Err(BearingError::InvalidInput(
                "maximum iterations must be at least 1".to_string(),
            ));
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(BearingError::InvalidInput(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> BearingResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON
    pub fn to_json(&self) -> BearingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
