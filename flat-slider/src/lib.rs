//! Flat Slider - A 3D friction bearing element for nonlinear structural analysis
//!
//! This library provides a two-node flat slider bearing element, supporting:
//! - Coupled biaxial friction with a circular yield surface
//! - Uplift (loss of contact) under axial tension
//! - P-Delta moments and V-Delta torsion at the sliding surface
//! - Pluggable friction laws and uniaxial materials
//! - Trial / commit / revert state management for incremental analysis
//!
//! ## Example
//! ```rust
//! use flat_slider::prelude::*;
//!
//! let mut domain = Domain::new();
//! domain.add_node(1, Node::new(0.0, 0.0, 0.0)).unwrap();
//! domain.add_node(2, Node::new(0.0, 0.0, 0.0)).unwrap();
//!
//! let friction = Coulomb::new(0.1).unwrap();
//! let axial = ElasticNoTension::new(1.0e9);
//! let rotation = Elastic::new(1.0e3);
//! let config = SliderConfig::new(0.001).with_x_axis([0.0, 0.0, 1.0]);
//!
//! let mut bearing = FlatSlider::new(
//!     1,
//!     [1, 2],
//!     &friction,
//!     [&axial, &rotation, &rotation, &rotation],
//!     config,
//! )
//! .unwrap();
//! bearing.set_domain(&domain).unwrap();
//!
//! // compress the bearing and push it sideways
//! domain
//!     .set_trial_response(2, [0.01, 0.0, -0.001, 0.0, 0.0, 0.0], [0.0; 6])
//!     .unwrap();
//! bearing.update(&domain).unwrap();
//! bearing.commit().unwrap();
//!
//! let forces = bearing.basic_forces();
//! assert!(forces.shear_magnitude() <= 0.1 * -forces.axial + 1e-6);
//! ```

pub mod config;
pub mod domain;
pub mod elements;
pub mod error;
pub mod friction;
pub mod materials;
pub mod math;
pub mod persistence;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::config::{RayleighDamping, SliderConfig};
    pub use crate::domain::Domain;
    pub use crate::elements::{FlatSlider, Node, OrientationFrame};
    pub use crate::error::{BearingError, BearingResult};
    pub use crate::friction::{Coulomb, FrictionModel, VelDependent};
    pub use crate::materials::{Elastic, ElasticNoTension, MaterialAxis, UniaxialMaterial};
    pub use crate::persistence::{ModelBroker, ModelRecord, SliderRecord};
    pub use crate::results::{BasicForces, ResponseQuery};
}
