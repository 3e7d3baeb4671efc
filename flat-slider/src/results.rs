//! Result types and named response queries for the bearing

use serde::{Deserialize, Serialize};

use crate::materials::MaterialAxis;
use crate::math::Vec6;

/// Forces in the basic system of the bearing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicForces {
    /// Axial force (negative = compression)
    pub axial: f64,
    /// Shear force in local y direction
    pub shear_y: f64,
    /// Shear force in local z direction
    pub shear_z: f64,
    /// Torsion
    pub torsion: f64,
    /// Bending moment about local y axis
    pub moment_y: f64,
    /// Bending moment about local z axis
    pub moment_z: f64,
}

impl BasicForces {
    /// Create from basic force vector [N, Vy, Vz, T, My, Mz]
    pub fn from_vector(qb: &Vec6) -> Self {
        Self {
            axial: qb[0],
            shear_y: qb[1],
            shear_z: qb[2],
            torsion: qb[3],
            moment_y: qb[4],
            moment_z: qb[5],
        }
    }

    /// Resultant of the two shear forces
    pub fn shear_magnitude(&self) -> f64 {
        (self.shear_y.powi(2) + self.shear_z.powi(2)).sqrt()
    }

    /// True if the bearing is not in compression
    pub fn is_uplifted(&self) -> bool {
        self.axial >= 0.0
    }
}

/// Named projection of the element state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseQuery {
    /// Resisting force in the global system (12)
    GlobalForce,
    /// Resisting force in the local system (12)
    LocalForce,
    /// Force in the basic system (6)
    BasicForce,
    /// Displacement in the local system (12)
    LocalDisplacement,
    /// Deformation in the basic system (6)
    BasicDeformation,
    /// Scalar response of one of the uniaxial materials
    Material { axis: MaterialAxis, name: String },
}

impl ResponseQuery {
    /// Parse a query from recorder-style arguments
    ///
    /// `["localForce"]`, `["basicDeformation"]`, `["material", "2", "stress"]`, ...
    pub fn parse(args: &[&str]) -> Option<Self> {
        let (&first, rest) = args.split_first()?;
        let query = match first {
            "force" | "forces" | "globalForce" | "globalForces" => Self::GlobalForce,
            "localForce" | "localForces" => Self::LocalForce,
            "basicForce" | "basicForces" => Self::BasicForce,
            "localDisplacement" | "localDisplacements" => Self::LocalDisplacement,
            "deformation" | "deformations" | "basicDeformation" | "basicDeformations"
            | "basicDisplacement" | "basicDisplacements" => Self::BasicDeformation,
            "material" => {
                let number = rest.first()?.parse::<usize>().ok()?;
                let axis = MaterialAxis::from_number(number)?;
                let name = rest.get(1)?.to_string();
                Self::Material { axis, name }
            }
            _ => return None,
        };
        Some(query)
    }

    /// Component labels of the response
    pub fn labels(&self) -> Vec<String> {
        let per_node = |names: [&str; 6]| -> Vec<String> {
            (1..=2)
                .flat_map(|end| names.iter().map(move |n| format!("{n}_{end}")))
                .collect()
        };
        match self {
            Self::GlobalForce => per_node(["Px", "Py", "Pz", "Mx", "My", "Mz"]),
            Self::LocalForce => per_node(["N", "Vy", "Vz", "T", "My", "Mz"]),
            Self::BasicForce => (1..=6).map(|i| format!("qb{i}")).collect(),
            Self::LocalDisplacement => per_node(["ux", "uy", "uz", "rx", "ry", "rz"]),
            Self::BasicDeformation => (1..=6).map(|i| format!("ub{i}")).collect(),
            Self::Material { name, .. } => vec![name.clone()],
        }
    }
}
