//! Persistence of bearing elements and their sub-models
//!
//! An element is externalized as a [`SliderRecord`]: its parameters plus one
//! [`ModelRecord`] (type identifier and payload) per pluggable sub-model.
//! Restoring needs a [`ModelBroker`] that maps type identifiers back to
//! constructors.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::SliderConfig;
use crate::error::{BearingError, BearingResult};
use crate::friction::{Coulomb, FrictionModel, VelDependent};
use crate::materials::{Elastic, ElasticNoTension, UniaxialMaterial};

/// Type identifier and parameters of a sub-model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub class_tag: String,
    pub payload: serde_json::Value,
}

impl ModelRecord {
    pub fn from_friction(model: &dyn FrictionModel) -> BearingResult<Self> {
        Ok(Self {
            class_tag: model.class_tag().to_string(),
            payload: model.to_payload()?,
        })
    }

    pub fn from_material(model: &dyn UniaxialMaterial) -> BearingResult<Self> {
        Ok(Self {
            class_tag: model.class_tag().to_string(),
            payload: model.to_payload()?,
        })
    }
}

/// Externalized flat slider bearing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderRecord {
    pub tag: i32,
    pub nodes: [i32; 2],
    pub config: SliderConfig,
    pub friction: ModelRecord,
    /// Axial, torsion, bend-y and bend-z materials, in that order
    pub materials: [ModelRecord; 4],
}

impl SliderRecord {
    pub fn to_json(&self) -> BearingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> BearingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the record as JSON to a file
    pub fn save(&self, path: impl AsRef<Path>) -> BearingResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a record from a JSON file
    pub fn load(path: impl AsRef<Path>) -> BearingResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

pub type FrictionConstructor =
    fn(&serde_json::Value) -> BearingResult<Box<dyn FrictionModel>>;
pub type MaterialConstructor =
    fn(&serde_json::Value) -> BearingResult<Box<dyn UniaxialMaterial>>;

/// Registry of sub-model constructors keyed by type identifier
#[derive(Clone)]
pub struct ModelBroker {
    friction: HashMap<String, FrictionConstructor>,
    materials: HashMap<String, MaterialConstructor>,
}

impl fmt::Debug for ModelBroker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut friction: Vec<&String> = self.friction.keys().collect();
        let mut materials: Vec<&String> = self.materials.keys().collect();
        friction.sort();
        materials.sort();
        f.debug_struct("ModelBroker")
            .field("friction", &friction)
            .field("materials", &materials)
            .finish()
    }
}

impl Default for ModelBroker {
    /// Broker with all built-in friction laws and materials registered
    fn default() -> Self {
        let mut broker = Self::empty();
        broker.register_friction("Coulomb", |payload| {
            let model: Coulomb = serde_json::from_value(payload.clone())?;
            Ok(Box::new(Coulomb::new(model.mu)?))
        });
        broker.register_friction("VelDependent", |payload| {
            let model: VelDependent = serde_json::from_value(payload.clone())?;
            Ok(Box::new(VelDependent::new(
                model.mu_slow,
                model.mu_fast,
                model.trans_rate,
            )?))
        });
        broker.register_material("Elastic", |payload| {
            let model: Elastic = serde_json::from_value(payload.clone())?;
            Ok(Box::new(model))
        });
        broker.register_material("ElasticNoTension", |payload| {
            let model: ElasticNoTension = serde_json::from_value(payload.clone())?;
            Ok(Box::new(model))
        });
        broker
    }
}

impl ModelBroker {
    /// Broker without any registered types
    pub fn empty() -> Self {
        Self {
            friction: HashMap::new(),
            materials: HashMap::new(),
        }
    }

    pub fn register_friction(&mut self, class_tag: &str, constructor: FrictionConstructor) {
        self.friction.insert(class_tag.to_string(), constructor);
    }

    pub fn register_material(&mut self, class_tag: &str, constructor: MaterialConstructor) {
        self.materials.insert(class_tag.to_string(), constructor);
    }

    /// Build a blank friction model from its record
    pub fn friction(&self, record: &ModelRecord) -> BearingResult<Box<dyn FrictionModel>> {
        let constructor = self
            .friction
            .get(&record.class_tag)
            .ok_or_else(|| BearingError::UnknownModelType(record.class_tag.clone()))?;
        constructor(&record.payload)
    }

    /// Build a blank uniaxial material from its record
    pub fn material(&self, record: &ModelRecord) -> BearingResult<Box<dyn UniaxialMaterial>> {
        let constructor = self
            .materials
            .get(&record.class_tag)
            .ok_or_else(|| BearingError::UnknownModelType(record.class_tag.clone()))?;
        constructor(&record.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friction_round_trip() {
        let model = VelDependent::new(0.01, 0.09, 15.0).unwrap();
        let record = ModelRecord::from_friction(&model).unwrap();
        assert_eq!(record.class_tag, "VelDependent");
        let restored = ModelBroker::default().friction(&record).unwrap();
        assert_eq!(restored.class_tag(), "VelDependent");
        assert_eq!(restored.to_payload().unwrap(), record.payload);
    }

    #[test]
    fn test_material_round_trip() {
        let model = Elastic::with_damping(1.0e6, 20.0);
        let record = ModelRecord::from_material(&model).unwrap();
        let restored = ModelBroker::default().material(&record).unwrap();
        assert_eq!(restored.initial_tangent(), 1.0e6);
        assert_eq!(restored.to_payload().unwrap(), record.payload);
    }

    #[test]
    fn test_unknown_type() {
        let record = ModelRecord {
            class_tag: "Hardening".to_string(),
            payload: serde_json::Value::Null,
        };
        assert!(matches!(
            ModelBroker::default().material(&record),
            Err(BearingError::UnknownModelType(_))
        ));
        assert!(ModelBroker::empty().friction(&record).is_err());
    }

    #[test]
    fn test_record_file_round_trip() {
        let record = SliderRecord {
            tag: 3,
            nodes: [10, 11],
            config: SliderConfig::new(0.002).with_mass(5.0),
            friction: ModelRecord::from_friction(&Coulomb::new(0.05).unwrap()).unwrap(),
            materials: [
                ModelRecord::from_material(&ElasticNoTension::new(1.0e8)).unwrap(),
                ModelRecord::from_material(&Elastic::new(1.0)).unwrap(),
                ModelRecord::from_material(&Elastic::new(2.0)).unwrap(),
                ModelRecord::from_material(&Elastic::new(3.0)).unwrap(),
            ],
        };
        let path = std::env::temp_dir().join(format!("slider_record_{}.json", std::process::id()));
        record.save(&path).unwrap();
        let back = SliderRecord::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_missing_file() {
        let err = SliderRecord::load("/nonexistent/slider_record.json");
        assert!(matches!(err, Err(BearingError::IoError(_))));
    }

    #[test]
    fn test_invalid_payload_is_rejected() {
        let record = ModelRecord {
            class_tag: "Coulomb".to_string(),
            payload: serde_json::json!({ "mu": -0.2 }),
        };
        assert!(ModelBroker::default().friction(&record).is_err());
    }
}
