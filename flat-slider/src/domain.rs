//! Domain - the set of nodes an element connects to

use std::collections::HashMap;

use crate::elements::Node;
use crate::error::{BearingError, BearingResult};

/// Node container keyed by integer tag
///
/// Stands in for the structural model that owns node kinematics; the
/// bearing looks its end nodes up here during setup and state updates.
#[derive(Debug, Clone, Default)]
pub struct Domain {
    nodes: HashMap<i32, Node>,
}

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the domain
    pub fn add_node(&mut self, tag: i32, node: Node) -> BearingResult<()> {
        if self.nodes.contains_key(&tag) {
            return Err(BearingError::DuplicateNode(tag));
        }
        self.nodes.insert(tag, node);
        Ok(())
    }

    pub fn node(&self, tag: i32) -> Option<&Node> {
        self.nodes.get(&tag)
    }

    /// Look up a node, failing if it does not exist
    pub fn get(&self, tag: i32) -> BearingResult<&Node> {
        self.nodes.get(&tag).ok_or(BearingError::NodeNotFound(tag))
    }

    /// Look up a node mutably, failing if it does not exist
    pub fn get_mut(&mut self, tag: i32) -> BearingResult<&mut Node> {
        self.nodes.get_mut(&tag).ok_or(BearingError::NodeNotFound(tag))
    }

    /// Set trial displacement and velocity of a node
    pub fn set_trial_response(
        &mut self,
        tag: i32,
        disp: [f64; 6],
        vel: [f64; 6],
    ) -> BearingResult<()> {
        let node = self.get_mut(tag)?;
        node.set_trial_disp(disp);
        node.set_trial_vel(vel);
        Ok(())
    }

    /// Commit the trial response of all nodes
    pub fn commit(&mut self) {
        for node in self.nodes.values_mut() {
            node.commit();
        }
    }

    /// Discard the trial response of all nodes
    pub fn revert_to_last_commit(&mut self) {
        for node in self.nodes.values_mut() {
            node.revert_to_last_commit();
        }
    }
}
