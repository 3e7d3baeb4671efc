//! Flat slider bearing - two-node 3D friction isolator
//!
//! The bearing acts in a basic system of six deformations: axial, two
//! shear, torsion and two bending rotations. The axial direction decides
//! whether the slider is in contact. In contact, the shear directions
//! follow a circular friction yield surface whose radius comes from the
//! friction law at the current normal force; the remaining directions are
//! uncoupled uniaxial materials.

use std::fmt;

use log::{debug, trace, warn};

use super::frame::OrientationFrame;
use crate::config::SliderConfig;
use crate::domain::Domain;
use crate::error::{BearingError, BearingResult};
use crate::friction::FrictionModel;
use crate::materials::{MaterialAxis, UniaxialMaterial};
use crate::math::{Mat12, Mat2, Mat6, Vec12, Vec2, Vec6};
use crate::persistence::{ModelBroker, ModelRecord, SliderRecord};
use crate::results::{BasicForces, ResponseQuery};

/// Flat slider bearing element
#[derive(Debug, Clone)]
pub struct FlatSlider {
    tag: i32,
    nodes: [i32; 2],
    config: SliderConfig,
    friction: Box<dyn FrictionModel>,
    materials: [Box<dyn UniaxialMaterial>; 4],
    frame: Option<OrientationFrame>,

    // trial state
    ul: Vec12,
    ub: Vec6,
    ub_dot: Vec6,
    ub_plastic: Vec2,
    qb: Vec6,
    kb: Mat6,
    iterations: usize,

    // committed state
    ul_committed: Vec12,
    ub_committed: Vec6,
    ub_plastic_committed: Vec2,
    qb_committed: Vec6,
    kb_committed: Mat6,

    kb_init: Mat6,
    load: Vec12,
}

impl FlatSlider {
    /// Create a new bearing holding its own copies of the sub-models
    ///
    /// # Arguments
    /// * `tag` - Element tag
    /// * `nodes` - Tags of the i and j nodes
    /// * `friction` - Friction law of the sliding surface
    /// * `materials` - Axial, torsion, bend-y and bend-z materials
    /// * `config` - Yield displacement, iteration control, mass, orientation
    pub fn new(
        tag: i32,
        nodes: [i32; 2],
        friction: &dyn FrictionModel,
        materials: [&dyn UniaxialMaterial; 4],
        config: SliderConfig,
    ) -> BearingResult<Self> {
        Self::from_parts(
            tag,
            nodes,
            config,
            friction.clone_box(),
            materials.map(|m| m.clone_box()),
        )
    }

    fn from_parts(
        tag: i32,
        nodes: [i32; 2],
        config: SliderConfig,
        friction: Box<dyn FrictionModel>,
        materials: [Box<dyn UniaxialMaterial>; 4],
    ) -> BearingResult<Self> {
        config.validate()?;
        let kb_init = initial_basic_stiffness(&materials);

        let mut slider = Self {
            tag,
            nodes,
            config,
            friction,
            materials,
            frame: None,
            ul: Vec12::zeros(),
            ub: Vec6::zeros(),
            ub_dot: Vec6::zeros(),
            ub_plastic: Vec2::zeros(),
            qb: Vec6::zeros(),
            kb: kb_init,
            iterations: 0,
            ul_committed: Vec12::zeros(),
            ub_committed: Vec6::zeros(),
            ub_plastic_committed: Vec2::zeros(),
            qb_committed: Vec6::zeros(),
            kb_committed: kb_init,
            kb_init,
            load: Vec12::zeros(),
        };
        slider.revert_to_start()?;
        Ok(slider)
    }

    // ========================
    // Setup
    // ========================

    /// Connect the element to its end nodes and build the transformations
    ///
    /// Missing nodes are reported and leave the element disconnected; it then
    /// contributes no stiffness or force. A degenerate orientation is a
    /// configuration error.
    pub fn set_domain(&mut self, domain: &Domain) -> BearingResult<()> {
        self.frame = None;
        let (i_node, j_node) = match (domain.node(self.nodes[0]), domain.node(self.nodes[1])) {
            (Some(i_node), Some(j_node)) => (i_node, j_node),
            (None, _) => return Err(self.missing_node(self.nodes[0])),
            (_, None) => return Err(self.missing_node(self.nodes[1])),
        };

        let frame = OrientationFrame::build(
            self.tag,
            &i_node.coords(),
            &j_node.coords(),
            self.config.x,
            self.config.y_axis(),
        )?;
        self.frame = Some(frame);
        Ok(())
    }

    fn missing_node(&self, node: i32) -> BearingError {
        warn!(
            "FlatSlider {}: node {} does not exist in the model",
            self.tag, node
        );
        BearingError::NodeNotFound(node)
    }

    /// True once `set_domain` succeeded
    pub fn is_connected(&self) -> bool {
        self.frame.is_some()
    }

    // ========================
    // State determination
    // ========================

    /// Determine the trial state from the current trial response of the nodes
    ///
    /// Fails if the element is not connected or the shear force iteration
    /// does not converge. A failed update leaves the committed state alone;
    /// the caller must not commit it.
    pub fn update(&mut self, domain: &Domain) -> BearingResult<()> {
        let frame = self.frame.as_ref().ok_or(BearingError::NotConnected(self.tag))?;
        let (ug, ug_dot) = self.global_response(domain)?;

        let ul = frame.tgl * ug;
        let ul_dot = frame.tgl * ug_dot;
        self.ub = frame.tlb * ul;
        self.ub_dot = frame.tlb * ul_dot;
        self.ul = ul;

        self.iterations = 0;
        self.ub_plastic = self.ub_plastic_committed;

        // 1) axial force and stiffness
        let axial = &mut self.materials[MaterialAxis::Axial.index()];
        let axial_strain_old = axial.strain();
        axial.set_trial_strain(self.ub[0], self.ub_dot[0])?;
        self.qb[0] = axial.stress();
        self.kb[(0, 0)] = axial.tangent();

        if self.qb[0] >= 0.0 {
            return self.uplift(axial_strain_old);
        }

        // 2) shear forces and stiffnesses
        self.shear_return_map()?;

        // 3) torsion and bending
        for axis in [MaterialAxis::Torsion, MaterialAxis::BendY, MaterialAxis::BendZ] {
            let dof = axis.basic_dof();
            let material = &mut self.materials[axis.index()];
            material.set_trial_strain(self.ub[dof], self.ub_dot[dof])?;
            self.qb[dof] = material.stress();
            self.kb[(dof, dof)] = material.tangent();
        }

        Ok(())
    }

    /// Global trial displacements and velocities of both nodes
    fn global_response(&self, domain: &Domain) -> BearingResult<(Vec12, Vec12)> {
        let i_node = domain.get(self.nodes[0])?;
        let j_node = domain.get(self.nodes[1])?;

        let mut ug = Vec12::zeros();
        let mut ug_dot = Vec12::zeros();
        let (d1, d2) = (i_node.trial_disp(), j_node.trial_disp());
        let (v1, v2) = (i_node.trial_vel(), j_node.trial_vel());
        for i in 0..6 {
            ug[i] = d1[i];
            ug[i + 6] = d2[i];
            ug_dot[i] = v1[i];
            ug_dot[i + 6] = v2[i];
        }
        Ok((ug, ug_dot))
    }

    /// Loss of contact: no forces, initial stiffness
    ///
    /// Shear and rotational responses are not evaluated in this state. In
    /// tension the axial material stays at the strain it held before this
    /// update, i.e. the last strain in contact.
    fn uplift(&mut self, axial_strain_old: f64) -> BearingResult<()> {
        self.kb = self.kb_init;
        if self.qb[0] > 0.0 {
            let axial = &mut self.materials[MaterialAxis::Axial.index()];
            axial.set_trial_strain(axial_strain_old, 0.0)?;
            self.kb[(0, 0)] *= f64::EPSILON;
        }
        debug!(
            "FlatSlider {}: uplift with axial force {:e}",
            self.tag, self.qb[0]
        );
        self.qb = Vec6::zeros();
        Ok(())
    }

    /// Solve for the shear forces on the friction yield surface
    ///
    /// The normal force includes the moment of the shear forces through the
    /// rotations of node i, so yield force and shear forces are found by
    /// fixed-point iteration starting from the committed shear forces.
    fn shear_return_map(&mut self) -> BearingResult<()> {
        let uy = self.config.yield_displacement;
        let tol = self.config.tolerance;
        let max_iter = self.config.max_iterations;

        let speed = (self.ub_dot[1].powi(2) + self.ub_dot[2].powi(2)).sqrt();
        let (rot_y, rot_z) = (self.ul[4], self.ul[5]);
        let shear = Vec2::new(self.ub[1], self.ub[2]);
        let plastic_committed = self.ub_plastic_committed;

        let mut q = Vec2::new(self.qb_committed[1], self.qb_committed[2]);
        let mut residual = f64::INFINITY;

        for iter in 1..=max_iter {
            let q_old = q;

            // normal and friction (yield) force
            let normal = -self.qb[0] - q[0] * rot_z + q[1] * rot_y;
            self.friction.set_trial(normal, speed)?;
            let q_yield = self.friction.friction_force();

            // elastic stiffness reaches the yield force at the yield displacement
            let k0 = q_yield / uy;

            let q_trial = k0 * (shear - plastic_committed);
            let q_trial_norm = q_trial.norm();
            let yield_fn = q_trial_norm - q_yield;

            let (q_surface, k_shear) = if yield_fn <= 0.0 {
                self.ub_plastic = plastic_committed;
                (q_trial, Mat2::from_diagonal_element(k0))
            } else {
                let d_gamma = yield_fn / k0;
                let direction = q_trial / q_trial_norm;
                self.ub_plastic = plastic_committed + d_gamma * direction;

                let c = q_yield * k0 / q_trial_norm.powi(3);
                #[rustfmt::skip]
                let k_shear = Mat2::new(
                    c * q_trial[1].powi(2),      -c * q_trial[0] * q_trial[1],
                    -c * q_trial[0] * q_trial[1], c * q_trial[0].powi(2),
                );
                (q_yield * direction, k_shear)
            };

            q = Vec2::new(q_surface[0] - normal * rot_z, q_surface[1] + normal * rot_y);
            self.kb.fixed_view_mut::<2, 2>(1, 1).copy_from(&k_shear);
            self.iterations = iter;

            residual = (q - q_old).norm();
            trace!(
                "FlatSlider {}: iteration {} normal {:e} yield {:e} residual {:e}",
                self.tag,
                iter,
                normal,
                q_yield,
                residual
            );
            if residual < tol {
                self.qb[1] = q[0];
                self.qb[2] = q[1];
                return Ok(());
            }
        }

        self.qb[1] = q[0];
        self.qb[2] = q[1];
        warn!(
            "FlatSlider {}: did not find the shear force after {} iterations and norm {:e}",
            self.tag, max_iter, residual
        );
        Err(BearingError::ConvergenceFailed {
            element: self.tag,
            iterations: max_iter,
            residual,
        })
    }

    // ========================
    // Stiffness
    // ========================

    /// Tangent stiffness in the global system
    pub fn tangent_stiffness(&self) -> Mat12 {
        self.assemble_stiffness(&self.kb, &self.qb)
    }

    /// Initial stiffness in the global system, without geometric terms
    pub fn initial_stiffness(&self) -> Mat12 {
        match &self.frame {
            Some(frame) => {
                let kl = frame.tlb.transpose() * self.kb_init * frame.tlb;
                frame.tgl.transpose() * kl * frame.tgl
            }
            None => Mat12::zeros(),
        }
    }

    /// Tangent stiffness as of the last commit
    pub fn committed_stiffness(&self) -> Mat12 {
        self.assemble_stiffness(&self.kb_committed, &self.qb_committed)
    }

    fn assemble_stiffness(&self, kb: &Mat6, qb: &Vec6) -> Mat12 {
        let Some(frame) = &self.frame else {
            return Mat12::zeros();
        };

        // basic to local
        let mut kl = frame.tlb.transpose() * kb * frame.tlb;

        // geometric stiffness, node i only
        kl[(5, 1)] -= qb[0];
        kl[(5, 7)] += qb[0];
        kl[(4, 2)] += qb[0];
        kl[(4, 8)] -= qb[0];
        kl[(3, 1)] += qb[2];
        kl[(3, 2)] -= qb[1];
        kl[(3, 7)] -= qb[2];
        kl[(3, 8)] += qb[1];

        // local to global
        frame.tgl.transpose() * kl * frame.tgl
    }

    /// Lumped mass matrix, half the mass on the translations of each node
    pub fn mass_matrix(&self) -> Mat12 {
        let mut m = Mat12::zeros();
        if self.config.mass == 0.0 {
            return m;
        }
        let half = 0.5 * self.config.mass;
        for i in 0..3 {
            m[(i, i)] = half;
            m[(i + 6, i + 6)] = half;
        }
        m
    }

    /// Rayleigh damping matrix
    pub fn damping_matrix(&self) -> Mat12 {
        let d = &self.config.damping;
        let mut c = Mat12::zeros();
        if d.alpha_m != 0.0 {
            c += self.mass_matrix() * d.alpha_m;
        }
        if d.beta_k != 0.0 {
            c += self.tangent_stiffness() * d.beta_k;
        }
        if d.beta_k0 != 0.0 {
            c += self.initial_stiffness() * d.beta_k0;
        }
        if d.beta_kc != 0.0 {
            c += self.committed_stiffness() * d.beta_kc;
        }
        c
    }

    // ========================
    // Forces
    // ========================

    /// Resisting force in the local system, including P-Delta moments and
    /// V-Delta torsion
    pub fn local_force(&self) -> Vec12 {
        let Some(frame) = &self.frame else {
            return Vec12::zeros();
        };
        let qb = &self.qb;
        let ul = &self.ul;

        let mut ql = frame.tlb.transpose() * qb;

        // P-Delta moments, node i only
        ql[5] += qb[0] * (ul[7] - ul[1]);
        ql[4] -= qb[0] * (ul[8] - ul[2]);

        // V-Delta torsion
        ql[3] += qb[1] * (ul[8] - ul[2]) - qb[2] * (ul[7] - ul[1]);

        ql
    }

    /// Resisting force in the global system, minus the element load
    pub fn resisting_force(&self) -> Vec12 {
        match &self.frame {
            Some(frame) => frame.tgl.transpose() * self.local_force() - self.load,
            None => Vec12::zeros(),
        }
    }

    /// Resisting force including damping and inertia forces
    pub fn resisting_force_inc_inertia(&self, domain: &Domain) -> BearingResult<Vec12> {
        if self.frame.is_none() {
            return Ok(Vec12::zeros());
        }
        let mut force = self.resisting_force();

        if self.config.damping.is_active() {
            let (_, ug_dot) = self.global_response(domain)?;
            force += self.damping_matrix() * ug_dot;
        }

        if self.config.mass != 0.0 {
            let a1 = domain.get(self.nodes[0])?.trial_accel();
            let a2 = domain.get(self.nodes[1])?.trial_accel();
            let half = 0.5 * self.config.mass;
            for i in 0..3 {
                force[i] += half * a1[i];
                force[i + 6] += half * a2[i];
            }
        }
        Ok(force)
    }

    /// Clear the element load vector
    pub fn zero_load(&mut self) {
        self.load = Vec12::zeros();
    }

    /// Add `-M * R * accel` to the element load for a uniform ground acceleration
    pub fn add_inertia_load_to_unbalance(&mut self, accel: &[f64; 6]) {
        if self.config.mass == 0.0 {
            return;
        }
        let half = 0.5 * self.config.mass;
        for i in 0..3 {
            self.load[i] -= half * accel[i];
            self.load[i + 6] -= half * accel[i];
        }
    }

    // ========================
    // State lifecycle
    // ========================

    /// Accept the trial state
    pub fn commit(&mut self) -> BearingResult<()> {
        self.ub_plastic_committed = self.ub_plastic;
        self.ul_committed = self.ul;
        self.ub_committed = self.ub;
        self.qb_committed = self.qb;
        self.kb_committed = self.kb;

        self.friction.commit()?;
        for material in self.materials.iter_mut() {
            material.commit()?;
        }
        Ok(())
    }

    /// Discard the trial state
    pub fn revert_to_last_commit(&mut self) -> BearingResult<()> {
        self.friction.revert_to_last_commit()?;
        for material in self.materials.iter_mut() {
            material.revert_to_last_commit()?;
        }

        self.ub_plastic = self.ub_plastic_committed;
        self.ul = self.ul_committed;
        self.ub = self.ub_committed;
        self.qb = self.qb_committed;
        self.kb = self.kb_committed;
        Ok(())
    }

    /// Reset all history to the initial elastic state
    pub fn revert_to_start(&mut self) -> BearingResult<()> {
        self.ul = Vec12::zeros();
        self.ub = Vec6::zeros();
        self.ub_dot = Vec6::zeros();
        self.ub_plastic = Vec2::zeros();
        self.qb = Vec6::zeros();
        self.kb = self.kb_init;
        self.iterations = 0;

        self.ul_committed = Vec12::zeros();
        self.ub_committed = Vec6::zeros();
        self.ub_plastic_committed = Vec2::zeros();
        self.qb_committed = Vec6::zeros();
        self.kb_committed = self.kb_init;

        self.friction.revert_to_start()?;
        for material in self.materials.iter_mut() {
            material.revert_to_start()?;
        }
        Ok(())
    }

    // ========================
    // Results
    // ========================

    pub fn tag(&self) -> i32 {
        self.tag
    }

    pub fn nodes(&self) -> [i32; 2] {
        self.nodes
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn frame(&self) -> Option<&OrientationFrame> {
        self.frame.as_ref()
    }

    pub fn friction(&self) -> &dyn FrictionModel {
        self.friction.as_ref()
    }

    pub fn material(&self, axis: MaterialAxis) -> &dyn UniaxialMaterial {
        self.materials[axis.index()].as_ref()
    }

    /// Force in the basic system [N, Vy, Vz, T, My, Mz]
    pub fn basic_force(&self) -> Vec6 {
        self.qb
    }

    pub fn basic_forces(&self) -> BasicForces {
        BasicForces::from_vector(&self.qb)
    }

    /// Stiffness in the basic system
    pub fn basic_stiffness(&self) -> Mat6 {
        self.kb
    }

    pub fn initial_basic_stiffness(&self) -> Mat6 {
        self.kb_init
    }

    pub fn basic_deformation(&self) -> Vec6 {
        self.ub
    }

    pub fn local_displacement(&self) -> Vec12 {
        self.ul
    }

    /// Trial plastic shear displacement
    pub fn plastic_displacement(&self) -> Vec2 {
        self.ub_plastic
    }

    pub fn committed_plastic_displacement(&self) -> Vec2 {
        self.ub_plastic_committed
    }

    /// Passes of the shear iteration in the last update (0 when uplifted)
    pub fn last_iteration_count(&self) -> usize {
        self.iterations
    }

    /// Evaluate a named response
    pub fn response(&self, query: &ResponseQuery) -> Option<Vec<f64>> {
        match query {
            ResponseQuery::GlobalForce => Some(self.resisting_force().as_slice().to_vec()),
            ResponseQuery::LocalForce => Some(self.local_force().as_slice().to_vec()),
            ResponseQuery::BasicForce => Some(self.qb.as_slice().to_vec()),
            ResponseQuery::LocalDisplacement => Some(self.ul.as_slice().to_vec()),
            ResponseQuery::BasicDeformation => Some(self.ub.as_slice().to_vec()),
            ResponseQuery::Material { axis, name } => self
                .material(*axis)
                .response(name)
                .map(|value| vec![value]),
        }
    }

    /// Deformed end point coordinates for line rendering
    pub fn display_coords(
        &self,
        domain: &Domain,
        factor: f64,
    ) -> BearingResult<([f64; 3], [f64; 3])> {
        let deformed = |tag: i32| -> BearingResult<[f64; 3]> {
            let node = domain.get(tag)?;
            let (crd, disp) = (node.coords(), node.disp());
            Ok([
                crd[0] + factor * disp[0],
                crd[1] + factor * disp[1],
                crd[2] + factor * disp[2],
            ])
        };
        Ok((deformed(self.nodes[0])?, deformed(self.nodes[1])?))
    }

    // ========================
    // Persistence
    // ========================

    /// Externalize the element parameters and sub-models
    pub fn to_record(&self) -> BearingResult<SliderRecord> {
        Ok(SliderRecord {
            tag: self.tag,
            nodes: self.nodes,
            config: self.config.clone(),
            friction: ModelRecord::from_friction(self.friction.as_ref())?,
            materials: [
                ModelRecord::from_material(self.material(MaterialAxis::Axial))?,
                ModelRecord::from_material(self.material(MaterialAxis::Torsion))?,
                ModelRecord::from_material(self.material(MaterialAxis::BendY))?,
                ModelRecord::from_material(self.material(MaterialAxis::BendZ))?,
            ],
        })
    }

    /// Rebuild an element from a record in its initial state
    ///
    /// The element still has to be connected with `set_domain`.
    pub fn from_record(record: &SliderRecord, broker: &ModelBroker) -> BearingResult<Self> {
        let friction = broker.friction(&record.friction)?;
        let [axial, torsion, bend_y, bend_z] = &record.materials;
        let materials = [
            broker.material(axial)?,
            broker.material(torsion)?,
            broker.material(bend_y)?,
            broker.material(bend_z)?,
        ];
        Self::from_parts(
            record.tag,
            record.nodes,
            record.config.clone(),
            friction,
            materials,
        )
    }

    pub fn to_json(&self) -> BearingResult<String> {
        self.to_record()?.to_json()
    }

    pub fn from_json(json: &str, broker: &ModelBroker) -> BearingResult<Self> {
        Self::from_record(&SliderRecord::from_json(json)?, broker)
    }
}

/// Diagonal basic stiffness from the initial tangents of the materials
///
/// The shear directions get a vanishing fraction of the axial stiffness so
/// the matrix is not singular.
fn initial_basic_stiffness(materials: &[Box<dyn UniaxialMaterial>; 4]) -> Mat6 {
    let mut kb = Mat6::zeros();
    kb[(0, 0)] = materials[MaterialAxis::Axial.index()].initial_tangent();
    kb[(1, 1)] = kb[(0, 0)] * f64::EPSILON;
    kb[(2, 2)] = kb[(1, 1)];
    for axis in [MaterialAxis::Torsion, MaterialAxis::BendY, MaterialAxis::BendZ] {
        let dof = axis.basic_dof();
        kb[(dof, dof)] = materials[axis.index()].initial_tangent();
    }
    kb
}

impl fmt::Display for FlatSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Element: {}  type: FlatSlider  iNode: {}  jNode: {}",
            self.tag, self.nodes[0], self.nodes[1]
        )?;
        writeln!(f, "  FrictionModel: {}", self.friction.class_tag())?;
        writeln!(f, "  uy: {}", self.config.yield_displacement)?;
        for axis in MaterialAxis::ALL {
            writeln!(
                f,
                "  Material {}: {}",
                axis.label(),
                self.material(axis).class_tag()
            )?;
        }
        writeln!(
            f,
            "  mass: {}  maxIter: {}  tol: {}",
            self.config.mass, self.config.max_iterations, self.config.tolerance
        )?;
        write!(f, "  resisting force: {:?}", self.resisting_force().as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Node;
    use crate::friction::Coulomb;
    use crate::materials::{Elastic, ElasticNoTension};
    use approx::assert_relative_eq;

    const K_AXIAL: f64 = 1.0e9;

    fn domain(length: f64) -> Domain {
        let mut domain = Domain::new();
        domain.add_node(1, Node::new(0.0, 0.0, 0.0)).unwrap();
        domain.add_node(2, Node::new(length, 0.0, 0.0)).unwrap();
        domain
    }

    fn slider(config: SliderConfig) -> FlatSlider {
        let friction = Coulomb::new(0.1).unwrap();
        let axial = ElasticNoTension::new(K_AXIAL);
        let rot = Elastic::new(100.0);
        FlatSlider::new(1, [1, 2], &friction, [&axial, &rot, &rot, &rot], config).unwrap()
    }

    fn set_j(domain: &mut Domain, disp: [f64; 6]) {
        domain.set_trial_response(2, disp, [0.0; 6]).unwrap();
    }

    #[test]
    fn test_initial_basic_stiffness() {
        let s = slider(SliderConfig::new(0.01));
        let kb = s.initial_basic_stiffness();
        assert_eq!(kb[(0, 0)], K_AXIAL);
        assert_eq!(kb[(1, 1)], K_AXIAL * f64::EPSILON);
        assert_eq!(kb[(2, 2)], K_AXIAL * f64::EPSILON);
        assert_eq!(kb[(3, 3)], 100.0);
        assert_eq!(kb[(0, 1)], 0.0);
        assert_eq!(s.basic_stiffness(), kb);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let friction = Coulomb::new(0.1).unwrap();
        let mat = Elastic::new(1.0);
        let result = FlatSlider::new(
            1,
            [1, 2],
            &friction,
            [&mat, &mat, &mat, &mat],
            SliderConfig::new(-0.01),
        );
        assert!(matches!(result, Err(BearingError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_node_disconnects() {
        let mut s = slider(SliderConfig::new(0.01));
        let mut domain = Domain::new();
        domain.add_node(1, Node::default()).unwrap();
        assert!(matches!(
            s.set_domain(&domain),
            Err(BearingError::NodeNotFound(2))
        ));
        assert!(!s.is_connected());
        assert!(matches!(s.update(&domain), Err(BearingError::NotConnected(1))));
        assert_eq!(s.tangent_stiffness(), Mat12::zeros());
        assert_eq!(s.resisting_force(), Vec12::zeros());
    }

    #[test]
    fn test_elastic_shear() {
        let mut domain = domain(0.0);
        let mut s = slider(SliderConfig::new(0.01).with_x_axis([1.0, 0.0, 0.0]));
        s.set_domain(&domain).unwrap();

        // 1 mm compression -> N = 1e6, yield force 1e5, k0 = 1e7
        set_j(&mut domain, [-0.001, 0.004, 0.0, 0.0, 0.0, 0.0]);
        s.update(&domain).unwrap();

        assert_relative_eq!(s.basic_force()[0], -1.0e6, max_relative = 1e-12);
        assert_relative_eq!(s.basic_force()[1], 1.0e7 * 0.004, max_relative = 1e-12);
        assert_eq!(s.basic_force()[2], 0.0);
        assert_eq!(s.plastic_displacement(), Vec2::zeros());
        assert_relative_eq!(s.basic_stiffness()[(1, 1)], 1.0e7, max_relative = 1e-12);
        assert_eq!(s.basic_stiffness()[(1, 2)], 0.0);
    }

    #[test]
    fn test_plastic_shear_on_yield_surface() {
        let mut domain = domain(0.0);
        let mut s = slider(SliderConfig::new(0.01).with_x_axis([1.0, 0.0, 0.0]));
        s.set_domain(&domain).unwrap();

        set_j(&mut domain, [-0.001, 0.03, 0.04, 0.0, 0.0, 0.0]);
        s.update(&domain).unwrap();

        let q_yield = 1.0e5;
        let k0 = q_yield / 0.01;
        let q = s.basic_forces();
        assert_relative_eq!(q.shear_magnitude(), q_yield, max_relative = 1e-12);
        assert_relative_eq!(q.shear_y / q.shear_z, 0.75, max_relative = 1e-12);

        let trial_norm = k0 * 0.05;
        let d_gamma = (trial_norm - q_yield) / k0;
        let up = s.plastic_displacement();
        assert_relative_eq!(up[0], d_gamma * 0.6, max_relative = 1e-12);
        assert_relative_eq!(up[1], d_gamma * 0.8, max_relative = 1e-12);

        // tangent is singular along the trial direction
        let k = s.basic_stiffness().fixed_view::<2, 2>(1, 1).into_owned();
        let along = k * Vec2::new(0.6, 0.8);
        assert_relative_eq!(along.norm(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(k[(0, 1)], k[(1, 0)]);
    }

    #[test]
    fn test_uplift_zeroes_force() {
        let mut domain = domain(0.0);
        let mut s = slider(SliderConfig::new(0.01).with_x_axis([1.0, 0.0, 0.0]));
        s.set_domain(&domain).unwrap();

        set_j(&mut domain, [0.002, 0.05, 0.0, 0.01, 0.0, 0.0]);
        s.update(&domain).unwrap();
        assert_eq!(s.basic_force(), Vec6::zeros());
        assert_eq!(s.last_iteration_count(), 0);
        // torsion material was not evaluated
        assert_eq!(s.material(MaterialAxis::Torsion).strain(), 0.0);
        assert_eq!(s.basic_stiffness(), s.initial_basic_stiffness());
    }

    #[test]
    fn test_uplift_with_tension_scales_axial_stiffness() {
        let mut domain = domain(0.0);
        let friction = Coulomb::new(0.1).unwrap();
        let axial = Elastic::new(K_AXIAL);
        let rot = Elastic::new(100.0);
        let mut s = FlatSlider::new(
            1,
            [1, 2],
            &friction,
            [&axial, &rot, &rot, &rot],
            SliderConfig::new(0.01).with_x_axis([1.0, 0.0, 0.0]),
        )
        .unwrap();
        s.set_domain(&domain).unwrap();

        set_j(&mut domain, [0.002, 0.0, 0.0, 0.0, 0.0, 0.0]);
        s.update(&domain).unwrap();

        let mut expected = s.initial_basic_stiffness();
        expected[(0, 0)] *= f64::EPSILON;
        assert_eq!(s.basic_stiffness(), expected);
        assert_eq!(s.basic_force(), Vec6::zeros());
        // axial material held at its strain before the update
        assert_eq!(s.material(MaterialAxis::Axial).strain(), 0.0);
    }

    #[test]
    fn test_axial_strain_held_through_uplift_excursion() {
        let mut domain = domain(0.0);
        let friction = Coulomb::new(0.1).unwrap();
        let axial = Elastic::new(K_AXIAL);
        let rot = Elastic::new(100.0);
        let mut s = FlatSlider::new(
            1,
            [1, 2],
            &friction,
            [&axial, &rot, &rot, &rot],
            SliderConfig::new(0.01).with_x_axis([1.0, 0.0, 0.0]),
        )
        .unwrap();
        s.set_domain(&domain).unwrap();

        // contact, then several committed steps of growing tension
        for ux in [-0.001, 0.002, 0.003, 0.004] {
            set_j(&mut domain, [ux, 0.0, 0.0, 0.0, 0.0, 0.0]);
            s.update(&domain).unwrap();
            // repeated update in the same step does not move it either
            s.update(&domain).unwrap();
            s.commit().unwrap();
            domain.commit();
            assert_eq!(s.material(MaterialAxis::Axial).strain(), -0.001);
        }
        assert_eq!(s.basic_force(), Vec6::zeros());

        // back in contact the material follows the deformation again
        set_j(&mut domain, [-0.002, 0.0, 0.0, 0.0, 0.0, 0.0]);
        s.update(&domain).unwrap();
        assert_eq!(s.material(MaterialAxis::Axial).strain(), -0.002);
        assert_relative_eq!(s.basic_force()[0], K_AXIAL * -0.002);
    }

    #[test]
    fn test_mass_matrix_split() {
        let s = slider(SliderConfig::new(0.01).with_mass(4.0));
        let m = s.mass_matrix();
        for i in 0..3 {
            assert_eq!(m[(i, i)], 2.0);
            assert_eq!(m[(i + 6, i + 6)], 2.0);
            assert_eq!(m[(i + 3, i + 3)], 0.0);
        }
        assert_eq!(m.sum(), 12.0);
    }

    #[test]
    fn test_inertia_load() {
        let mut s = slider(SliderConfig::new(0.01).with_mass(2.0));
        let domain = domain(1.0);
        s.set_domain(&domain).unwrap();
        s.add_inertia_load_to_unbalance(&[3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let f = s.resisting_force();
        assert_relative_eq!(f[0], 3.0);
        assert_relative_eq!(f[6], 3.0);
        s.zero_load();
        assert_eq!(s.resisting_force(), Vec12::zeros());
    }

    #[test]
    fn test_display_summary() {
        let s = slider(SliderConfig::new(0.01));
        let text = s.to_string();
        assert!(text.contains("type: FlatSlider"));
        assert!(text.contains("FrictionModel: Coulomb"));
        assert!(text.contains("Material ux: ElasticNoTension"));
    }

    #[test]
    fn test_display_coords() {
        let mut domain = domain(1.0);
        let s = {
            let mut s = slider(SliderConfig::new(0.01));
            s.set_domain(&domain).unwrap();
            s
        };
        set_j(&mut domain, [0.0, 0.5, 0.0, 0.0, 0.0, 0.0]);
        domain.commit();
        let (a, b) = s.display_coords(&domain, 2.0).unwrap();
        assert_eq!(a, [0.0, 0.0, 0.0]);
        assert_eq!(b, [1.0, 1.0, 0.0]);
    }
}
