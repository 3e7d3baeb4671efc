//! Flat Slider Example - Cyclic shear test of a single bearing

use anyhow::Context;
use flat_slider::prelude::*;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Flat Slider Example: Cyclic Shear Test ===\n");

    // Vertical bearing, zero length
    //
    //     N2  (top plate, displaced)
    //     ==
    //     N1  (bottom plate, fixed)
    //
    let mut domain = Domain::new();
    domain.add_node(1, Node::new(0.0, 0.0, 0.0))?;
    domain.add_node(2, Node::new(0.0, 0.0, 0.0))?;

    let friction = VelDependent::new(0.06, 0.10, 20.0)?;
    let axial = ElasticNoTension::new(2.0e9);
    let rotation = Elastic::new(1.0e4);
    let config = SliderConfig::new(0.001)
        .with_x_axis([0.0, 0.0, 1.0])
        .with_y_axis([1.0, 0.0, 0.0])
        .with_mass(50.0);

    let mut bearing = FlatSlider::new(
        1,
        [1, 2],
        &friction,
        [&axial, &rotation, &rotation, &rotation],
        config,
    )?;
    bearing
        .set_domain(&domain)
        .context("failed to connect the bearing")?;
    println!("{bearing}\n");

    // 1 MN gravity load -> 0.5 mm axial shortening
    let axial_disp = -1.0e6 / 2.0e9;
    let amplitude = 0.05;
    let steps = 80;
    let dt = 0.05;

    println!(
        "{:>6} {:>10} {:>10} {:>12} {:>12}",
        "step", "ux [mm]", "speed", "Vx [kN]", "N [kN]"
    );

    let mut previous = 0.0;
    for step in 0..=steps {
        let phase = step as f64 / steps as f64 * 2.0 * std::f64::consts::PI;
        let ux = amplitude * phase.sin();
        let vx = (ux - previous) / dt;
        previous = ux;

        domain.set_trial_response(
            2,
            [ux, 0.0, axial_disp, 0.0, 0.0, 0.0],
            [vx, 0.0, 0.0, 0.0, 0.0, 0.0],
        )?;
        bearing
            .update(&domain)
            .with_context(|| format!("state determination failed at step {step}"))?;
        bearing.commit()?;
        domain.commit();

        let forces = bearing.basic_forces();
        if step % 5 == 0 {
            println!(
                "{:>6} {:>10.3} {:>10.4} {:>12.3} {:>12.3}",
                step,
                ux * 1000.0,
                vx,
                forces.shear_y / 1000.0,
                -forces.axial / 1000.0
            );
        }
        info!(
            "step {step}: {} iterations, plastic displacement {:?}",
            bearing.last_iteration_count(),
            bearing.committed_plastic_displacement().as_slice()
        );
    }

    let global = bearing
        .response(&ResponseQuery::GlobalForce)
        .context("global force response")?;
    println!("\nFinal global force at node 2:");
    for (label, value) in ResponseQuery::GlobalForce
        .labels()
        .iter()
        .zip(global.iter())
        .skip(6)
    {
        println!("  {label}: {:.3} kN", value / 1000.0);
    }

    println!("\nBearing record:\n{}", bearing.to_json()?);
    println!("\n=== Test Complete ===");
    Ok(())
}
