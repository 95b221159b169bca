use ert_physics::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 24 electrodes at 2 m spacing on top of a 24 × 15 node section.
    let xs = linspace(0.0, 46.0, 24);
    let ys = linspace(0.0, -14.0, 15);
    let grid = FeGrid::rectangular(&xs, &ys)?;
    let configs = dipole_dipole(24, 0, 6)?;

    let config = ForwardConfig::homogeneous("dipole-dipole", 100.0)
        .with_parallel(true)
        .with_geometric_factors(true);
    let mut engine = AnalyticForward::new(grid, configs);
    engine.run(&config)?;

    let result = engine.result();
    let rho_a = result.apparent_resistivities().transpose()?.unwrap_or_default();

    println!("a, b, m, n, R(ohm), K(m), rho_a(ohm m)");
    let factors = result.geometric_factors.as_deref().unwrap_or_default();
    for (i, c) in engine.configs().iter().enumerate() {
        println!(
            "{}, {}, {}, {}, {:.6e}, {:.6e}, {:.4}",
            c.a(),
            c.b(),
            c.m(),
            c.n(),
            result.voltages[i],
            factors.get(i).copied().unwrap_or(f64::NAN),
            rho_a.get(i).copied().unwrap_or(f64::NAN),
        );
    }
    Ok(())
}
