//! Merging demo
//!
//! Generates the default world and runs it until only a few bodies are
//! left, printing every tick on which merges happened.
//!
//! Run with: cargo run --package gravity --example collision_demo

use gravity::config::SimulationConfig;
use gravity::world::World;

fn main() {
    let config = SimulationConfig::default().with_seed(2024);
    let mut world = match World::generate(&config) {
        Ok(world) => world,
        Err(err) => {
            eprintln!("bad config: {err}");
            return;
        }
    };

    println!("Merging demo: {} planets + anchor", config.body_count);
    println!("{}", "=".repeat(60));
    println!(
        "Start: {} live, {:.2e} absorbed by the anchor",
        world.live_count(),
        world.anchor_absorbed_mass()
    );

    let mut live = world.live_count();
    for _ in 0..5000 {
        world.tick(config.timestep);

        if world.live_count() != live {
            live = world.live_count();
            println!(
                "t = {:6.0}: {:2} live, mass {:.4e}, absorbed {:.4e}",
                world.time,
                live,
                world.total_live_mass(),
                world.anchor_absorbed_mass()
            );
        }
        if live <= 3 {
            break;
        }
    }

    println!("\nSurvivors:");
    for body in world.snapshot().filter(|b| b.alive) {
        println!(
            "  #{:2}{} at ({:8.2}, {:8.2}), radius {:.2}",
            body.id.0,
            if body.anchor { " (anchor)" } else { "" },
            body.x,
            body.y,
            body.radius
        );
    }
    println!("\nMass accounted for: {:.6e}", world.accounted_mass());
}
