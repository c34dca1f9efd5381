//! Domino Sandbox
//!
//! Run with: `cargo run --bin domino_sandbox -- [scenario.json] [--config config.json]`
//!
//! Replays a scripted scenario against the headless backend: surfaces appear,
//! the camera sweeps across them while the pointer traces a path, then the
//! first domino is pushed and physics runs. Without a scenario file the
//! built-in table trace is used.
//!
//! Set `RUST_LOG=debug` to see every placement.

use std::error::Error;
use std::path::PathBuf;

use domino_trail_engine::backend::HeadlessBackend;
use domino_trail_engine::game::{DominoConfig, InteractionController, Scenario};
use domino_trail_engine::logging;

#[derive(Debug, Default)]
struct Args {
    scenario: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
            _ if args.scenario.is_none() => args.scenario = Some(PathBuf::from(arg)),
            _ => return Err(format!("unexpected argument {arg}")),
        }
    }
    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init(logging::default_level());

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => DominoConfig::load(path)?,
        None => DominoConfig::default(),
    };
    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => {
            log::info!("No scenario given, using the built-in table trace");
            Scenario::built_in()
        }
    };

    let mut controller = InteractionController::new(HeadlessBackend::new(), config);
    controller.resume();
    let report = scenario.run(&mut controller);

    log::info!(
        "Placed {} dominoes on {} surfaces, {} push(es), {} cleared, {} physics steps",
        report.placed,
        controller.surfaces().len(),
        report.pushes,
        report.cleared,
        report.physics_steps
    );
    if let Some(first) = controller.ledger().first() {
        log::info!(
            "First domino at ({:.3}, {:.3}, {:.3})",
            first.position.x,
            first.position.y,
            first.position.z
        );
    }
    let moving = controller
        .ledger()
        .nodes()
        .filter_map(|id| controller.backend().body(id))
        .filter(|body| body.velocity.length() > 1e-3 || !body.resting)
        .count();
    log::info!("{moving} dominoes still moving");

    let backend = controller.shutdown();
    log::debug!("{} nodes left in the scene", backend.node_count());
    Ok(())
}
