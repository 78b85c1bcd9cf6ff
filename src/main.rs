use std::{env::args, process::exit};

use golife::{Config, Sim, View};

fn run() -> golife::Result<()> {
    let config = Config::from_args(args().skip(1))?;
    let world = config.load_world()?;

    let simulation = Sim::spawn(world, config.tick);
    let view = View::spawn(simulation.handle());

    let shown = view.join();
    simulation.handle().stop().ok();
    simulation.join()?;
    shown
}

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("[error] {err}");
        exit(1);
    }
}
