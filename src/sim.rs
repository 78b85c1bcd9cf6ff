use std::{
    sync::mpsc::{self, TryRecvError},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use log::{debug, info};

use crate::{Error, Result, World};

pub enum SimCmd {
    Snapshot(mpsc::Sender<Status>),
    Load(World),
    SetTick(Duration),
    TogglePause,
    Stop,
}

/// what the simulation looks like at the moment it was asked.
#[derive(Debug, Clone)]
pub struct Status {
    pub world: World,
    pub tick: Duration,
    pub paused: bool,
}

#[derive(Debug, Clone)]
pub struct SimHandle {
    sender: mpsc::Sender<SimCmd>,
}

impl SimHandle {
    fn send(&self, cmd: SimCmd) -> Result<()> {
        self.sender.send(cmd).map_err(|_| Error::SimulationStopped)
    }

    pub fn snapshot(&self) -> Result<Status> {
        let (sender, receiver) = mpsc::channel();
        self.send(SimCmd::Snapshot(sender))?;
        receiver.recv().map_err(|_| Error::SimulationStopped)
    }

    pub fn load(&self, world: World) -> Result<()> {
        self.send(SimCmd::Load(world))
    }

    pub fn set_tick(&self, tick: Duration) -> Result<()> {
        self.send(SimCmd::SetTick(tick))
    }

    pub fn toggle_pause(&self) -> Result<()> {
        self.send(SimCmd::TogglePause)
    }

    pub fn stop(&self) -> Result<()> {
        self.send(SimCmd::Stop)
    }
}

#[derive(Debug)]
pub struct Sim {
    thread: JoinHandle<()>,
    sender: mpsc::Sender<SimCmd>,
}

impl Sim {
    pub fn spawn(world: World, tick: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let state = State {
            world,
            tick,
            paused: false,
        };
        let thread = thread::spawn(move || sim_loop(receiver, state));
        Self { sender, thread }
    }

    pub fn handle(&self) -> SimHandle {
        let sender = self.sender.clone();
        SimHandle { sender }
    }

    pub fn join(self) -> Result<()> {
        drop(self.sender);
        self.thread
            .join()
            .map_err(|_| Error::ThreadPanicked("simulation"))
    }
}

struct State {
    world: World,
    tick: Duration,
    paused: bool,
}

impl State {
    fn status(&self) -> Status {
        Status {
            world: self.world.clone(),
            tick: self.tick,
            paused: self.paused,
        }
    }
}

const EVT_CHECK_TIMEOUT: Duration = Duration::from_millis(10);

fn sim_loop(receiver: mpsc::Receiver<SimCmd>, mut state: State) {
    info!("simulation started with {} live cells", state.world.len());
    let mut last_update = Instant::now();

    loop {
        match receiver.try_recv() {
            Ok(SimCmd::Snapshot(sender)) => {
                // the asker may have given up waiting
                let _ = sender.send(state.status());
            }
            Ok(SimCmd::Load(world)) => {
                debug!("loading a world with {} live cells", world.len());
                state.world = world;
                last_update = Instant::now();
            }
            Ok(SimCmd::SetTick(tick)) => {
                debug!("tick set to {tick:?}");
                state.tick = tick;
            }
            Ok(SimCmd::TogglePause) => {
                state.paused = !state.paused;
                debug!("paused: {}", state.paused);
            }
            Ok(SimCmd::Stop) | Err(TryRecvError::Disconnected) => break,
            Err(TryRecvError::Empty) => (),
        }

        if !state.paused && last_update.elapsed() > state.tick {
            state.world = state.world.next();
            last_update = Instant::now();
        }

        thread::sleep(EVT_CHECK_TIMEOUT);
    }

    info!("simulation stopped at generation {}", state.world.age());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::GLIDER;

    #[test]
    fn runs_and_stops() {
        let sim = Sim::spawn(GLIDER.world(), Duration::from_millis(1));
        let handle = sim.handle();
        thread::sleep(Duration::from_millis(200));
        let status = handle.snapshot().unwrap();
        assert!(status.world.age() > 0);
        assert_eq!(status.world.len(), 5);
        handle.stop().unwrap();
        sim.join().unwrap();
        assert!(matches!(handle.snapshot(), Err(Error::SimulationStopped)));
    }

    #[test]
    fn paused_simulation_keeps_its_world() {
        let sim = Sim::spawn(World::new(), Duration::from_secs(3600));
        let handle = sim.handle();
        handle.toggle_pause().unwrap();
        handle.set_tick(Duration::from_millis(1)).unwrap();
        handle.load(GLIDER.world()).unwrap();
        thread::sleep(Duration::from_millis(50));

        let status = handle.snapshot().unwrap();
        assert!(status.paused);
        assert_eq!(status.tick, Duration::from_millis(1));
        assert_eq!(status.world.age(), 0);
        assert_eq!(status.world, GLIDER.world());

        handle.stop().unwrap();
        sim.join().unwrap();
    }
}
