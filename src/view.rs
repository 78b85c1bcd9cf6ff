use std::{
    io::{stdin, stdout},
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{debug, info};
use termion::{event::Key, input::TermRead, raw::IntoRawMode, screen::AlternateScreen};

use crate::{coord, Coord, Error, Preset, Result, SimHandle, World};

pub use canvas::Canvas;
mod canvas;

pub struct View {
    thread: JoinHandle<Result<()>>,
}

impl View {
    pub fn spawn(handle: SimHandle) -> Self {
        let thread = thread::spawn(|| view_loop(handle));
        Self { thread }
    }

    pub fn join(self) -> Result<()> {
        self.thread
            .join()
            .map_err(|_| Error::ThreadPanicked("view"))?
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCmd {
    Exit,
    Move(Dir),
    Accelerate,
    Decelerate,
    Pause,
    Recenter,
    Load(Preset),
}

impl InputCmd {
    pub fn from_key(key: Key) -> Option<Self> {
        let command = match key {
            Key::Char('q') | Key::Esc | Key::Ctrl('c') => InputCmd::Exit,
            Key::Up => InputCmd::Move(Dir::Up),
            Key::Down => InputCmd::Move(Dir::Down),
            Key::Left => InputCmd::Move(Dir::Left),
            Key::Right => InputCmd::Move(Dir::Right),
            Key::Char('+') => InputCmd::Accelerate,
            Key::Char('-') => InputCmd::Decelerate,
            Key::Char(' ') => InputCmd::Pause,
            Key::Char('c') => InputCmd::Recenter,
            Key::Char(c) => InputCmd::Load(Preset::by_key(c)?),
            _ => return None,
        };
        Some(command)
    }
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let Ok(key) = key else { break };
        let Some(command) = InputCmd::from_key(key) else {
            continue;
        };
        if sender.send(command).is_err() {
            break;
        }
    }
}

const VIEW_REFRESH_INTERVAL: Duration = Duration::from_millis(100);
const PAN_STEP: i32 = 4;
const MIN_TICK: Duration = Duration::from_millis(10);
const MAX_TICK: Duration = Duration::from_secs(5);

fn view_loop(handle: SimHandle) -> Result<()> {
    // restored when dropped, on every exit path
    let mut screen = AlternateScreen::from(stdout().into_raw_mode()?);
    write_hide_cursor(&mut screen)?;

    let (sender, receiver) = mpsc::channel();
    let _input_handle = thread::spawn(|| input_loop(sender));

    let mut view_origin = centered_origin(&handle.snapshot()?.world)?;
    loop {
        let status = handle.snapshot()?;
        let mut tick = status.tick;
        for cmd in receiver.try_iter() {
            debug!("input {cmd:?}");
            match cmd {
                InputCmd::Exit => {
                    info!("exiting at generation {}", status.world.age());
                    handle.stop()?;
                    return write_show_cursor(&mut screen);
                }
                InputCmd::Move(direction) => view_origin = view_origin + pan(direction),
                InputCmd::Accelerate | InputCmd::Decelerate => {
                    tick = adjust_tick(tick, cmd);
                    handle.set_tick(tick)?;
                }
                InputCmd::Pause => handle.toggle_pause()?,
                InputCmd::Recenter => view_origin = centered_origin(&status.world)?,
                InputCmd::Load(preset) => {
                    let world = preset.world();
                    view_origin = centered_origin(&world)?;
                    handle.load(world)?;
                }
            }
        }

        let mut canvas = Canvas::from_screen()?;
        let world = &status.world;
        canvas.layer(|pos| {
            let alive = view_origin.checked_plus(pos).is_some_and(|c| world.is_alive(c));
            alive.then_some('#')
        });
        let state = if status.paused { "paused" } else { "running" };
        let line = format!(
            "gen {} | {} cells | tick {}ms | {state} | q quit, arrows pan, 1-6 presets, +/- speed, space pause, c center",
            world.age(),
            world.len(),
            tick.as_millis(),
        );
        canvas.display(&mut screen, &line)?;
        thread::sleep(VIEW_REFRESH_INTERVAL);
    }
}

/// halves or doubles the interval between generations, within bounds.
fn adjust_tick(tick: Duration, cmd: InputCmd) -> Duration {
    match cmd {
        InputCmd::Accelerate => (tick / 2).max(MIN_TICK),
        InputCmd::Decelerate => (tick * 2).min(MAX_TICK),
        _ => tick,
    }
}

fn pan(direction: Dir) -> Coord {
    match direction {
        Dir::Up => coord!(0, -PAN_STEP),
        Dir::Down => coord!(0, PAN_STEP),
        Dir::Left => coord!(-PAN_STEP, 0),
        Dir::Right => coord!(PAN_STEP, 0),
    }
}

/// the origin that puts the middle of the pattern in the middle of the screen.
fn centered_origin(world: &World) -> Result<Coord> {
    let canvas = Canvas::from_screen()?;
    let half_screen = coord!(canvas.width() as i32 / 2, canvas.height() as i32 / 2);
    let center = match world.bounds() {
        Some((min, max)) => coord!(midpoint(min.x, max.x), midpoint(min.y, max.y)),
        None => Coord::ORIGIN,
    };
    Ok(center - half_screen)
}

fn midpoint(a: i32, b: i32) -> i32 {
    ((i64::from(a) + i64::from(b)) / 2) as i32
}

fn write_hide_cursor(out: &mut impl std::io::Write) -> Result<()> {
    write!(out, "{}", termion::cursor::Hide)?;
    Ok(())
}

fn write_show_cursor(out: &mut impl std::io::Write) -> Result<()> {
    write!(out, "{}", termion::cursor::Show)?;
    out.flush()?;
    Ok(())
}
