use std::{
    collections::{HashMap, HashSet},
    hash::{Hash, Hasher},
};

use log::debug;
use metrohash::MetroBuildHasher;

use crate::{coord, Coord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    coord: Coord,
    alive: bool,
}

impl Cell {
    pub fn new(coord: Coord, alive: bool) -> Self {
        Self { coord, alive }
    }

    pub fn at(x: i32, y: i32, alive: bool) -> Self {
        Self::new(coord!(x, y), alive)
    }

    pub fn alive(coord: Coord) -> Self {
        Self::new(coord, true)
    }

    pub fn dead(coord: Coord) -> Self {
        Self::new(coord, false)
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// B3/S23: born on exactly 3 neighbors, survives on 2 or 3.
    pub fn next_state(&self, live_neighbors: u8) -> Self {
        debug_assert!(live_neighbors <= 8, "a cell has at most 8 neighbors");
        let alive = live_neighbors == 3 || (live_neighbors == 2 && self.alive);
        Self::new(self.coord, alive)
    }
}

type CellMap = HashMap<Coord, Cell, MetroBuildHasher>;
type CoordSet = HashSet<Coord, MetroBuildHasher>;

/// An immutable snapshot of every live cell on an unbounded grid.
///
/// Dead cells are never stored; [`World::cell_at`] synthesizes them on demand.
/// Operations that would change the world return a new one instead.
#[derive(Debug, Clone, Default)]
pub struct World {
    cells: CellMap,
    age: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// builds a world from the positions of its live cells, duplicates are merged.
    pub fn from_coords(coords: impl IntoIterator<Item = Coord>) -> Self {
        Self::from_cells(coords.into_iter().map(Cell::alive))
    }

    /// builds a world from arbitrary cells, dead ones are dropped.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let cells = cells
            .into_iter()
            .filter(Cell::is_alive)
            .map(|cell| (cell.coord(), cell))
            .collect();
        Self { cells, age: 0 }
    }

    fn with_age(mut self, age: u64) -> Self {
        self.age = age;
        self
    }

    /// generation counter, not taken into account by equality.
    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell_at(&self, coord: Coord) -> Cell {
        self.cells
            .get(&coord)
            .copied()
            .unwrap_or_else(|| Cell::dead(coord))
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.cell_at(coord).is_alive()
    }

    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.values().copied()
    }

    pub fn live_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.keys().copied()
    }

    pub fn live_neighbor_count(&self, coord: Coord) -> u8 {
        coord
            .neighbors()
            .filter(|&neighbor| self.is_alive(neighbor))
            .count() as u8
    }

    /// every position that may hold a live cell next generation, each listed once.
    fn frontier(&self) -> CoordSet {
        self.live_coords()
            .flat_map(Coord::neighborhood_and_self)
            .collect()
    }

    /// computes the following generation.
    pub fn next(&self) -> Self {
        let cells = self
            .frontier()
            .into_iter()
            .map(|coord| {
                let count = self.live_neighbor_count(coord);
                self.cell_at(coord).next_state(count)
            })
            .filter(Cell::is_alive)
            .map(|cell| (cell.coord(), cell))
            .collect();
        let next = Self {
            cells,
            age: self.age + 1,
        };
        debug!("generation {} has {} live cells", next.age, next.len());
        next
    }

    /// advances `generations` times.
    pub fn advance(&self, generations: usize) -> Self {
        (0..generations).fold(self.clone(), |world, _| world.next())
    }

    /// the same pattern translated by `delta`, cells moved past the edge of the grid are lost.
    pub fn shifted(&self, delta: Coord) -> Self {
        let moved = self.live_coords().filter_map(|coord| coord.checked_plus(delta));
        Self::from_coords(moved).with_age(self.age)
    }

    /// inclusive corners of the smallest box holding every live cell.
    pub fn bounds(&self) -> Option<(Coord, Coord)> {
        let mut coords = self.live_coords();
        let first = coords.next()?;
        Some(coords.fold((first, first), |(min, max), c| {
            (
                coord!(min.x.min(c.x), min.y.min(c.y)),
                coord!(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }

    fn sorted_coords(&self) -> Vec<Coord> {
        let mut coords: Vec<_> = self.live_coords().collect();
        coords.sort_unstable();
        coords
    }
}

impl PartialEq for World {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.live_coords().all(|coord| other.is_alive(coord))
    }
}

impl Eq for World {}

impl Hash for World {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_coords().hash(state);
    }
}

impl FromIterator<Coord> for World {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self::from_coords(iter)
    }
}

mod pattern;
mod render;

pub use pattern::{ALIVE_MARKER, DEAD_MARKER};
