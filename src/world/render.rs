use std::fmt::{self, Display};

use crate::{coord, Coord, World};

use super::{ALIVE_MARKER, DEAD_MARKER};

impl World {
    /// the box drawn around the live cells, one cell of margin on each side
    /// unless it would go past the edge of the grid.
    /// an empty world gets a single point at the origin.
    pub fn render_bounds(&self) -> (Coord, Coord) {
        match self.bounds() {
            Some((min, max)) => (min - coord!(1, 1), max + coord!(1, 1)),
            None => (Coord::ORIGIN, Coord::ORIGIN),
        }
    }
}

impl Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = self.render_bounds();
        writeln!(f, "live cells: {} (generation {})", self.len(), self.age())?;
        writeln!(f, "bounds: ({}, {}) to ({}, {})", min.x, min.y, max.x, max.y)?;
        for y in min.y..=max.y {
            let row = (min.x..=max.x)
                .map(|x| match self.is_alive(coord!(x, y)) {
                    true => ALIVE_MARKER,
                    false => DEAD_MARKER,
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_blinker() {
        let world = World::from_pattern("...\n###\n...");
        let expected = "live cells: 3 (generation 0)\n\
                        bounds: (-1, 0) to (3, 2)\n\
                        . . . . .\n\
                        . # # # .\n\
                        . . . . .\n";
        assert_eq!(world.to_string(), expected);
    }

    #[test]
    fn render_empty() {
        let rendered = World::new().next().to_string();
        assert_eq!(rendered, "live cells: 0 (generation 1)\nbounds: (0, 0) to (0, 0)\n.\n");
    }

    #[test]
    fn render_at_the_edge() {
        let world = World::from_coords([coord!(i32::MIN, 0)]);
        let (min, max) = world.render_bounds();
        assert_eq!((min, max), (coord!(i32::MIN, -1), coord!(i32::MIN + 1, 1)));
        let rendered = world.to_string();
        assert!(rendered.ends_with("# .\n. .\n"));
        assert_eq!(rendered.lines().count(), 5);
    }
}
