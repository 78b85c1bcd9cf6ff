use crate::{coord, Coord, World};

pub const ALIVE_MARKER: char = '#';
pub const DEAD_MARKER: char = '.';

/// positions of the live markers in a text pattern, rows are lines and columns are chars.
fn live_coords<'a>(rows: impl IntoIterator<Item = &'a str>) -> Vec<Coord> {
    rows.into_iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.chars()
                .enumerate()
                .filter(|&(_, c)| c == ALIVE_MARKER)
                .map(move |(x, _)| coord!(x as i32, y as i32))
        })
        .collect()
}

impl World {
    /// parses newline separated rows, anything other than `#` is dead.
    pub fn from_pattern(text: &str) -> Self {
        Self::from_coords(live_coords(text.lines()))
    }

    pub fn from_rows(rows: &[&str]) -> Self {
        Self::from_coords(live_coords(rows.iter().copied()))
    }
}

impl From<&str> for World {
    fn from(text: &str) -> Self {
        Self::from_pattern(text)
    }
}
