use crate::{Error, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub pattern: &'static str,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        PULSAR_PAIR,
        ACORN,
        R_PENTOMINO,
        DIEHARD,
        GOSPER,
        GLIDER,
    ];

    pub fn by_name(name: &str) -> crate::Result<Preset> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }

    /// presets are bound to the keys `1` to `6`.
    pub fn by_key(key: char) -> Option<Preset> {
        let index = key.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|preset| preset.name).collect()
    }

    pub fn world(&self) -> World {
        World::from_pattern(self.pattern)
    }
}

pub const PULSAR_PAIR: Preset = Preset {
    name: "pulsar-pair",
    pattern: "\
..###..
.#...#.
.#...#.
..###..
.......
.......
.......
.......
..###..
.#...#.
.#...#.
..###..
",
};

pub const ACORN: Preset = Preset {
    name: "acorn",
    pattern: "\
.#.....
...#...
##..###
",
};

pub const R_PENTOMINO: Preset = Preset {
    name: "r-pentomino",
    pattern: "\
.##
##.
.#.
",
};

pub const DIEHARD: Preset = Preset {
    name: "diehard",
    pattern: "\
......#.
##......
.#...###
",
};

pub const GOSPER: Preset = Preset {
    name: "gosper",
    pattern: "\
........................#...........
......................#.#...........
............##......##............##
...........#...#....##............##
##........#.....#...##..............
##........#...#.##....#.#...........
..........#.....#.......#...........
...........#...#....................
............##......................
",
};

pub const GLIDER: Preset = Preset {
    name: "glider",
    pattern: "\
.#.
..#
###
",
};
