use std::io::{self, Write};

use crate::{coord, Coord};

/// a character grid the size of the terminal, drawn in one go.
pub struct Canvas {
    lines: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// keeps the last terminal line free for the status bar.
    pub fn from_screen() -> io::Result<Self> {
        let (width, height) = termion::terminal_size()?;
        Ok(Self::new(width as usize, height.saturating_sub(1) as usize))
    }

    pub fn new(width: usize, height: usize) -> Self {
        let lines = vec![vec![' '; width]; height];
        Self {
            height,
            lines,
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layer(&mut self, f: impl Fn(Coord) -> Option<char>) {
        for (y, line) in self.lines.iter_mut().enumerate() {
            for (x, slot) in line.iter_mut().enumerate() {
                if let Some(char) = f(coord!(x as i32, y as i32)) {
                    *slot = char;
                }
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(|line| line.iter().collect())
    }

    pub fn display(&self, out: &mut impl Write, status: &str) -> io::Result<()> {
        write!(out, "{}", termion::clear::All)?;
        for (index, line) in self.rows().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            write!(out, "{goto}{line}")?;
        }
        let goto = termion::cursor::Goto(1, self.height as u16 + 1);
        write!(out, "{goto}{status}")?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer() {
        let mut canvas = Canvas::new(3, 2);
        canvas.layer(|c| (c.x == c.y).then_some('#'));
        canvas.layer(|c| (c == coord!(2, 0)).then_some('+'));
        let rows: Vec<_> = canvas.rows().collect();
        assert_eq!(rows, vec!["# +", " # "]);
        assert_eq!((canvas.width(), canvas.height()), (3, 2));
    }
}
