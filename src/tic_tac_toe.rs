use std::fmt;

use crate::error::Error;

/// Board dimension, shared by every board.
pub const SIZE: usize = 3;

/// An `(x, y)` coordinate, `x` being the column and `y` the row.
pub type Point = (usize, usize);

/// The cells of a completed line, in scan order.
pub type Line = [Point; SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spot {
    Empty,
    Filled(Player),
}

impl Spot {
    fn symbol(self) -> char {
        match self {
            Spot::Empty => '.',
            Spot::Filled(player) => player.symbol(),
        }
    }
}

const WIN_MARKER: char = 'W';

/// A 3x3 position together with the side to move.
///
/// Boards are plain values: [`Board::step`] returns a new board and leaves
/// the receiver untouched, so a search can branch freely from any node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    spots: [[Spot; SIZE]; SIZE],
    player: Player,
}

impl Board {
    pub fn new() -> Self {
        Self {
            spots: [[Spot::Empty; SIZE]; SIZE],
            player: Player::X,
        }
    }

    /// The mark placed by the next move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The mark placed by the previous move.
    pub fn opponent(&self) -> Player {
        self.player.other()
    }

    pub fn get(&self, (x, y): Point) -> Spot {
        self.spots[y][x]
    }

    // Returns a new board with the move executed
    pub fn step(&self, x: usize, y: usize) -> Result<Board, Error> {
        if x >= SIZE || y >= SIZE {
            return Err(Error::OutOfBounds { x, y });
        }
        match self.spots[y][x] {
            Spot::Empty => Ok(self.place((x, y))),
            Spot::Filled(occupant) => Err(Error::Occupied { x, y, occupant }),
        }
    }

    /// Places the current player's mark on a cell already known to be empty.
    pub(crate) fn place(&self, (x, y): Point) -> Board {
        let mut board = *self;
        board.spots[y][x] = Spot::Filled(self.player);
        board.player = self.player.other();
        board
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Point> {
        self.points()
            .filter(|&point| self.get(point) == Spot::Empty)
            .collect()
    }

    pub fn no_empty(&self) -> bool {
        self.points().all(|point| self.get(point) != Spot::Empty)
    }

    /// Checks whether the side that made the last move (the current
    /// `opponent`) has completed a line.
    ///
    /// Rows are checked first, then columns, then the main diagonal and
    /// finally the anti-diagonal. Only the first complete line is returned.
    pub fn won(&self) -> Option<Line> {
        let rows = (0..SIZE).map(|y| line(|x| (x, y)));
        let columns = (0..SIZE).map(|x| line(|y| (x, y)));
        let diagonal = std::iter::once(line(|y| (y, y)));
        let anti_diagonal = std::iter::once(line(|y| (SIZE - 1 - y, y)));

        let target = Spot::Filled(self.opponent());
        rows.chain(columns)
            .chain(diagonal)
            .chain(anti_diagonal)
            .find(|line| line.iter().all(|&point| self.get(point) == target))
    }

    pub fn is_terminal(&self) -> bool {
        self.won().is_some() || self.no_empty()
    }

    /// The grid, one character per cell and one row per line.
    pub fn render(&self) -> String {
        self.render_with(|_| false)
    }

    /// Like [`Board::render`], with the cells of `line` drawn as `W`.
    pub fn render_winning(&self, line: &Line) -> String {
        self.render_with(|point| line.contains(&point))
    }

    fn render_with(&self, highlight: impl Fn(Point) -> bool) -> String {
        let mut out = String::with_capacity(SIZE * (SIZE + 1));
        for y in 0..SIZE {
            for x in 0..SIZE {
                out.push(if highlight((x, y)) {
                    WIN_MARKER
                } else {
                    self.spots[y][x].symbol()
                });
            }
            out.push('\n');
        }
        out
    }

    fn points(&self) -> impl Iterator<Item = Point> {
        (0..SIZE).flat_map(|y| (0..SIZE).map(move |x| (x, y)))
    }
}

fn line(cell: impl FnMut(usize) -> Point) -> Line {
    std::array::from_fn(cell)
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "next: {}", self.player)?;
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
pub(crate) fn play(moves: &[Point]) -> Board {
    moves.iter().fold(Board::new(), |board, &(x, y)| {
        board.step(x, y).expect("scripted move should be legal")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let board = Board::new();
        assert_eq!(board.spots, [[Spot::Empty; SIZE]; SIZE]);
        assert_eq!(board.player(), Player::X);
        assert_eq!(board.opponent(), Player::O);
        assert_eq!(board.available_moves().len(), SIZE * SIZE);
        assert!(!board.no_empty());
        assert_eq!(board.won(), None);
    }

    #[test]
    fn test_step() {
        let board = Board::new();
        let next = board.step(0, 1).unwrap();
        assert_eq!(next.get((0, 1)), Spot::Filled(Player::X));
        assert_eq!(next.player(), Player::O);
        assert_eq!(next.opponent(), Player::X);

        // the parent is untouched
        assert_eq!(board, Board::new());

        let after = next.step(2, 2).unwrap();
        assert_eq!(after.get((2, 2)), Spot::Filled(Player::O));
        assert_eq!(after.player(), Player::X);
        assert_eq!(next.get((2, 2)), Spot::Empty);
    }

    #[test]
    fn test_step_rejects_invalid_moves() {
        let board = Board::new().step(1, 1).unwrap();

        assert_eq!(
            board.step(1, 1),
            Err(Error::Occupied {
                x: 1,
                y: 1,
                occupant: Player::X
            })
        );
        assert_eq!(board.step(3, 0), Err(Error::OutOfBounds { x: 3, y: 0 }));
        assert_eq!(board.step(0, 3), Err(Error::OutOfBounds { x: 0, y: 3 }));
    }

    #[test]
    fn test_filled_count_matches_moves() {
        let moves = [(0, 0), (1, 1), (2, 0), (1, 0), (1, 2)];
        for n in 0..=moves.len() {
            let board = play(&moves[..n]);
            assert_eq!(board.available_moves().len(), SIZE * SIZE - n);
        }
    }

    #[test]
    fn test_available_moves_row_major() {
        let board = play(&[(1, 0), (0, 1)]);
        assert_eq!(
            board.available_moves(),
            vec![(0, 0), (2, 0), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_won_lines() {
        // X takes the middle row
        let board = play(&[(0, 1), (0, 0), (1, 1), (1, 0), (2, 1)]);
        assert_eq!(board.won(), Some([(0, 1), (1, 1), (2, 1)]));

        // O takes the last column
        let board = play(&[(0, 0), (2, 0), (1, 0), (2, 1), (0, 2), (2, 2)]);
        assert_eq!(board.won(), Some([(2, 0), (2, 1), (2, 2)]));

        let board = play(&[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);
        assert_eq!(board.won(), Some([(0, 0), (1, 1), (2, 2)]));

        let board = play(&[(2, 0), (0, 0), (1, 1), (1, 0), (0, 2)]);
        assert_eq!(board.won(), Some([(2, 0), (1, 1), (0, 2)]));
    }

    #[test]
    fn test_won_checks_only_last_mover() {
        // X has a row, but it is X to move: the check looks at O
        let board = play(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 2)]);
        assert_eq!(board.player(), Player::X);
        assert_eq!(board.won(), None);
    }

    #[test]
    fn test_won_reports_first_line() {
        // X completes both the top row and the main diagonal with (0, 0)
        let board = play(&[
            (1, 0),
            (0, 1),
            (2, 0),
            (0, 2),
            (1, 1),
            (2, 1),
            (2, 2),
            (1, 2),
            (0, 0),
        ]);
        assert_eq!(board.won(), Some([(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn test_no_empty_tie() {
        let board = play(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (1, 1),
            (0, 1),
            (2, 1),
            (1, 2),
            (0, 2),
            (2, 2),
        ]);
        assert!(board.no_empty());
        assert_eq!(board.won(), None);
        assert!(board.is_terminal());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_render() {
        let board = play(&[(0, 0), (1, 1)]);
        assert_eq!(board.render(), "X..\n.O.\n...\n");
        assert_eq!(board.to_string(), "next: X\nX..\n.O.\n...\n");
    }

    #[test]
    fn test_render_winning() {
        let board = play(&[(0, 1), (0, 0), (1, 1), (1, 0), (2, 1)]);
        let line = board.won().unwrap();
        assert_eq!(board.render_winning(&line), "OO.\nWWW\n...\n");
    }
}
