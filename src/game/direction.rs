use std::fmt;

/// One of the six axis-aligned directions of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Front,
        Direction::Back,
    ];

    /// Returns the antipodal direction
    pub fn invert(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Front => Direction::Back,
            Direction::Back => Direction::Front,
        }
    }

    /// Returns true if `other` lies on the same axis (equal or antipodal)
    pub fn is_colinear(self, other: Direction) -> bool {
        self == other || self == other.invert()
    }

    /// Returns the unit vector (dx, dy, dz) for moving in this direction
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
            Direction::Left => (-1, 0, 0),
            Direction::Right => (1, 0, 0),
            Direction::Front => (0, 0, -1),
            Direction::Back => (0, 0, 1),
        }
    }

    /// The world axis this direction is parallel to
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
            Direction::Front | Direction::Back => Axis::Z,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Front => "front",
            Direction::Back => "back",
        };
        f.write_str(name)
    }
}

/// World axis, used as the pivot of a 90 degree rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Sense of a quarter turn along an axis cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Axis {
    /// The four directions perpendicular to this axis, in clockwise order
    pub fn cycle(self) -> [Direction; 4] {
        match self {
            Axis::X => [
                Direction::Front,
                Direction::Up,
                Direction::Back,
                Direction::Down,
            ],
            Axis::Y => [
                Direction::Left,
                Direction::Back,
                Direction::Right,
                Direction::Front,
            ],
            Axis::Z => [
                Direction::Down,
                Direction::Right,
                Direction::Up,
                Direction::Left,
            ],
        }
    }

    /// Rotates `dir` a quarter turn about this axis.
    ///
    /// # Panics
    ///
    /// Panics if `dir` is parallel to the axis. Such a call can only come
    /// from a broken orientation table and is never recoverable.
    pub fn rotate(self, rotation: Rotation, dir: Direction) -> Direction {
        let cycle = self.cycle();
        let index = cycle
            .iter()
            .position(|&d| d == dir)
            .unwrap_or_else(|| panic!("cannot rotate {} about its own axis {:?}", dir, self));

        let next = match rotation {
            Rotation::Clockwise => (index + 1) % 4,
            Rotation::CounterClockwise => (index + 3) % 4,
        };
        cycle[next]
    }
}

/// Finds the rotation that carries the frame along when the heading turns
/// from `from` to `to`.
///
/// # Panics
///
/// Panics if `from` and `to` are equal or antipodal.
pub fn resolve_rotation(from: Direction, to: Direction) -> (Axis, Rotation) {
    use Axis::*;
    use Direction::*;
    use Rotation::*;

    match (from, to) {
        (Up, Front) => (X, CounterClockwise),
        (Up, Right) => (Z, CounterClockwise),
        (Up, Back) => (X, Clockwise),
        (Up, Left) => (Z, Clockwise),
        (Down, Front) => (X, Clockwise),
        (Down, Right) => (Z, Clockwise),
        (Down, Back) => (X, CounterClockwise),
        (Down, Left) => (Z, CounterClockwise),
        (Left, Front) => (Y, CounterClockwise),
        (Left, Up) => (Z, CounterClockwise),
        (Left, Back) => (Y, Clockwise),
        (Left, Down) => (Z, Clockwise),
        (Right, Front) => (Y, Clockwise),
        (Right, Up) => (Z, Clockwise),
        (Right, Back) => (Y, CounterClockwise),
        (Right, Down) => (Z, CounterClockwise),
        (Front, Up) => (X, Clockwise),
        (Front, Right) => (Y, CounterClockwise),
        (Front, Down) => (X, CounterClockwise),
        (Front, Left) => (Y, Clockwise),
        (Back, Up) => (X, CounterClockwise),
        (Back, Right) => (Y, Clockwise),
        (Back, Down) => (X, Clockwise),
        (Back, Left) => (Y, CounterClockwise),
        _ => panic!("no rotation carries heading {from} onto {to}"),
    }
}
