use super::direction::Direction;
use super::orientation::Orientation;

/// A cell of the 3D grid
///
/// Coordinates are integers, so equality is exact and never needs rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridCell {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const ORIGIN: GridCell = GridCell { x: 0, y: 0, z: 0 };

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.delta();
        self.moved_by(dx, dy, dz)
    }

    /// Largest absolute coordinate
    pub fn max_abs(&self) -> i32 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

/// The snake: an ordered body plus its orientation frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<GridCell>,
    pub orientation: Orientation,
}

impl Snake {
    /// Create a snake whose tail trails straight behind `head`
    pub fn new(head: GridCell, orientation: Orientation, length: usize) -> Self {
        let back = orientation.heading().invert();
        let mut body = Vec::with_capacity(length.max(1));
        body.push(head);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_in_direction(back));
        }

        Self { body, orientation }
    }

    pub fn head(&self) -> GridCell {
        self.body[0]
    }

    pub fn tail(&self) -> GridCell {
        self.body[self.body.len() - 1]
    }

    pub fn heading(&self) -> Direction {
        self.orientation.heading()
    }

    pub fn up(&self) -> Direction {
        self.orientation.up()
    }

    /// Check if a cell is occupied by any segment, head included
    pub fn occupies(&self, cell: GridCell) -> bool {
        self.body.contains(&cell)
    }

    /// Put a new head in front, dropping the tail unless growing
    pub fn advance_to(&mut self, next: GridCell, grow: bool) {
        self.body.insert(0, next);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }
}

/// Why the snake died
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the cube
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: GridCell,
    /// Largest legal absolute value of any coordinate
    pub half_extent: i32,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    pub fn new(snake: Snake, fruit: GridCell, half_extent: i32) -> Self {
        Self {
            snake,
            fruit,
            half_extent,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }

    /// Check if a cell lies inside the cube. Any coordinate at `half_extent + 1` is a wall.
    pub fn is_in_bounds(&self, cell: GridCell) -> bool {
        cell.max_abs() <= self.half_extent
    }
}
