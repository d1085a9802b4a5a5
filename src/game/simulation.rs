use std::sync::Arc;

use tracing::{debug, info};

use super::{
    action::TurnRequest,
    config::GameConfig,
    direction::Direction,
    engine::GameEngine,
    scheduler::TurnScheduler,
    state::{CollisionType, GameState, GridCell},
};

/// Outcome of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Continue,
    Dead(CollisionType),
}

/// One game from spawn to death
///
/// The tick loop owns this value and is the only writer of the orientation
/// and the world. Other contexts hold a clone of [`Simulation::scheduler`]
/// to submit turns.
pub struct Simulation {
    engine: GameEngine,
    state: GameState,
    scheduler: Arc<TurnScheduler>,
    death: Option<CollisionType>,
}

impl Simulation {
    pub fn new(config: GameConfig) -> Self {
        Self::with_scheduler(config, Arc::new(TurnScheduler::new()))
    }

    /// Start a game that reads turns from an existing queue
    pub fn with_scheduler(config: GameConfig, scheduler: Arc<TurnScheduler>) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        info!(
            half_extent = state.half_extent,
            length = state.snake.len(),
            fruit_x = state.fruit.x,
            fruit_y = state.fruit.y,
            fruit_z = state.fruit.z,
            "game_start"
        );

        Self {
            engine,
            state,
            scheduler,
            death: None,
        }
    }

    pub fn scheduler(&self) -> Arc<TurnScheduler> {
        Arc::clone(&self.scheduler)
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Shorthand for `scheduler().enqueue(request)`
    pub fn enqueue_turn(&self, request: TurnRequest) {
        self.scheduler.enqueue(request);
    }

    /// Apply every queued turn in order, then move the snake one cell
    pub fn tick(&mut self) -> TickStatus {
        if let Some(collision_type) = self.death {
            return TickStatus::Dead(collision_type);
        }

        for request in self.scheduler.drain() {
            self.state.snake.orientation.turn(request);
            debug!(
                %request,
                heading = %self.state.snake.heading(),
                up = %self.state.snake.up(),
                "turn_applied"
            );
        }

        let result = self.engine.advance(&mut self.state);
        match result.collision_type {
            Some(collision_type) => {
                self.death = Some(collision_type);
                info!(
                    ?collision_type,
                    score = self.state.score,
                    length = self.state.snake.len(),
                    steps = self.state.steps,
                    "game_over"
                );
                TickStatus::Dead(collision_type)
            }
            None => TickStatus::Continue,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.death.is_none()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            heading: self.state.snake.heading(),
            up: self.state.snake.up(),
            body: self.state.snake.body.clone(),
            target: self.state.fruit,
            score: self.state.score,
            steps: self.state.steps,
            half_extent: self.state.half_extent,
            death: self.death,
        }
    }
}

/// What a grid cell is, for display purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Body,
    Target,
    Boundary,
}

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub heading: Direction,
    pub up: Direction,
    /// Head first
    pub body: Vec<GridCell>,
    pub target: GridCell,
    pub score: u32,
    pub steps: u32,
    pub half_extent: i32,
    pub death: Option<CollisionType>,
}

impl Snapshot {
    pub fn head(&self) -> GridCell {
        self.body[0]
    }

    pub fn is_alive(&self) -> bool {
        self.death.is_none()
    }

    /// Body segments followed by the target
    pub fn cells(&self) -> impl Iterator<Item = (GridCell, CellKind)> + '_ {
        self.body
            .iter()
            .map(|cell| (*cell, CellKind::Body))
            .chain(std::iter::once((self.target, CellKind::Target)))
    }

    /// The six wall planes as (axis direction, coordinate) just outside the cube
    pub fn boundary_planes(&self) -> [(Direction, i32); 6] {
        let wall = self.half_extent + 1;
        [
            (Direction::Right, wall),
            (Direction::Left, -wall),
            (Direction::Up, wall),
            (Direction::Down, -wall),
            (Direction::Back, wall),
            (Direction::Front, -wall),
        ]
    }

    /// Arrow showing the up-reference: starts at the centre of the head's
    /// leading face and runs two units along `up`
    pub fn up_indicator(&self) -> ([f32; 3], [f32; 3]) {
        let head = to_f32(self.head());
        let forward = delta_f32(self.heading);
        let up = delta_f32(self.up);

        let start = [
            head[0] + forward[0] / 2.0,
            head[1] + forward[1] / 2.0,
            head[2] + forward[2] / 2.0,
        ];
        let end = [
            start[0] + up[0] * 2.0,
            start[1] + up[1] * 2.0,
            start[2] + up[2] * 2.0,
        ];
        (start, end)
    }

    /// Vector from the head towards the target, clamped to length 2 once it
    /// is longer than one cell
    pub fn target_indicator(&self) -> [f32; 3] {
        let head = self.head();
        let mut v = [
            (self.target.x - head.x) as f32,
            (self.target.y - head.y) as f32,
            (self.target.z - head.z) as f32,
        ];
        let magnitude = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        if magnitude > 1.0 {
            for component in &mut v {
                *component = *component / magnitude * 2.0;
            }
        }
        v
    }
}

fn to_f32(cell: GridCell) -> [f32; 3] {
    [cell.x as f32, cell.y as f32, cell.z as f32]
}

fn delta_f32(direction: Direction) -> [f32; 3] {
    let (x, y, z) = direction.delta();
    [x as f32, y as f32, z as f32]
}
