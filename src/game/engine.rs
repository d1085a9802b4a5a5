use super::{
    config::GameConfig,
    orientation::Orientation,
    state::{CollisionType, GameState, GridCell, Snake},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

/// Result of one advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Whether the snake ate the fruit this step
    pub ate_fruit: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

impl StepResult {
    fn moved(ate_fruit: bool) -> Self {
        Self {
            terminated: false,
            ate_fruit,
            collision_type: None,
        }
    }

    fn died(collision_type: Option<CollisionType>) -> Self {
        Self {
            terminated: true,
            ate_fruit: false,
            collision_type,
        }
    }
}

/// Moves the snake, detects collisions and places fruit
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the starting state: three segments along x heading right, up is up
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(
            GridCell::new(1, 0, 0),
            Orientation::default(),
            self.config.initial_snake_length,
        );

        let fruit = self.spawn_fruit(&snake);

        GameState::new(snake, fruit, self.config.half_extent)
    }

    /// Move the snake one cell along its heading
    ///
    /// A dead state is left untouched. Dying does not move the body.
    pub fn advance(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_alive {
            return StepResult::died(None);
        }

        let next = state.snake.head().moved_in_direction(state.snake.heading());

        if let Some(collision_type) = self.check_collision(state, next) {
            state.is_alive = false;
            debug!(?collision_type, x = next.x, y = next.y, z = next.z, "collision");
            return StepResult::died(Some(collision_type));
        }

        let ate_fruit = next == state.fruit;
        state.snake.advance_to(next, ate_fruit);

        if ate_fruit {
            state.score += 1;
            state.fruit = self.spawn_fruit(&state.snake);
            debug!(
                score = state.score,
                length = state.snake.len(),
                fruit_x = state.fruit.x,
                fruit_y = state.fruit.y,
                fruit_z = state.fruit.z,
                "fruit_eaten"
            );
        }

        state.steps += 1;
        trace!(step = state.steps, x = next.x, y = next.y, z = next.z, "advanced");

        StepResult::moved(ate_fruit)
    }

    /// Check if moving the head into `cell` kills the snake
    ///
    /// The tail still counts: it has not moved out of the way yet.
    fn check_collision(&self, state: &GameState, cell: GridCell) -> Option<CollisionType> {
        if !state.is_in_bounds(cell) {
            return Some(CollisionType::Wall);
        }

        if state.snake.occupies(cell) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Pick a uniformly random cell anywhere in the cube
    fn spawn_fruit(&mut self, snake: &Snake) -> GridCell {
        let extent = self.config.half_extent;
        // A body filling the whole cube leaves nowhere else to go
        let avoid = self.config.respawn_avoids_body && {
            let edge = self.config.edge_length();
            match edge.checked_mul(edge).and_then(|area| area.checked_mul(edge)) {
                Some(volume) => (snake.len() as u64) < volume,
                None => true,
            }
        };

        loop {
            let cell = GridCell::new(
                self.rng.gen_range(-extent..=extent),
                self.rng.gen_range(-extent..=extent),
                self.rng.gen_range(-extent..=extent),
            );

            if !avoid || !snake.occupies(cell) {
                return cell;
            }
        }
    }
}
