use std::time::{Duration, Instant};

use tracing::info;

use crate::game::{CollisionType, Snapshot};

/// Statistics kept across restarts within one session
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub longest_snake: usize,
    pub games_played: u32,
    pub wall_deaths: u32,
    pub self_collisions: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            longest_snake: 0,
            games_played: 0,
            wall_deaths: 0,
            self_collisions: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Record a finished game; `snapshot` must be taken after death
    pub fn on_game_over(&mut self, snapshot: &Snapshot) {
        self.update();
        self.games_played += 1;
        self.high_score = self.high_score.max(snapshot.score);
        self.longest_snake = self.longest_snake.max(snapshot.body.len());

        match snapshot.death {
            Some(CollisionType::Wall) => self.wall_deaths += 1,
            Some(CollisionType::SelfCollision) => self.self_collisions += 1,
            None => {}
        }

        info!(
            games_played = self.games_played,
            high_score = self.high_score,
            longest_snake = self.longest_snake,
            wall_deaths = self.wall_deaths,
            self_collisions = self.self_collisions,
            elapsed = %self.format_time(),
            "session_stats"
        );
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GridCell};

    fn finished(score: u32, length: usize, death: CollisionType) -> Snapshot {
        Snapshot {
            heading: Direction::Right,
            up: Direction::Up,
            body: vec![GridCell::ORIGIN; length],
            target: GridCell::new(5, 5, 5),
            score,
            steps: 10,
            half_extent: 24,
            death: Some(death),
        }
    }

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_records_bests_and_causes() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(&finished(10, 13, CollisionType::Wall));
        metrics.on_game_over(&finished(4, 7, CollisionType::SelfCollision));
        metrics.on_game_over(&finished(12, 15, CollisionType::Wall));

        assert_eq!(metrics.games_played, 3);
        assert_eq!(metrics.high_score, 12);
        assert_eq!(metrics.longest_snake, 15);
        assert_eq!(metrics.wall_deaths, 2);
        assert_eq!(metrics.self_collisions, 1);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(90);

        metrics.on_game_start();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);
        assert_eq!(metrics.format_time(), "00:00");
    }
}
