//! Heading and up-reference of the snake.
//!
//! Both fields are restricted to the six grid directions and must stay
//! perpendicular. Yaw turns rotate the heading inside the plane normal to
//! `up`, so they never disturb the frame. Pitch turns swing the heading onto
//! the up axis, and the up-reference is then rotated along with it the same
//! way an aircraft's up vector follows it through a loop.

use super::action::TurnRequest;
use super::direction::{resolve_rotation, Direction};

/// Snake frame: the direction of travel plus an orthogonal up-reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    heading: Direction,
    up: Direction,
}

impl Orientation {
    /// Creates a frame.
    ///
    /// # Panics
    ///
    /// Panics if `heading` and `up` are colinear.
    pub fn new(heading: Direction, up: Direction) -> Self {
        assert!(
            !heading.is_colinear(up),
            "heading {heading} and up {up} must be perpendicular"
        );
        Self { heading, up }
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn up(&self) -> Direction {
        self.up
    }

    /// Applies one relative turn, keeping the frame orthogonal
    pub fn turn(&mut self, request: TurnRequest) {
        let original_heading = self.heading;

        self.heading = match request {
            TurnRequest::Up => self.up,
            TurnRequest::Down => self.up.invert(),
            TurnRequest::Left => yaw_left(self.heading, self.up),
            TurnRequest::Right => yaw_right(self.heading, self.up),
        };

        // A pitch lands the heading on the up axis, so up has to swing along
        if request.is_pitch() {
            let (axis, rotation) = resolve_rotation(original_heading, self.heading);
            self.up = axis.rotate(rotation, self.up);
        }

        debug_assert!(!self.heading.is_colinear(self.up));
    }

    /// Every frame reachable from a valid start, in a fixed order
    pub fn all() -> impl Iterator<Item = Orientation> {
        Direction::ALL.into_iter().flat_map(|heading| {
            Direction::ALL
                .into_iter()
                .filter(move |up| !heading.is_colinear(*up))
                .map(move |up| Orientation { heading, up })
        })
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(Direction::Right, Direction::Up)
    }
}

/// Heading after a left yaw, looked up by current heading and then by up
fn yaw_left(heading: Direction, up: Direction) -> Direction {
    use Direction::*;

    match (heading, up) {
        (Up, Left) => Front,
        (Up, Right) => Back,
        (Up, Front) => Right,
        (Up, Back) => Left,

        (Down, Left) => Back,
        (Down, Right) => Front,
        (Down, Front) => Left,
        (Down, Back) => Right,

        (Left, Up) => Back,
        (Left, Down) => Front,
        (Left, Front) => Up,
        (Left, Back) => Down,

        (Right, Up) => Front,
        (Right, Down) => Back,
        (Right, Front) => Down,
        (Right, Back) => Up,

        (Front, Up) => Left,
        (Front, Down) => Right,
        (Front, Left) => Down,
        (Front, Right) => Up,

        (Back, Up) => Right,
        (Back, Down) => Left,
        (Back, Left) => Up,
        (Back, Right) => Down,

        _ => panic!("degenerate frame: heading {heading}, up {up}"),
    }
}

/// A right yaw always ends up opposite to the left yaw from the same frame
fn yaw_right(heading: Direction, up: Direction) -> Direction {
    yaw_left(heading, up).invert()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUESTS: [TurnRequest; 4] = [
        TurnRequest::Up,
        TurnRequest::Down,
        TurnRequest::Left,
        TurnRequest::Right,
    ];

    fn cross(a: (i32, i32, i32), b: (i32, i32, i32)) -> (i32, i32, i32) {
        (
            a.1 * b.2 - a.2 * b.1,
            a.2 * b.0 - a.0 * b.2,
            a.0 * b.1 - a.1 * b.0,
        )
    }

    #[test]
    fn test_default_orientation() {
        let frame = Orientation::default();
        assert_eq!(frame.heading(), Direction::Right);
        assert_eq!(frame.up(), Direction::Up);
    }

    #[test]
    #[should_panic(expected = "must be perpendicular")]
    fn test_colinear_frame_rejected() {
        Orientation::new(Direction::Up, Direction::Down);
    }

    #[test]
    fn test_all_lists_24_frames() {
        assert_eq!(Orientation::all().count(), 24);
    }

    #[test]
    fn test_invariant_holds_after_every_turn() {
        for start in Orientation::all() {
            for request in REQUESTS {
                let mut frame = start;
                frame.turn(request);
                assert!(
                    !frame.heading().is_colinear(frame.up()),
                    "{start:?} + {request} -> {frame:?}"
                );
            }
        }
    }

    #[test]
    fn test_yaw_keeps_up_and_turns_about_it() {
        for start in Orientation::all() {
            let mut left = start;
            left.turn(TurnRequest::Left);
            assert_eq!(left.up(), start.up());
            // Left is up x heading in a right-handed frame
            assert_eq!(
                left.heading().delta(),
                cross(start.up().delta(), start.heading().delta())
            );

            let mut right = start;
            right.turn(TurnRequest::Right);
            assert_eq!(right.up(), start.up());
            assert_eq!(right.heading(), left.heading().invert());
        }
    }

    #[test]
    fn test_pitch_carries_up_with_heading() {
        for start in Orientation::all() {
            let mut up = start;
            up.turn(TurnRequest::Up);
            assert_eq!(up.heading(), start.up());
            assert_eq!(up.up(), start.heading().invert());

            let mut down = start;
            down.turn(TurnRequest::Down);
            assert_eq!(down.heading(), start.up().invert());
            assert_eq!(down.up(), start.heading());
        }
    }

    #[test]
    fn test_only_pitch_moves_up() {
        for start in Orientation::all() {
            for request in REQUESTS {
                let mut frame = start;
                frame.turn(request);
                assert_eq!(
                    frame.up() != start.up(),
                    request.is_pitch(),
                    "{request} from {start:?}"
                );
            }
        }
    }

    #[test]
    fn test_pitch_up_then_down_restores_heading() {
        let mut frame = Orientation::default();
        frame.turn(TurnRequest::Up);
        assert_eq!(frame.heading(), Direction::Up);
        frame.turn(TurnRequest::Down);
        assert_eq!(frame.heading(), Direction::Right);
        assert!(!frame.heading().is_colinear(frame.up()));
    }

    #[test]
    fn test_four_identical_turns_return_to_start() {
        for start in Orientation::all() {
            for request in REQUESTS {
                let mut frame = start;
                for _ in 0..4 {
                    frame.turn(request);
                }
                assert_eq!(frame, start, "four x {request} from {start:?}");
            }
        }
    }

    #[test]
    fn test_loop_sequence() {
        let mut frame = Orientation::default();
        frame.turn(TurnRequest::Up);
        assert_eq!(frame, Orientation::new(Direction::Up, Direction::Left));
        frame.turn(TurnRequest::Left);
        assert_eq!(frame, Orientation::new(Direction::Front, Direction::Left));
        frame.turn(TurnRequest::Left);
        assert_eq!(frame, Orientation::new(Direction::Down, Direction::Left));
        frame.turn(TurnRequest::Down);
        assert_eq!(frame, Orientation::new(Direction::Right, Direction::Down));
    }
}
