//! Boundary following around the patch silhouette.
//!
//! The walker keeps a facing direction and, at every pixel, tries to turn
//! right, then go straight, then turn left, taking the first neighbour that
//! is opaque. "Right" here means the next direction in the cyclic order
//! Down → Right → Up → Left, which on a y-down image hugs the outside of
//! the region. The tie-break order is fixed; changing it changes which
//! pixels end up on the contour.

use log::debug;

use crate::bitmap::PixelGrid;
use crate::config::SolveConfig;
use crate::contour::Contour;
use crate::error::SolveError;

/// Walking direction on a y-down pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down = 0,
    Right = 1,
    Up = 2,
    Left = 3,
}

impl Direction {
    const ALL: [Direction; 4] = [Direction::Down, Direction::Right, Direction::Up, Direction::Left];

    fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }

    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
        }
    }

    pub fn turn_right(self) -> Self {
        Self::from_index(self as usize + 1)
    }

    pub fn turn_left(self) -> Self {
        Self::from_index(self as usize + 3)
    }

    pub fn reverse(self) -> Self {
        Self::from_index(self as usize + 2)
    }

    /// Candidate directions in probing order. Never includes a reversal.
    fn candidates(self) -> [Direction; 3] {
        [self.turn_right(), self, self.turn_left()]
    }

    fn step(self, (x, y): (i32, i32)) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }
}

/// Walk the boundary of the opaque region containing `seed`.
///
/// `seed` must be opaque and should be the first opaque pixel in column-major
/// order, so the walk starts facing down along the region's left edge.
/// When all three candidates are blocked the walker turns around in place,
/// which lets it back out of one-pixel-wide spurs. A walk that has not
/// returned to the seed after `step_limit_factor * width * height` steps is
/// reported as [`SolveError::MalformedSilhouette`].
pub fn trace(grid: &PixelGrid, seed: (i32, i32), config: &SolveConfig) -> Result<Contour, SolveError> {
    let max_steps = config.step_limit_factor * (grid.width() as usize) * (grid.height() as usize);
    let opaque = |(x, y): (i32, i32)| grid.is_opaque(x, y, config.opaque_alpha);

    let mut points = vec![seed];
    let mut position = seed;
    let mut facing = Direction::Down;
    let mut steps = 0;

    loop {
        if steps >= max_steps {
            debug!("trace from {:?} gave up after {} steps", seed, steps);
            return Err(SolveError::MalformedSilhouette { steps });
        }
        steps += 1;

        match facing.candidates().into_iter().find(|d| opaque(d.step(position))) {
            Some(dir) => {
                position = dir.step(position);
                facing = dir;
                points.push(position);
                if position == seed {
                    break;
                }
            }
            None => facing = facing.reverse(),
        }
    }

    debug!("traced {} contour points from seed {:?} in {} steps", points.len(), seed, steps);
    Ok(Contour::new(points, seed))
}
