/// A closed boundary walk around one opaque silhouette.
///
/// Points are absolute pixel coordinates in the patch image; `seed` is the
/// pixel the walk started from and serves as the alignment anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    points: Vec<(i32, i32)>,
    seed: (i32, i32),
}

impl Contour {
    pub(crate) fn new(points: Vec<(i32, i32)>, seed: (i32, i32)) -> Self {
        Contour { points, seed }
    }

    /// Points in walk order. The first and last entries are both the seed.
    pub fn points(&self) -> &[(i32, i32)] {
        &self.points
    }

    pub fn seed(&self) -> (i32, i32) {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Each point relative to the seed.
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (sx, sy) = self.seed;
        self.points.iter().map(move |&(x, y)| (x - sx, y - sy))
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.points.contains(&(x, y))
    }

    /// True when the walk returns to its start and every step is a single
    /// orthogonal move.
    pub fn is_closed_walk(&self) -> bool {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return false;
        };
        first == last
            && self
                .points
                .windows(2)
                .all(|w| (w[0].0 - w[1].0).abs() + (w[0].1 - w[1].1).abs() == 1)
    }
}
