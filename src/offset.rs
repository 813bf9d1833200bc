/// Translation that moves the patch silhouette onto its notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    /// The slide distance submitted as the captcha answer.
    pub fn horizontal(&self) -> i32 {
        self.dx
    }
}

/// Offset from the silhouette's seed in the patch to the matched anchor.
pub fn resolve(anchor: (i32, i32), seed: (i32, i32)) -> Displacement {
    Displacement {
        dx: anchor.0 - seed.0,
        dy: anchor.1 - seed.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_can_be_negative() {
        let d = resolve((2, 7), (5, 3));
        assert_eq!(d, Displacement { dx: -3, dy: 4 });
        assert_eq!(d.horizontal(), -3);
    }
}
