//! slidefit: solve slide/jigsaw captchas by contour fitting.
//!
//! The captcha hands out two images: a small patch holding an opaque puzzle
//! piece, and a background with a white notch the piece belongs in. The
//! piece's outline is traced in the patch, then slid over the background
//! until every outline pixel lands on the notch colour. The horizontal
//! distance between the two positions is the answer.
//!
//! # Example
//!
//! ```no_run
//! let patch = std::fs::read("patch.png")?;
//! let background = std::fs::read("background.png")?;
//! let displacement = slidefit::solve(&patch, &background)?;
//! println!("slide by {}", displacement.horizontal());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod bitmap;
mod config;
mod contour;
mod fit;
mod locate;
mod offset;
mod trace;

pub mod challenge;
pub mod error;
pub mod render;

#[cfg(feature = "portal")]
pub mod portal;

pub use bitmap::PixelGrid;
pub use config::{PortalConfig, SolveConfig};
pub use contour::Contour;
pub use error::{PortalError, SolveError};
pub use offset::Displacement;
pub use trace::Direction;

use log::{debug, info};

/// Everything one solve produced, kept for inspection and debugging.
#[derive(Debug, Clone)]
pub struct SolveContext {
    pub patch: PixelGrid,
    pub background: PixelGrid,
    pub seed: (i32, i32),
    pub contour: Contour,
    pub anchor: (i32, i32),
    pub displacement: Displacement,
}

/// Decode both images and compute the displacement with default settings.
pub fn solve(patch: &[u8], background: &[u8]) -> Result<Displacement, SolveError> {
    solve_with(patch, background, &SolveConfig::default()).map(|ctx| ctx.displacement)
}

/// Decode both images and run the full pipeline.
pub fn solve_with(patch: &[u8], background: &[u8], config: &SolveConfig) -> Result<SolveContext, SolveError> {
    let patch = PixelGrid::decode(patch)?;
    debug!("patch decoded, {}x{}", patch.width(), patch.height());
    let background = PixelGrid::decode(background)?;
    debug!("background decoded, {}x{}", background.width(), background.height());
    solve_grids(patch, background, config)
}

/// Run the pipeline on already decoded images.
///
/// Stages run strictly in order and the first failure ends the solve:
/// seed lookup, outline trace, fit search, offset.
pub fn solve_grids(patch: PixelGrid, background: PixelGrid, config: &SolveConfig) -> Result<SolveContext, SolveError> {
    let seed = locate::first_opaque(&patch, config.opaque_alpha).ok_or(SolveError::OutlineNotFound)?;
    debug!("silhouette seed at {:?}", seed);

    let contour = trace::trace(&patch, seed, config)?;

    let anchor = fit::search(&background, &contour, config.sentinel).ok_or(SolveError::PatchFitNotFound)?;
    let displacement = offset::resolve(anchor, seed);
    info!(
        "patch seed {:?} fits at {:?}, displacement ({}, {})",
        seed, anchor, displacement.dx, displacement.dy
    );

    Ok(SolveContext {
        patch,
        background,
        seed,
        contour,
        anchor,
        displacement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn empty_patch_has_no_outline() {
        let patch = PixelGrid::new(RgbaImage::new(4, 4));
        let background = PixelGrid::new(RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])));
        let err = solve_grids(patch, background, &SolveConfig::default()).unwrap_err();
        assert_eq!(err, SolveError::OutlineNotFound);
    }

    #[test]
    fn background_without_sentinel_has_no_fit() {
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(1, 1, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 2, Rgba([0, 0, 0, 255]));
        let patch = PixelGrid::new(img);
        let background = PixelGrid::new(RgbaImage::from_pixel(8, 8, Rgba([200, 10, 10, 255])));
        let err = solve_grids(patch, background, &SolveConfig::default()).unwrap_err();
        assert_eq!(err, SolveError::PatchFitNotFound);
    }
}
