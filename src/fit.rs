//! Locating the notch in the background that the patch outline fits into.

use log::debug;

use crate::bitmap::PixelGrid;
use crate::contour::Contour;

/// Whether every contour point, translated so the seed lands on
/// `anchor`, hits a sentinel-coloured background pixel.
///
/// Points that fall outside the background fail the fit just like
/// points of the wrong colour; notches touching the image edge are never
/// matched.
pub fn fits_at(background: &PixelGrid, contour: &Contour, anchor: (i32, i32), sentinel: u32) -> bool {
    let (ax, ay) = anchor;
    contour
        .offsets()
        .all(|(dx, dy)| background.get(ax + dx, ay + dy) == Some(sentinel))
}

/// Scan the background in column-major order for the first sentinel pixel
/// at which the whole contour fits.
pub fn search(background: &PixelGrid, contour: &Contour, sentinel: u32) -> Option<(i32, i32)> {
    let mut candidates = 0usize;
    let found = (0..background.width())
        .flat_map(|x| (0..background.height()).map(move |y| (x, y)))
        .filter(|&(x, y)| background.color_at(x, y) == sentinel)
        .inspect(|_| candidates += 1)
        .find(|&anchor| fits_at(background, contour, anchor, sentinel));
    debug!("fit search tried {} sentinel anchors, match {:?}", candidates, found);
    found
}
