//! The knockout pass: near-white pixels lose their alpha.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// Default per-channel threshold for "white enough".
pub const DEFAULT_THRESHOLD: u8 = 240;

/// Settings for the knockout pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutParams {
    /// Minimum value (inclusive) that all of r, g, b must reach for a pixel
    /// to count as background.
    pub threshold: u8,
}

impl Default for KnockoutParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// True iff every color channel is at or above `threshold`. Alpha is ignored.
#[inline]
pub fn is_background(px: &Rgba<u8>, threshold: u8) -> bool {
    let Rgba([r, g, b, _]) = *px;
    r >= threshold && g >= threshold && b >= threshold
}

/// Clear the alpha of every near-white pixel in place.
///
/// Color channels are never written, so the pass is idempotent. Returns the
/// number of pixels whose channels met the threshold, whether or not they
/// were already transparent.
pub fn knock_out_background(img: &mut RgbaImage, params: &KnockoutParams) -> u64 {
    let mut cleared = 0u64;
    for px in img.pixels_mut() {
        if is_background(px, params.threshold) {
            px[3] = 0;
            cleared += 1;
        }
    }
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_from_rgb(pixels: &[(u8, u8, u8)], width: u32, height: u32) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);
        for (i, &(r, g, b)) in pixels.iter().enumerate() {
            let x = i as u32 % width;
            let y = i as u32 / width;
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
        img
    }

    #[test]
    fn threshold_is_inclusive() {
        let t = DEFAULT_THRESHOLD;
        assert!(is_background(&Rgba([t, t, t, 255]), t));
        assert!(!is_background(&Rgba([t - 1, t, t, 255]), t));
        assert!(!is_background(&Rgba([t, t - 1, t, 255]), t));
        assert!(!is_background(&Rgba([t, t, t - 1, 255]), t));
    }

    #[test]
    fn alpha_does_not_affect_classification() {
        assert!(is_background(&Rgba([255, 255, 255, 0]), 240));
        assert!(!is_background(&Rgba([0, 0, 0, 0]), 240));
    }

    #[test]
    fn reference_two_by_two() {
        let mut img = image_from_rgb(
            &[(255, 255, 255), (0, 0, 0), (240, 240, 240), (239, 239, 239)],
            2,
            2,
        );
        let cleared = knock_out_background(&mut img, &KnockoutParams { threshold: 240 });

        assert_eq!(cleared, 2);
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 255, 255, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(0, 1), &Rgba([240, 240, 240, 0]));
        assert_eq!(img.get_pixel(1, 1), &Rgba([239, 239, 239, 255]));
    }

    #[test]
    fn non_background_pixels_are_byte_identical() {
        let mut img = image_from_rgb(&[(12, 200, 255), (239, 239, 239)], 2, 1);
        let before = img.clone();
        knock_out_background(&mut img, &KnockoutParams::default());
        assert_eq!(img, before);
    }

    #[test]
    fn pass_is_idempotent() {
        let mut img = image_from_rgb(
            &[(255, 255, 255), (240, 241, 250), (10, 10, 10), (200, 255, 255)],
            2,
            2,
        );
        let params = KnockoutParams::default();
        let first = knock_out_background(&mut img, &params);
        let snapshot = img.clone();
        let second = knock_out_background(&mut img, &params);

        assert_eq!(img, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn extreme_thresholds() {
        let pixels = [(0, 0, 0), (254, 254, 254), (255, 255, 255)];
        let mut img = image_from_rgb(&pixels, 3, 1);
        assert_eq!(
            knock_out_background(&mut img, &KnockoutParams { threshold: 0 }),
            3
        );

        let mut img = image_from_rgb(&pixels, 3, 1);
        assert_eq!(
            knock_out_background(&mut img, &KnockoutParams { threshold: 255 }),
            1
        );
        assert_eq!(img.get_pixel(1, 0)[3], 255);
        assert_eq!(img.get_pixel(2, 0)[3], 0);
    }
}
