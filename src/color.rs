use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Plot colours
// ---------------------------------------------------------------------------

/// Hue of the plotted series, in degrees.
const SERIES_HUE: f32 = 210.0;

/// Colour of the plotted series as 8-bit sRGB.
pub fn series_rgb() -> [u8; 3] {
    hsl_to_rgb(Hsl::new(SERIES_HUE, 0.75, 0.45))
}

/// Colour of axes and ticks in raster output.
pub fn axis_rgb() -> [u8; 3] {
    hsl_to_rgb(Hsl::new(SERIES_HUE, 0.0, 0.2))
}

pub fn series_color32() -> Color32 {
    let [r, g, b] = series_rgb();
    Color32::from_rgb(r, g, b)
}

fn hsl_to_rgb(hsl: Hsl) -> [u8; 3] {
    let rgb: Srgb = hsl.into_color();
    [
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_is_bluish() {
        let [r, _, b] = series_rgb();
        assert!(b > r);
    }

    #[test]
    fn test_axis_is_grey() {
        let [r, g, b] = axis_rgb();
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}
