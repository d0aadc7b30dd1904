use plotters::style::RGBColor;
use rand::Rng;

/// Uniform 24-bit color. Nothing stops two tracks from drawing the same one.
#[inline]
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> RGBColor {
    RGBColor(rng.gen(), rng.gen(), rng.gen())
}

/// One color per track, fresh on every call.
pub fn track_colors(count: usize) -> Vec<RGBColor> {
    let mut rng = rand::thread_rng();

    (0..count).map(|_| random_color(&mut rng)).collect()
}

pub fn hex(color: &RGBColor) -> String {
    format!("#{:02X}{:02X}{:02X}", color.0, color.1, color.2)
}
