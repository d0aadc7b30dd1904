use super::{draw_trajectories, font_px, SIMPLE_SIZE, TITLE_PT};
use crate::canvas;
use crate::color::{self, track_colors};
use crate::config::PlotConfig;
use crate::error::Result;
use crate::track::Track;
use std::path::Path;
use tracing::debug;

/// Centroid trajectories only, on a single set of axes.
pub fn render_simple<P: AsRef<Path>>(tracks: &[Track], config: &PlotConfig, out: P) -> Result<()> {
    let colors = track_colors(tracks.len());
    debug!(
        key = config.key,
        colors = ?colors.iter().map(color::hex).collect::<Vec<_>>(),
        "rendering trajectories"
    );

    canvas::render_png(out.as_ref(), SIMPLE_SIZE, |root| {
        let body = canvas::draw_title(root, config.title, font_px(TITLE_PT))?;

        draw_trajectories(&body, tracks, &colors, config.xlim)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotConfig;
    use nalgebra as na;

    fn track(id: usize, pts: &[(f64, f64)]) -> Track {
        Track {
            track_id: id,
            source_id: id.to_string(),
            points: pts.iter().map(|&(x, y)| na::Point2::new(x, y)).collect(),
            sizes: vec![],
        }
    }

    #[test]
    fn renders_tracks() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("simple.png");
        let config = PlotConfig::find("simple_spread").unwrap();

        let tracks = vec![
            track(1, &[(10.0, 10.0), (50.0, 60.0), (90.0, 120.0)]),
            track(2, &[(700.0, 400.0), (650.0, 380.0)]),
        ];

        render_simple(&tracks, config, &out).unwrap();
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn empty_track_list_still_writes() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.png");

        render_simple(&[], PlotConfig::find("simple_naive").unwrap(), &out).unwrap();
        assert!(out.exists());
    }
}
