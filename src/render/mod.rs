pub mod bbox;
pub mod simple;

pub use self::bbox::render_bbox;
pub use self::simple::render_simple;

use crate::bbox::{BBox, Ltrb};
use crate::canvas::Area;
use crate::error::{Error, Result};
use crate::track::Track;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::ops::Range;

pub const DPI: f64 = 100.0;

pub const SIMPLE_SIZE: (u32, u32) = (720, 480);
pub const BBOX_SIZE: (u32, u32) = (1440, 480);

pub const TITLE_PT: f64 = 15.0;
pub const CAPTION_PT: f64 = 12.0;

// autoscale headroom on each side
pub const PADDING: f64 = 0.05;

const MARGIN: u32 = 10;
const X_LABEL_AREA: u32 = 40;
const Y_LABEL_AREA: u32 = 50;
const LINE_WIDTH: u32 = 2;

pub type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

#[inline]
pub fn font_px(points: f64) -> u32 {
    (points * DPI / 72.0).round() as u32
}

/// Frames that get a box drawn: every `max(1, n / 8)`th one.
pub fn sample_frames(num_frames: usize) -> Vec<usize> {
    let step = (num_frames / 8).max(1);

    (0..num_frames).step_by(step).collect()
}

/// Boxes fade in from 0.3 to 1.0 over the track's duration.
#[inline]
pub fn frame_alpha(frame: usize, num_frames: usize) -> f64 {
    if num_frames == 0 {
        return 1.0;
    }

    0.3 + 0.7 * frame as f64 / num_frames as f64
}

pub fn point_bounds(tracks: &[Track]) -> Option<BBox<Ltrb>> {
    tracks
        .iter()
        .flat_map(|t| t.points.iter())
        .map(|p| BBox::point(*p))
        .reduce(|a, b| a.union(&b))
}

/// Vertical range with the larger value at the bottom of the image.
#[inline]
fn inverted_y(bounds: Option<&BBox<Ltrb>>) -> Range<f64> {
    match bounds {
        Some(b) => b.bottom()..b.top(),
        None => 1.0..0.0,
    }
}

/// Pixel size of the plotting rectangle [`build_chart`] leaves inside `area`.
pub(crate) fn plot_pixels<DB: DrawingBackend>(area: &Area<DB>) -> (u32, u32) {
    let (w, h) = area.dim_in_pixel();

    (
        w.saturating_sub(2 * MARGIN + Y_LABEL_AREA),
        h.saturating_sub(2 * MARGIN + X_LABEL_AREA),
    )
}

pub(crate) fn caption<DB: DrawingBackend>(area: &Area<DB>, text: &str) -> Result<Area<DB>> {
    let font = FontDesc::from(("sans-serif", font_px(CAPTION_PT))).style(FontStyle::Bold);

    Ok(area.titled(text, font)?)
}

/// Rejects ranges plotters cannot place key points on: non-finite ends, a
/// span that overflows, or an empty span.
fn check_range(axis: &'static str, range: &Range<f64>) -> Result<()> {
    let span = (range.end - range.start).abs();

    if span.is_finite() && span > 0.0 {
        Ok(())
    } else {
        Err(Error::Range {
            axis,
            start: range.start,
            end: range.end,
        })
    }
}

pub(crate) fn build_chart<'a, DB: DrawingBackend + 'a>(
    area: &Area<DB>,
    x: Range<f64>,
    y: Range<f64>,
) -> Result<Chart<'a, DB>> {
    check_range("x", &x)?;
    check_range("y", &y)?;

    let mut chart = ChartBuilder::on(area)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x, y)?;

    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .bold_line_style(&BLACK.mix(0.2))
        .x_desc("X")
        .y_desc("Y")
        .draw()?;

    Ok(chart)
}

pub(crate) fn draw_legend<'a, DB: DrawingBackend + 'a>(chart: &mut Chart<'a, DB>) -> Result<()> {
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK.mix(0.3))
        .draw()?;

    Ok(())
}

/// Centroid polylines against the preset x limits, y growing downward.
pub(crate) fn draw_trajectories<DB: DrawingBackend>(
    area: &Area<DB>,
    tracks: &[Track],
    colors: &[RGBColor],
    xlim: (f64, f64),
) -> Result<()> {
    let bounds = point_bounds(tracks).map(|b| b.padded(PADDING));
    let mut chart = build_chart(area, xlim.0..xlim.1, inverted_y(bounds.as_ref()))?;

    for (track, &color) in tracks.iter().zip(colors) {
        chart
            .draw_series(LineSeries::new(track.iter_xy(), color.stroke_width(LINE_WIDTH)))?
            .label(track.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });
    }

    if !tracks.is_empty() {
        draw_legend(&mut chart)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_stride() {
        assert!(sample_frames(0).is_empty());
        assert_eq!(sample_frames(5), [0, 1, 2, 3, 4]);
        assert_eq!(sample_frames(16), [0, 2, 4, 6, 8, 10, 12, 14]);
        assert_eq!(sample_frames(20), [0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
    }

    #[test]
    fn alpha_ramps_with_frame() {
        assert_eq!(frame_alpha(0, 10), 0.3);
        assert!((frame_alpha(5, 10) - 0.65).abs() < 1e-12);
        assert!(frame_alpha(9, 10) < 1.0);
    }

    #[test]
    fn font_points_to_pixels() {
        assert_eq!(font_px(TITLE_PT), 21);
        assert_eq!(font_px(CAPTION_PT), 17);
    }

    #[test]
    fn undrawable_ranges() {
        assert!(check_range("x", &(0.0..800.0)).is_ok());
        assert!(check_range("y", &(40.0..10.0)).is_ok());

        assert!(matches!(
            check_range("y", &(f64::NEG_INFINITY..0.0)),
            Err(Error::Range { axis: "y", .. })
        ));
        assert!(check_range("x", &(f64::NAN..1.0)).is_err());
        assert!(check_range("x", &(-1e308..1.5e308)).is_err());
        assert!(check_range("x", &(3.0..3.0)).is_err());
    }

    #[test]
    fn overflowing_bounds_are_rejected() {
        let tracks = vec![Track {
            track_id: 1,
            source_id: "1".into(),
            points: vec![
                nalgebra::Point2::new(0.0, -1e308),
                nalgebra::Point2::new(10.0, 1e308),
            ],
            sizes: vec![],
        }];

        let padded = point_bounds(&tracks).unwrap().padded(PADDING);
        assert!(check_range("y", &inverted_y(Some(&padded))).is_err());
    }

    #[test]
    fn y_axis_is_inverted() {
        let b = BBox::ltrb(0.0, 10.0, 5.0, 40.0);
        assert_eq!(inverted_y(Some(&b)), 40.0..10.0);
        assert_eq!(inverted_y(None), 1.0..0.0);
    }
}
