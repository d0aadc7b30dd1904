use super::{
    build_chart, caption, draw_legend, draw_trajectories, font_px, frame_alpha, plot_pixels,
    point_bounds, sample_frames, BBOX_SIZE, PADDING, TITLE_PT,
};
use crate::bbox::{BBox, Ltrb};
use crate::canvas::{self, Area};
use crate::color::{self, track_colors};
use crate::config::PlotConfig;
use crate::error::Result;
use crate::track::Track;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

pub const TRAJECTORY_CAPTION: &str = "Center Trajectories";
pub const BOXES_CAPTION: &str = "Bounding Boxes (selected frames)";

const BOX_WIDTH: u32 = 2;
const MARKER_RADIUS: i32 = 2;

/// Trajectories on the left, sampled boxes on the right, one color per track
/// across both panels.
pub fn render_bbox<P: AsRef<Path>>(tracks: &[Track], config: &PlotConfig, out: P) -> Result<()> {
    let colors = track_colors(tracks.len());
    debug!(
        key = config.key,
        colors = ?colors.iter().map(color::hex).collect::<Vec<_>>(),
        "rendering boxes"
    );

    canvas::render_png(out.as_ref(), BBOX_SIZE, |root| {
        let body = canvas::draw_title(root, config.title, font_px(TITLE_PT))?;
        let (width, _) = body.dim_in_pixel();
        let (left, right) = body.split_horizontally(width / 2);

        let left = caption(&left, TRAJECTORY_CAPTION)?;
        draw_trajectories(&left, tracks, &colors, config.xlim)?;

        let right = caption(&right, BOXES_CAPTION)?;
        draw_boxes(&right, tracks, &colors)
    })
}

/// Everything the box panel draws: trajectories plus the sampled boxes.
pub fn box_panel_bounds(tracks: &[Track], frames: &[usize]) -> Option<BBox<Ltrb>> {
    let boxes = tracks.iter().flat_map(|track| {
        frames
            .iter()
            .filter_map(move |&frame| track.bbox_at(frame))
            .map(|bbox| bbox.as_ltrb())
    });

    point_bounds(tracks)
        .into_iter()
        .chain(boxes)
        .reduce(|a, b| a.union(&b))
}

fn draw_boxes<DB: DrawingBackend>(area: &Area<DB>, tracks: &[Track], colors: &[RGBColor]) -> Result<()> {
    // sampling follows the first track's length
    let num_frames = tracks.first().map(Track::len).unwrap_or(0);
    let frames = sample_frames(num_frames);

    let bounds = box_panel_bounds(tracks, &frames)
        .map(|b| b.padded(PADDING))
        .unwrap_or_else(|| BBox::ltrb(0.0, 0.0, 1.0, 1.0))
        .with_equal_aspect(plot_pixels(area));

    let mut chart = build_chart(
        area,
        bounds.left()..bounds.right(),
        bounds.bottom()..bounds.top(),
    )?;

    let mut labeled = false;

    for (track, &color) in tracks.iter().zip(colors) {
        chart.draw_series(LineSeries::new(
            track.iter_xy(),
            color.mix(0.3).stroke_width(1),
        ))?;

        for &frame in &frames {
            let bbox = match track.bbox_at(frame) {
                Some(bbox) => bbox,
                None => continue,
            };

            let corners = bbox.as_ltrb();
            let style = color.mix(frame_alpha(frame, num_frames)).stroke_width(BOX_WIDTH);

            let anno = chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (corners.left(), corners.top()),
                    (corners.right(), corners.bottom()),
                ],
                style,
            )))?;

            if frame == frames[0] {
                anno.label(track.label()).legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 16, y + 5)], color.stroke_width(BOX_WIDTH))
                });
                labeled = true;
            }

            let center = bbox.center();
            chart.draw_series(std::iter::once(Circle::new(
                (center.x, center.y),
                MARKER_RADIUS,
                color.mix(0.5).filled(),
            )))?;
        }
    }

    if labeled {
        draw_legend(&mut chart)?;
    }

    Ok(())
}
