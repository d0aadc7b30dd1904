//! Reader for tracker dumps.
//!
//! ```text
//! id;track
//! <id>;x,y|x,y|...
//! <id>;cx,cy,w,h|cx,cy,w,h|...
//! ```
//!
//! The first line is always treated as a header. A data line becomes a
//! track whose id is the line's ordinal after the header, so skipped lines
//! still use up an id.

use crate::error::{Error, Result};
use crate::track::{Track, TrackSet};
use nalgebra as na;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, trace};

pub const FIELD_DELIMITER: char = ';';
pub const POINT_DELIMITER: char = '|';
pub const VALUE_DELIMITER: char = ',';

pub fn load_tracks<P: AsRef<Path>>(path: P) -> Result<TrackSet> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let set = read_tracks(file)?;

    debug!(
        path = %path.display(),
        tracks = set.len(),
        has_bbox = set.has_bbox,
        "loaded tracks"
    );

    Ok(set)
}

pub fn read_tracks<R: Read>(reader: R) -> Result<TrackSet> {
    let mut lines = BufReader::new(reader).lines();
    let mut set = TrackSet::default();

    // header
    if lines.next().transpose()?.is_none() {
        return Ok(set);
    }

    for (idx, line) in lines.enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let mut fields = line.trim_end().split(FIELD_DELIMITER);

        let (source_id, points) = match (fields.next(), fields.next()) {
            (Some(id), Some(points)) => (id, points),
            _ => {
                trace!(line = line_no, "skipping line without track column");
                continue;
            }
        };

        let mut track = Track {
            track_id: line_no,
            source_id: source_id.to_string(),
            points: Vec::new(),
            sizes: Vec::new(),
        };

        for chunk in points.split(POINT_DELIMITER) {
            let (point, size) = parse_point(line_no, chunk)?;
            track.points.push(point);

            if let Some(size) = size {
                track.sizes.push(size);
                set.has_bbox = true;
            }
        }

        if track.sizes.len() != track.points.len() {
            if !track.sizes.is_empty() {
                debug!(line = line_no, "dropping partial box data");
            }
            track.sizes.clear();
        }

        set.tracks.push(track);
    }

    Ok(set)
}

fn parse_point(line: usize, chunk: &str) -> Result<(na::Point2<f64>, Option<na::Vector2<f64>>)> {
    let values: Vec<&str> = chunk.split(VALUE_DELIMITER).collect();

    if values.len() < 2 {
        return Err(Error::MissingField {
            line,
            record: chunk.to_string(),
        });
    }

    let point = na::Point2::new(parse_value(line, values[0])?, parse_value(line, values[1])?);

    let size = if values.len() >= 4 {
        Some(na::Vector2::new(
            parse_value(line, values[2])?,
            parse_value(line, values[3])?,
        ))
    } else {
        None
    };

    Ok((point, size))
}

#[inline]
fn parse_value(line: usize, value: &str) -> Result<f64> {
    let v: f64 = value.trim().parse().map_err(|source| Error::Parse {
        line,
        value: value.to_string(),
        source,
    })?;

    // `inf`, `nan` and overflowing literals parse fine but cannot be plotted
    if !v.is_finite() {
        return Err(Error::NonFinite {
            line,
            value: value.to_string(),
        });
    }

    Ok(v)
}
