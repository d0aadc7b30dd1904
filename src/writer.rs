//! Writes tracks back out in the format [`crate::loader`] reads, the same
//! layout tracker harnesses dump for plotting.

use crate::error::Result;
use crate::track::Track;
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub fn write_tracks<W: Write>(writer: W, tracks: &[Track]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record(["id", "track"])?;

    for track in tracks {
        let id = if track.source_id.is_empty() {
            track.track_id.to_string()
        } else {
            track.source_id.clone()
        };

        wtr.write_record([id, format_points(track)])?;
    }

    wtr.flush()?;

    Ok(())
}

pub fn save_tracks<P: AsRef<Path>>(path: P, tracks: &[Track]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_tracks(std::io::BufWriter::new(file), tracks)?;

    debug!(path = %path.display(), tracks = tracks.len(), "saved tracks");

    Ok(())
}

fn format_points(track: &Track) -> String {
    let with_sizes = track.has_bbox();

    track
        .points
        .iter()
        .enumerate()
        .map(|(idx, pt)| match track.sizes.get(idx) {
            Some(size) if with_sizes => {
                format!("{:.6},{:.6},{:.6},{:.6}", pt.x, pt.y, size.x, size.y)
            }
            _ => format!("{:.6},{:.6}", pt.x, pt.y),
        })
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::read_tracks;
    use nalgebra as na;

    fn track(id: usize, source: &str, boxed: bool) -> Track {
        let points = vec![na::Point2::new(1.25, -2.0), na::Point2::new(3.0, 4.5)];
        let sizes = if boxed {
            vec![na::Vector2::new(10.0, 20.0), na::Vector2::new(11.0, 21.0)]
        } else {
            vec![]
        };

        Track {
            track_id: id,
            source_id: source.into(),
            points,
            sizes,
        }
    }

    #[test]
    fn writes_header_and_points() {
        let mut out = Vec::new();
        write_tracks(&mut out, &[track(1, "a1", false), track(2, "", true)]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "id;track");
        assert_eq!(lines[1], "a1;1.250000,-2.000000|3.000000,4.500000");
        assert_eq!(
            lines[2],
            "2;1.250000,-2.000000,10.000000,20.000000|3.000000,4.500000,11.000000,21.000000"
        );
    }

    #[test]
    fn loader_reads_written_tracks() {
        let tracks = vec![track(1, "a", true), track(2, "b", true)];

        let mut out = Vec::new();
        write_tracks(&mut out, &tracks).unwrap();
        let set = read_tracks(out.as_slice()).unwrap();

        assert!(set.has_bbox);
        assert_eq!(set.tracks, tracks);
    }
}
