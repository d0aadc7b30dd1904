use crate::bbox::{BBox, Xywh};
use nalgebra as na;

/// One object's history as read from a tracker dump.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// 1-based ordinal of the data line the track came from
    pub track_id: usize,

    /// raw id column, kept as written by the producer
    pub source_id: String,

    // centroids, in frame order
    pub points: Vec<na::Point2<f64>>,

    // (w, h) per point, empty unless every point carried a box
    pub sizes: Vec<na::Vector2<f64>>,
}

impl Track {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn has_bbox(&self) -> bool {
        !self.sizes.is_empty()
    }

    #[inline]
    pub fn label(&self) -> String {
        format!("Blob #{}", self.track_id)
    }

    #[inline]
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    #[inline]
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    #[inline]
    pub fn iter_xy(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| (p.x, p.y))
    }

    /// Box at `frame`, if both the centroid and the size exist there.
    pub fn bbox_at(&self, frame: usize) -> Option<BBox<Xywh>> {
        let center = self.points.get(frame)?;
        let size = self.sizes.get(frame)?;

        Some(BBox::from_parts(*center, *size))
    }
}

/// Everything read from one tracks file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackSet {
    pub tracks: Vec<Track>,

    /// set once any point in the file carried box fields
    pub has_bbox: bool,
}

impl TrackSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}
