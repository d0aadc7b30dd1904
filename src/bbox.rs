use nalgebra as na;
use std::marker::PhantomData;

pub trait BBoxFormat: std::fmt::Debug {}

/// Left-top-right-bottom format, contains left top and right bottom corners
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ltrb;
impl BBoxFormat for Ltrb {}

/// X-y-width-height format, contains coordinates of the center of bbox and width-height
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Xywh;
impl BBoxFormat for Xywh {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox<F: BBoxFormat>([f64; 4], PhantomData<F>);

impl<F: BBoxFormat> BBox<F> {
    #[inline]
    pub fn as_slice(&self) -> &[f64; 4] {
        &self.0
    }
}

impl BBox<Xywh> {
    #[inline]
    pub fn xywh(cx: f64, cy: f64, w: f64, h: f64) -> Self {
        BBox([cx, cy, w, h], Default::default())
    }

    #[inline]
    pub fn from_parts(center: na::Point2<f64>, size: na::Vector2<f64>) -> Self {
        Self::xywh(center.x, center.y, size.x, size.y)
    }

    #[inline(always)]
    pub fn cx(&self) -> f64 {
        self.0[0]
    }

    #[inline(always)]
    pub fn cy(&self) -> f64 {
        self.0[1]
    }

    #[inline(always)]
    pub fn width(&self) -> f64 {
        self.0[2]
    }

    #[inline(always)]
    pub fn height(&self) -> f64 {
        self.0[3]
    }

    #[inline(always)]
    pub fn center(&self) -> na::Point2<f64> {
        na::Point2::new(self.cx(), self.cy())
    }

    #[inline]
    pub fn as_ltrb(&self) -> BBox<Ltrb> {
        self.into()
    }
}

impl BBox<Ltrb> {
    #[inline]
    pub fn ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        BBox([left, top, right, bottom], Default::default())
    }

    /// Degenerate box covering a single point.
    #[inline]
    pub fn point(p: na::Point2<f64>) -> Self {
        Self::ltrb(p.x, p.y, p.x, p.y)
    }

    #[inline(always)]
    pub fn left(&self) -> f64 {
        self.0[0]
    }

    #[inline(always)]
    pub fn top(&self) -> f64 {
        self.0[1]
    }

    #[inline(always)]
    pub fn right(&self) -> f64 {
        self.0[2]
    }

    #[inline(always)]
    pub fn bottom(&self) -> f64 {
        self.0[3]
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom() - self.top()
    }

    #[inline]
    pub fn union(&self, other: &BBox<Ltrb>) -> BBox<Ltrb> {
        Self::ltrb(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Grows every side by `ratio` of the extent along that axis. A zero extent
    /// is widened by one unit on each side so the result is never empty.
    pub fn padded(&self, ratio: f64) -> BBox<Ltrb> {
        let dx = if self.width() > 0.0 { self.width() * ratio } else { 1.0 };
        let dy = if self.height() > 0.0 { self.height() * ratio } else { 1.0 };

        Self::ltrb(
            self.left() - dx,
            self.top() - dy,
            self.right() + dx,
            self.bottom() + dy,
        )
    }

    /// Expands the shorter side (in data units per pixel) around its center
    /// so one data unit spans the same number of pixels on both axes.
    pub fn with_equal_aspect(&self, pixels: (u32, u32)) -> BBox<Ltrb> {
        let (pw, ph) = (pixels.0.max(1) as f64, pixels.1.max(1) as f64);
        let scale = (self.width() / pw).max(self.height() / ph);
        let (half_w, half_h) = (scale * pw / 2.0, scale * ph / 2.0);
        let (cx, cy) = (
            (self.left() + self.right()) / 2.0,
            (self.top() + self.bottom()) / 2.0,
        );

        Self::ltrb(cx - half_w, cy - half_h, cx + half_w, cy + half_h)
    }
}

impl<'a> From<&'a BBox<Xywh>> for BBox<Ltrb> {
    #[inline]
    fn from(v: &'a BBox<Xywh>) -> Self {
        Self(
            [
                v.0[0] - v.0[2] / 2.,
                v.0[1] - v.0[3] / 2.,
                v.0[0] + v.0[2] / 2.,
                v.0[1] + v.0[3] / 2.,
            ],
            Default::default(),
        )
    }
}

impl<'a> From<&'a BBox<Ltrb>> for BBox<Xywh> {
    #[inline]
    fn from(v: &'a BBox<Ltrb>) -> Self {
        Self(
            [
                v.0[0] + (v.0[2] - v.0[0]) / 2.0,
                v.0[1] + (v.0[3] - v.0[1]) / 2.0,
                v.0[2] - v.0[0],
                v.0[3] - v.0[1],
            ],
            Default::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_box_to_corners() {
        let b = BBox::xywh(10.0, 20.0, 4.0, 6.0).as_ltrb();
        assert_eq!(b.as_slice(), &[8.0, 17.0, 12.0, 23.0]);

        let back: BBox<Xywh> = (&b).into();
        assert_eq!(back, BBox::xywh(10.0, 20.0, 4.0, 6.0));
        assert_eq!(back.center(), na::Point2::new(10.0, 20.0));
    }

    #[test]
    fn union_covers_both() {
        let a = BBox::ltrb(0.0, 0.0, 1.0, 1.0);
        let b = BBox::ltrb(-2.0, 0.5, 0.5, 3.0);
        assert_eq!(a.union(&b), BBox::ltrb(-2.0, 0.0, 1.0, 3.0));
    }

    #[test]
    fn padding_degenerate_box() {
        let b = BBox::point(na::Point2::new(5.0, 5.0)).padded(0.05);
        assert_eq!(b, BBox::ltrb(4.0, 4.0, 6.0, 6.0));
    }

    #[test]
    fn equal_aspect_widens_short_axis() {
        // 100 x 10 units into a 200 x 200 px area: 0.5 units/px on both axes
        let b = BBox::ltrb(0.0, 0.0, 100.0, 10.0).with_equal_aspect((200, 200));
        assert_eq!(b.width(), 100.0);
        assert_eq!(b.height(), 100.0);
        assert_eq!(b.top(), -45.0);
        assert_eq!(b.bottom(), 55.0);
    }
}
