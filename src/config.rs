//! Compiled-in plot presets. Table order is the batch order.

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub key: &'static str,
    pub title: &'static str,
    pub csv: &'static str,
    pub out: &'static str,
    pub xlim: (f64, f64),
}

const SPREAD: (f64, f64) = (0.0, 800.0);
const DENSE: (f64, f64) = (100.0, 450.0);

pub const PLOT_CONFIG: &[PlotConfig] = &[
    PlotConfig {
        key: "simple_spread",
        title: "MOT for SimpleBlob\nvia simple tracker (spread)",
        csv: "blobs_spread.csv",
        out: "mot_simple_spread.png",
        xlim: SPREAD,
    },
    PlotConfig {
        key: "simple_naive",
        title: "MOT for SimpleBlob\nvia simple tracker (dense)",
        csv: "blobs_similar.csv",
        out: "mot_simple_naive.png",
        xlim: DENSE,
    },
    PlotConfig {
        key: "simple_bytetrack_spread",
        title: "MOT for SimpleBlob\nvia ByteTrack (spread)",
        csv: "blobs_bytetrack_spread.csv",
        out: "mot_simple_bytetrack_spread.png",
        xlim: SPREAD,
    },
    PlotConfig {
        key: "simple_bytetrack_naive",
        title: "MOT for SimpleBlob\nvia ByteTrack (dense)",
        csv: "blobs_bytetrack_naive.csv",
        out: "mot_simple_bytetrack_naive.png",
        xlim: DENSE,
    },
    PlotConfig {
        key: "simple_iou_spread",
        title: "MOT for SimpleBlob\nvia IoU tracker (spread)",
        csv: "blobs_iou_spread.csv",
        out: "mot_simple_iou_spread.png",
        xlim: SPREAD,
    },
    PlotConfig {
        key: "simple_iou_naive",
        title: "MOT for SimpleBlob\nvia IoU tracker (dense)",
        csv: "blobs_iou_naive.csv",
        out: "mot_simple_iou_naive.png",
        xlim: DENSE,
    },
    PlotConfig {
        key: "bbox_spread",
        title: "MOT for BlobBBox\nvia simple tracker (spread)",
        csv: "blobs_bbox_spread.csv",
        out: "mot_bbox_spread.png",
        xlim: SPREAD,
    },
    PlotConfig {
        key: "bbox_naive",
        title: "MOT for BlobBBox\nvia simple tracker (dense)",
        csv: "blobs_bbox_naive.csv",
        out: "mot_bbox_naive.png",
        xlim: DENSE,
    },
    PlotConfig {
        key: "bbox_bytetrack_spread",
        title: "MOT for BlobBBox\nvia ByteTrack (spread)",
        csv: "blobs_bbox_bytetrack_spread.csv",
        out: "mot_bbox_bytetrack_spread.png",
        xlim: SPREAD,
    },
    PlotConfig {
        key: "bbox_bytetrack_naive",
        title: "MOT for BlobBBox\nvia ByteTrack (dense)",
        csv: "blobs_bbox_bytetrack_naive.csv",
        out: "mot_bbox_bytetrack_naive.png",
        xlim: DENSE,
    },
    PlotConfig {
        key: "bbox_iou_spread",
        title: "MOT for BlobBBox\nvia IoU tracker (spread)",
        csv: "blobs_bbox_iou_spread.csv",
        out: "mot_bbox_iou_spread.png",
        xlim: SPREAD,
    },
    PlotConfig {
        key: "bbox_iou_naive",
        title: "MOT for BlobBBox\nvia IoU tracker (dense)",
        csv: "blobs_bbox_iou_naive.csv",
        out: "mot_bbox_iou_naive.png",
        xlim: DENSE,
    },
];

impl PlotConfig {
    pub fn find(key: &str) -> Option<&'static PlotConfig> {
        PLOT_CONFIG.iter().find(|c| c.key == key)
    }

    pub fn keys() -> impl Iterator<Item = &'static str> {
        PLOT_CONFIG.iter().map(|c| c.key)
    }
}
