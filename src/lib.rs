//! Plots multi-object tracker dumps.
//!
//! A dump is a `;`-separated text file with one track per line. Tracks with
//! only centroids get a single trajectory chart, tracks with box sizes get a
//! second panel showing the boxes at a handful of sampled frames.

pub mod bbox;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod loader;
pub mod plot;
pub mod render;
pub mod track;
pub mod writer;

pub use config::{PlotConfig, PLOT_CONFIG};
pub use error::{Error, Result};
pub use loader::{load_tracks, read_tracks};
pub use plot::{plot_all, plot_key, KeyReport, PlotOutcome};
pub use track::{Track, TrackSet};
pub use writer::{save_tracks, write_tracks};
