use crate::config::{PlotConfig, PLOT_CONFIG};
use crate::error::Result;
use crate::loader::load_tracks;
use crate::render::{render_bbox, render_simple};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// What happened to one plot request. Everything except a parse or drawing
/// failure ends up here.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotOutcome {
    Saved(PathBuf),
    UnknownKey(String),
    MissingInput(PathBuf),
    NoData(PathBuf),
}

impl PlotOutcome {
    #[inline]
    pub fn is_saved(&self) -> bool {
        matches!(self, PlotOutcome::Saved(_))
    }
}

impl fmt::Display for PlotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotOutcome::Saved(path) => write!(f, "Saved: {}", path.display()),
            PlotOutcome::UnknownKey(key) => {
                writeln!(f, "Unknown plot key: {}", key)?;
                write!(f, "Available: {}", available_keys())
            }
            PlotOutcome::MissingInput(path) => write!(f, "CSV not found: {}", path.display()),
            PlotOutcome::NoData(path) => write!(f, "No data in: {}", path.display()),
        }
    }
}

pub fn available_keys() -> String {
    PlotConfig::keys().collect::<Vec<_>>().join(", ")
}

pub fn plot_key<P: AsRef<Path>>(key: &str, dir: P) -> Result<PlotOutcome> {
    let dir = dir.as_ref();

    let config = match PlotConfig::find(key) {
        Some(config) => config,
        None => {
            warn!(key, "unknown plot key");
            return Ok(PlotOutcome::UnknownKey(key.to_string()));
        }
    };

    let csv_path = dir.join(config.csv);
    if !csv_path.exists() {
        warn!(key, path = %csv_path.display(), "input missing");
        return Ok(PlotOutcome::MissingInput(csv_path));
    }

    let set = load_tracks(&csv_path)?;
    if set.is_empty() {
        warn!(key, path = %csv_path.display(), "no tracks");
        return Ok(PlotOutcome::NoData(csv_path));
    }

    let out = dir.join(config.out);
    if set.has_bbox {
        render_bbox(&set.tracks, config, &out)?;
    } else {
        render_simple(&set.tracks, config, &out)?;
    }

    Ok(PlotOutcome::Saved(out))
}

#[derive(Debug)]
pub struct KeyReport {
    pub key: &'static str,
    pub outcome: Result<PlotOutcome>,
}

/// Runs every preset whose input exists. A failing key is logged and the
/// rest still run.
pub fn plot_all<P: AsRef<Path>>(dir: P) -> Vec<KeyReport> {
    let dir = dir.as_ref();
    let mut reports = Vec::new();

    for config in PLOT_CONFIG {
        if !dir.join(config.csv).exists() {
            debug!(key = config.key, "skipping, no input");
            continue;
        }

        let outcome = plot_key(config.key, dir);
        if let Err(err) = &outcome {
            error!(key = config.key, %err, "plot failed");
        }

        reports.push(KeyReport {
            key: config.key,
            outcome,
        });
    }

    info!(
        attempted = reports.len(),
        saved = reports
            .iter()
            .filter(|r| matches!(&r.outcome, Ok(o) if o.is_saved()))
            .count(),
        "batch done"
    );

    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn unknown_key_message_lists_keys() {
        let msg = PlotOutcome::UnknownKey("foo".into()).to_string();

        assert!(msg.starts_with("Unknown plot key: foo\nAvailable: simple_spread, simple_naive"));
        assert!(msg.ends_with("bbox_iou_naive"));
    }

    #[test]
    fn outcome_messages() {
        let p = PathBuf::from("data/x.csv");

        assert_eq!(PlotOutcome::MissingInput(p.clone()).to_string(), "CSV not found: data/x.csv");
        assert_eq!(PlotOutcome::NoData(p.clone()).to_string(), "No data in: data/x.csv");
        assert_eq!(PlotOutcome::Saved(p).to_string(), "Saved: data/x.csv");
    }

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();

        let outcome = plot_key("bbox_naive", dir.path()).unwrap();
        assert_eq!(outcome, PlotOutcome::MissingInput(dir.path().join("blobs_bbox_naive.csv")));
    }

    #[test]
    fn header_only_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blobs_spread.csv"), "id;track\n").unwrap();

        let outcome = plot_key("simple_spread", dir.path()).unwrap();
        assert!(matches!(outcome, PlotOutcome::NoData(_)));
        assert!(!dir.path().join("mot_simple_spread.png").exists());
    }

    #[test]
    fn bbox_file_picks_dual_panel() {
        let dir = tempfile::tempdir().unwrap();
        // the preset decides the output name, the data decides the renderer
        fs::write(
            dir.path().join("blobs_spread.csv"),
            "id;track\n1;10,10,4,4|20,20,4,4|30,30,4,4\n",
        )
        .unwrap();

        let outcome = plot_key("simple_spread", dir.path()).unwrap();
        assert_eq!(outcome, PlotOutcome::Saved(dir.path().join("mot_simple_spread.png")));
        assert!(outcome.is_saved());

        // IHDR width
        let png = fs::read(dir.path().join("mot_simple_spread.png")).unwrap();
        let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
        assert_eq!(width, crate::render::BBOX_SIZE.0);
    }

    #[test]
    fn empty_dir_batch_does_nothing() {
        let dir = tempfile::tempdir().unwrap();

        assert!(plot_all(dir.path()).is_empty());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
