//! One bitmap per output image. The backend is created, drawn, presented and
//! dropped inside a single call so nothing carries over between plots.

use crate::error::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

pub type Area<DB> = DrawingArea<DB, Shift>;

pub fn render_png<F>(path: &Path, size: (u32, u32), draw: F) -> Result<()>
where
    F: FnOnce(&Area<BitMapBackend<'_>>) -> Result<()>,
{
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    draw(&root)?;

    root.present()?;
    info!(path = %path.display(), width = size.0, height = size.1, "saved plot");

    Ok(())
}

/// Draws `title` centered at the top, one row per line, and returns the
/// area left below it.
pub fn draw_title<DB: DrawingBackend>(area: &Area<DB>, title: &str, size: u32) -> Result<Area<DB>> {
    let font = FontDesc::from(("sans-serif", size)).style(FontStyle::Bold);

    let mut rest = area.clone();
    for line in title.lines() {
        rest = rest.titled(line, font.clone())?;
    }

    Ok(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_written_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");

        render_png(&path, (64, 48), |_| Ok(())).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn draw_error_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");

        let res = render_png(&path, (64, 48), |_| {
            Err(crate::error::Error::Drawing("boom".into()))
        });

        assert!(res.is_err());
    }
}
