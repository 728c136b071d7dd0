//! Renderers for recorded snapshots.
//!
//! All exporters read snapshots through their public accessors only and
//! build strings; writing them anywhere is the caller's job.

pub mod json;
pub mod text;
pub mod web;

use std::fmt;
use std::str::FromStr;

use shapealbum_core::Snapshot;

pub use json::export_json;
pub use text::export_text;
pub use web::{export_html, WebOptions};

/// Output format for an album export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// HTML page with one SVG per snapshot
    Web,
    /// Human-readable text listing
    Text,
    /// JSON array of snapshots
    Json,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Web => "web",
            Format::Text => "text",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "web" | "html" => Ok(Format::Web),
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown export format `{other}`")),
        }
    }
}

/// Render snapshots in the requested format
pub fn render(format: Format, snapshots: &[Snapshot], options: &WebOptions) -> serde_json::Result<String> {
    match format {
        Format::Web => Ok(export_html(snapshots, options)),
        Format::Text => Ok(export_text(snapshots)),
        Format::Json => export_json(snapshots),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use shapealbum_core::Snapshot;
    use shapealbum_session::{Album, FixedClock, History, SequenceSuffix};

    /// Two snapshots: rectangle R plus oval O, then R moved to (300,200)
    pub fn scenario_snapshots() -> Vec<Snapshot> {
        let time = NaiveDate::from_ymd_opt(2024, 4, 20)
            .unwrap()
            .and_hms_opt(16, 45, 12)
            .unwrap();
        let mut album =
            Album::with_history(History::with_sources(FixedClock(time), SequenceSuffix::default()));
        album
            .run_script(
                "shape R rectangle 200 200 50 100 255 0 0\n\
                 shape O oval 500 100 60 30 0 0 255\n\
                 snapshot Initial\n\
                 move R 300 200\n\
                 snapshot After moving\n",
            )
            .unwrap();
        album.snapshots()
    }
}
