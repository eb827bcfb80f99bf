// The two linear pipelines: load → per-row transform → append columns.
//
// Both run one record at a time, in file order, on a single task. A run
// can't be paused or cancelled once started.

pub mod keywords;
pub mod overlap;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for a per-row pass, or a hidden one when `visible` is false.
pub(crate) fn row_progress(label: &str, rows: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(rows as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!("  {label} [{{bar:30}}] {{pos}}/{{len}} ({{eta}})"))
            .expect("valid template"),
    );
    pb
}
