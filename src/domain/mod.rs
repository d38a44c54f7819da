//! Domain models for the codex generator
//!
//! Records, line classification, rendering and README splicing. Nothing in
//! here touches the filesystem.

mod record;
mod matcher;
mod render;
mod merge;

pub use record::{sort_by_recency, FileRecord, Grouping, TaskKind, TaskRecord, ROOT_GROUP};
pub use matcher::TaskMatcher;
pub use render::{
    md_link, render_section, Clock, FixedClock, RenderSettings, SystemClock, INFRA_FOLDERS,
    MODULE_FILE_LIMIT,
};
pub use merge::{placeholder_readme, splice_section};
