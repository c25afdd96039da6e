//! Output rendering for query results and statistics.
//!
//! # Submodules
//!
//! - [`json`]: JSON rendering and the dated export file
//! - [`markdown`]: Markdown rendering grouped by category
//!
//! # Export Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     └── news_143000.json
//! ```

pub mod json;
pub mod markdown;
