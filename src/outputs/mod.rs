//! Output of downloaded puzzles.
//!
//! # Submodules
//!
//! - [`pdf`]: writes each puzzle PDF under the configured save directory
//!
//! # Output Structure
//!
//! ```text
//! save_path/
//! ├── 2025-05-05-Mon-crossword.pdf
//! ├── 2025-05-06-Tue-crossword.pdf
//! └── 2025-05-07-Wed-crossword.pdf
//! ```
//!
//! The name depends only on the puzzle date, so whichever publisher saves a
//! date first owns that file.

pub mod pdf;
