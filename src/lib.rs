//! # Batch Rename
//!
//! Plan-then-apply batch renaming of files in a directory tree.
//!
//! A run has two phases. [`walker::walk`] traverses the tree and builds a
//! [`Plan`], a conflict-free mapping from old paths to new paths. Nothing on
//! disk changes while planning. A [`Transfer`] then applies the plan by
//! renaming, copying or moving each file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use batch_rename::prelude::*;
//!
//! // Strip "_draft" from every markdown file under ./notes
//! let options = Options::builder()
//!     .root("./notes")
//!     .search("_draft")
//!     .extension("md")
//!     .build()?;
//!
//! let plan = walk(&options)?;
//! println!("{}", PlanReport::new(&plan).render(true));
//!
//! let renamed = Transfer::new(TransferStrategy::Rename).apply(&plan)?;
//! println!("Renamed {renamed} file(s)");
//! # Ok::<(), batch_rename::error::RenameError>(())
//! ```
//!
//! ## Regex Matching
//!
//! In regex mode the first match in each file name is taken as the target,
//! and every occurrence of that text is replaced. Names that collide get
//! `_1`, `_2`, ... suffixes in traversal order.
//!
//! ```rust,no_run
//! use batch_rename::prelude::*;
//!
//! let options = Options::builder()
//!     .root("./data")
//!     .search(r"\d{4}-\d{2}-\d{2}")
//!     .regex(true)
//!     .replace("snapshot")
//!     .build()?;
//!
//! let plan = walk(&options)?;
//! Transfer::new(TransferStrategy::Copy).apply(&plan)?;
//! # Ok::<(), batch_rename::error::RenameError>(())
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod plan;
pub mod prompt;
pub mod report;
pub mod transform;
pub mod walker;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{Options, OptionsBuilder};
    pub use crate::error::{RenameError, Result};
    pub use crate::matcher::{Criterion, FileFilter};
    pub use crate::plan::{Plan, PlanEntry};
    pub use crate::report::PlanReport;
    pub use crate::transform::{
        FileOperation, NameOutcome, NamePlanner, SkipReason, Transfer, TransferStrategy,
    };
    pub use crate::walker::walk;
}

pub use prelude::*;
