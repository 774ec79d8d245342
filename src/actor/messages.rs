//! Actor Message Definitions
//!
//! Every input the coordinator reacts to arrives as one `CoordinatorMsg`:
//!
//! ```text
//! stdin reader --Select/Shutdown--+
//! ctrl-c handler --Shutdown-------+--> Coordinator
//! watcher callback --Changed------+
//! blocking load --LoadDone--------+
//!   (or LoadAborted on panic)
//! ```

use std::path::PathBuf;

use super::fs::ChangeNotice;
use crate::core::LoadResult;

/// Messages to the Coordinator
#[derive(Debug)]
pub enum CoordinatorMsg {
    /// Start watching a new file, replacing the current one
    Select(PathBuf),
    /// The watched file changed on disk
    Changed(ChangeNotice),
    /// A background load finished
    LoadDone {
        /// Generation of the selection the load was started for
        generation: u64,
        result: LoadResult,
    },
    /// A background load panicked before producing a result
    LoadAborted { generation: u64, reason: String },
    /// Stop watching and exit the loop
    Shutdown,
}
