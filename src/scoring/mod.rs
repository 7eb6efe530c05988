//! Per-keyword score aggregation
//!
//! An editing session tries several keywords in turn. Each keyword keeps
//! the latest result of every heuristic ever run for it, and its score is
//! the sum of those results' scores:
//!
//! ```text
//! score(keyword) = Σ result.score()   (results without a score count 0)
//! ```

mod result_manager;

pub use result_manager::{KeywordScore, ResultManager};
