//! Mutation-testing orchestration over the external `mutmut` engine.
//!
//! This crate wraps the engine's CLI behind a small set of callable
//! operations (run, results, survivors, rerun, clean, show, prioritize)
//! suitable for registration with a remote tool-invocation layer. The
//! architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (survivor parsing,
//!   classification, ranking). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (process execution, engine
//!   path resolution, cache removal, configuration).
//!
//! [`tools`] coordinates core logic with I/O to implement the exposed
//! operations. Every failure crossing the tool boundary surfaces as a
//! returned value (a prefixed text message or an empty ranking), never as
//! a raised error.

pub mod core;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod tools;
