#![forbid(unsafe_code)]
//! wayflow-core: navigation-path and response-time analysis.
//!
//! Builds an immutable directed multigraph from observed
//! `(referrer, request)` transitions, answers topology queries
//! (entry/exit vertices, subgraphs), exhaustively enumerates simple
//! paths, and classifies response-time series into threshold bands.
//!
//! # Conventions
//!
//! - **Errors**: structured [`FlowError`] values propagated with `?`;
//!   queries that legitimately find nothing return empty collections.
//! - **Logging**: `tracing` macros (`debug!` on construction and
//!   enumeration); no subscriber is installed here — that is the
//!   caller's job.
//!
//! # Example
//!
//! ```
//! use wayflow_core::graph::Digraph;
//!
//! let graph = Digraph::from_edges(&[("A", "B"), ("B", "C"), ("A", "C"), ("B", "C")]);
//! let paths = graph.all_paths("A", "C")?;
//! assert_eq!(paths, vec![vec!["A", "C"], vec!["A", "B", "C"]]);
//! # Ok::<(), wayflow_core::FlowError>(())
//! ```

pub mod classify;
pub mod error;
pub mod graph;

pub use error::{FlowError, Result};
