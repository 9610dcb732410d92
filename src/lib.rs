//! Core library for the pathfinder-exp command line application.
//!
//! The library totals experience per character from a tabular log. Input
//! adapters live under [`pathfinder::tools::io`], data representations inside
//! [`pathfinder::tools::model`], the totalling rules in
//! [`pathfinder::tools::aggregate`], rendering in [`pathfinder::tools::report`],
//! and the end-to-end orchestration under [`pathfinder::tools::tally`].

pub mod pathfinder;

pub use pathfinder::tools::{
    Result, ToolError, aggregate, config, error, io, logging, model, report, tally,
};
