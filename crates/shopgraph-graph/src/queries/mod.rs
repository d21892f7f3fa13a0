//! Read queries against the loaded graph.

pub mod recommend;
