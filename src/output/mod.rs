//! Rendering normalization results for the command line

pub mod formatter;
