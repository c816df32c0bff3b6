//! Input handling for the command line
//! Resolves where a review comes from and reads it as raw bytes

pub mod reader;
