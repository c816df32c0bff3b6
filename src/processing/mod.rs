//! Text normalization: markup stripping, stopword lists and the pipeline

pub mod markup;
pub mod normalizer;
pub mod stopwords;
