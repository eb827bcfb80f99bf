// textbench: keyword tagging and ROUGE evaluation for news datasets.
//
// This is the library root. Each module corresponds to a stage of the two
// pipelines: load a dataset, transform each row, append the results.

pub mod config;
pub mod dataset;
pub mod error;
pub mod keywords;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod rouge;
pub mod text;
