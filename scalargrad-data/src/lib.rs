//! Datasets, CSV loading, samplers and batching for `scalargrad` models.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{CsvDataset, CsvOptions, Dataset, LabeledRow, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
