pub mod csv_dataset;
pub mod traits;
pub mod vec_dataset;

pub use csv_dataset::{CsvDataset, CsvOptions, LabeledRow};
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
