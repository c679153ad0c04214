// dataloader.rs
//! # DataLoader
//!
//! Groups the samples of a [`Dataset`] into batches, visiting indices in the
//! order chosen by a [`Sampler`].
//!
//! ```rust
//! use scalargrad_data::dataloader::DataLoader;
//! use scalargrad_data::datasets::VecDataset;
//! use scalargrad_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! for batch in loader.iter() {
//!     println!("Batch: {:?}", batch.unwrap());
//! }
//! ```

use scalargrad_core::ScalarGradError;

use crate::datasets::Dataset;
use crate::samplers::Sampler;

/// Batching over a dataset.
///
/// Each call to [`DataLoader::iter`] is one epoch and asks the sampler for a
/// fresh index order.
#[derive(Debug)]
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    /// If true, the last batch is dropped when it is incomplete.
    drop_last: bool,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// # Errors
    /// `InvalidConfig` when `batch_size` is zero.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
    ) -> Result<Self, ScalarGradError> {
        if batch_size == 0 {
            return Err(ScalarGradError::InvalidConfig("batch_size must be at least 1".to_string()));
        }
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches one epoch yields.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }

    /// Starts a new epoch.
    pub fn iter(&self) -> Batches<'_, D> {
        Batches {
            dataset: &self.dataset,
            batch_size: self.batch_size,
            drop_last: self.drop_last,
            indices: self.sampler.iter(self.dataset.len()),
        }
    }
}

/// Iterator over the batches of one epoch.
pub struct Batches<'a, D: Dataset> {
    dataset: &'a D,
    batch_size: usize,
    drop_last: bool,
    indices: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<'a, D: Dataset> Iterator for Batches<'a, D> {
    type Item = Result<Vec<D::Item>, ScalarGradError>;

    /// Returns the next batch, or the first error from the dataset.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
