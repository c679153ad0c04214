// scalargrad-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Defines the order in which a dataset's indices are visited.
///
/// Samplers are used by `DataLoader` to generate a sequence of indices
/// to fetch data from a `Dataset`. Each call to `iter` starts a new epoch.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over the indices of a dataset with `dataset_len` items.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the total number of indices `iter` yields.
    fn len(&self, dataset_len: usize) -> usize;
}
