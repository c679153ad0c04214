use super::*;
use crate::datasets::VecDataset;
use crate::samplers::{RandomSampler, SequentialSampler};

fn collect_epoch<D: Dataset, S: Sampler>(
    loader: &DataLoader<D, S>,
) -> Result<Vec<Vec<D::Item>>, ScalarGradError> {
    loader.iter().collect()
}

#[test]
fn test_dataloader_sequential() -> Result<(), ScalarGradError> {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
    let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false)?;
    let batches = collect_epoch(&loader)?;
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    assert_eq!(loader.num_batches(), 3);
    Ok(())
}

#[test]
fn test_dataloader_keeps_partial_last_batch() -> Result<(), ScalarGradError> {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false)?;
    let batches = collect_epoch(&loader)?;
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert_eq!(loader.num_batches(), 3);
    Ok(())
}

#[test]
fn test_dataloader_drop_last() -> Result<(), ScalarGradError> {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), true)?;
    let batches = collect_epoch(&loader)?;
    // The last batch of size 1 is dropped.
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(loader.num_batches(), 2);
    Ok(())
}

#[test]
fn test_dataloader_epochs_restart() -> Result<(), ScalarGradError> {
    let dataset = VecDataset::new(vec![1, 2, 3]);
    let loader = DataLoader::new(dataset, 3, SequentialSampler::new(), false)?;
    assert_eq!(collect_epoch(&loader)?, collect_epoch(&loader)?);
    Ok(())
}

#[test]
fn test_dataloader_random_covers_dataset() -> Result<(), ScalarGradError> {
    let sampler = RandomSampler::new(false, None).with_seed(5);
    let dataset = VecDataset::new((0..10).collect::<Vec<i32>>());
    let loader = DataLoader::new(dataset, 4, sampler, false)?;
    let mut seen: Vec<i32> = collect_epoch(&loader)?.into_iter().flatten().collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..10).collect::<Vec<i32>>());
    Ok(())
}

#[test]
fn test_dataloader_zero_batch_size() {
    let result = DataLoader::new(VecDataset::new(vec![1]), 0, SequentialSampler::new(), false);
    assert!(matches!(result, Err(ScalarGradError::InvalidConfig(_))));
}

#[test]
fn test_dataloader_propagates_dataset_errors() -> Result<(), ScalarGradError> {
    // Yields one index past the end.
    #[derive(Debug)]
    struct OutOfRange;
    impl Sampler for OutOfRange {
        fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
            Box::new(std::iter::once(dataset_len))
        }
        fn len(&self, _dataset_len: usize) -> usize {
            1
        }
    }
    let loader = DataLoader::new(VecDataset::new(vec![1, 2]), 1, OutOfRange, false)?;
    let first = loader.iter().next();
    assert!(matches!(first, Some(Err(ScalarGradError::IndexOutOfBounds { index: 2, len: 2 }))));
    Ok(())
}
