//! # Training an MLP on the Iris binary task
//!
//! Reads an Iris CSV file (last column is the species), keeps setosa (-1) and
//! versicolor (+1), and trains `MLP(nin, [4, 1])` with plain SGD on the mean
//! squared error for a few full-batch epochs.
//!
//! ## Execution
//! `RUST_LOG=info cargo run --example train_iris -- path/to/Iris.csv [epochs]`
//!
//! Without a path the small sample shipped with the tests is used. An `Id`
//! column, as in some Iris exports, is just another feature.

use std::env;
use std::path::PathBuf;

use scalargrad_core::nn::{Module, Mlp, MseLoss, Reduction};
use scalargrad_core::optim::SgdOptimizer;
use scalargrad_core::train::{fit, TrainConfig};
use scalargrad_core::ScalarGradError;
use scalargrad_data::{CsvDataset, CsvOptions, Dataset};

const LEARNING_RATE: f64 = 0.01;

fn main() -> Result<(), ScalarGradError> {
    let _ = env_logger::builder().try_init();

    let mut args = env::args().skip(1);
    let path = args.next().map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/iris_sample.csv")
    });
    let epochs = match args.next() {
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            ScalarGradError::InvalidConfig(format!(
                "epochs must be a positive integer, got {:?}",
                raw
            ))
        })?,
        None => TrainConfig::default().epochs,
    };

    let dataset = CsvDataset::from_path(&path, &CsvOptions::iris_binary())?;
    println!(
        "Loaded {} samples with {} features from {}",
        dataset.len(),
        dataset.feature_len(),
        path.display()
    );

    let model = Mlp::new(dataset.feature_len(), &[4, 1])?;
    let mut optimizer = SgdOptimizer::new(model.parameters(), LEARNING_RATE, 0.0, 0.0)?;
    let loss_fn = MseLoss::new(Reduction::Mean);
    let config = TrainConfig::default().with_epochs(epochs);

    let (inputs, targets) = (dataset.inputs(), dataset.targets());
    let reports = fit(&model, &mut optimizer, &loss_fn, &inputs, &targets, &config)?;
    for report in &reports {
        println!("Epoch {}, Loss: {}", report.epoch, report.loss);
    }
    Ok(())
}
