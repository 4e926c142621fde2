use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "MNIST FC Trainer")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Directory holding the MNIST idx files.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Number of images per training batch.
    #[arg(long, default_value_t = 512)]
    pub batch_size: usize,

    /// Learning rate for the optimizer.
    #[arg(long, default_value_t = 0.001)]
    pub learning_rate: f64,

    /// Number of training epochs.
    #[arg(long, default_value_t = 5)]
    pub epochs: usize,
}
