use std::path::PathBuf;

use clap::Parser;
use export::calibration::CALIBRATION_SAMPLES;

#[derive(Parser, Debug, Clone)]
#[command(name = "MNIST Calibration Export")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Directory holding the MNIST idx files.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Number of training samples in the calibration set.
    #[arg(long, default_value_t = CALIBRATION_SAMPLES)]
    pub samples: usize,
}
