mod args;

use std::error::Error;

use args::Args;
use clap::Parser;
use export::calibration::export_calibration;
use export::HeaderStore;
use log::LevelFilter;
use mnist::dataset::{Mnist, Split};
use simplelog::{Config, SimpleLogger};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    log::info!("Loading MNIST from {:?}", args.data_dir);
    let train_set = Mnist::load(&args.data_dir, Split::Train)?;
    log::info!("Loaded {} training samples", train_set.len());

    let store = HeaderStore::new()?;
    let path = export_calibration(&train_set, &store, args.samples)?;
    log::info!("Calibration data written to {}", path.display());

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();
    SimpleLogger::init(LevelFilter::Info, Config::default())?;

    Ok(args)
}
