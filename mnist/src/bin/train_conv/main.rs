mod args;

use std::error::Error;

use args::Args;
use candle_core::{DType, Device, Result as CandleResult};
use candle_nn::{AdamW, Optimizer, ParamsAdamW, VarBuilder, VarMap};
use clap::Parser;
use export::emit::ArrayKind;
use export::format::FloatPolicy;
use export::parameters::{export_parameters, HeaderOptions};
use export::HeaderStore;
use log::LevelFilter;
use mnist::checkpoint;
use mnist::dataset::{Mnist, Split};
use mnist::network::MnistConv;
use mnist::train::{evaluate, Trainer};
use simplelog::{Config, SimpleLogger};

const NETWORK: &str = "mnist_conv";

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let device = Device::cuda_if_available(0)?;
    if device.is_cuda() {
        log::info!("Using CUDA");
    } else {
        log::info!("Using CPU");
    }

    log::info!("Loading MNIST from {:?}", args.data_dir);
    let train_set = Mnist::load(&args.data_dir, Split::Train)?;
    let test_set = Mnist::load(&args.data_dir, Split::Test)?;
    log::info!(
        "Loaded {} training and {} test samples",
        train_set.len(),
        test_set.len()
    );

    let (net, varmap) = create_network(&device)?;
    let mut opt = AdamW::new(
        varmap.all_vars(),
        ParamsAdamW {
            lr: args.learning_rate,
            ..ParamsAdamW::default()
        },
    )?;

    log::info!("Training network");
    let trainer = Trainer::new(args.batch_size, args.epochs);
    trainer.fit(&net, &mut opt, &train_set, &device)?;

    let accuracy = evaluate(&net, &test_set, &device)?;
    log::info!("Test accuracy: {:.2}%", accuracy * 100.0);

    log::info!("Saving checkpoint");
    checkpoint::save(&varmap, NETWORK)?;

    let store = HeaderStore::new()?;
    let options = HeaderOptions {
        policy: FloatPolicy::Full,
        kind: ArrayKind::Vector,
    };
    export_parameters(&net, &store, NETWORK, options)?;

    log::info!("Done!");
    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();
    SimpleLogger::init(LevelFilter::Info, Config::default())?;

    Ok(args)
}

fn create_network(device: &Device) -> CandleResult<(MnistConv, VarMap)> {
    let varmap = VarMap::new();
    let vs = VarBuilder::from_varmap(&varmap, DType::F32, device);
    let net = MnistConv::new(&vs)?;
    Ok((net, varmap))
}
