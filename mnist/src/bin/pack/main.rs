mod args;

use std::error::Error;

use args::{Args, Network};
use candle_core::{DType, Device};
use candle_nn::{VarBuilder, VarMap};
use clap::Parser;
use export::emit::ArrayKind;
use export::format::FloatPolicy;
use export::parameters::{export_parameters, HeaderOptions};
use export::{HeaderStore, ParameterSource};
use log::LevelFilter;
use mnist::checkpoint;
use mnist::network::{MnistConv, MnistFc};
use simplelog::{Config, SimpleLogger};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    // Packing only re-reads a checkpoint; no training device needed.
    let device = Device::Cpu;
    let varmap = VarMap::new();
    let vs = VarBuilder::from_varmap(&varmap, DType::F32, &device);

    match args.network {
        Network::Fc => {
            let net = MnistFc::new(&vs)?;
            pack(&net, varmap, "mnist_fc")?;
        }
        Network::Conv => {
            let net = MnistConv::new(&vs)?;
            pack(&net, varmap, "mnist_conv")?;
        }
    }

    Ok(())
}

fn pack<S: ParameterSource>(
    net: &S,
    mut varmap: VarMap,
    network: &str,
) -> Result<(), Box<dyn Error>> {
    log::info!("Loading checkpoint for {}", network);
    checkpoint::load(&mut varmap, network)?;

    let store = HeaderStore::new()?;
    let options = HeaderOptions {
        policy: FloatPolicy::Truncated,
        kind: ArrayKind::Vector,
    };
    let path = export_parameters(net, &store, network, options)?;
    log::info!("Packed weights written to {}", path.display());

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();
    SimpleLogger::init(LevelFilter::Info, Config::default())?;

    Ok(args)
}
