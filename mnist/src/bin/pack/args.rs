use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "MNIST Weight Packer")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Which trained network to pack.
    #[arg(long, value_enum)]
    pub network: Network,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Network {
    Fc,
    Conv,
}
