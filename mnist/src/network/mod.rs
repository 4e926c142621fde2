mod conv;
mod fc;

pub use conv::MnistConv;
pub use fc::MnistFc;

/// Width of the hidden layer in both networks.
pub const HIDDEN_SIZE: usize = 128;

/// Number of digit classes.
pub const NUM_CLASSES: usize = 10;

/// Output channels of the convnet's single conv layer.
pub const CONV_FILTERS: usize = 5;
