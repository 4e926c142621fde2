pub mod checkpoint;
pub mod dataset;
pub mod network;
pub mod train;

#[cfg(test)]
mod tests;
