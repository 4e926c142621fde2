use candle_core::{DType, Device, Result, D};
use candle_nn::{loss, AdamW, Module, Optimizer};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::dataset::Mnist;

pub struct Trainer {
    batch_size: usize,
    epochs: usize,
}

impl Trainer {
    pub fn new(batch_size: usize, epochs: usize) -> Self {
        Self { batch_size, epochs }
    }

    pub fn fit<M: Module>(
        &self,
        net: &M,
        opt: &mut AdamW,
        data: &Mnist,
        device: &Device,
    ) -> Result<()> {
        let mut indices: Vec<usize> = (0..data.len()).collect();

        for epoch in 1..=self.epochs {
            let total_batches = (indices.len() + self.batch_size - 1) / self.batch_size;
            let progress_bar = ProgressBar::new(total_batches as u64);
            progress_bar.set_style(
                ProgressStyle::default_bar()
                    .template(
                        " {spinner:.cyan} {pos}/{len} [{wide_bar:.cyan/blue}] {eta_precise} | {msg}",
                    )
                    .unwrap(),
            );

            indices.shuffle(&mut thread_rng());

            let mut loss_sum = 0f32;
            let mut batch_count = 0usize;

            for chunk in indices.chunks(self.batch_size) {
                let (x, y) = data.batch(chunk, device)?;
                let logits = net.forward(&x)?;
                let batch_loss = loss::cross_entropy(&logits, &y)?;
                opt.backward_step(&batch_loss)?;

                loss_sum += f32::try_from(batch_loss)?;
                batch_count += 1;

                let current_loss = loss_sum / batch_count as f32;
                progress_bar.set_message(format!("loss: {:.5}", current_loss));
                progress_bar.inc(1);
            }

            progress_bar.finish();
            log::info!(
                "Epoch {}/{}: loss={:.4}",
                epoch,
                self.epochs,
                loss_sum / batch_count.max(1) as f32
            );
        }

        Ok(())
    }
}

/// Top-1 accuracy over the whole dataset, in dataset order.
pub fn evaluate<M: Module>(net: &M, data: &Mnist, device: &Device) -> Result<f32> {
    let indices: Vec<usize> = (0..data.len()).collect();
    let mut correct = 0f32;

    for chunk in indices.chunks(512) {
        let (x, y) = data.batch(chunk, device)?;
        let preds = net.forward(&x)?.argmax(D::Minus1)?;
        let hits = preds.eq(&y)?.to_dtype(DType::F32)?.sum_all()?;
        correct += f32::try_from(hits)?;
    }

    Ok(correct / data.len().max(1) as f32)
}
