//! # Training a Small MLP with Manual Updates
//!
//! This example walks through the basic training loop of `gradrust-core`:
//!
//! 1.  **Model definition**: `Layer -> ReLU -> Layer -> Sigmoid` assembled with `Sequential`.
//! 2.  **Synthetic data**: points in the unit square labelled by which side of a diagonal
//!     they fall on.
//! 3.  **Loss**: `BCELoss` over the sigmoid outputs.
//! 4.  **Training loop**:
//!     -   `zero_grad` on every parameter.
//!     -   Forward pass and loss.
//!     -   `backward` to fill the parameter gradients.
//!     -   In-place update of each parameter with `set_data`.
//!     -   `Graph::rewind` to drop the step's nodes and keep only the parameters.
//!
//! ## Running
//! `cargo run --example basic_mlp`
//!
//! Set `RUST_LOG=debug` to see the engine's own log lines.

use gradrust_core::nn::init::Init;
use gradrust_core::nn::{BCELoss, Layer, Module, ReLU, Sequential, Sigmoid};
use gradrust_core::{GradRustError, Graph, Value};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N_SAMPLES: usize = 32;
const HIDDEN: usize = 8;
const EPOCHS: usize = 200;
const LEARNING_RATE: f64 = 0.5;

fn make_dataset(rng: &mut StdRng) -> (Vec<[f64; 2]>, Vec<f64>) {
    let xs: Vec<[f64; 2]> = (0..N_SAMPLES)
        .map(|_| [rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)])
        .collect();
    let ys = xs
        .iter()
        .map(|x| if x[0] + x[1] > 1.0 { 1.0 } else { 0.0 })
        .collect();
    (xs, ys)
}

fn accuracy(predictions: &[Value], targets: &[f64]) -> f64 {
    let correct = predictions
        .iter()
        .zip(targets)
        .filter(|(p, t)| (p.data() > 0.5) == (**t > 0.5))
        .count();
    correct as f64 / targets.len() as f64
}

fn main() -> Result<(), GradRustError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut rng = StdRng::seed_from_u64(1337);
    let (xs, ys) = make_dataset(&mut rng);

    let graph = Graph::new();
    let init = Init::default();
    let model = Sequential::new()
        .with(Layer::with_rng(&graph, 2, HIDDEN, &init, &mut rng)?)
        .with(ReLU::new())
        .with(Layer::with_rng(&graph, HIDDEN, 1, &init, &mut rng)?)
        .with(Sigmoid::new());
    info!("model has {} parameters", model.num_parameters());

    let loss_fn = BCELoss::default();
    let params_only = graph.checkpoint();

    for epoch in 0..EPOCHS {
        model.zero_grad();

        let mut predictions = Vec::with_capacity(xs.len());
        for x in &xs {
            let input: Vec<Value> = x.iter().map(|&v| graph.leaf(v)).collect();
            predictions.extend(model.forward(&input)?);
        }
        let loss = loss_fn.calculate(&predictions, &ys)?;
        loss.backward()?;

        if epoch % 20 == 0 || epoch == EPOCHS - 1 {
            info!(
                "epoch {:>3}: loss {:.4}, accuracy {:.2}, graph nodes {}",
                epoch,
                loss.data(),
                accuracy(&predictions, &ys),
                graph.len()
            );
        }

        for p in model.parameters() {
            p.set_data(p.data() - LEARNING_RATE * p.grad())?;
        }
        graph.rewind(params_only);
    }

    for (name, p) in model.named_parameters().iter().take(4) {
        info!("{} = {:.4}", name, p.data());
    }
    Ok(())
}
