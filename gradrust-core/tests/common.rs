use gradrust_core::nn::{Layer, Module, ReLU, Sequential};
use gradrust_core::nn::init::Init;
use gradrust_core::{GradRustError, Graph, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Added allow(dead_code) because usage across different test crates isn't detected easily.

/// Installs `env_logger` once per test binary. Safe to call from every test.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic `n_input -> hidden -> 1` perceptron with a ReLU in between.
#[allow(dead_code)]
pub fn seeded_mlp(
    graph: &Graph,
    n_input: usize,
    hidden: usize,
    seed: u64,
) -> Result<Sequential, GradRustError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let init = Init::default();
    Ok(Sequential::new()
        .with(Layer::with_rng(graph, n_input, hidden, &init, &mut rng)?)
        .with(ReLU::new())
        .with(Layer::with_rng(graph, hidden, 1, &init, &mut rng)?))
}

/// Plain gradient step on every parameter of `model`.
#[allow(dead_code)]
pub fn sgd_update(model: &dyn Module, lr: f64) -> Result<(), GradRustError> {
    for p in model.parameters() {
        p.set_data(p.try_data()? - lr * p.try_grad()?)?;
    }
    Ok(())
}

#[allow(dead_code)]
pub fn leaves(graph: &Graph, data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| graph.leaf(x)).collect()
}
