use dense_nn::{
    matrix::{Matrix, Matrix1, Vector},
    neural::{optimizer::Optimizer, TwoLayerNet},
    perceptron::Perceptron,
    prelude::*,
    rng,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Two clusters in the plane with a constant bias column appended.
fn dataset() -> (Matrix, Vector) {
    let inputs = Matrix::from_array([
        [3.0, 2.0, 1.0],
        [4.5, 3.0, 1.0],
        [3.0, 3.5, 1.0],
        [5.0, 4.5, 1.0],
        [6.0, 4.0, 1.0],
        [2.5, 5.0, 1.0],
        [3.0, 6.0, 1.0],
        [2.0, 6.5, 1.0],
        [3.0, 7.0, 1.0],
        [3.5, 7.5, 1.0],
    ]);
    let labels = Matrix1::from_array([-1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    (inputs, labels)
}

fn main() -> Result<()> {
    setup_logging();

    let seed = std::env::args().nth(1).and_then(|s| s.parse().ok());
    let mut rng = rng::from_seed(seed);
    let (inputs, labels) = dataset();

    let mut net = TwoLayerNet::new(inputs.cols(), 4, 1, 1.0, &mut rng);
    let optim = Optimizer::new(2_000, 1e-4).with_log(Some(200));
    let history = optim.train(&mut net, &inputs, &labels)?;

    if let Some(last) = history.last() {
        info!("Final squared error: {}", last.squared_error);
    }
    info!("W1 = {:?}", net.hidden_weights().clone().to_vec());
    info!("W2 = {:?}", net.output_weights().clone().to_vec());

    let predictions = net.predict(&inputs)?;
    for i in 0..inputs.rows() {
        info!(
            "{:?} -> {:.4} (label {})",
            inputs.row(i)?.as_slice(),
            predictions[(i, 0)],
            labels[i]
        );
    }

    let mut perceptron = Perceptron::new(inputs.cols(), 0.1, 10);
    let report = perceptron.train(&inputs, &labels, &mut rng)?;
    info!(
        "Perceptron made {} updates, w = {:?}",
        report.total_updates(),
        perceptron.weights().as_slice()
    );

    Ok(())
}
