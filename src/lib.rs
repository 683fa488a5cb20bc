mod activation;
mod error;
pub mod f;

pub use activation::{Activation, Activations, LeakyRelu, Relu, Sigmoid, Tanh};
pub use error::{ActivationError, Result};
pub use f::{hyperbolic_tangent, leaky_relu, relu, sigmoid};
