use std::fmt::{self, Debug, Display};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ActivationError, Result};
use crate::f;

pub trait Activation: Send + Sync {
    fn a(&self, x: f64) -> f64;
}

impl Debug for dyn Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ActivationFn")
    }
}

pub struct Relu;

impl Relu {
    pub fn new() -> Arc<Relu> {
        Arc::new(Relu)
    }
}

impl Activation for Relu {
    fn a(&self, x: f64) -> f64 {
        f::relu(x)
    }
}

pub struct Sigmoid;

impl Sigmoid {
    pub fn new() -> Arc<Sigmoid> {
        Arc::new(Sigmoid)
    }
}

impl Activation for Sigmoid {
    fn a(&self, x: f64) -> f64 {
        f::sigmoid(x)
    }
}

pub struct Tanh;

impl Tanh {
    pub fn new() -> Arc<Tanh> {
        Arc::new(Tanh)
    }
}

impl Activation for Tanh {
    fn a(&self, x: f64) -> f64 {
        f::hyperbolic_tangent(x)
    }
}

pub struct LeakyRelu {
    pub slope: f64,
}

impl LeakyRelu {
    pub fn new(slope: f64) -> Arc<LeakyRelu> {
        Arc::new(LeakyRelu { slope })
    }
}

impl Activation for LeakyRelu {
    fn a(&self, x: f64) -> f64 {
        f::leaky_relu(x, self.slope)
    }
}

/// Names an activation so it can travel through configs and model headers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Activations {
    Relu,
    Sigmoid,
    Tanh,
    LeakyRelu {
        #[serde(with = "slope")]
        slope: f64,
    },
}

/// JSON has no NaN or infinities, so text formats carry those slopes as
/// strings (`"NaN"`, `"inf"`, `"-inf"`). Binary formats keep the raw f64.
mod slope {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Slope {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(slope: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if slope.is_finite() || !serializer.is_human_readable() {
            return serializer.serialize_f64(*slope);
        }
        serializer.serialize_str(&slope.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        if !deserializer.is_human_readable() {
            return f64::deserialize(deserializer);
        }
        match Slope::deserialize(deserializer)? {
            Slope::Number(slope) => Ok(slope),
            Slope::Text(text) => text
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid slope {:?}", text))),
        }
    }
}

impl Activations {
    pub fn wake(&self) -> Arc<dyn Activation> {
        match self {
            Activations::Relu => Relu::new(),
            Activations::Sigmoid => Sigmoid::new(),
            Activations::Tanh => Tanh::new(),
            Activations::LeakyRelu { slope } => LeakyRelu::new(*slope),
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Activations::Relu => f::relu(x),
            Activations::Sigmoid => f::sigmoid(x),
            Activations::Tanh => f::hyperbolic_tangent(x),
            Activations::LeakyRelu { slope } => f::leaky_relu(x, *slope),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Activations::Relu => "relu",
            Activations::Sigmoid => "sigmoid",
            Activations::Tanh => "tanh",
            Activations::LeakyRelu { .. } => "leaky_relu",
        }
    }

    pub fn from_json(json: &str) -> Result<Activations> {
        let activation: Activations = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "rejected activation config");
            e
        })?;
        debug!(activation = %activation, "loaded activation config");
        Ok(activation)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Compact binary encoding for model headers. Any slope, NaN included, loads back unchanged.
    pub fn dump(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn load(serialized: &[u8]) -> Result<Activations> {
        let activation: Activations = bincode::deserialize(serialized).map_err(|e| {
            warn!(error = %e, "malformed activation binary");
            e
        })?;
        debug!(activation = %activation, "decoded activation");
        Ok(activation)
    }
}

impl Display for Activations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activations::LeakyRelu { slope } => write!(f, "leaky_relu:{}", slope),
            other => write!(f, "{}", other.name()),
        }
    }
}

impl FromStr for Activations {
    type Err = ActivationError;

    /// Parses `relu`, `sigmoid`, `tanh` or `leaky_relu:<slope>`.
    fn from_str(s: &str) -> Result<Activations> {
        let s = s.trim();
        let (name, slope) = match s.split_once(':') {
            Some((name, slope)) => (name.trim(), Some(slope.trim())),
            None => (s, None),
        };

        let activation = match (name.to_ascii_lowercase().as_str(), slope) {
            ("relu", None) => Activations::Relu,
            ("sigmoid", None) => Activations::Sigmoid,
            ("tanh", None) | ("hyperbolic_tangent", None) => Activations::Tanh,
            ("leaky_relu", None) => {
                warn!("leaky_relu given without a slope");
                return Err(ActivationError::MissingSlope);
            }
            ("leaky_relu", Some(slope)) => {
                let slope = slope.parse::<f64>().map_err(|_| {
                    warn!(slope, "unparseable leaky_relu slope");
                    ActivationError::InvalidSlope(slope.to_string())
                })?;
                Activations::LeakyRelu { slope }
            }
            _ => {
                warn!(input = s, "unknown activation");
                return Err(ActivationError::UnknownActivation(s.to_string()));
            }
        };

        debug!(activation = %activation, "parsed activation");
        Ok(activation)
    }
}
