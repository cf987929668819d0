use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::activations::Activation;
use crate::error::{PerceptError, Result};
use crate::error_function::ErrorFunctionKind;
use crate::layers::{Layer, WeightInit};
use crate::network::{NetworkState, NeuralNetwork};

/// Everything needed to construct a network, as supplied by a caller or a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_width: usize,
    #[serde(default)]
    pub hidden_widths: Vec<usize>,
    pub output_width: usize,
    /// Activation of the hidden layers. The output layer is always sigmoid.
    #[serde(default, alias = "activation")]
    pub hidden_activation: Activation,
    #[serde(default)]
    pub error_function: ErrorFunctionKind,
    #[serde(default)]
    pub init: WeightInit,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkConfig {
    pub fn new(input_width: usize, output_width: usize) -> Self {
        NetworkConfig {
            input_width,
            hidden_widths: Vec::new(),
            output_width,
            hidden_activation: Activation::default(),
            error_function: ErrorFunctionKind::default(),
            init: WeightInit::default(),
            seed: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Unit counts of every layer boundary, input first.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths = Vec::with_capacity(self.hidden_widths.len() + 2);
        widths.push(self.input_width);
        widths.extend_from_slice(&self.hidden_widths);
        widths.push(self.output_width);
        widths
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_width == 0 {
            return Err(PerceptError::configuration("input_width", "must be positive"));
        }
        if self.output_width == 0 {
            return Err(PerceptError::configuration("output_width", "must be positive"));
        }
        if let Some(i) = self.hidden_widths.iter().position(|&w| w == 0) {
            return Err(PerceptError::configuration(
                "hidden_widths",
                format!("hidden layer {} has no units", i),
            ));
        }
        self.init.validate()?;
        self.error_function.build()?;
        Ok(())
    }

    /// Construct the network this configuration describes.
    pub fn build(&self) -> Result<NeuralNetwork> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let widths = self.widths();
        let last = widths.len() - 2;
        let layers = widths
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                let activation = if i == last {
                    Activation::Sigmoid
                } else {
                    self.hidden_activation
                };
                Layer::new(w[0], w[1], activation, self.init, &mut rng)
            })
            .collect::<Result<Vec<_>>>()?;

        let state = NetworkState::new(layers)?;
        let network = NeuralNetwork::new(state, self.error_function.build()?)?;
        log::debug!(
            "built network {:?} with {} parameters, {}",
            self.widths(),
            network.state().parameter_count(),
            self.error_function
        );
        Ok(network)
    }
}

/// Builder for constructing neural networks with a fluent API
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    config: NetworkConfig,
}

impl NetworkBuilder {
    /// Start a network mapping `input_width` values onto `output_width` classes.
    pub fn new(input_width: usize, output_width: usize) -> Self {
        NetworkBuilder {
            config: NetworkConfig::new(input_width, output_width),
        }
    }

    /// Insert a hidden layer before the output layer.
    pub fn hidden_layer(mut self, width: usize) -> Self {
        self.config.hidden_widths.push(width);
        self
    }

    pub fn hidden_layers(mut self, widths: &[usize]) -> Self {
        self.config.hidden_widths.extend_from_slice(widths);
        self
    }

    pub fn hidden_activation(mut self, activation: Activation) -> Self {
        self.config.hidden_activation = activation;
        self
    }

    pub fn error_function(mut self, error_function: ErrorFunctionKind) -> Self {
        self.config.error_function = error_function;
        self
    }

    pub fn init(mut self, init: WeightInit) -> Self {
        self.config.init = init;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Build the neural network
    pub fn build(self) -> Result<NeuralNetwork> {
        self.config.build()
    }
}

impl From<NetworkConfig> for NetworkBuilder {
    fn from(config: NetworkConfig) -> Self {
        NetworkBuilder { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_builder() {
        let network = NetworkBuilder::new(4, 2)
            .hidden_layer(8)
            .hidden_layer(6)
            .seed(1)
            .build()
            .unwrap();

        assert_eq!(network.state().widths(), vec![4, 8, 6, 2]);
        assert_eq!(network.state().num_layers(), 3);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = NetworkBuilder::new(3, 2).hidden_layer(4).seed(7).build().unwrap();
        let b = NetworkBuilder::new(3, 2).hidden_layer(4).seed(7).build().unwrap();
        assert_eq!(a.network_state_copy(), b.network_state_copy());
    }

    #[test]
    fn test_builder_errors() {
        assert!(NetworkBuilder::new(0, 2).build().unwrap_err().is_configuration());
        assert!(NetworkBuilder::new(3, 0).build().unwrap_err().is_configuration());
        assert!(NetworkBuilder::new(3, 2).hidden_layer(0).build().unwrap_err().is_configuration());

        let result = NetworkBuilder::new(3, 2)
            .error_function(ErrorFunctionKind::CrossEntropy { epsilon: 0.0 })
            .build();
        assert!(result.unwrap_err().is_configuration());

        let result = NetworkBuilder::new(3, 2)
            .init(WeightInit::Uniform { min: 1.0, max: -1.0 })
            .build();
        assert!(result.unwrap_err().is_configuration());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "input_width": 12,
            "hidden_widths": [6],
            "output_width": 3,
            "error_function": "Quadratic",
            "seed": 3
        }"#;
        let config = NetworkConfig::from_json_str(json).unwrap();
        assert_eq!(config.widths(), vec![12, 6, 3]);
        assert_eq!(config.hidden_activation, Activation::Sigmoid);
        assert_eq!(config.init, WeightInit::default());

        let network = config.build().unwrap();
        assert_eq!(network.input_width(), 12);
        assert_eq!(network.output_width(), 3);
    }

    #[test]
    fn test_config_json_round_trip_and_errors() {
        let mut config = NetworkConfig::new(5, 2);
        config.error_function = ErrorFunctionKind::CrossEntropy { epsilon: 1e-6 };
        let parsed = NetworkConfig::from_json_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);

        let err = NetworkConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, PerceptError::Serialization(_)));

        let err =
            NetworkConfig::from_json_str(r#"{"input_width": 0, "output_width": 2}"#).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_hidden_activation_leaves_output_sigmoid() {
        let network = NetworkBuilder::new(2, 2)
            .hidden_layer(3)
            .hidden_activation(Activation::Tanh)
            .error_function(ErrorFunctionKind::CrossEntropy { epsilon: 1e-6 })
            .init(WeightInit::Uniform { min: -2.0, max: 2.0 })
            .seed(0)
            .build()
            .unwrap();

        let layers = network.state().layers();
        assert_eq!(layers[0].activation, Activation::Tanh);
        assert_eq!(layers[1].activation, Activation::Sigmoid);

        let input = ndarray::array![3.0, -4.0];
        let output = network.map(input.view()).unwrap();
        assert!(output.iter().all(|&v| (0.0..=1.0).contains(&v)));
        let error = network.error(input.view(), ndarray::array![1.0, 0.0].view()).unwrap();
        assert!(error.is_finite());
    }

    #[test]
    fn test_activation_json_alias() {
        let json = r#"{"input_width": 2, "output_width": 1, "activation": "Tanh"}"#;
        let config = NetworkConfig::from_json_str(json).unwrap();
        assert_eq!(config.hidden_activation, Activation::Tanh);
    }
}
