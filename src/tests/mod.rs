// Test modules for all components
pub mod test_activations;
pub mod test_data;
pub mod test_error_function;
