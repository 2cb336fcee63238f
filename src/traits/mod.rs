pub mod model_generator;
