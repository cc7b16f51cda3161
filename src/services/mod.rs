// Service exports
pub mod openai;

pub use openai::{ClassifierError, ClassifierOptions, VisionClassifier};
