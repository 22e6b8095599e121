//! Adapters implementing application ports

mod ollama_inference_adapter;

pub use ollama_inference_adapter::OllamaInferenceAdapter;
