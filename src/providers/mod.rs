//! Chat-completion provider clients

pub mod groq;

pub use groq::GroqClient;
