pub mod config;
pub mod groq;
