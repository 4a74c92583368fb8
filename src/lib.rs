pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod report;
pub mod runner;

/*

groq-probe: send one chat completion to Groq and print the reply.

groq-probe/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports
│   ├── main.rs         # Binary entry point
│   ├── error.rs        # Error type
│   ├── config.rs       # GROQ_API_KEY / GROQ_API_BASE
│   ├── request.rs      # Request/response wire types
│   ├── providers/
│   │   ├── mod.rs
│   │   └── groq.rs     # HTTP call
│   ├── report.rs       # Console output
│   └── runner.rs       # RequestRunner
└── tests/

*/

pub use config::ProbeConfig;
pub use error::Error;
pub use request::{ChatRequest, ChatResponse, Outcome, Role};
pub use runner::RequestRunner;
