//! Password strength analysis library
//!
//! Scores a candidate password against a fixed rule set, estimates its
//! entropy, derives ordered improvement recommendations, and asynchronously
//! checks it against the pwnedpasswords breach corpus via the k-anonymity
//! range API.
//!
//! # Features
//!
//! - `breach` (default): Enables the async breach lookup client and the
//!   [`Analyzer`] orchestrator
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_API_URL`: Custom range API endpoint
//!   (default: `https://api.pwnedpasswords.com/range`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_analyzer::Analyzer;
//! use secrecy::SecretString;
//! use tokio::sync::mpsc;
//!
//! # async fn demo() {
//! let mut analyzer = Analyzer::new();
//! let (tx, mut rx) = mpsc::channel(8);
//!
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let result = analyzer.analyze(&password, tx);
//! println!("Score: {} ({})", result.score, result.strength);
//!
//! // The breach verdict for the same generation arrives later.
//! if let Some(update) = rx.recv().await {
//!     if update.generation == result.generation {
//!         println!("Breach: {:?}", update.status);
//!     }
//! }
//! # }
//! ```

// Internal modules
mod analyzer;
#[cfg(feature = "breach")]
mod breach;
mod checks;
mod entropy;
mod generate;
mod recommend;
mod score;
mod types;

// Public API
pub use analyzer::analyze_local;
pub use checks::{MIN_LENGTH, run_checks};
pub use entropy::entropy_bits;
pub use generate::{DEFAULT_LENGTH, generate_password};
pub use recommend::recommend;
pub use score::score;
pub use types::{
    AnalysisResult, BreachStatus, CheckKind, CheckResult, Recommendation, Score, Severity,
    Strength,
};

#[cfg(feature = "breach")]
pub use analyzer::{Analyzer, BreachUpdate};
#[cfg(feature = "breach")]
pub use breach::{BreachClient, BreachError, MIN_CHECK_LENGTH, breach_api_url, hash_prefix_suffix};
