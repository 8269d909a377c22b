//! Analysis orchestration - composes the pure pipeline and the breach lookup.

use secrecy::{ExposeSecret, SecretString};

use crate::checks::run_checks;
use crate::entropy::entropy_bits;
use crate::recommend::recommend;
use crate::score::score;
use crate::types::{AnalysisResult, BreachStatus};

#[cfg(feature = "breach")]
use std::sync::Arc;
#[cfg(feature = "breach")]
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "breach")]
use tokio::sync::mpsc;
#[cfg(feature = "breach")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "breach")]
use crate::breach::{BreachClient, MIN_CHECK_LENGTH};
#[cfg(feature = "breach")]
use crate::types::Recommendation;

/// Runs the synchronous pipeline: checks, score, entropy, recommendations.
/// The breach field is `TooShortToCheck` for inputs under 4 characters and
/// `Unknown` otherwise; no lookup is dispatched.
pub fn analyze_local(password: &SecretString) -> AnalysisResult {
    let checks = run_checks(password);
    let score = score(&checks, password);
    let entropy = entropy_bits(password);
    let recommendations = recommend(&checks, score, entropy, password);
    let length = password.expose_secret().chars().count();

    #[cfg(feature = "breach")]
    let breach = if length < MIN_CHECK_LENGTH {
        BreachStatus::TooShortToCheck
    } else {
        BreachStatus::Unknown
    };
    #[cfg(not(feature = "breach"))]
    let breach = BreachStatus::Unknown;

    AnalysisResult {
        checks,
        strength: score.strength(),
        score,
        entropy_bits: entropy,
        length,
        recommendations,
        breach,
        generation: 0,
    }
}

/// Late delivery of a resolved breach lookup.
///
/// `recommendation` carries the [`Recommendation::BreachExposed`] entry to
/// append to the matching result's list when the password was found.
#[cfg(feature = "breach")]
#[derive(Debug, Clone, PartialEq)]
pub struct BreachUpdate {
    /// Matches [`AnalysisResult::generation`] of the analysis that
    /// dispatched the lookup.
    pub generation: u64,
    pub status: BreachStatus,
    pub recommendation: Option<Recommendation>,
}

/// Orchestrates repeated analyses with last-request-wins breach lookups.
///
/// Each `analyze` call supersedes the previous one: the in-flight lookup is
/// cancelled cooperatively, and a stale lookup that resolves anyway is
/// discarded by comparing generations before delivery. Updates arrive on the
/// channel passed to [`Analyzer::analyze`], always after that call has
/// returned its synchronous result.
#[cfg(feature = "breach")]
pub struct Analyzer {
    client: BreachClient,
    generation: Arc<AtomicU64>,
    in_flight: Option<CancellationToken>,
}

#[cfg(feature = "breach")]
impl Analyzer {
    pub fn new() -> Self {
        Self::with_client(BreachClient::new())
    }

    pub fn with_client(client: BreachClient) -> Self {
        Analyzer {
            client,
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
        }
    }

    /// Analyzes one password. Returns the synchronous result immediately;
    /// if the password is long enough to check, the breach field is
    /// `Checking` and a [`BreachUpdate`] is sent on `tx` once the lookup
    /// settles (unless a newer `analyze` call supersedes it first).
    ///
    /// Must be called within a tokio runtime.
    pub fn analyze(
        &mut self,
        password: &SecretString,
        tx: mpsc::Sender<BreachUpdate>,
    ) -> AnalysisResult {
        // Supersede the previous request before anything else.
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut result = analyze_local(password);
        result.generation = generation;

        if result.breach == BreachStatus::TooShortToCheck {
            return result;
        }
        result.breach = BreachStatus::Checking;

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let client = self.client.clone();
        let password = password.clone();
        let current = Arc::clone(&self.generation);
        tokio::spawn(async move {
            let status = tokio::select! {
                _ = token.cancelled() => return,
                status = client.check(&password) => status,
            };

            // A newer analysis owns the channel now; drop the stale result.
            if current.load(Ordering::SeqCst) != generation {
                #[cfg(feature = "tracing")]
                tracing::debug!("discarding stale breach result for generation {}", generation);
                return;
            }

            let recommendation = match status {
                BreachStatus::Found(count) => Some(Recommendation::BreachExposed { count }),
                _ => None,
            };
            let _ = tx
                .send(BreachUpdate {
                    generation,
                    status,
                    recommendation,
                })
                .await;
        });

        result
    }
}

#[cfg(feature = "breach")]
impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(all(test, feature = "breach"))]
mod breach_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    /// Client whose lookups fail fast: port 9 is closed, so every check
    /// settles as `Error` without leaving the machine.
    fn offline_analyzer() -> Analyzer {
        Analyzer::with_client(BreachClient::with_base_url("http://127.0.0.1:9"))
    }

    #[tokio::test]
    async fn test_sync_result_marks_checking() {
        let mut analyzer = offline_analyzer();
        let (tx, _rx) = mpsc::channel(4);
        let result = analyzer.analyze(&secret("abcd1234"), tx);
        assert_eq!(result.breach, BreachStatus::Checking);
        assert_eq!(result.generation, 1);
    }

    #[tokio::test]
    async fn test_short_password_skips_lookup() {
        let mut analyzer = offline_analyzer();
        let (tx, mut rx) = mpsc::channel(4);
        let result = analyzer.analyze(&secret("abc"), tx);
        assert_eq!(result.breach, BreachStatus::TooShortToCheck);
        // No task was spawned, so the channel closes without a message.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_lookup_failure_delivers_error_update() {
        let mut analyzer = offline_analyzer();
        let (tx, mut rx) = mpsc::channel(4);
        let result = analyzer.analyze(&secret("correct horse"), tx);

        let update = rx.recv().await.expect("should receive an update");
        assert_eq!(update.generation, result.generation);
        assert_eq!(update.status, BreachStatus::Error);
        assert_eq!(update.recommendation, None);
    }

    #[tokio::test]
    async fn test_stale_lookup_is_discarded() {
        let mut analyzer = offline_analyzer();
        let (tx, mut rx) = mpsc::channel(4);

        // The first lookup is superseded before its task ever polls.
        let first = analyzer.analyze(&secret("abcd"), tx.clone());
        let second = analyzer.analyze(&secret("abcde"), tx.clone());
        drop(tx);
        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);

        let mut updates = Vec::new();
        while let Some(update) = rx.recv().await {
            updates.push(update);
        }
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].generation, second.generation);
    }

    #[tokio::test]
    async fn test_generations_increase_monotonically() {
        let mut analyzer = offline_analyzer();
        let (tx, _rx) = mpsc::channel(8);
        let mut last = 0;
        for pwd in ["aaaa", "bbbb", "cccc"] {
            let result = analyzer.analyze(&secret(pwd), tx.clone());
            assert!(result.generation > last);
            last = result.generation;
        }
    }
}
