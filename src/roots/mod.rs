//! Delegation of right-half-plane root lookup to an external root finder.
//!
//! The Routh test only counts unstable roots. Their locations come from a
//! collaborator implementing [`RootFinder`], typically the HTTP service in
//! [`http`]. A [`RootDelegator`] wraps the collaborator with a timeout and
//! last-request-wins cancellation: starting a new lookup abandons the one
//! still in flight, which then resolves to [`RootOutcome::Superseded`].
//!
//! None of this touches the verdict. A failed lookup only means the root
//! locations are reported as unavailable.

#[cfg(feature = "remote")]
pub mod http;

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::{Result, RouthError};
use crate::input::CoefficientSequence;

/// Default upper bound on one root lookup.
pub const DEFAULT_ROOT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can list the right-half-plane roots of a polynomial.
///
/// Roots are returned as the service's own complex-number strings.
pub trait RootFinder: Send + Sync {
    fn rhs_roots(&self, coefficients: Vec<f64>) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Adapts an async closure into a [`RootFinder`].
pub struct FnRootFinder<F> {
    f: F,
}

impl<F, Fut> FnRootFinder<F>
where
    F: Fn(Vec<f64>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<String>>> + Send,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, Fut> RootFinder for FnRootFinder<F>
where
    F: Fn(Vec<f64>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<String>>> + Send,
{
    fn rhs_roots(&self, coefficients: Vec<f64>) -> impl Future<Output = Result<Vec<String>>> + Send {
        (self.f)(coefficients)
    }
}

/// A right-half-plane root as reported by the root finder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RhsRoot(String);

impl RhsRoot {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The string exactly as the service sent it.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// The root with surrounding parentheses removed, e.g. `(1+2j)` -> `1+2j`.
    pub fn display(&self) -> String {
        self.0.replace(['(', ')'], "").trim().to_string()
    }
}

/// Result of a root lookup.
#[derive(Debug)]
pub enum RootOutcome {
    /// The service listed these roots
    Located(Vec<RhsRoot>),
    /// The service failed or timed out
    Unavailable(RouthError),
    /// A newer lookup on the same delegator replaced this one
    Superseded,
}

impl RootOutcome {
    pub fn roots(&self) -> Option<&[RhsRoot]> {
        match self {
            RootOutcome::Located(roots) => Some(roots),
            _ => None,
        }
    }
}

/// Runs root lookups with a timeout, keeping only the newest one alive.
pub struct RootDelegator<F> {
    finder: F,
    timeout: Duration,
    generation: watch::Sender<u64>,
}

impl<F: RootFinder> RootDelegator<F> {
    /// Create a delegator using [`DEFAULT_ROOT_TIMEOUT`].
    pub fn new(finder: F) -> Self {
        Self {
            finder,
            timeout: DEFAULT_ROOT_TIMEOUT,
            generation: watch::channel(0).0,
        }
    }

    /// Set the per-lookup timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(RouthError::invalid_config("root lookup timeout must be non-zero"));
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Look up the right-half-plane roots of `coefficients`.
    ///
    /// Any lookup already running on this delegator is cancelled.
    pub async fn locate(&self, coefficients: &CoefficientSequence) -> RootOutcome {
        let rx = self.generation.subscribe();
        let mut ticket = 0;
        self.generation.send_modify(|generation| {
            *generation += 1;
            ticket = *generation;
        });
        debug!(ticket, degree = coefficients.degree(), "requesting rhs roots");

        let lookup = tokio::time::timeout(self.timeout, self.finder.rhs_roots(coefficients.as_slice().to_vec()));

        tokio::select! {
            result = lookup => match result {
                Ok(Ok(roots)) => {
                    debug!(ticket, count = roots.len(), "rhs roots located");
                    RootOutcome::Located(roots.into_iter().map(RhsRoot::new).collect())
                }
                Ok(Err(e)) => {
                    warn!(ticket, error = %e, "root service failed");
                    RootOutcome::Unavailable(e)
                }
                Err(_) => {
                    let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
                    warn!(ticket, timeout_ms, "root service timed out");
                    RootOutcome::Unavailable(RouthError::RootServiceTimeout { timeout_ms })
                }
            },
            _ = superseded(rx, ticket) => {
                info!(ticket, "root lookup superseded by a newer request");
                RootOutcome::Superseded
            }
        }
    }
}

/// Resolves once the generation moves past `ticket`.
async fn superseded(mut rx: watch::Receiver<u64>, ticket: u64) {
    loop {
        if rx.changed().await.is_err() {
            // Sender gone: nothing can supersede us any more.
            std::future::pending::<()>().await;
        }
        if *rx.borrow_and_update() != ticket {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coeffs(values: &[f64]) -> CoefficientSequence {
        CoefficientSequence::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_root_display_cleanup() {
        assert_eq!(RhsRoot::new("(3.1+0j)").display(), "3.1+0j");
        assert_eq!(RhsRoot::new("(0.25-1.5j)").raw(), "(0.25-1.5j)");
        assert_eq!(RhsRoot::new("2").display(), "2");
    }

    #[tokio::test]
    async fn test_locate_returns_roots() {
        let finder = FnRootFinder::new(|coefficients: Vec<f64>| async move {
            assert_eq!(coefficients, vec![1.0, -3.0, 2.0, -5.0]);
            Ok::<_, RouthError>(vec!["(3.1+0j)".to_string()])
        });
        let delegator = RootDelegator::new(finder);

        let outcome = delegator.locate(&coeffs(&[1.0, -3.0, 2.0, -5.0])).await;
        let roots = outcome.roots().unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].display(), "3.1+0j");
    }

    #[tokio::test]
    async fn test_locate_reports_failure_as_unavailable() {
        let finder = FnRootFinder::new(|_: Vec<f64>| async {
            Err::<Vec<String>, _>(RouthError::root_service("connection refused"))
        });
        let delegator = RootDelegator::new(finder);

        match delegator.locate(&coeffs(&[1.0, -1.0])).await {
            RootOutcome::Unavailable(e) => assert!(matches!(e, RouthError::RootServiceUnavailable { .. })),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_locate_times_out() {
        let finder = FnRootFinder::new(|_: Vec<f64>| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<Vec<String>, RouthError>(Vec::new())
        });
        let delegator = RootDelegator::new(finder)
            .with_timeout(Duration::from_millis(500))
            .unwrap();

        match delegator.locate(&coeffs(&[1.0, -1.0])).await {
            RootOutcome::Unavailable(RouthError::RootServiceTimeout { timeout_ms }) => assert_eq!(timeout_ms, 500),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_request_supersedes_older() {
        // The first polynomial is slow to answer; the second is instant.
        let finder = FnRootFinder::new(|coefficients: Vec<f64>| async move {
            if coefficients[0] == 1.0 {
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
            Ok::<_, RouthError>(vec![format!("({}+0j)", coefficients[0])])
        });
        let delegator = RootDelegator::new(finder);
        let first = coeffs(&[1.0, -1.0]);
        let second = coeffs(&[2.0, -1.0]);

        let (old, new) = tokio::join!(delegator.locate(&first), async {
            tokio::task::yield_now().await;
            delegator.locate(&second).await
        });

        assert!(matches!(old, RootOutcome::Superseded));
        assert_eq!(new.roots().unwrap()[0].display(), "2+0j");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let finder = FnRootFinder::new(|_: Vec<f64>| async { Ok::<Vec<String>, RouthError>(Vec::new()) });
        assert!(RootDelegator::new(finder).with_timeout(Duration::ZERO).is_err());
    }
}
