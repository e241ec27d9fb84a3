//! Portal search session, the client-side search flow.
//!
//! State machine: READY → SEARCHING → (COMPLETE | ERROR) → READY.
//! A terminal state returns to READY only when the next submit arrives.
//! Submits while SEARCHING are ignored; the trigger stays disabled until the
//! in-flight search settles. There is no cancellation.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::listings::models::{JobListing, ValidatedSearch};
use crate::listings::source::JobSource;
use crate::listings::validation::validate_form_input;
use crate::portal::animation::CounterAnimation;
use crate::portal::render::{render_results, render_status, Node};

pub const STATUS_READY: &str = "SYSTEM STATUS: READY";
pub const STATUS_SEARCHING: &str = "SEARCHING...";
pub const STATUS_ERROR: &str = "SYSTEM STATUS: ERROR";
pub const NOTICE_MISSING_QUERY: &str = "ERROR: PLEASE ENTER A JOB SEARCH QUERY";

const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(1500);
const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Ready,
    Searching,
    Complete { found: usize },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub class: &'static str,
}

impl StatusLine {
    fn new(message: impl Into<String>, class: &'static str) -> Self {
        Self {
            message: message.into(),
            class,
        }
    }

    pub fn render(&self) -> Node {
        render_status(&self.message, self.class)
    }
}

/// Transient inline error message that disappears after its TTL.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Artificial network delay before each search.
    pub search_delay: Duration,
    pub notice_ttl: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            search_delay: DEFAULT_SEARCH_DELAY,
            notice_ttl: DEFAULT_NOTICE_TTL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A search is already in flight; the trigger is disabled.
    Busy,
    /// Trimmed query was empty; a notice was raised.
    MissingQuery,
}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Rejected(SubmitRejected),
    Completed {
        found: usize,
        counter: CounterAnimation,
    },
    Failed {
        message: String,
    },
}

pub struct SearchSession {
    source: Arc<dyn JobSource>,
    config: SessionConfig,
    state: SearchState,
    status: StatusLine,
    trigger_enabled: bool,
    results: Vec<Node>,
    job_count: u64,
    displayed_count: u64,
    notices: Vec<Notice>,
}

impl SearchSession {
    pub fn new(source: Arc<dyn JobSource>, config: SessionConfig) -> Self {
        Self {
            source,
            config,
            state: SearchState::Ready,
            status: StatusLine::new(STATUS_READY, "status-ready"),
            trigger_enabled: true,
            results: Vec::new(),
            job_count: 0,
            displayed_count: 0,
            notices: Vec::new(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    pub fn results(&self) -> &[Node] {
        &self.results
    }

    /// Cumulative listings found across all successful searches.
    pub fn job_count(&self) -> u64 {
        self.job_count
    }

    pub fn displayed_count(&self) -> u64 {
        self.displayed_count
    }

    /// Called by the counter animation as it advances.
    pub fn set_displayed_count(&mut self, value: u64) {
        self.displayed_count = value;
    }

    /// Notices still on screen. Expired ones are dropped.
    pub fn visible_notices(&mut self) -> &[Notice] {
        let now = Instant::now();
        self.notices.retain(|n| n.expires_at > now);
        &self.notices
    }

    fn raise_notice(&mut self, message: impl Into<String>) {
        self.notices.push(Notice {
            message: message.into(),
            expires_at: Instant::now() + self.config.notice_ttl,
        });
    }

    /// READY → SEARCHING. Trims and validates the form input first.
    pub fn begin(&mut self, query: &str, location: &str) -> Result<ValidatedSearch, SubmitRejected> {
        if !self.trigger_enabled {
            return Err(SubmitRejected::Busy);
        }

        // A finished search only returns to READY once the next submit arrives.
        if matches!(
            self.state,
            SearchState::Complete { .. } | SearchState::Error { .. }
        ) {
            debug!("Portal session {:?} -> Ready", self.state);
            self.state = SearchState::Ready;
        }

        let search = match validate_form_input(query, location) {
            Ok(search) => search,
            Err(_) => {
                self.raise_notice(NOTICE_MISSING_QUERY);
                return Err(SubmitRejected::MissingQuery);
            }
        };

        self.state = SearchState::Searching;
        self.status = StatusLine::new(STATUS_SEARCHING, "status-searching");
        self.trigger_enabled = false;
        debug!("Portal search started: {:?}", search);
        Ok(search)
    }

    /// SEARCHING → COMPLETE. Returns the counter animation for the new total.
    pub fn complete(&mut self, jobs: Vec<JobListing>) -> CounterAnimation {
        let found = jobs.len();
        self.results = render_results(&jobs);
        self.status = StatusLine::new(
            format!("SEARCH COMPLETE - {found} JOBS FOUND"),
            "status-complete",
        );
        self.job_count += found as u64;
        self.state = SearchState::Complete { found };
        self.trigger_enabled = true;
        CounterAnimation::new(self.displayed_count, self.job_count)
    }

    /// SEARCHING → ERROR. Previous results stay on screen.
    pub fn fail(&mut self, error: &AppError) -> String {
        let message = error.to_string();
        warn!("Portal search failed: {message}");
        self.raise_notice(format!("ERROR: SEARCH FAILED - {message}"));
        self.status = StatusLine::new(STATUS_ERROR, "status-ready");
        self.state = SearchState::Error {
            message: message.clone(),
        };
        self.trigger_enabled = true;
        message
    }

    /// Full submit: validate, wait out the artificial delay, fetch, settle.
    pub async fn submit(&mut self, query: &str, location: &str) -> SubmitOutcome {
        match self.begin(query, location) {
            Ok(search) => self.run(search).await,
            Err(rejected) => SubmitOutcome::Rejected(rejected),
        }
    }

    /// Runs a search accepted by `begin` and settles the session.
    pub async fn run(&mut self, search: ValidatedSearch) -> SubmitOutcome {
        tokio::time::sleep(self.config.search_delay).await;

        let result = self.source.search(&search).await;
        match result {
            Ok(jobs) => {
                let found = jobs.len();
                let counter = self.complete(jobs);
                SubmitOutcome::Completed { found, counter }
            }
            Err(e) => SubmitOutcome::Failed {
                message: self.fail(&e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use async_trait::async_trait;

    use super::*;
    use crate::listings::{LocaleProfile, MockJobGenerator};
    use crate::portal::render::NO_RESULTS;

    fn mock_session() -> SearchSession {
        let source = Arc::new(MockJobGenerator::new(Arc::new(LocaleProfile::western())));
        SearchSession::new(source, SessionConfig::default())
    }

    struct FailingSource;

    #[async_trait]
    impl JobSource for FailingSource {
        async fn search(&self, _search: &ValidatedSearch) -> Result<Vec<JobListing>, AppError> {
            Err(AppError::Internal(anyhow!("network unreachable")))
        }

        fn backend(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_starts_ready() {
        let session = mock_session();
        assert_eq!(session.state(), &SearchState::Ready);
        assert_eq!(session.status().message, STATUS_READY);
        assert!(session.trigger_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_query_raises_notice_and_stays_ready() {
        let mut session = mock_session();
        let outcome = session.submit("   ", "Remote").await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Rejected(SubmitRejected::MissingQuery)
        ));
        assert_eq!(session.state(), &SearchState::Ready);
        assert_eq!(session.visible_notices()[0].message, NOTICE_MISSING_QUERY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_auto_dismisses() {
        let mut session = mock_session();
        let _ = session.begin("", "");
        assert_eq!(session.visible_notices().len(), 1);

        tokio::time::advance(Duration::from_secs(5)).await;
        assert!(session.visible_notices().is_empty());
    }

    #[test]
    fn test_begin_disables_trigger_and_blocks_resubmit() {
        let mut session = mock_session();
        let search = session.begin("  Developer ", "").unwrap();
        assert_eq!(search.query, "Developer");
        assert_eq!(session.state(), &SearchState::Searching);
        assert_eq!(session.status().message, STATUS_SEARCHING);
        assert!(!session.trigger_enabled());

        assert_eq!(session.begin("Designer", ""), Err(SubmitRejected::Busy));
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_search_completes() {
        let mut session = mock_session();
        let outcome = session.submit("Developer", "Remote").await;

        let SubmitOutcome::Completed { found, counter } = outcome else {
            panic!("expected completion");
        };
        assert!((3..=7).contains(&found));
        assert_eq!(session.state(), &SearchState::Complete { found });
        assert_eq!(
            session.status().message,
            format!("SEARCH COMPLETE - {found} JOBS FOUND")
        );
        assert!(session.trigger_enabled());
        assert_eq!(session.job_count(), found as u64);
        assert_eq!(counter.start, 0);
        assert_eq!(counter.target, found as u64);
        // header + cards
        assert_eq!(session.results().len(), found + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_waits_for_artificial_delay() {
        let mut session = mock_session();
        let begin = Instant::now();
        session.submit("Developer", "").await;
        assert!(begin.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_job_count_accumulates() {
        let mut session = mock_session();
        let mut total = 0u64;
        for query in ["Developer", "Designer"] {
            if let SubmitOutcome::Completed { found, counter } = session.submit(query, "").await {
                total += found as u64;
                session.set_displayed_count(counter.target);
            }
        }
        assert_eq!(session.job_count(), total);
        assert_eq!(session.displayed_count(), total);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_enters_error_then_ready_on_next_submit() {
        let mut session = SearchSession::new(Arc::new(FailingSource), SessionConfig::default());
        let outcome = session.submit("Developer", "").await;

        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
        assert!(matches!(session.state(), SearchState::Error { .. }));
        assert_eq!(session.status().message, STATUS_ERROR);
        assert!(session.trigger_enabled());
        assert!(session
            .visible_notices()
            .iter()
            .any(|n| n.message == "ERROR: SEARCH FAILED - network unreachable"));

        session.begin("Developer", "").unwrap();
        assert_eq!(session.state(), &SearchState::Searching);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submit_after_completion_returns_to_ready() {
        let mut session = mock_session();
        let outcome = session.submit("Developer", "").await;
        assert!(matches!(outcome, SubmitOutcome::Completed { .. }));

        let outcome = session.submit("   ", "").await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Rejected(SubmitRejected::MissingQuery)
        ));
        assert_eq!(session.state(), &SearchState::Ready);
        assert!(session.trigger_enabled());
        assert_eq!(session.visible_notices()[0].message, NOTICE_MISSING_QUERY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submit_after_failure_returns_to_ready() {
        let mut session = SearchSession::new(Arc::new(FailingSource), SessionConfig::default());
        session.submit("Developer", "").await;
        assert!(matches!(session.state(), SearchState::Error { .. }));

        let _ = session.begin("", "");
        assert_eq!(session.state(), &SearchState::Ready);
    }

    #[test]
    fn test_status_line_renders_with_class() {
        let mut session = mock_session();
        session.begin("Developer", "").unwrap();
        let html = session.status().render().to_html();
        assert!(html.contains("status-searching"));
        assert!(html.contains(STATUS_SEARCHING));
    }

    #[test]
    fn test_complete_with_no_jobs_renders_no_results() {
        let mut session = mock_session();
        session.begin("Developer", "").unwrap();
        session.complete(Vec::new());

        assert_eq!(session.results().len(), 1);
        assert_eq!(session.results()[0].text_content(), NO_RESULTS);
        assert_eq!(session.state(), &SearchState::Complete { found: 0 });
    }
}
