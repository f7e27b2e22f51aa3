//! Error module for bucketstat.
//!
//! Every stage of the analysis pipeline has its own error enum; they all
//! convert into [`BucketstatError`] so the binary can propagate with `?` and
//! report a single fatal error at the top.

use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use thiserror::Error;
use tracing_error::{SpanTrace, SpanTraceStatus};

pub mod analysis;
pub mod config;
pub mod hash;
pub mod wordlist;

/// Result type alias used throughout bucketstat.
pub type BucketstatResult<T> = Result<T, BucketstatError>;

/// Core error enum for bucketstat.
#[derive(Error, Debug)]
pub enum BucketstatError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors occurring while loading the word list.
    #[error("Word list error: {0}")]
    WordList(#[from] wordlist::WordListError),

    /// Errors raised by a bucket hash function.
    #[error("Hash error: {0}")]
    Hash(#[from] hash::HashError),

    /// Errors raised while aggregating bucket statistics.
    #[error("Analysis error: {0}")]
    Analysis(#[from] analysis::AnalysisError),

    /// IO errors that may occur while writing reports or config files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),

    /// An error raised inside an instrumented operation, together with the
    /// spans that were open when it was raised.
    #[error("{source}")]
    Traced {
        /// The underlying error.
        source: Box<BucketstatError>,
        /// Spans active at the point of failure.
        trace: SpanTrace,
    },
}

impl BucketstatError {
    /// Attaches the spans active at the call site.
    ///
    /// Only takes effect when an `ErrorLayer` is installed and at least one
    /// span is open. An error that already carries a trace keeps the one
    /// captured closest to where it was raised.
    pub fn in_current_span(self) -> Self {
        if matches!(self, Self::Traced { .. }) {
            return self;
        }

        let trace = SpanTrace::capture();
        if trace.status() == SpanTraceStatus::CAPTURED {
            Self::Traced {
                source: Box::new(self),
                trace,
            }
        } else {
            self
        }
    }

    /// The span trace captured for this error, if any.
    pub fn span_trace(&self) -> Option<&SpanTrace> {
        match self {
            Self::Traced { trace, .. } => Some(trace),
            _ => None,
        }
    }

    /// The error without its span trace.
    pub fn root(&self) -> &BucketstatError {
        match self {
            Self::Traced { source, .. } => source.root(),
            error => error,
        }
    }
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: BucketstatError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,

    /// Span trace information if available.
    pub trace: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: BucketstatError, component: S) -> Self {
        let trace = error.span_trace().map(ToString::to_string);
        Self {
            error,
            component: component.into(),
            details: None,
            trace,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Adds span trace information to the error context.
    pub fn with_trace<S: Into<String>>(mut self, trace: S) -> Self {
        self.trace = Some(trace.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Reports errors as `tracing` error events.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            trace = context.trace.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Set the process-wide error reporter.
///
/// Only the first call takes effect; returns `false` if a reporter was
/// already installed.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    ERROR_REPORTER.set(reporter).is_ok()
}

/// Report an error with context through the installed reporter.
///
/// Falls back to standard error when no reporter has been installed yet,
/// e.g. for configuration errors raised before logging is up.
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
