use thiserror::Error;

/// Errors raised while wiring up or starting a scroll animation.
///
/// Both lookup failures mean the page does not have the structure the
/// configuration expects. Callers treat them as a no-op rather than a crash.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// No element matches the trigger selector
    #[error("no scroll trigger matches selector `{selector}`")]
    TriggerNotFound { selector: String },

    /// The scroll target is not in the document
    #[error("scroll target `#{id}` not found")]
    TargetNotFound { id: String },

    /// Motion tuning that cannot converge
    #[error("invalid motion: {reason}")]
    InvalidMotion { reason: String },
}
