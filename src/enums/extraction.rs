use serde_json::Value;

/// Outcome of pulling a JSON document out of free-form model output.
///
/// Both variants are successful outcomes; a response without usable JSON is
/// expected and never fails the request.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Parsed(Value),
    Unavailable(UnavailableReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// JSON mode was off for the request.
    NotRequested,
    /// A fence was opened but never closed.
    UnterminatedFence,
    /// The candidate text is not a JSON document.
    InvalidJson,
}
