use crate::wire::HealthRes;

/// Simple health service shared by the REST API and the CLI
///
/// Reports liveness together with the recognizer backend that is serving requests, so a
/// deployment running the heuristic fallback is visible at a glance.
#[derive(Clone)]
pub struct HealthService {
    recognizer: &'static str,
}

impl HealthService {
    /// Creates a new health service for the named recognizer backend.
    pub fn new(recognizer: &'static str) -> Self {
        Self { recognizer }
    }

    /// Build the health response.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health(&self) -> HealthRes {
        HealthRes {
            ok: true,
            message: "names service is alive".into(),
            recognizer: self.recognizer.into(),
        }
    }
}
