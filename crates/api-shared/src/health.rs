use crate::responses::HealthRes;

/// Health check shared by every MedRec API surface.
///
/// The check is static: if the process can answer, it reports healthy. Storage
/// reachability is reported per request as `ServiceUnavailable` instead.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Checks health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "MedRec is alive".into(),
        }
    }
}
