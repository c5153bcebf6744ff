use std::sync::Arc;
use std::time::Duration;

use log::*;
use tokio::time::timeout;

use crate::error::Error;
use crate::session::SessionFactory;
use crate::status::Status;

/// Runs scoped health checks against a session-like resource.
///
/// Each [`Probe::check`] invocation owns its session exclusively: acquire,
/// verify once, release. The probe always completes with a [`Status`] and
/// never raises, so a readiness endpoint can call it unconditionally.
#[derive(Clone)]
pub struct Probe {
    factory: Arc<dyn SessionFactory>,
    timeout: Duration,
}

impl Probe {
    /// `timeout` bounds acquisition and verification individually; an
    /// expired deadline is treated as that phase failing.
    pub fn new(factory: Arc<dyn SessionFactory>, timeout: Duration) -> Self {
        Self { factory, timeout }
    }

    pub async fn check(&self) -> Status {
        let mut session = match timeout(self.timeout, self.factory.session()).await {
            Ok(Ok(session)) => session,
            Ok(Err(e)) => {
                warn!("Health check could not acquire a session: {e}");
                return Status::down(&e);
            }
            Err(_) => {
                let e = Error::timeout();
                warn!("Health check timed out acquiring a session");
                return Status::down(&e);
            }
        };

        let verified = match timeout(self.timeout, session.verify()).await {
            Ok(result) => result,
            Err(_) => Err(Error::timeout()),
        };

        // The session is released exactly once, whatever verification did.
        let released = session.close().await;

        match (verified, released) {
            (Ok(data), Ok(())) => Status::up(data),
            (Ok(_), Err(e)) => {
                warn!("Health check session failed to close: {e}");
                Status::down(&e)
            }
            (Err(e), released) => {
                if let Err(close_err) = released {
                    warn!("Health check session failed to close: {close_err}");
                }
                warn!("Health check verification failed: {e}");
                Status::down(&e)
            }
        }
    }
}
