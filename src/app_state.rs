//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::{Error, dashboard::Dashboard, timezone::get_local_offset};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The dashboard shared by all requests.
    pub dashboard: Arc<Mutex<Dashboard>>,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// Used to decide which transactions count as today's.
    pub local_timezone: String,

    /// The maximum number of transactions shown in the recent transactions list.
    pub display_limit: usize,
}

impl AppState {
    /// Create a new [AppState] serving `dashboard`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// # Errors
    /// Returns an [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(
        dashboard: Dashboard,
        local_timezone: &str,
        display_limit: usize,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            tracing::error!("Invalid timezone {}", local_timezone);
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            local_timezone: local_timezone.to_owned(),
            display_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{AppState, Error, dashboard::Dashboard};

    #[test]
    fn accepts_canonical_timezone() {
        let state = AppState::new(Dashboard::default(), "Asia/Kolkata", 10).unwrap();

        assert_eq!(state.local_timezone, "Asia/Kolkata");
        assert_eq!(state.display_limit, 10);
    }

    #[test]
    fn rejects_unknown_timezone() {
        let result = AppState::new(Dashboard::default(), "Mars/Olympus_Mons", 10);

        assert_eq!(
            result.map(|state| state.local_timezone),
            Err(Error::InvalidTimezoneError("Mars/Olympus_Mons".to_owned()))
        );
    }
}
