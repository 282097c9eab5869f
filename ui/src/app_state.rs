use std::ops::Deref;
use std::sync::Arc;

use crate::compat;
use crate::launch::{DeviceHeuristic, LaunchPolicy, StationaryDevice, UserAgentHeuristic};

/// Fixed-at-startup application context: the device classification and the
/// launch tunables. Mutable, reactive state lives in
/// [`crate::app_state_mut::AppStateMut`].
pub struct AppStateData {
    pub device: Arc<dyn DeviceHeuristic>,
    pub launch: LaunchPolicy,
}

#[derive(Clone)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(device: Arc<dyn DeviceHeuristic>, launch: LaunchPolicy) -> Self {
        Self(Arc::new(AppStateData { device, launch }))
    }

    /// Classifies the current device from the user agent (when one exists)
    /// and applies the default launch policy.
    pub fn detect() -> Self {
        let device: Arc<dyn DeviceHeuristic> = match compat::user_agent() {
            Some(ua) => Arc::new(UserAgentHeuristic::new(ua)),
            None => Arc::new(StationaryDevice),
        };
        Self::new(device, LaunchPolicy::default())
    }
}
