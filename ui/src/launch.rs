//! Deciding how "Pay Now" behaves, and the fallback race that follows.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::spawn;

/// How long the redirect gets before we assume no UPI app picked it up.
pub const FALLBACK_DELAY: Duration = Duration::from_millis(2500);

/// Install page suggested when the redirect appears to have gone nowhere.
pub const UPI_APP_STORE_URL: &str =
    "https://play.google.com/store/apps/details?id=com.google.android.apps.nbu.paisa.user";

/// User-agent fragments that mark a handheld browser.
const MOBILE_UA_MARKERS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

/// Guess at what kind of device is running the app.
///
/// Injected rather than read in place so the launch flow can be driven by a
/// stub in tests. The production implementations are chosen in
/// [`crate::app_state::AppState::detect`].
pub trait DeviceHeuristic {
    /// Best-effort: does this look like a handheld device? The answer comes
    /// from a client-supplied identification string and can be wrong in
    /// either direction.
    fn is_mobile(&self) -> bool;
}

/// Classifies by substring-matching the browser user agent, the
/// `iPhone|iPad|iPod|Android` test the mobile web has settled on.
pub struct UserAgentHeuristic {
    user_agent: String,
}

impl UserAgentHeuristic {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl DeviceHeuristic for UserAgentHeuristic {
    fn is_mobile(&self) -> bool {
        let ua = self.user_agent.to_ascii_lowercase();
        MOBILE_UA_MARKERS.iter().any(|marker| ua.contains(marker))
    }
}

/// Used when no user agent is available (native launchers). Never mobile,
/// so "Pay Now" falls back to the scan hint.
pub struct StationaryDevice;

impl DeviceHeuristic for StationaryDevice {
    fn is_mobile(&self) -> bool {
        false
    }
}

/// Tunables for the mobile launch attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchPolicy {
    /// Delay before the "no UPI app found" notice fires.
    pub fallback_delay: Duration,
    /// Store page offered in that notice.
    pub store_url: &'static str,
}

impl Default for LaunchPolicy {
    fn default() -> Self {
        Self {
            fallback_delay: FALLBACK_DELAY,
            store_url: UPI_APP_STORE_URL,
        }
    }
}

/// What pressing "Pay Now" should do on this device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchAction {
    /// Navigate to the link and arm the fallback notice.
    Redirect { fallback_after: Duration },
    /// Tell the user to scan the QR code instead.
    ScanHint,
}

pub fn plan_launch(device: &dyn DeviceHeuristic, policy: &LaunchPolicy) -> LaunchAction {
    if device.is_mobile() {
        LaunchAction::Redirect {
            fallback_after: policy.fallback_delay,
        }
    } else {
        LaunchAction::ScanHint
    }
}

/// The race between the fallback deadline and a window-blur event.
///
/// Both signals arrive on the single-threaded UI event queue, so plain
/// interior state is enough; no locking. Losing focus is a coarse proxy for
/// "an external app intercepted the navigation": focus can be stolen by
/// something else entirely, and some browsers hand off to the app without
/// blurring the page. The watch only guarantees that the notice fires at
/// most once and never after a cancel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandoffWatch {
    state: WatchState,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum WatchState {
    #[default]
    Armed,
    Cancelled,
    Fired,
}

impl HandoffWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// The window lost focus; stand down unless the notice already fired.
    pub fn cancel(&mut self) {
        if self.state == WatchState::Armed {
            self.state = WatchState::Cancelled;
        }
    }

    /// The deadline elapsed. Returns `true` exactly once, and only when no
    /// cancel came first; the caller shows the notice on `true`.
    pub fn deadline_elapsed(&mut self) -> bool {
        if self.state == WatchState::Armed {
            self.state = WatchState::Fired;
            true
        } else {
            false
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == WatchState::Cancelled
    }
}

/// Handle for a [`schedule`]d callback; dropping it cancels the callback if
/// it has not run yet.
pub struct Deadline {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for Deadline {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

/// Runs `f` after `delay` on the UI task queue.
///
/// Must be called from within a Dioxus scope (an event handler or effect).
/// The timer is `compat::sleep`, so the same code drives both the browser
/// and native builds.
pub fn schedule(delay: Duration, f: impl FnOnce() + 'static) -> Deadline {
    let cancelled = Rc::new(Cell::new(false));
    let flag = Rc::clone(&cancelled);
    spawn(async move {
        crate::compat::sleep(delay).await;
        if !flag.get() {
            f();
        }
    });
    Deadline { cancelled }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDevice(bool);

    impl DeviceHeuristic for FixedDevice {
        fn is_mobile(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn handheld_user_agents_are_mobile() {
        let agents = [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15",
            "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15",
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36",
            "SOMETHING ANDROID SHOUTY",
        ];
        for ua in agents {
            assert!(UserAgentHeuristic::new(ua).is_mobile(), "{ua}");
        }
    }

    #[test]
    fn desktop_user_agents_are_not_mobile() {
        let agents = [
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            "Mozilla/5.0 (X11; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0",
            "",
        ];
        for ua in agents {
            assert!(!UserAgentHeuristic::new(ua).is_mobile(), "{ua}");
        }
    }

    #[test]
    fn stationary_fallback_is_never_mobile() {
        assert!(!StationaryDevice.is_mobile());
    }

    #[test]
    fn mobile_plan_redirects_with_policy_delay() {
        let policy = LaunchPolicy {
            fallback_delay: Duration::from_millis(100),
            ..LaunchPolicy::default()
        };
        assert_eq!(
            plan_launch(&FixedDevice(true), &policy),
            LaunchAction::Redirect {
                fallback_after: Duration::from_millis(100)
            }
        );
    }

    #[test]
    fn desktop_plan_shows_scan_hint() {
        let policy = LaunchPolicy::default();
        assert_eq!(plan_launch(&FixedDevice(false), &policy), LaunchAction::ScanHint);
    }

    #[test]
    fn fallback_fires_exactly_once() {
        let mut watch = HandoffWatch::new();
        assert!(watch.deadline_elapsed());
        assert!(!watch.deadline_elapsed());
    }

    #[test]
    fn blur_before_deadline_suppresses_fallback() {
        let mut watch = HandoffWatch::new();
        watch.cancel();
        assert!(watch.is_cancelled());
        assert!(!watch.deadline_elapsed());
        // A second blur or deadline changes nothing.
        watch.cancel();
        assert!(!watch.deadline_elapsed());
    }

    #[test]
    fn simulated_mobile_launch_arms_the_fallback_race() {
        let device =
            UserAgentHeuristic::new("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)");
        let policy = LaunchPolicy::default();
        let LaunchAction::Redirect { fallback_after } = plan_launch(&device, &policy) else {
            panic!("mobile launch must redirect");
        };
        assert_eq!(fallback_after, FALLBACK_DELAY);

        // No focus loss before the delay: the notice fires exactly once.
        let mut undisturbed = HandoffWatch::new();
        assert!(undisturbed.deadline_elapsed());
        assert!(!undisturbed.deadline_elapsed());

        // Focus loss first: the notice never fires.
        let mut handed_off = HandoffWatch::new();
        handed_off.cancel();
        assert!(!handed_off.deadline_elapsed());
    }

    #[test]
    fn blur_after_firing_changes_nothing() {
        let mut watch = HandoffWatch::new();
        assert!(watch.deadline_elapsed());
        watch.cancel();
        assert!(!watch.is_cancelled());
        assert!(!watch.deadline_elapsed());
    }
}
