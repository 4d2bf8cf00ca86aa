use thiserror::Error;

use crate::{
    bindings::{MediaElement, WakeLockApi, WakeLockRequestId, WakeLockSentinelId},
    Logger,
};

#[derive(Error, Debug)]
pub(crate) enum WakeLockError {
    #[error("Wake lock request rejected: {message}")]
    AcquisitionFailed { message: String },
    #[error("Wake lock release rejected: {message}")]
    ReleaseFailed { message: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WakeLockState {
    /// No lock held nor requested.
    Released,
    /// A lock was requested and we're awaiting the browser's answer.
    Acquiring(WakeLockRequestId),
    /// A lock is currently held.
    Held(WakeLockSentinelId),
}

/// Keeps the screen awake while the media is playing.
///
/// At most one wake lock is requested or held at any time. The browser may release a lock on
/// its own (e.g. when the tab is hidden), in which case a new one is requested if the media is
/// still playing.
pub(crate) struct WakeLockManager {
    state: WakeLockState,
}

impl WakeLockManager {
    pub(crate) fn new() -> Self {
        Self {
            state: WakeLockState::Released,
        }
    }

    /// Returns the `WakeLockSentinelId` of the lock currently held, if one.
    pub(crate) fn held_lock(&self) -> Option<WakeLockSentinelId> {
        match self.state {
            WakeLockState::Held(id) => Some(id),
            _ => None,
        }
    }

    pub(crate) fn is_acquiring(&self) -> bool {
        matches!(self.state, WakeLockState::Acquiring(_))
    }

    /// Method to call when the media starts playing.
    pub(crate) fn on_play<P: WakeLockApi + ?Sized>(&mut self, page: &mut P) {
        if self.state == WakeLockState::Released {
            self.acquire(page);
        }
    }

    /// Method to call when the media is paused.
    pub(crate) fn on_pause<P: WakeLockApi + ?Sized>(&mut self, page: &mut P) {
        // A pending request is left alone: its lock is released as soon as it is granted.
        if let WakeLockState::Held(sentinel) = self.state {
            Logger::debug("WakeLock: releasing lock");
            self.state = WakeLockState::Released;
            page.release_wake_lock(sentinel);
        }
    }

    /// Method to call once the browser granted a lock requested through `jsRequestWakeLock`.
    pub(crate) fn on_acquired<P>(
        &mut self,
        page: &mut P,
        request_id: WakeLockRequestId,
        sentinel: WakeLockSentinelId,
    ) where
        P: MediaElement + WakeLockApi + ?Sized,
    {
        if self.state != WakeLockState::Acquiring(request_id) {
            Logger::warn("WakeLock: unexpected lock granted, releasing it");
            page.release_wake_lock(sentinel);
            return;
        }
        if page.is_paused() {
            Logger::debug("WakeLock: lock granted after pause, releasing it");
            self.state = WakeLockState::Released;
            page.release_wake_lock(sentinel);
        } else {
            Logger::info("WakeLock: lock acquired");
            self.state = WakeLockState::Held(sentinel);
        }
    }

    /// Method to call when a wake lock request was rejected.
    pub(crate) fn on_request_failed(&mut self, request_id: WakeLockRequestId, message: String) {
        if self.state == WakeLockState::Acquiring(request_id) {
            self.state = WakeLockState::Released;
        }
        Logger::warn(&WakeLockError::AcquisitionFailed { message }.to_string());
    }

    /// Method to call when a lock is released, either because we asked for it or because the
    /// browser decided to.
    pub(crate) fn on_released<P>(&mut self, page: &mut P, sentinel: WakeLockSentinelId)
    where
        P: MediaElement + WakeLockApi + ?Sized,
    {
        if self.state != WakeLockState::Held(sentinel) {
            Logger::debug("WakeLock: previous lock released");
            return;
        }
        Logger::info("WakeLock: lock released by the browser");
        self.state = WakeLockState::Released;
        if !page.is_paused() {
            self.acquire(page);
        }
    }

    /// Method to call when releasing a lock was rejected.
    ///
    /// The lock was already forgotten when its release was asked for.
    pub(crate) fn on_release_failed(&mut self, message: String) {
        Logger::warn(&WakeLockError::ReleaseFailed { message }.to_string());
    }

    fn acquire<P: WakeLockApi + ?Sized>(&mut self, page: &mut P) {
        Logger::debug("WakeLock: requesting lock");
        let request_id = page.request_wake_lock();
        self.state = WakeLockState::Acquiring(request_id);
    }
}
