//! Mount state for a provider widget.
//!
//! Mounting is asynchronous: the SDK has to finish loading first, and the
//! owning view may be disposed while that is still pending. The phases here
//! make sure a widget is mounted at most once and never after disposal, and
//! that disposal hands back the host that actually holds a widget.

#![cfg_attr(not(feature = "hydrate"), allow(dead_code))]

#[derive(Debug)]
enum Phase<H> {
    Idle,
    Loading,
    Mounted(H),
    Disposed,
}

#[derive(Debug)]
pub struct MountLifecycle<H> {
    phase: Phase<H>,
}

impl<H> Default for MountLifecycle<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> MountLifecycle<H> {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Starts loading. Returns `false` if a mount was already started or
    /// the owner is gone.
    pub fn begin(&mut self) -> bool {
        if matches!(self.phase, Phase::Idle) {
            self.phase = Phase::Loading;
            true
        } else {
            false
        }
    }

    /// Whether a pending load should still go on to mount.
    pub fn should_mount(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Records a completed mount.
    ///
    /// If the owner was disposed in the meantime, the host is handed back
    /// so the caller can unmount it right away.
    pub fn mounted(&mut self, host: H) -> Option<H> {
        if self.should_mount() {
            self.phase = Phase::Mounted(host);
            None
        } else {
            Some(host)
        }
    }

    /// Disposes the owner, returning the host to unmount if a widget is
    /// currently mounted.
    pub fn dispose(&mut self) -> Option<H> {
        match std::mem::replace(&mut self.phase, Phase::Disposed) {
            Phase::Mounted(host) => Some(host),
            _ => None,
        }
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self.phase, Phase::Disposed)
    }
}
