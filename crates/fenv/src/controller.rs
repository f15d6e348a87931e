//! Rounding controller.
//!
//! Translates between the symbolic [`RoundingMode`] vocabulary and the raw
//! hardware directive, and performs the read/write against the environment
//! handle. It implements the following:
//! 1. **Query/Set:** [`RoundingController::get_mode`] and
//!    [`RoundingController::set_mode`], the request/response core.
//! 2. **Scoped control:** [`RoundingController::scoped`] and
//!    [`RoundingController::with_mode`], which capture the active mode and
//!    put it back when a directed computation finishes, so the mode does not
//!    leak into unrelated arithmetic.
//!
//! The active mode is a single per-thread register: transitions happen only
//! through `set_mode`, and a rejected install does not transition (the prior
//! mode stays active). Callers that suspend and may resume on a different
//! thread must re-assert the mode after resumption; this controller gives no
//! cross-thread guarantee.

use crate::env::{FpEnv, HostFpEnv};
use crate::error::FenvError;
use crate::mode::RoundingMode;

/// Queries and sets the calling thread's floating-point rounding direction.
///
/// Generic over the environment seam so tests can substitute a software
/// double; production code uses [`RoundingController::host`].
#[derive(Debug)]
pub struct RoundingController<E: FpEnv = HostFpEnv> {
    env: E,
}

impl RoundingController<HostFpEnv> {
    /// Creates a controller over the current thread's hardware environment.
    #[must_use]
    pub fn host() -> Self {
        Self::new(HostFpEnv::new())
    }
}

impl<E: FpEnv> RoundingController<E> {
    /// Creates a controller over the given environment handle.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Reads the active rounding mode.
    ///
    /// Never fails: a directive that matches none of the symbolic variants
    /// is reported as [`RoundingMode::Raw`], unmodified.
    pub fn get_mode(&self) -> RoundingMode {
        RoundingMode::from_raw(self.env.read_raw())
    }

    /// Installs a rounding mode, all or nothing.
    ///
    /// Symbolic modes are translated to the platform's hardware directive;
    /// [`RoundingMode::Raw`] codes are forwarded verbatim. On success the
    /// mode governs every subsequent floating-point instruction on this
    /// thread until overwritten.
    ///
    /// # Errors
    ///
    /// [`FenvError::UnsupportedMode`] when the environment rejects the
    /// directive. The previously active mode remains installed; no fallback
    /// is substituted and nothing is retried.
    pub fn set_mode(&mut self, mode: RoundingMode) -> Result<(), FenvError> {
        let from = self.env.read_raw();
        let to = mode.to_raw();
        self.env.write_raw(to)?;
        tracing::trace!(from, to, mode = %mode, "rounding directive installed");
        Ok(())
    }

    /// Installs a mode and returns a guard that restores the prior one.
    ///
    /// Captures the active directive, installs `mode`, and reinstalls the
    /// captured directive when the guard is dropped (including on unwind).
    ///
    /// # Errors
    ///
    /// [`FenvError::UnsupportedMode`] when the install is rejected; the
    /// prior mode is still active and nothing needs restoring.
    pub fn scoped(&mut self, mode: RoundingMode) -> Result<ModeGuard<'_, E>, FenvError> {
        let saved = self.env.read_raw();
        self.set_mode(mode)?;
        Ok(ModeGuard {
            controller: self,
            saved,
        })
    }

    /// Evaluates a closure under a rounding mode, then restores the prior one.
    ///
    /// The canonical enclosure pattern: compute a lower bound under
    /// [`RoundingMode::Downward`] and the matching upper bound under
    /// [`RoundingMode::Upward`], leaving the caller's mode intact afterward.
    ///
    /// # Errors
    ///
    /// [`FenvError::UnsupportedMode`] when the install is rejected. The
    /// closure is not run in that case; callers must not compute an
    /// enclosure bound as if the directed mode were active.
    pub fn with_mode<T>(
        &mut self,
        mode: RoundingMode,
        f: impl FnOnce() -> T,
    ) -> Result<T, FenvError> {
        let guard = self.scoped(mode)?;
        let value = f();
        drop(guard);
        Ok(value)
    }
}

impl Default for RoundingController<HostFpEnv> {
    fn default() -> Self {
        Self::host()
    }
}

/// Restores a captured rounding directive on drop.
///
/// Returned by [`RoundingController::scoped`]. Holds the controller
/// exclusively for its lifetime, so no competing `set_mode` can interleave
/// with the scope through the same controller.
#[derive(Debug)]
pub struct ModeGuard<'a, E: FpEnv> {
    controller: &'a mut RoundingController<E>,
    saved: i32,
}

impl<E: FpEnv> ModeGuard<'_, E> {
    /// The mode that was active when the guard was created, and that will be
    /// reinstalled on drop.
    #[must_use]
    pub fn previous(&self) -> RoundingMode {
        RoundingMode::from_raw(self.saved)
    }

    /// The mode currently installed in the environment.
    ///
    /// The guard borrows the controller exclusively, so this is the only way
    /// to observe the register while the scope is open.
    #[must_use]
    pub fn active(&self) -> RoundingMode {
        self.controller.get_mode()
    }
}

impl<E: FpEnv> Drop for ModeGuard<'_, E> {
    fn drop(&mut self) {
        // The saved code was read from the live register, so reinstalling it
        // is accepted on any conforming environment. If a non-conforming one
        // rejects it, the scoped mode stays active; there is no caller to
        // report to from a destructor.
        if let Err(error) = self.controller.env.write_raw(self.saved) {
            tracing::warn!(%error, "failed to restore rounding directive");
        }
    }
}
