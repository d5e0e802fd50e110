//! Display wake lock for automatic playback.
//!
//! Best-effort only: an unsupported platform or a denied request is logged
//! and playback carries on. The handle releases on drop, so every exit path
//! lets the display sleep again.

use tracing::{debug, warn};

#[derive(Default)]
pub struct ScreenWake {
    handle: Option<keepawake::KeepAwake>,
}

impl ScreenWake {
    /// Align the held lock with the desired state; no-op when unchanged.
    pub fn sync(&mut self, hold: bool) {
        if hold == self.handle.is_some() {
            return;
        }
        if hold {
            match keepawake::Builder::default()
                .display(true)
                .reason("Vocabulary drill playback")
                .app_name("Hafalan")
                .app_reverse_domain("io.github.hafalan")
                .create()
            {
                Ok(handle) => {
                    debug!("Wake lock acquired");
                    self.handle = Some(handle);
                }
                Err(err) => warn!("Wake lock unavailable: {err}"),
            }
        } else {
            self.handle = None;
            debug!("Wake lock released");
        }
    }

    pub fn release(&mut self) {
        self.sync(false);
    }
}
