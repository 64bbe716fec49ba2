//! Graceful shutdown: cancel drags, destroy panels, stop the runtime.

use std::time::Duration;

use super::core::LingoApp;

impl LingoApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. End any active drag session (forced cancellation)
    /// 2. Destroy panel webviews
    /// 3. Drop conversion channels (in-flight completions have nowhere to go)
    /// 4. Shut down tokio runtime (cancels request tasks)
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        // 1. No drag session may outlive the shell
        self.end_all_drags();

        // 2. Destroy all panel webviews
        if let Some(ref mut registry) = self.panels {
            registry.destroy_all();
        }

        // 3. Drop conversion channels and client
        self.convert_tx = None;
        self.convert_rx = None;
        self.converter = None;

        // 4. Shut down tokio runtime (cancels in-flight request tasks)
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        tracing::info!("Graceful shutdown complete");
    }
}
