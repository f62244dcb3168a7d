//! Sortvis Visualization
//!
//! Animated sorting over a browser bar chart, driven by a single-flight run
//! controller.
//!
//! # Architecture
//!
//! - **Controller**: owns the array and surface, admits one run at a time
//! - **Playback**: replays a recorded sort trace step by step, sleeping one
//!   pacing delay on every pause
//! - **Surface**: a bar chart that broadcasts every mutation
//! - **WebSocket**: streams surface events to the frontend and takes commands
//! - **REST API**: status, snapshot and the same controls over plain HTTP
//!
//! # Usage
//!
//! ```ignore
//! let config = VisConfig::from_env()?;
//! let server = VisServer::new(&config);
//! server.serve(config.addr).await?;
//! ```

mod config;
mod controller;
mod error;
mod events;
mod playback;
mod server;
mod surface;

pub use config::VisConfig;
pub use controller::{Admission, ControllerState, RunController, RunHandle, RunOutcome, RunStatus};
pub use error::{Error, Result};
pub use events::{BarView, ChartSnapshot, SurfaceEvent};
pub use playback::{Playback, PlaybackState, PlaybackStatus};
pub use server::{CommandResponse, SharedController, VisServer};
pub use surface::StreamingSurface;

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_core::{Algorithm, PacingParameter};

    #[tokio::test(start_paused = true)]
    async fn streamed_events_rebuild_the_final_chart() {
        let config = VisConfig {
            seed: Some(8),
            pacing: PacingParameter::new(1),
            ..VisConfig::default()
        };
        let server = VisServer::new(&config);
        let controller = server.controller();

        let (mut mirror, mut rx) = {
            let state = controller.read().await;
            (state.surface().snapshot(), state.surface().subscribe())
        };

        let handle = controller.new_run(Algorithm::Insertion).await.unwrap();
        assert_eq!(handle.finished().await, RunOutcome::Completed);

        while let Ok(event) = rx.try_recv() {
            match event {
                SurfaceEvent::SetValue { index, value, .. } => mirror.bars[index].value = value,
                SurfaceEvent::MarkSorted { index } => mirror.bars[index].sorted = true,
                SurfaceEvent::ClearMarks => {
                    mirror.bars.iter_mut().for_each(|b| b.sorted = false)
                }
                SurfaceEvent::Controls { enabled } => mirror.controls_enabled = enabled,
                _ => {}
            }
        }

        let final_snapshot = controller.read().await.surface().snapshot();
        let mirrored: Vec<_> = mirror.bars.iter().map(|b| (b.value, b.sorted)).collect();
        let actual: Vec<_> = final_snapshot
            .bars
            .iter()
            .map(|b| (b.value, b.sorted))
            .collect();
        assert_eq!(mirrored, actual);
        assert!(mirror.controls_enabled);
    }
}
