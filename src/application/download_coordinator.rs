use std::time::Duration;

use futures::{stream::BoxStream, StreamExt};

/// Timing knobs for the simulated transfer.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub download_delay: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            download_delay: Duration::from_secs(3),
        }
    }
}

/// Events emitted while a simulated download runs.
#[derive(Debug, Clone)]
pub enum DownloadEvent {
    Completed,
}

#[derive(Clone)]
pub struct DownloadCoordinator {
    config: SimulationConfig,
}

/// Internal state for the simulation stream
enum SimulationState {
    Waiting { url: String, delay: Duration },
    Finished,
}

impl DownloadCoordinator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Run one simulated download. No bytes move: the stream sleeps for the
    /// configured delay, emits a single `Completed`, and ends. There is no
    /// handle to abort a running simulation.
    pub fn run(&self, url: String) -> BoxStream<'static, DownloadEvent> {
        futures::stream::unfold(
            SimulationState::Waiting {
                url,
                delay: self.config.download_delay,
            },
            |state| async move {
                match state {
                    SimulationState::Waiting { url, delay } => {
                        tokio::time::sleep(delay).await;
                        log::debug!("simulated transfer finished for {}", url.trim());

                        Some((DownloadEvent::Completed, SimulationState::Finished))
                    }
                    SimulationState::Finished => None,
                }
            },
        )
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_emits_one_completion_after_the_delay() {
        let coordinator = DownloadCoordinator::new(SimulationConfig {
            download_delay: Duration::from_millis(25),
        });

        let started = Instant::now();
        let events: Vec<_> = coordinator
            .run("https://youtu.be/abc".to_string())
            .collect()
            .await;

        assert!(started.elapsed() >= Duration::from_millis(25));
        assert!(matches!(events.as_slice(), [DownloadEvent::Completed]));
    }
}
