use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::info;

use super::status::{TrainingEvent, TrainingReport, TrainingStatus};
use super::trainer::TrainingLoop;
use crate::data::LearningPair;
use crate::error::{PerceptError, Result};
use crate::network::NeuralNetwork;

/// Cooperative stop flag shared between a controller and one training loop.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// What a background run hands back once it stops.
#[derive(Debug)]
pub struct TrainedModel {
    pub network: NeuralNetwork,
    /// The dataset, in the order of the last shuffle.
    pub pairs: Vec<LearningPair>,
    pub report: TrainingReport,
}

/// Controller side of a training loop running on its own thread.
#[derive(Debug)]
pub struct TrainingHandle {
    cancel: CancellationToken,
    events: Receiver<TrainingEvent>,
    status: TrainingStatus,
    worker: JoinHandle<Result<TrainedModel>>,
}

impl TrainingHandle {
    /// Ask the loop to stop at the next epoch boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// The ordered event stream.
    pub fn events(&self) -> &Receiver<TrainingEvent> {
        &self.events
    }

    /// Drain the events delivered so far, tracking the last status seen.
    pub fn poll(&mut self) -> Vec<TrainingEvent> {
        let events: Vec<_> = self.events.try_iter().collect();
        for event in &events {
            if let TrainingEvent::Finished(status) = event {
                self.status = status.clone();
            }
        }
        events
    }

    /// Status as of the last [`TrainingHandle::poll`].
    pub fn status(&self) -> &TrainingStatus {
        &self.status
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Wait for the worker and take back the network and dataset.
    pub fn join(self) -> Result<TrainedModel> {
        self.worker
            .join()
            .map_err(|_| PerceptError::TrainingFailure("training thread panicked".to_string()))?
    }
}

impl TrainingLoop {
    /// Move `network` and `pairs` onto a dedicated thread and train there.
    pub fn spawn(
        mut self,
        mut network: NeuralNetwork,
        mut pairs: Vec<LearningPair>,
    ) -> Result<TrainingHandle> {
        Self::check_dataset(&pairs)?;

        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();
        let (tx, events) = channel();

        let worker = thread::Builder::new()
            .name("percept-training".to_string())
            .spawn(move || {
                let report = self.run(&mut network, &mut pairs, &worker_cancel, |event| {
                    // The controller may have dropped its receiver; training goes on.
                    let _ = tx.send(event);
                })?;
                Ok(TrainedModel {
                    network,
                    pairs,
                    report,
                })
            })?;

        info!("training thread spawned");
        Ok(TrainingHandle {
            cancel,
            events,
            status: TrainingStatus::Running,
            worker,
        })
    }
}
