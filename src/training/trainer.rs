use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::config::TrainingConfig;
use super::handle::CancellationToken;
use super::status::{TrainingEvent, TrainingReport, TrainingStatus};
use crate::data::LearningPair;
use crate::error::{PerceptError, Result};
use crate::metrics::{manhattan_distance, EpochTracker, IterationInfo};
use crate::network::NeuralNetwork;

/// Repeated epochs of online learning over a shuffled, halved dataset.
///
/// Each epoch shuffles the pairs, learns from the first `len / 2` of them and
/// measures the L1 distance between mapped output and reference on the rest.
#[derive(Debug, Clone)]
pub struct TrainingLoop {
    config: TrainingConfig,
    status: TrainingStatus,
}

impl TrainingLoop {
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        Ok(TrainingLoop {
            config,
            status: TrainingStatus::Idle,
        })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    pub fn status(&self) -> &TrainingStatus {
        &self.status
    }

    /// Check that `pairs` can be split into two non-empty halves.
    pub fn check_dataset(pairs: &[LearningPair]) -> Result<()> {
        if pairs.len() < 2 {
            return Err(PerceptError::configuration(
                "learning_pairs",
                format!("need at least 2 pairs to split, got {}", pairs.len()),
            ));
        }
        Ok(())
    }

    /// Run on the calling thread.
    ///
    /// `sink` sees every epoch summary in order followed by the terminal
    /// status. `cancel` is only looked at between epochs. Dataset errors are
    /// returned before any learning happens; anything failing later ends the
    /// run with [`TrainingStatus::Failed`].
    pub fn run<F>(
        &mut self,
        network: &mut NeuralNetwork,
        pairs: &mut [LearningPair],
        cancel: &CancellationToken,
        mut sink: F,
    ) -> Result<TrainingReport>
    where
        F: FnMut(TrainingEvent),
    {
        Self::check_dataset(pairs)?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        self.status = TrainingStatus::Running;
        info!(
            "training started: {} epochs over {} pairs, learning rate {}",
            self.config.epochs,
            pairs.len(),
            self.config.learning_rate
        );

        let mut iterations = Vec::with_capacity(self.config.epochs);
        let mut status = TrainingStatus::Completed;

        for epoch in 1..=self.config.epochs {
            if cancel.is_cancelled() {
                status = TrainingStatus::Cancelled;
                break;
            }

            match self.run_epoch(network, pairs, &mut rng, epoch) {
                Ok(iteration) => {
                    debug!("{}", iteration);
                    iterations.push(iteration);
                    sink(TrainingEvent::Iteration(iteration));
                }
                Err(err) => {
                    warn!("training failed in epoch {}: {}", epoch, err);
                    status = TrainingStatus::Failed(PerceptError::TrainingFailure(format!(
                        "epoch {}: {}",
                        epoch, err
                    )));
                    break;
                }
            }
        }

        info!("training {} after {} epochs", status, iterations.len());
        self.status = status.clone();
        sink(TrainingEvent::Finished(status.clone()));

        Ok(TrainingReport { status, iterations })
    }

    fn run_epoch(
        &self,
        network: &mut NeuralNetwork,
        pairs: &mut [LearningPair],
        rng: &mut StdRng,
        epoch: usize,
    ) -> Result<IterationInfo> {
        pairs.shuffle(rng);
        let (training, evaluation) = pairs.split_at(pairs.len() / 2);

        for pair in training {
            network.learn(pair.input(), pair.reference(), self.config.learning_rate)?;
        }

        let mut tracker = EpochTracker::new();
        for pair in evaluation {
            let output = network.map(pair.input())?;
            let distance = manhattan_distance(output.view(), pair.reference())?;
            if !distance.is_finite() {
                return Err(PerceptError::TrainingFailure(format!(
                    "non-finite evaluation error {}",
                    distance
                )));
            }
            tracker.record(distance);
        }

        Ok(tracker.finish(epoch))
    }
}
