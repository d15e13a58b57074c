use crate::classifiers::{Classifier, Votes};
use crate::core::{Dataset, Example};
use crate::error::Result;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

pub struct TrainSpyHandle(Arc<AtomicU64>);
impl TrainSpyHandle {
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counts `train` calls across all of its clones; always votes `Positive`.
#[derive(Clone)]
pub struct TrainSpyClassifier {
    count: Arc<AtomicU64>,
}

impl TrainSpyClassifier {
    pub fn new() -> (Self, TrainSpyHandle) {
        let counter = Arc::new(AtomicU64::new(0));
        (
            Self {
                count: counter.clone(),
            },
            TrainSpyHandle(counter),
        )
    }
}

impl Classifier for TrainSpyClassifier {
    fn train(&mut self, _training: &Dataset) -> Result<()> {
        self.count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn get_votes_for_example(&self, _example: &Example) -> Result<Votes> {
        Ok(Votes::new(1.0, 0.0))
    }
}
