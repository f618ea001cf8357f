//! Where a run's roll comes from.

use lazyload_types::Roll;

pub trait RollSource: Send {
    fn roll(&mut self) -> Roll;
}

/// Uniform draw in `[0, 1)` from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRoll;

impl RollSource for RandomRoll {
    fn roll(&mut self) -> Roll {
        let value = rand::random::<f64>();
        Roll::new(value).unwrap_or_else(|err| {
            tracing::warn!(%err, "Random draw out of range, using zero");
            Roll::ZERO
        })
    }
}

/// Always returns the same roll. Used to force a branch.
#[derive(Debug, Clone, Copy)]
pub struct FixedRoll(pub Roll);

impl RollSource for FixedRoll {
    fn roll(&mut self) -> Roll {
        self.0
    }
}
