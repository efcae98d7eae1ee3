use std::time::Duration;

use tokio::{
    sync::mpsc,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use crate::core::raw_msg::RawMsg;

/// Host-owned clock for the timer.
///
/// At most one interval is live; its token is kept so `cancel` can stop it.
/// Every schedule starts a new generation, and ticks carry the generation that
/// sent them so ticks queued before a cancel can be told apart.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    generation: u64,
    token: Option<CancellationToken>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            generation: 0,
            token: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    /// Whether a tick of `generation` comes from the interval that is live now
    pub fn is_current(&self, generation: u64) -> bool {
        self.is_active() && self.generation == generation
    }

    /// Start sending `RawMsg::TimerTick` every period. No-op while already active.
    ///
    /// The first tick arrives one full period after scheduling.
    pub fn schedule(&mut self, raw_tx: mpsc::UnboundedSender<RawMsg>) {
        if self.is_active() {
            log::debug!("Ticker already active");
            return;
        }

        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let token = CancellationToken::new();
        let child = token.clone();
        let period = self.period;
        tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = child.cancelled() => break,
                    _ = interval.tick() => {
                        if raw_tx.send(RawMsg::TimerTick(generation)).is_err() {
                            break;
                        }
                    }
                }
            }
        });
        self.token = Some(token);
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
