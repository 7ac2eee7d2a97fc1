//! RevealAnimation - staged presentation of the final numbers.
//!
//! On entering the results view the caller starts an animation task that
//! interpolates every displayed figure from zero to its final value over
//! a fixed duration and tick count, publishing frames on a `watch`
//! channel. The task never touches the `EstimateResult`; it is purely
//! presentational. Leaving the results view cancels the task (the handle
//! aborts it), and restarting is deterministic: always from zero, always
//! converging to the exact final values.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, info};

use crate::domain::estimate::EstimateResult;
use crate::domain::foundation::Money;

/// Timing for the staged reveal.
#[derive(Debug, Clone)]
pub struct RevealConfig {
    /// Total animation duration.
    pub duration: Duration,

    /// Number of frames published across the duration.
    pub tick_count: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1_400),
            tick_count: 28,
        }
    }
}

impl RevealConfig {
    /// Create config with a custom duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Create config with a custom tick count.
    pub fn with_tick_count(mut self, ticks: u32) -> Self {
        self.tick_count = ticks.max(1);
        self
    }
}

/// One animation frame: the displayed numeric fields part-way to their
/// final values. The last frame of a run is always the exact result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealFrame {
    pub total_current_spending: Money,
    pub monthly_savings: Money,
    pub annual_savings: Money,
    pub roi_percent: i32,
    pub hours_recovered_annually: u32,
    pub value_of_time_recovered: Money,
    /// True only on the final, exact frame.
    pub completed: bool,
}

impl RevealFrame {
    /// The all-zero starting frame.
    pub fn zero() -> Self {
        Self {
            total_current_spending: Money::ZERO,
            monthly_savings: Money::ZERO,
            annual_savings: Money::ZERO,
            roi_percent: 0,
            hours_recovered_annually: 0,
            value_of_time_recovered: Money::ZERO,
            completed: false,
        }
    }

    /// The exact final frame for a result.
    pub fn settled(result: &EstimateResult) -> Self {
        Self {
            total_current_spending: result.total_current_spending,
            monthly_savings: result.monthly_savings,
            annual_savings: result.annual_savings,
            roi_percent: result.roi_percent,
            hours_recovered_annually: result.hours_recovered_annually,
            value_of_time_recovered: result.value_of_time_recovered,
            completed: true,
        }
    }
}

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

fn scale_money(amount: Money, eased: f64) -> Money {
    Money::from_cents((amount.cents() as f64 * eased).round() as i64)
}

/// Pure interpolation of a result at an eased progress in [0, 1].
/// Independent of any timer, so the curve is testable on its own.
pub fn interpolate(result: &EstimateResult, eased: f64) -> RevealFrame {
    RevealFrame {
        total_current_spending: scale_money(result.total_current_spending, eased),
        monthly_savings: scale_money(result.monthly_savings, eased),
        annual_savings: scale_money(result.annual_savings, eased),
        roi_percent: (result.roi_percent as f64 * eased).round() as i32,
        hours_recovered_annually: (result.hours_recovered_annually as f64 * eased).round()
            as u32,
        value_of_time_recovered: scale_money(result.value_of_time_recovered, eased),
        completed: false,
    }
}

/// Handle to a running reveal animation.
///
/// Dropping the handle aborts the task, so a torn-down results view can
/// never receive further frames.
pub struct RevealAnimation {
    handle: JoinHandle<()>,
    frames: watch::Receiver<RevealFrame>,
}

impl RevealAnimation {
    /// Starts the animation task from the zero frame.
    pub fn start(result: EstimateResult, config: RevealConfig) -> Self {
        let (tx, frames) = watch::channel(RevealFrame::zero());
        let ticks = config.tick_count.max(1);
        let tick_interval = config.duration / ticks;

        info!(
            duration_ms = config.duration.as_millis() as u64,
            ticks, "reveal animation started"
        );

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(tick_interval);
            // The first interval tick completes immediately; consume it
            // so frame pacing starts one interval in.
            interval.tick().await;

            for tick in 1..=ticks {
                interval.tick().await;
                let frame = if tick == ticks {
                    RevealFrame::settled(&result)
                } else {
                    let t = f64::from(tick) / f64::from(ticks);
                    interpolate(&result, ease_out_cubic(t))
                };
                if tx.send(frame).is_err() {
                    debug!("reveal receiver dropped; stopping animation");
                    return;
                }
            }
        });

        Self { handle, frames }
    }

    /// Returns the most recently published frame.
    pub fn frame(&self) -> RevealFrame {
        *self.frames.borrow()
    }

    /// Returns an independent receiver of frames.
    pub fn subscribe(&self) -> watch::Receiver<RevealFrame> {
        self.frames.clone()
    }

    /// Waits until the final, exact frame has been published. Returns
    /// `None` if the animation was cancelled first.
    pub async fn settled(&mut self) -> Option<RevealFrame> {
        match self.frames.wait_for(|f| f.completed).await {
            Ok(frame) => Some(*frame),
            Err(_) => None,
        }
    }

    /// Returns true once the task has finished or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancels the animation task immediately.
    pub fn cancel(&self) {
        info!("reveal animation cancelled");
        self.handle.abort();
    }
}

impl Drop for RevealAnimation {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
