//! Cancellable settle animation driver.
//!
//! A settle runs as a tokio task that walks the frame sequence of a
//! [`Settle`], pacing frames with an interval and sending them over an mpsc
//! channel. The owner cancels the task when a new gesture starts; the
//! generation stamped on every event lets the owner drop anything the task
//! queued before it noticed the cancellation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::fling::Settle;
use crate::log;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique ticket identifying one settle.
pub fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Events emitted by a running settle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettleEvent {
    /// Intermediate offset to render
    Frame { generation: u64, offset: f32 },
    /// The settle reached its rest offset
    Finished {
        generation: u64,
        offset: f32,
        slots: i64,
    },
}

impl SettleEvent {
    pub fn generation(&self) -> u64 {
        match self {
            SettleEvent::Frame { generation, .. } | SettleEvent::Finished { generation, .. } => {
                *generation
            }
        }
    }
}

pub type SettleSender = mpsc::UnboundedSender<SettleEvent>;
pub type SettleReceiver = mpsc::UnboundedReceiver<SettleEvent>;

/// Channel carrying settle events from tasks to the UI loop.
pub fn channel() -> (SettleSender, SettleReceiver) {
    mpsc::unbounded_channel()
}

/// Handle to an in-flight settle task.
#[derive(Debug)]
pub struct SettleTask {
    generation: u64,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl SettleTask {
    /// Spawn the settle on the current tokio runtime.
    pub fn spawn(
        generation: u64,
        settle: Settle,
        frame_interval: Duration,
        events: SettleSender,
    ) -> Self {
        let token = CancellationToken::new();
        let child = token.clone();
        let handle = tokio::spawn(async move {
            run(generation, settle, frame_interval, events, child).await;
        });
        Self {
            generation,
            token,
            handle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop frame delivery. Events already queued must be discarded by
    /// the receiver through the generation check.
    pub fn cancel(self) {
        self.token.cancel();
        log::log_event(&format!("settle {} cancelled", self.generation));
    }
}

async fn run(
    generation: u64,
    settle: Settle,
    frame_interval: Duration,
    events: SettleSender,
    token: CancellationToken,
) {
    let mut interval = tokio::time::interval(frame_interval.max(Duration::from_millis(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let Settle {
        target,
        slots,
        frames,
        ..
    } = settle;

    for offset in frames {
        tokio::select! {
            biased;
            _ = token.cancelled() => return,
            _ = interval.tick() => {}
        }
        if token.is_cancelled() {
            return;
        }
        if events.send(SettleEvent::Frame { generation, offset }).is_err() {
            return;
        }
    }

    if !token.is_cancelled() {
        let _ = events.send(SettleEvent::Finished {
            generation,
            offset: target,
            slots,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fling::{ExponentialDecay, FlingSettler};

    fn settle_from(offset: f32, frames: u32) -> Settle {
        FlingSettler::new(40.0)
            .unwrap()
            .settle(offset, 0.0, &ExponentialDecay::new(20.0, frames))
    }

    #[test]
    fn test_generations_are_unique() {
        let a = next_generation();
        let b = next_generation();
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_frames_arrive_in_order_then_finish() {
        let (tx, mut rx) = channel();
        let generation = next_generation();
        let task = SettleTask::spawn(generation, settle_from(25.0, 4), Duration::from_millis(1), tx);

        let mut offsets = vec![];
        let mut finished = None;
        while let Some(event) = rx.recv().await {
            assert_eq!(event.generation(), generation);
            match event {
                SettleEvent::Frame { offset, .. } => offsets.push(offset),
                SettleEvent::Finished { offset, slots, .. } => finished = Some((offset, slots)),
            }
        }

        assert_eq!(offsets.len(), 4);
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(finished, Some((40.0, 1)));
        assert!(task.is_finished());
    }

    #[tokio::test]
    async fn test_cancel_stops_before_finish() {
        let (tx, mut rx) = channel();
        let generation = next_generation();
        let task = SettleTask::spawn(
            generation,
            settle_from(25.0, 50),
            Duration::from_millis(20),
            tx,
        );
        assert_eq!(task.generation(), generation);
        task.cancel();

        // Task drops its sender on exit; the channel closes without a Finished event
        let drained = tokio::time::timeout(Duration::from_secs(2), async {
            let mut events = vec![];
            while let Some(event) = rx.recv().await {
                events.push(event);
            }
            events
        })
        .await
        .unwrap();

        assert!(drained.len() < 50);
        assert!(!drained
            .iter()
            .any(|e| matches!(e, SettleEvent::Finished { .. })));
    }
}
