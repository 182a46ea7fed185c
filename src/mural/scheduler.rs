//! Frame pacing strategies for the animation loop

use crate::io::error::{MuralError, Result, invalid_parameter};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Blocks the animation loop until the next frame may run
pub trait FrameScheduler {
    /// Wait for the next frame slot
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying frame source has stopped
    fn wait_for_frame(&mut self) -> Result<()>;
}

/// Which pacing strategy drives the loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerKind {
    /// Cooperative pacing on the display thread, one frame per refresh interval
    DisplayRefresh,
    /// Ticks delivered by a parallel timer thread at a fixed rate
    FixedInterval,
    /// No pacing; frames run back to back
    Unpaced,
}

/// Paces frames against a rolling deadline on the calling thread
#[derive(Debug)]
pub struct DisplayRefresh {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl DisplayRefresh {
    /// Create a pacer for the given refresh interval
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: None,
        }
    }
}

impl FrameScheduler for DisplayRefresh {
    fn wait_for_frame(&mut self) -> Result<()> {
        let now = Instant::now();
        let deadline = match self.next_deadline {
            Some(deadline) if deadline > now => {
                thread::sleep(deadline - now);
                deadline
            }
            // Running late: restart the cadence instead of bursting to catch up
            _ => now,
        };
        self.next_deadline = Some(deadline + self.interval);
        Ok(())
    }
}

/// Receives ticks from a background timer thread
///
/// The timer thread exits once this scheduler is dropped.
#[derive(Debug)]
pub struct FixedInterval {
    ticks: Receiver<()>,
}

impl FixedInterval {
    /// Start a timer thread ticking every `interval`
    pub fn spawn(interval: Duration) -> Self {
        let (sender, ticks) = mpsc::sync_channel(1);
        thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if sender.send(()).is_err() {
                    break;
                }
            }
        });
        Self { ticks }
    }
}

impl FrameScheduler for FixedInterval {
    fn wait_for_frame(&mut self) -> Result<()> {
        self.ticks.recv().ok().ok_or(MuralError::SchedulerStopped)
    }
}

/// Never waits
#[derive(Clone, Copy, Debug, Default)]
pub struct Unpaced;

impl FrameScheduler for Unpaced {
    fn wait_for_frame(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Interval between frames at the given rate
///
/// # Errors
///
/// Returns an error if `fps` is zero
pub fn frame_interval(fps: u32) -> Result<Duration> {
    if fps == 0 {
        return Err(invalid_parameter("fps", &fps, &"must be positive"));
    }
    Ok(Duration::from_secs(1) / fps)
}

/// Build the scheduler for a pacing strategy
///
/// # Errors
///
/// Returns an error if `fps` is zero for a paced strategy
pub fn select_scheduler(kind: SchedulerKind, fps: u32) -> Result<Box<dyn FrameScheduler>> {
    let scheduler: Box<dyn FrameScheduler> = match kind {
        SchedulerKind::DisplayRefresh => Box::new(DisplayRefresh::new(frame_interval(fps)?)),
        SchedulerKind::FixedInterval => Box::new(FixedInterval::spawn(frame_interval(fps)?)),
        SchedulerKind::Unpaced => Box::new(Unpaced),
    };
    tracing::debug!(?kind, fps, "frame scheduler selected");
    Ok(scheduler)
}
