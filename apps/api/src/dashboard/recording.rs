//! Mock-interview recording session and its one-second timer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RecordingSession {
    #[default]
    Idle,
    Recording { elapsed_secs: u64, paused: bool },
    Stopped { elapsed_secs: u64 },
}

impl RecordingSession {
    /// Starts a fresh recording from any state; the clock resets.
    pub fn start(self) -> Self {
        RecordingSession::Recording {
            elapsed_secs: 0,
            paused: false,
        }
    }

    pub fn toggle_pause(self) -> Self {
        match self {
            RecordingSession::Recording {
                elapsed_secs,
                paused,
            } => RecordingSession::Recording {
                elapsed_secs,
                paused: !paused,
            },
            other => other,
        }
    }

    /// One timer tick. Counts only while recording and not paused.
    pub fn tick(self) -> Self {
        match self {
            RecordingSession::Recording {
                elapsed_secs,
                paused: false,
            } => RecordingSession::Recording {
                elapsed_secs: elapsed_secs + 1,
                paused: false,
            },
            other => other,
        }
    }

    pub fn stop(self) -> Self {
        match self {
            RecordingSession::Recording { elapsed_secs, .. } => {
                RecordingSession::Stopped { elapsed_secs }
            }
            other => other,
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        match self {
            RecordingSession::Idle => 0,
            RecordingSession::Recording { elapsed_secs, .. }
            | RecordingSession::Stopped { elapsed_secs } => *elapsed_secs,
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingSession::Recording { .. })
    }
}

/// `m:ss`, minutes unpadded.
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Drives `ticks` timer ticks, one per `period`.
pub async fn run_timer(mut session: RecordingSession, period: Duration, ticks: u32) -> RecordingSession {
    let mut interval = tokio::time::interval(period);
    interval.tick().await; // first tick fires immediately
    for _ in 0..ticks {
        interval.tick().await;
        session = session.tick();
    }
    session
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_ticks_do_nothing() {
        assert_eq!(RecordingSession::Idle.tick(), RecordingSession::Idle);
    }

    #[test]
    fn test_recording_counts_seconds() {
        let s = RecordingSession::Idle.start().tick().tick().tick();
        assert_eq!(s.elapsed_secs(), 3);
        assert!(s.is_recording());
    }

    #[test]
    fn test_paused_does_not_count() {
        let s = RecordingSession::Idle.start().tick().toggle_pause().tick().tick();
        assert_eq!(s.elapsed_secs(), 1);
        let s = s.toggle_pause().tick();
        assert_eq!(s.elapsed_secs(), 2);
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let s = RecordingSession::Idle.start().tick().tick().stop();
        assert_eq!(s, RecordingSession::Stopped { elapsed_secs: 2 });
        assert_eq!(s.tick().elapsed_secs(), 2);
        assert_eq!(s.toggle_pause(), s);
    }

    #[test]
    fn test_restart_resets_clock() {
        let s = RecordingSession::Idle.start().tick().stop().start();
        assert_eq!(
            s,
            RecordingSession::Recording {
                elapsed_secs: 0,
                paused: false
            }
        );
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        assert_eq!(RecordingSession::Idle.stop(), RecordingSession::Idle);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(45), "0:45");
        assert_eq!(format_elapsed(135), "2:15");
        assert_eq!(format_elapsed(3600), "60:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_timer_ticks_once_per_period() {
        let start = tokio::time::Instant::now();
        let s = run_timer(RecordingSession::Idle.start(), Duration::from_secs(1), 5).await;
        assert_eq!(s.elapsed_secs(), 5);
        assert!(start.elapsed() >= Duration::from_secs(5));
    }
}
