use std::collections::VecDeque;

use super::event::TelemetryEvent;
use crate::kernel::annotation::TrialOutcome;
use crate::kernel::pending::WordRejection;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    pub pause_stats: PauseStats,
    pub entry_stats: EntryStats,
    pub batch_stats: BatchStats,
    pub outcome: Option<TrialOutcome>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PauseStats {
    pub accepted: u64,
    pub rejected: u64,
    pub auto_resumed: u64,
    pub unpause_blocked: u64,
    /// Mean distance from the last submitted batch, over accepted pauses that had one.
    pub avg_accepted_gap: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStats {
    pub staged: u64,
    pub removed: u64,
    pub empty_rejected: u64,
    pub duplicate_rejected: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    pub submitted: u64,
    pub empty_rejected: u64,
    pub annotations: u64,
    pub avg_batch_size: f64,
    pub discarded_on_error: u64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    let mut gap_total = 0.0;
    let mut gap_count = 0u64;

    for event in events {
        match event {
            TelemetryEvent::PauseAccepted { elapsed, .. } => {
                snap.pause_stats.accepted += 1;
                if let Some(elapsed) = elapsed {
                    gap_total += elapsed;
                    gap_count += 1;
                }
            }
            TelemetryEvent::PauseRejected { .. } => snap.pause_stats.rejected += 1,
            TelemetryEvent::AutoResumed => snap.pause_stats.auto_resumed += 1,
            TelemetryEvent::UnpauseBlocked => snap.pause_stats.unpause_blocked += 1,
            TelemetryEvent::WordStaged => snap.entry_stats.staged += 1,
            TelemetryEvent::WordRemoved => snap.entry_stats.removed += 1,
            TelemetryEvent::WordRejected { reason } => match reason {
                WordRejection::Empty => snap.entry_stats.empty_rejected += 1,
                WordRejection::Duplicate => snap.entry_stats.duplicate_rejected += 1,
            },
            TelemetryEvent::EmptySubmitRejected => snap.batch_stats.empty_rejected += 1,
            TelemetryEvent::BatchSubmitted { words, .. } => {
                snap.batch_stats.submitted += 1;
                snap.batch_stats.annotations += *words as u64;
            }
            TelemetryEvent::MediaFailed { discarded } => {
                snap.batch_stats.discarded_on_error += *discarded as u64;
            }
            TelemetryEvent::TrialResolved { outcome, .. } => {
                snap.outcome = Some(*outcome);
            }
        }
    }

    // Averages
    if gap_count > 0 {
        snap.pause_stats.avg_accepted_gap = gap_total / gap_count as f64;
    }

    if snap.batch_stats.submitted > 0 {
        snap.batch_stats.avg_batch_size =
            snap.batch_stats.annotations as f64 / snap.batch_stats.submitted as f64;
    }

    snap
}
