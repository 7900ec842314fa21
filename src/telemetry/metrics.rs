use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::record::ChangeRecord;
use crate::event::ChangeKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeSnapshot {
    pub adds: u64,
    pub removes: u64,
    pub sorts: u64,
    pub items_added: u64,
    pub items_removed: u64,
    /// Largest single add or remove.
    pub largest_batch: usize,
    pub avg_batch: f64,
    /// `length_after` of the most recent record.
    pub last_length: Option<usize>,
}

pub fn compute_snapshot(records: &VecDeque<ChangeRecord>) -> ChangeSnapshot {
    let mut snap = ChangeSnapshot::default();

    for record in records {
        match record.kind {
            ChangeKind::Add => {
                snap.adds += 1;
                snap.items_added += record.count as u64;
            }
            ChangeKind::Remove => {
                snap.removes += 1;
                snap.items_removed += record.count as u64;
            }
            ChangeKind::Sort => snap.sorts += 1,
        }
        if record.count > snap.largest_batch {
            snap.largest_batch = record.count;
        }
    }

    let batches = snap.adds + snap.removes;
    if batches > 0 {
        snap.avg_batch = (snap.items_added + snap.items_removed) as f64 / batches as f64;
    }
    snap.last_length = records.back().map(|r| r.length_after);

    snap
}
