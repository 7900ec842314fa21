use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::metrics::{compute_snapshot, ChangeSnapshot};
use super::record::ChangeRecord;
use crate::collection::TypedCollection;
use crate::event::{Change, SubscriptionId};

const MAX_RECORDS: usize = 10_000;

#[derive(Debug)]
pub struct ChangeRecorder {
    buffer: VecDeque<ChangeRecord>,
}

impl ChangeRecorder {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(MAX_RECORDS),
        }
    }

    /// Subscribe a shared recorder to every change on `collection`.
    pub fn attach<T: 'static>(recorder: &Rc<RefCell<Self>>, collection: &TypedCollection<T>) -> SubscriptionId {
        let recorder = Rc::clone(recorder);
        collection
            .events()
            .subscribe_all(move |change: &Change<'_, T>| recorder.borrow_mut().observe(change))
    }

    pub fn observe<T>(&mut self, change: &Change<'_, T>) {
        self.record(ChangeRecord::from(change));
    }

    pub fn record(&mut self, record: ChangeRecord) {
        if self.buffer.len() >= MAX_RECORDS {
            self.buffer.pop_front();
        }
        self.buffer.push_back(record);
    }

    pub fn records(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.buffer.iter()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn snapshot(&self) -> ChangeSnapshot {
        compute_snapshot(&self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for ChangeRecorder {
    fn default() -> Self {
        Self::new()
    }
}
