//! Per-species process pipeline.
//!
//! # Responsibility
//! - Hold the three execution slots (`AtRest`, `AlongStep`, `PostStep`).
//! - Resolve insertion order deterministically from explicit positions and
//!   "ordered last" requests.
//!
//! # Invariants
//! - Each slot is a positioned region followed by an append-only tail.
//! - Positioned entries are sorted by position; equal positions keep
//!   insertion order, so an entry at position 0 is never displaced by a later
//!   request for position 0.
//! - `SlotOrder::Last` entries keep encounter order and always follow every
//!   positioned entry.

use crate::model::process::{ProcessHandle, ProcessId, ProcessKind};
use std::fmt::Write as _;

/// Ordering parameter used when no explicit position is requested.
pub const ORDER_DEFAULT: u32 = 1000;

/// Execution phase of a simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessSlot {
    AtRest,
    AlongStep,
    PostStep,
}

impl ProcessSlot {
    pub const ALL: [ProcessSlot; 3] = [Self::AtRest, Self::AlongStep, Self::PostStep];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AtRest => "AtRest",
            Self::AlongStep => "AlongStep",
            Self::PostStep => "PostStep",
        }
    }
}

/// Requested placement inside one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOrder {
    Position(u32),
    Last,
}

impl SlotOrder {
    pub const DEFAULT: SlotOrder = SlotOrder::Position(ORDER_DEFAULT);
}

/// Ordered contents of one slot.
#[derive(Debug, Clone, Default)]
pub struct SlotSequence {
    positioned: Vec<(u32, ProcessHandle)>,
    tail: Vec<ProcessHandle>,
}

impl SlotSequence {
    fn insert(&mut self, process: ProcessHandle, order: SlotOrder) {
        match order {
            SlotOrder::Position(position) => {
                let index = self
                    .positioned
                    .iter()
                    .position(|(existing, _)| *existing > position)
                    .unwrap_or(self.positioned.len());
                self.positioned.insert(index, (position, process));
            }
            SlotOrder::Last => self.tail.push(process),
        }
    }

    fn remove(&mut self, id: ProcessId) -> Option<ProcessHandle> {
        if let Some(index) = self.positioned.iter().position(|(_, p)| p.id == id) {
            return Some(self.positioned.remove(index).1);
        }
        let index = self.tail.iter().position(|p| p.id == id)?;
        Some(self.tail.remove(index))
    }

    /// Iterates in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessHandle> {
        self.positioned
            .iter()
            .map(|(_, process)| process)
            .chain(self.tail.iter())
    }

    pub fn len(&self) -> usize {
        self.positioned.len() + self.tail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered process collection owned by one species.
#[derive(Debug, Clone, Default)]
pub struct ProcessPipeline {
    at_rest: SlotSequence,
    along_step: SlotSequence,
    post_step: SlotSequence,
}

impl ProcessPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: ProcessSlot) -> &SlotSequence {
        match slot {
            ProcessSlot::AtRest => &self.at_rest,
            ProcessSlot::AlongStep => &self.along_step,
            ProcessSlot::PostStep => &self.post_step,
        }
    }

    fn slot_mut(&mut self, slot: ProcessSlot) -> &mut SlotSequence {
        match slot {
            ProcessSlot::AtRest => &mut self.at_rest,
            ProcessSlot::AlongStep => &mut self.along_step,
            ProcessSlot::PostStep => &mut self.post_step,
        }
    }

    /// Attaches `process` to one slot.
    pub fn attach(&mut self, slot: ProcessSlot, process: &ProcessHandle, order: SlotOrder) {
        self.slot_mut(slot).insert(ProcessHandle::clone(process), order);
    }

    /// Attaches a discrete process: post-step only, default ordering.
    ///
    /// Discrete processes compete by interaction length at run time, so
    /// their slot position carries no physics meaning.
    pub fn attach_discrete(&mut self, process: &ProcessHandle) {
        self.attach(ProcessSlot::PostStep, process, SlotOrder::DEFAULT);
    }

    /// Attaches a process acting both at rest and post step.
    pub fn attach_rest_discrete(&mut self, process: &ProcessHandle, order: SlotOrder) {
        self.attach(ProcessSlot::AtRest, process, order);
        self.attach(ProcessSlot::PostStep, process, order);
    }

    /// Removes `id` from every slot. Returns the handle when found anywhere.
    pub fn remove_process(&mut self, id: ProcessId) -> Option<ProcessHandle> {
        let mut removed = None;
        for slot in ProcessSlot::ALL {
            if let Some(process) = self.slot_mut(slot).remove(id) {
                removed = Some(process);
            }
        }
        removed
    }

    /// First process of `kind` in `slot`, in execution order.
    pub fn find_first(&self, slot: ProcessSlot, kind: ProcessKind) -> Option<&ProcessHandle> {
        self.slot(slot).iter().find(|process| process.kind == kind)
    }

    pub fn count_kind(&self, slot: ProcessSlot, kind: ProcessKind) -> usize {
        self.slot(slot)
            .iter()
            .filter(|process| process.kind == kind)
            .count()
    }

    /// Index of `id` within `slot`, in execution order.
    pub fn index_of(&self, slot: ProcessSlot, id: ProcessId) -> Option<usize> {
        self.slot(slot).iter().position(|process| process.id == id)
    }

    pub fn kinds(&self, slot: ProcessSlot) -> Vec<ProcessKind> {
        self.slot(slot).iter().map(|process| process.kind).collect()
    }

    pub fn names(&self, slot: ProcessSlot) -> Vec<&str> {
        self.slot(slot)
            .iter()
            .map(|process| process.name.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        ProcessSlot::ALL.iter().all(|slot| self.slot(*slot).is_empty())
    }

    /// One line per slot: `AlongStep: Transportation, msc, eIoni`.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for slot in ProcessSlot::ALL {
            let _ = writeln!(out, "{}: {}", slot.as_str(), self.names(slot).join(", "));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{ProcessPipeline, ProcessSlot, SlotOrder};
    use crate::model::process::{InteractionProcess, ProcessHandle, ProcessKind};

    fn process(kind: ProcessKind, name: &str) -> ProcessHandle {
        InteractionProcess::new(kind, name, 0).into_handle()
    }

    #[test]
    fn position_zero_is_never_displaced() {
        let mut pipeline = ProcessPipeline::new();
        let transport = process(ProcessKind::Transportation, "Transportation");
        let intruder = process(ProcessKind::Electromagnetic, "msc");
        pipeline.attach(ProcessSlot::AlongStep, &transport, SlotOrder::Position(0));
        pipeline.attach(ProcessSlot::AlongStep, &intruder, SlotOrder::Position(0));

        assert_eq!(pipeline.index_of(ProcessSlot::AlongStep, transport.id), Some(0));
        assert_eq!(pipeline.index_of(ProcessSlot::AlongStep, intruder.id), Some(1));
    }

    #[test]
    fn last_entries_keep_encounter_order_after_positioned_entries() {
        let mut pipeline = ProcessPipeline::new();
        let first_last = process(ProcessKind::StepLimiter, "StepLimiter");
        let second_last = process(ProcessKind::Scintillation, "Scintillation");
        let positioned = process(ProcessKind::Decay, "Decay");

        pipeline.attach(ProcessSlot::PostStep, &first_last, SlotOrder::Last);
        pipeline.attach(ProcessSlot::PostStep, &second_last, SlotOrder::Last);
        pipeline.attach(ProcessSlot::PostStep, &positioned, SlotOrder::DEFAULT);

        assert_eq!(
            pipeline.names(ProcessSlot::PostStep),
            vec!["Decay", "StepLimiter", "Scintillation"]
        );
    }

    #[test]
    fn positioned_entries_sort_by_position() {
        let mut pipeline = ProcessPipeline::new();
        let entries = [
            (ProcessKind::Electromagnetic, "eIoni", 2),
            (ProcessKind::Electromagnetic, "msc", 1),
            (ProcessKind::Transportation, "Transportation", 0),
        ];
        for (kind, name, position) in entries {
            pipeline.attach(
                ProcessSlot::AlongStep,
                &process(kind, name),
                SlotOrder::Position(position),
            );
        }

        assert_eq!(
            pipeline.names(ProcessSlot::AlongStep),
            vec!["Transportation", "msc", "eIoni"]
        );
    }

    #[test]
    fn remove_process_clears_every_slot() {
        let mut pipeline = ProcessPipeline::new();
        let decay = process(ProcessKind::Decay, "Decay");
        pipeline.attach_rest_discrete(&decay, SlotOrder::DEFAULT);
        assert_eq!(pipeline.count_kind(ProcessSlot::AtRest, ProcessKind::Decay), 1);

        let removed = pipeline.remove_process(decay.id).expect("decay should be removed");
        assert_eq!(removed.id, decay.id);
        assert!(pipeline.is_empty());
        assert!(pipeline.remove_process(decay.id).is_none());
    }

    #[test]
    fn describe_lists_all_slots() {
        let mut pipeline = ProcessPipeline::new();
        pipeline.attach_discrete(&process(ProcessKind::Absorption, "OpAbsorption"));
        let text = pipeline.describe();
        assert!(text.contains("AtRest: \n"));
        assert!(text.contains("PostStep: OpAbsorption"));
    }
}
