//! Binary heap operation generator.
//!
//! Runs a script of insert/extract-root operations against a binary heap
//! whose polarity (min or max) fixes the comparator. The initial values are
//! heapified up front with no intermediate snapshots; the heapified array
//! is the initialization state.
//!
//! Snapshots: `Insert` yields after the append and after each sift-up swap.
//! `ExtractRoot` yields after the root/last swap and shrink, then after
//! each sift-down swap; extracting from an empty heap is a no-op and yields
//! nothing. The heap invariant holds in every yielded snapshot except the
//! transient ones inside a sift, where only the sift path may violate it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::state::{AlgorithmState, HeapState};

/// Comparator polarity: which value a parent must win against its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Smallest value at the root.
    Min,
    /// Largest value at the root.
    Max,
}

impl Polarity {
    /// Whether `parent` may sit above `child`. Equal values always may,
    /// so sifting stops on ties.
    pub fn prefers(&self, parent: i64, child: i64) -> bool {
        match self {
            Polarity::Min => parent <= child,
            Polarity::Max => parent >= child,
        }
    }
}

/// One scripted heap operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeapOp {
    Insert(i64),
    ExtractRoot,
}

/// Where the generator is inside the current operation.
#[derive(Debug, Clone, Copy)]
enum Cursor {
    Init,
    NextOp,
    SiftUp(usize),
    SiftDown(usize),
}

/// Lazy heap-operation state sequence.
#[derive(Debug)]
pub struct HeapGenerator {
    values: Vec<i64>,
    polarity: Polarity,
    ops: VecDeque<HeapOp>,
    cursor: Cursor,
}

impl HeapGenerator {
    pub(crate) fn new(values: Vec<i64>, polarity: Polarity, ops: Vec<HeapOp>) -> Self {
        Self {
            values,
            polarity,
            ops: ops.into(),
            cursor: Cursor::Init,
        }
    }

    fn snapshot(&self) -> AlgorithmState {
        AlgorithmState::Heap(HeapState {
            values: self.values.clone(),
            polarity: self.polarity,
        })
    }

    /// The comparator-preferred child of `idx`, if any child exists.
    fn preferred_child(&self, idx: usize) -> Option<usize> {
        let left = 2 * idx + 1;
        let right = left + 1;
        if left >= self.values.len() {
            return None;
        }
        if right < self.values.len()
            && !self.polarity.prefers(self.values[left], self.values[right])
        {
            Some(right)
        } else {
            Some(left)
        }
    }

    /// Sift `idx` all the way down without yielding. Used by heapify only.
    fn sift_down_silently(&mut self, mut idx: usize) {
        while let Some(child) = self.preferred_child(idx) {
            if self.polarity.prefers(self.values[idx], self.values[child]) {
                break;
            }
            self.values.swap(idx, child);
            idx = child;
        }
    }

    /// Build a valid heap from the raw initial values.
    fn heapify(&mut self) {
        for idx in (0..self.values.len() / 2).rev() {
            self.sift_down_silently(idx);
        }
    }
}

impl Iterator for HeapGenerator {
    type Item = AlgorithmState;

    fn next(&mut self) -> Option<AlgorithmState> {
        loop {
            match self.cursor {
                Cursor::Init => {
                    self.heapify();
                    self.cursor = Cursor::NextOp;
                    return Some(self.snapshot());
                }
                Cursor::NextOp => match self.ops.pop_front()? {
                    HeapOp::Insert(value) => {
                        self.values.push(value);
                        self.cursor = Cursor::SiftUp(self.values.len() - 1);
                        return Some(self.snapshot());
                    }
                    HeapOp::ExtractRoot => {
                        let Some(last) = self.values.pop() else {
                            // Empty heap: no-op, no snapshot.
                            continue;
                        };
                        if !self.values.is_empty() {
                            self.values[0] = last;
                            self.cursor = Cursor::SiftDown(0);
                        }
                        return Some(self.snapshot());
                    }
                },
                Cursor::SiftUp(idx) => {
                    if idx == 0 {
                        self.cursor = Cursor::NextOp;
                        continue;
                    }
                    let parent = (idx - 1) / 2;
                    if self.polarity.prefers(self.values[parent], self.values[idx]) {
                        self.cursor = Cursor::NextOp;
                        continue;
                    }
                    self.values.swap(parent, idx);
                    self.cursor = Cursor::SiftUp(parent);
                    return Some(self.snapshot());
                }
                Cursor::SiftDown(idx) => {
                    match self.preferred_child(idx) {
                        Some(child)
                            if !self.polarity.prefers(self.values[idx], self.values[child]) =>
                        {
                            self.values.swap(idx, child);
                            self.cursor = Cursor::SiftDown(child);
                            return Some(self.snapshot());
                        }
                        _ => {
                            self.cursor = Cursor::NextOp;
                            continue;
                        }
                    }
                }
            }
        }
    }
}
