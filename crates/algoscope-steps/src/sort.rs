//! Sorting generators: bubble, selection, insertion.
//!
//! Each algorithm is a distinct generator over full-array snapshots. The
//! granularity is fixed so snapshot counts have a closed form per input:
//!
//! - **Bubble**: one snapshot per inner-loop iteration, swap or not; no
//!   early exit. Exactly `1 + n(n-1)/2` snapshots.
//! - **Selection**: one snapshot per comparison, plus one after the swap
//!   that ends each outer iteration. Exactly `1 + n(n-1)/2 + (n-1)`.
//! - **Insertion**: one snapshot per shift, plus one per final placement
//!   (even when the key did not move). `1 + shifts + (n-1)`.
//!
//! The first snapshot is always the untouched input array; the last is the
//! fully sorted array.

use serde::{Deserialize, Serialize};

use crate::state::{AlgorithmState, SortState};

/// Which sorting algorithm to animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
}

fn snapshot(values: &[i64]) -> AlgorithmState {
    AlgorithmState::Sort(SortState {
        values: values.to_vec(),
    })
}

/// Bubble sort: adjacent compare-swap passes over a shrinking suffix.
#[derive(Debug)]
pub struct BubbleSortGenerator {
    values: Vec<i64>,
    pass: usize,
    cursor: usize,
    initialized: bool,
}

impl BubbleSortGenerator {
    pub(crate) fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            pass: 0,
            cursor: 0,
            initialized: false,
        }
    }
}

impl Iterator for BubbleSortGenerator {
    type Item = AlgorithmState;

    fn next(&mut self) -> Option<AlgorithmState> {
        if !self.initialized {
            self.initialized = true;
            return Some(snapshot(&self.values));
        }

        let n = self.values.len();
        if n < 2 || self.pass >= n - 1 {
            return None;
        }
        if self.values[self.cursor] > self.values[self.cursor + 1] {
            self.values.swap(self.cursor, self.cursor + 1);
        }
        let state = snapshot(&self.values);
        self.cursor += 1;
        if self.cursor >= n - 1 - self.pass {
            self.cursor = 0;
            self.pass += 1;
        }
        Some(state)
    }
}

/// Selection sort phase: scanning for the minimum, or swapping it in.
#[derive(Debug, Clone, Copy)]
enum SelectPhase {
    Init,
    Compare,
    Swap,
}

/// Selection sort: find the minimum of the unsorted suffix, swap it front.
#[derive(Debug)]
pub struct SelectionSortGenerator {
    values: Vec<i64>,
    sorted: usize,
    cursor: usize,
    min_index: usize,
    phase: SelectPhase,
}

impl SelectionSortGenerator {
    pub(crate) fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            sorted: 0,
            cursor: 1,
            min_index: 0,
            phase: SelectPhase::Init,
        }
    }
}

impl Iterator for SelectionSortGenerator {
    type Item = AlgorithmState;

    fn next(&mut self) -> Option<AlgorithmState> {
        let n = self.values.len();
        loop {
            match self.phase {
                SelectPhase::Init => {
                    self.phase = SelectPhase::Compare;
                    return Some(snapshot(&self.values));
                }
                SelectPhase::Compare => {
                    if n < 2 || self.sorted >= n - 1 {
                        return None;
                    }
                    if self.cursor >= n {
                        self.phase = SelectPhase::Swap;
                        continue;
                    }
                    // Strict less keeps the earliest minimum on ties.
                    if self.values[self.cursor] < self.values[self.min_index] {
                        self.min_index = self.cursor;
                    }
                    self.cursor += 1;
                    return Some(snapshot(&self.values));
                }
                SelectPhase::Swap => {
                    self.values.swap(self.sorted, self.min_index);
                    let state = snapshot(&self.values);
                    self.sorted += 1;
                    self.min_index = self.sorted;
                    self.cursor = self.sorted + 1;
                    self.phase = SelectPhase::Compare;
                    return Some(state);
                }
            }
        }
    }
}

/// Insertion sort phase: picking the next key, or shifting it into place.
#[derive(Debug, Clone, Copy)]
enum InsertPhase {
    Init,
    NextKey,
    Shift { key: i64, hole: usize },
}

/// Insertion sort: grow a sorted prefix by shifting each key leftwards.
#[derive(Debug)]
pub struct InsertionSortGenerator {
    values: Vec<i64>,
    boundary: usize,
    phase: InsertPhase,
}

impl InsertionSortGenerator {
    pub(crate) fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            boundary: 1,
            phase: InsertPhase::Init,
        }
    }
}

impl Iterator for InsertionSortGenerator {
    type Item = AlgorithmState;

    fn next(&mut self) -> Option<AlgorithmState> {
        loop {
            match self.phase {
                InsertPhase::Init => {
                    self.phase = InsertPhase::NextKey;
                    return Some(snapshot(&self.values));
                }
                InsertPhase::NextKey => {
                    if self.boundary >= self.values.len() {
                        return None;
                    }
                    self.phase = InsertPhase::Shift {
                        key: self.values[self.boundary],
                        hole: self.boundary,
                    };
                }
                InsertPhase::Shift { key, hole } => {
                    if hole > 0 && self.values[hole - 1] > key {
                        self.values[hole] = self.values[hole - 1];
                        self.phase = InsertPhase::Shift {
                            key,
                            hole: hole - 1,
                        };
                        return Some(snapshot(&self.values));
                    }
                    // Final placement for this key.
                    self.values[hole] = key;
                    self.boundary += 1;
                    self.phase = InsertPhase::NextKey;
                    return Some(snapshot(&self.values));
                }
            }
        }
    }
}
