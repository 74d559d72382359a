//! Edit-distance alignment of phoneme sequences
//!
//! Both the aligner and the distance use unit costs. The aligner keeps a
//! trace matrix alongside the cost matrix; on equal costs the diagonal
//! (match or substitution) wins over deletion, which wins over insertion.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::phonemes::{format_phonemes, Phoneme};

/// Operation that produced one alignment step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentKind {
    Match,
    Substitution,
    /// Extra phoneme in the response
    Insertion,
    /// Target phoneme missing from the response
    Deletion,
}

impl AlignmentKind {
    pub fn is_match(&self) -> bool {
        matches!(self, AlignmentKind::Match)
    }
}

/// One unit of correspondence between target and response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentStep {
    /// None for an insertion
    pub target: Option<Phoneme>,
    /// None for a deletion
    pub response: Option<Phoneme>,
    /// 0-based index of the step in the alignment
    pub position: usize,
    #[serde(rename = "type")]
    pub kind: AlignmentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trace {
    Diagonal,
    Up,
    Left,
}

/// Flat (rows × cols) matrix
struct Grid<T> {
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    fn get(&self, i: usize, j: usize) -> T {
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: T) {
        self.cells[i * self.cols + j] = value;
    }
}

/// Optimal alignment of a target and a response phoneme sequence
///
/// Empty inputs degrade to all insertions or all deletions.
pub fn align_phonemes(target: &[Phoneme], response: &[Phoneme]) -> Vec<AlignmentStep> {
    let m = target.len();
    let n = response.len();

    let mut cost = Grid::new(m + 1, n + 1, 0usize);
    let mut traces = Grid::new(m + 1, n + 1, Trace::Diagonal);

    for i in 1..=m {
        cost.set(i, 0, i);
        traces.set(i, 0, Trace::Up);
    }
    for j in 1..=n {
        cost.set(0, j, j);
        traces.set(0, j, Trace::Left);
    }

    for i in 1..=m {
        for j in 1..=n {
            let mismatch = usize::from(target[i - 1] != response[j - 1]);

            let mut best = cost.get(i - 1, j - 1) + mismatch;
            let mut step = Trace::Diagonal;

            let deletion = cost.get(i - 1, j) + 1;
            if deletion < best {
                best = deletion;
                step = Trace::Up;
            }

            let insertion = cost.get(i, j - 1) + 1;
            if insertion < best {
                best = insertion;
                step = Trace::Left;
            }

            cost.set(i, j, best);
            traces.set(i, j, step);
        }
    }

    // Backtrace from the bottom-right corner, collected in reverse
    let mut steps = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);

    while i > 0 || j > 0 {
        let step = if i == 0 {
            Trace::Left
        } else if j == 0 {
            Trace::Up
        } else {
            traces.get(i, j)
        };

        match step {
            Trace::Diagonal => {
                let (t, r) = (target[i - 1], response[j - 1]);
                let kind = if t == r {
                    AlignmentKind::Match
                } else {
                    AlignmentKind::Substitution
                };
                steps.push((Some(t), Some(r), kind));
                i -= 1;
                j -= 1;
            }
            Trace::Up => {
                steps.push((Some(target[i - 1]), None, AlignmentKind::Deletion));
                i -= 1;
            }
            Trace::Left => {
                steps.push((None, Some(response[j - 1]), AlignmentKind::Insertion));
                j -= 1;
            }
        }
    }

    let alignment: Vec<AlignmentStep> = steps
        .into_iter()
        .rev()
        .enumerate()
        .map(|(position, (target, response, kind))| AlignmentStep {
            target,
            response,
            position,
            kind,
        })
        .collect();

    trace!(
        "Aligned {} with {}: cost {}, {} step(s)",
        format_phonemes(target),
        format_phonemes(response),
        cost.get(m, n),
        alignment.len()
    );

    alignment
}

/// Levenshtein distance between two sequences
pub fn levenshtein_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let n = a.len();
    let m = b.len();

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    // Two rolling rows are enough for the distance alone
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0; m + 1];

    for i in 1..=n {
        curr[0] = i;
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1) // Deletion
                .min(curr[j - 1] + 1) // Insertion
                .min(prev[j - 1] + cost); // Substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}
