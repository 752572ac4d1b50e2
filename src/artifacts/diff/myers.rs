use derive_new::new;
use std::fmt::Display;
use std::ops::{Index, IndexMut, Range};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }
}

impl<T: Display> Display for Edit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edit::Delete { value } => write!(f, "-{value}"),
            Edit::Insert { value } => write!(f, "+{value}"),
            Edit::Equal { value } => write!(f, " {value}"),
        }
    }
}

pub trait DiffAlgorithm {
    type EditScript;

    fn diff(&self) -> Self::EditScript;
}

/// Myers' O((N+M)D) diff in its linear-space form.
///
/// Each range is trimmed of its common prefix and suffix, then split at the
/// middle snake of an optimal path and both halves are diffed recursively.
/// Only the two diagonal vectors are kept, so memory stays O(N+M) whatever
/// the edit distance.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> DiffAlgorithm for MyersDiff<'d, T> {
    type EditScript = Vec<Edit<T>>;

    fn diff(&self) -> Self::EditScript {
        let max_d = max_d(self.a.len(), self.b.len());
        let mut vf = Diagonals::new(max_d);
        let mut vb = Diagonals::new(max_d);
        let mut edits = Vec::with_capacity(self.a.len() + self.b.len());

        self.conquer(0..self.a.len(), 0..self.b.len(), &mut vf, &mut vb, &mut edits);

        edits
    }
}

impl<'d, T: Eq + Clone> MyersDiff<'d, T> {
    fn conquer(
        &self,
        mut a: Range<usize>,
        mut b: Range<usize>,
        vf: &mut Diagonals,
        vb: &mut Diagonals,
        edits: &mut Vec<Edit<T>>,
    ) {
        let prefix = common_prefix_len(&self.a[a.clone()], &self.b[b.clone()]);
        self.push_equal(a.start..a.start + prefix, edits);
        a.start += prefix;
        b.start += prefix;

        let suffix = common_suffix_len(&self.a[a.clone()], &self.b[b.clone()]);
        let suffix_start = a.end - suffix;
        a.end -= suffix;
        b.end -= suffix;

        if a.is_empty() {
            self.push_inserts(b, edits);
        } else if b.is_empty() {
            self.push_deletes(a, edits);
        } else if let Some((x, y)) = self.find_middle_snake(a.clone(), b.clone(), vf, vb) {
            self.conquer(a.start..x, b.start..y, vf, vb, edits);
            self.conquer(x..a.end, y..b.end, vf, vb, edits);
        } else {
            self.push_deletes(a, edits);
            self.push_inserts(b, edits);
        }

        self.push_equal(suffix_start..suffix_start + suffix, edits);
    }

    /// Returns a point on an optimal edit path that splits it into two
    /// shorter paths, searching forward and backward at the same time.
    fn find_middle_snake(
        &self,
        a: Range<usize>,
        b: Range<usize>,
        vf: &mut Diagonals,
        vb: &mut Diagonals,
    ) -> Option<(usize, usize)> {
        let (n, m) = (a.len(), b.len());
        let delta = n as isize - m as isize;
        let odd = delta % 2 != 0;

        vf[1] = 0;
        vb[1] = 0;

        for d in 0..max_d(n, m) as isize {
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                    // down from k+1, an insertion
                    vf[k + 1]
                } else {
                    // right from k-1, a deletion
                    vf[k - 1] + 1
                };
                let y = (x as isize - k) as usize;
                let (x0, y0) = (x, y);

                if x < n && y < m {
                    // snake
                    x += common_prefix_len(
                        &self.a[a.start + x..a.end],
                        &self.b[b.start + y..b.end],
                    );
                }
                vf[k] = x;

                if odd && (k - delta).abs() < d && vf[k] + vb[delta - k] >= n {
                    return Some((a.start + x0, b.start + y0));
                }
            }

            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                    vb[k + 1]
                } else {
                    vb[k - 1] + 1
                };
                let mut y = (x as isize - k) as usize;

                if x < n && y < m {
                    let snake = common_suffix_len(
                        &self.a[a.start..a.start + n - x],
                        &self.b[b.start..b.start + m - y],
                    );
                    x += snake;
                    y += snake;
                }
                vb[k] = x;

                if !odd && (k - delta).abs() <= d && vb[k] + vf[delta - k] >= n {
                    return Some((a.start + n - x, b.start + m - y));
                }
            }
        }

        None
    }

    fn push_equal(&self, range: Range<usize>, edits: &mut Vec<Edit<T>>) {
        edits.extend(
            self.a[range]
                .iter()
                .map(|value| Edit::Equal { value: value.clone() }),
        );
    }

    fn push_deletes(&self, range: Range<usize>, edits: &mut Vec<Edit<T>>) {
        edits.extend(
            self.a[range]
                .iter()
                .map(|value| Edit::Delete { value: value.clone() }),
        );
    }

    fn push_inserts(&self, range: Range<usize>, edits: &mut Vec<Edit<T>>) {
        edits.extend(
            self.b[range]
                .iter()
                .map(|value| Edit::Insert { value: value.clone() }),
        );
    }
}

/// Furthest x reached on each diagonal `k`, indexed by `k` in `-max_d..=max_d`.
#[derive(Debug)]
struct Diagonals {
    offset: isize,
    x: Vec<usize>,
}

impl Diagonals {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            x: vec![0; 2 * max_d + 1],
        }
    }
}

impl Index<isize> for Diagonals {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.x[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Diagonals {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.x[(k + self.offset) as usize]
    }
}

fn max_d(n: usize, m: usize) -> usize {
    (n + m).div_ceil(2) + 1
}

fn common_prefix_len<T: Eq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix_len<T: Eq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    Equal,
    Delete,
    Insert,
    Replace,
}

/// A maximal run of edits of one kind, expressed as index ranges into both inputs.
///
/// Runs of deletions and insertions that sit between the same two equal runs
/// are merged into a single `Replace` block.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct OpCode {
    pub tag: OpTag,
    pub a: Range<usize>,
    pub b: Range<usize>,
}

impl OpCode {
    fn from_run(equal: bool, a: Range<usize>, b: Range<usize>) -> Self {
        let tag = if equal {
            OpTag::Equal
        } else {
            match (a.is_empty(), b.is_empty()) {
                (false, true) => OpTag::Delete,
                (true, false) => OpTag::Insert,
                _ => OpTag::Replace,
            }
        };

        Self::new(tag, a, b)
    }
}

pub fn opcodes<T>(edits: &[Edit<T>]) -> Vec<OpCode> {
    let (mut i, mut j) = (0, 0);
    let (mut run_i, mut run_j) = (0, 0);
    let mut run_equal: Option<bool> = None;
    let mut ops = Vec::new();

    for edit in edits {
        let equal = edit.is_equal();

        if run_equal != Some(equal) {
            if let Some(was_equal) = run_equal {
                ops.push(OpCode::from_run(was_equal, run_i..i, run_j..j));
            }
            (run_i, run_j) = (i, j);
            run_equal = Some(equal);
        }

        match edit {
            Edit::Equal { .. } => {
                i += 1;
                j += 1;
            }
            Edit::Delete { .. } => i += 1,
            Edit::Insert { .. } => j += 1,
        }
    }

    if let Some(was_equal) = run_equal {
        ops.push(OpCode::from_run(was_equal, run_i..i, run_j..j));
    }

    ops
}
