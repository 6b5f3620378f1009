//! Similarity ratio between row keys.
//!
//! The ratio is derived from the length of the shortest insert/delete edit
//! script, found with Myers' greedy O(ND) forward search:
//!
//! ```text
//! ratio = 1 - ed / (len_a + len_b)
//! ```
//!
//! which equals `2 * LCS / (len_a + len_b)`.

use crate::model::RowKey;

/// Length of the shared leading run.
fn common_prefix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Length of the shared trailing run.
fn common_suffix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Number of insertions plus deletions needed to turn `a` into `b`.
#[must_use]
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let prefix = common_prefix(a, b);
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = common_suffix(a, b);
    let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

    let (n, m) = (a.len() as isize, b.len() as isize);
    if n == 0 || m == 0 {
        return (n + m) as usize;
    }

    let max = n + m;
    let offset = max;
    let mut v = vec![0isize; 2 * max as usize + 2];

    for d in 0..=max {
        for k in (-d..=d).step_by(2) {
            let idx = (offset + k) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n && y >= m {
                return d as usize;
            }
        }
    }

    max as usize
}

/// Similarity ratio of two row keys, in `[0, 1]`.
///
/// Equal keys score `1.0`; an empty key scores `0.0` against anything else.
#[must_use]
pub fn similarity(a: &RowKey, b: &RowKey) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let total = a.len() + b.len();
    let ed = edit_distance(a.elems(), b.elems());
    1.0 - ed as f64 / total as f64
}
