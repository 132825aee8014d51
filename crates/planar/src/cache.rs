//! Per-instance memoization with implicit invalidation.
//!
//! A `Memo<T>` slot stores one computed value tagged with a structural
//! fingerprint of the owning shape's mutable state. Reads recompute the
//! fingerprint; a mismatch discards the stale value. Shapes therefore
//! never have to invalidate explicitly after mutation.
//!
//! Interior mutability via `RefCell`: the kernel is single-threaded, and
//! a `Memo` is scoped to one owning shape instance. Embedders that share
//! shapes across threads must wrap the shape in their own lock.

use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use crate::Point;

/// One memoized value, valid while the owner's fingerprint is unchanged.
#[derive(Debug, Default, Clone)]
pub struct Memo<T> {
    slot: RefCell<Option<(u64, T)>>,
}

impl<T: Clone> Memo<T> {
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }

    /// Return the cached value if it was computed under `fingerprint`,
    /// otherwise run `compute`, cache and return its result.
    pub fn get_or_compute(&self, fingerprint: u64, compute: impl FnOnce() -> T) -> T {
        {
            let slot = self.slot.borrow();
            if let Some((tag, value)) = &*slot {
                if *tag == fingerprint {
                    return value.clone();
                }
            }
        }
        // Borrow released above: `compute` may touch sibling memos.
        let value = compute();
        *self.slot.borrow_mut() = Some((fingerprint, value.clone()));
        value
    }

    /// Drop any cached value.
    pub fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Cheap structural fingerprint of a coordinate sequence (bit patterns,
/// order-sensitive). Distinct from geometric equality on purpose: any
/// representational change invalidates.
pub fn fingerprint(points: &[Point]) -> u64 {
    let mut h = DefaultHasher::new();
    for p in points {
        h.write_u64(p.x.to_bits());
        h.write_u64(p.y.to_bits());
    }
    h.finish()
}

/// Fingerprint over a flat scalar list (lines, ellipses).
pub fn fingerprint_scalars(values: &[f64]) -> u64 {
    let mut h = DefaultHasher::new();
    for v in values {
        h.write_u64(v.to_bits());
    }
    h.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn memo_hits_while_fingerprint_stable() {
        let memo: Memo<i32> = Memo::new();
        let mut calls = 0;
        let a = memo.get_or_compute(1, || {
            calls += 1;
            42
        });
        let b = memo.get_or_compute(1, || {
            calls += 1;
            99
        });
        assert_eq!((a, b, calls), (42, 42, 1));
    }

    #[test]
    fn memo_recomputes_on_fingerprint_change() {
        let memo: Memo<i32> = Memo::new();
        let a = memo.get_or_compute(1, || 1);
        let b = memo.get_or_compute(2, || 2);
        assert_eq!((a, b), (1, 2));
    }

    #[test]
    fn fingerprint_tracks_coordinate_bits() {
        let p = vec![vector![1.0, 2.0], vector![3.0, 4.0]];
        let mut q = p.clone();
        assert_eq!(fingerprint(&p), fingerprint(&q));
        q[1].y = 4.000000001;
        assert_ne!(fingerprint(&p), fingerprint(&q));
    }
}
