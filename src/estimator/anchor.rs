//! Shared anchor position slot
//!
//! The anchor is written by the input-dispatch thread and read by the render
//! thread with no coordination between them. A plain shared field would let
//! the reader observe a half-written vector, so the slot publishes through a
//! sequence counter: readers retry the rare read that overlaps a write and
//! otherwise never block.

use crate::core::{initial_anchor_position, Vec3};
use std::sync::atomic::{AtomicU32, Ordering};

/// Lock-free slot holding the latest anchor position estimate
///
/// Single logical writer (the update routine), any number of readers.
pub struct AnchorSlot {
    /// Odd while a write is in progress, even when the slot is stable
    sequence: AtomicU32,
    coords: [AtomicU32; 3],
}

impl AnchorSlot {
    /// Create a slot holding the given position
    pub fn new(position: Vec3) -> Self {
        let slot = Self {
            sequence: AtomicU32::new(0),
            coords: [AtomicU32::new(0), AtomicU32::new(0), AtomicU32::new(0)],
        };
        for (cell, component) in slot.coords.iter().zip(position.iter()) {
            cell.store(component.to_bits(), Ordering::Relaxed);
        }
        slot
    }

    /// Publish a new position estimate
    ///
    /// Must only be called from one thread at a time.
    pub fn store(&self, position: Vec3) {
        let sequence = self.sequence.fetch_add(1, Ordering::AcqRel) + 1;
        for (cell, component) in self.coords.iter().zip(position.iter()) {
            cell.store(component.to_bits(), Ordering::Release);
        }
        self.sequence.store(sequence + 1, Ordering::Release);
    }

    /// Read the latest published position
    ///
    /// Retries reads that overlap an in-progress write, so the result is
    /// never a torn vector.
    pub fn load(&self) -> Vec3 {
        loop {
            let before = self.sequence.load(Ordering::Acquire);
            if before & 1 != 0 {
                std::hint::spin_loop();
                continue;
            }

            let x = f32::from_bits(self.coords[0].load(Ordering::Acquire));
            let y = f32::from_bits(self.coords[1].load(Ordering::Acquire));
            let z = f32::from_bits(self.coords[2].load(Ordering::Acquire));

            if self.sequence.load(Ordering::Acquire) == before {
                return Vec3::new(x, y, z);
            }
        }
    }
}

impl Default for AnchorSlot {
    /// Slot holding the pre-update sentinel position
    fn default() -> Self {
        Self::new(initial_anchor_position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_default_holds_sentinel() {
        let slot = AnchorSlot::default();
        assert_eq!(slot.load(), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_store_then_load_round_trip() {
        let slot = AnchorSlot::new(Vec3::zeros());
        slot.store(Vec3::new(1.0, -2.5, 0.25));
        assert_eq!(slot.load(), Vec3::new(1.0, -2.5, 0.25));
    }

    #[test]
    fn test_latest_write_wins() {
        let slot = AnchorSlot::default();
        for i in 0..100 {
            slot.store(Vec3::new(i as f32, 0.0, 0.0));
        }
        assert_eq!(slot.load(), Vec3::new(99.0, 0.0, 0.0));
    }

    #[test]
    fn test_concurrent_reads_never_tear() {
        // The writer only ever publishes vectors of the form (v, v, v), so
        // any mixed-component read would be visible as unequal components.
        let slot = Arc::new(AnchorSlot::new(Vec3::zeros()));

        let writer_slot = Arc::clone(&slot);
        let writer = thread::spawn(move || {
            for i in 0..50_000u32 {
                let v = i as f32;
                writer_slot.store(Vec3::new(v, v, v));
            }
        });

        let readers: Vec<_> = (0..2)
            .map(|_| {
                let reader_slot = Arc::clone(&slot);
                thread::spawn(move || {
                    for _ in 0..50_000 {
                        let value = reader_slot.load();
                        assert_eq!(value.x, value.y);
                        assert_eq!(value.y, value.z);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
