use std::iter::FusedIterator;

/// Gap between the first and the second reminder of a window.
/// Every following gap is twice as long as the one before it.
pub const FIRST_GAP_MINUTES: u32 = 30;

/// Lazily generates the minute offsets at which reminders fire inside
/// a window: `start`, `start + 30`, `start + 30 + 60`, `start + 30 + 60 + 120` ...
/// for as long as the offset does not pass `end`.
///
/// The generator is a pure function of its bounds, clone it to iterate
/// the same series again. An `end` below `start` yields nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderOffsets {
    next: Option<u32>,
    gap: u32,
    end: u32,
}

impl ReminderOffsets {
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            next: if start <= end { Some(start) } else { None },
            gap: FIRST_GAP_MINUTES,
            end,
        }
    }
}

impl Iterator for ReminderOffsets {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|offset| *offset <= self.end)?;
        self.next = current.checked_add(self.gap);
        self.gap = self.gap.saturating_mul(2);
        Some(current)
    }
}

impl FusedIterator for ReminderOffsets {}
