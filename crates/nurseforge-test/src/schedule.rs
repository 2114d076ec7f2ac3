//! Schedule builder.
//!
//! Produces flat schedules in the staff-major, day-major, shift-minor layout
//! without index arithmetic in the tests.

use nurseforge_core::{ShiftOfDay, DAYS_PER_WEEK, SHIFTS_PER_DAY, SHIFTS_PER_WEEK};

/// Builds a flat 0/1 schedule for `staff_count` staff members over `weeks`
/// weeks.
///
/// # Example
///
/// ```
/// use nurseforge_core::ShiftOfDay;
/// use nurseforge_test::ScheduleBuilder;
///
/// let schedule = ScheduleBuilder::new(2, 1)
///     .assign(1, 0, ShiftOfDay::Night)
///     .build();
///
/// assert_eq!(schedule.len(), 42);
/// assert_eq!(schedule[21 + 2], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleBuilder {
    staff_count: usize,
    weeks: usize,
    bits: Vec<u8>,
}

impl ScheduleBuilder {
    /// Creates an all-zero schedule.
    pub fn new(staff_count: usize, weeks: usize) -> Self {
        Self {
            staff_count,
            weeks,
            bits: vec![0; staff_count * SHIFTS_PER_WEEK * weeks],
        }
    }

    /// Returns the number of slots per staff member.
    pub fn slots_per_staff(&self) -> usize {
        SHIFTS_PER_WEEK * self.weeks
    }

    /// Returns the number of days.
    pub fn days(&self) -> usize {
        DAYS_PER_WEEK * self.weeks
    }

    /// Returns the flat index of a (staff, day, shift) slot.
    ///
    /// # Panics
    ///
    /// Panics if the staff member or day is out of range.
    pub fn index_of(&self, staff: usize, day: usize, shift: ShiftOfDay) -> usize {
        assert!(staff < self.staff_count, "staff {} out of range", staff);
        assert!(day < self.days(), "day {} out of range", day);
        staff * self.slots_per_staff() + day * SHIFTS_PER_DAY + shift.index()
    }

    /// Sets one slot to 1.
    pub fn assign(mut self, staff: usize, day: usize, shift: ShiftOfDay) -> Self {
        let index = self.index_of(staff, day, shift);
        self.bits[index] = 1;
        self
    }

    /// Writes a 3-bit pattern into one day.
    pub fn set_day(mut self, staff: usize, day: usize, pattern: [u8; 3]) -> Self {
        let start = self.index_of(staff, day, ShiftOfDay::Morning);
        self.bits[start..start + SHIFTS_PER_DAY].copy_from_slice(&pattern);
        self
    }

    /// Writes the same 3-bit pattern into every day of one staff member.
    pub fn every_day(self, staff: usize, pattern: [u8; 3]) -> Self {
        (0..self.days()).fold(self, |builder, day| builder.set_day(staff, day, pattern))
    }

    /// Assigns one shift to every staff member on every day.
    pub fn everyone(self, shift: ShiftOfDay) -> Self {
        let mut pattern = [0; 3];
        pattern[shift.index()] = 1;
        (0..self.staff_count).fold(self, |builder, staff| builder.every_day(staff, pattern))
    }

    /// Returns the flat schedule.
    pub fn build(self) -> Vec<u8> {
        self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_day_pattern() {
        let schedule = ScheduleBuilder::new(1, 1).every_day(0, [1, 0, 0]).build();
        assert_eq!(schedule, [1, 0, 0].repeat(7));
    }

    #[test]
    fn test_second_week_offsets() {
        let builder = ScheduleBuilder::new(2, 2);
        assert_eq!(builder.index_of(0, 7, ShiftOfDay::Morning), 21);
        assert_eq!(builder.index_of(1, 13, ShiftOfDay::Night), 42 + 41);
    }

    #[test]
    fn test_everyone() {
        let schedule = ScheduleBuilder::new(3, 1)
            .everyone(ShiftOfDay::Afternoon)
            .build();
        assert_eq!(schedule.iter().filter(|&&bit| bit == 1).count(), 21);
        assert_eq!(schedule[1], 1);
        assert_eq!(schedule[21 + 4], 1);
    }

    #[test]
    #[should_panic(expected = "day 7 out of range")]
    fn test_day_out_of_range() {
        ScheduleBuilder::new(1, 1).assign(0, 7, ShiftOfDay::Morning);
    }
}
