//! Flat schedule decoding.
//!
//! The flat schedule is staff-major: staff member 0 owns bits
//! `0..slots_per_staff`, staff member 1 the next `slots_per_staff` bits, and
//! so on in roster order. Decoding never copies bits; every view borrows
//! its chunk of the caller's slice.

use nurseforge_core::{DayCode, NurseForgeError, Result, SHIFTS_PER_DAY, SHIFTS_PER_WEEK};
use tracing::debug;

use crate::model::ScheduleModel;

/// One staff member's contiguous chunk of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffShifts<'a> {
    /// Roster position of the staff member.
    pub index: usize,
    /// Staff identifier.
    pub staff_id: &'a str,
    /// The chunk: `7 * weeks` days of 3 bits each.
    pub shifts: &'a [u8],
}

impl<'a> StaffShifts<'a> {
    /// Iterates the 3-bit (morning, afternoon, night) group of each day.
    pub fn days(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.shifts.chunks_exact(SHIFTS_PER_DAY)
    }

    /// Iterates the 21-bit group of each week.
    pub fn weeks(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.shifts.chunks_exact(SHIFTS_PER_WEEK)
    }

    /// Iterates the calendar code of each day.
    pub fn day_codes(&self) -> impl Iterator<Item = DayCode> + 'a {
        self.days().map(DayCode::from_bits)
    }

    /// Returns the sum of the chunk's bits.
    pub fn assigned(&self) -> u64 {
        self.shifts.iter().map(|&bit| u64::from(bit)).sum()
    }
}

/// The per-staff-member view of one candidate schedule.
///
/// Views are kept in roster order; lookups by id scan that order instead of
/// relying on a hash map's iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSchedule<'a> {
    views: Vec<StaffShifts<'a>>,
    slots_per_staff: usize,
}

impl<'a> DecodedSchedule<'a> {
    /// Iterates the staff views in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, StaffShifts<'a>> {
        self.views.iter()
    }

    /// Returns the view of a staff member by identifier.
    pub fn get(&self, staff_id: &str) -> Option<&StaffShifts<'a>> {
        self.views.iter().find(|view| view.staff_id == staff_id)
    }

    /// Returns the view at a roster position.
    pub fn get_index(&self, index: usize) -> Option<&StaffShifts<'a>> {
        self.views.get(index)
    }

    /// Returns the number of staff members.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns true if there are no staff views.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Returns the number of bits in each chunk.
    pub fn slots_per_staff(&self) -> usize {
        self.slots_per_staff
    }

    /// Concatenates the chunks in roster order, reproducing the input.
    pub fn to_flat(&self) -> Vec<u8> {
        let mut flat = Vec::with_capacity(self.views.len() * self.slots_per_staff);
        for view in &self.views {
            flat.extend_from_slice(view.shifts);
        }
        flat
    }
}

impl<'s, 'a> IntoIterator for &'s DecodedSchedule<'a> {
    type Item = &'s StaffShifts<'a>;
    type IntoIter = std::slice::Iter<'s, StaffShifts<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.views.iter()
    }
}

impl ScheduleModel {
    /// Slices a flat schedule into one chunk per staff member.
    ///
    /// # Errors
    ///
    /// Returns [`NurseForgeError::Validation`] if the schedule length is not
    /// exactly [`total_length`](ScheduleModel::total_length). Bit values are
    /// not checked; anything other than 0/1 flows into the counters as is.
    pub fn decode<'a>(&'a self, schedule: &'a [u8]) -> Result<DecodedSchedule<'a>> {
        let expected = self.total_length();
        if schedule.len() != expected {
            debug!(
                event = "schedule_rejected",
                expected = expected,
                actual = schedule.len(),
            );
            return Err(NurseForgeError::Validation {
                expected,
                actual: schedule.len(),
            });
        }

        let slots_per_staff = self.slots_per_staff();
        let views = self
            .staff()
            .iter()
            .zip(schedule.chunks_exact(slots_per_staff))
            .enumerate()
            .map(|(index, (staff_id, shifts))| StaffShifts {
                index,
                staff_id: staff_id.as_str(),
                shifts,
            })
            .collect();

        Ok(DecodedSchedule {
            views,
            slots_per_staff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ScheduleModel {
        ScheduleModel::new(["ana", "luis"], vec![[1, 0, 0], [0, 0, 1]]).unwrap()
    }

    #[test]
    fn test_decode_slices_in_roster_order() {
        let model = model();
        let mut schedule = vec![0u8; 42];
        schedule[0] = 1;
        schedule[21 + 2] = 1;

        let decoded = model.decode(&schedule).unwrap();
        assert_eq!(decoded.len(), 2);

        let ana = decoded.get("ana").unwrap();
        assert_eq!(ana.index, 0);
        assert_eq!(ana.shifts.len(), 21);
        assert_eq!(ana.shifts[0], 1);

        let luis = decoded.get_index(1).unwrap();
        assert_eq!(luis.staff_id, "luis");
        assert_eq!(luis.shifts[2], 1);
        assert!(decoded.get("marta").is_none());
    }

    #[test]
    fn test_decode_is_left_inverse_of_layout() {
        let model = model();
        let schedule: Vec<u8> = (0..42).map(|i| (i % 5 == 0) as u8).collect();

        let decoded = model.decode(&schedule).unwrap();
        assert_eq!(decoded.to_flat(), schedule);
    }

    #[test]
    fn test_decode_rejects_short_schedule() {
        let model = model();
        let schedule = vec![0u8; 41];

        assert_eq!(
            model.decode(&schedule).unwrap_err(),
            NurseForgeError::Validation {
                expected: 42,
                actual: 41
            }
        );
    }

    #[test]
    fn test_decode_rejects_long_schedule() {
        let model = model();
        assert!(model.decode(&[0u8; 43]).is_err());
        assert!(model.decode(&[]).is_err());
    }

    #[test]
    fn test_day_and_week_groups() {
        let model = model();
        let mut schedule = vec![0u8; 42];
        schedule[3] = 1;
        schedule[5] = 1;

        let decoded = model.decode(&schedule).unwrap();
        let ana = decoded.get("ana").unwrap();

        assert_eq!(ana.days().count(), 7);
        assert_eq!(ana.weeks().count(), 1);
        assert_eq!(ana.days().nth(1).unwrap(), &[1, 0, 1]);
        assert_eq!(ana.day_codes().nth(1), Some(DayCode::Double));
        assert_eq!(ana.assigned(), 2);
    }

    #[test]
    fn test_non_binary_values_pass_through() {
        let model = model();
        let mut schedule = vec![0u8; 42];
        schedule[0] = 7;

        let decoded = model.decode(&schedule).unwrap();
        assert_eq!(decoded.get("ana").unwrap().assigned(), 7);
    }
}
