//! Shift-of-day vocabulary and the flat schedule layout constants.
//!
//! A schedule is a flat sequence of bits, one per (staff member, day,
//! shift-of-day). Within one staff member the bits are day-major: day 0's
//! morning, afternoon and night bits, then day 1's, and so on.

use std::fmt;

/// Number of shifts in one day (morning, afternoon, night).
pub const SHIFTS_PER_DAY: usize = 3;

/// Number of days in one week.
pub const DAYS_PER_WEEK: usize = 7;

/// Number of shift slots in one week for a single staff member.
pub const SHIFTS_PER_WEEK: usize = DAYS_PER_WEEK * SHIFTS_PER_DAY;

/// One of the three daily work periods.
///
/// # Example
///
/// ```
/// use nurseforge_core::ShiftOfDay;
///
/// // Slot 5 of a staff member's chunk is day 1, night.
/// assert_eq!(ShiftOfDay::from_slot(5), ShiftOfDay::Night);
/// assert_eq!(ShiftOfDay::Afternoon.index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShiftOfDay {
    Morning,
    Afternoon,
    Night,
}

impl ShiftOfDay {
    /// All shifts in layout order.
    pub const ALL: [ShiftOfDay; SHIFTS_PER_DAY] =
        [ShiftOfDay::Morning, ShiftOfDay::Afternoon, ShiftOfDay::Night];

    /// Returns the position of this shift inside a day's 3-bit group.
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            ShiftOfDay::Morning => 0,
            ShiftOfDay::Afternoon => 1,
            ShiftOfDay::Night => 2,
        }
    }

    /// Returns the shift-of-day of a slot index (`slot mod 3`).
    #[inline]
    pub const fn from_slot(slot: usize) -> ShiftOfDay {
        Self::ALL[slot % SHIFTS_PER_DAY]
    }

    /// Returns a human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            ShiftOfDay::Morning => "morning",
            ShiftOfDay::Afternoon => "afternoon",
            ShiftOfDay::Night => "night",
        }
    }
}

impl fmt::Display for ShiftOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Calendar code summarizing one day of one staff member.
///
/// Derived from the day's (morning, afternoon, night) bits, checked in that
/// order: a morning shift together with a night shift is a double (`D`) and
/// wins over everything else, a morning shift alone is `M`, then afternoon
/// `T`, then night `N`, and no shift at all is a rest day `L`.
///
/// # Example
///
/// ```
/// use nurseforge_core::DayCode;
///
/// assert_eq!(DayCode::from_bits(&[1, 1, 1]), DayCode::Double);
/// assert_eq!(DayCode::from_bits(&[1, 1, 0]), DayCode::Morning);
/// assert_eq!(DayCode::from_bits(&[0, 1, 1]), DayCode::Afternoon);
/// assert_eq!(DayCode::from_bits(&[0, 0, 0]).code(), 'L');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCode {
    Morning,
    Afternoon,
    Night,
    Double,
    Rest,
}

impl DayCode {
    /// Classifies one day's 3-bit group.
    ///
    /// Missing trailing bits read as 0.
    pub fn from_bits(day: &[u8]) -> DayCode {
        let bit = |shift: ShiftOfDay| day.get(shift.index()).copied().unwrap_or(0) == 1;

        if bit(ShiftOfDay::Morning) {
            if bit(ShiftOfDay::Night) {
                DayCode::Double
            } else {
                DayCode::Morning
            }
        } else if bit(ShiftOfDay::Afternoon) {
            DayCode::Afternoon
        } else if bit(ShiftOfDay::Night) {
            DayCode::Night
        } else {
            DayCode::Rest
        }
    }

    /// Returns the single-letter calendar code.
    pub const fn code(&self) -> char {
        match self {
            DayCode::Morning => 'M',
            DayCode::Afternoon => 'T',
            DayCode::Night => 'N',
            DayCode::Double => 'D',
            DayCode::Rest => 'L',
        }
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
