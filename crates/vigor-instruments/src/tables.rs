//! Reference tables: age/sex-banded normal ranges and fixed cutoffs.
//!
//! Age bands are `<65, 65–69, 70–74, 75–79, 80–84, 85–89, ≥90` for every
//! banded protocol. Within one sex the bands are contiguous and
//! non-overlapping, so every age matches exactly one row.

use vigor_core::models::patient::{EducationLevel, Sex};
use vigor_core::models::protocol::ProtocolId;
use vigor_core::models::result::ReferenceRange;

use crate::error::InstrumentError;

/// One reference row. `age_max` is exclusive; the last row per sex is
/// unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBand {
    pub sex: Sex,
    pub age_min: u32,
    pub age_max: Option<u32>,
    pub lower: f64,
    pub upper: f64,
}

impl AgeBand {
    pub fn matches(&self, age: u32, sex: Sex) -> bool {
        self.sex == sex && age >= self.age_min && self.age_max.is_none_or(|max| age < max)
    }

    pub fn range(&self) -> ReferenceRange {
        ReferenceRange {
            min: self.lower,
            max: self.upper,
        }
    }
}

const CUT_POINTS: [u32; 6] = [65, 70, 75, 80, 85, 90];

/// Expand seven per-band `(lower, upper)` pairs into rows for one sex.
const fn bands(sex: Sex, values: [(f64, f64); 7]) -> [AgeBand; 7] {
    let mut rows = [AgeBand {
        sex,
        age_min: 0,
        age_max: None,
        lower: 0.0,
        upper: 0.0,
    }; 7];
    let mut i = 0;
    while i < 7 {
        rows[i].age_min = if i == 0 { 0 } else { CUT_POINTS[i - 1] };
        rows[i].age_max = if i < 6 { Some(CUT_POINTS[i]) } else { None };
        rows[i].lower = values[i].0;
        rows[i].upper = values[i].1;
        i += 1;
    }
    rows
}

/// A protocol's banded table, both sexes.
#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    pub protocol: ProtocolId,
    pub female: [AgeBand; 7],
    pub male: [AgeBand; 7],
}

impl BandTable {
    pub fn rows(&self) -> impl Iterator<Item = &AgeBand> {
        self.female.iter().chain(self.male.iter())
    }

    pub fn lookup(&self, age: u32, sex: Sex) -> Result<ReferenceRange, InstrumentError> {
        self.rows()
            .find(|band| band.matches(age, sex))
            .map(AgeBand::range)
            .ok_or(InstrumentError::MissingReferenceBand {
                protocol: self.protocol,
                age,
                sex,
            })
    }
}

/// 30-second chair stand, repetitions.
pub static CHAIR_STAND: BandTable = BandTable {
    protocol: ProtocolId::ChairStand,
    female: bands(
        Sex::Female,
        [
            (12.0, 17.0),
            (11.0, 16.0),
            (10.0, 15.0),
            (10.0, 15.0),
            (9.0, 14.0),
            (8.0, 13.0),
            (4.0, 11.0),
        ],
    ),
    male: bands(
        Sex::Male,
        [
            (14.0, 19.0),
            (12.0, 18.0),
            (12.0, 17.0),
            (11.0, 17.0),
            (10.0, 15.0),
            (8.0, 14.0),
            (7.0, 12.0),
        ],
    ),
};

/// 30-second arm curl, repetitions.
pub static ARM_CURL: BandTable = BandTable {
    protocol: ProtocolId::ArmCurl,
    female: bands(
        Sex::Female,
        [
            (13.0, 19.0),
            (12.0, 18.0),
            (12.0, 17.0),
            (11.0, 17.0),
            (10.0, 16.0),
            (10.0, 15.0),
            (8.0, 13.0),
        ],
    ),
    male: bands(
        Sex::Male,
        [
            (16.0, 22.0),
            (15.0, 21.0),
            (14.0, 21.0),
            (13.0, 19.0),
            (13.0, 19.0),
            (11.0, 17.0),
            (10.0, 14.0),
        ],
    ),
};

/// Chair sit-and-reach, centimetres relative to the toe.
pub static SIT_AND_REACH: BandTable = BandTable {
    protocol: ProtocolId::SitAndReach,
    female: bands(
        Sex::Female,
        [
            (-1.0, 12.5),
            (-1.0, 11.5),
            (-2.5, 10.0),
            (-4.0, 9.0),
            (-5.0, 7.5),
            (-6.5, 6.5),
            (-11.5, 2.5),
        ],
    ),
    male: bands(
        Sex::Male,
        [
            (-6.5, 10.0),
            (-7.5, 7.5),
            (-7.5, 7.5),
            (-10.0, 5.0),
            (-14.0, 4.0),
            (-14.0, 1.0),
            (-16.5, -1.5),
        ],
    ),
};

/// Fried grip-strength cutoff in kg, by sex and BMI band.
pub fn grip_strength_cutoff(sex: Sex, bmi: f64) -> f64 {
    match sex {
        Sex::Male => match bmi {
            b if b <= 24.0 => 29.0,
            b if b <= 28.0 => 30.0,
            _ => 32.0,
        },
        Sex::Female => match bmi {
            b if b <= 23.0 => 17.0,
            b if b <= 26.0 => 17.3,
            b if b <= 29.0 => 18.0,
            _ => 21.0,
        },
    }
}

/// Fried gait-speed cutoff in seconds, by sex and height.
pub fn gait_speed_cutoff(sex: Sex, height_meters: f64) -> f64 {
    let short = match sex {
        Sex::Male => height_meters <= 1.73,
        Sex::Female => height_meters <= 1.59,
    };
    if short { 7.0 } else { 6.0 }
}

/// MEEM "no decline" cutoff by schooling.
pub fn meem_cutoff(education: EducationLevel) -> f64 {
    match education {
        EducationLevel::Illiterate => 20.0,
        EducationLevel::Years1To4 => 25.0,
        EducationLevel::Years5To8 => 26.5,
        EducationLevel::Years9To11 => 28.0,
        EducationLevel::Years12Plus => 29.0,
    }
}
