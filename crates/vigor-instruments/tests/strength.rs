use vigor_core::models::classification::{Classification, FitnessClass};
use vigor_core::models::measurements::RepetitionInput;
use vigor_core::models::patient::{PatientProfile, Sex};
use vigor_core::models::result::ReferenceRange;
use vigor_instruments::protocols::strength::{classify, score};
use vigor_instruments::tables::{ARM_CURL, CHAIR_STAND};

fn reps(n: u32) -> RepetitionInput {
    RepetitionInput {
        repetitions: Some(n),
    }
}

#[test]
fn five_tier_rule_around_range() {
    let range = ReferenceRange {
        min: 12.0,
        max: 17.0,
    };
    assert_eq!(classify(9, range), FitnessClass::Poor);
    assert_eq!(classify(10, range), FitnessClass::Fair);
    assert_eq!(classify(11, range), FitnessClass::Fair);
    assert_eq!(classify(12, range), FitnessClass::Good);
    assert_eq!(classify(17, range), FitnessClass::Good);
    assert_eq!(classify(18, range), FitnessClass::VeryGood);
    assert_eq!(classify(20, range), FitnessClass::VeryGood);
    assert_eq!(classify(21, range), FitnessClass::Excellent);
}

#[test]
fn chair_stand_uses_age_and_sex_band() {
    let woman = PatientProfile::new(67, Sex::Female, 1.60, 24.0);
    let outcome = score(&CHAIR_STAND, &reps(11), &woman).unwrap();
    assert_eq!(outcome.reference, ReferenceRange { min: 11.0, max: 16.0 });
    assert_eq!(outcome.classification, FitnessClass::Good);

    let man = PatientProfile::new(67, Sex::Male, 1.75, 24.0);
    let outcome = score(&CHAIR_STAND, &reps(11), &man).unwrap();
    assert_eq!(outcome.reference, ReferenceRange { min: 12.0, max: 18.0 });
    assert_eq!(outcome.classification, FitnessClass::Fair);
}

#[test]
fn arm_curl_oldest_band_is_unbounded() {
    let man = PatientProfile::new(104, Sex::Male, 1.70, 22.0);
    let outcome = score(&ARM_CURL, &reps(18), &man).unwrap();
    assert_eq!(outcome.reference, ReferenceRange { min: 10.0, max: 14.0 });
    assert_eq!(outcome.classification, FitnessClass::Excellent);
}

#[test]
fn missing_repetitions_is_incomplete() {
    let profile = PatientProfile::new(70, Sex::Female, 1.60, 24.0);
    let err = score(&ARM_CURL, &RepetitionInput::default(), &profile).unwrap_err();
    assert!(err.is_incomplete());
}

#[test]
fn every_age_sex_and_count_lands_in_the_domain() {
    for table in [&CHAIR_STAND, &ARM_CURL] {
        for sex in [Sex::Male, Sex::Female] {
            for age in 0..=120 {
                let profile = PatientProfile::new(age, sex, 1.65, 25.0);
                for n in 0..=60 {
                    let outcome = score(table, &reps(n), &profile).unwrap();
                    assert!(FitnessClass::ALL.contains(&outcome.classification));
                }
            }
        }
    }
}
