use vigor_core::models::classification::FlexibilityClass;
use vigor_core::models::measurements::SitAndReachInput;
use vigor_core::models::patient::{PatientProfile, Sex};
use vigor_core::models::result::ReferenceRange;
use vigor_instruments::protocols::sit_and_reach::{classify, score};

#[test]
fn midpoint_splits_normal_range() {
    let range = ReferenceRange {
        min: -2.0,
        max: 8.0,
    };
    assert_eq!(classify(-2.5, range), FlexibilityClass::Poor);
    assert_eq!(classify(-2.0, range), FlexibilityClass::Fair);
    assert_eq!(classify(3.0, range), FlexibilityClass::Fair);
    assert_eq!(classify(3.1, range), FlexibilityClass::Good);
    assert_eq!(classify(8.0, range), FlexibilityClass::Good);
    assert_eq!(classify(8.5, range), FlexibilityClass::VeryGood);
}

#[test]
fn negative_distances_are_scored() {
    let man = PatientProfile::new(92, Sex::Male, 1.68, 23.0);
    let outcome = score(
        &SitAndReachInput {
            distance_cm: Some(-10.0),
        },
        &man,
    )
    .unwrap();
    assert_eq!(outcome.reference, ReferenceRange { min: -16.5, max: -1.5 });
    assert_eq!(outcome.classification, FlexibilityClass::Fair);
}

#[test]
fn missing_distance_is_incomplete() {
    let woman = PatientProfile::new(70, Sex::Female, 1.58, 27.0);
    assert!(
        score(&SitAndReachInput::default(), &woman)
            .unwrap_err()
            .is_incomplete()
    );
}

#[test]
fn every_age_and_sex_has_a_band() {
    for sex in [Sex::Male, Sex::Female] {
        for age in 0..=120 {
            let profile = PatientProfile::new(age, sex, 1.65, 25.0);
            let input = SitAndReachInput {
                distance_cm: Some(0.0),
            };
            assert!(score(&input, &profile).is_ok());
        }
    }
}

#[test]
fn infinite_distance_is_incomplete() {
    let woman = PatientProfile::new(70, Sex::Female, 1.58, 27.0);
    for d in [f64::INFINITY, f64::NEG_INFINITY] {
        let input = SitAndReachInput {
            distance_cm: Some(d),
        };
        assert!(score(&input, &woman).unwrap_err().is_incomplete());
    }
}
