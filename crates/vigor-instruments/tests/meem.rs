use vigor_core::models::classification::CognitiveClass;
use vigor_core::models::measurements::{MeemInput, MeemSection};
use vigor_core::models::patient::EducationLevel;
use vigor_instruments::protocols::meem::{classify, score};

/// Sections filled left to right up to `total`.
fn sections_totalling(total: u8) -> MeemInput {
    let mut remaining = total;
    MeemSection::ALL
        .into_iter()
        .fold(MeemInput::default(), |acc, s| {
            let take = remaining.min(s.max());
            remaining -= take;
            acc.with_section(s, take)
        })
}

#[test]
fn illiterate_boundary() {
    let at = score(&sections_totalling(20), Some(EducationLevel::Illiterate)).unwrap();
    assert_eq!(at.cutoff, 20.0);
    assert_eq!(at.classification, CognitiveClass::NoDecline);

    let below = score(&sections_totalling(19), Some(EducationLevel::Illiterate)).unwrap();
    assert_eq!(below.classification, CognitiveClass::MildDecline);

    let further = score(&sections_totalling(18), Some(EducationLevel::Illiterate)).unwrap();
    assert_eq!(further.classification, CognitiveClass::ModerateDecline);
}

#[test]
fn below_high_cutoff_is_mild_decline() {
    let outcome = score(&sections_totalling(28), Some(EducationLevel::Years12Plus)).unwrap();
    assert_eq!(outcome.total_score, 28);
    assert_eq!(outcome.classification, CognitiveClass::MildDecline);
}

#[test]
fn fractional_cutoff_for_five_to_eight_years() {
    assert_eq!(classify(26, 26.5), CognitiveClass::MildDecline);
    assert_eq!(classify(27, 26.5), CognitiveClass::NoDecline);
}

#[test]
fn decline_tiers_below_cutoff() {
    assert_eq!(classify(20, 25.0), CognitiveClass::MildDecline);
    assert_eq!(classify(19, 25.0), CognitiveClass::ModerateDecline);
    assert_eq!(classify(10, 25.0), CognitiveClass::ModerateDecline);
    assert_eq!(classify(9, 25.0), CognitiveClass::SevereDecline);
    assert_eq!(classify(0, 25.0), CognitiveClass::SevereDecline);
}

#[test]
fn missing_education_is_incomplete() {
    let err = score(&sections_totalling(30), None).unwrap_err();
    assert!(err.is_incomplete());
}
