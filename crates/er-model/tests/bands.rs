//! Partition properties for the derived classifications.

use proptest::prelude::*;

use er_model::{AgeBand, CsatSegment, WaitBand, is_breach};

proptest! {
    #[test]
    fn age_bands_partition_valid_ages(age in 0u8..=79) {
        let band = AgeBand::from_age(age).expect("age in range");
        let index = AgeBand::ALL.iter().position(|b| *b == band).expect("band listed");
        let lower = (index as u8) * 10;
        prop_assert!(age >= lower && age < lower + 10);
    }

    #[test]
    fn ages_above_range_have_no_band(age in 80u8..) {
        prop_assert_eq!(AgeBand::from_age(age), None);
    }

    #[test]
    fn wait_bands_are_exhaustive(wait in any::<u32>()) {
        let (lower, upper) = match WaitBand::from_minutes(wait) {
            WaitBand::Under15 => (0, 14),
            WaitBand::Min15To29 => (15, 29),
            WaitBand::Min30To44 => (30, 44),
            WaitBand::Min45To59 => (45, 59),
            WaitBand::Over60 => (60, u32::MAX),
        };
        prop_assert!(wait >= lower && wait <= upper);
    }

    #[test]
    fn breach_implies_top_wait_band(wait in any::<u32>()) {
        if is_breach(wait) {
            prop_assert_eq!(WaitBand::from_minutes(wait), WaitBand::Over60);
        }
    }

    #[test]
    fn csat_segments_partition_scale(score in 0u8..=10) {
        let segment = CsatSegment::from_score(score).expect("score in range");
        let expected = if score <= 4 {
            CsatSegment::Detractor
        } else if score <= 8 {
            CsatSegment::Passive
        } else {
            CsatSegment::Promoter
        };
        prop_assert_eq!(segment, expected);
    }

    #[test]
    fn scores_above_scale_have_no_segment(score in 11u8..) {
        prop_assert_eq!(CsatSegment::from_score(score), None);
    }
}
