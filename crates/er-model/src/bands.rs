//! Derived classifications over encounter fields.
//!
//! Each classification partitions its input domain exhaustively and without
//! overlap: every valid age falls in exactly one [`AgeBand`], every wait
//! time in exactly one [`WaitBand`], every satisfaction score in exactly
//! one [`CsatSegment`].

use serde::{Deserialize, Serialize};

/// Highest age present in the dataset.
pub const MAX_AGE: u8 = 79;

/// Highest satisfaction score on the survey scale.
pub const MAX_SATISFACTION: u8 = 10;

/// Wait minutes above which an encounter counts as a breach.
pub const BREACH_THRESHOLD_MIN: u32 = 60;

/// Whether a wait time exceeds the breach threshold.
pub fn is_breach(wait_minutes: u32) -> bool {
    wait_minutes > BREACH_THRESHOLD_MIN
}

/// Ten-year age band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBand {
    Age0To9,
    Age10To19,
    Age20To29,
    Age30To39,
    Age40To49,
    Age50To59,
    Age60To69,
    Age70To79,
}

impl AgeBand {
    pub const ALL: [AgeBand; 8] = [
        AgeBand::Age0To9,
        AgeBand::Age10To19,
        AgeBand::Age20To29,
        AgeBand::Age30To39,
        AgeBand::Age40To49,
        AgeBand::Age50To59,
        AgeBand::Age60To69,
        AgeBand::Age70To79,
    ];

    /// Band for an age, or `None` when the age is outside 0-79.
    pub fn from_age(age: u8) -> Option<Self> {
        let band = match age {
            0..=9 => AgeBand::Age0To9,
            10..=19 => AgeBand::Age10To19,
            20..=29 => AgeBand::Age20To29,
            30..=39 => AgeBand::Age30To39,
            40..=49 => AgeBand::Age40To49,
            50..=59 => AgeBand::Age50To59,
            60..=69 => AgeBand::Age60To69,
            70..=79 => AgeBand::Age70To79,
            _ => return None,
        };
        Some(band)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::Age0To9 => "0-9",
            AgeBand::Age10To19 => "10-19",
            AgeBand::Age20To29 => "20-29",
            AgeBand::Age30To39 => "30-39",
            AgeBand::Age40To49 => "40-49",
            AgeBand::Age50To59 => "50-59",
            AgeBand::Age60To69 => "60-69",
            AgeBand::Age70To79 => "70-79",
        }
    }
}

/// Wait-time band in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WaitBand {
    Under15,
    Min15To29,
    Min30To44,
    Min45To59,
    Over60,
}

impl WaitBand {
    pub const ALL: [WaitBand; 5] = [
        WaitBand::Under15,
        WaitBand::Min15To29,
        WaitBand::Min30To44,
        WaitBand::Min45To59,
        WaitBand::Over60,
    ];

    /// Band for a wait time. Total over all non-negative minutes.
    pub fn from_minutes(wait_minutes: u32) -> Self {
        match wait_minutes {
            0..=14 => WaitBand::Under15,
            15..=29 => WaitBand::Min15To29,
            30..=44 => WaitBand::Min30To44,
            45..=59 => WaitBand::Min45To59,
            _ => WaitBand::Over60,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WaitBand::Under15 => "0-14",
            WaitBand::Min15To29 => "15-29",
            WaitBand::Min30To44 => "30-44",
            WaitBand::Min45To59 => "45-59",
            WaitBand::Over60 => "60+",
        }
    }
}

/// Satisfaction segment over the 0-10 survey scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CsatSegment {
    /// Score 0-4.
    Detractor,
    /// Score 5-8.
    Passive,
    /// Score 9-10.
    Promoter,
}

impl CsatSegment {
    pub const ALL: [CsatSegment; 3] = [
        CsatSegment::Detractor,
        CsatSegment::Passive,
        CsatSegment::Promoter,
    ];

    /// Segment for a score, or `None` when the score is outside 0-10.
    pub fn from_score(score: u8) -> Option<Self> {
        let segment = match score {
            0..=4 => CsatSegment::Detractor,
            5..=8 => CsatSegment::Passive,
            9..=10 => CsatSegment::Promoter,
            _ => return None,
        };
        Some(segment)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CsatSegment::Detractor => "Detractor",
            CsatSegment::Passive => "Passive",
            CsatSegment::Promoter => "Promoter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_band_boundaries() {
        assert_eq!(AgeBand::from_age(0), Some(AgeBand::Age0To9));
        assert_eq!(AgeBand::from_age(9), Some(AgeBand::Age0To9));
        assert_eq!(AgeBand::from_age(10), Some(AgeBand::Age10To19));
        assert_eq!(AgeBand::from_age(79), Some(AgeBand::Age70To79));
        assert_eq!(AgeBand::from_age(80), None);
    }

    #[test]
    fn wait_band_boundaries() {
        assert_eq!(WaitBand::from_minutes(0), WaitBand::Under15);
        assert_eq!(WaitBand::from_minutes(14), WaitBand::Under15);
        assert_eq!(WaitBand::from_minutes(15), WaitBand::Min15To29);
        assert_eq!(WaitBand::from_minutes(59), WaitBand::Min45To59);
        assert_eq!(WaitBand::from_minutes(60), WaitBand::Over60);
        assert_eq!(WaitBand::from_minutes(240), WaitBand::Over60);
    }

    #[test]
    fn breach_is_strictly_above_threshold() {
        assert!(!is_breach(59));
        assert!(!is_breach(60));
        assert!(is_breach(61));
    }

    #[test]
    fn csat_segment_boundaries() {
        assert_eq!(CsatSegment::from_score(0), Some(CsatSegment::Detractor));
        assert_eq!(CsatSegment::from_score(4), Some(CsatSegment::Detractor));
        assert_eq!(CsatSegment::from_score(5), Some(CsatSegment::Passive));
        assert_eq!(CsatSegment::from_score(8), Some(CsatSegment::Passive));
        assert_eq!(CsatSegment::from_score(9), Some(CsatSegment::Promoter));
        assert_eq!(CsatSegment::from_score(10), Some(CsatSegment::Promoter));
        assert_eq!(CsatSegment::from_score(11), None);
    }
}
