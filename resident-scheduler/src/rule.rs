use std::fmt::Display;
use std::fmt::Formatter;

/// The seven scheduling rules which every produced schedule satisfies.
///
/// The identifiers are shared between the encoders, which label the constraints they emit with
/// the rule they enforce, and the verifier, which reports violations per rule. The two sides
/// share nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    /// At least `min_on_duty` residents work every hour.
    Coverage,
    /// After a shift ends, the resident rests for at least `min_rest_hours`.
    MinRest,
    /// No working run is longer than `max_consecutive_hours`.
    MaxConsecutive,
    /// No resident works more than `max_weekly_hours` within a week window.
    MaxWeekly,
    /// Every resident works at least `min_teaching_hours` of the teaching hours.
    MinTeaching,
    /// No working run is shorter than `min_shift_length`.
    MinShiftLength,
    /// Every week window of at least a day holds `min_days_off_per_week` disjoint days off.
    MinDaysOff,
}

impl Rule {
    /// Every rule, in the order in which they are encoded and reported.
    pub const ALL: [Rule; 7] = [
        Rule::Coverage,
        Rule::MinRest,
        Rule::MaxConsecutive,
        Rule::MaxWeekly,
        Rule::MinTeaching,
        Rule::MinShiftLength,
        Rule::MinDaysOff,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Coverage => "coverage",
            Rule::MinRest => "min-rest",
            Rule::MaxConsecutive => "max-consecutive",
            Rule::MaxWeekly => "max-weekly",
            Rule::MinTeaching => "min-teaching",
            Rule::MinShiftLength => "min-shift-length",
            Rule::MinDaysOff => "min-days-off",
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
