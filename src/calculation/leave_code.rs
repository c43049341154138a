//! Leave-code normalization.
//!
//! Attendance cells carry free text (Thai phrases such as "ลาป่วยทั้งวัน")
//! or short codes ("1ก", "ป/ช", "S-AM"). This module maps them onto
//! [`LeaveCode`] through an ordered rule table.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::LeaveCode;

/// A single normalization rule: cells matching `pattern` become `code`.
#[derive(Debug, Clone)]
pub struct LeaveRule {
    pattern: Regex,
    code: LeaveCode,
}

impl LeaveRule {
    /// Creates a rule. The pattern is matched against the cell with all
    /// whitespace removed and lowercased.
    pub fn new(pattern: Regex, code: LeaveCode) -> Self {
        Self { pattern, code }
    }

    /// Returns the code this rule produces.
    pub fn code(&self) -> &LeaveCode {
        &self.code
    }

    /// Returns true if the rule applies to a prepared cell key.
    pub fn matches(&self, key: &str) -> bool {
        self.pattern.is_match(key)
    }
}

/// An ordered list of normalization rules; the first match wins.
#[derive(Debug, Clone)]
pub struct LeaveRules {
    rules: Vec<LeaveRule>,
}

// Half-day rules come before full-day ones: "ลาป่วยครึ่งวันเช้า" must not be
// read as a full sick day.
const STANDARD_RULES: &[(&str, LeaveCode)] = &[
    (
        r"ป่วย.*ครึ่ง.*เช้า|^(?:0?\.5|½)?ป[-/]?(?:ช|เช้า)$|^(?:0?\.5|½)?s[-/]?am$",
        LeaveCode::HalfDaySickMorning,
    ),
    (
        r"ป่วย.*ครึ่ง.*บ่าย|^(?:0?\.5|½)?ป[-/]?(?:บ|บ่าย)$|^(?:0?\.5|½)?s[-/]?pm$",
        LeaveCode::HalfDaySickAfternoon,
    ),
    (
        r"กิจ.*ครึ่ง.*เช้า|^(?:0?\.5|½)?ก[-/]?(?:ช|เช้า)$|^(?:0?\.5|½)?p[-/]?am$",
        LeaveCode::HalfDayPersonalMorning,
    ),
    (
        r"กิจ.*ครึ่ง.*บ่าย|^(?:0?\.5|½)?ก[-/]?(?:บ|บ่าย)$|^(?:0?\.5|½)?p[-/]?pm$",
        LeaveCode::HalfDayPersonalAfternoon,
    ),
    (
        r"^(?:ลา)?ป่วย(?:ทั้งวัน|เต็มวัน|1วัน)?$|^1?ป$|^ป1$|^1?s$|^sick(?:leave)?$",
        LeaveCode::FullDaySick,
    ),
    (
        r"^(?:ลา)?กิจ(?:ส่วนตัว)?(?:ทั้งวัน|เต็มวัน|1วัน)?$|^1?ก$|^ก1$|^1?p$|^personal(?:leave)?$",
        LeaveCode::FullDayPersonal,
    ),
    (r"ขาด|^ข$|^a$|^absent$", LeaveCode::Absent),
];

impl LeaveRules {
    /// Creates a rule list evaluated in the given order.
    pub fn new(rules: Vec<LeaveRule>) -> Self {
        Self { rules }
    }

    /// Returns the built-in rule list shared by every engine.
    pub fn standard() -> &'static LeaveRules {
        static RULES: OnceLock<LeaveRules> = OnceLock::new();
        RULES.get_or_init(|| {
            LeaveRules::new(
                STANDARD_RULES
                    .iter()
                    .map(|(pattern, code)| {
                        LeaveRule::new(
                            Regex::new(pattern).expect("invalid leave rule regex"),
                            code.clone(),
                        )
                    })
                    .collect(),
            )
        })
    }

    /// Returns the rules in priority order.
    pub fn rules(&self) -> &[LeaveRule] {
        &self.rules
    }

    /// Classifies a raw cell.
    ///
    /// Blank cells yield `None`. Otherwise the first matching rule decides;
    /// text no rule recognizes is returned as
    /// [`LeaveCode::Unrecognized`] holding the trimmed cell.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::calculation::LeaveRules;
    /// use timesheet_engine::models::LeaveCode;
    ///
    /// let rules = LeaveRules::standard();
    /// assert_eq!(rules.classify("ลาป่วยทั้งวัน"), Some(LeaveCode::FullDaySick));
    /// assert_eq!(rules.classify("1ก"), Some(LeaveCode::FullDayPersonal));
    /// assert_eq!(rules.classify(" ป / ช "), Some(LeaveCode::HalfDaySickMorning));
    /// assert_eq!(rules.classify("  "), None);
    /// ```
    pub fn classify(&self, raw: &str) -> Option<LeaveCode> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let key = rule_key(trimmed);
        let code = self
            .rules
            .iter()
            .find(|rule| rule.matches(&key))
            .map(|rule| rule.code.clone())
            .unwrap_or_else(|| LeaveCode::Unrecognized(trimmed.to_string()));
        Some(code)
    }
}

/// Classifies a raw cell with the standard rules.
pub fn normalize_leave_code(raw: &str) -> Option<LeaveCode> {
    LeaveRules::standard().classify(raw)
}

fn rule_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn code(raw: &str) -> Option<LeaveCode> {
        normalize_leave_code(raw)
    }

    #[test]
    fn test_full_day_sick_phrases() {
        for raw in ["ลาป่วยทั้งวัน", "ลาป่วย", "ป่วย", "ลาป่วย เต็มวัน", "ลาป่วย 1 วัน"] {
            assert_eq!(code(raw), Some(LeaveCode::FullDaySick), "{}", raw);
        }
    }

    #[test]
    fn test_full_day_sick_short_codes() {
        for raw in ["ป", "1ป", "ป1", "S", "1s", "Sick"] {
            assert_eq!(code(raw), Some(LeaveCode::FullDaySick), "{}", raw);
        }
    }

    #[test]
    fn test_full_day_personal_phrases_and_codes() {
        for raw in ["ลากิจทั้งวัน", "ลากิจ", "ลากิจส่วนตัว", "กิจ", "1ก", "ก", "ก1", "1P", "personal leave"] {
            assert_eq!(code(raw), Some(LeaveCode::FullDayPersonal), "{}", raw);
        }
    }

    #[test]
    fn test_half_day_sick_is_not_shadowed_by_full_day() {
        assert_eq!(code("ลาป่วยครึ่งวันเช้า"), Some(LeaveCode::HalfDaySickMorning));
        assert_eq!(code("ลาป่วยครึ่งวันบ่าย"), Some(LeaveCode::HalfDaySickAfternoon));
    }

    #[test]
    fn test_half_day_personal_phrases() {
        assert_eq!(code("ลากิจครึ่งวันเช้า"), Some(LeaveCode::HalfDayPersonalMorning));
        assert_eq!(code("ลากิจ ครึ่งวัน บ่าย"), Some(LeaveCode::HalfDayPersonalAfternoon));
    }

    #[test]
    fn test_half_day_short_codes() {
        assert_eq!(code("ป/ช"), Some(LeaveCode::HalfDaySickMorning));
        assert_eq!(code("0.5ป-บ"), Some(LeaveCode::HalfDaySickAfternoon));
        assert_eq!(code("½ก/ช"), Some(LeaveCode::HalfDayPersonalMorning));
        assert_eq!(code(".5ก/บ"), Some(LeaveCode::HalfDayPersonalAfternoon));
        assert_eq!(code("S-AM"), Some(LeaveCode::HalfDaySickMorning));
        assert_eq!(code("0.5P/PM"), Some(LeaveCode::HalfDayPersonalAfternoon));
    }

    #[test]
    fn test_absent_phrases_and_codes() {
        for raw in ["ขาด", "ขาดงาน", "ขาดราชการ", "ข", "A", "absent"] {
            assert_eq!(code(raw), Some(LeaveCode::Absent), "{}", raw);
        }
    }

    #[test]
    fn test_unqualified_half_day_passes_through() {
        assert_eq!(
            code("ลาป่วยครึ่งวัน"),
            Some(LeaveCode::Unrecognized("ลาป่วยครึ่งวัน".to_string()))
        );
    }

    #[test]
    fn test_unknown_text_passes_through_trimmed() {
        assert_eq!(
            code("  ไปราชการ "),
            Some(LeaveCode::Unrecognized("ไปราชการ".to_string()))
        );
    }

    #[test]
    fn test_blank_cell_has_no_code() {
        assert_eq!(code(""), None);
        assert_eq!(code(" \t "), None);
    }

    #[test]
    fn test_rule_order_is_half_days_first() {
        let order: Vec<&LeaveCode> = LeaveRules::standard().rules().iter().map(LeaveRule::code).collect();
        assert_eq!(order.len(), 7);
        assert_eq!(order[0], &LeaveCode::HalfDaySickMorning);
        assert_eq!(order[6], &LeaveCode::Absent);
    }

    #[test]
    fn test_custom_rules_are_evaluated_in_order() {
        let rules = LeaveRules::new(vec![
            LeaveRule::new(Regex::new("^x").unwrap(), LeaveCode::Absent),
            LeaveRule::new(Regex::new("x").unwrap(), LeaveCode::FullDaySick),
        ]);
        assert_eq!(rules.classify("xy"), Some(LeaveCode::Absent));
        assert_eq!(rules.classify("yx"), Some(LeaveCode::FullDaySick));
    }

    proptest! {
        #[test]
        fn prop_classification_is_total(raw in "\\PC{0,20}") {
            match code(&raw) {
                None => prop_assert!(raw.trim().is_empty()),
                Some(LeaveCode::Unrecognized(text)) => prop_assert_eq!(text, raw.trim()),
                Some(_) => prop_assert!(!raw.trim().is_empty()),
            }
        }
    }
}
