use crate::state::Prop;

const FORM_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormDirection {
    Rising,
    Flat,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValueGrade {
    D,
    C,
    B,
    A,
}

pub fn form_direction(form_trend: f64) -> FormDirection {
    if form_trend > FORM_THRESHOLD {
        FormDirection::Rising
    } else if form_trend < -FORM_THRESHOLD {
        FormDirection::Falling
    } else {
        FormDirection::Flat
    }
}

/// Tier for a percent-scale confidence.
pub fn confidence_tier(confidence: f64) -> Tier {
    if confidence >= 90.0 {
        Tier::High
    } else if confidence >= 80.0 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

pub fn quality_tier(data_quality: f64) -> Tier {
    if data_quality > 0.9 {
        Tier::High
    } else if data_quality > 0.7 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

pub fn value_grade(rating: Option<&str>) -> ValueGrade {
    match rating.and_then(|r| r.trim().chars().next()) {
        Some('A') => ValueGrade::A,
        Some('B') => ValueGrade::B,
        Some('C') => ValueGrade::C,
        _ => ValueGrade::D,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropSignals {
    pub form: FormDirection,
    pub over: Tier,
    pub under: Tier,
    pub quality: Tier,
    pub value: ValueGrade,
}

impl PropSignals {
    pub fn of(prop: &Prop) -> Self {
        Self {
            form: form_direction(prop.ai.form_trend),
            over: confidence_tier(prop.over_confidence),
            under: confidence_tier(prop.under_confidence),
            quality: quality_tier(prop.data_quality),
            value: value_grade(prop.ai.value_rating.as_deref()),
        }
    }
}
