//! Screening form fields and their trained integer encodings.
//!
//! Every categorical field is a closed enum paired with the exact code table
//! the classifier was trained against. The tables are immutable configuration;
//! changing a code here silently breaks compatibility with existing model
//! artifacts.

use thiserror::Error;

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 16;

/// Column names of the encoded record, in the order the model expects.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "age",
    "gender",
    "bmi",
    "who_bmi",
    "phq_score",
    "depression_severity",
    "depressiveness",
    "suicidal",
    "depression_treatment",
    "gad_score",
    "anxiety_severity",
    "anxiousness",
    "anxiety_diagnosis",
    "anxiety_treatment",
    "epworth_score",
    "sleepiness",
];

/// Display string used by the training data for missing categorical values.
pub const MISSING_LABEL: &str = "Vacío (NaN)";

/// Errors raised when mapping text labels onto the trained encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A label is not a member of the field's trained option set.
    #[error("unknown value '{value}' for field '{field}'")]
    UnknownCategory {
        /// Field whose option set was violated.
        field: &'static str,
        /// Offending input label.
        value: String,
    },
}

/// Self-reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Options in the order they are offered to the user.
    pub const ALL: [Self; 2] = [Self::Female, Self::Male];

    /// Display label, identical to the training data spelling.
    pub fn label(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }

    /// Trained integer code.
    pub fn code(self) -> u8 {
        match self {
            Self::Female => 0,
            Self::Male => 1,
        }
    }

    fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.label() == value)
    }
}

/// WHO body-mass-index bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhoBmiCategory {
    ClassIObesity,
    ClassIiObesity,
    ClassIiiObesity,
    Normal,
    NotAvailable,
    Overweight,
    Underweight,
}

impl WhoBmiCategory {
    pub const ALL: [Self; 7] = [
        Self::ClassIObesity,
        Self::ClassIiObesity,
        Self::ClassIiiObesity,
        Self::Normal,
        Self::NotAvailable,
        Self::Overweight,
        Self::Underweight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ClassIObesity => "Class I Obesity",
            Self::ClassIiObesity => "Class II Obesity",
            Self::ClassIiiObesity => "Class III Obesity",
            Self::Normal => "Normal",
            Self::NotAvailable => "Not Available",
            Self::Overweight => "Overweight",
            Self::Underweight => "Underweight",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::ClassIObesity => 0,
            Self::ClassIiObesity => 1,
            Self::ClassIiiObesity => 2,
            Self::Normal => 3,
            Self::NotAvailable => 4,
            Self::Overweight => 5,
            Self::Underweight => 6,
        }
    }

    fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.label() == value)
    }
}

/// PHQ-derived depression severity bucket.
///
/// The training data contains both a `None-minimal` and a lowercase `none`
/// category; they carry distinct codes and are kept distinct here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepressionSeverity {
    Mild,
    Moderate,
    ModeratelySevere,
    NoneMinimal,
    Missing,
    Severe,
    NoneLower,
}

impl DepressionSeverity {
    pub const ALL: [Self; 7] = [
        Self::Mild,
        Self::ModeratelySevere,
        Self::NoneMinimal,
        Self::Moderate,
        Self::Severe,
        Self::NoneLower,
        Self::Missing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::ModeratelySevere => "Moderately severe",
            Self::NoneMinimal => "None-minimal",
            Self::Missing => MISSING_LABEL,
            Self::Severe => "Severe",
            Self::NoneLower => "none",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Mild => 0,
            Self::Moderate => 1,
            Self::ModeratelySevere => 2,
            Self::NoneMinimal => 3,
            Self::Missing => 4,
            Self::Severe => 5,
            Self::NoneLower => 6,
        }
    }

    fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.label() == value)
    }
}

/// GAD-derived anxiety severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnxietySeverity {
    Missing,
    Mild,
    Moderate,
    NoneMinimal,
    Severe,
}

impl AnxietySeverity {
    pub const ALL: [Self; 5] = [
        Self::Moderate,
        Self::Mild,
        Self::Severe,
        Self::NoneMinimal,
        Self::Missing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Missing => MISSING_LABEL,
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::NoneMinimal => "None-minimal",
            Self::Severe => "Severe",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::NoneMinimal => 3,
            Self::Severe => 4,
        }
    }

    fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.label() == value)
    }
}

/// Yes/no question whose training data reserves a code for missing answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    No,
    Yes,
    Missing,
}

impl Answer {
    pub const ALL: [Self; 3] = [Self::No, Self::Yes, Self::Missing];

    pub fn label(self) -> &'static str {
        match self {
            Self::No => "False",
            Self::Yes => "True",
            Self::Missing => MISSING_LABEL,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::No => 0,
            Self::Yes => 1,
            Self::Missing => 2,
        }
    }

    fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.label() == value)
    }
}

/// Raw selections gathered from the assessment form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreeningInput {
    /// Age in years (18-31).
    pub age: u32,
    pub gender: Gender,
    /// Body-mass index (0.0-54.55).
    pub bmi: f32,
    pub who_bmi: WhoBmiCategory,
    /// PHQ-9 questionnaire score (0-24).
    pub phq_score: u32,
    pub depression_severity: DepressionSeverity,
    pub depressiveness: Answer,
    pub suicidal: Answer,
    pub depression_treatment: Answer,
    /// GAD-7 questionnaire score (0-21).
    pub gad_score: u32,
    pub anxiety_severity: AnxietySeverity,
    pub anxiousness: Answer,
    pub anxiety_diagnosis: Answer,
    pub anxiety_treatment: Answer,
    /// Epworth sleepiness score (0-33).
    pub epworth_score: u32,
    pub sleepiness: Answer,
}

impl Default for ScreeningInput {
    fn default() -> Self {
        Self {
            age: 25,
            gender: Gender::Female,
            bmi: 22.0,
            who_bmi: WhoBmiCategory::Normal,
            phq_score: 12,
            depression_severity: DepressionSeverity::Mild,
            depressiveness: Answer::No,
            suicidal: Answer::No,
            depression_treatment: Answer::No,
            gad_score: 10,
            anxiety_severity: AnxietySeverity::Mild,
            anxiousness: Answer::No,
            anxiety_diagnosis: Answer::No,
            anxiety_treatment: Answer::No,
            epworth_score: 16,
            sleepiness: Answer::No,
        }
    }
}

/// One fully encoded row, ordered per [`FEATURE_COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord([f32; FEATURE_COUNT]);

impl FeatureRecord {
    /// Encoded values in model order.
    pub fn values(&self) -> &[f32; FEATURE_COUNT] {
        &self.0
    }

    /// Build a record from already-encoded values, e.g. a parsed CSV row.
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}

/// Encode one set of raw selections into a feature record.
///
/// Pure and total: every field of [`ScreeningInput`] is already constrained to
/// its trained domain, so no input can fail to encode.
pub fn encode(input: &ScreeningInput) -> FeatureRecord {
    FeatureRecord([
        input.age as f32,
        f32::from(input.gender.code()),
        input.bmi,
        f32::from(input.who_bmi.code()),
        input.phq_score as f32,
        f32::from(input.depression_severity.code()),
        f32::from(input.depressiveness.code()),
        f32::from(input.suicidal.code()),
        f32::from(input.depression_treatment.code()),
        input.gad_score as f32,
        f32::from(input.anxiety_severity.code()),
        f32::from(input.anxiousness.code()),
        f32::from(input.anxiety_diagnosis.code()),
        f32::from(input.anxiety_treatment.code()),
        input.epworth_score as f32,
        f32::from(input.sleepiness.code()),
    ])
}

/// Map a categorical display label to its trained code.
///
/// Only used where text reaches the encoder without passing through the form
/// widgets (tests, tooling); the UI cannot produce an out-of-domain label.
pub fn encode_label(field: &'static str, value: &str) -> Result<u8, EncodeError> {
    let code = match field {
        "gender" => Gender::from_label(value).map(Gender::code),
        "who_bmi" => WhoBmiCategory::from_label(value).map(WhoBmiCategory::code),
        "depression_severity" => {
            DepressionSeverity::from_label(value).map(DepressionSeverity::code)
        }
        "anxiety_severity" => AnxietySeverity::from_label(value).map(AnxietySeverity::code),
        "depressiveness" | "suicidal" | "depression_treatment" | "anxiousness"
        | "anxiety_diagnosis" | "anxiety_treatment" | "sleepiness" => {
            Answer::from_label(value).map(Answer::code)
        }
        _ => None,
    };
    code.ok_or_else(|| EncodeError::UnknownCategory {
        field,
        value: value.to_string(),
    })
}
