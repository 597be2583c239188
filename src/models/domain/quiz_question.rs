use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionLetter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(OptionLetter::A),
            "B" => Ok(OptionLetter::B),
            "C" => Ok(OptionLetter::C),
            "D" => Ok(OptionLetter::D),
            other => Err(AppError::ValidationError(format!(
                "Invalid answer option '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct QuizOptions {
    #[serde(rename = "A")]
    #[validate(custom(function = "non_blank"))]
    pub a: String,
    #[serde(rename = "B")]
    #[validate(custom(function = "non_blank"))]
    pub b: String,
    #[serde(rename = "C")]
    #[validate(custom(function = "non_blank"))]
    pub c: String,
    #[serde(rename = "D")]
    #[validate(custom(function = "non_blank"))]
    pub d: String,
}

impl QuizOptions {
    pub fn get(&self, letter: OptionLetter) -> &str {
        match letter {
            OptionLetter::A => &self.a,
            OptionLetter::B => &self.b,
            OptionLetter::C => &self.c,
            OptionLetter::D => &self.d,
        }
    }
}

/// A single-answer multiple choice question. `correct_answer` is always one
/// of the four option keys since the letter set is closed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    #[validate(custom(function = "non_blank"))]
    pub question: String,
    #[validate(nested)]
    pub options: QuizOptions,
    pub correct_answer: OptionLetter,
    #[validate(custom(function = "non_blank"))]
    pub explanation: String,
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
