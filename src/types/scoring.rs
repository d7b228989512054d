use serde::Serialize;
use std::fmt;

pub type Score = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    NeedsImprovement,
    Inadequate,
}

impl Tier {
    pub fn remark(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent prompt! Ready for deep research.",
            Tier::Good => "Good prompt. Consider addressing missing elements for better results.",
            Tier::NeedsImprovement => {
                "Prompt needs improvement. Add missing sections for better research quality."
            }
            Tier::Inadequate => {
                "Prompt needs significant enhancement. Review the template and add required sections."
            }
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::NeedsImprovement => "needs improvement",
            Tier::Inadequate => "inadequate",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Process exit status for this verdict.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Pass => 0,
            Verdict::Fail => 1,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Pass => "pass",
            Verdict::Fail => "fail",
        })
    }
}

/// One itemized subtraction from the base score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deduction {
    pub id: String,
    pub reason: String,
    pub points: u32,
}

impl Deduction {
    pub fn new(id: impl Into<String>, reason: impl Into<String>, points: u32) -> Self {
        Self {
            id: id.into(),
            reason: reason.into(),
            points,
        }
    }
}
