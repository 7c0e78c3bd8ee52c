//! The eight-step questionnaire as an explicit state machine.
//!
//! ```text
//! Role → TransplantStatus → Organs → Insurance → Medications
//!      → FinancialStatus → Review → Results
//! ```
//!
//! A `Wizard` is a plain value: hosts hold it, pass it around, and persist it
//! however they like. Forward moves are gated on the current step having an
//! answer. Backward moves and jumps to already-visited steps are always
//! allowed, so users can revise earlier answers before reaching `Results`.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use medaid_contracts::{
    error::{MedaidError, MedaidResult},
    profile::{FinancialStatus, InsuranceType, OrganType, Role, TransplantStatus, UserProfile},
};

/// One screen of the questionnaire, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    Role,
    TransplantStatus,
    Organs,
    Insurance,
    Medications,
    FinancialStatus,
    Review,
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 8] = [
        WizardStep::Role,
        WizardStep::TransplantStatus,
        WizardStep::Organs,
        WizardStep::Insurance,
        WizardStep::Medications,
        WizardStep::FinancialStatus,
        WizardStep::Review,
        WizardStep::Results,
    ];

    /// 1-based position shown in the progress indicator.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn next(&self) -> Option<WizardStep> {
        WizardStep::ALL.get(self.number()).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        let index = *self as usize;
        index.checked_sub(1).map(|i| WizardStep::ALL[i])
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Role => "role",
            WizardStep::TransplantStatus => "transplantStatus",
            WizardStep::Organs => "organs",
            WizardStep::Insurance => "insurance",
            WizardStep::Medications => "medications",
            WizardStep::FinancialStatus => "financialStatus",
            WizardStep::Review => "review",
            WizardStep::Results => "results",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An answer to one question step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", content = "value", rename_all = "camelCase")]
pub enum Answer {
    Role(Role),
    TransplantStatus(TransplantStatus),
    Organs(BTreeSet<OrganType>),
    Insurance(InsuranceType),
    Medications(Vec<String>),
    FinancialStatus(FinancialStatus),
}

impl Answer {
    /// The step this answer belongs to.
    pub fn step(&self) -> WizardStep {
        match self {
            Answer::Role(_) => WizardStep::Role,
            Answer::TransplantStatus(_) => WizardStep::TransplantStatus,
            Answer::Organs(_) => WizardStep::Organs,
            Answer::Insurance(_) => WizardStep::Insurance,
            Answer::Medications(_) => WizardStep::Medications,
            Answer::FinancialStatus(_) => WizardStep::FinancialStatus,
        }
    }
}

/// Answers collected so far. `None` means not yet answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardAnswers {
    pub role: Option<Role>,
    pub transplant_status: Option<TransplantStatus>,
    pub organs: BTreeSet<OrganType>,
    pub insurance_type: Option<InsuranceType>,
    pub medications: Vec<String>,
    pub financial_status: Option<FinancialStatus>,
}

/// Questionnaire state: the current step, the furthest step reached, and the
/// answers given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wizard {
    current: WizardStep,
    furthest: WizardStep,
    answers: WizardAnswers,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            current: WizardStep::Role,
            furthest: WizardStep::Role,
            answers: WizardAnswers::default(),
        }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    pub fn furthest(&self) -> WizardStep {
        self.furthest
    }

    pub fn answers(&self) -> &WizardAnswers {
        &self.answers
    }

    /// Record `answer`, replacing any earlier answer to the same step.
    ///
    /// Answers may only be given for steps already reached; answering ahead
    /// is an `IllegalTransition`.
    pub fn answer(&mut self, answer: Answer) -> MedaidResult<()> {
        let step = answer.step();
        if step > self.furthest {
            return Err(MedaidError::IllegalTransition {
                reason: format!(
                    "cannot answer '{}' before reaching it (furthest step is '{}')",
                    step, self.furthest
                ),
            });
        }

        match answer {
            Answer::Role(role) => self.answers.role = Some(role),
            Answer::TransplantStatus(status) => self.answers.transplant_status = Some(status),
            Answer::Organs(organs) => self.answers.organs = organs,
            Answer::Insurance(insurance) => self.answers.insurance_type = Some(insurance),
            Answer::Medications(medications) => self.answers.medications = medications,
            Answer::FinancialStatus(status) => self.answers.financial_status = Some(status),
        }

        debug!(step = %step, "questionnaire answer recorded");
        Ok(())
    }

    /// Return true if `step` has what it needs to move forward.
    ///
    /// Medications may be left empty. Review needs every required answer.
    pub fn is_complete(&self, step: WizardStep) -> bool {
        let a = &self.answers;
        match step {
            WizardStep::Role => a.role.is_some(),
            WizardStep::TransplantStatus => a.transplant_status.is_some(),
            WizardStep::Organs => !a.organs.is_empty(),
            WizardStep::Insurance => a.insurance_type.is_some(),
            WizardStep::Medications => true,
            WizardStep::FinancialStatus => a.financial_status.is_some(),
            WizardStep::Review => self.first_incomplete().is_none(),
            WizardStep::Results => true,
        }
    }

    /// Move to the next step.
    ///
    /// Returns `StepIncomplete` if the current step is unanswered and
    /// `IllegalTransition` when already on `Results`.
    pub fn advance(&mut self) -> MedaidResult<WizardStep> {
        let Some(next) = self.current.next() else {
            return Err(MedaidError::IllegalTransition {
                reason: format!("'{}' is the final step", self.current),
            });
        };

        if !self.is_complete(self.current) {
            let missing = match self.current {
                WizardStep::Review => self.first_incomplete().unwrap_or(WizardStep::Review),
                step => step,
            };
            return Err(MedaidError::StepIncomplete {
                step: missing.to_string(),
            });
        }

        debug!(from = %self.current, to = %next, "questionnaire advanced");
        self.current = next;
        self.furthest = self.furthest.max(next);
        Ok(next)
    }

    /// Move to the previous step. Stays put on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.current.previous() {
            debug!(from = %self.current, to = %previous, "questionnaire went back");
            self.current = previous;
        }
        self.current
    }

    /// Jump directly to a step that has already been reached.
    pub fn jump_to(&mut self, step: WizardStep) -> MedaidResult<WizardStep> {
        if step > self.furthest {
            return Err(MedaidError::IllegalTransition {
                reason: format!(
                    "cannot jump to '{}' before reaching it (furthest step is '{}')",
                    step, self.furthest
                ),
            });
        }
        self.current = step;
        Ok(step)
    }

    /// Build the profile from the collected answers.
    ///
    /// Returns `StepIncomplete` naming the first step still missing an answer.
    pub fn profile(&self) -> MedaidResult<UserProfile> {
        if let Some(step) = self.first_incomplete() {
            return Err(MedaidError::StepIncomplete {
                step: step.to_string(),
            });
        }

        let a = &self.answers;
        match (a.role, a.transplant_status, a.insurance_type, a.financial_status) {
            (Some(role), Some(transplant_status), Some(insurance_type), Some(financial_status)) => {
                Ok(UserProfile {
                    role,
                    transplant_status,
                    organs: a.organs.clone(),
                    insurance_type,
                    medications: a.medications.clone(),
                    financial_status,
                })
            }
            _ => Err(MedaidError::StepIncomplete {
                step: WizardStep::Review.to_string(),
            }),
        }
    }

    fn first_incomplete(&self) -> Option<WizardStep> {
        WizardStep::ALL
            .iter()
            .copied()
            .take_while(|s| *s < WizardStep::Review)
            .find(|s| !self.is_complete(*s))
    }
}
