use linguazoo_types::AnimalRecord;

use crate::resolver::{GameEntryDecision, InvalidReason};

/// Explicit state machine for one add-a-new-animal flow:
/// `Idle → Validating → {Confirming, Rejected, NetworkBlocked} →
/// {Added, Cancelled}`. Confirmation is the only path that yields a record
/// to persist; everything before it is side-effect free.
#[derive(Debug, Clone, PartialEq)]
pub enum AddFlow {
    Idle,
    Validating,
    Confirming(PendingAnimal),
    Rejected(Rejection),
    NetworkBlocked,
    Added(Option<AnimalRecord>),
    Cancelled,
}

/// A validated animal waiting for the user's go-ahead.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAnimal {
    pub name: String,
    pub translation: Option<String>,
    pub savable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    AlreadyKnown(AnimalRecord),
    LanguageMismatch(Option<String>),
    Invalid(InvalidReason),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("cannot {action} while {state}")]
pub struct FlowError {
    pub state: &'static str,
    pub action: &'static str,
}

impl Default for AddFlow {
    fn default() -> Self {
        AddFlow::Idle
    }
}

impl AddFlow {
    fn state_name(&self) -> &'static str {
        match self {
            AddFlow::Idle => "idle",
            AddFlow::Validating => "validating",
            AddFlow::Confirming(_) => "confirming",
            AddFlow::Rejected(_) => "rejected",
            AddFlow::NetworkBlocked => "network-blocked",
            AddFlow::Added(_) => "added",
            AddFlow::Cancelled => "cancelled",
        }
    }

    fn illegal(&self, action: &'static str) -> FlowError {
        FlowError {
            state: self.state_name(),
            action,
        }
    }

    /// Idle → Validating. Entered only on non-duplicate input; callers
    /// check the collection first.
    pub fn begin(&self) -> Result<AddFlow, FlowError> {
        match self {
            AddFlow::Idle => Ok(AddFlow::Validating),
            _ => Err(self.illegal("begin validation")),
        }
    }

    /// Validating → Confirming | Rejected | NetworkBlocked, driven by the
    /// resolver's decision.
    pub fn on_decision(&self, decision: GameEntryDecision) -> Result<AddFlow, FlowError> {
        if *self != AddFlow::Validating {
            return Err(self.illegal("apply decision"));
        }

        Ok(match decision {
            GameEntryDecision::NewValidAnimal {
                name,
                translation,
                savable,
            } => AddFlow::Confirming(PendingAnimal {
                name,
                translation,
                savable,
            }),
            GameEntryDecision::ExistingInCurrentLanguage(record) => {
                AddFlow::Rejected(Rejection::AlreadyKnown(record))
            }
            GameEntryDecision::LanguageMismatch {
                name_in_current_language,
            } => AddFlow::Rejected(Rejection::LanguageMismatch(name_in_current_language)),
            GameEntryDecision::Invalid(reason) => AddFlow::Rejected(Rejection::Invalid(reason)),
            GameEntryDecision::NetworkUnavailable => AddFlow::NetworkBlocked,
        })
    }

    /// Confirming → Added. Returns the record to persist, or `None` when
    /// the pending animal is playable but not savable.
    pub fn confirm(&self) -> Result<(AddFlow, Option<AnimalRecord>), FlowError> {
        match self {
            AddFlow::Confirming(pending) => {
                let record = match (&pending.translation, pending.savable) {
                    (Some(translation), true) => {
                        Some(AnimalRecord::new(pending.name.as_str(), translation.as_str()))
                    }
                    _ => None,
                };
                Ok((AddFlow::Added(record.clone()), record))
            }
            _ => Err(self.illegal("confirm")),
        }
    }

    /// Back to Idle with no side effect. Valid from any non-terminal,
    /// non-idle state.
    pub fn cancel(&self) -> Result<AddFlow, FlowError> {
        match self {
            AddFlow::Validating
            | AddFlow::Confirming(_)
            | AddFlow::Rejected(_)
            | AddFlow::NetworkBlocked => Ok(AddFlow::Idle),
            _ => Err(self.illegal("cancel")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_valid(savable: bool) -> GameEntryDecision {
        GameEntryDecision::NewValidAnimal {
            name: "KUCING".to_string(),
            translation: savable.then(|| "CAT".to_string()),
            savable,
        }
    }

    #[test]
    fn happy_path_yields_a_record() {
        let flow = AddFlow::Idle.begin().unwrap();
        let flow = flow.on_decision(new_valid(true)).unwrap();
        let (flow, record) = flow.confirm().unwrap();

        let record = record.unwrap();
        assert_eq!(record.name_id, "KUCING");
        assert_eq!(record.name_en, "CAT");
        assert_eq!(flow, AddFlow::Added(Some(record)));
    }

    #[test]
    fn unsavable_animal_confirms_without_a_record() {
        let flow = AddFlow::Validating.on_decision(new_valid(false)).unwrap();
        let (flow, record) = flow.confirm().unwrap();
        assert!(record.is_none());
        assert_eq!(flow, AddFlow::Added(None));
    }

    #[test]
    fn cancel_from_confirming_returns_to_idle() {
        let flow = AddFlow::Validating.on_decision(new_valid(true)).unwrap();
        assert_eq!(flow.cancel().unwrap(), AddFlow::Idle);
    }

    #[test]
    fn network_failure_blocks_instead_of_rejecting() {
        let flow = AddFlow::Validating
            .on_decision(GameEntryDecision::NetworkUnavailable)
            .unwrap();
        assert_eq!(flow, AddFlow::NetworkBlocked);
        assert!(flow.confirm().is_err());
    }

    #[test]
    fn illegal_transitions_are_typed_errors() {
        let err = AddFlow::Idle.confirm().unwrap_err();
        assert_eq!(err.state, "idle");
        assert!(AddFlow::Added(None).cancel().is_err());
        assert!(AddFlow::Confirming(PendingAnimal {
            name: "KUCING".to_string(),
            translation: None,
            savable: false,
        })
        .begin()
        .is_err());
    }
}
