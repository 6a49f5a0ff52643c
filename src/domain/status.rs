// src/domain/status.rs
use thiserror::Error;

labelled_enum!(
    /// Moderation lifecycle. New listings start `Pending`; an admin moves them
    /// to `Approved` or `Rejected` exactly once.
    ModerationStatus, "status" {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
);

labelled_enum!(ModerationAction, "moderation action" {
    Approve => "approve",
    Reject => "reject",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {action} a listing that is already {from}")]
pub struct TransitionError {
    pub from: ModerationStatus,
    pub action: ModerationAction,
}

impl ModerationStatus {
    /// The only legal edges are the two out of `Pending`.
    pub fn apply(self, action: ModerationAction) -> Result<Self, TransitionError> {
        match (self, action) {
            (ModerationStatus::Pending, ModerationAction::Approve) => Ok(ModerationStatus::Approved),
            (ModerationStatus::Pending, ModerationAction::Reject) => Ok(ModerationStatus::Rejected),
            (from, action) => Err(TransitionError { from, action }),
        }
    }

    pub fn allowed_actions(self) -> &'static [ModerationAction] {
        match self {
            ModerationStatus::Pending => ModerationAction::ALL,
            ModerationStatus::Approved | ModerationStatus::Rejected => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_moves_to_approved_or_rejected() {
        assert_eq!(
            ModerationStatus::Pending.apply(ModerationAction::Approve),
            Ok(ModerationStatus::Approved)
        );
        assert_eq!(
            ModerationStatus::Pending.apply(ModerationAction::Reject),
            Ok(ModerationStatus::Rejected)
        );
    }

    #[test]
    fn settled_listings_cannot_move() {
        for from in [ModerationStatus::Approved, ModerationStatus::Rejected] {
            assert!(from.allowed_actions().is_empty());
            for action in ModerationAction::ALL {
                let err = from.apply(*action).unwrap_err();
                assert_eq!(err.from, from);
                assert_eq!(err.action, *action);
            }
        }
    }

    #[test]
    fn transition_error_reads_naturally() {
        let err = ModerationStatus::Approved
            .apply(ModerationAction::Reject)
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot reject a listing that is already approved");
    }
}
