//! Forward-only story state transitions.

use serde::Serialize;

use super::model::{StoryType, WorkflowState};
use crate::error::{SwimError, SwimResult};

/// A state change applied to a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub story_id: u64,
    pub from: WorkflowState,
    pub to: WorkflowState,
}

/// Next state for a story in `state` of type `story_type`.
///
/// Chores go straight from started to accepted. Accepted stories have no
/// next state.
pub fn next_state(state: WorkflowState, story_type: StoryType) -> SwimResult<WorkflowState> {
    use WorkflowState::*;

    match (state, story_type) {
        (Unstarted, _) | (Rejected, _) => Ok(Started),
        (Started, StoryType::Chore) => Ok(Accepted),
        (Started, _) => Ok(Finished),
        (Finished, _) => Ok(Delivered),
        (Delivered, _) => Ok(Accepted),
        (Accepted, _) => Err(SwimError::UnknownTransition {
            state: state.as_str().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_pipeline() {
        let expected = [
            (WorkflowState::Unstarted, WorkflowState::Started),
            (WorkflowState::Rejected, WorkflowState::Started),
            (WorkflowState::Started, WorkflowState::Finished),
            (WorkflowState::Finished, WorkflowState::Delivered),
            (WorkflowState::Delivered, WorkflowState::Accepted),
        ];
        for (from, to) in expected {
            for story_type in [StoryType::Feature, StoryType::Bug, StoryType::Release] {
                assert_eq!(next_state(from, story_type).unwrap(), to);
            }
        }
    }

    #[test]
    fn chore_skips_review() {
        assert_eq!(
            next_state(WorkflowState::Started, StoryType::Chore).unwrap(),
            WorkflowState::Accepted
        );
        assert_eq!(
            next_state(WorkflowState::Unstarted, StoryType::Chore).unwrap(),
            WorkflowState::Started
        );
        assert_eq!(
            next_state(WorkflowState::Finished, StoryType::Chore).unwrap(),
            WorkflowState::Delivered
        );
    }

    #[test]
    fn accepted_is_terminal() {
        for story_type in [StoryType::Feature, StoryType::Chore] {
            match next_state(WorkflowState::Accepted, story_type) {
                Err(SwimError::UnknownTransition { state }) => assert_eq!(state, "accepted"),
                other => panic!("expected UnknownTransition, got {:?}", other),
            }
        }
    }

    #[test]
    fn transitions_only_move_forward() {
        for state in WorkflowState::ALL {
            if let Ok(next) = next_state(state, StoryType::Feature) {
                assert!(next > state);
            }
        }
    }
}
