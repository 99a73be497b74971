//! Committing swipes into progress
//!
//! Only the head of the most recently computed queue can be committed. Any
//! other id (a stale double-tap on a card that is already leaving, a card
//! further down the stack) is rejected without touching progress.

use crate::{ProgressEvent, QuestionId, SwipeDirection, UserProgress, VisibleQueue};

/// Why a commit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Nothing to swipe
    EmptyQueue,
    /// The id is not the frontmost card
    NotHead { head: QuestionId },
    /// The question already resolved (answered or saved)
    AlreadyResolved,
}

/// Result of a commit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(ProgressEvent),
    Rejected(RejectReason),
}

impl CommitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    pub fn event(&self) -> Option<&ProgressEvent> {
        match self {
            Self::Committed(event) => Some(event),
            Self::Rejected(_) => None,
        }
    }
}

/// Commit a swipe on the queue head.
///
/// Right records the question as answered, Left as saved for later. Either
/// way a non-premium question consumes one unit of its category's quota;
/// premium questions never do.
pub fn commit_swipe(
    progress: &mut UserProgress,
    queue: &VisibleQueue,
    direction: SwipeDirection,
    question_id: QuestionId,
) -> CommitOutcome {
    let Some(head) = queue.head() else {
        return CommitOutcome::Rejected(RejectReason::EmptyQueue);
    };
    if head.id != question_id {
        return CommitOutcome::Rejected(RejectReason::NotHead { head: head.id });
    }
    // A queue computed before the last commit can still name a resolved head
    if progress.is_resolved(question_id) {
        return CommitOutcome::Rejected(RejectReason::AlreadyResolved);
    }

    match direction {
        SwipeDirection::Right => progress.mark_answered(question_id),
        SwipeDirection::Left => progress.mark_saved(question_id),
    };

    let category_id = head.category_id;
    let quota_consumed = !head.is_premium;
    let shown_count = if quota_consumed {
        progress.record_shown(category_id)
    } else {
        progress.shown_count(category_id)
    };

    CommitOutcome::Committed(ProgressEvent::Swiped {
        question_id,
        category_id,
        direction,
        quota_consumed,
        shown_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{category, filtered, question};
    use crate::{compute_visible_queue, CategoryId, Question, QueuePolicy};
    use proptest::prelude::*;

    fn queue_for(questions: &[Question], progress: &UserProgress) -> VisibleQueue {
        compute_visible_queue(questions, &[category(1)], progress, QueuePolicy::default())
    }

    #[test]
    fn right_marks_answered_and_consumes_quota() {
        let questions = vec![question(1, 1), question(2, 1)];
        let mut progress = filtered(&[1]);
        let queue = queue_for(&questions, &progress);

        let outcome = commit_swipe(&mut progress, &queue, SwipeDirection::Right, QuestionId::new(1));

        assert!(outcome.is_committed());
        assert_eq!(progress.answered(), &[QuestionId::new(1)]);
        assert!(progress.saved_for_later().is_empty());
        assert_eq!(progress.shown_count(CategoryId::new(1)), 1);
    }

    #[test]
    fn left_marks_saved_and_consumes_quota() {
        let questions = vec![question(1, 1)];
        let mut progress = filtered(&[1]);
        let queue = queue_for(&questions, &progress);

        commit_swipe(&mut progress, &queue, SwipeDirection::Left, QuestionId::new(1));

        assert_eq!(progress.saved_for_later(), &[QuestionId::new(1)]);
        assert!(progress.answered().is_empty());
        assert_eq!(progress.shown_count(CategoryId::new(1)), 1);
    }

    #[test]
    fn premium_does_not_consume_quota() {
        let questions = vec![question(1, 1).premium()];
        let mut progress = filtered(&[1]);
        let queue = queue_for(&questions, &progress);

        let outcome = commit_swipe(&mut progress, &queue, SwipeDirection::Right, QuestionId::new(1));

        assert_eq!(progress.shown_count(CategoryId::new(1)), 0);
        assert!(matches!(
            outcome.event(),
            Some(ProgressEvent::Swiped {
                quota_consumed: false,
                shown_count: 0,
                ..
            })
        ));
    }

    #[test]
    fn non_head_is_rejected_without_mutation() {
        let questions = vec![question(1, 1), question(2, 1)];
        let mut progress = filtered(&[1]);
        let before = progress.clone();
        let queue = queue_for(&questions, &progress);

        let outcome = commit_swipe(&mut progress, &queue, SwipeDirection::Right, QuestionId::new(2));

        assert_eq!(
            outcome,
            CommitOutcome::Rejected(RejectReason::NotHead {
                head: QuestionId::new(1)
            })
        );
        assert_eq!(progress, before);
    }

    #[test]
    fn empty_queue_is_a_no_op() {
        let mut progress = filtered(&[]);
        let before = progress.clone();
        let outcome = commit_swipe(
            &mut progress,
            &VisibleQueue::default(),
            SwipeDirection::Left,
            QuestionId::new(1),
        );
        assert_eq!(outcome, CommitOutcome::Rejected(RejectReason::EmptyQueue));
        assert_eq!(progress, before);
    }

    #[test]
    fn stale_queue_cannot_double_commit() {
        let questions = vec![question(1, 1), question(2, 1)];
        let mut progress = filtered(&[1]);
        let stale = queue_for(&questions, &progress);

        commit_swipe(&mut progress, &stale, SwipeDirection::Right, QuestionId::new(1));
        let second = commit_swipe(&mut progress, &stale, SwipeDirection::Left, QuestionId::new(1));

        assert_eq!(second, CommitOutcome::Rejected(RejectReason::AlreadyResolved));
        assert_eq!(progress.answered(), &[QuestionId::new(1)]);
        assert!(progress.saved_for_later().is_empty());
        assert_eq!(progress.shown_count(CategoryId::new(1)), 1);
    }

    proptest! {
        /// Any interleaving of head commits and requeues keeps answered and
        /// saved disjoint.
        #[test]
        fn answered_and_saved_stay_disjoint(
            ops in proptest::collection::vec((0u8..3, 1i64..8), 0..60)
        ) {
            let questions: Vec<Question> = (1..8)
                .map(|id| if id % 3 == 0 { question(id, 1).premium() } else { question(id, 1) })
                .collect();
            let mut progress = filtered(&[1]);

            for (op, target) in ops {
                let queue = queue_for(&questions, &progress);
                match op {
                    0 | 1 => {
                        let direction = if op == 0 { SwipeDirection::Right } else { SwipeDirection::Left };
                        match queue.head() {
                            Some(head) => {
                                commit_swipe(&mut progress, &queue, direction, head.id);
                            }
                            None => {
                                let outcome = commit_swipe(&mut progress, &queue, direction, QuestionId::new(target));
                                prop_assert_eq!(outcome, CommitOutcome::Rejected(RejectReason::EmptyQueue));
                            }
                        }
                    }
                    _ => {
                        crate::journal::move_to_top(&mut progress, QuestionId::new(target));
                    }
                }
                for id in progress.answered() {
                    prop_assert!(!progress.is_saved(*id));
                }
            }
        }
    }
}
