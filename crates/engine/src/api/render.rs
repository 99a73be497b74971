//! Plain-text views for the terminal front end.

use std::fmt::Write;

use deeper_domain::{
    Category, Fill, JournalEntry, JournalView, ProgressEvent, Question, QueuePolicy, UserProgress,
    VisibleQueue,
};

use crate::entities::Catalog;

/// The card stack: the frontmost `depth` cards, head first.
pub fn stack(queue: &VisibleQueue, catalog: &Catalog, progress: &UserProgress, depth: usize) -> String {
    let mut out = String::new();

    if queue.is_empty() {
        if progress.current_filters().is_empty() {
            out.push_str("No categories selected. Use `toggle <id>` or `all`.\n");
        } else {
            out.push_str("No questions left in the selected categories.\n");
        }
    } else {
        let _ = writeln!(out, "{} card(s) in the stack:", queue.len());
        for (index, question) in queue.window(depth).iter().enumerate() {
            let marker = if index == 0 { '>' } else { ' ' };
            let _ = writeln!(out, " {marker} {}", card(question, catalog.category(question.category_id)));
        }
        if queue.len() > depth {
            let _ = writeln!(out, "   ... {} more", queue.len() - depth);
        }
    }

    if !queue.quota_exhausted().is_empty() {
        let names: Vec<&str> = queue
            .quota_exhausted()
            .iter()
            .filter_map(|id| catalog.category(*id))
            .map(|c| c.name.as_str())
            .collect();
        let _ = writeln!(
            out,
            "Free questions used up in: {}. Premium questions continue.",
            names.join(", ")
        );
    }

    out
}

fn card(question: &Question, category: Option<&Category>) -> String {
    let category = category.map_or("?", |c| c.name.as_str());
    let premium = if question.is_premium { " (premium)" } else { "" };
    format!("#{} [{category}] {}{premium}", question.id, question.text)
}

/// Category list with selection state, question counts and quota use.
pub fn categories(catalog: &Catalog, progress: &UserProgress, policy: QueuePolicy) -> String {
    if catalog.categories().is_empty() {
        return "No categories loaded.\n".to_string();
    }

    let counts = catalog.question_count_by_category();
    let mut out = String::new();
    for category in catalog.categories() {
        let selected = if progress.has_filter(category.id) { 'x' } else { ' ' };
        let _ = writeln!(
            out,
            "[{selected}] {:>3}  {}  ({} questions, {}/{} free shown, {})",
            category.id,
            category.name,
            counts.get(&category.id).copied().unwrap_or(0),
            progress.shown_count(category.id),
            policy.per_category_cap,
            fill(category),
        );
    }
    out
}

fn fill(category: &Category) -> String {
    match category.style.fill() {
        Fill::Solid(color) => format!("solid {color}"),
        Fill::Gradient { from, to, angle } => format!("gradient {from} -> {to} at {angle}deg"),
        Fill::Image(url) => format!("image {url}"),
    }
}

pub fn journal(view: &JournalView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Progress: {}% ({} of {} discussed)",
        view.progress_percent(),
        view.discussed_count(),
        view.total_questions
    );

    let _ = writeln!(out, "Saved for later ({}):", view.saved_count());
    entries(&mut out, &view.saved);
    let _ = writeln!(out, "Discussed ({}):", view.discussed_count());
    entries(&mut out, &view.discussed);
    out
}

fn entries(out: &mut String, entries: &[JournalEntry]) {
    if entries.is_empty() {
        out.push_str("   (none)\n");
    }
    for entry in entries {
        let _ = writeln!(out, "   {}", card(&entry.question, entry.category.as_ref()));
    }
}

/// One-line confirmation of a progress change.
pub fn event(event: &ProgressEvent, catalog: &Catalog) -> String {
    let category_name = |id| catalog.category(id).map_or("unknown category", |c| c.name.as_str());
    match event {
        ProgressEvent::Swiped {
            question_id,
            direction,
            ..
        } => format!("#{question_id} {}.", direction.outcome_label()),
        ProgressEvent::FilterToggled {
            category_id,
            active,
        } => format!(
            "{} {}.",
            category_name(*category_id),
            if *active { "selected" } else { "deselected" }
        ),
        ProgressEvent::FiltersReplaced { filters } if filters.is_empty() => {
            "All categories deselected.".to_string()
        }
        ProgressEvent::FiltersReplaced { filters } | ProgressEvent::FiltersInitialized { filters } => {
            format!("{} categories selected.", filters.len())
        }
        ProgressEvent::Requeued { question_id } => format!("#{question_id} is back in the stack."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{catalog, question};
    use deeper_domain::{compute_visible_queue, CategoryId, QuestionId, SwipeDirection};

    fn all_selected(catalog: &Catalog) -> UserProgress {
        UserProgress::from_parts([], [], catalog.category_ids(), [], Some(true))
    }

    #[test]
    fn stack_marks_head_and_truncates_to_depth() {
        let catalog = catalog(1, &[(1, 1), (2, 1), (3, 1)]);
        let progress = all_selected(&catalog);
        let queue = compute_visible_queue(
            catalog.questions(),
            catalog.categories(),
            &progress,
            QueuePolicy::default(),
        );

        let text = stack(&queue, &catalog, &progress, 2);

        assert!(text.starts_with("3 card(s) in the stack:\n > #1 [Category 1] Question 1?\n"));
        assert!(text.contains("   #2 [Category 1]"));
        assert!(!text.contains("#3"));
        assert!(text.contains("... 1 more"));
    }

    #[test]
    fn empty_stack_explains_why() {
        let catalog = catalog(1, &[(1, 1)]);
        let none_selected = UserProgress::default();
        let empty = VisibleQueue::default();

        assert!(stack(&empty, &catalog, &none_selected, 4).starts_with("No categories selected"));
        assert!(stack(&empty, &catalog, &all_selected(&catalog), 4)
            .starts_with("No questions left"));
    }

    #[test]
    fn categories_show_selection_and_quota() {
        let catalog = catalog(2, &[(1, 1), (2, 1), (3, 2)]);
        let progress = UserProgress::from_parts(
            [],
            [],
            [CategoryId::new(1)],
            [(CategoryId::new(1), 4)],
            None,
        );

        let text = categories(&catalog, &progress, QueuePolicy::default());

        assert!(text.contains("[x]   1  Category 1  (2 questions, 4/10 free shown, solid #000000)"));
        assert!(text.contains("[ ]   2  Category 2  (1 questions, 0/10 free shown"));
    }

    #[test]
    fn journal_lists_premium_marker() {
        let catalog = Catalog::new(
            vec![crate::test_fixtures::category(1)],
            vec![question(1, 1).premium(), question(2, 1)],
        );
        let progress = UserProgress::from_parts([QuestionId::new(1)], [], [], [], None);

        let text = journal(&JournalView::build(
            catalog.questions(),
            catalog.categories(),
            &progress,
        ));

        assert!(text.starts_with("Progress: 50% (1 of 2 discussed)"));
        assert!(text.contains("Saved for later (0):\n   (none)\n"));
        assert!(text.contains("   #1 [Category 1] Question 1? (premium)"));
    }

    #[test]
    fn event_lines() {
        let catalog = catalog(1, &[]);
        let swiped = ProgressEvent::Swiped {
            question_id: QuestionId::new(4),
            category_id: CategoryId::new(1),
            direction: SwipeDirection::Left,
            quota_consumed: true,
            shown_count: 1,
        };

        assert_eq!(event(&swiped, &catalog), "#4 saved for later.");
        assert_eq!(
            event(
                &ProgressEvent::FilterToggled {
                    category_id: CategoryId::new(1),
                    active: false
                },
                &catalog
            ),
            "Category 1 deselected."
        );
        assert_eq!(
            event(&ProgressEvent::FiltersReplaced { filters: vec![] }, &catalog),
            "All categories deselected."
        );
    }
}
