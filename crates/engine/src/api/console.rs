//! Line-oriented front end over a [`SwipeSession`].
//!
//! Every command goes through the session API; the console only parses
//! input and prints views.

use std::io::{self, Write};

use deeper_domain::{CommitOutcome, RejectReason, SwipeDirection};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::command::{Command, HELP};
use super::render;
use crate::use_cases::{ReleaseOutcome, SwipeSession};

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<W> {
    out: W,
    stack_depth: usize,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, stack_depth: usize) -> Self {
        Self { out, stack_depth }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Read commands until `quit` or end of input.
    pub async fn run<R>(&mut self, session: &mut SwipeSession, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.show_stack(session)?;
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(session, command)?,
                Err(e) => {
                    writeln!(self.out, "{e}")?;
                    Flow::Continue
                }
            };
            self.out.flush()?;
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, session: &mut SwipeSession, command: Command) -> io::Result<Flow> {
        tracing::debug!(command = command.name(), "Console command");

        match command {
            Command::Queue => self.show_stack(session)?,
            Command::Right => {
                let outcome = session.swipe_head(SwipeDirection::Right);
                self.show_commit(session, &outcome)?;
            }
            Command::Left => {
                let outcome = session.swipe_head(SwipeDirection::Left);
                self.show_commit(session, &outcome)?;
            }
            Command::Drag(release) => match session.release(release) {
                ReleaseOutcome::Cancelled => writeln!(self.out, "Card returns to the stack.")?,
                ReleaseOutcome::Swiped(outcome) => self.show_commit(session, &outcome)?,
            },
            Command::Toggle(category_id) => {
                if session.catalog().category(category_id).is_none() {
                    writeln!(self.out, "No category {category_id}; see `categories`.")?;
                } else {
                    let event = session.toggle_category(category_id);
                    writeln!(self.out, "{}", render::event(&event, session.catalog()))?;
                    self.show_stack(session)?;
                }
            }
            Command::All => {
                let event = session.select_all();
                writeln!(self.out, "{}", render::event(&event, session.catalog()))?;
                self.show_stack(session)?;
            }
            Command::Clear => {
                let event = session.clear_all();
                writeln!(self.out, "{}", render::event(&event, session.catalog()))?;
                self.show_stack(session)?;
            }
            Command::Journal => {
                let view = session.journal();
                write!(self.out, "{}", render::journal(&view))?;
            }
            Command::Requeue(question_id) => match session.move_to_top(question_id) {
                Some(event) => {
                    writeln!(self.out, "{}", render::event(&event, session.catalog()))?;
                    let visible = session.queue().contains(question_id);
                    if !visible {
                        writeln!(
                            self.out,
                            "It stays hidden until its category is selected and has free questions left."
                        )?;
                    }
                }
                None if session.catalog().question(question_id).is_none() => {
                    writeln!(self.out, "No question {question_id}.")?;
                }
                None => writeln!(self.out, "#{question_id} is not saved for later.")?,
            },
            Command::Categories => {
                let text = render::categories(session.catalog(), session.progress(), session.policy());
                write!(self.out, "{text}")?;
            }
            Command::Flush => match session.flush() {
                Ok(()) => writeln!(self.out, "Progress saved.")?,
                Err(e) => writeln!(self.out, "Still unable to save progress: {e}")?,
            },
            Command::Reset => {
                if let Err(e) = session.reset() {
                    writeln!(self.out, "Progress cleared here, but storage failed: {e}")?;
                }
                writeln!(self.out, "Progress reset.")?;
                self.show_stack(session)?;
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        if session.has_pending_write() {
            writeln!(self.out, "(progress not saved yet; `flush` to retry)")?;
        }
        Ok(Flow::Continue)
    }

    fn show_commit(&mut self, session: &mut SwipeSession, outcome: &CommitOutcome) -> io::Result<()> {
        match outcome {
            CommitOutcome::Committed(event) => {
                writeln!(self.out, "{}", render::event(event, session.catalog()))?;
                self.show_stack(session)
            }
            CommitOutcome::Rejected(RejectReason::EmptyQueue) => {
                writeln!(self.out, "No card to swipe.")
            }
            CommitOutcome::Rejected(reason) => {
                writeln!(self.out, "Swipe ignored ({reason:?}).")
            }
        }
    }

    fn show_stack(&mut self, session: &mut SwipeSession) -> io::Result<()> {
        let depth = self.stack_depth;
        let queue = session.queue().clone();
        let text = render::stack(&queue, session.catalog(), session.progress(), depth);
        write!(self.out, "{text}")
    }
}
