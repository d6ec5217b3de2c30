//! Line-based guided walkthrough over a started `HeronWidget` session.

use anyhow::{Context, Result};
use heron::prelude::*;
use std::io::{BufRead, Write};

/// Print revealed steps and, when a scored step is active, the prompt.
fn render<W: Write>(session: &DerivationSession, out: &mut W) -> Result<()> {
    writeln!(out)?;
    for (i, step) in session.revealed_steps().iter().enumerate() {
        let marker = if i == session.cursor() { ">" } else { " " };
        writeln!(out, "{marker} {}", step.label)?;
        for line in step.formula.lines() {
            writeln!(out, "    {line}")?;
        }
        if session.answer_revealed(i) {
            writeln!(out, "    = {}", step.answer_display())?;
        }
    }
    match (session.state(), session.current_field()) {
        (SequencerState::Complete, _) => writeln!(
            out,
            "Done: area = {} (back/forward/quit)",
            session.result().area_display()
        )?,
        (_, Some(field)) if !session.progress(field).completed => {
            writeln!(out, "Enter {field} (or skip):")?
        }
        _ => writeln!(out, "(back/forward/quit)")?,
    }
    Ok(())
}

/// Drive the session from `input` until `quit` or EOF.
pub fn run<R: BufRead, W: Write>(w: &mut HeronWidget, input: R, out: &mut W) -> Result<()> {
    if let Some(s) = w.session() {
        render(s, out)?;
    }
    for line in input.lines() {
        let line = line.context("reading stdin")?;
        let cmd = line.trim();
        let field = w.session().and_then(DerivationSession::current_field);
        match cmd {
            "" => continue,
            "quit" | "q" => break,
            "back" | "b" => w.navigate(Direction::Back),
            "forward" | "f" => w.navigate(Direction::Forward),
            "skip" | "s" => match field {
                Some(f) => match w.skip_step(f) {
                    Ok(()) => writeln!(out, "skipped")?,
                    Err(e) => writeln!(out, "{e}")?,
                },
                None => writeln!(out, "nothing to skip")?,
            },
            answer => match field {
                Some(f) => match w.submit_step_answer(f, answer) {
                    Ok(StepOutcome::Correct) => writeln!(out, "correct")?,
                    Ok(StepOutcome::Incorrect) => writeln!(out, "incorrect, try again")?,
                    Err(e) => writeln!(out, "{e}")?,
                },
                None => writeln!(out, "no answer expected here")?,
            },
        }
        tracing::debug!(cmd, state = ?w.state(), "tutor");
        if let Some(s) = w.session() {
            render(s, out)?;
        }
    }
    out.flush()?;
    Ok(())
}
