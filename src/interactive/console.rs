//! Line-oriented console adapters
//!
//! A [`Console`] wraps one reader and one writer (normally locked stdin and
//! stdout) and hands out the three interactive collaborators that share it:
//! a rater, a presenter and a continue prompt.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::error::EvaluationError;
use crate::fitness::traits::{parse_rating, EvaluationContext, FitnessProvider, Score};
use crate::interactive::traits::{ContinueSignal, Presenter};
use crate::population::individual::Individual;
use crate::population::record::FitnessRecord;

/// Shared terminal state
pub struct Console<R, W> {
    reader: R,
    writer: W,
    rating_hint: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            rating_hint: "0-5".to_string(),
        }
    }

    /// Set the rating range shown in the prompt (display only)
    pub fn with_rating_hint(mut self, hint: impl Into<String>) -> Self {
        self.rating_hint = hint.into();
        self
    }

    /// Split into rater, presenter and continue prompt sharing this console
    pub fn split(self) -> (ConsoleRater<R, W>, ConsolePresenter<R, W>, ConsolePrompt<R, W>) {
        let shared = Rc::new(RefCell::new(self));
        (
            ConsoleRater {
                console: Rc::clone(&shared),
            },
            ConsolePresenter {
                console: Rc::clone(&shared),
            },
            ConsolePrompt { console: shared },
        )
    }

    /// Read one line; `Ok(None)` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn rate(
        &mut self,
        individual: &Individual,
        context: &EvaluationContext,
    ) -> Result<Score, EvaluationError> {
        let failed = |err: io::Error| EvaluationError::Failed(err.to_string());

        writeln!(
            self.writer,
            "Candidate {} of {}: {}",
            context.presentation_index,
            context.population_size,
            individual.genome
        )
        .map_err(failed)?;
        write!(
            self.writer,
            "Rating candidate {} ({}): ",
            context.presentation_index, self.rating_hint
        )
        .map_err(failed)?;
        self.writer.flush().map_err(failed)?;

        match self.read_line().map_err(failed)? {
            Some(line) => parse_rating(&line),
            None => Err(EvaluationError::Failed("input closed".to_string())),
        }
    }

    fn present(&mut self, record: &FitnessRecord, rank: usize) -> io::Result<()> {
        writeln!(
            self.writer,
            "Proposition {} (candidate {}, score {}): {}",
            rank + 1,
            record.presentation_index,
            record.score,
            record.individual.genome
        )?;
        self.writer.flush()
    }

    fn ask(&mut self, generation: usize) -> io::Result<bool> {
        write!(
            self.writer,
            "Generation {} finished. Continue? [Y/n] ",
            generation
        )?;
        self.writer.flush()?;
        Ok(match self.read_line()? {
            Some(line) => !line.trim().eq_ignore_ascii_case("n"),
            None => false,
        })
    }
}

/// Fitness provider that asks for a rating on the console
pub struct ConsoleRater<R, W> {
    console: Rc<RefCell<Console<R, W>>>,
}

impl<R: BufRead, W: Write> FitnessProvider for ConsoleRater<R, W> {
    fn evaluate(
        &mut self,
        individual: &Individual,
        context: &EvaluationContext,
    ) -> Result<Score, EvaluationError> {
        self.console.borrow_mut().rate(individual, context)
    }
}

/// Presenter that prints the best candidates
pub struct ConsolePresenter<R, W> {
    console: Rc<RefCell<Console<R, W>>>,
}

impl<R: BufRead, W: Write> Presenter for ConsolePresenter<R, W> {
    fn show(&mut self, record: &FitnessRecord, rank: usize) {
        if let Err(err) = self.console.borrow_mut().present(record, rank) {
            log::warn!("Could not present {}: {}", record.id(), err);
        }
    }
}

/// Continue prompt; anything but `n` continues, end of input stops
pub struct ConsolePrompt<R, W> {
    console: Rc<RefCell<Console<R, W>>>,
}

impl<R: BufRead, W: Write> ContinueSignal for ConsolePrompt<R, W> {
    fn ask(&mut self, generation: usize) -> bool {
        match self.console.borrow_mut().ask(generation) {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("Could not read continue answer, stopping: {}", err);
                false
            }
        }
    }
}
