use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use services::QuizFlow;

use crate::input::{MenuChoice, parse_menu_choice, parse_selection};
use crate::views::{render_feedback, render_menu, render_question, render_results};
use crate::vm::{SessionPhase, start_session};

/// Interactive terminal front end for the quiz flow.
///
/// Owns no session state between runs; each chosen unit gets a fresh
/// session vm that is dropped when the learner returns to the menu.
pub struct QuizApp {
    flow: QuizFlow,
}

impl QuizApp {
    #[must_use]
    pub fn new(flow: QuizFlow) -> Self {
        Self { flow }
    }

    /// Run the interactive loop on stdin/stdout until the learner quits.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` when the terminal streams fail.
    pub async fn run(&self) -> std::io::Result<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        self.run_with(reader, &mut stdout).await
    }

    /// Drive the loop over any line source and sink. Tests script this.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` when reading or writing fails.
    pub async fn run_with<R, W>(&self, mut reader: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        loop {
            write!(out, "{}", render_menu(self.flow.units()))?;
            out.flush()?;

            let Some(line) = read_line(&mut reader).await? else {
                return Ok(());
            };
            match parse_menu_choice(&line, self.flow.units().len()) {
                Ok(MenuChoice::Quit) => {
                    writeln!(out, "Bye!")?;
                    return Ok(());
                }
                Ok(MenuChoice::Unit(index)) => {
                    if !self.run_unit(&mut reader, out, index).await? {
                        return Ok(());
                    }
                }
                Err(err) => writeln!(out, "{}", err.message())?,
            }
        }
    }

    /// One unit from loading to results. Returns `false` when input ended
    /// and the app should exit instead of re-rendering the menu.
    async fn run_unit<R, W>(
        &self,
        reader: &mut R,
        out: &mut W,
        index: usize,
    ) -> std::io::Result<bool>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let entry = &self.flow.units()[index];
        writeln!(out, "\nLoading {}...", entry.label())?;
        out.flush()?;

        let unit = entry.unit().clone();
        let mut vm = match start_session(&self.flow, &unit).await {
            Ok(vm) => vm,
            Err(err) => {
                writeln!(out, "{}", err.message())?;
                return Ok(true);
            }
        };

        loop {
            match vm.phase() {
                SessionPhase::Question => {
                    let Some(question) = vm.question() else {
                        return Ok(true);
                    };
                    write!(out, "{}", render_question(&question))?;

                    let selected = loop {
                        write!(out, "Your answer: ")?;
                        out.flush()?;
                        let Some(line) = read_line(reader).await? else {
                            return Ok(false);
                        };
                        let Some(options) = vm.current_options() else {
                            return Ok(true);
                        };
                        match parse_selection(&line, options) {
                            Ok(selected) => break selected,
                            Err(err) => writeln!(out, "{}", err.message())?,
                        }
                    };

                    if let Err(err) = vm.submit(&selected) {
                        writeln!(out, "{}", err.message())?;
                        return Ok(true);
                    }
                }
                SessionPhase::Feedback(feedback) => {
                    write!(out, "{}", render_feedback(feedback))?;
                    write!(out, "Press Enter to continue.")?;
                    out.flush()?;

                    if read_line(reader).await?.is_none() {
                        return Ok(false);
                    }
                    if let Err(err) = vm.proceed() {
                        writeln!(out, "{}", err.message())?;
                        return Ok(true);
                    }
                }
                SessionPhase::Results(results) => {
                    write!(out, "{}", render_results(results))?;
                    write!(out, "Press Enter to return to the menu.")?;
                    out.flush()?;

                    if read_line(reader).await?.is_none() {
                        return Ok(false);
                    }
                    return Ok(true);
                }
            }
        }
    }
}

async fn read_line<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let read = reader.read_line(&mut line).await?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
