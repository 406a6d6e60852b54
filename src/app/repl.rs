use crate::app::session::{Outcome, Session};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const HELP: &str = "keys: 0-9 . + - * / = C (clear) D or < (delete)\n\
commands: :list  :op <symbol>  :clear  :help  :quit";

/// Line-oriented keypad. Each line is either a key sequence or a `:command`.
pub struct Repl<R: BufRead, W: Write> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `:quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.print_operations()?;
        writeln!(self.output, "{}", HELP)?;
        self.print_display()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(command) = trimmed.strip_prefix(':') {
                if !self.run_command(command)? {
                    break;
                }
            } else {
                let outcomes = self.session.press_sequence(trimmed);
                self.print_outcomes(&outcomes)?;
            }
            self.print_display()?;
        }

        tracing::debug!("Keypad session finished");
        Ok(())
    }

    // 回傳 false 表示結束
    fn run_command(&mut self, command: &str) -> Result<bool> {
        let mut parts = command.split_whitespace();
        match parts.next() {
            Some("q") | Some("quit") | Some("exit") => return Ok(false),
            Some("list") => self.print_operations()?,
            Some("clear") => self.session.clear(),
            Some("help") => writeln!(self.output, "{}", HELP)?,
            Some("op") => match parts.next() {
                Some(symbol) => {
                    let outcome = self.session.select_operation(symbol);
                    self.print_outcomes(std::slice::from_ref(&outcome))?;
                }
                None => writeln!(self.output, "usage: :op <symbol>")?,
            },
            _ => writeln!(self.output, "Unknown command ':{}', try :help", command)?,
        }
        Ok(true)
    }

    fn print_operations(&mut self) -> Result<()> {
        let operations = self.session.dispatcher().registry().list();
        let labels: Vec<String> = operations
            .iter()
            .map(|op| format!("{} {}", op.symbol(), op.description()))
            .collect();
        writeln!(self.output, "Operations: {}", labels.join(" | "))?;
        Ok(())
    }

    fn print_outcomes(&mut self, outcomes: &[Outcome]) -> Result<()> {
        for message in outcomes.iter().filter_map(Outcome::message) {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    fn print_display(&mut self) -> Result<()> {
        writeln!(self.output, "[ {} ]", self.session.display())?;
        self.output.flush()?;
        Ok(())
    }
}
