//! Keypad session: the entry state a calculator front end keeps between
//! key presses, and the rules for digits, operators and evaluation.

use crate::app::display::format_number;
use crate::core::Dispatcher;
use crate::utils::error::CalcError;
use crate::utils::validation::parse_operand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Point,
    Operator(char),
    Equals,
    Clear,
    Delete,
}

impl Key {
    pub fn from_char(c: char) -> Result<Self, CalcError> {
        match c {
            '0'..='9' => Ok(Key::Digit(c)),
            '.' => Ok(Key::Point),
            '+' | '-' | '*' | '/' => Ok(Key::Operator(c)),
            '=' => Ok(Key::Equals),
            'c' | 'C' => Ok(Key::Clear),
            'd' | 'D' | '<' | '\u{8}' => Ok(Key::Delete),
            other => Err(CalcError::UnknownKey { key: other }),
        }
    }
}

/// What a key press produced, for the front end to render.
#[derive(Debug)]
pub enum Outcome {
    Updated,
    Selected {
        symbol: String,
        description: Option<&'static str>,
    },
    Evaluated(f64),
    Failed {
        error: CalcError,
        reset: bool,
    },
}

impl Outcome {
    /// Message worth showing to the user, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Updated | Outcome::Evaluated(_) => None,
            Outcome::Selected {
                description: Some(description),
                ..
            } => Some(format!("Operation: {}", description)),
            Outcome::Selected {
                symbol,
                description: None,
            } => Some(format!("Operation: unknown ('{}')", symbol)),
            Outcome::Failed { error, reset } => {
                let mut message = format!("Error: {}", error.user_friendly_message());
                if *reset {
                    message.push_str(" (entry cleared)");
                }
                Some(message)
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    dispatcher: Dispatcher,
    display: String,
    first_operand: f64,
    pending: Option<String>,
    new_number: bool,
    // 最近一次結果的完整值，顯示經過四捨五入時用於連續運算
    last_result: Option<f64>,
    default_text: String,
    precision: Option<usize>,
}

impl Session {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self::with_display(dispatcher, "0", None)
    }

    pub fn with_display(
        dispatcher: Dispatcher,
        default_text: impl Into<String>,
        precision: Option<usize>,
    ) -> Self {
        let default_text = default_text.into();
        Self {
            dispatcher,
            display: default_text.clone(),
            first_operand: 0.0,
            pending: None,
            new_number: true,
            last_result: None,
            default_text,
            precision,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn first_operand(&self) -> f64 {
        self.first_operand
    }

    pub fn is_new_number(&self) -> bool {
        self.new_number
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn press(&mut self, c: char) -> Outcome {
        match Key::from_char(c) {
            Ok(key) => self.apply(key),
            Err(error) => Outcome::Failed {
                error,
                reset: false,
            },
        }
    }

    /// Presses every non-whitespace character of `keys` in order.
    pub fn press_sequence(&mut self, keys: &str) -> Vec<Outcome> {
        keys.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| self.press(c))
            .collect()
    }

    pub fn apply(&mut self, key: Key) -> Outcome {
        match key {
            Key::Digit(d) => self.press_digit(d),
            Key::Point => self.press_digit('.'),
            Key::Operator(symbol) => self.select_operation(&symbol.to_string()),
            Key::Equals => self.evaluate(),
            Key::Clear => {
                self.clear();
                Outcome::Updated
            }
            Key::Delete => {
                self.delete_last();
                Outcome::Updated
            }
        }
    }

    /// `digit` is `0-9` or `.`; a point never starts a new number and
    /// never appears twice.
    pub fn press_digit(&mut self, digit: char) -> Outcome {
        if self.new_number {
            if digit != '.' {
                self.display = digit.to_string();
                self.new_number = false;
                self.last_result = None;
            }
        } else if digit != '.' || !self.display.contains('.') {
            self.display.push(digit);
        }
        Outcome::Updated
    }

    pub fn delete_last(&mut self) {
        self.last_result = None;
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = self.default_text.clone();
            self.new_number = true;
        }
    }

    pub fn clear(&mut self) {
        self.display = self.default_text.clone();
        self.first_operand = 0.0;
        self.pending = None;
        self.new_number = true;
        self.last_result = None;
    }

    /// Value the display stands for: the unrounded last result while it is
    /// still shown, otherwise the parsed display text.
    fn current_operand(&self) -> Result<f64, CalcError> {
        match self.last_result {
            Some(value) => Ok(value),
            None => parse_operand(&self.display),
        }
    }

    /// Takes the display as the first operand and remembers `symbol`.
    ///
    /// The symbol is not checked here; an unknown one surfaces as an
    /// invalid operation on [`Session::evaluate`].
    pub fn select_operation(&mut self, symbol: &str) -> Outcome {
        let first = match self.current_operand() {
            Ok(value) => value,
            Err(error) => return self.fail(error),
        };

        self.first_operand = first;
        self.pending = Some(symbol.to_string());
        self.new_number = true;

        Outcome::Selected {
            symbol: symbol.to_string(),
            description: self.dispatcher.registry().description(symbol),
        }
    }

    pub fn evaluate(&mut self) -> Outcome {
        let second = match self.current_operand() {
            Ok(value) => value,
            Err(error) => return self.fail(error),
        };
        // 未選擇運算時以空符號派送，由派送器回報無效運算
        let symbol = self.pending.clone().unwrap_or_default();

        match self.dispatcher.execute(&symbol, self.first_operand, second) {
            Ok(value) if !value.is_finite() => self.fail(CalcError::Overflow),
            Ok(value) => {
                self.display = format_number(value, self.precision);
                self.new_number = true;
                self.pending = None;
                self.last_result = Some(value);
                Outcome::Evaluated(value)
            }
            Err(error) => self.fail(error),
        }
    }

    fn fail(&mut self, error: CalcError) -> Outcome {
        let reset = error.resets_entry();
        if reset {
            tracing::info!("Entry reset after error: {}", error);
            self.clear();
        } else {
            tracing::debug!("Keypad error: {}", error);
        }
        Outcome::Failed { error, reset }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Dispatcher::with_builtins())
    }
}
