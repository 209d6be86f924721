use crate::menu::{parse_choice, parse_toppings, BeverageFactory, MainChoice, MenuError};
use crate::model::{Order, Topping};
use crate::service::OrderService;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Where the controller is in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    CoffeeMenu,
    Exit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The customer picked the exit action.
    Exit,
    /// Input closed before the customer exited.
    EndOfInput,
}

/// Outcome of [`MenuController::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub orders_placed: usize,
    pub ended_by: SessionEnd,
}

/// Drives the menu over any line reader and writer.
///
/// The binary runs it on locked stdin/stdout; tests run it on byte slices.
pub struct MenuController<R, W> {
    input: R,
    output: W,
    factory: BeverageFactory,
    service: OrderService,
    customer_name: String,
    orders_placed: usize,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(input: R, output: W, customer_name: impl Into<String>) -> Self {
        Self {
            input,
            output,
            factory: BeverageFactory::default(),
            service: OrderService::default(),
            customer_name: customer_name.into(),
            orders_placed: 0,
        }
    }

    /// Replaces the default factory, e.g. to serve a shorter menu.
    pub fn with_factory(mut self, factory: BeverageFactory) -> Self {
        self.factory = factory;
        self
    }

    /// Runs the state machine until the customer exits or input ends.
    ///
    /// # Errors
    /// Only console I/O failures end the session with an error; unrecognized
    /// input is reported and re-prompted.
    pub fn run(&mut self) -> Result<SessionSummary, MenuError> {
        let mut state = MenuState::MainMenu;
        loop {
            debug!(?state, "Entering state");
            let next = match state {
                MenuState::MainMenu => self.main_menu()?,
                MenuState::CoffeeMenu => self.coffee_menu()?,
                MenuState::Exit => {
                    writeln!(self.output, "Exiting Coffee Shop. Thank you!")?;
                    self.output.flush()?;
                    return Ok(self.summary(SessionEnd::Exit));
                }
            };

            match next {
                Some(next) => state = next,
                None => {
                    info!(?state, "Input closed");
                    self.output.flush()?;
                    return Ok(self.summary(SessionEnd::EndOfInput));
                }
            }
        }
    }

    /// Returns `None` when input is exhausted.
    fn main_menu(&mut self) -> Result<Option<MenuState>, MenuError> {
        writeln!(self.output, "welcome to make your choice")?;
        writeln!(self.output, "1. Order Coffee")?;
        writeln!(self.output, "2. Exit")?;
        writeln!(self.output, "Choose an action:")?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };

        match parse_choice(&line) {
            Ok(MainChoice::Order) => Ok(Some(MenuState::CoffeeMenu)),
            Ok(MainChoice::Exit) => Ok(Some(MenuState::Exit)),
            Err(e) => {
                debug!(error = %e, "Rejected main-menu input");
                writeln!(self.output, "Invalid choice. Try again.")?;
                Ok(Some(MenuState::MainMenu))
            }
        }
    }

    /// Handles one coffee-menu prompt. Returns `None` when input is exhausted.
    fn coffee_menu(&mut self) -> Result<Option<MenuState>, MenuError> {
        writeln!(
            self.output,
            "Choose a coffee type ({}) or type 'exit' to go back to the main menu: ",
            self.factory.keywords().join("/")
        )?;

        let Some(keyword) = self.read_line()? else {
            return Ok(None);
        };
        let keyword = keyword.trim();

        if keyword.eq_ignore_ascii_case("exit") {
            return Ok(Some(MenuState::MainMenu));
        }

        let Some(beverage) = self.factory.create(keyword) else {
            warn!(keyword, "Invalid coffee type");
            writeln!(self.output, "Invalid coffee type. Try again.")?;
            return Ok(Some(MenuState::CoffeeMenu));
        };

        let examples: Vec<String> = Topping::values()
            .iter()
            .map(|t| t.name().to_lowercase())
            .collect();
        writeln!(
            self.output,
            "Enter toppings separated by commas (e.g., {}): ",
            examples.join(", ")
        )?;

        let Some(toppings_line) = self.read_line()? else {
            return Ok(None);
        };

        let parsed = parse_toppings(&toppings_line);
        for rejected in &parsed.rejected {
            writeln!(self.output, "{}", rejected)?;
        }

        let order = Order::new(
            self.customer_name.as_str(),
            beverage.with_toppings(parsed.toppings),
        );
        self.service.place_order(&mut self.output, &order)?;
        self.orders_placed += 1;

        Ok(Some(MenuState::CoffeeMenu))
    }

    /// Reads one line without its line terminator. `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>, MenuError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn summary(&self, ended_by: SessionEnd) -> SessionSummary {
        SessionSummary {
            orders_placed: self.orders_placed,
            ended_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> (SessionSummary, String) {
        let mut out = Vec::new();
        let summary = MenuController::new(input.as_bytes(), &mut out, "Customer")
            .run()
            .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_from_main_menu() {
        let (summary, out) = run_session("2\n");
        assert_eq!(summary.ended_by, SessionEnd::Exit);
        assert_eq!(summary.orders_placed, 0);
        assert!(out.ends_with("Exiting Coffee Shop. Thank you!\n"));
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let (summary, out) = run_session("1\r\nlatte\r\n\r\nexit\r\n2\r\n");
        assert_eq!(summary.orders_placed, 1);
        assert!(out.contains("Customer ordered a Latte\n"));
        assert!(!out.contains("Invalid"));
    }

    #[test]
    fn test_end_of_input_mid_order() {
        let (summary, out) = run_session("1\nespresso\n");
        assert_eq!(summary.ended_by, SessionEnd::EndOfInput);
        assert_eq!(summary.orders_placed, 0);
        assert!(!out.contains("ordered a"));
    }
}
