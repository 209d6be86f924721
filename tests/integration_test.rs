use coffee_order::menu::{BeverageFactory, MenuController, MenuError, SessionEnd, SessionSummary};
use coffee_order::model::BeverageKind;
use std::io::{self, BufRead, Read, Write};

/// Runs a full menu session over `input` and returns the summary and transcript.
fn run_session(input: &str, customer: &str) -> (SessionSummary, String) {
    let mut out = Vec::new();
    let summary = MenuController::new(input.as_bytes(), &mut out, customer)
        .run()
        .expect("session over in-memory I/O should not fail");
    (summary, String::from_utf8(out).expect("transcript is UTF-8"))
}

/// Byte offset of `needle` in `haystack`, failing the test if absent.
fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("expected {:?} in transcript:\n{}", needle, haystack))
}

/// Full end-to-end order: espresso with caramel, then back out and exit.
#[test]
fn test_espresso_with_caramel_end_to_end() {
    let (summary, out) = run_session("1\nespresso\ncaramel\nexit\n2\n", "Customer");

    assert_eq!(
        summary,
        SessionSummary {
            orders_placed: 1,
            ended_by: SessionEnd::Exit
        }
    );

    // Confirmation, brew and toppings lines appear in that order
    let ordered = position(&out, "Customer ordered a Espresso with Caramel");
    let brewing = position(&out, "Brewing Espresso with Caramel for Customer");
    let adding = position(&out, "Adding toppings: Caramel");
    assert!(ordered < brewing && brewing < adding);

    assert!(out.ends_with("Exiting Coffee Shop. Thank you!\n"));
}

/// An unknown drink is rejected, nothing is recorded or brewed, and the coffee menu asks again.
#[test]
fn test_unknown_beverage_keeps_coffee_menu_open() {
    let (summary, out) = run_session("1\nmocha\nexit\n2\n", "Customer");

    assert_eq!(summary.orders_placed, 0);
    assert!(out.contains("Invalid coffee type. Try again."));
    assert!(!out.contains("ordered a"));
    assert!(!out.contains("Brewing"));

    // The coffee prompt is shown again after the rejection
    let rejected = position(&out, "Invalid coffee type. Try again.");
    assert!(out[rejected..].contains("Choose a coffee type (espresso/latte)"));
}

/// Text, out-of-range numbers and blank lines at the main menu all re-prompt.
#[test]
fn test_non_numeric_main_menu_input_reprompts() {
    let (summary, out) = run_session("abc\n7\n\n2\n", "Customer");

    assert_eq!(summary.ended_by, SessionEnd::Exit);
    assert_eq!(out.matches("Invalid choice. Try again.").count(), 3);
    assert_eq!(out.matches("Choose an action:").count(), 4);
}

/// Unknown toppings are reported and dropped; the known ones still go on the order.
#[test]
fn test_invalid_toppings_warn_and_order_still_placed() {
    let (summary, out) = run_session("1\nLATTE\nfoo, Whipped Cream , bar\nexit\n2\n", "Customer");

    assert_eq!(summary.orders_placed, 1);
    assert!(out.contains("Invalid topping: foo\n"));
    assert!(out.contains("Invalid topping: bar\n"));
    assert!(out.contains("Customer ordered a Latte with Whipped Cream\n"));
    assert!(out.contains("Adding toppings: Whipped Cream\n"));

    // Warnings are printed before the order is confirmed
    assert!(position(&out, "Invalid topping: bar") < position(&out, "ordered a"));
}

/// A blank toppings line places a plain order with no "Adding toppings" line.
#[test]
fn test_order_without_toppings_has_no_toppings_line() {
    let (_, out) = run_session("1\nlatte\n\nexit\n2\n", "Customer");

    assert!(out.contains("Customer ordered a Latte\n"));
    assert!(out.contains("Brewing Latte for Customer\n"));
    assert!(!out.contains("Adding toppings"));
    assert!(!out.contains("Invalid topping"));
}

/// The coffee menu keeps taking orders until the customer types `exit`.
#[test]
fn test_several_orders_in_one_visit() {
    let input = "1\nespresso\nwhipped cream, caramel\nlatte\ncaramel\nEXIT\n2\n";
    let (summary, out) = run_session(input, "Grace");

    assert_eq!(summary.orders_placed, 2);
    assert!(out.contains("Grace ordered a Espresso with Whipped Cream with Caramel\n"));
    assert!(out.contains("Adding toppings: Whipped Cream Caramel\n"));
    assert!(out.contains("Grace ordered a Latte with Caramel\n"));
}

/// Closed input ends the session cleanly, keeping the orders already placed.
#[test]
fn test_end_of_input_ends_session_without_farewell() {
    let (summary, out) = run_session("1\nespresso\ncaramel\n", "Customer");

    assert_eq!(
        summary,
        SessionSummary {
            orders_placed: 1,
            ended_by: SessionEnd::EndOfInput
        }
    );
    assert!(!out.contains("Exiting Coffee Shop"));
}

/// A factory serving only lattes rejects espresso and lists only `latte` in the prompt.
#[test]
fn test_restricted_menu_rejects_missing_kind() {
    let mut out = Vec::new();
    let input = "1\nespresso\nlatte\n\nexit\n2\n";
    let summary = MenuController::new(input.as_bytes(), &mut out, "Customer")
        .with_factory(BeverageFactory::new(vec![BeverageKind::Latte]))
        .run()
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(summary.orders_placed, 1);
    assert!(out.contains("Choose a coffee type (latte)"));
    assert!(out.contains("Invalid coffee type. Try again."));
    assert!(out.contains("Customer ordered a Latte\n"));
}

/// Writer whose every write fails, like stdout after the terminal goes away.
struct ClosedOutput;

impl Write for ClosedOutput {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reader whose every read fails.
struct FailingInput;

impl Read for FailingInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "input device failed"))
    }
}

impl BufRead for FailingInput {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::new(io::ErrorKind::Other, "input device failed"))
    }

    fn consume(&mut self, _amt: usize) {}
}

/// A failing writer ends the session with an I/O error instead of looping.
#[test]
fn test_output_failure_ends_session_with_io_error() {
    let result = MenuController::new("1\n".as_bytes(), ClosedOutput, "Customer").run();

    match result {
        Err(MenuError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected MenuError::Io, got {:?}", other),
    }
}

/// A failing reader surfaces as an I/O error and writes only the first prompt.
#[test]
fn test_input_failure_ends_session_with_io_error() {
    let mut out = Vec::new();
    let result = MenuController::new(FailingInput, &mut out, "Customer").run();

    assert!(matches!(result, Err(MenuError::Io(_))));
    let out = String::from_utf8(out).unwrap();
    assert!(out.ends_with("Choose an action:\n"));
    assert!(!out.contains("Invalid choice"));
}

/// Surrounding whitespace on the coffee keyword is ignored.
#[test]
fn test_padded_keyword_still_orders() {
    let (summary, out) = run_session("1\n  Espresso \ncaramel\nexit\n2\n", "Customer");

    assert_eq!(summary.orders_placed, 1);
    assert!(out.contains("Customer ordered a Espresso with Caramel\n"));
    assert!(!out.contains("Invalid coffee type"));
}
