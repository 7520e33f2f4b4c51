use std::io::Cursor;

use tempconv::{
    convert, format_outcome, read_line, run_self_check, ConversionMode, History, MenuAction,
    Session, SessionState,
};

fn run_session(script: &str) -> (Session, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let mut session = Session::new();
    session.run(&mut input, &mut output).unwrap();
    (session, String::from_utf8(output).unwrap())
}

#[test]
fn self_check_output() {
    let mut output = Vec::new();
    run_self_check(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "--- Pruebas Iniciales ---",
            "PRUEBA FALLO: Error: -273.16 °C es físicamente imposible. La temperatura más baja posible es el cero absoluto.",
            "PRUEBA ÉXITO: -459.67 °F",
            "PRUEBA FALLO: Error: -1.0 K es físicamente imposible. La temperatura más baja posible es el cero absoluto.",
        ]
    );
}

#[test]
fn conversions_are_recorded() {
    let (session, output) = run_session("1\n100\n2\n-5\n3\nabc\n0\n");
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(
        session.history().entries(),
        [
            "OK: 100 → 212.00 °F",
            "FALLO: Error: -5.0 K es físicamente imposible. La temperatura más baja posible es el cero absoluto.",
            "FALLO: Error: 'abc' no es un número válido.",
        ]
    );
    assert!(output.contains("OK: 100 → 212.00 °F\n"));
    assert!(output.ends_with("Adiós!\n"));
}

#[test]
fn history_and_invalid_options_do_not_grow_history() {
    let (session, output) = run_session("4\n9\nfoo\n\n1\n0\n4\n7\n4\n0\n");
    assert_eq!(session.history().len(), 1);
    assert_eq!(output.matches("Opción inválida.").count(), 4);
    assert_eq!(output.matches("Vacío.").count(), 1);
    assert!(output.contains("=== Historial ===\n1. OK: 0 → 32.00 °F\n"));
}

#[test]
fn history_grows_by_one_per_step() {
    let mut input = Cursor::new(b"1\n20\n4\nx\n3\n50\n".to_vec());
    let mut output = Vec::new();
    let mut session = Session::new();

    let expected = [1, 1, 1, 2];
    for len in expected {
        assert_eq!(
            session.step(&mut input, &mut output).unwrap(),
            SessionState::Running
        );
        assert_eq!(session.history().len(), len);
    }
}

#[test]
fn exit_stops_without_further_prompts() {
    let (session, output) = run_session("1\n25\n0\n1\n30\n");
    assert_eq!(session.history().len(), 1);
    assert_eq!(output.matches("Opción: ").count(), 2);
    assert!(!output.contains("30"));
    assert!(output.ends_with("Adiós!\n"));
}

#[test]
fn stopped_session_ignores_further_steps() {
    let mut input = Cursor::new(b"0\n1\n5\n".to_vec());
    let mut output = Vec::new();
    let mut session = Session::new();
    assert_eq!(
        session.step(&mut input, &mut output).unwrap(),
        SessionState::Stopped
    );
    let written = output.len();
    assert_eq!(
        session.step(&mut input, &mut output).unwrap(),
        SessionState::Stopped
    );
    assert_eq!(output.len(), written);
}

#[test]
fn end_of_input_stops_gracefully() {
    let (session, output) = run_session("");
    assert_eq!(session.state(), SessionState::Stopped);
    assert!(session.history().is_empty());
    assert!(!output.contains("Adiós!"));
}

#[test]
fn missing_value_is_invalid_input() {
    let (session, _) = run_session("2\n");
    assert_eq!(
        session.history().entries(),
        ["FALLO: Error: '' no es un número válido."]
    );
}

#[test]
fn invalid_utf8_does_not_end_the_session() {
    let mut input = Cursor::new(b"1\n\xff\xfe\n\xff\n4\n0\n".to_vec());
    let mut output = Vec::new();
    let mut session = Session::new();
    session.run(&mut input, &mut output).unwrap();

    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(
        session.history().entries(),
        ["FALLO: Error: '\u{FFFD}\u{FFFD}' no es un número válido."]
    );
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Opción inválida."));
    assert!(output.contains("=== Historial ===\n1. FALLO"));
    assert!(output.ends_with("Adiós!\n"));
}

#[test]
fn windows_line_endings() {
    let (session, _) = run_session("1\r\n-273.15\r\n0\r\n");
    assert_eq!(session.history().entries(), ["OK: -273.15 → -459.67 °F"]);
    assert_eq!(session.state(), SessionState::Stopped);
}

#[test]
fn menu_actions() {
    assert_eq!(
        MenuAction::parse("1"),
        MenuAction::Convert(ConversionMode::CelsiusToFahrenheit)
    );
    assert_eq!(
        MenuAction::parse(" 3 "),
        MenuAction::Convert(ConversionMode::FahrenheitToCelsius)
    );
    assert_eq!(MenuAction::parse("4"), MenuAction::ShowHistory);
    assert_eq!(MenuAction::parse("0"), MenuAction::Exit);
    assert_eq!(MenuAction::parse("5"), MenuAction::Invalid);
    assert_eq!(MenuAction::parse("-1"), MenuAction::Invalid);
    assert_eq!(MenuAction::parse("uno"), MenuAction::Invalid);
}

#[test]
fn outcome_formatting() {
    let raw = "-40";
    let ok = convert(raw, ConversionMode::CelsiusToFahrenheit);
    assert_eq!(format_outcome(raw, &ok), "OK: -40 → -40.00 °F");
    let fail = convert("x", ConversionMode::CelsiusToFahrenheit);
    assert_eq!(
        format_outcome("x", &fail),
        "FALLO: Error: 'x' no es un número válido."
    );
}

#[test]
fn history_keeps_insertion_order() {
    let mut history = History::new();
    assert!(history.is_empty());
    history.push("a");
    history.push(String::from("b"));
    assert_eq!(history.entries(), ["a", "b"]);
}

#[test]
fn read_line_strips_terminators() {
    let mut input = Cursor::new(b"abc\r\n\nlast".to_vec());
    assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("abc"));
    assert_eq!(read_line(&mut input).unwrap().as_deref(), Some(""));
    assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("last"));
    assert_eq!(read_line(&mut input).unwrap(), None);

    let mut input = Cursor::new(b"a\xffb\n".to_vec());
    assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("a\u{FFFD}b"));
}
