use neoncore::{
    command_for, format_result, AppState, Command, ExpressionEngine, KeyInput, Mode,
    ScientificFunction, ThemeStore, ERROR_MARKER,
};

fn type_keys(state: &mut AppState, keys: &str) {
    for c in keys.chars() {
        let key = match c {
            '=' => KeyInput::Enter,
            '<' => KeyInput::Backspace,
            other => KeyInput::Char(other),
        };
        if let Some(cmd) = command_for(key) {
            state.update(cmd);
        }
    }
}

fn fresh_state(dir: &tempfile::TempDir) -> AppState {
    AppState::new(ThemeStore::new(dir.path().join("theme.json")))
}

#[test]
fn keyboard_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = fresh_state(&dir);

    type_keys(&mut state, "2+3*4=");
    assert_eq!(state.display(), "14");

    type_keys(&mut state, "/3=");
    assert_eq!(state.display(), "4.6666666667");

    type_keys(&mut state, "<<<<<<<<<<<<<<<<");
    assert_eq!(state.display(), "");

    type_keys(&mut state, "(1.5+0.5)^3=");
    assert_eq!(state.display(), "8");

    type_keys(&mut state, "+=");
    assert_eq!(state.display(), ERROR_MARKER);

    type_keys(&mut state, "7=");
    assert_eq!(state.display(), "7");
}

#[test]
fn valid_expressions_evaluate_correctly() {
    let cases = [
        ("2+3*4", "14"),
        ("10/4", "2.5"),
        ("0.1+0.2", "0.3"),
        ("-(3-5)*2", "4"),
        ("2^10", "1024"),
        ("2**0.5", "1.4142135624"),
        ("1/3*3", "1"),
        ("((7))", "7"),
        ("6/3", "2"),
    ];
    for (input, expected) in cases {
        let mut engine = ExpressionEngine::new();
        engine.append(input);
        assert_eq!(engine.evaluate(), expected, "{input}");
    }
}

#[test]
fn malformed_expressions_show_error() {
    for input in ["", "3+", "5/0", "2(3)", "4**", ")(", "1.2.3", "05"] {
        let mut engine = ExpressionEngine::new();
        engine.append(input);
        assert_eq!(engine.evaluate(), ERROR_MARKER, "{input}");
        assert_eq!(engine.buffer(), "", "{input}");
    }
}

#[test]
fn scientific_panel_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = fresh_state(&dir);
    state.update(Command::SelectMode(Mode::Scientific));

    type_keys(&mut state, "5");
    state.update(Command::Invoke(ScientificFunction::Fact));
    assert_eq!(state.display(), "120");

    state.update(Command::Invoke(ScientificFunction::Inv));
    assert_eq!(state.display(), "0.0083333333");

    state.update(Command::Clear);
    type_keys(&mut state, "2.5");
    state.update(Command::Invoke(ScientificFunction::Fact));
    assert_eq!(state.display(), ERROR_MARKER);

    state.update(Command::Invoke(ScientificFunction::Pi));
    type_keys(&mut state, "*2=");
    assert_eq!(state.display(), "6.2831853072");
}

#[test]
fn function_ids_parse() {
    let f: ScientificFunction = "ten_pow".parse().unwrap();
    let mut engine = ExpressionEngine::new();
    engine.append("2");
    assert_eq!(engine.apply_function(f), "100");
    assert!("unknown".parse::<ScientificFunction>().is_err());
}

#[test]
fn formatting_survives_reparse() {
    for value in [0.30000000004, 5.0, -7.25, 1234567.891, 1e-3] {
        let shown = format_result(value);
        let back: f64 = shown.parse().unwrap();
        assert!((back - value).abs() <= 1e-10, "{value} -> {shown}");
    }
}

#[test]
fn theme_preference_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs").join("theme.json");

    assert!(ThemeStore::new(&path).load());
    ThemeStore::new(&path).save(false).unwrap();
    assert!(!ThemeStore::new(&path).load());

    std::fs::write(&path, "corrupt").unwrap();
    assert!(ThemeStore::new(&path).load());
}

#[test]
fn theme_toggle_is_seen_by_next_launch() {
    let dir = tempfile::tempdir().unwrap();
    let mut first = fresh_state(&dir);
    first.update(Command::ToggleTheme);
    drop(first);

    let second = fresh_state(&dir);
    assert!(!second.is_dark());
}
