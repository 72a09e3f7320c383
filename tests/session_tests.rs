//! End-to-end prompt sessions over in-memory input and output.

use std::io::Cursor;

use passgen::pass::CharClass;
use passgen::rand::Rand;
use passgen::terminal::{LineReader, LineWriter};
use passgen::tui::{self, Outcome};
use passgen::Error;

/// Run a session against a scripted answer sheet; returns the outcome and
/// everything printed.
fn run_script(script: &str, seed: u64) -> (passgen::Result<Outcome>, String) {
    let mut input = LineReader::new(Cursor::new(script.to_string()));
    let mut output = LineWriter::new(Vec::new());
    let mut rng = Rand::seeded(seed);
    let outcome = tui::run(&mut input, &mut output, &mut rng);
    let printed = String::from_utf8(output.into_inner()).expect("utf-8 output");
    (outcome, printed)
}

fn password_line(printed: &str) -> &str {
    printed
        .lines()
        .find_map(|l| l.split("Generated Password: ").nth(1))
        .expect("password line")
}

#[test]
fn lowercase_and_numbers_length_six() {
    let (outcome, printed) = run_script("y\nn\ny\nn\n6\n", 1);
    let Ok(Outcome::Password(password)) = outcome else {
        panic!("expected a password");
    };

    assert_eq!(password.len(), 6);
    assert!(password.chars().any(|c| CharClass::Lowercase.contains(c)));
    assert!(password.chars().any(|c| CharClass::Digits.contains(c)));
    assert!(password
        .chars()
        .all(|c| CharClass::Lowercase.contains(c) || CharClass::Digits.contains(c)));
    assert_eq!(password_line(&printed), password.as_str());
}

#[test]
fn prompts_appear_in_order() {
    let (_, printed) = run_script("y\ny\ny\ny\n8\n", 2);
    let order = [
        "Include lowercase letters? (y/n): ",
        "Include uppercase letters? (y/n): ",
        "Include numbers? (y/n): ",
        "Include special characters? (y/n): ",
        "Enter password length (minimum 4): ",
        "Generated Password: ",
    ];
    let mut from = 0;
    for text in order {
        let at = printed[from..]
            .find(text)
            .unwrap_or_else(|| panic!("{text:?} missing after byte {from}"));
        from += at + text.len();
    }
}

#[test]
fn nothing_selected_prints_message_without_password() {
    let (outcome, printed) = run_script("n\nn\nn\nn\n12\n", 3);
    assert_eq!(outcome.unwrap(), Outcome::NoCharacterTypeSelected);
    assert!(printed.contains("Error: You must select at least one character type!"));
    assert!(!printed.contains("Generated Password"));
    assert!(printed.contains("Enter password length (minimum 1): "));
}

#[test]
fn special_only_rejects_zero_then_accepts_one() {
    let (outcome, printed) = run_script("n\nn\nn\ny\n0\n1\n", 4);
    let Ok(Outcome::Password(password)) = outcome else {
        panic!("expected a password");
    };

    assert_eq!(password.len(), 1);
    assert!(password.chars().all(|c| CharClass::Special.contains(c)));
    assert!(printed.contains("Error: Password length must be at least 1 to fit your choices!"));
    assert_eq!(printed.matches("Enter password length (minimum 1): ").count(), 2);
}

#[test]
fn lengths_below_class_count_are_reprompted() {
    let (outcome, printed) = run_script("y\ny\ny\ny\n1\n2\n3\nfour\n4\n", 5);
    let Ok(Outcome::Password(password)) = outcome else {
        panic!("expected a password");
    };

    assert_eq!(password.len(), 4);
    assert_eq!(printed.matches("at least 4 to fit your choices!").count(), 3);
    assert_eq!(printed.matches("Please enter a whole number.").count(), 1);
    for class in CharClass::ALL {
        assert!(password.chars().any(|c| class.contains(c)), "{class:?} missing");
    }
}

#[test]
fn messy_yes_no_answers_are_retried() {
    let (outcome, printed) = run_script("YES\n Y \nmaybe\nN\n\nn\nn\n3\n", 6);
    let Ok(Outcome::Password(password)) = outcome else {
        panic!("expected a password");
    };

    assert!(password.chars().all(|c| CharClass::Lowercase.contains(c)));
    assert_eq!(printed.matches("Invalid input! Please enter 'y' or 'n'.").count(), 3);
}

#[test]
fn input_ending_early_is_an_error() {
    let (outcome, printed) = run_script("y\nn\n", 7);
    assert!(matches!(outcome, Err(Error::InputClosed)));
    assert!(printed.ends_with("Include numbers? (y/n): "));
}

#[test]
fn same_seed_same_session() {
    let script = "y\ny\ny\nn\n20\n";
    let (a, _) = run_script(script, 8);
    let (b, _) = run_script(script, 8);
    assert_eq!(a.unwrap(), b.unwrap());
}

#[test]
fn long_lengths_are_generated_in_full() {
    let (outcome, printed) = run_script("n\ny\nn\nn\n100000\n", 9);
    let Ok(Outcome::Password(password)) = outcome else {
        panic!("expected a password");
    };

    assert_eq!(password.len(), 100_000);
    assert!(password.chars().all(|c| CharClass::Uppercase.contains(c)));
    assert!(!printed.contains("Error:"));
}
