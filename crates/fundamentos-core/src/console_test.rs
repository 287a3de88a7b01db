use std::io::Cursor;

use super::*;
use crate::validation::is_valid_name;

fn console(input: &str, options: ConsoleOptions) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    return Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), options);
}

fn quiet() -> ConsoleOptions {
    return ConsoleOptions {
        clear_screen: false,
        pause: false,
    };
}

fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    return String::from_utf8(console.into_output()).unwrap();
}

#[test]
fn it_trims_lines() {
    let mut console = console("  hello  \n", quiet());
    assert_eq!(console.read_line().unwrap(), "hello");
}

#[test]
fn it_reprompts_on_latin1_bytes() {
    let mut console = Console::new(
        Cursor::new(b"Jos\xE9\nana\n".to_vec()),
        Vec::new(),
        quiet(),
    );
    let accepted = console
        .prompt_until(PromptStyle::Line, "Nome:", "Erro", is_valid_name)
        .unwrap();
    assert_eq!(accepted, "ana");
    assert_eq!(output_of(console), "Nome:\nErro\nNome:\n");
}

#[test]
fn it_decodes_invalid_utf8_lossily() {
    let mut console = Console::new(Cursor::new(b"Jos\xE9\n".to_vec()), Vec::new(), quiet());
    assert_eq!(console.read_line().unwrap(), "Jos\u{FFFD}");
}

#[test]
fn it_reports_closed_input() {
    let mut console = console("", quiet());
    let err = console.read_line().unwrap_err();
    assert!(err.is_input_closed());
}

#[test]
fn it_retries_until_validator_accepts() {
    let mut console = console("\nJo3\nA\n  ana  \n", quiet());
    let accepted = console
        .prompt_until(PromptStyle::Line, "Nome:", "Erro", is_valid_name)
        .unwrap();
    assert_eq!(accepted, "ana");

    let out = output_of(console);
    assert_eq!(out.matches("Nome:\n").count(), 4);
    assert_eq!(out.matches("Erro\n").count(), 3);
}

#[test]
fn it_keeps_inline_prompt_on_same_line() {
    let mut console = console("7\n", quiet());
    console
        .prompt_until(PromptStyle::Inline, "Número: ", "Erro", |_| true)
        .unwrap();
    assert_eq!(output_of(console), "Número: ");
}

#[test]
fn it_propagates_closed_input_from_prompt_loop() {
    let mut console = console("x\n", quiet());
    let err = console
        .prompt_until(PromptStyle::Line, "Nome:", "Erro", is_valid_name)
        .unwrap_err();
    assert!(err.is_input_closed());
}

#[test]
fn it_maps_accepted_line() {
    let mut console = console("abc\n12\n", quiet());
    let value: u32 = console
        .prompt_map(PromptStyle::Inline, "> ", "Erro", |l| l.parse().ok())
        .unwrap();
    assert_eq!(value, 12);
    assert_eq!(output_of(console), "> Erro\n> ");
}

#[test]
fn it_rejects_blank_free_text() {
    let mut console = console("   \nolá\n", quiet());
    assert_eq!(console.prompt_text("Texto:", "Vazio").unwrap(), "olá");
    assert_eq!(output_of(console), "Texto:\nVazio\nTexto:\n");
}

#[test]
fn it_skips_clear_when_disabled() {
    let mut console = console("", quiet());
    console.clear().unwrap();
    assert!(output_of(console).is_empty());
}

#[test]
fn it_emits_clear_sequence_when_enabled() {
    let mut console = console(
        "",
        ConsoleOptions {
            clear_screen: true,
            pause: false,
        },
    );
    console.clear().unwrap();
    let out = output_of(console);
    assert!(out.starts_with('\u{1b}'));
}

#[test]
fn it_pauses_for_one_line() {
    let mut console = console("\nnext\n", ConsoleOptions::default());
    console.pause().unwrap();
    assert_eq!(console.read_line().unwrap(), "next");
    assert!(output_of(console).contains(PAUSE_MESSAGE));
}
