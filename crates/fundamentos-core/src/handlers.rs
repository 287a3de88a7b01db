//! The six menu utilities.
//!
//! Each handler clears the screen, prints its header, gathers input through
//! the console's prompt loop and prints a result. Handlers share no state;
//! the message builders are split out so the wording can be checked without
//! a console.

#[cfg(test)]
#[path = "handlers_test.rs"]
mod tests;

use std::io::{BufRead, Write};

use chrono::NaiveDateTime;

use crate::clock::Clock;
use crate::console::{Console, PromptStyle};
use crate::errors::ConsoleResult;
use crate::formatting::{capitalize, count_non_whitespace};
use crate::locale::DateLocale;
use crate::menu::MenuOption;
use crate::operations::Arithmetic;
use crate::validation::{is_legacy_plate, is_valid_name, parse_decimal};

const NAME_PROMPT: &str = "Digite seu nome:";
// Name errors are followed by two blank lines, number errors by one.
const NAME_ERROR: &str = "Nome inválido. Tente novamente.\n\n";
const LAST_NAME_ERROR: &str = "Sobrenome inválido. Tente novamente.\n\n";
const FIRST_NUMBER_PROMPT: &str = "Digite o primeiro número: ";
const SECOND_NUMBER_PROMPT: &str = "Digite o segundo número: ";
const NUMBER_ERROR: &str = "Valor inválido. Tente novamente.\n";
const COUNTER_PROMPT: &str = "Por favor, digite uma palavra, frase ou texto para contar os caracteres (espaços serão ignorados):";
const PLATE_PROMPT: &str = "Digite a placa do veículo:";
const EMPTY_TEXT_ERROR: &str = "Nenhum texto foi digitado. Tente novamente.";

pub fn header(option: MenuOption) -> String {
    format!("=== Opção: {}. {} ===", option.key(), option.label())
}

pub fn greeting_message(name: &str) -> String {
    format!("Olá, {}! Seja Muito Bem-Vindo!", name)
}

pub fn full_name_message(first: &str, last: &str) -> String {
    format!("Nome completo: {} {}", first, last)
}

pub fn arithmetic_report(result: &Arithmetic) -> Vec<String> {
    let division = match result.quotient {
        Some(quotient) => format!("Divisão: {}", quotient),
        None => "Divisão: impossível dividir por zero.".to_string(),
    };

    vec![
        format!(
            "Resultados das operações com {} e {}:",
            result.first, result.second
        ),
        String::new(),
        format!("Soma: {}", result.sum),
        format!("Subtração: {}", result.difference),
        format!("Multiplicação: {}", result.product),
        division,
        format!("Média: {}", result.average),
    ]
}

pub fn character_count_message(count: usize) -> String {
    format!(
        "O texto digitado possui {} caracteres (sem contar os espaços).",
        count
    )
}

pub fn plate_verdict(valid: bool) -> &'static str {
    if valid {
        "Verdadeiro (placa válida)"
    } else {
        "Falso (placa inválida)"
    }
}

pub fn date_report(locale: &DateLocale, now: &NaiveDateTime) -> Vec<String> {
    vec![
        format!("Formato completo: {}", locale.full(now)),
        format!("Apenas data: {}", locale.date_only(now)),
        format!("Apenas hora: {}", locale.time_only(now)),
        format!("Data com mês por extenso: {}", locale.spelled_month(now)),
    ]
}

fn begin<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    option: MenuOption,
) -> ConsoleResult<()> {
    console.clear()?;
    console.write_line(&header(option))
}

fn read_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    error: &str,
) -> ConsoleResult<String> {
    let name = console.prompt_until(PromptStyle::Line, NAME_PROMPT, error, is_valid_name)?;
    Ok(capitalize(&name))
}

fn read_number<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> ConsoleResult<f64> {
    console.prompt_map(PromptStyle::Inline, prompt, NUMBER_ERROR, parse_decimal)
}

pub fn greeting<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ConsoleResult<()> {
    begin(console, MenuOption::Greeting)?;
    let name = read_name(console, NAME_ERROR)?;
    console.write_line("")?;
    console.write_line(&greeting_message(&name))
}

pub fn full_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ConsoleResult<()> {
    begin(console, MenuOption::FullName)?;
    // Both prompts read "Digite seu nome:"; only the error wording differs.
    let first = read_name(console, NAME_ERROR)?;
    let last = read_name(console, LAST_NAME_ERROR)?;
    console.write_line("")?;
    console.write_line(&full_name_message(&first, &last))
}

pub fn arithmetic<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ConsoleResult<()> {
    begin(console, MenuOption::Arithmetic)?;
    let first = read_number(console, FIRST_NUMBER_PROMPT)?;
    let second = read_number(console, SECOND_NUMBER_PROMPT)?;

    let result = Arithmetic::compute(first, second);
    if result.quotient.is_none() {
        log::debug!("division by zero requested, reporting instead of dividing");
    }

    console.write_line("")?;
    for line in arithmetic_report(&result) {
        console.write_line(&line)?;
    }
    Ok(())
}

pub fn character_counter<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ConsoleResult<()> {
    begin(console, MenuOption::CharacterCounter)?;
    let text = console.prompt_text(COUNTER_PROMPT, EMPTY_TEXT_ERROR)?;
    console.write_line("")?;
    console.write_line(&character_count_message(count_non_whitespace(&text)))
}

pub fn plate_validator<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ConsoleResult<()> {
    begin(console, MenuOption::PlateValidator)?;
    let plate = console.prompt_text(PLATE_PROMPT, EMPTY_TEXT_ERROR)?;
    console.write_line(plate_verdict(is_legacy_plate(&plate)))
}

pub fn date_display<R: BufRead, W: Write, C: Clock + ?Sized>(
    console: &mut Console<R, W>,
    clock: &C,
    locale: &DateLocale,
) -> ConsoleResult<()> {
    begin(console, MenuOption::DateDisplay)?;
    let now = clock.now();
    for line in date_report(locale, &now) {
        console.write_line(&line)?;
    }
    Ok(())
}
