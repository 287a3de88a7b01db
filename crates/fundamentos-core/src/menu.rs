//! Main menu: rendering, selection parsing and the dispatch loop.
//!
//! The menu is a two-state machine. While `Running` it renders, reads a token
//! and either dispatches a handler, reports an unknown option, or moves to
//! `Terminated` on `0`. Closing stdin also terminates, from any prompt.

use std::io::{BufRead, Write};

use strum::{EnumIter, IntoEnumIterator};

use crate::clock::Clock;
use crate::console::Console;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::handlers;
use crate::locale::DateLocale;

pub const TITLE: &str = "=== Desafio Rocketseat: Fundamentos C# ===";
pub const SELECTION_PROMPT: &str = "Escolha uma opção: ";
pub const INVALID_OPTION: &str = "Opção inválida!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MenuOption {
    Greeting,
    FullName,
    Arithmetic,
    CharacterCounter,
    PlateValidator,
    DateDisplay,
    Exit,
}

impl MenuOption {
    pub fn key(&self) -> &'static str {
        match self {
            MenuOption::Greeting => "1",
            MenuOption::FullName => "2",
            MenuOption::Arithmetic => "3",
            MenuOption::CharacterCounter => "4",
            MenuOption::PlateValidator => "5",
            MenuOption::DateDisplay => "6",
            MenuOption::Exit => "0",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Greeting => "Boas-vindas com nome",
            MenuOption::FullName => "Nome completo (nome + sobrenome)",
            MenuOption::Arithmetic => "Operações com dois números",
            MenuOption::CharacterCounter => "Contador de caracteres (ignorando espaços)",
            MenuOption::PlateValidator => "Validador de placa brasileira (modelo antigo)",
            MenuOption::DateDisplay => "Exibição de data e hora em formatos diversos",
            MenuOption::Exit => "Sair",
        }
    }

    pub fn parse(token: &str) -> Option<MenuOption> {
        MenuOption::iter().find(|option| option.key() == token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

/// Full menu text, ending with the inline selection prompt.
pub fn render() -> String {
    let mut text = String::new();
    text.push_str(TITLE);
    text.push('\n');
    for option in MenuOption::iter() {
        text.push_str(&format!("{}. {}\n", option.key(), option.label()));
    }
    text.push('\n');
    text.push_str(SELECTION_PROMPT);
    text
}

pub struct Menu<C> {
    clock: C,
    locale: DateLocale,
    state: MenuState,
}

impl<C: Clock> Menu<C> {
    pub fn new(clock: C, locale: DateLocale) -> Self {
        Self {
            clock,
            locale,
            state: MenuState::Running,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Runs iterations until the menu terminates.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        log::info!("menu started");
        while self.state == MenuState::Running {
            self.state = self.step(console)?;
        }
        log::info!("menu terminated");
        Ok(())
    }

    /// One render-read-dispatch cycle, returning the next state.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> ConsoleResult<MenuState> {
        console.clear()?;
        console.write(&render())?;

        let token = match console.read_line() {
            Ok(token) => token,
            Err(ConsoleError::InputClosed) => return Ok(MenuState::Terminated),
            Err(e) => return Err(e),
        };

        let next = match MenuOption::parse(&token) {
            Some(MenuOption::Exit) => MenuState::Terminated,
            Some(option) => {
                log::debug!("dispatching option {:?}", option);
                match self.dispatch(option, console) {
                    Ok(()) => MenuState::Running,
                    Err(ConsoleError::InputClosed) => {
                        log::info!("input closed during {:?}", option);
                        MenuState::Terminated
                    }
                    Err(e) => return Err(e),
                }
            }
            None => {
                log::debug!("unknown menu token {:?}", token);
                console.write_line(INVALID_OPTION)?;
                MenuState::Running
            }
        };

        if next == MenuState::Running {
            match console.pause() {
                Ok(()) => {}
                Err(ConsoleError::InputClosed) => return Ok(MenuState::Terminated),
                Err(e) => return Err(e),
            }
        }

        Ok(next)
    }

    fn dispatch<R: BufRead, W: Write>(
        &self,
        option: MenuOption,
        console: &mut Console<R, W>,
    ) -> ConsoleResult<()> {
        match option {
            MenuOption::Greeting => handlers::greeting(console),
            MenuOption::FullName => handlers::full_name(console),
            MenuOption::Arithmetic => handlers::arithmetic(console),
            MenuOption::CharacterCounter => handlers::character_counter(console),
            MenuOption::PlateValidator => handlers::plate_validator(console),
            MenuOption::DateDisplay => handlers::date_display(console, &self.clock, &self.locale),
            MenuOption::Exit => Ok(()),
        }
    }
}
