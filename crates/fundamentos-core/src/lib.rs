//! Core of the Fundamentos console: six small text utilities behind a menu.
//!
//! The crate is organised leaves first:
//!
//! - **Validators** (`validation`): names, decimal numbers, legacy plates
//! - **Formatters** (`formatting`, `locale`): capitalisation, whitespace
//!   stripping, fixed-locale date rendering
//! - **Prompt loop** (`console`): read, validate, retry until accepted
//! - **Handlers** (`handlers`): one function per menu option
//! - **Dispatcher** (`menu`): the `Running`/`Terminated` menu loop
//!
//! All terminal I/O goes through [`Console`], which is generic over its
//! reader and writer.

pub mod clock;
pub mod console;
pub mod errors;
pub mod formatting;
pub mod handlers;
pub mod locale;
pub mod menu;
pub mod operations;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use console::{Console, ConsoleOptions, PromptStyle};
pub use errors::{ConsoleError, ConsoleResult};
pub use locale::{DateLocale, PT_BR};
pub use menu::{Menu, MenuOption, MenuState};
pub use operations::Arithmetic;
