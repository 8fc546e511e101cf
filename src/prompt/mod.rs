//! Interactive parameter collection.
//!
//! Every answer is validated before synthesis starts, so a rejected answer
//! ends the session without writing any output.

mod console;

pub use console::{
    DEFAULT_BASE_NAME, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, PromptError, Prompter,
    parse_menu_choice,
};
