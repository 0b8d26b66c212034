pub mod dialoguer;
pub mod interface;

pub use dialoguer::TerminalPrompter;
pub use interface::{TemplateSelector, VariablePrompter};
