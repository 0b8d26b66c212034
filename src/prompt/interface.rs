//! Pure prompting interfaces, independent of any UI library.
//!
//! The generation workflow only ever talks to these traits; the terminal
//! implementation lives in the sibling module, and tests substitute scripted
//! implementations.

use crate::error::Result;
use crate::manifest::Template;

/// Presents the discovered templates and returns the index of the chosen one.
pub trait TemplateSelector {
    fn select(&self, templates: &[Template]) -> Result<usize>;
}

/// Collects the value for a single substitution variable.
pub trait VariablePrompter {
    fn prompt_value(
        &self,
        name: &str,
        description: &str,
        default: Option<&str>,
    ) -> Result<String>;
}
