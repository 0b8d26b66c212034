use dialoguer::{Input, Select};

use crate::error::{Error, Result};
use crate::manifest::Template;
use crate::prompt::interface::{TemplateSelector, VariablePrompter};

/// Interactive prompter backed by dialoguer.
pub struct TerminalPrompter;

impl TemplateSelector for TerminalPrompter {
    fn select(&self, templates: &[Template]) -> Result<usize> {
        let items: Vec<String> = templates
            .iter()
            .map(|template| {
                if template.description.is_empty() {
                    template.name.clone()
                } else {
                    format!("{} - {}", template.name, template.description)
                }
            })
            .collect();

        Select::new()
            .with_prompt("Select a template")
            .items(&items)
            .default(0)
            .interact()
            .map_err(Error::SelectionError)
    }
}

impl VariablePrompter for TerminalPrompter {
    fn prompt_value(
        &self,
        name: &str,
        description: &str,
        default: Option<&str>,
    ) -> Result<String> {
        let prompt = if description.is_empty() {
            format!("Enter {name}")
        } else {
            description.to_string()
        };

        let mut input: Input<String> = Input::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(Error::InputError)
    }
}
