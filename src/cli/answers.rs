use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    constants::{MODULE_NAME_VAR, PROJECT_NAME_VAR, STDIN_INDICATOR},
    error::{Error, Result},
    ioutils::read_from,
    manifest::Template,
    prompt::VariablePrompter,
};

/// Collects substitution values from predefined answers and user prompts.
///
/// Predefined answers (`--answers` as a JSON object, or `-` to read the JSON
/// from stdin) take precedence; anything still missing is prompted for, or
/// rejected in non-interactive mode. `ProjectName` and `ModuleName` are
/// always collected, followed by the template's declared variables.
pub struct ValueCollector<'a> {
    prompter: &'a dyn VariablePrompter,
    non_interactive: bool,
}

impl<'a> ValueCollector<'a> {
    pub fn new(prompter: &'a dyn VariablePrompter, non_interactive: bool) -> Self {
        Self { prompter, non_interactive }
    }

    pub fn collect(
        &self,
        template: &Template,
        cli_answers: Option<String>,
    ) -> Result<IndexMap<String, String>> {
        let mut values = IndexMap::new();

        if let Some(answers_arg) = cli_answers {
            let answers_str = if answers_arg == STDIN_INDICATOR {
                read_from(std::io::stdin())?
            } else {
                answers_arg
            };
            values.extend(parse_answers(&answers_str)?);
        }

        self.collect_value(&mut values, PROJECT_NAME_VAR, "Enter project name", None)?;

        let project_name =
            values.get(PROJECT_NAME_VAR).cloned().unwrap_or_default();
        let module_default = format!("github.com/yourusername/{project_name}");
        self.collect_value(
            &mut values,
            MODULE_NAME_VAR,
            "Enter module name",
            Some(&module_default),
        )?;

        for variable in &template.variables {
            // The builtins were already collected above.
            if variable.name == PROJECT_NAME_VAR || variable.name == MODULE_NAME_VAR {
                continue;
            }
            self.collect_value(
                &mut values,
                &variable.name,
                &variable.description,
                None,
            )?;
        }

        Ok(values)
    }

    fn collect_value(
        &self,
        values: &mut IndexMap<String, String>,
        name: &str,
        description: &str,
        default: Option<&str>,
    ) -> Result<()> {
        if values.contains_key(name) {
            return Ok(());
        }

        if self.non_interactive {
            if let Some(default) = default {
                values.insert(name.to_string(), default.to_string());
                return Ok(());
            }
            return Err(Error::MissingAnswerError { name: name.to_string() });
        }

        let value = self.prompter.prompt_value(name, description, default)?;
        values.insert(name.to_string(), value);
        Ok(())
    }
}

/// Parses an answers argument into string values. Non-string scalars are
/// stringified; a non-object document yields no values.
fn parse_answers(buf: &str) -> Result<IndexMap<String, String>> {
    let value: Value = serde_json::from_str(buf)?;
    let map = match value {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    Ok(map
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect())
}
