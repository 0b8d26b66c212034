use crate::{
    cli::answers::ValueCollector,
    cli::args::{InitArgs, ListArgs},
    constants::PROJECT_NAME_VAR,
    discovery::discover_templates,
    error::{Error, Result},
    generator::{ProjectGenerator, ProjectRequest},
    ioutils::get_output_dir,
    loader::fetch_template,
    manifest::Template,
    prompt::{TemplateSelector, TerminalPrompter, VariablePrompter},
};

/// Orchestrates the init workflow: fetch the collection, discover its
/// templates, pick one, collect values, generate the project.
pub struct Runner {
    args: InitArgs,
}

impl Runner {
    pub fn new(args: InitArgs) -> Self {
        Self { args }
    }

    /// Runs the workflow with the interactive terminal gateways.
    pub fn run(self) -> Result<()> {
        let prompter = TerminalPrompter;
        self.run_with(&prompter, &prompter)
    }

    /// Runs the workflow against explicit selection and input gateways. Any
    /// implementation of the gateway traits works here; the integration
    /// tests pass scripted ones.
    pub fn run_with(
        &self,
        selector: &dyn TemplateSelector,
        prompter: &dyn VariablePrompter,
    ) -> Result<()> {
        // The fetched collection keeps a cloned repository alive until the
        // end of the run; dropping it removes the clone.
        let fetched = fetch_template(&self.args.template_repo)?;
        let templates = discover_templates(fetched.path())?;
        if templates.is_empty() {
            return Err(Error::NoTemplatesFoundError {
                template_dir: fetched.path().display().to_string(),
            });
        }

        let template = self.choose_template(&templates, selector)?;
        log::debug!(
            "Using template '{}' from '{}'.",
            template.name,
            template.directory.display()
        );

        let collector = ValueCollector::new(prompter, self.args.non_interactive);
        let substitutions = collector.collect(template, self.args.answers.clone())?;

        let project_name =
            substitutions.get(PROJECT_NAME_VAR).cloned().unwrap_or_default();
        let output_root =
            get_output_dir(self.args.output_dir.join(&project_name), self.args.force)?;
        let created_output_root = !output_root.exists();

        let request = ProjectRequest {
            template_dir: template.directory.clone(),
            output_dir: output_root.clone(),
            substitutions,
        };
        if let Err(err) = ProjectGenerator::new(&request).generate() {
            // An aborted generation leaves partial output behind. Remove the
            // directory again if this run created it.
            if created_output_root {
                if let Err(cleanup_err) = std::fs::remove_dir_all(&output_root) {
                    log::warn!(
                        "Failed to clean up '{}': {cleanup_err}",
                        output_root.display()
                    );
                }
            }
            return Err(err);
        }

        println!(
            "Project {} initialized successfully in {}.",
            project_name,
            output_root.display()
        );
        Ok(())
    }

    fn choose_template<'t>(
        &self,
        templates: &'t [Template],
        selector: &dyn TemplateSelector,
    ) -> Result<&'t Template> {
        if let Some(name) = &self.args.template {
            // Names are not guaranteed unique; the first match in sorted
            // order wins.
            return templates
                .iter()
                .find(|template| &template.name == name)
                .ok_or_else(|| Error::UnknownTemplateError { name: name.clone() });
        }
        let index = selector.select(templates)?;
        Ok(&templates[index])
    }
}

/// Prints every template in the collection, one per line, in sorted order.
pub fn run_list(args: ListArgs) -> Result<()> {
    let fetched = fetch_template(&args.template_repo)?;
    let templates = discover_templates(fetched.path())?;
    if templates.is_empty() {
        return Err(Error::NoTemplatesFoundError {
            template_dir: fetched.path().display().to_string(),
        });
    }
    for template in &templates {
        if template.description.is_empty() {
            println!("{}", template.name);
        } else {
            println!("{} - {}", template.name, template.description);
        }
    }
    Ok(())
}
