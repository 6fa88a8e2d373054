use crate::config::ConfigFile;
use crate::theme;

use anyhow::{bail, Context, Result};
use clap::Parser;
use console::style;
use ddbmap::{Field, GenOption, JavaSource, Model, OptionSet, Serializer};
use dialoguer::MultiSelect;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Java source file to patch
    file: Option<PathBuf>,

    /// Read a JSON model description and print the generated methods
    #[arg(long, value_name = "FILE", conflicts_with = "file")]
    model: Option<PathBuf>,

    /// Select these fields (comma separated) without prompting
    #[arg(short, long, value_delimiter = ',')]
    fields: Vec<String>,

    /// Select every candidate field without prompting
    #[arg(short, long)]
    all: bool,

    /// Unmarshall through the class's inner builder
    #[arg(short, long)]
    builder: bool,

    /// Enable an option by identifier (unrecognized identifiers are ignored)
    #[arg(long = "option", value_name = "IDENT")]
    options: Vec<String>,

    /// Print the patched source instead of rewriting the file
    #[arg(long)]
    stdout: bool,

    /// Config file holding persisted option defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Persist the active options as new defaults
    #[arg(long)]
    save: bool,
}

impl GenerateCommand {
    pub(crate) fn run(self) -> Result<()> {
        let options = self.active_options()?;

        if let Some(path) = &self.model {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let model: Model = serde_json::from_str(&json)
                .with_context(|| format!("failed to parse model from {}", path.display()))?;

            let methods = ddbmap::generate(&model, &options);
            let serializer = Serializer::new();
            println!("{}", serializer.serialize(&methods.marshall));
            println!();
            println!("{}", serializer.serialize(&methods.unmarshall));
            return Ok(());
        }

        let Some(path) = &self.file else {
            bail!("either a Java source file or --model is required");
        };

        let mut source = JavaSource::load(path)?;

        let candidates = source.fields();
        if candidates.is_empty() {
            println!(
                "  {}",
                style(format!(
                    "No candidate fields found in class {}.",
                    source.class_name()
                ))
                .magenta()
                .dim()
            );
            return Ok(());
        }

        let selected = self.select_fields(&candidates)?;
        if selected.is_empty() {
            println!(
                "  {}",
                style("No fields selected; nothing to generate.")
                    .magenta()
                    .dim()
            );
            return Ok(());
        }

        let mut model = Model::new(source.class_name());
        model.fields = selected;

        ddbmap::apply_model(&mut source, &model, &options)?;

        if self.stdout {
            print!("{}", source.text());
        } else {
            fs::write(path, source.text())
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "  {} {}",
                style("✓").green().bold(),
                style(format!(
                    "Generated marshall/unmarshall in {}",
                    path.display()
                ))
                .dim()
            );
        }

        Ok(())
    }

    /// The fields to generate for: an explicit `--fields` list, everything
    /// with `--all`, or an interactive multi-select with every candidate
    /// pre-selected.
    fn select_fields(&self, candidates: &[Field]) -> Result<Vec<Field>> {
        if !self.fields.is_empty() {
            let mut selected = Vec::with_capacity(self.fields.len());
            for name in &self.fields {
                let field = candidates
                    .iter()
                    .find(|field| field.name == *name)
                    .with_context(|| format!("no candidate field named `{name}`"))?;
                selected.push(field.clone());
            }
            return Ok(selected);
        }

        if self.all {
            return Ok(candidates.to_vec());
        }

        let labels: Vec<String> = candidates
            .iter()
            .map(|field| format!("{} {}", field.ty, field.name))
            .collect();
        let defaults = vec![true; candidates.len()];

        let picked = MultiSelect::with_theme(&theme::dialoguer_theme())
            .with_prompt("Select fields")
            .items(&labels)
            .defaults(&defaults)
            .interact()?;

        Ok(picked
            .into_iter()
            .map(|index| candidates[index].clone())
            .collect())
    }

    /// Active option set: persisted defaults first, then command-line
    /// toggles. Unrecognized `--option` identifiers are ignored.
    fn active_options(&self) -> Result<OptionSet> {
        let config_path = self.config.clone().or_else(ConfigFile::default_path);

        let mut config = match &config_path {
            Some(path) => ConfigFile::load_or_default(path)?,
            None => ConfigFile::new(),
        };

        let mut options = config.options();

        if self.builder {
            options.insert(GenOption::UseInnerBuilder);
        }
        for ident in &self.options {
            if let Some(option) = GenOption::from_property(ident) {
                options.insert(option);
            }
        }

        if self.save {
            let path = config_path.context("no config file location available")?;
            config.set_options(&options);
            config.save(&path)?;
        }

        Ok(options)
    }
}
