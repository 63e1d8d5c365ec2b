// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-forge: generate per-language translation.json files
//!
//! Running without a subcommand generates every built-in language into
//! `public/locales`.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use locale_forge::generate::{self, GenerateConfig};
use locale_forge::i18n::Catalog;
use locale_forge::types::{GenerateReport, DEFAULT_BASE_DIR};
use locale_forge::{fill, report, resolve};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "locale-forge")]
#[command(version)]
#[command(about = "Generate per-language translation.json files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// The requested subcommand, or a default `generate`.
    fn into_command(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write translation.json for every language (default)
    Generate(GenerateArgs),

    /// Copy English values into existing locale files where keys are missing or empty
    Fill {
        /// Locale directory to repair
        #[arg(short, long, default_value = DEFAULT_BASE_DIR)]
        output: PathBuf,
    },

    /// Show how each language's values are resolved
    Coverage {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the catalog's languages
    Languages {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Directory that receives one folder per language
    #[arg(short, long, default_value = DEFAULT_BASE_DIR)]
    output: PathBuf,

    #[command(flatten)]
    catalog: CatalogArgs,

    /// Fail if any key would fall back to its own name
    #[arg(long)]
    strict: bool,

    /// Stop at the first language that cannot be written (disables --parallel)
    #[arg(long)]
    fail_fast: bool,

    /// Generate languages in parallel
    #[arg(long)]
    parallel: bool,

    /// Only print the final summary
    #[arg(short, long)]
    quiet: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_BASE_DIR),
            catalog: CatalogArgs::default(),
            strict: false,
            fail_fast: false,
            parallel: false,
            quiet: false,
        }
    }
}

impl GenerateArgs {
    fn config(&self) -> GenerateConfig {
        GenerateConfig {
            base_dir: self.output.clone(),
            strict: self.strict,
            fail_fast: self.fail_fast,
            parallel: self.parallel,
            quiet: self.quiet,
        }
    }
}

#[derive(Args, Debug, Default)]
struct CatalogArgs {
    /// Load the catalog from a JSON or YAML file instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    table: Option<PathBuf>,

    /// Only these language codes (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    lang: Option<Vec<String>>,
}

impl CatalogArgs {
    fn load(&self) -> Result<Catalog> {
        let catalog = match &self.table {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::builtin(),
        };
        match &self.lang {
            Some(codes) => catalog.restrict(codes),
            None => Ok(catalog),
        }
    }
}

/// Turn per-language failures into a non-zero exit.
fn ensure_all_written(result: &GenerateReport) -> Result<()> {
    if result.has_failures() {
        bail!(
            "{} of {} languages could not be written",
            result.failures().count(),
            result.outcomes.len()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.into_command() {
        Commands::Generate(args) => {
            let catalog = args.catalog.load()?;
            let result = generate::run(&catalog, &args.config())?;
            report::print_generate_report(&result);
            ensure_all_written(&result)?;
        }

        Commands::Fill { output } => {
            let result = fill::run(&output, false)?;
            report::print_fill_report(&result);
        }

        Commands::Coverage { catalog, json } => {
            let catalog = catalog.load()?;
            let coverage = resolve::coverage(&catalog);
            if json {
                println!("{}", report::coverage_json(&coverage)?);
            } else {
                report::print_coverage_report(&coverage);
            }
        }

        Commands::Languages { catalog } => {
            let catalog = catalog.load()?;
            println!("Supported languages: {}", catalog.languages.len());
            report::print_languages(&catalog);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use locale_forge::types::LocaleOutcome;
    use std::path::Path;

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");
        match cli.into_command() {
            Commands::Generate(args) => args,
            _ => panic!("expected the generate command"),
        }
    }

    #[test]
    fn no_subcommand_generates_into_public_locales() {
        let args = generate_args(&["locale-forge"]);
        let config = args.config();
        assert_eq!(config.base_dir, Path::new(DEFAULT_BASE_DIR));
        assert!(!config.strict && !config.fail_fast && !config.parallel && !config.quiet);
        assert!(args.catalog.table.is_none());
        assert!(args.catalog.lang.is_none());
    }

    #[test]
    fn generate_flags_map_onto_config() {
        let args = generate_args(&[
            "locale-forge",
            "generate",
            "-o",
            "out/locales",
            "--strict",
            "--fail-fast",
            "--parallel",
            "--lang",
            "hi,bn",
        ]);
        let config = args.config();
        assert_eq!(config.base_dir, PathBuf::from("out/locales"));
        assert!(config.strict && config.fail_fast && config.parallel);
        assert_eq!(
            args.catalog.lang,
            Some(vec!["hi".to_string(), "bn".to_string()])
        );

        let catalog = args.catalog.load().unwrap();
        let codes: Vec<&str> = catalog.codes().collect();
        assert_eq!(codes, vec!["hi", "bn"]);
    }

    #[test]
    fn unknown_lang_fails_to_load() {
        let args = generate_args(&["locale-forge", "generate", "--lang", "xx"]);
        assert!(args.catalog.load().is_err());
    }

    #[test]
    fn failed_language_makes_the_run_fail() {
        let outcome = |code: &str, error: Option<&str>| LocaleOutcome {
            code: code.to_string(),
            path: PathBuf::from(code).join("translation.json"),
            keys: 1,
            error: error.map(str::to_string),
        };

        let ok = GenerateReport {
            base_dir: PathBuf::from("out"),
            outcomes: vec![outcome("en", None), outcome("hi", None)],
        };
        assert!(ensure_all_written(&ok).is_ok());

        let failed = GenerateReport {
            base_dir: PathBuf::from("out"),
            outcomes: vec![outcome("en", None), outcome("hi", Some("permission denied"))],
        };
        let err = ensure_all_written(&failed).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 languages could not be written");
    }
}
