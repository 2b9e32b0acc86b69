use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::data::{COMPOUNDS_FILE, DataManager, ELEMENTS_FILE};
use crate::error::{CliError, Result};
use periodica::engine::config::{CatalogConfigBuilder, CatalogSource};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Merges CLI flags, `--set` overrides, the config file, and built-in defaults.
///
/// Catalog sources resolve in the order: CLI flag, `--set`, config file,
/// the local data directory, and finally the catalogs bundled with the binary.
pub fn build_config(cli: &Cli, data_manager: &DataManager) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &cli.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &cli.set_values)?;

    let catalog_file = file_config.catalog.take().unwrap_or_default();
    let elements = resolve_source(
        cli.elements.as_deref(),
        catalog_file.elements_path.as_deref(),
        ELEMENTS_FILE,
        data_manager,
    )?;
    let compounds = resolve_source(
        cli.compounds.as_deref(),
        catalog_file.compounds_path.as_deref(),
        COMPOUNDS_FILE,
        data_manager,
    )?;

    let mut builder = CatalogConfigBuilder::new()
        .elements(elements)
        .compounds(compounds);
    if let Some(path) = catalog_file.questions_path {
        builder = builder.questions_path(existing_path(&path)?);
    }
    let catalog = builder.build()?;

    let load_timeout_secs = positive(
        "catalog.load-timeout-secs",
        catalog_file
            .load_timeout_secs
            .unwrap_or(defaults.load_timeout_secs),
    )?;
    let max_search_results = positive(
        "search.max-results",
        file_config
            .search
            .and_then(|s| s.max_results)
            .unwrap_or(defaults.max_search_results),
    )?;
    let num_questions = positive(
        "quiz.num-questions",
        file_config
            .quiz
            .and_then(|q| q.num_questions)
            .unwrap_or(defaults.num_questions),
    )?;

    debug!(
        elements = %catalog.elements.describe(),
        compounds = %catalog.compounds.describe(),
        "Catalog sources resolved."
    );

    Ok(AppConfig {
        catalog,
        load_timeout: Duration::from_secs(load_timeout_secs),
        max_search_results,
        num_questions,
    })
}

fn resolve_source(
    cli_arg: Option<&Path>,
    file_arg: Option<&Path>,
    file_name: &str,
    data_manager: &DataManager,
) -> Result<CatalogSource> {
    if let Some(path) = cli_arg.or(file_arg) {
        return Ok(CatalogSource::File(existing_path(path)?));
    }
    Ok(match data_manager.catalog_file(file_name) {
        Some(path) => CatalogSource::File(path),
        None => CatalogSource::Bundled,
    })
}

fn existing_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(CliError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Provided path does not exist: {}", path.display()),
        )));
    }
    Ok(path.to_path_buf())
}

fn positive<T: PartialOrd + Default + Copy>(key: &str, value: T) -> Result<T> {
    if value <= T::default() {
        return Err(CliError::Config(format!("'{}' must be greater than zero", key)));
    }
    Ok(value)
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        }
        let key = parts[0].trim();
        let value_str = parts[1].trim();

        match key {
            "catalog.elements-path" => {
                config
                    .catalog
                    .get_or_insert_with(Default::default)
                    .elements_path = Some(PathBuf::from(value_str));
            }
            "catalog.compounds-path" => {
                config
                    .catalog
                    .get_or_insert_with(Default::default)
                    .compounds_path = Some(PathBuf::from(value_str));
            }
            "catalog.questions-path" => {
                config
                    .catalog
                    .get_or_insert_with(Default::default)
                    .questions_path = Some(PathBuf::from(value_str));
            }
            "catalog.load-timeout-secs" => {
                config
                    .catalog
                    .get_or_insert_with(Default::default)
                    .load_timeout_secs = Some(parse_value(key, value_str, "integer")?);
            }
            "search.max-results" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .max_results = Some(parse_value(key, value_str, "integer")?);
            }
            "quiz.num-questions" => {
                config.quiz.get_or_insert_with(Default::default).num_questions =
                    Some(parse_value(key, value_str, "integer")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
