use crate::core::catalog::compounds::CompoundCatalog;
use crate::core::catalog::elements::ElementCatalog;
use crate::core::catalog::{BUNDLED_COMPOUNDS_TOML, BUNDLED_ELEMENTS_CSV, Catalog, CatalogError};
use crate::engine::config::{CatalogConfig, CatalogSource};
use crate::engine::error::QuizError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::quiz::QuestionBank;
use tracing::{info, instrument};

/// Loads the element and compound catalogs described by `config`.
///
/// Compounds are validated against the element catalog that was loaded in the
/// same call. Duplicate compound compositions do not fail the load; each one
/// is logged and forwarded to `reporter` as a [`Progress::Warning`].
///
/// # Errors
///
/// Returns the first [`CatalogError`] hit while reading or validating either
/// catalog.
#[instrument(skip_all, name = "catalog_load_workflow")]
pub fn run(config: &CatalogConfig, reporter: &ProgressReporter) -> Result<Catalog, CatalogError> {
    reporter.report(Progress::PhaseStart {
        name: "Loading Elements",
    });
    let elements = match &config.elements {
        CatalogSource::Bundled => {
            ElementCatalog::from_csv_str(BUNDLED_ELEMENTS_CSV, "<bundled elements>")?
        }
        CatalogSource::File(path) => ElementCatalog::from_csv_path(path)?,
    };
    info!(
        source = %config.elements.describe(),
        count = elements.len(),
        "Element catalog loaded."
    );
    reporter.report(Progress::Message(format!("{} elements", elements.len())));
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Loading Compounds",
    });
    let compounds = match &config.compounds {
        CatalogSource::Bundled => CompoundCatalog::from_toml_str(
            BUNDLED_COMPOUNDS_TOML,
            "<bundled compounds>",
            &elements,
        )?,
        CatalogSource::File(path) => CompoundCatalog::from_toml_path(path, &elements)?,
    };
    info!(
        source = %config.compounds.describe(),
        count = compounds.len(),
        "Compound catalog loaded."
    );
    for warning in compounds.warnings() {
        reporter.report(Progress::Warning(warning.to_string()));
    }
    reporter.report(Progress::PhaseFinish);

    Ok(Catalog::new(elements, compounds))
}

/// Loads the static question bank named in `config`, if any.
pub fn question_bank(config: &CatalogConfig) -> Result<Option<QuestionBank>, QuizError> {
    match &config.questions {
        Some(path) => {
            let bank = QuestionBank::from_toml_path(path)?;
            info!(path = %path.display(), count = bank.len(), "Question bank loaded.");
            Ok(Some(bank))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::CatalogConfigBuilder;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    fn collecting<'a>(events: &'a Mutex<Vec<Progress>>) -> ProgressReporter<'a> {
        ProgressReporter::with_callback(Box::new(move |event| {
            events.lock().unwrap().push(event);
        }))
    }

    #[test]
    fn bundled_config_loads_both_catalogs_with_phases() {
        let events = Mutex::new(Vec::new());
        let reporter = collecting(&events);
        let catalog = run(&CatalogConfig::bundled(), &reporter).unwrap();
        drop(reporter);

        assert_eq!(catalog.elements.len(), 118);
        assert!(!catalog.compounds.is_empty());

        let events = events.into_inner().unwrap();
        assert_eq!(
            events.first(),
            Some(&Progress::PhaseStart {
                name: "Loading Elements"
            })
        );
        assert!(events.contains(&Progress::PhaseStart {
            name: "Loading Compounds"
        }));
        assert_eq!(events.last(), Some(&Progress::PhaseFinish));
        assert!(!events.iter().any(|e| matches!(e, Progress::Warning(_))));
    }

    #[test]
    fn file_sources_are_read_and_duplicates_reported() {
        let dir = tempdir().unwrap();
        let compounds_path = dir.path().join("compounds.toml");
        fs::write(
            &compounds_path,
            r#"
[[compound]]
name = "Salt"
formula = "NaCl"

[[compound]]
name = "Halite"
formula = "ClNa"
"#,
        )
        .unwrap();

        let config = CatalogConfigBuilder::new()
            .elements(CatalogSource::Bundled)
            .compounds_path(compounds_path)
            .build()
            .unwrap();

        let events = Mutex::new(Vec::new());
        let reporter = collecting(&events);
        let catalog = run(&config, &reporter).unwrap();
        drop(reporter);

        assert_eq!(catalog.compounds.len(), 2);
        let warnings: Vec<Progress> = events
            .into_inner()
            .unwrap()
            .into_iter()
            .filter(|e| matches!(e, Progress::Warning(_)))
            .collect();
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn missing_files_surface_io_errors() {
        let config = CatalogConfigBuilder::new()
            .elements_path("/no/such/elements.csv".into())
            .compounds(CatalogSource::Bundled)
            .build()
            .unwrap();
        let result = run(&config, &ProgressReporter::new());
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn question_bank_is_optional() {
        assert!(question_bank(&CatalogConfig::bundled()).unwrap().is_none());

        let dir = tempdir().unwrap();
        let path = dir.path().join("questions.toml");
        fs::write(
            &path,
            r#"
[[question]]
question = "Symbol for iron?"
answers = ["Fe", "Ir", "In"]
correct-answer = "Fe"
"#,
        )
        .unwrap();
        let mut config = CatalogConfig::bundled();
        config.questions = Some(path);
        assert_eq!(question_bank(&config).unwrap().unwrap().len(), 1);
    }
}
