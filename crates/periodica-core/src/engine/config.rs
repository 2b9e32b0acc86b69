use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Where a catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// The copy embedded in the library at build time.
    #[default]
    Bundled,
    File(PathBuf),
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Bundled => "bundled".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub elements: CatalogSource,
    pub compounds: CatalogSource,
    /// Optional static question bank; `None` means questions are generated
    /// from the element catalog.
    pub questions: Option<PathBuf>,
}

impl CatalogConfig {
    /// Configuration that reads everything from the bundled data.
    pub fn bundled() -> Self {
        Self {
            elements: CatalogSource::Bundled,
            compounds: CatalogSource::Bundled,
            questions: None,
        }
    }
}

#[derive(Default)]
pub struct CatalogConfigBuilder {
    elements: Option<CatalogSource>,
    compounds: Option<CatalogSource>,
    questions: Option<PathBuf>,
}

impl CatalogConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(mut self, source: CatalogSource) -> Self {
        self.elements = Some(source);
        self
    }
    pub fn elements_path(self, path: PathBuf) -> Self {
        self.elements(CatalogSource::File(path))
    }
    pub fn compounds(mut self, source: CatalogSource) -> Self {
        self.compounds = Some(source);
        self
    }
    pub fn compounds_path(self, path: PathBuf) -> Self {
        self.compounds(CatalogSource::File(path))
    }
    pub fn questions_path(mut self, path: PathBuf) -> Self {
        self.questions = Some(path);
        self
    }

    pub fn build(self) -> Result<CatalogConfig, ConfigError> {
        Ok(CatalogConfig {
            elements: self
                .elements
                .ok_or(ConfigError::MissingParameter("elements"))?,
            compounds: self
                .compounds
                .ok_or(ConfigError::MissingParameter("compounds"))?,
            questions: self.questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_both_catalog_sources() {
        let missing_elements = CatalogConfigBuilder::new()
            .compounds(CatalogSource::Bundled)
            .build();
        assert_eq!(
            missing_elements,
            Err(ConfigError::MissingParameter("elements"))
        );

        let missing_compounds = CatalogConfigBuilder::new()
            .elements(CatalogSource::Bundled)
            .build();
        assert_eq!(
            missing_compounds,
            Err(ConfigError::MissingParameter("compounds"))
        );
    }

    #[test]
    fn builder_accepts_mixed_sources() {
        let config = CatalogConfigBuilder::new()
            .elements(CatalogSource::Bundled)
            .compounds_path(PathBuf::from("my/compounds.toml"))
            .questions_path(PathBuf::from("my/questions.toml"))
            .build()
            .unwrap();
        assert_eq!(config.elements, CatalogSource::Bundled);
        assert_eq!(
            config.compounds,
            CatalogSource::File(PathBuf::from("my/compounds.toml"))
        );
        assert_eq!(config.questions, Some(PathBuf::from("my/questions.toml")));
    }

    #[test]
    fn bundled_config_has_no_question_bank() {
        let config = CatalogConfig::bundled();
        assert_eq!(config.elements.describe(), "bundled");
        assert!(config.questions.is_none());
    }
}
