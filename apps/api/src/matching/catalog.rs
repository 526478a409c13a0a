//! Skill catalog: the immutable table of recognized skill terms and their weights.
//!
//! Built once at startup, either from the enumerated defaults below or from a
//! JSON file of `{"term": weight}` pairs. Never mutated afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

/// Weight applied to a term that is not in the catalog.
pub const DEFAULT_WEIGHT: f64 = 1.0;

const DEFAULT_SKILLS: &[(&str, f64)] = &[
    ("python", 1.0),
    ("java", 1.2),
    ("spring", 1.3),
    ("spring boot", 1.5),
    ("django", 1.2),
    ("flask", 1.1),
    ("react", 1.2),
    ("angular", 1.2),
    ("node", 1.1),
    ("express", 1.0),
    ("mysql", 1.0),
    ("postgresql", 1.0),
    ("mongodb", 1.1),
    ("docker", 1.3),
    ("kubernetes", 1.4),
    ("aws", 1.4),
    ("azure", 1.3),
    ("git", 0.8),
    ("github", 0.8),
    ("rest api", 1.2),
    ("microservices", 1.4),
    ("machine learning", 1.5),
    ("data analysis", 1.3),
    ("html", 0.9),
    ("css", 0.9),
    ("javascript", 1.0),
];

#[derive(Debug, Clone)]
pub struct SkillCatalog {
    weights: BTreeMap<String, f64>,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self {
            weights: DEFAULT_SKILLS
                .iter()
                .map(|(term, weight)| (term.to_string(), *weight))
                .collect(),
        }
    }
}

impl SkillCatalog {
    /// Builds a catalog from `(term, weight)` pairs.
    ///
    /// Terms must be trimmed, non-empty, lowercase and distinct; weights must be
    /// positive and finite.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut weights = BTreeMap::new();

        for (term, weight) in entries {
            let term = term.into();
            if term.is_empty() || term.trim() != term {
                bail!("Skill term '{term}' must be non-empty and trimmed");
            }
            if term.to_lowercase() != term {
                bail!("Skill term '{term}' must be lowercase");
            }
            if !weight.is_finite() || weight <= 0.0 {
                bail!("Skill term '{term}' has invalid weight {weight}; expected a positive number");
            }
            if weights.insert(term.clone(), weight).is_some() {
                bail!("Skill term '{term}' appears more than once");
            }
        }

        if weights.is_empty() {
            bail!("Skill catalog is empty");
        }

        Ok(Self { weights })
    }

    /// Loads a catalog from a JSON object mapping term to weight.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill catalog {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid skill catalog {}", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let entries: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(raw).context("Skill catalog must be a JSON object")?;

        let pairs = entries
            .into_iter()
            .map(|(term, value)| {
                let weight = value
                    .as_f64()
                    .with_context(|| format!("Weight for '{term}' must be a number"))?;
                Ok((term, weight))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_entries(pairs)
    }

    /// Loads the catalog named by `path`, or the built-in defaults when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        info!(
            "Skill catalog loaded: {} terms ({})",
            catalog.len(),
            path.map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in defaults".to_string())
        );
        Ok(catalog)
    }

    /// Catalog weight for `term`, or `DEFAULT_WEIGHT` when the term is unknown.
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    pub fn weights(&self) -> &BTreeMap<String, f64> {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_has_all_terms() {
        let catalog = SkillCatalog::default();
        assert_eq!(catalog.len(), 26);
        assert!(catalog.weights().contains_key("spring boot"));
        assert!(catalog.weights().contains_key("machine learning"));
        assert_eq!(catalog.weight("kubernetes"), 1.4);
        assert_eq!(catalog.weight("git"), 0.8);
    }

    #[test]
    fn test_default_catalog_passes_validation() {
        let defaults = SkillCatalog::default();
        let rebuilt = SkillCatalog::from_entries(
            defaults.weights().iter().map(|(t, w)| (t.clone(), *w)),
        )
        .unwrap();
        assert_eq!(rebuilt.len(), defaults.len());
    }

    #[test]
    fn test_unknown_term_gets_default_weight() {
        let catalog = SkillCatalog::default();
        assert_eq!(catalog.weight("cobol"), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_rejects_uppercase_term() {
        let err = SkillCatalog::from_entries(vec![("Python", 1.0)]).unwrap_err();
        assert!(err.to_string().contains("lowercase"));
    }

    #[test]
    fn test_rejects_untrimmed_or_empty_term() {
        assert!(SkillCatalog::from_entries(vec![(" rust", 1.0)]).is_err());
        assert!(SkillCatalog::from_entries(vec![("", 1.0)]).is_err());
    }

    #[test]
    fn test_rejects_bad_weights() {
        assert!(SkillCatalog::from_entries(vec![("rust", 0.0)]).is_err());
        assert!(SkillCatalog::from_entries(vec![("rust", -1.0)]).is_err());
        assert!(SkillCatalog::from_entries(vec![("rust", f64::NAN)]).is_err());
        assert!(SkillCatalog::from_entries(vec![("rust", f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = SkillCatalog::from_entries(vec![("rust", 1.0), ("rust", 2.0)]).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(SkillCatalog::from_entries(Vec::<(String, f64)>::new()).is_err());
    }

    #[test]
    fn test_from_json_str() {
        let catalog = SkillCatalog::from_json_str(r#"{"rust": 1.5, "tokio": 1.1}"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.weight("rust"), 1.5);
    }

    #[test]
    fn test_from_json_str_rejects_non_numeric_weight() {
        assert!(SkillCatalog::from_json_str(r#"{"rust": "high"}"#).is_err());
        assert!(SkillCatalog::from_json_str(r#"["rust"]"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"go": 1.2, "grpc": 1.3}}"#).unwrap();

        let catalog = SkillCatalog::load(Some(file.path())).unwrap();
        assert_eq!(catalog.terms().collect::<Vec<_>>(), vec!["go", "grpc"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = SkillCatalog::load(Some(Path::new("/nonexistent/skills.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read skill catalog"));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let catalog = SkillCatalog::load(None).unwrap();
        assert_eq!(catalog.len(), SkillCatalog::default().len());
    }
}
