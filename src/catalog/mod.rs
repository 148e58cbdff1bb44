//! Read-only skill catalog: Subtest -> Domain -> ScoreBand -> skill
//! description. Built once at first access and never mutated, so it is
//! safe to share across workers without locking.

mod data;

use once_cell::sync::Lazy;

use crate::errors::{AppError, AppResult};

pub const MIN_SCORE_BAND: u8 = 1;
pub const MAX_SCORE_BAND: u8 = 7;

/// Global catalog instance. Selector endpoints and the generation
/// service both read from this.
pub static SKILL_CATALOG: Lazy<SkillCatalog> = Lazy::new(SkillCatalog::new);

pub struct SkillCatalog {
    subtests: Vec<(&'static str, &'static [data::DomainSkills])>,
}

impl SkillCatalog {
    fn new() -> Self {
        Self {
            subtests: vec![
                ("Reading And Writing", data::READING_AND_WRITING_DOMAINS),
                ("Math", data::MATH_DOMAINS),
            ],
        }
    }

    /// All top-level subtest names, in catalog order.
    pub fn subtests(&self) -> Vec<&'static str> {
        self.subtests.iter().map(|(name, _)| *name).collect()
    }

    /// Content domains available under `subtest`.
    pub fn domains(&self, subtest: &str) -> AppResult<Vec<&'static str>> {
        let domains = self.domain_table(subtest)?;
        Ok(domains.iter().map(|(name, _)| *name).collect())
    }

    /// Resolves the skill description for an exact (subtest, domain,
    /// score band) triple. There are no partial matches and no default
    /// skill; any unknown key is an invalid selection.
    pub fn resolve_skill(
        &self,
        subtest: &str,
        domain: &str,
        score_band: u8,
    ) -> AppResult<&'static str> {
        let domains = self.domain_table(subtest)?;
        let (_, bands) = domains
            .iter()
            .find(|(name, _)| *name == domain)
            .ok_or_else(|| {
                AppError::InvalidSelection(format!(
                    "domain '{}' is not part of subtest '{}'",
                    domain, subtest
                ))
            })?;

        if !(MIN_SCORE_BAND..=MAX_SCORE_BAND).contains(&score_band) {
            return Err(AppError::InvalidSelection(format!(
                "score band {} is outside the valid range {}..={}",
                score_band, MIN_SCORE_BAND, MAX_SCORE_BAND
            )));
        }

        Ok(bands[(score_band - 1) as usize])
    }

    fn domain_table(&self, subtest: &str) -> AppResult<&'static [data::DomainSkills]> {
        self.subtests
            .iter()
            .find(|(name, _)| *name == subtest)
            .map(|(_, domains)| *domains)
            .ok_or_else(|| {
                AppError::InvalidSelection(format!("subtest '{}' is not in the catalog", subtest))
            })
    }
}
