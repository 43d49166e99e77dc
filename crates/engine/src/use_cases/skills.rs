//! Class skill files: verbatim read/write and level-scaled views.

use std::sync::Arc;

use gamedb_domain::{ScalingTables, SkillStatCalculator, SkillsDocument};
use gamedb_shared::{ScaledSkillView, ScaledSkillsQuery, ScaledSkillsResponse};
use serde_json::Value;

use crate::infrastructure::ports::{DocumentPath, GameDataRepo};

use super::documents::{load_or_default, parse_document, DataError};

pub struct SkillUseCases {
    repo: Arc<dyn GameDataRepo>,
}

impl SkillUseCases {
    pub fn new(repo: Arc<dyn GameDataRepo>) -> Self {
        Self { repo }
    }

    /// The skills file exactly as stored.
    pub async fn get_document(&self, class: &str) -> Result<Value, DataError> {
        let path = DocumentPath::class_skills(class)?;
        Ok(self.repo.read_document(&path).await?)
    }

    /// Replace the skills file with `document`. The body is not checked
    /// against the skill schema and concurrent saves are last-write-wins.
    pub async fn save_document(&self, class: &str, document: &Value) -> Result<(), DataError> {
        let path = DocumentPath::class_skills(class)?;
        self.repo.write_document(&path, document).await?;
        tracing::info!(class = %class, "Saved class skills");
        Ok(())
    }

    /// Balance tables from `systems/skill_scaling.json`, or the built-in ones.
    pub async fn scaling_tables(&self) -> Result<ScalingTables, DataError> {
        load_or_default(
            self.repo.as_ref(),
            &DocumentPath::skill_scaling(),
            ScalingTables::builtin,
        )
        .await
    }

    /// The class's skills, filtered, each with its stats at the query level.
    pub async fn scaled(
        &self,
        class: &str,
        query: &ScaledSkillsQuery,
    ) -> Result<ScaledSkillsResponse, DataError> {
        let path = DocumentPath::class_skills(class)?;
        let document = self.repo.read_document(&path).await?;
        let skills: SkillsDocument = parse_document(&path, document)?;

        let calculator = SkillStatCalculator::new(self.scaling_tables().await?);
        let level = query.level();
        let filter = query.filter();

        let views: Vec<ScaledSkillView> = filter
            .apply(&skills.skills)
            .into_iter()
            .map(|skill| ScaledSkillView {
                stats: calculator.calculate(skill, level),
                skill: skill.clone(),
            })
            .collect();

        tracing::debug!(
            class = %class,
            level,
            total = skills.skills.len(),
            shown = views.len(),
            "Scaled class skills"
        );

        Ok(ScaledSkillsResponse {
            class: class.to_string(),
            level,
            total: skills.skills.len(),
            skills: views,
        })
    }
}
