use serde::{Deserialize, Serialize};
use tracing::info;

use super::patterns::PATTERNS;
use super::template::{Issue, TemplateRecord};
use crate::model::CATALOG_VERSION;

// [Catalog]
// 出力カタログ全体. クライアントはこれをJSONとして読み込む.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub templates: Vec<TemplateRecord>,
}

// 生成結果と生成中に検出された問題
#[derive(Debug, Clone)]
pub struct Generation {
    pub catalog: Catalog,
    pub issues: Vec<Issue>,
}

impl Generation {
    pub fn has_empty_template(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i, Issue::EmptyTemplate { .. }))
    }
}

pub fn generate() -> Generation {
    let mut issues = vec![];
    let mut templates = vec![];
    for (_, pattern) in PATTERNS {
        let record = pattern().render(&mut issues);
        templates.push(record);
    }

    let n_variations: usize = templates.iter().map(|t| t.variations.len()).sum();
    info!(
        templates = templates.len(),
        variations = n_variations,
        issues = issues.len(),
        "catalog generated"
    );

    Generation {
        catalog: Catalog {
            version: CATALOG_VERSION.to_string(),
            templates,
        },
        issues,
    }
}

pub fn generate_all_templates() -> Catalog {
    generate().catalog
}

// インデント2のJSON
pub fn render_catalog(catalog: &Catalog) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let g = generate();
        assert_eq!(g.catalog.version, "1.0.0");
        assert_eq!(g.catalog.templates.len(), PATTERNS.len());
        assert!(g.issues.is_empty());
        assert!(!g.has_empty_template());
    }

    #[test]
    fn test_render_layout() {
        let catalog = Catalog {
            version: CATALOG_VERSION.to_string(),
            templates: vec![],
        };
        let bytes = render_catalog(&catalog).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "{\n  \"version\": \"1.0.0\",\n  \"templates\": []\n}"
        );
    }
}
