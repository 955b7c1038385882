// 出力済みのカタログを検証する
use super::catalog::Catalog;
use super::template::TemplateRecord;
use crate::model::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidateError {
    #[error("{template}: no variations")]
    NoVariations { template: String },
    #[error("{template}: variation {variation}: malformed entry '{entry}'")]
    MalformedEntry {
        template: String,
        variation: Index,
        entry: String,
    },
    #[error("{template}: variation {variation}: {found} tiles, expected {expected}")]
    TileCount {
        template: String,
        variation: Index,
        found: usize,
        expected: usize,
    },
    #[error("{template}: variation {variation}: run of {len} '{code}' does not fit group size {size}")]
    BrokenGroup {
        template: String,
        variation: Index,
        code: TileCode,
        size: usize,
        len: usize,
    },
}

// "牌コード,グループの枚数"
pub fn parse_entry(entry: &str) -> Option<(TileCode, usize)> {
    let (code, size) = entry.split_once(',')?;
    if size.is_empty() || size.starts_with('0') || !size.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((code.parse().ok()?, size.parse().ok()?))
}

pub fn validate_template(t: &TemplateRecord) -> Vec<ValidateError> {
    let mut errors = vec![];
    if t.variations.is_empty() {
        errors.push(ValidateError::NoVariations {
            template: t.id.clone(),
        });
    }

    for (vi, v) in t.variations.iter().enumerate() {
        let variation = vi + 1;
        if v.len() != HAND_SIZE {
            errors.push(ValidateError::TileCount {
                template: t.id.clone(),
                variation,
                found: v.len(),
                expected: HAND_SIZE,
            });
        }

        // 同じエントリが連続する区間の長さはグループの枚数の倍数になる
        let mut runs: Vec<(&str, TileCode, usize, usize)> = vec![]; // (entry, code, size, len)
        for entry in v {
            let Some((code, size)) = parse_entry(entry) else {
                errors.push(ValidateError::MalformedEntry {
                    template: t.id.clone(),
                    variation,
                    entry: entry.clone(),
                });
                continue;
            };
            if let Some((e, _, _, len)) = runs.last_mut() {
                if *e == entry.as_str() {
                    *len += 1;
                    continue;
                }
            }
            runs.push((entry.as_str(), code, size, 1));
        }

        for (_, code, size, len) in runs {
            if len % size != 0 {
                errors.push(ValidateError::BrokenGroup {
                    template: t.id.clone(),
                    variation,
                    code,
                    size,
                    len,
                });
            }
        }
    }

    errors
}

pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidateError> {
    catalog.templates.iter().flat_map(validate_template).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::generate_all_templates;
    use pretty_assertions::assert_eq;

    fn record(variations: Vec<Vec<&str>>) -> TemplateRecord {
        TemplateRecord {
            id: "t".to_string(),
            name: String::new(),
            description: String::new(),
            category: String::new(),
            catid: String::new(),
            image: String::new(),
            variations: variations
                .into_iter()
                .map(|v| v.into_iter().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("F,4"), Some((TileCode::Flower, 4)));
        assert_eq!(parse_entry("3b,1"), Some((TileCode::Suited(3, Suit::Bamboo), 1)));
        for e in ["F", "F,", "F,0", "F, 4", " F,4", "F,+4", "F,04", "RD,1", "3b,1,1", "?,1"] {
            assert_eq!(parse_entry(e), None, "{}", e);
        }
    }

    #[test]
    fn test_generated_catalog_is_valid() {
        assert_eq!(validate_catalog(&generate_all_templates()), vec![]);
    }

    #[test]
    fn test_detects_problems() {
        let mut v = vec!["F,4"; 4];
        v.extend(vec!["1b,3"; 3]);
        v.extend(vec!["2b,3"; 2]);
        v.push("x,1");
        let errors = validate_template(&record(vec![v]));
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ValidateError::TileCount { found: 10, .. }));
        assert!(matches!(errors[1], ValidateError::MalformedEntry { .. }));
        assert!(matches!(errors[2], ValidateError::BrokenGroup { len: 2, size: 3, .. }));

        let errors = validate_template(&record(vec![]));
        assert_eq!(
            errors,
            vec![ValidateError::NoVariations {
                template: "t".to_string()
            }]
        );
    }
}
