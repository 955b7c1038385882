use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::builder::GroupBuilder;
use crate::model::*;

// [VariationPart]
// add_variationに渡す要素. ファクトリで作ったグループか, 牌を直接並べたリスト.
#[derive(Debug, Clone)]
pub enum VariationPart {
    Built(GroupBuilder),
    Raw(Vec<TileInstance>),
}

impl From<GroupBuilder> for VariationPart {
    fn from(g: GroupBuilder) -> Self {
        VariationPart::Built(g)
    }
}

impl From<Vec<TileInstance>> for VariationPart {
    fn from(v: Vec<TileInstance>) -> Self {
        VariationPart::Raw(v)
    }
}

impl VariationPart {
    fn build(self, group_id: Index) -> TileGroup {
        match self {
            VariationPart::Built(g) => g.build(group_id),
            VariationPart::Raw(tiles) => {
                let role = tiles.first().map_or(Role::Single, |t| t.role());
                let description = format!("Group {}", group_id + 1);
                TileGroup::new(tiles, role, description, group_id)
            }
        }
    }
}

pub type Variation = Vec<TileGroup>;

#[inline]
pub fn tile_count(variation: &[TileGroup]) -> usize {
    variation.iter().map(|g| g.size()).sum()
}

// グループの順番を保ったまま1枚ずつの "牌コード,グループの枚数" に展開
pub fn flatten(variation: &[TileGroup]) -> Vec<String> {
    variation.iter().flat_map(|g| g.entries()).collect()
}

// [Issue]
// 出力時に検出された問題. 生成自体は継続する.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DroppedVariation {
        template: String,
        index: Index,
        tiles: usize,
    },
    EmptyTemplate {
        template: String,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::DroppedVariation {
                template,
                index,
                tiles,
            } => write!(
                f,
                "{}: variation {} dropped ({} tiles, expected {})",
                template,
                index + 1,
                tiles,
                HAND_SIZE
            ),
            Issue::EmptyTemplate { template } => write!(f, "{}: no valid variations", template),
        }
    }
}

// [TemplateRecord]
// 出力カタログ中の1つの手役
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub catid: String,
    pub image: String,
    pub variations: Vec<Vec<String>>,
}

// [HandTemplate]
#[derive(Debug, Clone)]
pub struct HandTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub catid: String,
    pub image: String,
    variations: Vec<Variation>,
}

impl HandTemplate {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        category: &str,
        catid: &str,
        image: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            catid: catid.to_string(),
            image: image.to_string(),
            variations: vec![],
        }
    }

    // 追加時には検証しない (枚数の検証は出力時)
    pub fn add_variation<I, P>(&mut self, parts: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<VariationPart>,
    {
        let groups = parts
            .into_iter()
            .enumerate()
            .map(|(group_id, p)| {
                let part: VariationPart = p.into();
                part.build(group_id)
            })
            .collect();
        self.variations.push(groups);
    }

    #[inline]
    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    pub fn to_record(&self) -> TemplateRecord {
        self.render(&mut vec![])
    }

    // 枚数がHAND_SIZEでないバリエーションは出力せずissuesに記録して次へ進む
    #[tracing::instrument(level = "debug", skip_all, fields(template = %self.id))]
    pub fn render(&self, issues: &mut Vec<Issue>) -> TemplateRecord {
        let mut variations = vec![];
        for (i, v) in self.variations.iter().enumerate() {
            let n = tile_count(v);
            if n != HAND_SIZE {
                debug!(variation = i + 1, tiles = n, "variation dropped");
                issues.push(Issue::DroppedVariation {
                    template: self.id.clone(),
                    index: i,
                    tiles: n,
                });
                continue;
            }
            debug!(variation = i + 1, groups = v.len(), "variation ok");
            variations.push(flatten(v));
        }

        if variations.is_empty() {
            debug!("template has no valid variations");
            issues.push(Issue::EmptyTemplate {
                template: self.id.clone(),
            });
        }

        TemplateRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            catid: self.catid.clone(),
            image: self.image.clone(),
            variations,
        }
    }
}

impl fmt::Display for HandTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) [{} / {}]", self.name, self.id, self.category, self.catid)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  {}", self.image)?;
        for (i, v) in self.variations.iter().enumerate() {
            let groups: Vec<String> = v.iter().map(|g| g.to_string()).collect();
            let mark = if tile_count(v) == HAND_SIZE { ' ' } else { '!' };
            writeln!(f, "{}{:3}: {}", mark, i + 1, groups.join(" "))?;
        }
        Ok(())
    }
}
