use super::*;

// [TileGroup]
// 同じ牌で構成される1つの面子 (single/pair/pung/kong/quint)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGroup {
    tiles: Vec<TileInstance>,
    role: Role,
    description: String,
    ordinal: Index, // 手役内でのグループの位置 (0~)
}

impl TileGroup {
    pub fn new(tiles: Vec<TileInstance>, role: Role, description: String, ordinal: Index) -> Self {
        Self {
            tiles,
            role,
            description,
            ordinal,
        }
    }

    #[inline]
    pub fn tiles(&self) -> &[TileInstance] {
        &self.tiles
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn ordinal(&self) -> Index {
        self.ordinal
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    // グループ内の牌はすべて同じ牌コードなので先頭の牌で代表させる
    #[inline]
    pub fn code(&self) -> Option<&TileCode> {
        self.tiles.first().map(|t| t.code())
    }

    // 物理的な牌1枚につき "牌コード,グループの枚数" を1つ出力
    // kong of F -> ["F,4", "F,4", "F,4", "F,4"]
    pub fn entries(&self) -> Vec<String> {
        match self.code() {
            Some(code) => {
                let n = self.size();
                vec![format!("{},{}", code, n); n]
            }
            None => vec![],
        }
    }

    // 同じ牌コードをまとめた "牌コード,枚数" の形式
    pub fn summary(&self) -> GroupSummary {
        let mut counts: Vec<(&TileCode, usize)> = vec![];
        for t in &self.tiles {
            match counts.iter().position(|(c, _)| *c == t.code()) {
                Some(i) => counts[i].1 += 1,
                None => counts.push((t.code(), 1)),
            }
        }

        GroupSummary {
            tiles: counts.iter().map(|(c, n)| format!("{},{}", c, n)).collect(),
            role: self.role,
            description: self.description.clone(),
        }
    }
}

impl fmt::Display for TileGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<String> = self.tiles.iter().map(|t| t.code().to_string()).collect();
        write!(f, "{}", codes.concat())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub tiles: Vec<String>,
    #[serde(rename = "type")]
    pub role: Role,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(spec: (Tnum, &str), role: Role) -> TileGroup {
        let tiles = (0..role.arity())
            .map(|_| TileInstance::new(spec.into(), role, 0, 1))
            .collect();
        TileGroup::new(tiles, role, "test".to_string(), 0)
    }

    #[test]
    fn test_entries_repeat_per_tile() {
        let g = group((1, "F"), Role::Kong);
        assert_eq!(g.entries(), vec!["F,4", "F,4", "F,4", "F,4"]);
        let g = group((3, "b"), Role::Single);
        assert_eq!(g.entries(), vec!["3b,1"]);
    }

    #[test]
    fn test_empty_group() {
        let g = TileGroup::new(vec![], Role::Single, String::new(), 0);
        assert_eq!(g.code(), None);
        assert!(g.entries().is_empty());
    }

    #[test]
    fn test_summary() {
        let g = group((6, "dot"), Role::Pung);
        let s = g.summary();
        assert_eq!(s.tiles, vec!["6d,3"]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"tiles":["6d,3"],"type":"pung","description":"test"}"#);
        assert_eq!(g.to_string(), "6d6d6d");
    }
}
