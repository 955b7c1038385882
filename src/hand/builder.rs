use crate::convert::{Marker, TileSpec};
use crate::model::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
    #[error("incomplete (number, suit) pair at argument {position}")]
    IncompletePair { position: Index },
    #[error("{role} needs {expected} tiles, got {found}")]
    Arity {
        role: Role,
        expected: usize,
        found: usize,
    },
    #[error("{role} mixes different tiles: {first} and {other}")]
    MixedTiles {
        role: Role,
        first: TileCode,
        other: TileCode,
    },
}

// [TileArg]
// from_argsに渡す引数. 数字と種別をばらばらに並べる古い呼び出し形式も受け付ける.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileArg {
    Spec(TileSpec),
    Loose(Face),
}

impl From<TileSpec> for TileArg {
    fn from(s: TileSpec) -> Self {
        TileArg::Spec(s)
    }
}

impl From<Tnum> for TileArg {
    fn from(n: Tnum) -> Self {
        TileArg::Loose(Face::Num(n))
    }
}

impl From<&str> for TileArg {
    fn from(s: &str) -> Self {
        TileArg::Loose(Face::from(s))
    }
}

impl From<char> for TileArg {
    fn from(c: char) -> Self {
        TileArg::Loose(Face::from(c))
    }
}

// [GroupBuilder]
// 手役に追加される前のグループ. group_idは手役に追加される時に決まる.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBuilder {
    role: Role,
    description: String,
    tiles: Vec<TileInstance>,
}

impl GroupBuilder {
    // roleの枚数分だけ同じ牌を並べる
    pub fn of(role: Role, spec: TileSpec) -> Self {
        let tile = TileInstance::new(spec, role, 0, 1);
        let description = default_description(role, &tile);
        let tiles = vec![tile; role.arity()];
        Self {
            role,
            description,
            tiles,
        }
    }

    // (数字, 種別) の組, もしくは 数字, 種別, 数字, 種別, ... の並びからグループを作成
    pub fn from_args(role: Role, args: Vec<TileArg>) -> Result<Self, FactoryError> {
        let mut specs = vec![];
        let mut it = args.into_iter().enumerate();
        while let Some((i, arg)) = it.next() {
            match arg {
                TileArg::Spec(spec) => specs.push(spec),
                TileArg::Loose(face) => match it.next() {
                    Some((_, TileArg::Loose(m))) => {
                        specs.push(TileSpec::new(face, Marker::Scalar(m.to_string())));
                    }
                    _ => return Err(FactoryError::IncompletePair { position: i }),
                },
            }
        }

        if specs.len() != role.arity() {
            return Err(FactoryError::Arity {
                role,
                expected: role.arity(),
                found: specs.len(),
            });
        }

        let tiles: Vec<TileInstance> = specs
            .into_iter()
            .map(|s| TileInstance::new(s, role, 0, 1))
            .collect();
        let first = &tiles[0];
        if let Some(other) = tiles.iter().find(|t| t.code() != first.code()) {
            return Err(FactoryError::MixedTiles {
                role,
                first: first.code().clone(),
                other: other.code().clone(),
            });
        }

        Ok(Self {
            role,
            description: default_description(role, first),
            tiles,
        })
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
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
    pub fn tiles(&self) -> &[TileInstance] {
        &self.tiles
    }

    // position_in_groupは枚数に関わらずすべて1
    // (枚数はグループのサイズで表すため, positionは「複数枚のグループに属する」目印でしかない)
    pub fn build(self, group_id: Index) -> TileGroup {
        let tiles = self.tiles.iter().map(|t| t.restamp(group_id, 1)).collect();
        TileGroup::new(tiles, self.role, self.description, group_id)
    }
}

fn default_description(role: Role, tile: &TileInstance) -> String {
    let code = tile.code();
    let label = if code.is_honor() {
        code.to_string()
    } else {
        format!("{}{}", tile.face(), tile.marker())
    };

    match role {
        Role::Single if code.is_flower() => "Flower".to_string(),
        Role::Single if code.is_dragon() => format!("Dragon {}", label),
        Role::Single => format!("Single {}", label),
        Role::Pair => format!("Pair of {}", label),
        r if code.is_flower() => format!("{} of Flowers", r.title()),
        r => format!("{} of {}", r.title(), label),
    }
}

pub fn single(spec: impl Into<TileSpec>) -> GroupBuilder {
    GroupBuilder::of(Role::Single, spec.into())
}

pub fn pair(spec: impl Into<TileSpec>) -> GroupBuilder {
    GroupBuilder::of(Role::Pair, spec.into())
}

pub fn pung(spec: impl Into<TileSpec>) -> GroupBuilder {
    GroupBuilder::of(Role::Pung, spec.into())
}

pub fn kong(spec: impl Into<TileSpec>) -> GroupBuilder {
    GroupBuilder::of(Role::Kong, spec.into())
}

pub fn quint(spec: impl Into<TileSpec>) -> GroupBuilder {
    GroupBuilder::of(Role::Quint, spec.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn codes(g: &GroupBuilder) -> Vec<String> {
        g.tiles().iter().map(|t| t.code().to_string()).collect()
    }

    #[test]
    fn test_arity() {
        for (g, n) in [
            (single((5, 'b')), 1),
            (pair((5, 'b')), 2),
            (pung((5, 'b')), 3),
            (kong((5, 'b')), 4),
            (quint((5, 'b')), 5),
        ] {
            assert_eq!(g.tiles().len(), n);
            assert_eq!(g.role().arity(), n);
            assert!(codes(&g).iter().all(|c| c == "5b"));
            assert!(g.tiles().iter().all(|t| t.position() == 1));
        }
    }

    #[test]
    fn test_dragon_call_shapes() {
        for g in [pung(('D', 'c')), pung("Dc"), pung((1, "Dc")), pung(("Dc", "b"))] {
            assert_eq!(codes(&g), vec!["Dc", "Dc", "Dc"]);
        }
        for s in [Suit::Bamboo, Suit::Character, Suit::Dot] {
            let g = single(('D', s));
            assert_eq!(codes(&g), vec![format!("D{}", s)]);
        }
    }

    #[test]
    fn test_flower_call_shapes() {
        assert_eq!(codes(&single("F")), vec!["F"]);
        assert_eq!(codes(&pair("F")), vec!["F", "F"]);
        assert_eq!(codes(&kong((1, "F"))), vec!["F"; 4]);
    }

    #[test]
    fn test_default_descriptions() {
        assert_eq!(single((3, "b")).description(), "Single 3b");
        assert_eq!(single("F").description(), "Flower");
        assert_eq!(single(('D', 'd')).description(), "Dragon Dd");
        assert_eq!(pair("Dc").description(), "Pair of Dc");
        assert_eq!(pair("F").description(), "Pair of F");
        assert_eq!(pung((6, 'c')).description(), "Pung of 6c");
        assert_eq!(kong("F").description(), "Kong of Flowers");
        assert_eq!(kong("N").description(), "Kong of N");
        assert_eq!(kong((9, 'd')).describe("nines").description(), "nines");
    }

    #[test]
    fn test_build_stamps_group_id() {
        let g = kong((2, 'c')).build(3);
        assert_eq!(g.ordinal(), 3);
        assert_eq!(g.size(), 4);
        assert!(g.tiles().iter().all(|t| t.group_id() == 3 && t.position() == 1));
        assert!(g.tiles().iter().all(|t| t.role() == Role::Kong));
    }

    #[test]
    fn test_from_args() {
        let g = GroupBuilder::from_args(Role::Pair, vec![3.into(), "b".into(), 3.into(), "bam".into()])
            .unwrap();
        assert_eq!(codes(&g), vec!["3b", "3b"]);
        assert_eq!(g.description(), "Pair of 3b");

        let g = GroupBuilder::from_args(
            Role::Pung,
            vec![
                TileSpec::from((1, "Dd")).into(),
                1.into(),
                "Dd".into(),
                TileSpec::from(('D', 'd')).into(),
            ],
        )
        .unwrap();
        assert_eq!(codes(&g), vec!["Dd"; 3]);
    }

    #[test]
    fn test_from_args_errors() {
        assert_eq!(
            GroupBuilder::from_args(Role::Pair, vec![3.into(), "b".into(), 3.into()]),
            Err(FactoryError::IncompletePair { position: 2 })
        );
        assert_eq!(
            GroupBuilder::from_args(Role::Kong, vec![3.into(), "b".into()]),
            Err(FactoryError::Arity {
                role: Role::Kong,
                expected: 4,
                found: 1
            })
        );
        assert!(matches!(
            GroupBuilder::from_args(Role::Pair, vec![3.into(), "b".into(), 4.into(), "b".into()]),
            Err(FactoryError::MixedTiles { .. })
        ));
    }
}
