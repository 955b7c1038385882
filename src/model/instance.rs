use super::*;
use crate::convert::{resolve, resolve_lenient, ResolveError, TileSpec};

// [Face]
// 牌の数字部分. 数字を持たない特殊牌は記号 ('D', 'F', "Dc" など) で指定される.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Num(Tnum),
    Sym(String),
}

impl Face {
    #[inline]
    pub fn number(&self) -> Option<Tnum> {
        match self {
            Face::Num(n) => Some(*n),
            Face::Sym(s) => s.parse().ok(),
        }
    }

    // 記号の比較 (大文字小文字は区別しない)
    #[inline]
    pub fn is_sym(&self, sym: &str) -> bool {
        matches!(self, Face::Sym(s) if s.eq_ignore_ascii_case(sym))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Num(n) => write!(f, "{}", n),
            Face::Sym(s) => write!(f, "{}", s),
        }
    }
}

impl From<Tnum> for Face {
    fn from(n: Tnum) -> Self {
        Face::Num(n)
    }
}

impl From<char> for Face {
    fn from(c: char) -> Self {
        Face::Sym(c.to_string())
    }
}

impl From<&str> for Face {
    fn from(s: &str) -> Self {
        Face::Sym(s.to_string())
    }
}

// [Role]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Single,
    Pair,
    Pung,
    Kong,
    Quint,
}

impl Role {
    // グループに含まれる牌の枚数
    #[inline]
    pub fn arity(self) -> usize {
        match self {
            Role::Single => 1,
            Role::Pair => 2,
            Role::Pung => 3,
            Role::Kong => 4,
            Role::Quint => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Single => "single",
            Role::Pair => "pair",
            Role::Pung => "pung",
            Role::Kong => "kong",
            Role::Quint => "quint",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Role::Single => "Single",
            Role::Pair => "Pair",
            Role::Pung => "Pung",
            Role::Kong => "Kong",
            Role::Quint => "Quint",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// [TileInstance]
// グループ内の1枚の牌. 生成後は変更しない. 牌コードは生成時に一度だけ解決する.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileInstance {
    face: Face,
    marker: String, // 正規化前の種別記号 (タプル等は展開済み)
    role: Role,
    group_id: Index,
    position: u8,
    is_joker: bool,
    code: TileCode,
}

impl TileInstance {
    // 解決できない記号はフォールバックの牌コードになる
    pub fn new(spec: TileSpec, role: Role, group_id: Index, position: u8) -> Self {
        let (face, marker) = spec.normalize();
        let code = resolve_lenient(&face, &marker);
        Self::with_code(face, marker, role, group_id, position, code)
    }

    // 解決できない記号はエラーとして返却
    pub fn try_new(
        spec: TileSpec,
        role: Role,
        group_id: Index,
        position: u8,
    ) -> Result<Self, ResolveError> {
        let (face, marker) = spec.normalize();
        let code = resolve(&face, &marker)?;
        Ok(Self::with_code(face, marker, role, group_id, position, code))
    }

    fn with_code(
        face: Face,
        marker: String,
        role: Role,
        group_id: Index,
        position: u8,
        code: TileCode,
    ) -> Self {
        Self {
            face,
            marker,
            role,
            group_id,
            position,
            is_joker: false,
            code,
        }
    }

    // group_idとpositionを差し替えた複製を返却
    pub fn restamp(&self, group_id: Index, position: u8) -> Self {
        Self {
            group_id,
            position,
            ..self.clone()
        }
    }

    #[inline]
    pub fn face(&self) -> &Face {
        &self.face
    }

    #[inline]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn group_id(&self) -> Index {
        self.group_id
    }

    #[inline]
    pub fn position(&self) -> u8 {
        self.position
    }

    #[inline]
    pub fn is_joker(&self) -> bool {
        self.is_joker
    }

    #[inline]
    pub fn code(&self) -> &TileCode {
        &self.code
    }
}

impl fmt::Display for TileInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_arity() {
        let roles = [Role::Single, Role::Pair, Role::Pung, Role::Kong, Role::Quint];
        let arities: Vec<usize> = roles.iter().map(|r| r.arity()).collect();
        assert_eq!(arities, vec![1, 2, 3, 4, 5]);
        assert_eq!(serde_json::to_string(&Role::Kong).unwrap(), r#""kong""#);
    }

    #[test]
    fn test_instance_resolves_once() {
        let t = TileInstance::new((4, "bam").into(), Role::Pung, 2, 1);
        assert_eq!(t.code(), &TileCode::Suited(4, Suit::Bamboo));
        assert_eq!(t.marker(), "bam");
        assert_eq!(t.group_id(), 2);
        assert!(!t.is_joker());

        let t2 = t.restamp(5, 1);
        assert_eq!(t2.code(), t.code());
        assert_eq!(t2.group_id(), 5);
        assert_eq!(t.group_id(), 2);
    }

    #[test]
    fn test_try_new_rejects_unknown_marker() {
        assert!(TileInstance::try_new((3, "x").into(), Role::Single, 0, 1).is_err());
        let t = TileInstance::new((3, "xyz").into(), Role::Single, 0, 1);
        assert_eq!(t.code(), &TileCode::Unresolved("3x".to_string()));
    }
}
