use std::str::FromStr;

use serde::{de, ser};

use super::*;

// [Suit]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Bamboo,    // 索子 b
    Character, // 萬子 c
    Dot,       // 筒子 d
}

pub const SUITS: [Suit; 3] = [Suit::Bamboo, Suit::Character, Suit::Dot];

impl Suit {
    #[inline]
    pub fn letter(self) -> char {
        match self {
            Suit::Bamboo => 'b',
            Suit::Character => 'c',
            Suit::Dot => 'd',
        }
    }

    // 大文字小文字は区別しない
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'b' => Some(Suit::Bamboo),
            'c' => Some(Suit::Character),
            'd' => Some(Suit::Dot),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// [Wind]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wind {
    North,
    East,
    South,
    West,
}

impl Wind {
    #[inline]
    pub fn letter(self) -> char {
        match self {
            Wind::North => 'N',
            Wind::East => 'E',
            Wind::South => 'S',
            Wind::West => 'W',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'N' => Some(Wind::North),
            'E' => Some(Wind::East),
            'S' => Some(Wind::South),
            'W' => Some(Wind::West),
            _ => None,
        }
    }
}

// [DragonColor]
// 色で指定された三元牌. 数牌の種類に紐づく Dc/Db/Dd とは別の名前空間.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragonColor {
    Red,
    Green,
    White,
}

impl DragonColor {
    pub fn code(self) -> &'static str {
        match self {
            DragonColor::Red => "RD",
            DragonColor::Green => "GD",
            DragonColor::White => "WD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid tile code: '{0}'")]
pub struct CodeError(pub String);

// [TileCode]
// 牌の正規化済みの識別子. Displayの出力がそのまま出力カタログの牌コードになる.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TileCode {
    Suited(Tnum, Suit),        // 1b ~ 9d
    Dragon(Suit),              // Dc, Db, Dd
    Flower,                    // F
    Wind(Wind),                // N, E, S, W
    ColorDragon(DragonColor),  // RD, GD, WD
    Unresolved(String),        // 解決できなかった記号のフォールバック
}

impl TileCode {
    // 出力カタログの牌コードの文法 [1-9][bcd] | D[cbd] | F | [NESW] に従うかどうか
    pub fn is_wire(&self) -> bool {
        match self {
            TileCode::Suited(n, _) => (TNUM_MIN..=TNUM_MAX).contains(n),
            TileCode::Dragon(_) | TileCode::Flower | TileCode::Wind(_) => true,
            TileCode::ColorDragon(_) | TileCode::Unresolved(_) => false,
        }
    }

    #[inline]
    pub fn is_dragon(&self) -> bool {
        matches!(self, TileCode::Dragon(_) | TileCode::ColorDragon(_))
    }

    #[inline]
    pub fn is_flower(&self) -> bool {
        *self == TileCode::Flower
    }

    #[inline]
    pub fn is_honor(&self) -> bool {
        !matches!(self, TileCode::Suited(..) | TileCode::Unresolved(_))
    }
}

impl fmt::Display for TileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileCode::Suited(n, s) => write!(f, "{}{}", n, s),
            TileCode::Dragon(s) => write!(f, "D{}", s),
            TileCode::Flower => write!(f, "F"),
            TileCode::Wind(w) => write!(f, "{}", w.letter()),
            TileCode::ColorDragon(c) => write!(f, "{}", c.code()),
            TileCode::Unresolved(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Debug for TileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

// 出力カタログの文法に従う牌コードのみ受け付ける
impl FromStr for TileCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CodeError(s.to_string());
        let chars: Vec<char> = s.chars().collect();
        match chars.as_slice() {
            ['F'] => Ok(TileCode::Flower),
            [c] => Wind::from_letter(*c).map(TileCode::Wind).ok_or_else(err),
            ['D', c] if c.is_ascii_lowercase() => {
                Suit::from_letter(*c).map(TileCode::Dragon).ok_or_else(err)
            }
            [n @ '1'..='9', c] if c.is_ascii_lowercase() => {
                let n = n.to_digit(10).ok_or_else(err)? as Tnum;
                Suit::from_letter(*c)
                    .map(|s| TileCode::Suited(n, s))
                    .ok_or_else(err)
            }
            _ => Err(err()),
        }
    }
}

impl ser::Serialize for TileCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileCodeVisitor;

impl<'de> de::Visitor<'de> for TileCodeVisitor {
    type Value = TileCode;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile code")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for TileCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileCodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_wire_codes() {
        assert_eq!(TileCode::Suited(3, Suit::Bamboo).to_string(), "3b");
        assert_eq!(TileCode::Dragon(Suit::Character).to_string(), "Dc");
        assert_eq!(TileCode::Flower.to_string(), "F");
        assert_eq!(TileCode::Wind(Wind::West).to_string(), "W");
        assert_eq!(TileCode::ColorDragon(DragonColor::Red).to_string(), "RD");
    }

    #[test]
    fn test_parse_accepts_only_wire_grammar() {
        for s in ["1b", "9d", "5c", "Dc", "Db", "Dd", "F", "N", "E", "S", "W"] {
            let code: TileCode = s.parse().unwrap();
            assert!(code.is_wire());
            assert_eq!(code.to_string(), s);
        }
        for s in ["0b", "10b", "3B", "DC", "dc", "f", "RD", "?", "", "3x", " 3b"] {
            assert!(s.parse::<TileCode>().is_err(), "{} should be rejected", s);
        }
    }

    #[test]
    fn test_non_wire_codes() {
        assert!(!TileCode::ColorDragon(DragonColor::Green).is_wire());
        assert!(!TileCode::Unresolved("3x".to_string()).is_wire());
        assert!(!TileCode::Suited(0, Suit::Dot).is_wire());
    }

    #[test]
    fn test_serde() {
        let v = vec![TileCode::Suited(7, Suit::Dot), TileCode::Wind(Wind::North)];
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, r#"["7d","N"]"#);
        let v2: Vec<TileCode> = serde_json::from_str(&s).unwrap();
        assert_eq!(v, v2);
        assert!(serde_json::from_str::<TileCode>(r#""GD""#).is_err());
    }
}
