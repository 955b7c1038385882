// 手役の定義. 1つの関数が1つの手役を生成し, 数牌の種類と数字の組み合わせをバリエーションとして列挙する.
use super::builder::*;
use super::template::HandTemplate;
use crate::model::*;

pub type PatternFn = fn() -> HandTemplate;

// 出力カタログに含める手役 (この順番で出力)
pub const PATTERNS: &[(&str, PatternFn)] = &[
    ("sequence_and_kongs", sequence_and_kongs),
    ("p3_k6_p6_k9", p3_k6_p6_k9),
    ("like_kong_kong_pair", like_kong_kong_pair),
    ("even_pungs_2468", even_pungs_2468),
];

pub fn find_pattern(id: &str) -> Option<PatternFn> {
    PATTERNS.iter().find(|(i, _)| *i == id).map(|(_, f)| *f)
}

// s1以外の2種類 (SUITSの順)
fn other_suits(s1: Suit) -> (Suit, Suit) {
    let others: Vec<Suit> = SUITS.iter().copied().filter(|&s| s != s1).collect();
    (others[0], others[1])
}

// 辞書順の順列
fn permutations<T: Copy>(v: &[T]) -> Vec<Vec<T>> {
    if v.len() <= 1 {
        return vec![v.to_vec()];
    }

    let mut res = vec![];
    for i in 0..v.len() {
        let mut rest = v.to_vec();
        let head = rest.remove(i);
        for mut p in permutations(&rest) {
            p.insert(0, head);
            res.push(p);
        }
    }
    res
}

pub fn sequence_and_kongs() -> HandTemplate {
    let mut t = HandTemplate::new(
        "sequence_and_kongs",
        "Sequence and Kongs",
        "One sequence and two kongs",
        "CONSECUTIVE RUN",
        "7",
        "<green>112345 <red>1111 <black>1111",
    );

    // n+4が9を超えないように1~5
    for s1 in SUITS {
        let (s2, s3) = other_suits(s1);
        for n in 1..=5 {
            t.add_variation([
                pair((n, s1)),
                single((n + 1, s1)),
                single((n + 2, s1)),
                single((n + 3, s1)),
                single((n + 4, s1)),
                kong((n, s2)),
                kong((n, s3)),
            ]);
        }
    }

    t
}

pub fn p3_k6_p6_k9() -> HandTemplate {
    let mut t = HandTemplate::new(
        "p3_k6_p6_k9",
        "p3 k6 p6 k9 in 3 suits",
        "Pung of 3s, Kong of 6s (same suit), Pung of 6s (different suit), Kong of 9s",
        "369",
        "1b",
        "<green>333 6666 <red>666 <black>9999",
    );

    for p in permutations(&SUITS) {
        let (s1, s2, s3) = (p[0], p[1], p[2]);
        t.add_variation([pung((3, s1)), kong((6, s1)), pung((6, s2)), kong((9, s3))]);
    }

    t
}

pub fn like_kong_kong_pair() -> HandTemplate {
    let mut t = HandTemplate::new(
        "like_kong_kong_pair",
        "Like Kong Kong Pair",
        "Two kongs and a pair of the same number",
        "ANY LIKE NUMBERS",
        "1",
        "<black>FF <green>1111 D <red>1111 D <black>11",
    );

    for s1 in SUITS {
        let (s2, s3) = other_suits(s1);
        for n in 1..=9 {
            t.add_variation([
                pair("F"),
                kong((n, s2)),
                single(('D', s2)),
                kong((n, s3)),
                single(('D', s3)),
                pair((n, s1)),
            ]);
        }
    }

    t
}

pub fn even_pungs_2468() -> HandTemplate {
    let mut t = HandTemplate::new(
        "even_pungs_2468",
        "2-4-6-8 Even Pungs",
        "Pungs of even numbers 2, 4, 6, 8",
        "EVEN NUMBERS",
        "4",
        "<black>FFFF <green>2468 <red>222 <black>222",
    );

    for s1 in SUITS {
        let (s2, s3) = other_suits(s1);
        for en in [2, 4, 6, 8] {
            t.add_variation([
                kong("F"),
                single((2, s1)),
                single((4, s1)),
                single((6, s1)),
                single((8, s1)),
                pung((en, s2)),
                pung((en, s3)),
            ]);
        }
    }

    t
}
