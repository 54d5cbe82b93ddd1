//! 語単位の識別子置換

use crate::bindings::{ConcreteSpec, TypeSet};

/// 英数字またはアンダースコアか（識別子の構成文字）
fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// 1行に対してすべてのバインディングを適用する
///
/// 行内の空白は保持され、識別子部分のみが書き換えられる。
pub fn substitute_line(line: &str, typeset: &TypeSet) -> String {
    let mut result = line.to_string();
    for (placeholder, spec) in typeset.iter() {
        if result.contains(placeholder) {
            result = replace_placeholder(&result, placeholder, spec);
        }
    }
    result
}

/// 1つのプレースホルダの全出現を置換する
///
/// 出現ごとに完全一致（型位置）か部分一致（識別子の一部）かを判定し、
/// 完全一致は型参照に、部分一致はwordify形に置き換える。置換結果の
/// 内側は再走査しない。
fn replace_placeholder(line: &str, placeholder: &str, spec: &ConcreteSpec) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(idx) = rest.find(placeholder) {
        let after_idx = idx + placeholder.len();
        let prev = rest[..idx].chars().next_back();
        let next = rest[after_idx..].chars().next();

        let partial = prev.map(is_ident_char).unwrap_or(false)
            || next.map(is_ident_char).unwrap_or(false);

        out.push_str(&rest[..idx]);
        if partial {
            let exported = identifier_is_exported(rest, idx, placeholder);
            out.push_str(&spec.wordify(exported));
        } else {
            out.push_str(spec.type_ref());
        }
        rest = &rest[after_idx..];
    }

    out.push_str(rest);
    out
}

/// 出現を含む識別子の先頭文字が大文字かどうか
///
/// 出現位置から識別子構成文字を後方に辿り、識別子の先頭文字で
/// エクスポート規約を判定する。出現自身が識別子の先頭であれば
/// プレースホルダ名の先頭文字が判定に使われる。
fn identifier_is_exported(line: &str, occurrence: usize, placeholder: &str) -> bool {
    let mut start = occurrence;
    for c in line[..occurrence].chars().rev() {
        if is_ident_char(c) {
            start -= c.len_utf8();
        } else {
            break;
        }
    }
    let first = if start < occurrence {
        line[start..].chars().next()
    } else {
        placeholder.chars().next()
    };
    first.map(|c| c.is_uppercase()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_replaced_with_type_ref() {
        let typeset = TypeSet::from_pairs([("NumberType", "int")]);
        let line = "func Max(a, b NumberType) NumberType {";
        assert_eq!(
            substitute_line(line, &typeset),
            "func Max(a, b int) int {"
        );
    }

    #[test]
    fn test_partial_match_wordified() {
        let typeset = TypeSet::from_pairs([("NumberType", "int")]);
        let line = "func NumberTypeMax(a, b NumberType) NumberType {";
        assert_eq!(
            substitute_line(line, &typeset),
            "func IntMax(a, b int) int {"
        );
    }

    #[test]
    fn test_unexported_identifier_keeps_casing() {
        let typeset = TypeSet::from_pairs([("secret", "MyType")]);
        let line = "func secretInspect(s secret) string {";
        assert_eq!(
            substitute_line(line, &typeset),
            "func myTypeInspect(s MyType) string {"
        );
    }

    #[test]
    fn test_word_boundary_safety() {
        // "Type"を含むだけの無関係な識別子は型位置としては書き換えない
        let typeset = TypeSet::from_pairs([("Type", "Foo")]);
        let line = "var TypeScript Type";
        assert_eq!(substitute_line(line, &typeset), "var FooScript Foo");
    }

    #[test]
    fn test_whitespace_preserved() {
        let typeset = TypeSet::from_pairs([("NumberType", "int")]);
        let line = "\tvar x NumberType";
        assert_eq!(substitute_line(line, &typeset), "\tvar x int");
    }

    #[test]
    fn test_labeled_spec_in_both_positions() {
        let typeset = TypeSet::from_pairs([("FirstType", "Person:person.Person")]);
        let line = "func (p PairFirstType) Left() FirstType {";
        assert_eq!(
            substitute_line(line, &typeset),
            "func (p PairPerson) Left() person.Person {"
        );
    }

    #[test]
    fn test_multiple_placeholders_one_line() {
        let typeset = TypeSet::from_pairs([
            ("FirstType", "Person:person.Person"),
            ("SecondType", "Dog:pet.Dog"),
        ]);
        let line = "type PairFirstTypeSecondType struct {";
        assert_eq!(
            substitute_line(line, &typeset),
            "type PairPersonDog struct {"
        );
    }
}
