//! 具体型指定とwordify規則

/// 1つのプレースホルダを置き換える具体型の指定
///
/// `Label:ConcreteType` 形式のラベルを持つ場合、ラベルが識別子合成用、
/// 型参照部が型位置への置換用に使われる。ラベルがなければ指定文字列が
/// 両方の役割を兼ねる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteSpec {
    raw: String,
}

impl ConcreteSpec {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// 指定文字列そのもの
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 型位置への置換に使う型参照（`:` の右側、なければ全体）
    pub fn type_ref(&self) -> &str {
        match self.raw.find(':') {
            Some(idx) => &self.raw[idx + 1..],
            None => &self.raw,
        }
    }

    /// 識別子合成用の語形（wordify）を返す
    ///
    /// ラベル部（なければ全体）から装飾を取り除き、識別子の一部として
    /// 使える形にする：
    /// - 末尾の `{` `}` を除去（`interface{}` → `interface`）
    /// - 先頭の `*` `&` を除去（ポインタ・参照装飾）
    /// - `.` をすべて除去（`pet.Dog` → `petDog`）
    /// - 先頭文字を `exported` に合わせて大文字/小文字に揃える
    pub fn wordify(&self, exported: bool) -> String {
        let base = match self.raw.find(':') {
            Some(idx) => &self.raw[..idx],
            None => &self.raw,
        };
        let stripped: String = base
            .trim_end_matches(['{', '}'])
            .trim_start_matches(['*', '&'])
            .replace('.', "");

        let mut chars = stripped.chars();
        match chars.next() {
            Some(first) => {
                let first = if exported {
                    first.to_ascii_uppercase()
                } else {
                    first.to_ascii_lowercase()
                };
                let mut out = String::with_capacity(stripped.len());
                out.push(first);
                out.push_str(chars.as_str());
                out
            }
            None => stripped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("int", true, "Int"; "plain exported")]
    #[test_case("int", false, "int"; "plain unexported")]
    #[test_case("pet.Dog", true, "PetDog"; "qualified exported")]
    #[test_case("pet.Dog", false, "petDog"; "qualified unexported")]
    #[test_case("interface{}", true, "Interface"; "braces stripped")]
    #[test_case("*Node", true, "Node"; "pointer stripped")]
    #[test_case("&Node", false, "node"; "reference stripped")]
    #[test_case("Person:person.Person", true, "Person"; "label exported")]
    #[test_case("Person:person.Person", false, "person"; "label unexported")]
    fn test_wordify(raw: &str, exported: bool, expected: &str) {
        assert_eq!(ConcreteSpec::new(raw).wordify(exported), expected);
    }

    #[test_case("int", "int"; "plain")]
    #[test_case("Person:person.Person", "person.Person"; "labeled")]
    #[test_case("Dog:pet.Dog", "pet.Dog"; "labeled qualified")]
    fn test_type_ref(raw: &str, expected: &str) {
        assert_eq!(ConcreteSpec::new(raw).type_ref(), expected);
    }
}
