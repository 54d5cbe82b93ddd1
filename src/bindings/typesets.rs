//! コマンドライン型指定引数の解析
//!
//! `"KeyType=string,int ValueType=Name:pkg.Type"` 形式の文字列を
//! `TypeSet` の列に展開する。各ペアの値がカンマ区切りで複数ある場合、
//! 全ペアの直積がそれぞれ1つの `TypeSet` になる。

use super::{ConcreteSpec, TypeSet};
use crate::error::BindingError;

/// 型指定引数文字列を `TypeSet` の列に解析する
pub fn parse_typeset_args(arg: &str) -> Result<Vec<TypeSet>, BindingError> {
    let mut names: Vec<&str> = Vec::new();
    let mut values: Vec<Vec<&str>> = Vec::new();

    for pair in arg.split_whitespace() {
        let (name, specs) = pair
            .split_once('=')
            .ok_or_else(|| BindingError::InvalidTypeSetArg {
                arg: pair.to_string(),
            })?;
        if name.is_empty() || specs.is_empty() {
            return Err(BindingError::InvalidTypeSetArg {
                arg: pair.to_string(),
            });
        }

        let specs: Vec<&str> = specs.split(',').collect();
        if specs.iter().any(|s| s.is_empty()) {
            return Err(BindingError::InvalidTypeSetArg {
                arg: pair.to_string(),
            });
        }

        names.push(name);
        values.push(specs);
    }

    if names.is_empty() {
        return Err(BindingError::EmptyTypeSet);
    }

    // 全ペアの値の直積を展開する
    let mut sets = vec![TypeSet::new()];
    for (name, specs) in names.iter().zip(values.iter()) {
        let mut next = Vec::with_capacity(sets.len() * specs.len());
        for set in &sets {
            for spec in specs {
                let mut expanded = set.clone();
                expanded.insert(*name, ConcreteSpec::new(*spec));
                next.push(expanded);
            }
        }
        sets = next;
    }

    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair() {
        let sets = parse_typeset_args("NumberType=int").unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].get("NumberType").unwrap().raw(), "int");
    }

    #[test]
    fn test_two_pairs_one_set() {
        let sets =
            parse_typeset_args("FirstType=Person:person.Person SecondType=Dog:pet.Dog").unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].len(), 2);
        assert_eq!(sets[0].get("SecondType").unwrap().type_ref(), "pet.Dog");
    }

    #[test]
    fn test_cartesian_product() {
        let sets = parse_typeset_args("KeyType=string,int ValueType=bool,float64").unwrap();
        assert_eq!(sets.len(), 4);
        assert_eq!(sets[0].get("KeyType").unwrap().raw(), "string");
        assert_eq!(sets[0].get("ValueType").unwrap().raw(), "bool");
        assert_eq!(sets[3].get("KeyType").unwrap().raw(), "int");
        assert_eq!(sets[3].get("ValueType").unwrap().raw(), "float64");
    }

    #[test]
    fn test_malformed_pair() {
        let err = parse_typeset_args("NumberType").unwrap_err();
        assert!(matches!(err, BindingError::InvalidTypeSetArg { .. }));

        let err = parse_typeset_args("NumberType=").unwrap_err();
        assert!(matches!(err, BindingError::InvalidTypeSetArg { .. }));
    }

    #[test]
    fn test_empty_arg() {
        let err = parse_typeset_args("   ").unwrap_err();
        assert!(matches!(err, BindingError::EmptyTypeSet));
    }
}
