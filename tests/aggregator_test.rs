//! 集約テスト
//!
//! 複数TypeSetの特殊化を1つのソースへマージする正規化パスの
//! テストスイート。package句とインポートブロックの一意性を検証する。

#[cfg(test)]
mod tests {
    use monogo::aggregate::Aggregator;
    use monogo::bindings::{parse_typeset_args, TypeSet};

    const SET_TEMPLATE: &str = r#"package sets

import (
	"fmt"

	"github.com/yuniruyuni/monogo/generic"
)

type ItemType generic.Type

type ItemTypeSet struct {
	items map[ItemType]bool
}

func NewItemTypeSet() *ItemTypeSet {
	return &ItemTypeSet{items: make(map[ItemType]bool)}
}

func (s *ItemTypeSet) String() string {
	return fmt.Sprintf("%v", s.items)
}
"#;

    fn typesets(args: &str) -> Vec<TypeSet> {
        parse_typeset_args(args).unwrap()
    }

    #[test]
    fn test_single_package_clause_across_specializations() {
        let aggregator = Aggregator::new(None);
        let merged = aggregator.aggregate(SET_TEMPLATE, &typesets("ItemType=string,int"));

        assert_eq!(merged.matches("package sets").count(), 1);
        assert!(merged.contains("type StringSet struct {"));
        assert!(merged.contains("type IntSet struct {"));
    }

    #[test]
    fn test_single_import_block_with_union_of_imports() {
        let aggregator = Aggregator::new(None);
        let merged = aggregator.aggregate(SET_TEMPLATE, &typesets("ItemType=string,int"));

        assert_eq!(merged.matches("import (").count(), 1);
        assert_eq!(merged.matches("\"fmt\"").count(), 1);
        // 特殊化で消えるgenericパッケージのインポートは残らない
        assert!(!merged.contains("monogo/generic"));
    }

    #[test]
    fn test_specialization_order_is_request_order() {
        let aggregator = Aggregator::new(None);
        let merged = aggregator.aggregate(SET_TEMPLATE, &typesets("ItemType=string,int"));

        let string_pos = merged.find("type StringSet").unwrap();
        let int_pos = merged.find("type IntSet").unwrap();
        assert!(string_pos < int_pos);
    }

    #[test]
    fn test_every_declaration_present_exactly_once() {
        let aggregator = Aggregator::new(None);
        let merged = aggregator.aggregate(SET_TEMPLATE, &typesets("ItemType=string,int"));

        assert_eq!(merged.matches("func NewStringSet()").count(), 1);
        assert_eq!(merged.matches("func NewIntSet()").count(), 1);
    }

    #[test]
    fn test_generated_header_present() {
        let aggregator = Aggregator::new(None);
        let merged = aggregator.aggregate(SET_TEMPLATE, &typesets("ItemType=int"));
        assert!(merged.contains("// This file was automatically generated by monogo."));
    }

    #[test]
    fn test_strip_tag_removes_template_guard() {
        let template = "// +build monogo\n\npackage sets\n\ntype T generic.Type\n\nvar x T\n";
        let aggregator = Aggregator::new(Some("monogo"));
        let merged = aggregator.aggregate(template, &typesets("T=int"));

        assert!(!merged.contains("+build"));
        assert!(merged.contains("var x int"));
    }
}
