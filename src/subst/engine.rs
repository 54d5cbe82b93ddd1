//! 行単位の置換エンジン本体

use super::buffer::{CommentHold, InterfaceBuffer};
use super::words::substitute_line;
use crate::bindings::TypeSet;

/// プレースホルダ宣言の目印となる予約セレクタ
const GENERIC_TYPE: &str = "generic.Type";
const GENERIC_NUMBER: &str = "generic.Number";

/// 1テンプレート×1`TypeSet`の特殊化エンジン
#[derive(Debug, Default)]
pub struct Specializer;

impl Specializer {
    pub fn new() -> Self {
        Self
    }

    /// テンプレート全体を1つの`TypeSet`で特殊化する
    ///
    /// 事前にバリデータが構造と束縛の完全性を確認している前提で動作し、
    /// ここでは解析エラーは発生しない。
    pub fn specialize(&self, template: &str, typeset: &TypeSet) -> String {
        let mut out = String::with_capacity(template.len());
        let mut comment = CommentHold::new();
        let mut interface = InterfaceBuffer::new();

        for raw_line in template.lines() {
            let line = raw_line.trim_end_matches('\r');

            if interface.is_buffering() {
                // プレースホルダ宣言の参照はブロックをジェネリック専用とみなす
                if line.contains(GENERIC_TYPE) || line.contains(GENERIC_NUMBER) {
                    interface.mark_placeholder();
                    continue;
                }
                let line = substitute_line(line, typeset);
                if is_interface_end(&line) {
                    if let Some(block) = interface.close(line) {
                        for buffered in block {
                            push_line(&mut out, &buffered);
                        }
                    }
                } else {
                    interface.push(line);
                }
                continue;
            }

            // 純粋なジェネリック宣言行は保留コメントごと除去する
            if line.contains(GENERIC_TYPE) || line.contains(GENERIC_NUMBER) {
                comment.discard();
                continue;
            }

            let line = substitute_line(line, typeset);

            // 1行で完結した宣言はバッファリング不要
            if is_interface_begin(&line) && !line.trim_end().ends_with('}') {
                // 先行コメントはブロックと運命を共にする
                let mut opening = Vec::with_capacity(2);
                if let Some(held) = comment.take() {
                    opening.push(held);
                }
                opening.push(line);
                interface.begin(opening);
                continue;
            }

            if line.starts_with("//") {
                comment.hold(line);
                continue;
            }

            if let Some(held) = comment.take() {
                push_line(&mut out, &held);
            }
            push_line(&mut out, &line);
        }

        out
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// `type <Ident> interface {` 形式の開始行か
fn is_interface_begin(line: &str) -> bool {
    let s = line.trim_start();
    let Some(s) = s.strip_prefix("type") else {
        return false;
    };
    let Some(first) = s.chars().next() else {
        return false;
    };
    if !first.is_whitespace() {
        return false;
    }
    let s = s.trim_start();

    let ident_len = s
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .map(char::len_utf8)
        .sum::<usize>();
    if ident_len == 0 {
        return false;
    }
    let s = &s[ident_len..];
    let Some(first) = s.chars().next() else {
        return false;
    };
    if !first.is_whitespace() {
        return false;
    }

    let s = s.trim_start();
    let Some(s) = s.strip_prefix("interface") else {
        return false;
    };
    s.trim_start().starts_with('{')
}

/// インタフェースブロックの閉じ行か
fn is_interface_end(line: &str) -> bool {
    line.trim_start().starts_with('}')
}
