//! 行バッファリングの状態機械
//!
//! 置換エンジンが使う2つの保留ポリシーを独立した小さな状態機械として
//! 実装する。どちらも単体でテスト可能。

/// 直前のコメント行を最大1行だけ保留する
///
/// コメント行は即座には出力されず、次に実際に出力される行の直前に
/// 出力される。次の行がジェネリック宣言として除去された場合は
/// コメントも一緒に破棄される。
#[derive(Debug, Default)]
pub struct CommentHold {
    held: Option<String>,
}

impl CommentHold {
    pub fn new() -> Self {
        Self::default()
    }

    /// コメント行を保留する（既存の保留は置き換え）
    pub fn hold(&mut self, line: String) {
        self.held = Some(line);
    }

    /// 保留中のコメントを取り出す
    pub fn take(&mut self) -> Option<String> {
        self.held.take()
    }

    /// 保留中のコメントを破棄する
    pub fn discard(&mut self) {
        self.held = None;
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }
}

/// インタフェース宣言ブロックのバッファ
///
/// 開始行から閉じ行までを蓄積し、閉じた時点でブロックが
/// プレースホルダ型を参照していたかどうかで出力か破棄かを決める。
#[derive(Debug, Default)]
pub enum InterfaceBuffer {
    /// バッファリングしていない
    #[default]
    Idle,
    /// ブロック蓄積中
    Buffering {
        lines: Vec<String>,
        saw_placeholder: bool,
    },
}

impl InterfaceBuffer {
    pub fn new() -> Self {
        Self::Idle
    }

    /// 開始行（先行コメントを含むことがある）からバッファリングを始める
    ///
    /// 先行コメントをブロックと一緒に保留することで、ブロックが破棄
    /// される場合はコメントも一緒に消える。
    pub fn begin(&mut self, opening: Vec<String>) {
        *self = Self::Buffering {
            lines: opening,
            saw_placeholder: false,
        };
    }

    /// 蓄積中の行を追加
    pub fn push(&mut self, line: String) {
        if let Self::Buffering { lines, .. } = self {
            lines.push(line);
        }
    }

    /// ブロックがプレースホルダ型を参照したことを記録
    pub fn mark_placeholder(&mut self) {
        if let Self::Buffering {
            saw_placeholder, ..
        } = self
        {
            *saw_placeholder = true;
        }
    }

    pub fn is_buffering(&self) -> bool {
        matches!(self, Self::Buffering { .. })
    }

    /// 閉じ行でブロックを確定する
    ///
    /// プレースホルダ型を参照していなければブロック全体
    /// （閉じ行を含む）を返し、参照していれば`None`（破棄）を返す。
    pub fn close(&mut self, closing_line: String) -> Option<Vec<String>> {
        match std::mem::take(self) {
            Self::Buffering {
                mut lines,
                saw_placeholder,
            } => {
                if saw_placeholder {
                    None
                } else {
                    lines.push(closing_line);
                    Some(lines)
                }
            }
            Self::Idle => Some(vec![closing_line]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_hold_take() {
        let mut hold = CommentHold::new();
        assert!(!hold.is_holding());

        hold.hold("// a doc comment".to_string());
        assert!(hold.is_holding());
        assert_eq!(hold.take().as_deref(), Some("// a doc comment"));
        assert!(!hold.is_holding());
    }

    #[test]
    fn test_comment_discard_on_elision() {
        let mut hold = CommentHold::new();
        hold.hold("// attached to a generic decl".to_string());
        hold.discard();
        assert_eq!(hold.take(), None);
    }

    #[test]
    fn test_interface_buffer_flushes_non_generic_block() {
        let mut buffer = InterfaceBuffer::new();
        buffer.begin(vec!["type Stringer interface {".to_string()]);
        buffer.push("\tString() string".to_string());

        let flushed = buffer.close("}".to_string()).unwrap();
        assert_eq!(
            flushed,
            vec![
                "type Stringer interface {".to_string(),
                "\tString() string".to_string(),
                "}".to_string(),
            ]
        );
        assert!(!buffer.is_buffering());
    }

    #[test]
    fn test_interface_buffer_drops_generic_block() {
        let mut buffer = InterfaceBuffer::new();
        buffer.begin(vec!["type Inspector interface {".to_string()]);
        buffer.mark_placeholder();

        assert_eq!(buffer.close("}".to_string()), None);
        assert!(!buffer.is_buffering());
    }
}
