//! Server Log Grammar Implementation
//!
//! LineGrammarのトークン走査実装
//!
//! サーバーログ1行をホワイトスペースで分割し、トークン列を走査して
//! フィールドをベストエフォートで拾う。識別できないものは黙って欠落させ、
//! どんな入力でもパニックしない。

use chrono::{DateTime, Utc};

use crate::domain::repositories::line_grammar::{LineGrammar, ParsedLine, TemplateShape};

/// 操作種別として認識するトークン
const OPERATIONS: [&str; 6] = ["query", "insert", "update", "remove", "getmore", "command"];

/// カウンタとして認識する名前
const COUNTERS: [&str; 6] = [
    "nscanned",
    "ntoreturn",
    "nreturned",
    "nupdated",
    "ninserted",
    "ndeleted",
];

/// トークン走査ベースの行文法
#[derive(Debug, Default)]
pub struct ServerLogGrammar;

impl ServerLogGrammar {
    pub fn new() -> Self {
        Self
    }

    /// テンプレートの可変部として扱うトークンか
    ///
    /// 数値・引用符付き文字列・角括弧トークン・タイムスタンプは可変部、
    /// それ以外はテンプレートの固定部とみなす。
    fn is_variable_token(token: &str) -> bool {
        if token.len() >= 2 && token.starts_with('[') && token.ends_with(']') {
            return true;
        }
        if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
            return true;
        }
        if DateTime::parse_from_rfc3339(token).is_ok() {
            return true;
        }

        let bare = token.trim_end_matches([',', '.']);
        if bare.parse::<f64>().is_ok() {
            return true;
        }
        bare.strip_suffix("ms")
            .is_some_and(|n| n.parse::<i64>().is_ok())
    }
}

impl LineGrammar for ServerLogGrammar {
    fn parse(&self, line: &str) -> ParsedLine {
        let tokens: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
        let mut parsed = ParsedLine {
            timestamp: tokens
                .first()
                .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
                .map(|t| t.with_timezone(&Utc)),
            ..Default::default()
        };

        for (i, token) in tokens.iter().enumerate() {
            if parsed.thread.is_none()
                && token.len() > 2
                && token.starts_with('[')
                && token.ends_with(']')
            {
                parsed.thread = Some(token[1..token.len() - 1].to_string());
                continue;
            }

            if parsed.operation.is_none() && OPERATIONS.contains(&token.as_str()) {
                parsed.operation = Some(token.clone());
                parsed.namespace = tokens.get(i + 1).cloned();
                continue;
            }

            // "nscanned:1000" 形式のカウンタ
            if let Some((name, value)) = token.split_once(':') {
                if COUNTERS.contains(&name) {
                    if let Ok(value) = value.parse::<i64>() {
                        parsed.counters.insert(name.to_string(), value);
                    }
                }
            }
        }

        // 処理時間は行末の "NNNms"
        parsed.duration = tokens
            .last()
            .and_then(|t| t.strip_suffix("ms"))
            .and_then(|t| t.parse::<i64>().ok());

        parsed.tokens = tokens;
        parsed
    }

    fn match_template(&self, line: &str) -> Option<TemplateShape> {
        let mut fixed: Vec<&str> = Vec::new();
        let mut variables: Vec<String> = Vec::new();

        for token in line.split_whitespace() {
            if Self::is_variable_token(token) {
                variables.push(token.trim_matches('"').to_string());
            } else {
                fixed.push(token);
            }
        }

        // 固定部が残らない行は認識可能な形状を持たない
        if fixed.is_empty() {
            return None;
        }

        Some(TemplateShape {
            pattern_key: fixed.join(" "),
            variables,
        })
    }
}
