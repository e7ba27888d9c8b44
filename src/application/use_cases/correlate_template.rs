//! # Correlate Template Use Case
//!
//! テンプレート照合とカタログ検索のユースケース

use std::sync::Arc;

use anyhow::Result;

use crate::domain::entities::log_record::TemplateMatch;
use crate::domain::repositories::line_grammar::LineGrammar;
use crate::domain::repositories::pattern_catalog::PatternCatalog;

/// テンプレート相関器
///
/// 行が既知のメッセージテンプレートに一致するかを判定し、一致した場合は
/// カタログからテンプレートの識別子と正準パターンを引いて可変部と共に返す。
///
/// 副作用を持たない純粋な検索。インポートループのホットパス上で行ごとに
/// 1回呼ばれ、カタログ問い合わせ以外では待たない。
pub struct TemplateCorrelator<G: LineGrammar, C: PatternCatalog> {
    grammar: Arc<G>,
    catalog: Arc<C>,
}

impl<G: LineGrammar, C: PatternCatalog> TemplateCorrelator<G, C> {
    /// 新しい相関器を作成
    ///
    /// # Arguments
    ///
    /// * `grammar` - 形状照合を担当する行文法
    /// * `catalog` - パターンキーで引くカタログ
    pub fn new(grammar: Arc<G>, catalog: Arc<C>) -> Self {
        Self { grammar, catalog }
    }

    /// 行をテンプレートと照合する
    ///
    /// 2つの「不一致」は出力上区別されない:
    /// - 行がそもそもテンプレート形状を持たない
    /// - 形状はあるがカタログに未登録（想定内。新しい形状はまず未登録）
    ///
    /// どちらも `Ok(None)` になり、レコードは照合なしで永続化される。
    ///
    /// # Errors
    ///
    /// カタログへの問い合わせ自体に失敗した場合のみエラーを返す
    pub async fn correlate(&self, line: &str) -> Result<Option<TemplateMatch>> {
        let Some(shape) = self.grammar.match_template(line) else {
            return Ok(None);
        };

        match self.catalog.find_by_pattern(&shape.pattern_key).await? {
            Some(entry) => Ok(Some(TemplateMatch {
                uid: entry.uid,
                pattern: entry.pattern,
                variables: shape.variables,
            })),
            // カタログ未登録は許容される
            None => Ok(None),
        }
    }
}
