use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

///  TermFrequency 構造体
/// termの出現頻度を管理するための構造体です
/// 出現回数をカウントし、初出順を保持します
///
/// # Examples
/// ```
/// use trend_analyzer::analyzer::token::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_term("agonist");
/// freq.add_term("risk");
/// freq.add_term("agonist");
///
/// assert_eq!(freq.term_count("agonist"), 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

/// Termの追加、マージの実装
impl TermFrequency {
    /// 新しいTermFrequencyを作成するメソッド
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// termを追加する
    ///
    /// # Arguments
    /// * `term` - 追加するターム
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// 複数のtermを追加する
    ///
    /// # Arguments
    /// * `terms` - 追加するタームのスライス
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// 他のTermFrequencyをマージします
    /// カウントはキーごとに加算されます (結合的・可換的)
    /// 初出順: selfの順序を保持し、未知のキーはotherの順序で後ろに追加されます
    ///
    /// # Arguments
    /// * `other` - マージするTermFrequency
    #[inline]
    pub fn merge(&mut self, other: &TermFrequency) -> &mut Self {
        for (term, &count) in &other.term_count {
            self.term_count
                .entry(term.clone())
                .and_modify(|c| *c += count)
                .or_insert(count);
        }
        self.total_term_count += other.total_term_count;
        self
    }
}

/// TermFrequencyの情報を取得するための実装
impl TermFrequency {
    /// あるtermの出現回数を取得します
    ///
    /// # Arguments
    /// * `term` - ターム
    ///
    /// # Returns
    /// * `u32` - タームの出現回数
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        *self.term_count.get(term).unwrap_or(&0)
    }

    /// 全termのカウントの合計を取得します
    #[inline]
    pub fn total_count(&self) -> u64 {
        self.total_term_count
    }

    /// 出現したユニークなterm数を取得します
    #[inline]
    pub fn unique_terms(&self) -> usize {
        self.term_count.len()
    }

    /// termが存在するかどうかを確認します
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// もっとも多く出現したtermの出現回数を取得します
    ///
    /// # Returns
    /// * `u32` - 最頻出termの出現回数 (空なら0)
    #[inline]
    pub fn most_frequent_count(&self) -> u32 {
        self.term_count.values().copied().max().unwrap_or(0)
    }

    /// テーブルが空かどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// (term, count) を初出順でイテレートします
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// 頻度でソートされたタームのベクタを取得(降順)
    /// 同数のtermは初出順を保持します (stable sort)
    ///
    /// # Returns
    /// * `Vec<(String, u32)>` - 頻度でソートされたタームのベクタ
    #[inline]
    pub fn sorted_frequency_vector(&self) -> Vec<(String, u32)> {
        let mut term_list: Vec<(String, u32)> = self
            .term_count
            .iter()
            .map(|(term, &count)| (term.clone(), count))
            .collect();

        term_list.sort_by(|a, b| b.1.cmp(&a.1));
        term_list
    }
}
