use serde::{Deserialize, Deserializer, Serialize};

use super::value_objects::Isbn;

/// 書籍
///
/// ストアが唯一の所有者であり、呼び出し側には常にコピーが渡される。
/// 不変条件: ストア内では `isbn` がキーと一致する（作成時に保証される）。
///
/// JSON表現:
/// - すべてのフィールドは省略可能で、省略時や `null` の場合は空文字列になる
/// - 未知のキーは無視される
/// - `description` が空の場合は出力から省略される
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub isbn: Isbn,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<Isbn>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            description: String::new(),
        }
    }

    /// 説明を付けた書籍を返す
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 説明があるか（空文字列は「なし」として扱う）
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// 起動時に投入される初期カタログ
pub fn seed_catalog() -> Vec<Book> {
    vec![
        Book::new("Guide to Galaxy", "Douglas Adams", "0345391802"),
        Book::new("Cloud Native Go", "M.-Leander Reimer", "0123456789"),
    ]
}
