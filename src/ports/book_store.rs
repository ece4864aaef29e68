use crate::domain::{Book, Isbn};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍ストアポート
///
/// ISBNをキーとする書籍の保管庫を抽象化する。
/// ストアが書籍の存在に関する唯一の情報源であり、
/// 読み取りはコピーを返し、書き込みは所有権ごと受け取る。
#[async_trait]
pub trait BookStore: Send + Sync {
    /// 現在保管されている全書籍を返す
    ///
    /// 順序は規定しない。呼び出し側は順序に依存してはならない。
    async fn list(&self) -> Result<Vec<Book>>;

    /// ISBNで書籍を取得する（副作用なし）
    async fn get(&self, isbn: &Isbn) -> Result<Option<Book>>;

    /// 書籍を新規登録する
    ///
    /// `book.isbn` が既に存在する場合は何も変更せず `None` を返す。
    /// 登録できた場合はそのISBNを返す。
    async fn create(&self, book: Book) -> Result<Option<Isbn>>;

    /// 既存の書籍を丸ごと置き換える
    ///
    /// 書籍はパス由来の `isbn` の位置に保存され、`book.isbn` は参照しない。
    /// `isbn` が存在しない場合は何も変更せず `false` を返す。
    async fn update(&self, isbn: &Isbn, book: Book) -> Result<bool>;

    /// 書籍を削除する
    ///
    /// 存在しないISBNの削除は何もしない（エラーにならない）。
    async fn delete(&self, isbn: &Isbn) -> Result<()>;
}
