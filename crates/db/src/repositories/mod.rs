pub mod category_repo;
pub mod memo_category_repo;
pub mod memo_repo;
pub mod session_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use memo_category_repo::MemoCategoryRepo;
pub use memo_repo::MemoRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
