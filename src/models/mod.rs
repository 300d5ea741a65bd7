mod bank;
mod category;
mod entry;

pub use bank::{Bank, SAVINGS_BANK};
pub use category::Category;
pub use entry::{Entry, EntryKind, Flow};
