//! ID type wrappers for type safety.

mod clipboard;
mod id_macro;

pub use clipboard::EntryId;
