// natsdash-core: Client-side helpers shared by natsdash consumers.

pub mod datefmt;
pub mod debounce;

pub use datefmt::{DEFAULT_LOCALE, DateStyle, FormatError, FormatOptions, format_date};
pub use debounce::{Debouncer, debounce};
