use crate::domain::model::Product;

/// Where the engine's inputs come from (CLI flags, a TOML file, or a test
/// fixture). `numbers` returning `None` means no sequence was provided at
/// all, which is distinct from an empty sequence.
pub trait InputProvider {
    fn numbers(&self) -> Option<&[i64]>;
    fn products(&self) -> &[Product];
    /// `None` disables the greeting; `Some("")` greets the anonymous guest.
    fn guest(&self) -> Option<&str>;
}
