mod hooks;
mod options;
mod select;

pub use hooks::SelectionHooks;
pub use options::EngineOptions;
pub use select::SelectionEngine;
