pub mod page_bindings;
pub mod wasm_api;
