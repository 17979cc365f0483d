//! CLI library for testing purposes

pub mod decode;
pub mod encode;
pub mod import;

pub use decode::{decode_to_json, run_decode_command};
pub use encode::{encode_from_json, run_encode_command};
pub use import::{import_to_json, import_translations, run_import_command};
