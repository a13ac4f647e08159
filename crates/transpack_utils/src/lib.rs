pub mod hex_digest;
pub mod json5;
pub mod json_merge;
pub mod url_ext;
