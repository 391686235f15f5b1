//! Infrastructure 層
//!
//! Repository の具体実装と、外部とやり取りする DTO を提供します。

pub mod dto;
pub mod repository;
