//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, Base64url, constant-time compare)
//! - Password hashing (Argon2id)

pub mod crypto;
pub mod password;
