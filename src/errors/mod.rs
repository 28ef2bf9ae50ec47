//! Error types and error handling for the front end.
//!
//! This module defines the errors the parser records while building the
//! AST. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of syntax problem
//! - Helpful suggestions for the command line front end

pub mod errors;
