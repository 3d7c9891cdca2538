//! Error types and error handling for the analyzer.
//!
//! This module defines the diagnostics produced while analyzing a unit:
//!
//! - Error structures with source position information
//! - Lexical variants, reported per offending character and never fatal
//! - Syntax variants, fatal to the unit being parsed
//! - Error formatting and suggestions

pub mod errors;
