//! Conductor catalog text format.
//!
//! A line-oriented, human-editable listing of conductor properties, loaded
//! into a [`ConductorCatalog`](crate::conductor::ConductorCatalog).
//!
//! # Grammar Overview
//!
//! ```text
//! catalog     = { line }
//! line        = comment | conductor | empty
//! comment     = ('#' | ';') { any_char }
//! conductor   = ".conductor" string [ "legacy" "=" string ] "(" { param } ")"
//! param       = identifier "=" value
//!
//! string      = '"' { any_char - '"' } '"'
//! value       = number [unit_suffix]
//! number      = ['-'] digit+ ['.' digit+] [('e'|'E') ['-'|'+'] digit+]
//! unit_suffix = 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'M' | 'G'
//! identifier  = (letter | '_') { letter | digit | '_' }
//! ```
//!
//! Parameters may span several lines inside the parentheses.
//!
//! # Parameters
//!
//! | Name | Unit |
//! |------|------|
//! | `al_area`, `steel_area`, `total_area` | mm² |
//! | `al_strands`, `steel_strands` | count |
//! | `core_diameter`, `overall_diameter` | mm |
//! | `mass` | kg/km |
//! | `rated_strength` | kN |
//! | `resistance_dc` | Ω/km |
//! | `elastic_modulus` | daN/mm² |
//! | `thermal_exp` | 1/°C |
//!
//! # Example
//!
//! ```text
//! # ACSR
//! .conductor "337-AL1/44-ST1A" legacy="LA 380" (
//!     al_area=337.3 steel_area=43.7 total_area=381.0
//!     al_strands=54 steel_strands=7
//!     core_diameter=8.46 overall_diameter=25.38
//!     mass=932 rated_strength=107.18 resistance_dc=0.0857
//!     elastic_modulus=6.9k thermal_exp=19.3u
//! )
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse catalog text into an AST.
pub fn parse(input: &str) -> Result<CatalogAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a catalog file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<CatalogAst> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::error::SagTensionError::FileReadError {
            path: path.display().to_string(),
            source: e,
        }
    })?;
    parse(&content)
}
