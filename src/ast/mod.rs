/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: arithmetic expressions, operators and relational conditions
/// - statements: statements, blocks and the program root
pub mod expressions;
pub mod statements;
