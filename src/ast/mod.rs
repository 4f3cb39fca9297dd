/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node sum type and its constructors
/// - printer: Debug tree printer
/// - types: Primitive types and literal payloads
pub mod ast;
pub mod printer;
pub mod types;
