/// The token model.
///
/// Defines `Token`, the closed `TokenKind` enumeration and decoded literal
/// payloads shared by the scanner and the parser.
pub mod token;
/// The lexer module recognizes raw tokens in source text.
///
/// A `logos` state machine classifies source text into raw tokens, decodes
/// number and string literals, skips whitespace and comments, and tracks line
/// numbers.
pub mod lexer;
/// The scanner module turns source text into a token sequence.
///
/// Wraps the raw lexer, attaches lexemes and lines, collects lexical errors and
/// appends the end-of-input token.
///
/// # Responsibilities
/// - Produces tokens with kind, lexeme, literal and source line.
/// - Reports unexpected characters and unterminated strings without stopping.
pub mod scanner;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Recursive descent with one function per precedence level, from the ternary
/// conditional down to primary expressions, plus statement parsing with error
/// recovery.
///
/// # Responsibilities
/// - Converts tokens into expression trees or statement lists.
/// - Validates the grammar, reporting errors anchored at the offending token.
pub mod parser;
/// The evaluator module computes values from AST nodes.
///
/// The evaluator walks the tree, applies operator semantics and type rules, and
/// reports runtime type errors against the operator token.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// Declares `Value`, with truthiness and the textual form shown to users.
pub mod value;
/// Renders expression trees as parenthesized prefix strings for tests and
/// debugging.
pub mod printer;
