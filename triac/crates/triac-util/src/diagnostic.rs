//! Diagnostics.
//!
//! Every stage returns its diagnostics alongside its primary output rather
//! than raising — see spec.md §7, "Errors are values, not exceptions". A
//! [`Diagnostic`] carries a [`DiagnosticCategory`] tag, a human description,
//! a [`Pos`], and a `fatal` flag. Only `AstInvalid` currently sets `fatal`.

use crate::pos::Pos;
use std::fmt;

/// Closed set of diagnostic categories, one per taxonomy entry in spec.md §7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    // Lexical
    UnknownChar,
    MalformedReal,
    CommentUnclosed,
    MalformedOperator,
    // Syntactic
    ParseExpect,
    ParseUnexpected,
    StraySemi,
    // Semantic
    DupDecl,
    Undeclared,
    TypeIncompat,
    DivByZero,
    AstInvalid,
    // Runtime
    DivByZeroRt,
    LabelNotFound,
    Runaway,
    UnknownOp,
}

impl DiagnosticCategory {
    /// The stable short tag used in serialized artifacts, e.g.
    /// `errores_semanticos.txt`.
    pub const fn tag(self) -> &'static str {
        match self {
            DiagnosticCategory::UnknownChar => "UNKNOWN_CHAR",
            DiagnosticCategory::MalformedReal => "MALFORMED_REAL",
            DiagnosticCategory::CommentUnclosed => "COMMENT_UNCLOSED",
            DiagnosticCategory::MalformedOperator => "MALFORMED_OPERATOR",
            DiagnosticCategory::ParseExpect => "PARSE_EXPECT",
            DiagnosticCategory::ParseUnexpected => "PARSE_UNEXPECTED",
            DiagnosticCategory::StraySemi => "STRAY_SEMI",
            DiagnosticCategory::DupDecl => "DUP_DECL",
            DiagnosticCategory::Undeclared => "UNDECLARED",
            DiagnosticCategory::TypeIncompat => "TYPE_INCOMPAT",
            DiagnosticCategory::DivByZero => "DIV_BY_ZERO",
            DiagnosticCategory::AstInvalid => "AST_INVALID",
            DiagnosticCategory::DivByZeroRt => "DIV_BY_ZERO_RT",
            DiagnosticCategory::LabelNotFound => "LABEL_NOT_FOUND",
            DiagnosticCategory::Runaway => "RUNAWAY",
            DiagnosticCategory::UnknownOp => "UNKNOWN_OP",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single diagnostic produced by any stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub message: String,
    pub pos: Pos,
    pub fatal: bool,
}

impl Diagnostic {
    pub fn new(category: DiagnosticCategory, message: impl Into<String>, pos: Pos) -> Self {
        Self {
            category,
            message: message.into(),
            pos,
            fatal: false,
        }
    }

    pub fn fatal(category: DiagnosticCategory, message: impl Into<String>, pos: Pos) -> Self {
        Self {
            category,
            message: message.into(),
            pos,
            fatal: true,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (línea {}, columna {}){}",
            self.category,
            self.message,
            self.pos.line,
            self.pos.column,
            if self.fatal { " [FATAL]" } else { "" }
        )
    }
}
