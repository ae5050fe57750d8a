//! Decoded instruction tree.
//!
//! One `Expr` per decoded instruction. The variants of [`ExprKind`] follow
//! the structural categories of the wire format rather than individual
//! opcodes: all six assignment opcodes share [`ExprKind::Assign`], all
//! class/interface casts share [`ExprKind::RefUnary`], and so on. The
//! opcode byte itself is kept on the node, so nothing is lost by the
//! grouping.

use kismet_bytecode::{ExprToken, ObjectRef, ScriptName, TextKind};
use serde::Serialize;

/// A decoded instruction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Expr {
    /// Offset of the opcode byte within the script buffer.
    pub offset: usize,
    /// The raw opcode byte (meaningful even when unrecognized).
    pub raw: u8,
    pub kind: ExprKind,
}

impl Expr {
    /// The decoded token, `None` for an unrecognized opcode byte.
    pub fn token(&self) -> Option<ExprToken> {
        ExprToken::from_byte(self.raw)
    }
}

/// Structural shape of an instruction, one variant per opcode category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ExprKind {
    /// Opcode byte only: no-ops, sentinels, `True`/`False`, `Self`, flow
    /// and breakpoint markers.
    Leaf,
    /// One fixed-width immediate.
    Literal(Literal),
    /// Self-terminated string payload.
    Str { text: String, wide: bool },
    /// Name-table token.
    Name(ScriptName),
    /// Object reference payload (variable references, object constants).
    Object(ObjectRef),
    /// Text-literal sub-encoding.
    Text(TextLiteral),
    /// Exactly one nested operand.
    Unary(Box<Expr>),
    /// Two nested operands in fixed order.
    Binary { first: Box<Expr>, second: Box<Expr> },
    /// Assignment: target expression then value expression. Only the plain
    /// `Let` opcode carries a leading property reference.
    Assign {
        prop: Option<ObjectRef>,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// An object reference followed by exactly one operand (casts, struct
    /// member context, persistent-frame assignment).
    RefUnary {
        target: ObjectRef,
        operand: Box<Expr>,
    },
    /// Primitive conversion; the kind byte selects the conversion.
    PrimitiveCast { conversion: u8, operand: Box<Expr> },
    /// Branch with a code offset and, for conditional forms, a condition.
    Branch {
        target: u32,
        condition: Option<Box<Expr>>,
    },
    /// Assertion site.
    Assert {
        line: u16,
        debug_mode: bool,
        condition: Box<Expr>,
    },
    /// Member access through an object context: object expression, skip
    /// offset for the null case, r-value property for mem-zeroing, member
    /// expression.
    Context {
        object: Box<Expr>,
        skip: u32,
        rvalue: ObjectRef,
        member: Box<Expr>,
    },
    /// Function call with a terminator-delimited argument list.
    Call(CallExpr),
    /// Delegate binding: function name, delegate expression, object
    /// expression.
    BindDelegate {
        function: ScriptName,
        delegate: Box<Expr>,
        object: Box<Expr>,
    },
    /// Terminator-delimited container fill or literal.
    Container(ContainerExpr),
    /// Switch with a fixed case count.
    Switch {
        end_offset: u32,
        index: Box<Expr>,
        cases: Vec<SwitchCase>,
        default: Box<Expr>,
    },
    /// Instrumentation event; `kind` is the raw sub-kind byte.
    Instrumentation { kind: u8 },
    /// Unrecognized opcode byte; one byte consumed, pass degraded.
    Unknown,
}

/// Fixed-width immediate payloads.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Literal {
    Int(i32),
    /// Integer packed into a single byte.
    IntByte(u8),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Byte(u8),
    /// Code-size skip offset.
    Skip(u32),
    /// Pitch, yaw, roll.
    Rotation([f32; 3]),
    /// X, Y, Z.
    Vector([f32; 3]),
    Transform {
        rotation: [f32; 4],
        translation: [f32; 3],
        scale: [f32; 3],
    },
}

/// The five text-literal encodings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TextLiteral {
    Empty,
    Localized {
        source: String,
        key: String,
        namespace: String,
    },
    Invariant {
        source: String,
    },
    LiteralString {
        source: String,
    },
    StringTableEntry {
        /// Asset reference; present on the wire, unused for display.
        table: ObjectRef,
        table_id: String,
        key: String,
    },
}

impl TextLiteral {
    pub fn kind(&self) -> TextKind {
        match self {
            Self::Empty => TextKind::Empty,
            Self::Localized { .. } => TextKind::LocalizedText,
            Self::Invariant { .. } => TextKind::InvariantText,
            Self::LiteralString { .. } => TextKind::LiteralString,
            Self::StringTableEntry { .. } => TextKind::StringTableEntry,
        }
    }
}

/// What a call instruction is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Callee {
    /// Prebound function object (`FinalFunction`, `CallMath`,
    /// `CallMulticastDelegate` signature).
    Function(ObjectRef),
    /// Named function looked up at run time (`VirtualFunction`).
    Name(ScriptName),
}

/// A call and its argument list.
///
/// `args` includes the trailing `EndFunctionParms` leaf, so the vector is
/// exactly the decoded child sequence in pre-order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CallExpr {
    pub callee: Callee,
    /// Delegate expression, only for multicast delegate calls.
    pub delegate: Option<Box<Expr>>,
    pub args: Vec<Expr>,
}

impl CallExpr {
    /// Argument children, excluding the trailing terminator leaf.
    pub fn arg_count(&self) -> usize {
        self.args.len().saturating_sub(1)
    }
}

/// Header of a terminator-delimited container instruction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ContainerKind {
    /// Fill an array variable (`SetArray`): target expression.
    Array { target: Box<Expr> },
    /// Fill a set variable (`SetSet`): target expression and element count.
    Set { target: Box<Expr>, count: i32 },
    /// Fill a map variable (`SetMap`): target expression and pair count.
    Map { target: Box<Expr>, count: i32 },
    /// Struct literal: struct type and serialized size.
    StructLiteral {
        struct_type: ObjectRef,
        serialized_size: i32,
    },
    /// Array literal: inner property and element count.
    ArrayLiteral { inner: ObjectRef, count: i32 },
    /// Set literal: inner property and element count.
    SetLiteral { inner: ObjectRef, count: i32 },
    /// Map literal: key/value properties and pair count.
    MapLiteral {
        key: ObjectRef,
        value: ObjectRef,
        count: i32,
    },
}

/// A container instruction and its contents.
///
/// As with calls, `items` includes the trailing terminator leaf.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContainerExpr {
    pub kind: ContainerKind,
    pub items: Vec<Expr>,
}

impl ContainerExpr {
    /// Content children, excluding the trailing terminator leaf.
    pub fn item_count(&self) -> usize {
        self.items.len().saturating_sub(1)
    }
}

/// One `(key, offset-to-next, result)` triple of a switch instruction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SwitchCase {
    pub key: Expr,
    pub next_offset: u32,
    pub result: Expr,
}
