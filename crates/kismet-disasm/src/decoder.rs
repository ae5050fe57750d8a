//! Recursive-descent decoder for script bytecode.
//!
//! One [`Disassembler`] decodes one buffer per call: the cursor is a single
//! read head threaded through every nested decode, each instruction decode
//! consumes the opcode byte plus the exact encoded width of its operands,
//! and rendered lines are emitted to the sink in pre-order as decoding
//! proceeds.
//!
//! Unknown opcodes consume one byte, render a diagnostic and let the pass
//! continue; inside a terminator-delimited sequence this desynchronizes the
//! stream, which then surfaces as [`DecodeError::Unterminated`] rather than
//! being silently resynchronized.

use kismet_bytecode::{
    ExprToken, InstrumentationKind, ObjectRef, ScriptReader, TextKind, conversion_label,
};

use crate::error::DecodeError;
use crate::expr::{
    CallExpr, Callee, ContainerExpr, ContainerKind, Expr, ExprKind, Literal, SwitchCase,
    TextLiteral,
};
use crate::render::RenderSink;
use crate::resolve::SymbolResolver;

/// Decode limits.
///
/// Recursion depth equals bytecode nesting depth, so hostile input could
/// otherwise grow the call stack without bound.
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    pub(crate) max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum expression nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Result of one full pass over a script buffer.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Disassembly {
    /// Top-level instructions in decode order.
    pub exprs: Vec<Expr>,
    /// True if the pass hit an unrecognized opcode; output after the first
    /// such byte may be misaligned.
    pub degraded: bool,
}

/// Script bytecode disassembler.
///
/// Holds no state between passes apart from the injected resolver and sink;
/// [`Disassembler::disassemble`] may be called repeatedly.
pub struct Disassembler<'a, R: SymbolResolver, S: RenderSink> {
    resolver: &'a R,
    sink: &'a mut S,
    limits: Limits,
    depth: usize,
    degraded: bool,
}

impl<'a, R: SymbolResolver, S: RenderSink> Disassembler<'a, R, S> {
    pub fn new(resolver: &'a R, sink: &'a mut S) -> Self {
        Self::with_limits(resolver, sink, Limits::default())
    }

    pub fn with_limits(resolver: &'a R, sink: &'a mut S, limits: Limits) -> Self {
        Self {
            resolver,
            sink,
            limits,
            depth: 0,
            degraded: false,
        }
    }

    /// Decode every top-level instruction in `script`.
    ///
    /// Emits a `Label_0x..:` line per instruction boundary and stops after
    /// the end-of-script sentinel or at the end of the buffer, whichever
    /// comes first. Trailing bytes after the sentinel are not decoded.
    pub fn disassemble(&mut self, script: &[u8]) -> Result<Disassembly, DecodeError> {
        let mut reader = ScriptReader::new(script);
        self.depth = 0;
        self.degraded = false;

        let mut exprs = Vec::new();
        while !reader.at_end() {
            self.emit(format!("Label_0x{:X}:", reader.pos()));
            let expr = self.decode_one(&mut reader)?;
            let stop = expr.token() == Some(ExprToken::EndOfScript);
            exprs.push(expr);
            if stop {
                break;
            }
        }

        Ok(Disassembly {
            exprs,
            degraded: self.degraded,
        })
    }

    /// Decode exactly one instruction at the cursor.
    ///
    /// On success the cursor sits at the first byte of the next sibling
    /// instruction. On error the nesting depth is still restored.
    pub fn decode_one(&mut self, reader: &mut ScriptReader<'_>) -> Result<Expr, DecodeError> {
        let offset = reader.pos();
        if self.depth >= self.limits.max_depth {
            return Err(DecodeError::TooDeep {
                offset,
                limit: self.limits.max_depth,
            });
        }

        let raw = reader.read_byte()?;
        self.depth += 1;
        let result = self.decode_body(reader, offset, raw);
        self.depth -= 1;

        result.map(|kind| Expr { offset, raw, kind })
    }

    /// True if the last pass hit an unrecognized opcode.
    pub fn degraded(&self) -> bool {
        self.degraded
    }

    fn emit(&mut self, text: impl AsRef<str>) {
        self.sink.line(self.depth, text.as_ref());
    }

    /// Run `f` one nesting level deeper, restoring the depth on every exit
    /// path.
    fn indented<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }

    /// Decode instructions until `terminator` is produced; the terminator
    /// leaf is the last element of the returned sequence.
    ///
    /// `opened_at` is the offset of the instruction that opened the
    /// sequence, reported if the buffer runs out first.
    pub fn decode_until(
        &mut self,
        reader: &mut ScriptReader<'_>,
        terminator: ExprToken,
        opened_at: usize,
    ) -> Result<Vec<Expr>, DecodeError> {
        let mut items = Vec::new();
        loop {
            if reader.at_end() {
                return Err(DecodeError::Unterminated {
                    opened_at,
                    terminator,
                });
            }
            let item = self.decode_one(reader)?;
            let done = item.token() == Some(terminator);
            items.push(item);
            if done {
                return Ok(items);
            }
        }
    }

    /// Read a string field of a text literal: a string-const opcode byte
    /// selecting the width, then the string itself.
    fn read_prefixed_string(
        &mut self,
        reader: &mut ScriptReader<'_>,
    ) -> Result<(String, bool), DecodeError> {
        let offset = reader.pos();
        let byte = reader.read_byte()?;
        match ExprToken::from_byte(byte) {
            Some(ExprToken::StringConst) => Ok((reader.read_str8()?, false)),
            Some(ExprToken::UnicodeStringConst) => Ok((reader.read_str16()?, true)),
            _ => Err(DecodeError::BadStringToken {
                offset,
                found: byte,
            }),
        }
    }

    fn object_name(&self, object: ObjectRef) -> String {
        if object.is_null() {
            return "(null)".to_string();
        }
        self.resolver
            .resolve_object(object)
            .unwrap_or_else(|| format!("{:#x}", object.raw()))
    }

    /// `Outer::Name` form used for bound function targets.
    fn scoped_object_name(&self, object: ObjectRef) -> String {
        let name = self.object_name(object);
        if object.is_null() {
            return name;
        }
        match self.resolver.resolve_outer(object) {
            Some(outer) => format!("{outer}::{name}"),
            None => name,
        }
    }

    fn name_text(&self, name: &kismet_bytecode::ScriptName) -> String {
        self.resolver
            .resolve_name(name)
            .unwrap_or_else(|| name.fallback_string())
    }

    fn decode_body(
        &mut self,
        reader: &mut ScriptReader<'_>,
        offset: usize,
        raw: u8,
    ) -> Result<ExprKind, DecodeError> {
        let Some(token) = ExprToken::from_byte(raw) else {
            self.degraded = true;
            self.emit(format!(
                "$0x{raw:02X}: unknown opcode; decoding may be unreliable from here"
            ));
            return Ok(ExprKind::Unknown);
        };

        let kind = match token {
            // ---- no-operand instructions -------------------------------
            ExprToken::Nothing
            | ExprToken::EndOfScript
            | ExprToken::EndParmValue
            | ExprToken::EndFunctionParms
            | ExprToken::EndStructConst
            | ExprToken::EndArray
            | ExprToken::EndArrayConst
            | ExprToken::EndSet
            | ExprToken::EndSetConst
            | ExprToken::EndMap
            | ExprToken::EndMapConst
            | ExprToken::IntZero
            | ExprToken::IntOne
            | ExprToken::True
            | ExprToken::False
            | ExprToken::NoObject
            | ExprToken::NoInterface
            | ExprToken::SelfRef
            | ExprToken::Breakpoint => {
                self.emit(format!("$0x{raw:02X}: {}", token.name()));
                ExprKind::Leaf
            }
            ExprToken::DeprecatedOp4A => {
                self.emit(format!("$0x{raw:02X}: DeprecatedOp4A (does nothing)"));
                ExprKind::Leaf
            }
            ExprToken::PopExecutionFlow => {
                self.emit(format!(
                    "$0x{raw:02X}: PopExecutionFlow (jump to last pushed address)"
                ));
                ExprKind::Leaf
            }
            ExprToken::WireTracepoint => {
                self.emit(format!("$0x{raw:02X}: .. wire debug site .."));
                ExprKind::Leaf
            }
            ExprToken::Tracepoint => {
                self.emit(format!("$0x{raw:02X}: .. debug site .."));
                ExprKind::Leaf
            }

            // ---- immediates --------------------------------------------
            ExprToken::IntConst => {
                let value = reader.read_int()?;
                self.emit(format!("$0x{raw:02X}: literal int32 {value}"));
                ExprKind::Literal(Literal::Int(value))
            }
            ExprToken::IntConstByte => {
                let value = reader.read_byte()?;
                self.emit(format!("$0x{raw:02X}: literal int {value}"));
                ExprKind::Literal(Literal::IntByte(value))
            }
            ExprToken::Int64Const => {
                let value = reader.read_int64()?;
                self.emit(format!("$0x{raw:02X}: literal int64 {value}"));
                ExprKind::Literal(Literal::Int64(value))
            }
            ExprToken::UInt64Const => {
                let value = reader.read_uint64()?;
                self.emit(format!("$0x{raw:02X}: literal uint64 {value}"));
                ExprKind::Literal(Literal::UInt64(value))
            }
            ExprToken::FloatConst => {
                let value = reader.read_float()?;
                self.emit(format!("$0x{raw:02X}: literal float {value}"));
                ExprKind::Literal(Literal::Float(value))
            }
            ExprToken::ByteConst => {
                let value = reader.read_byte()?;
                self.emit(format!("$0x{raw:02X}: literal byte {value}"));
                ExprKind::Literal(Literal::Byte(value))
            }
            ExprToken::SkipOffsetConst => {
                let value = reader.read_skip_count()?;
                self.emit(format!("$0x{raw:02X}: literal skip-offset 0x{value:X}"));
                ExprKind::Literal(Literal::Skip(value))
            }
            ExprToken::RotationConst => {
                let pitch = reader.read_float()?;
                let yaw = reader.read_float()?;
                let roll = reader.read_float()?;
                self.emit(format!(
                    "$0x{raw:02X}: literal rotation ({pitch},{yaw},{roll})"
                ));
                ExprKind::Literal(Literal::Rotation([pitch, yaw, roll]))
            }
            ExprToken::VectorConst => {
                let x = reader.read_float()?;
                let y = reader.read_float()?;
                let z = reader.read_float()?;
                self.emit(format!("$0x{raw:02X}: literal vector ({x},{y},{z})"));
                ExprKind::Literal(Literal::Vector([x, y, z]))
            }
            ExprToken::TransformConst => {
                let mut rotation = [0f32; 4];
                for slot in &mut rotation {
                    *slot = reader.read_float()?;
                }
                let mut translation = [0f32; 3];
                for slot in &mut translation {
                    *slot = reader.read_float()?;
                }
                let mut scale = [0f32; 3];
                for slot in &mut scale {
                    *slot = reader.read_float()?;
                }
                self.emit(format!(
                    "$0x{raw:02X}: literal transform R({},{},{},{}) T({},{},{}) S({},{},{})",
                    rotation[0],
                    rotation[1],
                    rotation[2],
                    rotation[3],
                    translation[0],
                    translation[1],
                    translation[2],
                    scale[0],
                    scale[1],
                    scale[2],
                ));
                ExprKind::Literal(Literal::Transform {
                    rotation,
                    translation,
                    scale,
                })
            }

            // ---- strings and names -------------------------------------
            ExprToken::StringConst => {
                let text = reader.read_str8()?;
                self.emit(format!("$0x{raw:02X}: literal ansi string \"{text}\""));
                ExprKind::Str { text, wide: false }
            }
            ExprToken::UnicodeStringConst => {
                let text = reader.read_str16()?;
                self.emit(format!("$0x{raw:02X}: literal unicode string \"{text}\""));
                ExprKind::Str { text, wide: true }
            }
            ExprToken::NameConst => {
                let name = reader.read_script_name()?;
                self.emit(format!(
                    "$0x{raw:02X}: literal name {}",
                    self.name_text(&name)
                ));
                ExprKind::Name(name)
            }
            ExprToken::InstanceDelegate => {
                let name = reader.read_script_name()?;
                self.emit(format!(
                    "$0x{raw:02X}: instance delegate function named {}",
                    self.name_text(&name)
                ));
                ExprKind::Name(name)
            }

            // ---- object references -------------------------------------
            ExprToken::LocalVariable => {
                let object = reader.read_object_ref()?;
                self.emit(format!(
                    "$0x{raw:02X}: local variable named {}",
                    self.object_name(object)
                ));
                ExprKind::Object(object)
            }
            ExprToken::InstanceVariable => {
                let object = reader.read_object_ref()?;
                self.emit(format!(
                    "$0x{raw:02X}: instance variable named {}",
                    self.object_name(object)
                ));
                ExprKind::Object(object)
            }
            ExprToken::DefaultVariable => {
                let object = reader.read_object_ref()?;
                self.emit(format!(
                    "$0x{raw:02X}: default variable named {}",
                    self.object_name(object)
                ));
                ExprKind::Object(object)
            }
            ExprToken::LocalOutVariable => {
                let object = reader.read_object_ref()?;
                self.emit(format!(
                    "$0x{raw:02X}: local out variable named {}",
                    self.object_name(object)
                ));
                ExprKind::Object(object)
            }
            ExprToken::ObjectConst => {
                let object = reader.read_object_ref()?;
                self.emit(format!(
                    "$0x{raw:02X}: literal object {}",
                    self.object_name(object)
                ));
                ExprKind::Object(object)
            }

            // ---- text literal sub-encoding -----------------------------
            ExprToken::TextConst => {
                let kind_offset = reader.pos();
                let kind_byte = reader.read_byte()?;
                let Some(text_kind) = TextKind::from_byte(kind_byte) else {
                    return Err(DecodeError::UnknownTextKind {
                        offset: kind_offset,
                        found: kind_byte,
                    });
                };
                let literal = match text_kind {
                    TextKind::Empty => {
                        self.emit(format!("$0x{raw:02X}: literal text - empty"));
                        TextLiteral::Empty
                    }
                    TextKind::LocalizedText => {
                        let (source, _) = self.read_prefixed_string(reader)?;
                        let (key, _) = self.read_prefixed_string(reader)?;
                        let (namespace, _) = self.read_prefixed_string(reader)?;
                        self.emit(format!(
                            "$0x{raw:02X}: literal text - localized {{ namespace: \"{namespace}\", key: \"{key}\", source: \"{source}\" }}"
                        ));
                        TextLiteral::Localized {
                            source,
                            key,
                            namespace,
                        }
                    }
                    TextKind::InvariantText => {
                        let (source, _) = self.read_prefixed_string(reader)?;
                        self.emit(format!(
                            "$0x{raw:02X}: literal text - invariant: \"{source}\""
                        ));
                        TextLiteral::Invariant { source }
                    }
                    TextKind::LiteralString => {
                        let (source, _) = self.read_prefixed_string(reader)?;
                        self.emit(format!("$0x{raw:02X}: literal text - string: \"{source}\""));
                        TextLiteral::LiteralString { source }
                    }
                    TextKind::StringTableEntry => {
                        let table = reader.read_object_ref()?;
                        let (table_id, _) = self.read_prefixed_string(reader)?;
                        let (key, _) = self.read_prefixed_string(reader)?;
                        self.emit(format!(
                            "$0x{raw:02X}: literal text - string table entry {{ table id: \"{table_id}\", key: \"{key}\" }}"
                        ));
                        TextLiteral::StringTableEntry {
                            table,
                            table_id,
                            key,
                        }
                    }
                };
                ExprKind::Text(literal)
            }

            // ---- one nested operand ------------------------------------
            ExprToken::Return => {
                self.emit(format!("$0x{raw:02X}: Return expression"));
                ExprKind::Unary(Box::new(self.decode_one(reader)?))
            }
            ExprToken::ComputedJump => {
                self.emit(format!(
                    "$0x{raw:02X}: Computed jump, offset specified by expression:"
                ));
                ExprKind::Unary(Box::new(self.decode_one(reader)?))
            }
            ExprToken::InterfaceContext => {
                self.emit(format!("$0x{raw:02X}: InterfaceContext:"));
                ExprKind::Unary(Box::new(self.decode_one(reader)?))
            }
            ExprToken::SoftObjectConst => {
                self.emit(format!("$0x{raw:02X}: SoftObjectConst, path:"));
                ExprKind::Unary(Box::new(self.decode_one(reader)?))
            }
            ExprToken::ClearMulticastDelegate => {
                self.emit(format!("$0x{raw:02X}: Clear multicast delegate"));
                ExprKind::Unary(Box::new(self.decode_one(reader)?))
            }
            ExprToken::PopExecutionFlowIfNot => {
                self.emit(format!("$0x{raw:02X}: PopExecutionFlowIfNot, condition:"));
                ExprKind::Unary(Box::new(self.decode_one(reader)?))
            }

            // ---- two nested operands -----------------------------------
            ExprToken::AddMulticastDelegate => {
                self.emit(format!("$0x{raw:02X}: Add multicast delegate"));
                let first = Box::new(self.decode_one(reader)?);
                let second = Box::new(self.decode_one(reader)?);
                ExprKind::Binary { first, second }
            }
            ExprToken::RemoveMulticastDelegate => {
                self.emit(format!("$0x{raw:02X}: Remove multicast delegate"));
                let first = Box::new(self.decode_one(reader)?);
                let second = Box::new(self.decode_one(reader)?);
                ExprKind::Binary { first, second }
            }
            ExprToken::ArrayGetByRef => {
                self.emit(format!("$0x{raw:02X}: Array get-by-ref"));
                let first = Box::new(self.decode_one(reader)?);
                let second = Box::new(self.decode_one(reader)?);
                ExprKind::Binary { first, second }
            }

            // ---- assignments -------------------------------------------
            ExprToken::Let
            | ExprToken::LetObj
            | ExprToken::LetWeakObjPtr
            | ExprToken::LetBool
            | ExprToken::LetDelegate
            | ExprToken::LetMulticastDelegate => {
                let label = match token {
                    ExprToken::Let => "Let",
                    ExprToken::LetObj => "Let obj",
                    ExprToken::LetWeakObjPtr => "Let weak obj ptr",
                    ExprToken::LetBool => "Let bool",
                    ExprToken::LetDelegate => "Let delegate",
                    _ => "Let multicast delegate",
                };
                // Only the plain Let carries the destination property ref.
                let prop = if token == ExprToken::Let {
                    Some(reader.read_object_ref()?)
                } else {
                    None
                };
                self.emit(format!("$0x{raw:02X}: {label} (Variable = Expression)"));
                self.indented(|d| -> Result<ExprKind, DecodeError> {
                    d.emit("Variable:");
                    let target = Box::new(d.decode_one(reader)?);
                    d.emit("Expression:");
                    let value = Box::new(d.decode_one(reader)?);
                    Ok(ExprKind::Assign {
                        prop,
                        target,
                        value,
                    })
                })?
            }

            // ---- reference + one operand -------------------------------
            ExprToken::MetaCast
            | ExprToken::DynamicCast
            | ExprToken::ObjToInterfaceCast
            | ExprToken::CrossInterfaceCast
            | ExprToken::InterfaceToObjCast => {
                let target = reader.read_object_ref()?;
                self.emit(format!(
                    "$0x{raw:02X}: {} to {} of expr:",
                    token.name(),
                    self.object_name(target)
                ));
                let operand = Box::new(self.decode_one(reader)?);
                ExprKind::RefUnary { target, operand }
            }
            ExprToken::StructMemberContext => {
                let target = reader.read_object_ref()?;
                self.emit(format!("$0x{raw:02X}: Struct member context"));
                self.indented(|d| -> Result<ExprKind, DecodeError> {
                    d.emit(format!("Member property: {}", d.object_name(target)));
                    d.emit("Struct expression:");
                    let operand = Box::new(d.decode_one(reader)?);
                    Ok(ExprKind::RefUnary { target, operand })
                })?
            }
            ExprToken::LetValueOnPersistentFrame => {
                let target = reader.read_object_ref()?;
                self.emit(format!("$0x{raw:02X}: LetValueOnPersistentFrame"));
                self.indented(|d| -> Result<ExprKind, DecodeError> {
                    d.emit(format!("Destination variable: {}", d.object_name(target)));
                    d.emit("Expression:");
                    let operand = Box::new(d.decode_one(reader)?);
                    Ok(ExprKind::RefUnary { target, operand })
                })?
            }
            ExprToken::PrimitiveCast => {
                let conversion = reader.read_byte()?;
                match conversion_label(conversion) {
                    Some(label) => self.emit(format!(
                        "$0x{raw:02X}: PrimitiveCast of type {label}"
                    )),
                    None => self.emit(format!(
                        "$0x{raw:02X}: PrimitiveCast of type {conversion}"
                    )),
                }
                self.indented(|d| -> Result<ExprKind, DecodeError> {
                    d.emit("Argument:");
                    let operand = Box::new(d.decode_one(reader)?);
                    Ok(ExprKind::PrimitiveCast {
                        conversion,
                        operand,
                    })
                })?
            }

            // ---- branches ----------------------------------------------
            ExprToken::Jump => {
                let target = reader.read_skip_count()?;
                self.emit(format!("$0x{raw:02X}: Jump to offset 0x{target:X}"));
                ExprKind::Branch {
                    target,
                    condition: None,
                }
            }
            ExprToken::JumpIfNot => {
                let target = reader.read_skip_count()?;
                self.emit(format!(
                    "$0x{raw:02X}: Jump to offset 0x{target:X} if not expr:"
                ));
                let condition = Some(Box::new(self.decode_one(reader)?));
                ExprKind::Branch { target, condition }
            }
            ExprToken::Skip => {
                let target = reader.read_skip_count()?;
                self.emit(format!(
                    "$0x{raw:02X}: possibly skip 0x{target:X} bytes of expr:"
                ));
                let condition = Some(Box::new(self.decode_one(reader)?));
                ExprKind::Branch { target, condition }
            }
            ExprToken::PushExecutionFlow => {
                let target = reader.read_skip_count()?;
                self.emit(format!("$0x{raw:02X}: FlowStack.Push(0x{target:X})"));
                ExprKind::Branch {
                    target,
                    condition: None,
                }
            }
            ExprToken::Assert => {
                let line = reader.read_word()?;
                let debug_mode = reader.read_byte()? != 0;
                self.emit(format!(
                    "$0x{raw:02X}: assert at line {line}, debug mode = {debug_mode}, with expr:"
                ));
                let condition = Box::new(self.decode_one(reader)?);
                ExprKind::Assert {
                    line,
                    debug_mode,
                    condition,
                }
            }

            // ---- context access ----------------------------------------
            ExprToken::Context | ExprToken::ContextFailSilent | ExprToken::ClassContext => {
                let label = match token {
                    ExprToken::ClassContext => "Class context",
                    ExprToken::ContextFailSilent => {
                        "Context (can fail silently on access none)"
                    }
                    _ => "Context",
                };
                self.emit(format!("$0x{raw:02X}: {label}"));
                self.indented(|d| -> Result<ExprKind, DecodeError> {
                    d.emit("ObjectExpression:");
                    let object = Box::new(d.decode_one(reader)?);
                    let skip = reader.read_skip_count()?;
                    d.emit(format!("Skip bytes: 0x{skip:X}"));
                    let rvalue = reader.read_object_ref()?;
                    d.emit(format!("R-value property: {}", d.object_name(rvalue)));
                    d.emit("ContextExpression:");
                    let member = Box::new(d.decode_one(reader)?);
                    Ok(ExprKind::Context {
                        object,
                        skip,
                        rvalue,
                        member,
                    })
                })?
            }

            // ---- calls -------------------------------------------------
            ExprToken::FinalFunction | ExprToken::CallMath => {
                let function = reader.read_object_ref()?;
                let label = if token == ExprToken::CallMath {
                    "Call math"
                } else {
                    "Final function"
                };
                self.emit(format!(
                    "$0x{raw:02X}: {label} {}",
                    self.scoped_object_name(function)
                ));
                let args = self.decode_until(reader, ExprToken::EndFunctionParms, offset)?;
                ExprKind::Call(CallExpr {
                    callee: Callee::Function(function),
                    delegate: None,
                    args,
                })
            }
            ExprToken::VirtualFunction => {
                let name = reader.read_script_name()?;
                self.emit(format!(
                    "$0x{raw:02X}: Virtual function named {}",
                    self.name_text(&name)
                ));
                let args = self.decode_until(reader, ExprToken::EndFunctionParms, offset)?;
                ExprKind::Call(CallExpr {
                    callee: Callee::Name(name),
                    delegate: None,
                    args,
                })
            }
            ExprToken::CallMulticastDelegate => {
                let function = reader.read_object_ref()?;
                self.emit(format!(
                    "$0x{raw:02X}: Call multicast delegate (signature {}), delegate:",
                    self.scoped_object_name(function)
                ));
                let delegate = Some(Box::new(self.decode_one(reader)?));
                self.emit("Params:");
                let args = self.decode_until(reader, ExprToken::EndFunctionParms, offset)?;
                ExprKind::Call(CallExpr {
                    callee: Callee::Function(function),
                    delegate,
                    args,
                })
            }
            ExprToken::BindDelegate => {
                let function = reader.read_script_name()?;
                self.emit(format!(
                    "$0x{raw:02X}: BindDelegate '{}'",
                    self.name_text(&function)
                ));
                self.emit("Delegate:");
                let delegate = Box::new(self.decode_one(reader)?);
                self.emit("Object:");
                let object = Box::new(self.decode_one(reader)?);
                ExprKind::BindDelegate {
                    function,
                    delegate,
                    object,
                }
            }

            // ---- terminator-delimited containers -----------------------
            ExprToken::SetArray => {
                self.emit(format!("$0x{raw:02X}: set array"));
                let target = Box::new(self.decode_one(reader)?);
                let items = self.decode_until(reader, ExprToken::EndArray, offset)?;
                ExprKind::Container(ContainerExpr {
                    kind: ContainerKind::Array { target },
                    items,
                })
            }
            ExprToken::SetSet => {
                self.emit(format!("$0x{raw:02X}: set set"));
                let target = Box::new(self.decode_one(reader)?);
                let count = reader.read_int()?;
                let items = self.decode_until(reader, ExprToken::EndSet, offset)?;
                ExprKind::Container(ContainerExpr {
                    kind: ContainerKind::Set { target, count },
                    items,
                })
            }
            ExprToken::SetMap => {
                self.emit(format!("$0x{raw:02X}: set map"));
                let target = Box::new(self.decode_one(reader)?);
                let count = reader.read_int()?;
                let items = self.decode_until(reader, ExprToken::EndMap, offset)?;
                ExprKind::Container(ContainerExpr {
                    kind: ContainerKind::Map { target, count },
                    items,
                })
            }
            ExprToken::StructConst => {
                let struct_type = reader.read_object_ref()?;
                let serialized_size = reader.read_int()?;
                self.emit(format!(
                    "$0x{raw:02X}: literal struct {} (serialized size: {serialized_size})",
                    self.object_name(struct_type)
                ));
                let items = self.decode_until(reader, ExprToken::EndStructConst, offset)?;
                ExprKind::Container(ContainerExpr {
                    kind: ContainerKind::StructLiteral {
                        struct_type,
                        serialized_size,
                    },
                    items,
                })
            }
            ExprToken::ArrayConst => {
                let inner = reader.read_object_ref()?;
                let count = reader.read_int()?;
                self.emit(format!(
                    "$0x{raw:02X}: literal array - element count: {count}, inner property: {}",
                    self.object_name(inner)
                ));
                let items = self.decode_until(reader, ExprToken::EndArrayConst, offset)?;
                ExprKind::Container(ContainerExpr {
                    kind: ContainerKind::ArrayLiteral { inner, count },
                    items,
                })
            }
            ExprToken::SetConst => {
                let inner = reader.read_object_ref()?;
                let count = reader.read_int()?;
                self.emit(format!(
                    "$0x{raw:02X}: literal set - element count: {count}, inner property: {}",
                    self.object_name(inner)
                ));
                let items = self.decode_until(reader, ExprToken::EndSetConst, offset)?;
                ExprKind::Container(ContainerExpr {
                    kind: ContainerKind::SetLiteral { inner, count },
                    items,
                })
            }
            ExprToken::MapConst => {
                let key = reader.read_object_ref()?;
                let value = reader.read_object_ref()?;
                let count = reader.read_int()?;
                self.emit(format!(
                    "$0x{raw:02X}: literal map - element count: {count}, key property: {}, value property: {}",
                    self.object_name(key),
                    self.object_name(value)
                ));
                let items = self.decode_until(reader, ExprToken::EndMapConst, offset)?;
                ExprKind::Container(ContainerExpr {
                    kind: ContainerKind::MapLiteral { key, value, count },
                    items,
                })
            }

            // ---- switch ------------------------------------------------
            ExprToken::SwitchValue => {
                let case_count = reader.read_word()?;
                let end_offset = reader.read_skip_count()?;
                self.emit(format!(
                    "$0x{raw:02X}: Switch value: {case_count} cases, end at 0x{end_offset:X}"
                ));
                self.indented(|d| -> Result<ExprKind, DecodeError> {
                    d.emit("Index:");
                    let index = Box::new(d.decode_one(reader)?);
                    let mut cases = Vec::with_capacity(case_count as usize);
                    for case in 0..case_count {
                        d.emit(format!("[{case}] case key:"));
                        let key = d.decode_one(reader)?;
                        let next_offset = reader.read_skip_count()?;
                        d.emit(format!(
                            "[{case}] offset to next case: 0x{next_offset:X}"
                        ));
                        d.emit(format!("[{case}] case result:"));
                        let result = d.decode_one(reader)?;
                        cases.push(SwitchCase {
                            key,
                            next_offset,
                            result,
                        });
                    }
                    d.emit("Default result:");
                    let default = Box::new(d.decode_one(reader)?);
                    Ok(ExprKind::Switch {
                        end_offset,
                        index,
                        cases,
                        default,
                    })
                })?
            }

            // ---- instrumentation ---------------------------------------
            ExprToken::InstrumentationEvent => {
                let kind = reader.read_byte()?;
                match InstrumentationKind::from_byte(kind) {
                    Some(known) => {
                        self.emit(format!("$0x{raw:02X}: .. instrumented {} ..", known.label()))
                    }
                    None => self.emit(format!(
                        "$0x{raw:02X}: .. instrumentation event {kind} .."
                    )),
                }
                ExprKind::Instrumentation { kind }
            }
        };

        Ok(kind)
    }
}
