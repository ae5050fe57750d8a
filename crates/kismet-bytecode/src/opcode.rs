//! Expression tokens: the one-byte opcodes of the script wire format.
//!
//! Values are wire constants and must never be reordered. The encoding has
//! gaps (retired opcodes keep their slot); `from_byte` returns `None` for
//! those and for anything past the defined range.

use serde::Serialize;

/// One-byte instruction tag.
///
/// The discriminants are the on-wire byte values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum ExprToken {
    /// A local variable reference.
    LocalVariable = 0x00,
    /// An instance (object member) variable reference.
    InstanceVariable = 0x01,
    /// Default variable for a class context.
    DefaultVariable = 0x02,
    /// Return from function, with return expression.
    Return = 0x04,
    /// Unconditional jump to a local code offset.
    Jump = 0x06,
    /// Jump to a local code offset if the condition is false.
    JumpIfNot = 0x07,
    /// Assertion with source line and debug-mode flag.
    Assert = 0x09,
    /// No operation.
    Nothing = 0x0B,
    /// Assign an arbitrary-size value to a variable.
    Let = 0x0F,
    /// Class default object context access.
    ClassContext = 0x12,
    /// Metaclass cast.
    MetaCast = 0x13,
    /// Assign to a boolean variable.
    LetBool = 0x14,
    /// End of default value for an optional function parameter.
    EndParmValue = 0x15,
    /// End of function call parameters.
    EndFunctionParms = 0x16,
    /// The self object.
    SelfRef = 0x17,
    /// Skippable expression (offset plus the expression it guards).
    Skip = 0x18,
    /// Member access through an object context.
    Context = 0x19,
    /// Same as `Context` but fails silently on a null object.
    ContextFailSilent = 0x1A,
    /// Virtual function call, named.
    VirtualFunction = 0x1B,
    /// Prebound (final) function call.
    FinalFunction = 0x1C,
    /// 32-bit integer constant.
    IntConst = 0x1D,
    /// 32-bit float constant.
    FloatConst = 0x1E,
    /// Narrow (single-byte-unit) string constant.
    StringConst = 0x1F,
    /// Object reference constant.
    ObjectConst = 0x20,
    /// Name constant.
    NameConst = 0x21,
    /// Rotation constant (pitch, yaw, roll).
    RotationConst = 0x22,
    /// Vector constant (x, y, z).
    VectorConst = 0x23,
    /// Byte constant.
    ByteConst = 0x24,
    /// Integer zero.
    IntZero = 0x25,
    /// Integer one.
    IntOne = 0x26,
    /// Boolean true.
    True = 0x27,
    /// Boolean false.
    False = 0x28,
    /// Text constant (one-byte kind, then per-kind fields).
    TextConst = 0x29,
    /// Null object reference.
    NoObject = 0x2A,
    /// Transform constant (rotation quat, translation, scale).
    TransformConst = 0x2B,
    /// Integer constant encoded in one byte.
    IntConstByte = 0x2C,
    /// Null interface reference.
    NoInterface = 0x2D,
    /// Safe dynamic class cast.
    DynamicCast = 0x2E,
    /// Struct literal, terminated by `EndStructConst`.
    StructConst = 0x2F,
    /// Terminator for `StructConst`.
    EndStructConst = 0x30,
    /// Fill an array variable, terminated by `EndArray`.
    SetArray = 0x31,
    /// Terminator for `SetArray`.
    EndArray = 0x32,
    /// Wide (two-byte-unit) string constant.
    UnicodeStringConst = 0x34,
    /// 64-bit signed integer constant.
    Int64Const = 0x35,
    /// 64-bit unsigned integer constant.
    UInt64Const = 0x36,
    /// Primitive type conversion; the conversion kind is the next byte.
    PrimitiveCast = 0x38,
    /// Fill a set variable, terminated by `EndSet`.
    SetSet = 0x39,
    /// Terminator for `SetSet`.
    EndSet = 0x3A,
    /// Fill a map variable, terminated by `EndMap`.
    SetMap = 0x3B,
    /// Terminator for `SetMap`.
    EndMap = 0x3C,
    /// Set literal, terminated by `EndSetConst`.
    SetConst = 0x3D,
    /// Terminator for `SetConst`.
    EndSetConst = 0x3E,
    /// Map literal, terminated by `EndMapConst`.
    MapConst = 0x3F,
    /// Terminator for `MapConst`.
    EndMapConst = 0x40,
    /// Address a property within a struct value.
    StructMemberContext = 0x42,
    /// Assign to a multicast delegate.
    LetMulticastDelegate = 0x43,
    /// Assign to a delegate.
    LetDelegate = 0x44,
    /// Local out (pass-by-reference) function parameter.
    LocalOutVariable = 0x48,
    /// Retired opcode; decodes to nothing.
    DeprecatedOp4A = 0x4A,
    /// Reference to a delegate bound to a named instance function.
    InstanceDelegate = 0x4B,
    /// Push an address onto the execution flow stack.
    PushExecutionFlow = 0x4C,
    /// Continue at the last pushed flow-stack address.
    PopExecutionFlow = 0x4D,
    /// Jump to an offset computed by an expression.
    ComputedJump = 0x4E,
    /// Pop the flow stack if the condition is false.
    PopExecutionFlowIfNot = 0x4F,
    /// Editor breakpoint; a no-op at runtime.
    Breakpoint = 0x50,
    /// Call through a native interface variable.
    InterfaceContext = 0x51,
    /// Convert an object reference to an interface variable.
    ObjToInterfaceCast = 0x52,
    /// Last instruction of a script.
    EndOfScript = 0x53,
    /// Convert between interface variable types.
    CrossInterfaceCast = 0x54,
    /// Convert an interface variable to an object reference.
    InterfaceToObjCast = 0x55,
    /// Editor wire trace point; a no-op at runtime.
    WireTracepoint = 0x5A,
    /// Code-size skip-offset constant.
    SkipOffsetConst = 0x5B,
    /// Add a delegate to a multicast delegate's targets.
    AddMulticastDelegate = 0x5C,
    /// Clear all targets of a multicast delegate.
    ClearMulticastDelegate = 0x5D,
    /// Editor trace point; a no-op at runtime.
    Tracepoint = 0x5E,
    /// Assign to an object reference variable.
    LetObj = 0x5F,
    /// Assign to a weak object pointer variable.
    LetWeakObjPtr = 0x60,
    /// Bind an object and function name to a delegate.
    BindDelegate = 0x61,
    /// Remove a delegate from a multicast delegate's targets.
    RemoveMulticastDelegate = 0x62,
    /// Invoke a multicast delegate.
    CallMulticastDelegate = 0x63,
    /// Assign through a property slot on the persistent frame.
    LetValueOnPersistentFrame = 0x64,
    /// Array literal, terminated by `EndArrayConst`.
    ArrayConst = 0x65,
    /// Terminator for `ArrayConst`.
    EndArrayConst = 0x66,
    /// Soft object path constant (wraps a string expression).
    SoftObjectConst = 0x67,
    /// Static pure math function call.
    CallMath = 0x68,
    /// Switch on a value with a fixed case count.
    SwitchValue = 0x69,
    /// Instrumentation event; the sub-kind is the next byte.
    InstrumentationEvent = 0x6A,
    /// Array element access by reference.
    ArrayGetByRef = 0x6B,
}

impl ExprToken {
    /// Every defined token, in wire order.
    pub const ALL: &'static [ExprToken] = &[
        Self::LocalVariable,
        Self::InstanceVariable,
        Self::DefaultVariable,
        Self::Return,
        Self::Jump,
        Self::JumpIfNot,
        Self::Assert,
        Self::Nothing,
        Self::Let,
        Self::ClassContext,
        Self::MetaCast,
        Self::LetBool,
        Self::EndParmValue,
        Self::EndFunctionParms,
        Self::SelfRef,
        Self::Skip,
        Self::Context,
        Self::ContextFailSilent,
        Self::VirtualFunction,
        Self::FinalFunction,
        Self::IntConst,
        Self::FloatConst,
        Self::StringConst,
        Self::ObjectConst,
        Self::NameConst,
        Self::RotationConst,
        Self::VectorConst,
        Self::ByteConst,
        Self::IntZero,
        Self::IntOne,
        Self::True,
        Self::False,
        Self::TextConst,
        Self::NoObject,
        Self::TransformConst,
        Self::IntConstByte,
        Self::NoInterface,
        Self::DynamicCast,
        Self::StructConst,
        Self::EndStructConst,
        Self::SetArray,
        Self::EndArray,
        Self::UnicodeStringConst,
        Self::Int64Const,
        Self::UInt64Const,
        Self::PrimitiveCast,
        Self::SetSet,
        Self::EndSet,
        Self::SetMap,
        Self::EndMap,
        Self::SetConst,
        Self::EndSetConst,
        Self::MapConst,
        Self::EndMapConst,
        Self::StructMemberContext,
        Self::LetMulticastDelegate,
        Self::LetDelegate,
        Self::LocalOutVariable,
        Self::DeprecatedOp4A,
        Self::InstanceDelegate,
        Self::PushExecutionFlow,
        Self::PopExecutionFlow,
        Self::ComputedJump,
        Self::PopExecutionFlowIfNot,
        Self::Breakpoint,
        Self::InterfaceContext,
        Self::ObjToInterfaceCast,
        Self::EndOfScript,
        Self::CrossInterfaceCast,
        Self::InterfaceToObjCast,
        Self::WireTracepoint,
        Self::SkipOffsetConst,
        Self::AddMulticastDelegate,
        Self::ClearMulticastDelegate,
        Self::Tracepoint,
        Self::LetObj,
        Self::LetWeakObjPtr,
        Self::BindDelegate,
        Self::RemoveMulticastDelegate,
        Self::CallMulticastDelegate,
        Self::LetValueOnPersistentFrame,
        Self::ArrayConst,
        Self::EndArrayConst,
        Self::SoftObjectConst,
        Self::CallMath,
        Self::SwitchValue,
        Self::InstrumentationEvent,
        Self::ArrayGetByRef,
    ];

    /// Decode a wire byte. Returns `None` for gaps and out-of-range values.
    pub fn from_byte(byte: u8) -> Option<Self> {
        let token = match byte {
            0x00 => Self::LocalVariable,
            0x01 => Self::InstanceVariable,
            0x02 => Self::DefaultVariable,
            0x04 => Self::Return,
            0x06 => Self::Jump,
            0x07 => Self::JumpIfNot,
            0x09 => Self::Assert,
            0x0B => Self::Nothing,
            0x0F => Self::Let,
            0x12 => Self::ClassContext,
            0x13 => Self::MetaCast,
            0x14 => Self::LetBool,
            0x15 => Self::EndParmValue,
            0x16 => Self::EndFunctionParms,
            0x17 => Self::SelfRef,
            0x18 => Self::Skip,
            0x19 => Self::Context,
            0x1A => Self::ContextFailSilent,
            0x1B => Self::VirtualFunction,
            0x1C => Self::FinalFunction,
            0x1D => Self::IntConst,
            0x1E => Self::FloatConst,
            0x1F => Self::StringConst,
            0x20 => Self::ObjectConst,
            0x21 => Self::NameConst,
            0x22 => Self::RotationConst,
            0x23 => Self::VectorConst,
            0x24 => Self::ByteConst,
            0x25 => Self::IntZero,
            0x26 => Self::IntOne,
            0x27 => Self::True,
            0x28 => Self::False,
            0x29 => Self::TextConst,
            0x2A => Self::NoObject,
            0x2B => Self::TransformConst,
            0x2C => Self::IntConstByte,
            0x2D => Self::NoInterface,
            0x2E => Self::DynamicCast,
            0x2F => Self::StructConst,
            0x30 => Self::EndStructConst,
            0x31 => Self::SetArray,
            0x32 => Self::EndArray,
            0x34 => Self::UnicodeStringConst,
            0x35 => Self::Int64Const,
            0x36 => Self::UInt64Const,
            0x38 => Self::PrimitiveCast,
            0x39 => Self::SetSet,
            0x3A => Self::EndSet,
            0x3B => Self::SetMap,
            0x3C => Self::EndMap,
            0x3D => Self::SetConst,
            0x3E => Self::EndSetConst,
            0x3F => Self::MapConst,
            0x40 => Self::EndMapConst,
            0x42 => Self::StructMemberContext,
            0x43 => Self::LetMulticastDelegate,
            0x44 => Self::LetDelegate,
            0x48 => Self::LocalOutVariable,
            0x4A => Self::DeprecatedOp4A,
            0x4B => Self::InstanceDelegate,
            0x4C => Self::PushExecutionFlow,
            0x4D => Self::PopExecutionFlow,
            0x4E => Self::ComputedJump,
            0x4F => Self::PopExecutionFlowIfNot,
            0x50 => Self::Breakpoint,
            0x51 => Self::InterfaceContext,
            0x52 => Self::ObjToInterfaceCast,
            0x53 => Self::EndOfScript,
            0x54 => Self::CrossInterfaceCast,
            0x55 => Self::InterfaceToObjCast,
            0x5A => Self::WireTracepoint,
            0x5B => Self::SkipOffsetConst,
            0x5C => Self::AddMulticastDelegate,
            0x5D => Self::ClearMulticastDelegate,
            0x5E => Self::Tracepoint,
            0x5F => Self::LetObj,
            0x60 => Self::LetWeakObjPtr,
            0x61 => Self::BindDelegate,
            0x62 => Self::RemoveMulticastDelegate,
            0x63 => Self::CallMulticastDelegate,
            0x64 => Self::LetValueOnPersistentFrame,
            0x65 => Self::ArrayConst,
            0x66 => Self::EndArrayConst,
            0x67 => Self::SoftObjectConst,
            0x68 => Self::CallMath,
            0x69 => Self::SwitchValue,
            0x6A => Self::InstrumentationEvent,
            0x6B => Self::ArrayGetByRef,
            _ => return None,
        };
        Some(token)
    }

    /// The wire byte for this token.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Token name as spelled in the wire-format documentation.
    pub fn name(self) -> &'static str {
        match self {
            Self::LocalVariable => "LocalVariable",
            Self::InstanceVariable => "InstanceVariable",
            Self::DefaultVariable => "DefaultVariable",
            Self::Return => "Return",
            Self::Jump => "Jump",
            Self::JumpIfNot => "JumpIfNot",
            Self::Assert => "Assert",
            Self::Nothing => "Nothing",
            Self::Let => "Let",
            Self::ClassContext => "ClassContext",
            Self::MetaCast => "MetaCast",
            Self::LetBool => "LetBool",
            Self::EndParmValue => "EndParmValue",
            Self::EndFunctionParms => "EndFunctionParms",
            Self::SelfRef => "Self",
            Self::Skip => "Skip",
            Self::Context => "Context",
            Self::ContextFailSilent => "ContextFailSilent",
            Self::VirtualFunction => "VirtualFunction",
            Self::FinalFunction => "FinalFunction",
            Self::IntConst => "IntConst",
            Self::FloatConst => "FloatConst",
            Self::StringConst => "StringConst",
            Self::ObjectConst => "ObjectConst",
            Self::NameConst => "NameConst",
            Self::RotationConst => "RotationConst",
            Self::VectorConst => "VectorConst",
            Self::ByteConst => "ByteConst",
            Self::IntZero => "IntZero",
            Self::IntOne => "IntOne",
            Self::True => "True",
            Self::False => "False",
            Self::TextConst => "TextConst",
            Self::NoObject => "NoObject",
            Self::TransformConst => "TransformConst",
            Self::IntConstByte => "IntConstByte",
            Self::NoInterface => "NoInterface",
            Self::DynamicCast => "DynamicCast",
            Self::StructConst => "StructConst",
            Self::EndStructConst => "EndStructConst",
            Self::SetArray => "SetArray",
            Self::EndArray => "EndArray",
            Self::UnicodeStringConst => "UnicodeStringConst",
            Self::Int64Const => "Int64Const",
            Self::UInt64Const => "UInt64Const",
            Self::PrimitiveCast => "PrimitiveCast",
            Self::SetSet => "SetSet",
            Self::EndSet => "EndSet",
            Self::SetMap => "SetMap",
            Self::EndMap => "EndMap",
            Self::SetConst => "SetConst",
            Self::EndSetConst => "EndSetConst",
            Self::MapConst => "MapConst",
            Self::EndMapConst => "EndMapConst",
            Self::StructMemberContext => "StructMemberContext",
            Self::LetMulticastDelegate => "LetMulticastDelegate",
            Self::LetDelegate => "LetDelegate",
            Self::LocalOutVariable => "LocalOutVariable",
            Self::DeprecatedOp4A => "DeprecatedOp4A",
            Self::InstanceDelegate => "InstanceDelegate",
            Self::PushExecutionFlow => "PushExecutionFlow",
            Self::PopExecutionFlow => "PopExecutionFlow",
            Self::ComputedJump => "ComputedJump",
            Self::PopExecutionFlowIfNot => "PopExecutionFlowIfNot",
            Self::Breakpoint => "Breakpoint",
            Self::InterfaceContext => "InterfaceContext",
            Self::ObjToInterfaceCast => "ObjToInterfaceCast",
            Self::EndOfScript => "EndOfScript",
            Self::CrossInterfaceCast => "CrossInterfaceCast",
            Self::InterfaceToObjCast => "InterfaceToObjCast",
            Self::WireTracepoint => "WireTracepoint",
            Self::SkipOffsetConst => "SkipOffsetConst",
            Self::AddMulticastDelegate => "AddMulticastDelegate",
            Self::ClearMulticastDelegate => "ClearMulticastDelegate",
            Self::Tracepoint => "Tracepoint",
            Self::LetObj => "LetObj",
            Self::LetWeakObjPtr => "LetWeakObjPtr",
            Self::BindDelegate => "BindDelegate",
            Self::RemoveMulticastDelegate => "RemoveMulticastDelegate",
            Self::CallMulticastDelegate => "CallMulticastDelegate",
            Self::LetValueOnPersistentFrame => "LetValueOnPersistentFrame",
            Self::ArrayConst => "ArrayConst",
            Self::EndArrayConst => "EndArrayConst",
            Self::SoftObjectConst => "SoftObjectConst",
            Self::CallMath => "CallMath",
            Self::SwitchValue => "SwitchValue",
            Self::InstrumentationEvent => "InstrumentationEvent",
            Self::ArrayGetByRef => "ArrayGetByRef",
        }
    }

    /// True for the "end of X" tokens that close an open child sequence.
    pub fn is_terminator(self) -> bool {
        matches!(
            self,
            Self::EndFunctionParms
                | Self::EndStructConst
                | Self::EndArray
                | Self::EndArrayConst
                | Self::EndSet
                | Self::EndSetConst
                | Self::EndMap
                | Self::EndMapConst
        )
    }
}
