//! Sub-discriminants nested inside certain instructions: the text-literal
//! kind byte and the instrumentation-event kind byte.

use serde::Serialize;

/// The five encodings of a text literal, selected by the byte after
/// `TextConst`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum TextKind {
    /// No payload; the value is the empty text.
    Empty = 0,
    /// Source, key and namespace strings, resolved through localization.
    LocalizedText = 1,
    /// One culture-invariant source string.
    InvariantText = 2,
    /// One plain literal string.
    LiteralString = 3,
    /// A string-table reference: asset ref (unused for display), table id
    /// and key strings.
    StringTableEntry = 4,
}

impl TextKind {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Empty),
            1 => Some(Self::LocalizedText),
            2 => Some(Self::InvariantText),
            3 => Some(Self::LiteralString),
            4 => Some(Self::StringTableEntry),
            _ => None,
        }
    }
}

/// Event categories carried by `InstrumentationEvent`. Display only; no
/// further operands follow the kind byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum InstrumentationKind {
    Class = 0,
    ClassScope = 1,
    Instance = 2,
    Event = 3,
    InlineEvent = 4,
    ResumeEvent = 5,
    PureNodeEntry = 6,
    NodeDebugSite = 7,
    NodeEntry = 8,
    NodeExit = 9,
    PushState = 10,
    RestoreState = 11,
    ResetState = 12,
    SuspendState = 13,
    PopState = 14,
    TunnelEndOfThread = 15,
    Stop = 16,
}

impl InstrumentationKind {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Class),
            1 => Some(Self::ClassScope),
            2 => Some(Self::Instance),
            3 => Some(Self::Event),
            4 => Some(Self::InlineEvent),
            5 => Some(Self::ResumeEvent),
            6 => Some(Self::PureNodeEntry),
            7 => Some(Self::NodeDebugSite),
            8 => Some(Self::NodeEntry),
            9 => Some(Self::NodeExit),
            10 => Some(Self::PushState),
            11 => Some(Self::RestoreState),
            12 => Some(Self::ResetState),
            13 => Some(Self::SuspendState),
            14 => Some(Self::PopState),
            15 => Some(Self::TunnelEndOfThread),
            16 => Some(Self::Stop),
            _ => None,
        }
    }

    /// Human-readable label for rendered output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Class => "class scope start",
            Self::ClassScope => "class scope",
            Self::Instance => "instance event",
            Self::Event => "event",
            Self::InlineEvent => "inline event",
            Self::ResumeEvent => "resume event",
            Self::PureNodeEntry => "pure node entry site",
            Self::NodeDebugSite => "debug site",
            Self::NodeEntry => "wire entry site",
            Self::NodeExit => "wire exit site",
            Self::PushState => "push execution state",
            Self::RestoreState => "restore execution state",
            Self::ResetState => "reset execution state",
            Self::SuspendState => "suspend execution state",
            Self::PopState => "pop execution state",
            Self::TunnelEndOfThread => "tunnel end of thread",
            Self::Stop => "event stop",
        }
    }
}

/// Label for a primitive-cast conversion byte. The conversion space shares
/// the opcode numbering plane; only a few values are ever emitted.
pub fn conversion_label(byte: u8) -> Option<&'static str> {
    match byte {
        0x46 => Some("ObjectToInterface"),
        0x47 => Some("ObjectToBool"),
        0x49 => Some("InterfaceToBool"),
        _ => None,
    }
}
