//! Dalvik instruction vocabulary and mnemonic lookup
//!
//! Every supported bytecode mnemonic is one `Instruction` variant. The
//! `Boundary` sentinel marks method start/end so that n-gram windows never
//! span two method bodies. Variant order is the table order below and drives
//! the order in which windows are reported.

use std::collections::HashMap;
use std::sync::OnceLock;

macro_rules! instruction_set {
    ($($variant:ident => $mnemonic:literal,)*) => {
        /// A single vocabulary entry: one Dalvik opcode, or the method boundary
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Instruction {
            $($variant,)*
            /// Method start/end marker; never produced by a mnemonic lookup
            Boundary,
        }

        impl Instruction {
            /// Every opcode variant in table order (excludes `Boundary`)
            pub const ALL: &'static [Instruction] = &[$(Instruction::$variant,)*];

            /// Mnemonic as it appears in a bytecode listing
            pub fn mnemonic(self) -> &'static str {
                match self {
                    $(Instruction::$variant => $mnemonic,)*
                    Instruction::Boundary => BOUNDARY_LABEL,
                }
            }
        }
    };
}

/// Label used when a boundary has to be rendered
pub const BOUNDARY_LABEL: &str = "<boundary>";

instruction_set! {
    AddDouble => "add-double",
    AddDouble2addr => "add-double/2addr",
    AddFloat => "add-float",
    AddFloat2addr => "add-float/2addr",
    AddInt => "add-int",
    AddInt2addr => "add-int/2addr",
    AddIntLit16 => "add-int/lit16",
    AddIntLit8 => "add-int/lit8",
    AddLong => "add-long",
    AddLong2addr => "add-long/2addr",
    Aget => "aget",
    AgetBoolean => "aget-boolean",
    AgetByte => "aget-byte",
    AgetChar => "aget-char",
    AgetObject => "aget-object",
    AgetShort => "aget-short",
    AgetWide => "aget-wide",
    AndInt => "and-int",
    AndInt2addr => "and-int/2addr",
    AndIntLit16 => "and-int/lit16",
    AndIntLit8 => "and-int/lit8",
    AndLong => "and-long",
    AndLong2addr => "and-long/2addr",
    Aput => "aput",
    AputBoolean => "aput-boolean",
    AputByte => "aput-byte",
    AputChar => "aput-char",
    AputObject => "aput-object",
    AputShort => "aput-short",
    AputWide => "aput-wide",
    ArrayLength => "array-length",
    Breakpoint => "breakpoint",
    CheckCast => "check-cast",
    CmpgDouble => "cmpg-double",
    CmpgFloat => "cmpg-float",
    CmplDouble => "cmpl-double",
    CmplFloat => "cmpl-float",
    CmpLong => "cmp-long",
    Const => "const",
    Const16 => "const/16",
    Const4 => "const/4",
    ConstClass => "const-class",
    ConstHigh16 => "const/high16",
    ConstString => "const-string",
    ConstWide => "const-wide",
    ConstWide16 => "const-wide/16",
    ConstWide32 => "const-wide/32",
    ConstWideHigh16 => "const-wide/high16",
    DivDouble => "div-double",
    DivDouble2addr => "div-double/2addr",
    DivFloat => "div-float",
    DivFloat2addr => "div-float/2addr",
    DivInt => "div-int",
    DivInt2addr => "div-int/2addr",
    DivIntLit16 => "div-int/lit16",
    DivIntLit8 => "div-int/lit8",
    DivLong => "div-long",
    DivLong2addr => "div-long/2addr",
    DoubleToFloat => "double-to-float",
    DoubleToInt => "double-to-int",
    DoubleToLong => "double-to-long",
    FilledNewArray => "filled-new-array",
    FilledNewArrayRange => "filled-new-array/range",
    FillArrayData => "fill-array-data",
    FloatToDouble => "float-to-double",
    FloatToInt => "float-to-int",
    FloatToLong => "float-to-long",
    Goto => "goto",
    Goto16 => "goto/16",
    Goto32 => "goto/32",
    IfEq => "if-eq",
    IfEqz => "if-eqz",
    IfGe => "if-ge",
    IfGez => "if-gez",
    IfGt => "if-gt",
    IfGtz => "if-gtz",
    IfLe => "if-le",
    IfLez => "if-lez",
    IfLt => "if-lt",
    IfLtz => "if-ltz",
    IfNe => "if-ne",
    IfNez => "if-nez",
    Iget => "iget",
    IgetBoolean => "iget-boolean",
    IgetByte => "iget-byte",
    IgetChar => "iget-char",
    IgetObject => "iget-object",
    IgetObjectQuick => "iget-object/quick",
    IgetQuick => "iget-quick",
    IgetShort => "iget-short",
    IgetWide => "iget-wide",
    IgetWideQuick => "iget-wide/quick",
    IgetWideVolatile => "iget-wide/volatile",
    InstanceOf => "instance-of",
    IntToByte => "int-to-byte",
    IntToChar => "int-to-char",
    IntToDouble => "int-to-double",
    IntToFloat => "int-to-float",
    IntToLong => "int-to-long",
    IntToShort => "int-to-short",
    InvokeCustom => "invoke-custom",
    InvokeCustomRange => "invoke-custom/range",
    InvokeDirect => "invoke-direct",
    InvokeDirectEmpty => "invoke-direct/empty",
    InvokeDirectRange => "invoke-direct/range",
    InvokeInterface => "invoke-interface",
    InvokeInterfaceRange => "invoke-interface/range",
    InvokePolymorphic => "invoke-polymorphic",
    InvokePolymorphicRange => "invoke-polymorphic/range",
    InvokeStatic => "invoke-static",
    InvokeStaticRange => "invoke-static/range",
    InvokeSuper => "invoke-super",
    InvokeSuperRange => "invoke-super/range",
    InvokeVirtual => "invoke-virtual",
    InvokeVirtualRange => "invoke-virtual/range",
    Iput => "iput",
    IputBoolean => "iput-boolean",
    IputByte => "iput-byte",
    IputChar => "iput-char",
    IputObject => "iput-object",
    IputShort => "iput-short",
    IputWide => "iput-wide",
    LongToDouble => "long-to-double",
    LongToFloat => "long-to-float",
    LongToInt => "long-to-int",
    MonitorEnter => "monitor-enter",
    MonitorExit => "monitor-exit",
    Move => "move",
    Move16 => "move/16",
    MoveException => "move-exception",
    MoveFrom16 => "move/from16",
    MoveObject => "move-object",
    MoveObject16 => "move-object/16",
    MoveObjectFrom16 => "move-object/from16",
    MoveResult => "move-result",
    MoveResultObject => "move-result-object",
    MoveResultWide => "move-result-wide",
    MoveWide => "move-wide",
    MoveWide16 => "move-wide/16",
    MoveWideFrom16 => "move-wide/from16",
    MulDouble => "mul-double",
    MulDouble2addr => "mul-double/2addr",
    MulFloat => "mul-float",
    MulFloat2addr => "mul-float/2addr",
    MulInt => "mul-int",
    MulInt2addr => "mul-int/2addr",
    MulIntLit16 => "mul-int/lit16",
    MulIntLit8 => "mul-int/lit8",
    MulLong => "mul-long",
    MulLong2addr => "mul-long/2addr",
    NegDouble => "neg-double",
    NegFloat => "neg-float",
    NegInt => "neg-int",
    NegLong => "neg-long",
    NewArray => "new-array",
    NewArrayJumbo => "new-array/jumbo",
    NewInstance => "new-instance",
    NewInstanceJumbo => "new-instance/jumbo",
    Nop => "nop",
    NotInt => "not-int",
    NotLong => "not-long",
    OrInt => "or-int",
    OrInt2addr => "or-int/2addr",
    OrIntLit16 => "or-int/lit16",
    OrIntLit8 => "or-int/lit8",
    OrLong => "or-long",
    OrLong2addr => "or-long/2addr",
    PackedSwitch => "packed-switch",
    RemDouble => "rem-double",
    RemDouble2addr => "rem-double/2addr",
    RemFloat => "rem-float",
    RemFloat2addr => "rem-float/2addr",
    RemInt => "rem-int",
    RemInt2addr => "rem-int/2addr",
    RemIntLit16 => "rem-int/lit16",
    RemIntLit8 => "rem-int/lit8",
    RemLong => "rem-long",
    RemLong2addr => "rem-long/2addr",
    Return => "return",
    ReturnObject => "return-object",
    ReturnVoid => "return-void",
    ReturnWide => "return-wide",
    RsubInt => "rsub-int",
    RsubIntLit8 => "rsub-int/lit8",
    Sget => "sget",
    SgetBoolean => "sget-boolean",
    SgetByte => "sget-byte",
    SgetChar => "sget-char",
    SgetObject => "sget-object",
    SgetShort => "sget-short",
    SgetWide => "sget-wide",
    ShlInt => "shl-int",
    ShlInt2addr => "shl-int/2addr",
    ShlIntLit8 => "shl-int/lit8",
    ShlLong => "shl-long",
    ShlLong2addr => "shl-long/2addr",
    ShrInt => "shr-int",
    ShrInt2addr => "shr-int/2addr",
    ShrIntLit8 => "shr-int/lit8",
    ShrLong => "shr-long",
    ShrLong2addr => "shr-long/2addr",
    SparseSwitch => "sparse-switch",
    Sput => "sput",
    SputBoolean => "sput-boolean",
    SputByte => "sput-byte",
    SputChar => "sput-char",
    SputObject => "sput-object",
    SputShort => "sput-short",
    SputWide => "sput-wide",
    SubDouble => "sub-double",
    SubDouble2addr => "sub-double/2addr",
    SubFloat => "sub-float",
    SubFloat2addr => "sub-float/2addr",
    SubInt => "sub-int",
    SubInt2addr => "sub-int/2addr",
    SubLong => "sub-long",
    SubLong2addr => "sub-long/2addr",
    Throw => "throw",
    UshrInt => "ushr-int",
    UshrInt2addr => "ushr-int/2addr",
    UshrIntLit8 => "ushr-int/lit8",
    UshrLong => "ushr-long",
    UshrLong2addr => "ushr-long/2addr",
    XorInt => "xor-int",
    XorInt2addr => "xor-int/2addr",
    XorIntLit16 => "xor-int/lit16",
    XorIntLit8 => "xor-int/lit8",
    XorLong => "xor-long",
    XorLong2addr => "xor-long/2addr",
}

impl Instruction {
    /// Look up the instruction for an exact mnemonic (no case folding)
    pub fn from_mnemonic(token: &str) -> Option<Instruction> {
        instruction_map().get(token).copied()
    }

    pub fn is_boundary(self) -> bool {
        self == Instruction::Boundary
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Mnemonic to instruction lookup, built once on first use
///
/// # Example
/// ```
/// use dexgram::instruction::{instruction_map, Instruction};
///
/// assert_eq!(instruction_map().get("add-int"), Some(&Instruction::AddInt));
/// assert_eq!(instruction_map().get("ADD-INT"), None);
/// ```
pub fn instruction_map() -> &'static HashMap<&'static str, Instruction> {
    static MAP: OnceLock<HashMap<&'static str, Instruction>> = OnceLock::new();
    MAP.get_or_init(|| {
        Instruction::ALL
            .iter()
            .map(|&inst| (inst.mnemonic(), inst))
            .collect()
    })
}
