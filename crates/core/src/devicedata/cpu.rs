//! CPU type labelling
//!
//! Identifiers follow the Mach `cpu_type_t` / `cpu_subtype_t` encoding. The
//! high byte of both carries ABI/capability flags and is ignored when
//! matching.

use devicedata_domain::constants::CPU_UNKNOWN;
use devicedata_domain::CpuIdentifiers;

const ARCH_MASK: i32 = 0x00FF_FFFF;

pub const CPU_ARCH_ABI64: i32 = 0x0100_0000;

pub const CPU_TYPE_X86: i32 = 7;
pub const CPU_TYPE_X86_64: i32 = CPU_TYPE_X86 | CPU_ARCH_ABI64;
pub const CPU_TYPE_ARM: i32 = 12;
pub const CPU_TYPE_ARM64: i32 = CPU_TYPE_ARM | CPU_ARCH_ABI64;

pub const CPU_SUBTYPE_ARM_ALL: i32 = 0;
pub const CPU_SUBTYPE_ARM_V6: i32 = 6;
pub const CPU_SUBTYPE_ARM_V7: i32 = 9;
pub const CPU_SUBTYPE_ARM_V7F: i32 = 10;
pub const CPU_SUBTYPE_ARM_V7S: i32 = 11;
pub const CPU_SUBTYPE_ARM_V7K: i32 = 12;
pub const CPU_SUBTYPE_ARM_V8: i32 = 13;
pub const CPU_SUBTYPE_ARM_V6M: i32 = 14;
pub const CPU_SUBTYPE_ARM_V7M: i32 = 15;
pub const CPU_SUBTYPE_ARM_V7EM: i32 = 16;
pub const CPU_SUBTYPE_ARM64_ALL: i32 = 0;
pub const CPU_SUBTYPE_ARM64_V8: i32 = 1;
pub const CPU_SUBTYPE_X86_ALL: i32 = 3;

/// ARM subtype labels, checked in order; the first match wins.
const ARM_SUBTYPE_LADDER: [(i32, &str); 11] = [
    (CPU_SUBTYPE_ARM64_V8, "ARM64v8"),
    (CPU_SUBTYPE_ARM64_ALL, "ARM64"),
    (CPU_SUBTYPE_ARM_V8, "ARMV8"),
    (CPU_SUBTYPE_ARM_V7, "ARMV7"),
    (CPU_SUBTYPE_ARM_V7EM, "ARMV7em"),
    (CPU_SUBTYPE_ARM_V7F, "ARMV7f"),
    (CPU_SUBTYPE_ARM_V7K, "ARMV7k"),
    (CPU_SUBTYPE_ARM_V7M, "ARMV7m"),
    (CPU_SUBTYPE_ARM_V7S, "ARMV7s"),
    (CPU_SUBTYPE_ARM_V6, "ARMV6"),
    (CPU_SUBTYPE_ARM_V6M, "ARMV6m"),
];

/// Label for a CPU type/subtype pair; `None` reads as unknown.
#[must_use]
pub fn cpu_type_label(identifiers: Option<CpuIdentifiers>) -> &'static str {
    let Some(CpuIdentifiers { cpu_type, cpu_subtype }) = identifiers else {
        return CPU_UNKNOWN;
    };

    match cpu_type & ARCH_MASK {
        CPU_TYPE_X86 => "x86",
        CPU_TYPE_ARM => {
            let subtype = cpu_subtype & ARCH_MASK;
            ARM_SUBTYPE_LADDER
                .iter()
                .find(|(candidate, _)| *candidate == subtype)
                .map_or("ARM", |&(_, label)| label)
        }
        _ => CPU_UNKNOWN,
    }
}
