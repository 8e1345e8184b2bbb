//! Control and Status Register (CSR) names.
//!
//! The disassembler prints CSR operands by name. Addresses outside the known
//! set fall back to a three-digit hexadecimal literal (`0x7c0`).

use std::borrow::Cow;

/// Floating-point accrued exceptions CSR address.
pub const FFLAGS: u32 = 0x001;

/// Floating-point dynamic rounding mode CSR address.
pub const FRM: u32 = 0x002;

/// Floating-point control and status CSR address (`frm` + `fflags`).
pub const FCSR: u32 = 0x003;

/// Returns the fixed (non-numbered) name of a CSR, if it has one.
const fn fixed_name(addr: u32) -> Option<&'static str> {
    let name = match addr {
        // User
        0x000 => "ustatus",
        FFLAGS => "fflags",
        FRM => "frm",
        FCSR => "fcsr",
        0x004 => "uie",
        0x005 => "utvec",
        0x040 => "uscratch",
        0x041 => "uepc",
        0x042 => "ucause",
        0x043 => "utval",
        0x044 => "uip",
        0xc00 => "cycle",
        0xc01 => "time",
        0xc02 => "instret",
        0xc80 => "cycleh",
        0xc81 => "timeh",
        0xc82 => "instreth",
        // Supervisor
        0x100 => "sstatus",
        0x102 => "sedeleg",
        0x103 => "sideleg",
        0x104 => "sie",
        0x105 => "stvec",
        0x106 => "scounteren",
        0x140 => "sscratch",
        0x141 => "sepc",
        0x142 => "scause",
        0x143 => "stval",
        0x144 => "sip",
        0x180 => "satp",
        // Hypervisor
        0x200 => "hstatus",
        0x202 => "hedeleg",
        0x203 => "hideleg",
        0x204 => "hie",
        0x205 => "htvec",
        0x240 => "hscratch",
        0x241 => "hepc",
        0x242 => "hcause",
        0x243 => "hbadaddr",
        0x244 => "hip",
        // Machine
        0xf11 => "mvendorid",
        0xf12 => "marchid",
        0xf13 => "mimpid",
        0xf14 => "mhartid",
        0x300 => "mstatus",
        0x301 => "misa",
        0x302 => "medeleg",
        0x303 => "mideleg",
        0x304 => "mie",
        0x305 => "mtvec",
        0x306 => "mcounteren",
        0x320 => "mucounteren",
        0x321 => "mscounteren",
        0x322 => "mhcounteren",
        0x340 => "mscratch",
        0x341 => "mepc",
        0x342 => "mcause",
        0x343 => "mtval",
        0x344 => "mip",
        0x380 => "mbase",
        0x381 => "mbound",
        0x382 => "mibase",
        0x383 => "mibound",
        0x384 => "mdbase",
        0x385 => "mdbound",
        0xb00 => "mcycle",
        0xb02 => "minstret",
        0xb80 => "mcycleh",
        0xb82 => "minstreth",
        // Debug / trigger
        0x7a0 => "tselect",
        0x7a1 => "tdata1",
        0x7a2 => "tdata2",
        0x7a3 => "tdata3",
        0x7b0 => "dcsr",
        0x7b1 => "dpc",
        0x7b2 => "dscratch",
        _ => return None,
    };
    Some(name)
}

/// Returns the name of a numbered CSR family member (counters, PMP).
fn numbered_name(addr: u32) -> Option<String> {
    let name = match addr {
        0xc03..=0xc1f => format!("hpmcounter{}", addr - 0xc00),
        0xc83..=0xc9f => format!("hpmcounter{}h", addr - 0xc80),
        0x323..=0x33f => format!("mhpmevent{}", addr - 0x320),
        0x3a0..=0x3a3 => format!("pmpcfg{}", addr - 0x3a0),
        0x3b0..=0x3bf => format!("pmpaddr{}", addr - 0x3b0),
        0xb03..=0xb1f => format!("mhpmcounter{}", addr - 0xb00),
        0xb83..=0xb9f => format!("mhpmcounter{}h", addr - 0xb80),
        _ => return None,
    };
    Some(name)
}

/// Returns the assembly name of the CSR at `addr`.
///
/// Unknown addresses render as `0x%03x`, e.g. `0x7c0` or `0x00f`.
pub fn csr_name(addr: u32) -> Cow<'static, str> {
    if let Some(name) = fixed_name(addr) {
        return Cow::Borrowed(name);
    }
    numbered_name(addr).map_or_else(|| Cow::Owned(format!("0x{addr:03x}")), Cow::Owned)
}
