//! Formatter Unit Tests (32-bit).
//!
//! Each case disassembles one word and compares the exact assembly text,
//! including pseudo-instruction rewrites and operand spelling.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvdis_core::Disassembly;
use rvdis_core::isa::disasm::{ILLEGAL, address_mask};

use crate::common::{
    OP_BRANCH, OP_IMM, OP_JAL, OP_LOAD, OP_REG, OP_STORE, asm, b_type, i_type, j_type, r_type,
    rv32gc, rv32i, rv64gc, s_type,
};

// ══════════════════════════════════════════════════════════
// 1. Integer computation
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::nop(0x0000_0013, "nop")]
#[case::li(0x00a0_0513, "li a0,10")]
#[case::li_negative(0xfff0_0513, "li a0,-1")]
#[case::mv(0x0005_8513, "mv a0,a1")]
#[case::addi(0xff01_0113, "addi sp,sp,-16")]
#[case::not(0xfff5_c513, "not a0,a1")]
#[case::xori(0x0055_c513, "xori a0,a1,5")]
#[case::sltiu_min(0x8005_b513, "sltiu a0,a1,-2048")]
#[case::neg(0x4060_02b3, "neg t0,t1")]
#[case::sub(0x40c5_8533, "sub a0,a1,a2")]
#[case::negw(0x40b0_053b, "negw a0,a1")]
#[case::add(0x00c5_8533, "add a0,a1,a2")]
#[case::slli(0x0035_1513, "slli a0,a0,0x3")]
#[case::srai_wide(0x43f5_5513, "srai a0,a0,0x3f")]
#[case::slliw(0x01f5_951b, "slliw a0,a1,0x1f")]
#[case::lui(0x1234_5537, "lui a0,0x12345")]
#[case::lui_top(0xffff_f537, "lui a0,0xfffff")]
#[case::auipc(0x0000_0097, "auipc ra,0x0")]
#[case::mul(0x02c5_8533, "mul a0,a1,a2")]
#[case::divuw(0x02c5_d53b, "divuw a0,a1,a2")]
fn integer_instructions(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0, word), expected);
}

#[test]
fn encoded_register_operations() {
    let isa = rv64gc();
    // add s1, s2, s3
    assert_eq!(asm(&isa, 0, r_type(OP_REG, 9, 0, 18, 19, 0)), "add s1,s2,s3");
    // and t3, t4, t5
    assert_eq!(asm(&isa, 0, r_type(OP_REG, 28, 7, 29, 30, 0)), "and t3,t4,t5");
    // andi a0, a1, -256
    assert_eq!(asm(&isa, 0, i_type(OP_IMM, 10, 7, 11, -256)), "andi a0,a1,-256");
    // addi zero, zero, 1 is not a nop
    assert_eq!(asm(&isa, 0, i_type(OP_IMM, 0, 0, 0, 1)), "li zero,1");
}

// ══════════════════════════════════════════════════════════
// 2. Loads and stores
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::ld(0x0081_3503, "ld a0,8(sp)")]
#[case::sd(0x0011_3c23, "sd ra,24(sp)")]
#[case::lw_negative(0xffc4_2503, "lw a0,-4(s0)")]
#[case::lwu(0x0104_6503, "lwu a0,16(s0)")]
#[case::flw(0x0005_2507, "flw fa0,0(a0)")]
#[case::fsd(0x0081_3427, "fsd fs0,8(sp)")]
#[case::sb_negative(0xfeb5_0fa3, "sb a1,-1(a0)")]
fn memory_instructions(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0, word), expected);
}

#[test]
fn encoded_memory_operations() {
    let isa = rv64gc();
    assert_eq!(asm(&isa, 0, i_type(OP_LOAD, 10, 4, 2, 2047)), "lbu a0,2047(sp)");
    assert_eq!(asm(&isa, 0, s_type(OP_STORE, 1, 8, 11, -2048)), "sh a1,-2048(s0)");
}

#[test]
fn rv64_loads_are_illegal_on_rv32() {
    assert_eq!(asm(&rv32gc(), 0, 0x0004_3503), ILLEGAL);
}

// ══════════════════════════════════════════════════════════
// 3. Control transfer
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::beqz(0x0005_0463, "beqz a0,108")]
#[case::bne_backward(0xfeb5_1ee3, "bne a0,a1,fc")]
#[case::bltu_zero(0x0005_6463, "bltu a0,zero,108")]
#[case::bgez(0xf005_50e3, "bgez a0,0")]
#[case::bgtz(0x00a0_4663, "blt zero,a0,10c")]
fn branches_at_0x100(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0x100, word), expected);
}

#[rstest]
#[case::j(0x0100_006f, "j 1010")]
#[case::jal_ra(0x1000_00ef, "jal ra,1100")]
fn jumps_at_0x1000(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0x1000, word), expected);
}

#[test]
fn jump_targets_wrap_at_xlen() {
    assert_eq!(asm(&rv32gc(), 0, 0xff9f_f0ef), "jal ra,fffffff8");
    assert_eq!(asm(&rv64gc(), 0, 0xff9f_f0ef), "jal ra,fffffffffffffff8");
}

#[test]
fn encoded_branch_targets() {
    let isa = rv64gc();
    let beq = b_type(OP_BRANCH, 0, 10, 11, -4096);
    assert_eq!(asm(&isa, 0x2000, beq), "beq a0,a1,1000");
    let jal = j_type(OP_JAL, 5, 0x000f_fffe);
    assert_eq!(asm(&isa, 0, jal), "jal t0,ffffe");
}

#[rstest]
#[case::ret(0x0000_8067, "ret")]
#[case::jr_zero_offset(0x0005_0067, "jalr zero,a0")]
#[case::jalr_ra(0x0005_00e7, "jalr a0")]
#[case::jalr_ra_offset(0x0085_00e7, "jalr 8(a0)")]
#[case::jalr_full(0x0045_82e7, "jalr t0,4(a1)")]
#[case::jalr_zero_offset(0x0040_8067, "jalr zero,4(ra)")]
fn indirect_jumps(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0, word), expected);
}

// ══════════════════════════════════════════════════════════
// 4. System, fences and CSRs
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::ecall(0x0000_0073, "ecall")]
#[case::ebreak(0x0010_0073, "ebreak")]
#[case::mret(0x3020_0073, "mret")]
#[case::sret(0x1020_0073, "sret")]
#[case::uret(0x0020_0073, "uret")]
#[case::wfi(0x1050_0073, "wfi")]
#[case::fence_i(0x0000_100f, "fence.i")]
#[case::fence(0x0ff0_000f, "fence")]
#[case::sfence_bare(0x1200_0073, "sfence.vma")]
#[case::sfence_operands(0x12b5_0073, "sfence.vma a0,a1")]
#[case::hfence_bare(0x2200_0073, "hfence.vvma")]
#[case::hfence_operands(0x6205_0073, "hfence.gvma a0,zero")]
fn system_instructions(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0, word), expected);
}

#[rstest]
#[case::csrr(0x3000_2573, "csrr a0,mstatus")]
#[case::csrw(0x3055_1073, "csrw mtvec,a0")]
#[case::unknown_csr(0x7c05_9573, "csrrw a0,0x7c0,a1")]
#[case::csrc(0x3005_3073, "csrc mstatus,a0")]
#[case::csrrs_full(0x3005_a573, "csrrs a0,mstatus,a1")]
#[case::frflags(0x0010_2573, "frflags a0")]
#[case::fsflags(0x0015_1073, "fsflags a0")]
#[case::fscsr(0x0035_1073, "fscsr a0")]
#[case::fscsr_swap(0x0035_9573, "fscsr a0,a1")]
#[case::frcsr(0x0030_2573, "frcsr a0")]
#[case::fcsr_set_without_destination(0x0030_2073, "csrs fcsr,zero")]
#[case::fflags_set_without_destination(0x0010_2073, "csrs fflags,zero")]
#[case::fsrmi(0x0020_d073, "fsrmi 1")]
#[case::csrsi(0x3004_6073, "csrsi mstatus,8")]
#[case::csrrci(0x3004_7573, "csrrci a0,mstatus,8")]
#[case::cycle(0xc000_2573, "csrr a0,cycle")]
#[case::hpmcounter(0xc030_2573, "csrr a0,hpmcounter3")]
#[case::pmpaddr(0x3b50_2573, "csrr a0,pmpaddr5")]
#[case::padded_hex(0x00f0_2573, "csrr a0,0x00f")]
fn csr_instructions(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0, word), expected);
}

// ══════════════════════════════════════════════════════════
// 5. Atomics and floating point
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::lr(0x1005_a52f, "lr.w a0,(a1)")]
#[case::aq(0x0cc5_a52f, "amoswap.w.aq a0,a2,(a1)")]
#[case::rl(0x1ac5_b52f, "sc.d.rl a0,a2,(a1)")]
#[case::aqrl(0x06c5_b52f, "amoadd.d.aqrl a0,a2,(a1)")]
#[case::lr_aqrl(0x1605_b52f, "lr.d.aqrl a0,(a1)")]
fn atomic_instructions(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0, word), expected);
}

#[rstest]
#[case::fadd_dynamic(0x00c5_f553, "fadd.s fa0,fa1,fa2")]
#[case::fcvt_rtz(0xc005_1553, "fcvt.w.s a0,fa0,rtz")]
#[case::fcvt_dynamic(0xc005_7553, "fcvt.w.s a0,fa0")]
#[case::fcvt_rmm(0xc235_4553, "fcvt.lu.d a0,fa0,rmm")]
#[case::fmv_x_w(0xe005_0553, "fmv.x.w a0,fa0")]
#[case::fclass(0xe205_1553, "fclass.d a0,fa0")]
#[case::feq(0xa2b5_2553, "feq.d a0,fa0,fa1")]
#[case::fcvt_d_l(0xd225_7553, "fcvt.d.l fa0,a0")]
#[case::fmv_d_x(0xf205_0553, "fmv.d.x fa0,a0")]
#[case::fmadd(0x68c5_f543, "fmadd.s fa0,fa1,fa2,fa3")]
#[case::fnmadd(0x6ac5_f54f, "fnmadd.d fa0,fa1,fa2,fa3")]
#[case::fsqrt(0x5a05_f553, "fsqrt.d fa0,fa1")]
#[case::fcvt_s_d(0x4015_f553, "fcvt.s.d fa0,fa1")]
#[case::fsgnj(0x20c5_8553, "fsgnj.s fa0,fa1,fa2")]
fn float_instructions(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0, word), expected);
}

// ══════════════════════════════════════════════════════════
// 6. Illegal words and module selection
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::all_ones(0xffff_ffff)]
#[case::reserved_opcode(0x0000_007f)]
fn unmatched_words_are_illegal(#[case] word: u32) {
    let dis = rv64gc().disassemble(0, word);
    assert!(dis.is_illegal());
    assert_eq!(dis.assembly, ILLEGAL);
    assert_eq!(dis.length, 4);
}

#[test]
fn base_only_isa_rejects_extensions() {
    let isa = rv32i();
    assert_eq!(asm(&isa, 0, 0x02c5_8533), ILLEGAL);
    // RV32I carries the 6-bit shift layout.
    assert_eq!(asm(&isa, 0, 0x0215_1513), "slli a0,a0,0x21");
}

// ══════════════════════════════════════════════════════════
// 7. Base-only scenarios
// ══════════════════════════════════════════════════════════

#[test]
fn rv32i_scenarios() {
    let isa = rv32i();
    assert_eq!(asm(&isa, 0, 0x0000_0013), "nop");
    assert_eq!(asm(&isa, 0, 0x0000_8067), "ret");
    // sub x5, x0, x6
    assert_eq!(asm(&isa, 0, r_type(OP_REG, 5, 0, 0, 6, 0b010_0000)), "neg t0,t1");
    // beq a0, zero, +8
    assert_eq!(asm(&isa, 0x100, b_type(OP_BRANCH, 0, 10, 0, 8)), "beqz a0,108");
    assert_eq!(asm(&isa, 0, 0xffff_ffff), ILLEGAL);
    assert_eq!(asm(&isa, 0, 0x7c05_9573), "csrrw a0,0x7c0,a1");
}

// ══════════════════════════════════════════════════════════
// 8. Listing lines
// ══════════════════════════════════════════════════════════

#[test]
fn listing_line_for_standard_instruction() {
    let dis = rv32gc().disassemble(0, 0x0000_8067);
    assert_eq!(dis.to_string(), "00000000: 00008067 \tret");
}

#[test]
fn listing_line_for_compressed_instruction() {
    let dis = rv32gc().disassemble(0, 0x4505);
    assert_eq!(dis.to_string(), "00000000: 4505     \tc.li a0,1");
}

#[test]
fn listing_line_uses_xlen_address_width() {
    let dis = rv64gc().disassemble(0x8000_0000, 0x0000_0013);
    assert_eq!(dis.to_string(), "0000000080000000: 00000013 \tnop");
}

#[test]
fn listing_address_wraps_at_xlen() {
    let dis = rv32gc().disassemble(0x1_0000_0000, 0x0000_0013);
    assert_eq!(dis.address, 0);
    assert_eq!(dis.to_string(), "00000000: 00000013 \tnop");
    let dis = rv32gc().disassemble(0x1_0000_0100, 0x0005_0463);
    assert_eq!(dis.address, 0x100);
    assert_eq!(dis.assembly, "beqz a0,108");
}

#[test]
fn disassembly_record_fields() {
    let dis = rv64gc().disassemble(0x40, 0x1234_4505);
    assert_eq!(
        dis,
        Disassembly {
            address: 0x40,
            address_bits: 64,
            word: 0x4505,
            length: 2,
            assembly: "c.li a0,1".to_string(),
        }
    );
}

#[test]
fn address_masks() {
    assert_eq!(address_mask(32), 0xffff_ffff);
    assert_eq!(address_mask(64), u64::MAX);
    assert_eq!(address_mask(128), u64::MAX);
}
