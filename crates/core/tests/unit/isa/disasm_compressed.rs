//! Formatter Unit Tests (16-bit).
//!
//! Compressed instructions keep their `c.` mnemonics; only `c.nop` and
//! `c.jr ra` are rewritten.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvdis_core::isa::disasm::ILLEGAL;

use crate::common::{asm, cb_branch, ci_type, cj_type, rv32gc, rv64gc};

#[rstest]
#[case::all_zero(0x0000, ILLEGAL)]
#[case::nop(0x0001, "nop")]
#[case::li(0x4505, "c.li a0,1")]
#[case::addi_negative(0x157d, "c.addi a0,a0,-1")]
#[case::mv(0x852e, "c.mv a0,a1")]
#[case::add(0x952e, "c.add a0,a0,a1")]
#[case::ret(0x8082, "ret")]
#[case::jr(0x8502, "c.jr a0")]
#[case::jalr(0x9502, "c.jalr a0")]
#[case::ebreak(0x9002, "c.ebreak")]
#[case::addi16sp(0x713d, "c.addi16sp sp,sp,-32")]
#[case::addi4spn(0x0808, "c.addi4spn a0,sp,16")]
#[case::lui(0x6505, "c.lui a0,0x1")]
#[case::lui_negative(0x757d, "c.lui a0,0xfffff")]
#[case::srli(0x8105, "c.srli a0,a0,0x1")]
#[case::srai_wide(0x9501, "c.srai a0,a0,0x20")]
#[case::andi(0x997d, "c.andi a0,a0,-1")]
#[case::slli(0x0512, "c.slli a0,a0,0x4")]
#[case::sub(0x8d0d, "c.sub a0,a0,a1")]
#[case::and(0x8d6d, "c.and a0,a0,a1")]
#[case::subw(0x9d0d, "c.subw a0,a0,a1")]
#[case::addw(0x9d2d, "c.addw a0,a0,a1")]
#[case::addiw(0x2505, "c.addiw a0,a0,1")]
fn rv64_register_forms(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0, word), expected);
}

#[rstest]
#[case::lw(0x41c8, "c.lw a0,4(a1)")]
#[case::lw_high_offset(0x41a8, "c.lw a0,64(a1)")]
#[case::sd(0xe588, "c.sd a0,8(a1)")]
#[case::ld(0x65e8, "c.ld a0,200(a1)")]
#[case::fld(0x2588, "c.fld fa0,8(a1)")]
#[case::fsd(0xadc0, "c.fsd fs0,152(a1)")]
#[case::ldsp(0x60a2, "c.ldsp ra,8(sp)")]
#[case::ldsp_high_offset(0x70be, "c.ldsp ra,488(sp)")]
#[case::sdsp(0xe406, "c.sdsp ra,8(sp)")]
#[case::fldsp(0x2442, "c.fldsp fs0,16(sp)")]
#[case::fsdsp(0xa822, "c.fsdsp fs0,16(sp)")]
fn rv64_memory_forms(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0, word), expected);
}

#[rstest]
#[case::lwsp(0x4512, "c.lwsp a0,4(sp)")]
#[case::lwsp_high_offset(0x557e, "c.lwsp a0,252(sp)")]
#[case::swsp(0xc606, "c.swsp ra,12(sp)")]
#[case::flwsp(0x6512, "c.flwsp fa0,4(sp)")]
#[case::fswsp(0xe42a, "c.fswsp fa0,8(sp)")]
#[case::flw(0x61c8, "c.flw fa0,4(a1)")]
#[case::addw_is_rv64_only(0x9d2d, ILLEGAL)]
fn rv32_forms(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv32gc(), 0, word), expected);
}

#[rstest]
#[case::forward(0xa011, "c.j 104")]
#[case::backward(0xbffd, "c.j fe")]
#[case::wrap_below_zero(0xb001, "c.j fffffffffffff900")]
#[case::beqz(0xc111, "c.beqz a0,104")]
#[case::bnez_backward(0xfdfd, "c.bnez a1,fe")]
#[case::bnez_to_zero(0xf181, "c.bnez a1,0")]
fn rv64_control_transfer_at_0x100(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(asm(&rv64gc(), 0x100, word), expected);
}

#[test]
fn rv32_jal_shares_addiw_encoding() {
    assert_eq!(asm(&rv32gc(), 0x100, 0x2021), "c.jal ra,108");
    assert_eq!(asm(&rv32gc(), 0, 0x2505), "c.jal ra,620");
    assert_eq!(asm(&rv64gc(), 0, 0x2505), "c.addiw a0,a0,1");
}

#[test]
fn encoded_compressed_control_transfer() {
    let isa = rv64gc();
    assert_eq!(asm(&isa, 0x800, cj_type(0b101, -2048)), "c.j 0");
    assert_eq!(asm(&isa, 0, cj_type(0b101, 2046)), "c.j 7fe");
    assert_eq!(asm(&isa, 0x200, cb_branch(0b110, 0, -256)), "c.beqz s0,100");
    assert_eq!(asm(&isa, 0, cb_branch(0b111, 7, 254)), "c.bnez a5,fe");
}

#[test]
fn encoded_compressed_immediates() {
    let isa = rv64gc();
    assert_eq!(asm(&isa, 0, ci_type(0b010, 10, -32, 0b01)), "c.li a0,-32");
    assert_eq!(asm(&isa, 0, ci_type(0b010, 10, 31, 0b01)), "c.li a0,31");
    assert_eq!(asm(&isa, 0, ci_type(0b000, 5, -7, 0b01)), "c.addi t0,t0,-7");
}

#[test]
fn upper_half_is_ignored_for_compressed_words() {
    let isa = rv64gc();
    let dis = isa.disassemble(0, 0xdead_4505);
    assert_eq!(dis.length, 2);
    assert_eq!(dis.word, 0x4505);
    assert_eq!(dis.assembly, "c.li a0,1");
}
