use mos6502_core::Cpu;
use std::env;
use std::fs;

fn main() {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .expect("usage: mos6502-core <program.bin> [cycles]");
    let cycles: u32 = args
        .next()
        .map(|s| s.parse().expect("cycles must be a non-negative integer"))
        .unwrap_or(1_000_000);

    let bytes = fs::read(&path).expect("failed to read program file");

    let mut cpu = Cpu::new();
    cpu.reset();
    let load_addr = cpu.load_program(&bytes);
    cpu.reset_to(load_addr);

    println!("loaded {} bytes at ${load_addr:04X}", bytes.len());

    match cpu.execute(cycles) {
        Ok(used) => println!("ran {used} cycles"),
        Err(e) => println!("stopped: {e}"),
    }

    println!(
        "A={:#04x} X={:#04x} Y={:#04x} SP={:#04x} PC={:#06x} status={:#04x}",
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.pc(),
        cpu.status()
    );
}
