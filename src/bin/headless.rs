use std::path::PathBuf;
use std::time::{Duration, Instant};

use structopt::StructOpt;

use chip8_vm::emulator::Emulator;

/// Instruction cycles per second; timers tick at the same rate.
const CYCLES_PER_SECOND: u32 = 120;

/// The program options.
#[derive(StructOpt)]
struct Opt {
    /// The program to execute
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
}

/// Run a program with no display and no input, which is mostly useful for
/// watching it execute under `RUST_LOG=trace`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    let path = match opt.input {
        Some(path) => path,
        None => {
            println!("usage: headless <rom>");
            return Ok(());
        }
    };
    log::info!("Executing {:?}", &path);
    let program = std::fs::read(path)?;

    // Load instructions into emulator memory
    let mut emulator = Emulator::new();
    emulator.load(&program);

    // Start execution
    let time_per_cycle = Duration::from_secs(1) / CYCLES_PER_SECOND;
    loop {
        let begin = Instant::now();
        emulator.step()?;
        if let Some(remaining) = time_per_cycle.checked_sub(begin.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}
