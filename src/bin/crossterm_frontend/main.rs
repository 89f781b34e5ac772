use std::path::PathBuf;
use std::time::{Duration, Instant};

use structopt::StructOpt;

use chip8_vm::emulator::Emulator;

mod crossterm_io;
mod key_manager;

use crossterm::event::KeyCode;
use crossterm_io::{key_to_nibble, HeldKeys, TerminalScreen};
use key_manager::KeyManager;

/// Instruction cycles per second; timers tick at the same rate.
const CYCLES_PER_SECOND: u32 = 120;

/// The program options.
#[derive(StructOpt)]
struct Opt {
    /// The program to execute
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    let program = match opt.input {
        Some(path) => {
            log::info!("Executing {:?}", &path);
            std::fs::read(path)?
        }
        None => {
            println!("usage: crossterm_frontend <rom>");
            return Ok(());
        }
    };

    // Load instructions into emulator memory
    let mut emulator = Emulator::new();
    emulator.load(&program);

    let key_manager = KeyManager::new();
    let mut held_keys = HeldKeys::new();
    let mut screen = TerminalScreen::new()?;

    // Start execution
    let time_per_cycle = Duration::from_secs(1) / CYCLES_PER_SECOND;
    'running: loop {
        let begin = Instant::now();

        // Rewrite the keypad from fresh key events; `q` quits
        for key in key_manager.drain() {
            if key == KeyCode::Char('q') {
                break 'running;
            }
            if let KeyCode::Char(c) = key {
                if let Some(nibble) = key_to_nibble(c) {
                    held_keys.press(nibble);
                }
            }
        }
        for key in 0..16 {
            emulator.set_key(key, held_keys.is_down(key));
        }

        if let Err(fault) = emulator.step() {
            log::error!("{}", fault);
            break;
        }

        // Hand the renderer this cycle's framebuffer snapshot
        screen.render(emulator.framebuffer())?;

        // Sleep off the rest of this cycle's time slice
        if let Some(remaining) = time_per_cycle.checked_sub(begin.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    Ok(())
}
