/*!

A CHIP-8 virtual machine as specified at https://en.wikipedia.org/wiki/CHIP-8.

# Crossterm Frontend

If you want to run an actual CHIP-8 program, there is a ready-to-use terminal
frontend you can start with `cargo run --release --bin crossterm_frontend -- <rom>`.
The keys 0-9 and a-f map to the CHIP-8 keypad, and `q` quits.
Which keys a program reacts to depends on the program.

# Library

If you are not interested in handling input or output,
`Emulator::new()` gives you a machine to work with directly.

The main way of running a program is to load its bytes at 0x200 and step:

```rust
use chip8_vm::emulator::Emulator;

let mut emulator = Emulator::new();

// Load a program at address 0x200.
let clear_display = [0x00, 0xE0];
emulator.load(&clear_display);
emulator.step().unwrap(); // Will now clear the framebuffer
```

Alternatively, you can experiment by executing instructions manually.

```rust
use chip8_vm::emulator::Emulator;
use chip8_vm::emulator::instruction::{Instruction, Reg, Const, Addr};

let mut emulator = Emulator::new();

// Execute instructions manually
emulator.execute_single(Instruction::ClearScreen).unwrap();

// Or many sequentially
emulator.execute_many(&[
    Instruction::Goto(Addr(0x250)),
    Instruction::SetRegToConst(Reg(0xA), Const(35)),
    Instruction::SetRegToReg(Reg(0xB), Reg(0xA)),
]).unwrap();
```

## Custom input and output

The machine itself carries the keypad and the framebuffer. An input
collaborator writes key state with `Emulator::set_key` between steps, and a
rendering collaborator reads `Emulator::framebuffer` on its own cadence.
See `src/bin/crossterm_frontend` for a complete frontend built this way.
*/

pub mod emulator;
pub mod util;
