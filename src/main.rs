use std::env;
use std::error::Error;
use std::fs::File;
use std::process;

use vip8::display::{Display, MonoTermDisplay};
use vip8::input::{Input, StdinInput};
use vip8::interpreter::{Chip8Interpreter, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vip8::sound::{Mute, Sound};

/// how often the screen refreshes
const FRAME_RATE: f64 = 60.0;

/// machine cycles per second unless overridden on the command line
const DEFAULT_CYCLE_RATE: u32 = 540;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args();
    let name = args.next().unwrap_or_else(|| "vip8".into());
    let rom = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: {} <rom> [cycles-per-second]", name);
            process::exit(2);
        }
    };
    let cycle_rate: u32 = match args.next() {
        Some(rate) => rate.parse()?,
        None => DEFAULT_CYCLE_RATE,
    };
    let cycles_per_frame = (cycle_rate as f64 / FRAME_RATE).max(1.0) as u32;

    // load before touching the terminal so a bad path fails cleanly
    let mut interpreter = Chip8Interpreter::new();
    interpreter.load_program(&mut File::open(&rom)?)?;

    let mut display = MonoTermDisplay::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)?;
    let mut input = StdinInput::new();
    let mut sound = Mute::new();

    let mut loop_helper = spin_sleep::LoopHelper::builder().build_with_target_rate(FRAME_RATE);
    display.draw(interpreter.framebuffer())?;

    while !input.quit_requested() {
        loop_helper.loop_start();

        // the key vector reflects whatever was seen on stdin this frame
        interpreter.clear_keys();
        for &key in input.peek_keys()? {
            interpreter.press_key(key);
        }
        input.flush_keys()?;

        let mut redraw = false;
        for _ in 0..cycles_per_frame {
            interpreter.cycle()?;
            redraw |= interpreter.draw_flag();
        }
        if redraw {
            display.draw(interpreter.framebuffer())?;
        }

        if interpreter.sound_active() {
            sound.beep()?;
        } else {
            sound.stop()?;
        }

        loop_helper.loop_sleep();
    }

    // shove some junk on stdout to stop the cli messing up the last frame
    for _ in 0..12 {
        println!();
    }
    Ok(())
}
