//! Cyclic progress indicator for the polling loop.
//!
//! Purely cosmetic: the wheel carries no semantic weight and never
//! influences termination.

use colored::Colorize;
use std::io::Write;

/// A one-line bar that grows by one unit per tick and resets every cycle.
pub struct ProgressWheel {
    count: u32,
    cycle: u32,
    started: bool,
}

impl ProgressWheel {
    pub fn new(cycle: u32) -> Self {
        ProgressWheel {
            count: 0,
            cycle,
            started: false,
        }
    }

    /// Emit one progress unit, resetting the line after a full cycle.
    pub fn advance(&mut self) {
        if !self.started {
            print!("{} ", "Running Validation...".cyan());
            self.started = true;
        }
        self.count += 1;
        if self.count >= self.cycle {
            // Wipe the bar and start a fresh cycle on the same line.
            let banner = "Running Validation...".cyan();
            let blank = " ".repeat(self.cycle as usize);
            print!("\r{banner} {blank}\r{banner} ");
            self.count = 0;
        } else {
            print!("{}", "=".green());
        }
        let _ = std::io::stdout().flush();
    }

    /// Terminate the progress line.
    pub fn finish(&mut self) {
        if self.started {
            println!();
            let _ = std::io::stdout().flush();
        }
    }
}
