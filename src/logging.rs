//! # Logging
//!
//! Line-oriented diagnostics in the style of a kernel serial console.
//!
//! `serial_println!` formats a line and hands it to the installed sink. With
//! no sink installed the macro does nothing, so the drawing core stays silent
//! on targets without a console.
//!
//! ## Sinks
//!
//! - [`install_sink`]: any `fn(fmt::Arguments)`, used by hosts and tests
//! - [`init_serial`] (feature `serial`): COM1 through `uart_16550`

use core::fmt;
use spin::Mutex;

pub type Sink = fn(fmt::Arguments<'_>);

static SINK: Mutex<Option<Sink>> = Mutex::new(None);

#[macro_export]
macro_rules! serial_println {
    ($($arg:tt)*) => {{
        $crate::logging::emit(core::format_args!($($arg)*));
    }};
}

pub fn install_sink(sink: Sink) {
    *SINK.lock() = Some(sink);
}

pub fn remove_sink() {
    *SINK.lock() = None;
}

#[doc(hidden)]
pub fn emit(args: fmt::Arguments<'_>) {
    // Copy the pointer out so a sink may log without deadlocking.
    let sink = *SINK.lock();
    if let Some(sink) = sink {
        sink(args);
    }
}

#[cfg(feature = "serial")]
mod serial {
    use core::fmt::{self, Write};
    use spin::Mutex;
    use uart_16550::SerialPort;

    static SERIAL: Mutex<SerialPort> = Mutex::new(unsafe { SerialPort::new(0x3F8) });

    pub fn init() {
        SERIAL.lock().init();
        super::install_sink(write_line);
    }

    fn write_line(args: fmt::Arguments<'_>) {
        let mut serial = SERIAL.lock();
        let _ = serial.write_fmt(args);
        let _ = serial.write_str("\n");
    }
}

/// Route `serial_println!` to COM1.
#[cfg(feature = "serial")]
pub fn init_serial() {
    serial::init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

    fn capture(args: fmt::Arguments<'_>) {
        LINES.lock().push(args.to_string());
    }

    #[test]
    fn lines_reach_the_installed_sink() {
        install_sink(capture);
        crate::serial_println!("evicted {} ({} slots)", "circle", 5);
        remove_sink();
        crate::serial_println!("dropped");

        let lines = LINES.lock();
        assert!(lines.iter().any(|l| l == "evicted circle (5 slots)"));
        assert!(!lines.iter().any(|l| l == "dropped"));
    }
}
