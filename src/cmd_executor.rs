//! # Command Executor
//!
//! Parses one console line and runs it against a [`DrawContext`].
//!
//! ## Syntax
//!
//! A command is a comma-separated list whose first field names the
//! operation. Numeric fields that do not parse read as 0.
//!
//! ```text
//! line,10,10,100,50,red,2
//! tekst,20,20,wit,hallo,acorn,2,vet
//! herhaal,3,2
//! ```
//!
//! ## Available Commands
//!
//! | English     | Dutch         | Arguments                                  |
//! |-------------|---------------|--------------------------------------------|
//! | `line`      | `lijn`        | x1, y1, x2, y2, color, thickness           |
//! | `rectangle` | `rechthoek`   | x, y, width, height, color, filled         |
//! | `text`      | `tekst`       | x, y, color, text, font, scale, style      |
//! | `bitmap`    | `bitmap`      | symbol, x, y                               |
//! | `clear`     | `clearscherm` | color                                      |
//! | `wait`      | `wacht`       | milliseconds                               |
//! | `repeat`    | `herhaal`     | count, times                               |
//! | `circle`    | `cirkel`      | x, y, radius, color                        |
//! | `polygon`   | `figuur`      | x1, y1, ... x5, y5, color                  |
//! | `tower`     | `toren`       | x, y, size, color1, color2                 |
//! | `setpixel`  | `setPixel`    | x, y, color                                |
//! | `help`      |               |                                            |
//!
//! ## Architecture
//!
//! Commands return `CommandResult`:
//! - `Ok`: drawn (or waited, or replayed); nothing to print
//! - `Output(String)`: text to display
//! - `Rejected(Diagnostics)`: validation failed; displays one
//!   `Found error: NAME` line per failing argument
//! - `Unknown(String)`: unrecognized command word
//! - `ArgumentCount { .. }`: too few fields for the command

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use embedded_graphics_core::draw_target::DrawTarget;

use crate::context::DrawContext;
use crate::error::Diagnostics;
use crate::framebuffer::Rgb332;
use crate::history::OpKind;
use crate::serial_println;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Ok,
    Output(String),
    Rejected(Diagnostics),
    Unknown(String),
    ArgumentCount {
        kind: OpKind,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Ok => Ok(()),
            CommandResult::Output(text) => f.write_str(text),
            CommandResult::Rejected(diagnostics) => write!(f, "{}", diagnostics),
            CommandResult::Unknown(word) => write!(f, "Unknown command: {}", word),
            CommandResult::ArgumentCount { kind, expected, found } => write!(
                f,
                "{} expects {} arguments, got {}",
                kind.name(),
                expected,
                found
            ),
        }
    }
}

impl From<Result<(), Diagnostics>> for CommandResult {
    fn from(result: Result<(), Diagnostics>) -> Self {
        match result {
            Ok(()) => CommandResult::Ok,
            Err(diagnostics) => CommandResult::Rejected(diagnostics),
        }
    }
}

/// Operation named by the first field of a command line.
pub fn kind_from_word(word: &str) -> Option<OpKind> {
    let kind = match word {
        "line" | "lijn" => OpKind::Line,
        "rectangle" | "rechthoek" => OpKind::Rectangle,
        "text" | "tekst" => OpKind::Text,
        "bitmap" => OpKind::Bitmap,
        "clear" | "clearscherm" => OpKind::Clear,
        "wait" | "wacht" => OpKind::Wait,
        "repeat" | "herhaal" => OpKind::Repeat,
        "circle" | "cirkel" => OpKind::Circle,
        "polygon" | "figuur" => OpKind::Polygon,
        "tower" | "toren" => OpKind::Tower,
        "setpixel" | "setPixel" => OpKind::SetPixel,
        _ => return None,
    };
    Some(kind)
}

/// Leading optional sign and digits of `field`; 0 when there are none.
fn atoi(field: &str) -> i32 {
    let field = field.trim();
    let (negative, digits) = match field.as_bytes().first() {
        Some(b'-') => (true, &field[1..]),
        Some(b'+') => (false, &field[1..]),
        _ => (false, field),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, d| acc.wrapping_mul(10).wrapping_add(i32::from(d - b'0')));
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

struct Args<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Args<'a> {
    fn int(&self, i: usize) -> i32 {
        self.fields.get(i).map_or(0, |f| atoi(f))
    }

    fn word(&self, i: usize) -> &'a str {
        self.fields.get(i).copied().unwrap_or("")
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn execute<D>(ctx: &mut DrawContext, target: &mut D, input: &str) -> CommandResult
    where
        D: DrawTarget<Color = Rgb332>,
    {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return CommandResult::Ok;
        }

        let mut parts = trimmed.split(',').map(str::trim);
        let word = parts.next().unwrap_or("");
        if word == "help" {
            return Self::help();
        }

        let Some(kind) = kind_from_word(word) else {
            serial_println!("console: unknown command {:?}", word);
            return CommandResult::Unknown(String::from(word));
        };

        let args = Args { fields: parts.collect() };
        let expected = kind.channel_count();
        if args.fields.len() < expected {
            serial_println!("console: {} needs {} arguments", kind.name(), expected);
            return CommandResult::ArgumentCount {
                kind,
                expected,
                found: args.fields.len(),
            };
        }

        Self::dispatch(ctx, target, kind, &args).into()
    }

    fn dispatch<D>(ctx: &mut DrawContext, target: &mut D, kind: OpKind, a: &Args<'_>) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        match kind {
            OpKind::Line => ctx.line(target, a.int(0), a.int(1), a.int(2), a.int(3), a.word(4), a.int(5)),
            OpKind::Rectangle => {
                ctx.rectangle(target, a.int(0), a.int(1), a.int(2), a.int(3), a.word(4), a.int(5))
            }
            OpKind::Text => ctx.text(
                target,
                a.int(0),
                a.int(1),
                a.word(2),
                a.word(3),
                a.word(4),
                a.int(5),
                a.word(6),
            ),
            OpKind::Bitmap => ctx.bitmap(target, a.int(0), a.int(1), a.int(2)),
            OpKind::Clear => ctx.clear(target, a.word(0)),
            OpKind::Wait => ctx.wait(a.int(0)),
            OpKind::Repeat => ctx.replay(target, a.int(0), a.int(1)),
            OpKind::Circle => ctx.circle(target, a.int(0), a.int(1), a.int(2), a.word(3)),
            OpKind::Polygon => {
                let points = core::array::from_fn(|i| (a.int(2 * i), a.int(2 * i + 1)));
                ctx.polygon(target, points, a.word(10))
            }
            OpKind::Tower => ctx.tower(target, a.int(0), a.int(1), a.int(2), a.word(3), a.word(4)),
            OpKind::SetPixel => ctx.set_pixel(target, a.int(0), a.int(1), a.word(2)),
            OpKind::Unknown => Ok(()),
        }
    }

    fn help() -> CommandResult {
        let help_text = "Available Commands:\n  \
            line,x1,y1,x2,y2,color,thickness\n  \
            rectangle,x,y,width,height,color,filled\n  \
            text,x,y,color,text,font,scale,style\n  \
            bitmap,symbol,x,y\n  \
            clear,color\n  \
            wait,ms\n  \
            repeat,count,times\n  \
            circle,x,y,radius,color\n  \
            polygon,x1,y1,x2,y2,x3,y3,x4,y4,x5,y5,color\n  \
            tower,x,y,size,color1,color2\n  \
            setpixel,x,y,color";
        CommandResult::Output(String::from(help_text))
    }
}
