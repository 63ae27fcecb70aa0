use std::io::{self, Write};
use std::time::Duration;

use indicatif::ProgressBar;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Bold,
}

impl Color {
    pub fn code(&self) -> &'static str {
        match self {
            Color::Red => "\x1b[91m",
            Color::Green => "\x1b[92m",
            Color::Yellow => "\x1b[93m",
            Color::Blue => "\x1b[94m",
            Color::Magenta => "\x1b[95m",
            Color::Cyan => "\x1b[96m",
            Color::White => "\x1b[97m",
            Color::Bold => "\x1b[1m",
        }
    }
}

pub fn colorize(text: &str, color: Color) -> String {
    format!("{}{}{}", color.code(), text, RESET)
}

pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}

/// Prints `text` one character at a time with a fixed delay between characters.
pub async fn animate_text(text: &str, delay: Duration) {
    for ch in text.chars() {
        print!("{}", ch);
        let _ = io::stdout().flush();
        tokio::time::sleep(delay).await;
    }
    println!();
}

const TITLE: &str = "CodeX_Network";
const BOX_WIDTH: usize = 46;

const BORDER_CYCLE: [Color; 5] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
];

const TITLE_GRADIENT: [Color; 6] = [
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
    Color::White,
    Color::Yellow,
    Color::Green,
];

fn box_top() -> String {
    format!("╔{}╗", "═".repeat(BOX_WIDTH))
}

fn box_side() -> String {
    format!("║{}║", " ".repeat(BOX_WIDTH))
}

fn box_bottom() -> String {
    format!("╚{}╝", "═".repeat(BOX_WIDTH))
}

fn title_padding() -> (usize, usize) {
    let left = (BOX_WIDTH - TITLE.chars().count()) / 2;
    let right = BOX_WIDTH - TITLE.chars().count() - left;
    (left, right)
}

/// Animated intro: three passes over the logo box, each in a different color,
/// with the title typed out character by character.
pub async fn print_intro() {
    for pass in 0..3 {
        clear_screen();

        let border = BORDER_CYCLE[pass % BORDER_CYCLE.len()];
        let title_color = BORDER_CYCLE[(pass + 1) % BORDER_CYCLE.len()];
        let (left, right) = title_padding();

        println!("{}", colorize(&box_top(), border));
        println!("{}", colorize(&box_side(), border));

        print!("{}", colorize(&format!("║{}", " ".repeat(left)), border));
        for ch in TITLE.chars() {
            print!("{}", colorize(&ch.to_string(), title_color));
            let _ = io::stdout().flush();
            tokio::time::sleep(Duration::from_millis(30)).await;
        }
        println!("{}", colorize(&format!("{}║", " ".repeat(right)), border));

        println!("{}", colorize(&box_side(), border));
        println!("{}", colorize(&box_bottom(), border));

        tokio::time::sleep(Duration::from_millis(200)).await;
    }
}

/// Static logo with a per-character color gradient on the title.
pub fn print_logo() {
    let (left, right) = title_padding();

    println!("{}", colorize(&box_top(), Color::Cyan));
    println!("{}", colorize(&box_side(), Color::Cyan));

    print!("{}", colorize(&format!("║{}", " ".repeat(left)), Color::Cyan));
    for (i, ch) in TITLE.chars().enumerate() {
        let color = TITLE_GRADIENT[i % TITLE_GRADIENT.len()];
        print!("{}", colorize(&ch.to_string(), color));
    }
    println!("{}", colorize(&format!("{}║", " ".repeat(right)), Color::Cyan));

    println!("{}", colorize(&box_side(), Color::Cyan));
    println!("{}", colorize(&box_bottom(), Color::Cyan));

    let dots = format!("{}{}", " ".repeat(15), "• ".repeat(10));
    println!("\n{}", colorize(&dots, Color::Magenta));
    println!(
        "{}",
        colorize(
            &format!("{}⚡ AI Chatbot System Activated ⚡", " ".repeat(10)),
            Color::Yellow
        )
    );
    println!("{}", colorize(&dots, Color::Magenta));
}

/// Spinner shown while a request is in flight.
pub async fn loading_animation(message: &str, duration: Duration) {
    let bar = ProgressBar::new_spinner();
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_message(message.to_string());
    tokio::time::sleep(duration).await;
    bar.finish_and_clear();
}
