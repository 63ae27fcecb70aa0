use std::io::{self, Write};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

use crate::console::ui::{self, Color};
use crate::services::chatbot::ChatbotClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Clear,
    Empty,
    Ask(String),
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            Command::Empty
        } else if trimmed.eq_ignore_ascii_case("quit") {
            Command::Quit
        } else if trimmed.eq_ignore_ascii_case("clear") {
            Command::Clear
        } else {
            Command::Ask(trimmed.to_string())
        }
    }
}

fn print_instructions() {
    println!("\n{}", ui::colorize(&"=".repeat(50), Color::Green));
    println!("{}", ui::colorize(" 🤖 ENGLISH CHATBOT INTERFACE", Color::Bold));
    println!("{}", ui::colorize(&"=".repeat(50), Color::Green));
    println!("{}", ui::colorize("\nInstructions:", Color::Yellow));
    println!("{}", ui::colorize("1. Type your question", Color::Cyan));
    println!("{}", ui::colorize("2. Type 'quit' to exit", Color::Cyan));
    println!("{}", ui::colorize("3. Type 'clear' to clear screen", Color::Cyan));
    println!("{}", ui::colorize(&format!("\n{}", "─".repeat(50)), Color::Magenta));
}

fn print_farewell() {
    println!("\n{}", ui::colorize(&"✨".repeat(25), Color::Yellow));
    println!("{}", ui::colorize(" Thank you for using CodeX_Network!", Color::Bold));
    println!("{}", ui::colorize(" Goodbye! 👋", Color::Cyan));
    println!("{}", ui::colorize(&format!("{}\n", "✨".repeat(25)), Color::Yellow));
}

async fn print_response(reply: &str) {
    println!("\n{}", ui::colorize(&"═".repeat(50), Color::Blue));
    println!("{}", ui::colorize("🤖 CHATBOT RESPONSE:", Color::Bold));
    println!("{}", ui::colorize(&"─".repeat(50), Color::Blue));
    ui::animate_text(&ui::colorize(reply, Color::White), Duration::from_millis(5)).await;
    println!("{}", ui::colorize(&"═".repeat(50), Color::Blue));
    println!("{}", ui::colorize("\n💡 Ready for next question...", Color::Magenta));
}

/// Interactive loop. One failed query never ends the session; only `quit`,
/// end of input, or Ctrl-C do.
pub async fn run(client: &ChatbotClient) {
    ui::print_intro().await;
    tokio::time::sleep(Duration::from_millis(500)).await;
    ui::clear_screen();
    ui::print_logo();
    tokio::time::sleep(Duration::from_secs(1)).await;
    print_instructions();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", ui::colorize("\n🔷 Your Question: ", Color::Green));
        let _ = io::stdout().flush();

        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = signal::ctrl_c() => {
                println!("{}", ui::colorize("\n\n⚠️ Interrupted by user", Color::Red));
                break;
            }
        };

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) | Err(_) => break,
        };

        match Command::parse(&line) {
            Command::Quit => {
                print_farewell();
                break;
            }
            Command::Clear => {
                ui::clear_screen();
                ui::print_logo();
            }
            Command::Empty => {
                println!("{}", ui::colorize("⚠️ Please enter a valid question.", Color::Red));
            }
            Command::Ask(question) => {
                ui::loading_animation("Processing your request", Duration::from_millis(1500))
                    .await;

                let reply = match client.ask(&question).await {
                    Ok(content) => content,
                    Err(e) => e.to_string(),
                };

                print_response(&reply).await;
            }
        }
    }
}
