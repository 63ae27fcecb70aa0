use codex_network::console::repl;
use codex_network::services::chatbot::ChatbotClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = ChatbotClient::new()?;
    repl::run(&client).await;

    Ok(())
}
