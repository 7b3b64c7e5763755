//! Welcome banner printed before the first prompt.

use console::style;

pub fn print_welcome_banner(model: &str) {
    println!(
        "{}",
        style("Welcome to Gemini Retrosynthesis Assistant!").green()
    );
    println!(
        "{}",
        style("I'm an expert synthetic chemist who can help design retrosynthetic pathways.")
            .green()
    );
    println!(
        "{}",
        style(
            "Describe your target molecule or provide a SMILES string, \
             and I'll suggest synthesis routes."
        )
        .green()
    );
    println!("{}", style(format!("Model: {model}")).dim());
    println!(
        "{}",
        style("Type 'exit' or 'quit' to end the conversation.").yellow()
    );
    println!(
        "{}",
        style("Type '/clear' to start a new conversation while preserving the chemist context.")
            .yellow()
    );
}
