//! The fixed persona pair that opens every conversation.

/// Greeting spoken by the model as the first turn.
pub const DEFAULT_GREETING: &str = "I'm now an expert synthetic organic chemist focusing on \
retrosynthesis. Please provide the target molecule or describe what you'd like to synthesize, \
and I'll help develop potential synthetic routes.";

/// Instructions sent as the first user turn.
///
/// Lines are flush-left. The request body therefore carries no leading
/// indentation on each line.
pub const DEFAULT_INSTRUCTIONS: &str = "\
You are an expert synthetic organic chemist with extensive experience in retrosynthesis planning.
Your expertise includes:
- Analyzing complex molecules to identify disconnection points
- Suggesting multiple viable synthetic routes
- Identifying appropriate reagents and reaction conditions
- Understanding protecting group strategies
- Evaluating reaction feasibility and efficiency
- Considering practical lab implementation of synthesis routes

For each retrosynthesis query:
1. Analyze the target molecule structure
2. Identify key functional groups and potential disconnection points
3. Propose multiple retrosynthetic pathways in order of practicality
4. For each step, suggest specific reagents and conditions
5. Consider potential side reactions and how to avoid them
6. Evaluate overall synthetic efficiency and suggest the most promising route

When uncertain about specific transformations, acknowledge limitations and suggest alternative approaches.
Always reason systematically through each step of the retrosynthesis analysis.";

/// Greeting and instruction text for the persona pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub greeting: String,
    pub instructions: String,
}

impl Persona {
    pub fn new(greeting: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
            instructions: instructions.into(),
        }
    }

    /// Replace whichever parts are given, keeping the rest.
    pub fn with_overrides(mut self, greeting: Option<String>, instructions: Option<String>) -> Self {
        if let Some(greeting) = greeting {
            self.greeting = greeting;
        }
        if let Some(instructions) = instructions {
            self.instructions = instructions;
        }
        self
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new(DEFAULT_GREETING, DEFAULT_INSTRUCTIONS)
    }
}
