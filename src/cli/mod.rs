//! CLI mode: flag parsing and one-shot generation.

mod context;
mod flags;
mod parse;
mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode with the given argv.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(msg) => {
            prompts::error(&msg);
            std::process::exit(2);
        }
    };

    let _ = ctx.run();
}
