use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use dialtone_core::testdata::sample_numbers;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(long, default_value_t = 5)]
    pub count: usize,
}

pub fn generate_numbers(ctx: &Context<'_>, args: GenerateArgs) -> Result<()> {
    let numbers = sample_numbers(args.count);

    if ctx.json {
        print_json(&numbers)?;
        return Ok(());
    }

    for number in &numbers {
        println!("{}", number);
    }
    Ok(())
}
