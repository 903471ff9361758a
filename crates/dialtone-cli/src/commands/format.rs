use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use dialtone_core::MobileNumber;

#[derive(Debug, Args)]
pub struct FormatArgs {
    pub number: String,
}

pub fn format_number(ctx: &Context<'_>, args: FormatArgs) -> Result<()> {
    let number =
        MobileNumber::parse(&args.number).map_err(|err| invalid_input(err.to_string()))?;

    if ctx.json {
        print_json(&serde_json::json!({
            "input": args.number,
            "international": number.international(),
        }))?;
    } else {
        println!("{}", number.international());
    }
    Ok(())
}
