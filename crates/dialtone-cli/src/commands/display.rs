use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use dialtone_core::MobileNumber;

#[derive(Debug, Args)]
pub struct DisplayArgs {
    pub number: String,
}

pub fn display_number(ctx: &Context<'_>, args: DisplayArgs) -> Result<()> {
    let number =
        MobileNumber::parse(&args.number).map_err(|err| invalid_input(err.to_string()))?;

    if ctx.json {
        print_json(&serde_json::json!({
            "input": args.number,
            "display": number.display(),
        }))?;
    } else {
        println!("{}", number.display());
    }
    Ok(())
}
