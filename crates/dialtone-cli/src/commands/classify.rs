use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use dialtone_core::{MobileNumber, Operator};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    pub number: String,
}

#[derive(Debug, Serialize)]
struct ClassificationDto {
    number: String,
    operator: Operator,
    region: String,
}

pub fn classify_number(ctx: &Context<'_>, args: ClassifyArgs) -> Result<()> {
    let number =
        MobileNumber::parse(&args.number).map_err(|err| invalid_input(err.to_string()))?;
    let book = &ctx.config.prefix_book;
    let item = ClassificationDto {
        number: number.as_str().to_string(),
        operator: book.operator_for(&number),
        region: book.region_for(&number).to_string(),
    };

    if ctx.json {
        print_json(&item)?;
    } else {
        println!("{} {} ({})", item.number, item.operator.as_str(), item.region);
    }
    Ok(())
}
