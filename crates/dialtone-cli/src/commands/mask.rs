use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use dialtone_core::rules::mask;

#[derive(Debug, Args)]
pub struct MaskArgs {
    pub number: String,
    /// How many trailing digits stay visible (defaults to the configured value)
    #[arg(long)]
    pub visible: Option<usize>,
}

pub fn mask_number(ctx: &Context<'_>, args: MaskArgs) -> Result<()> {
    let visible = args.visible.unwrap_or(ctx.config.mask_visible_digits);
    // invalid input passes through unmasked
    let masked = mask(&args.number, visible);

    if ctx.json {
        print_json(&serde_json::json!({
            "input": args.number,
            "masked": masked,
        }))?;
    } else {
        println!("{}", masked);
    }
    Ok(())
}
