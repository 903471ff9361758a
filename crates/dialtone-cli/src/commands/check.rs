use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use dialtone_core::rules::validate;
use dialtone_core::Validation;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CheckReportDto {
    input: String,
    #[serde(flatten)]
    validation: Validation,
}

pub fn check_numbers(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let reports: Vec<CheckReportDto> = args
        .numbers
        .iter()
        .map(|raw| CheckReportDto {
            input: raw.clone(),
            validation: validate(raw),
        })
        .collect();

    let invalid = reports
        .iter()
        .filter(|report| !report.validation.is_valid)
        .count();

    if ctx.json {
        print_json(&reports)?;
    } else {
        for report in &reports {
            if let Some(display) = &report.validation.display_format {
                println!("{}: valid {}", report.input, display);
            } else {
                let reason = report.validation.error.as_deref().unwrap_or("invalid");
                println!("{}: invalid ({})", report.input, reason);
            }
        }
    }

    if invalid > 0 {
        return Err(invalid_input(format!(
            "{} of {} numbers failed validation",
            invalid,
            reports.len()
        )));
    }
    Ok(())
}
