use anyhow::Result;
use dialtone_config::AppConfig;
use serde::Serialize;
use std::io::{self, Write};

pub mod check;
pub mod classify;
pub mod completions;
pub mod display;
pub mod format;
pub mod generate;
pub mod mask;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
