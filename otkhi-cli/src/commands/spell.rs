//! Spell command implementation

use anyhow::Result;
use clap::Args;

use otkhi_engine::{ChainIterator, NumeralModel};

/// Arguments for the spell command
#[derive(Debug, Args)]
pub struct SpellArgs {
    /// The number to spell out
    pub number: u64,

    /// Join name groups with a bare space instead of ", "
    #[arg(long)]
    pub no_comma: bool,

    /// Keep the word for "one" before magnitude suffixes
    #[arg(long)]
    pub keep_ones: bool,
}

impl SpellArgs {
    /// Execute the spell command
    pub fn execute(&self) -> Result<()> {
        let separator = if self.no_comma { " " } else { ", " };
        let model = NumeralModel::standard();
        let name = model.spell_out(self.number, separator, !self.keep_ones);
        println!("{}: {} ({})", self.number, name, name.chars().count());

        let iterator = ChainIterator::new(&model, separator.chars().count() as u32);
        let chain = iterator.iterate(self.number);
        let rendered: Vec<String> = chain.values().iter().map(u64::to_string).collect();
        println!("chain ({}): {}", chain.len(), rendered.join(" -> "));
        Ok(())
    }
}
